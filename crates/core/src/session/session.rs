//! Tracking session state machine.
//!
//! Owns every piece of mutable per-session state — phase, latest mesh,
//! wardrobe selection, last emitted placement — on a single thread. The
//! polling cadence lives in the infrastructure runner; this type only knows
//! how to advance by one tick.

use crate::capture::domain::capture_source::CaptureSource;
use crate::overlay::domain::placement::{place, Placement};
use crate::overlay::domain::placement_smoother::PlacementSmoother;
use crate::overlay::domain::wardrobe::Wardrobe;
use crate::session::session_logger::SessionLogger;
use crate::shared::frame::Frame;
use crate::shared::viewport::Viewport;
use crate::tracking::domain::face_mesh::FaceMesh;
use crate::tracking::domain::landmark_provider::LandmarkProvider;
use crate::tracking::domain::provider_loader::{LoaderStatus, ProviderLoader};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Provider initialization pending (or failed — there is no retry and
    /// no separate error phase, only a diagnostic log entry).
    ModelLoading,
    /// Provider ready, waiting for the capture source's first frame.
    AwaitingVideo,
    /// Detecting on every tick.
    Tracking,
}

/// What a zero-detection tick does to the held mesh and placement.
///
/// `Retain` keeps the overlay where it was through brief detection
/// dropouts, untouched — the placement is *not* recomputed from the stale
/// mesh. `Clear` hides the overlay instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StalePolicy {
    #[default]
    Retain,
    Clear,
}

pub struct SessionConfig {
    /// Size the video element is rendered at, in display pixels.
    pub display_width: u32,
    pub display_height: u32,
    pub stale_policy: StalePolicy,
    /// EMA smoothing factor; `None` disables smoothing (raw placements).
    pub smoothing_alpha: Option<f64>,
}

impl SessionConfig {
    pub fn new(display_width: u32, display_height: u32) -> Self {
        Self {
            display_width,
            display_height,
            stale_policy: StalePolicy::default(),
            smoothing_alpha: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    PhaseChanged(SessionPhase),
    PlacementUpdated(Placement),
    PlacementCleared,
    OverlaySelected(usize),
}

pub struct Session {
    phase: SessionPhase,
    loader: Box<dyn ProviderLoader>,
    provider: Option<Box<dyn LandmarkProvider>>,
    capture: Box<dyn CaptureSource>,
    wardrobe: Wardrobe,
    config: SessionConfig,
    logger: Box<dyn SessionLogger>,
    mesh: Option<FaceMesh>,
    smoother: Option<PlacementSmoother>,
    last_placement: Option<Placement>,
    load_failed: bool,
}

impl Session {
    pub fn new(
        loader: Box<dyn ProviderLoader>,
        capture: Box<dyn CaptureSource>,
        wardrobe: Wardrobe,
        config: SessionConfig,
        logger: Box<dyn SessionLogger>,
    ) -> Self {
        let smoother = config.smoothing_alpha.map(PlacementSmoother::new);
        Self {
            phase: SessionPhase::ModelLoading,
            loader,
            provider: None,
            capture,
            wardrobe,
            config,
            logger,
            mesh: None,
            smoother,
            last_placement: None,
            load_failed: false,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn last_placement(&self) -> Option<&Placement> {
        self.last_placement.as_ref()
    }

    pub fn wardrobe(&self) -> &Wardrobe {
        &self.wardrobe
    }

    /// Advances the session by one detection tick.
    ///
    /// Each tick moves through whatever transitions are due — a freshly
    /// loaded provider and an already-live video source go straight to
    /// `Tracking` and detect on the same tick.
    pub fn tick(&mut self) -> Result<Vec<SessionEvent>, Box<dyn std::error::Error>> {
        let mut events = Vec::new();

        if self.phase == SessionPhase::ModelLoading {
            self.poll_loader(&mut events);
            if self.phase == SessionPhase::ModelLoading {
                return Ok(events);
            }
        }

        let Some(frame) = self.capture.current_frame()? else {
            return Ok(events);
        };

        if self.phase == SessionPhase::AwaitingVideo {
            self.set_phase(SessionPhase::Tracking, &mut events);
        }

        self.process_frame(&frame, &mut events)?;
        Ok(events)
    }

    /// Clamped overlay navigation; `None` when already at the high end.
    pub fn select_next(&mut self) -> Option<SessionEvent> {
        self.wardrobe
            .select_next()
            .then(|| SessionEvent::OverlaySelected(self.wardrobe.active_index()))
    }

    /// Clamped overlay navigation; `None` when already at the low end.
    pub fn select_prev(&mut self) -> Option<SessionEvent> {
        self.wardrobe
            .select_prev()
            .then(|| SessionEvent::OverlaySelected(self.wardrobe.active_index()))
    }

    fn poll_loader(&mut self, events: &mut Vec<SessionEvent>) {
        if self.load_failed {
            return;
        }
        match self.loader.poll_ready() {
            LoaderStatus::Ready(provider) => {
                self.provider = Some(provider);
                self.logger.info("landmark provider ready");
                self.set_phase(SessionPhase::AwaitingVideo, events);
            }
            LoaderStatus::Failed(reason) => {
                // No retry: the session sits in ModelLoading from here on,
                // showing its loading indicator.
                log::error!("landmark provider failed to initialize: {reason}");
                self.load_failed = true;
            }
            LoaderStatus::Pending => {}
        }
    }

    fn process_frame(
        &mut self,
        frame: &Frame,
        events: &mut Vec<SessionEvent>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let Some(provider) = self.provider.as_mut() else {
            return Ok(());
        };

        let detections = provider.detect(frame)?;
        self.logger.detections(frame.index(), detections.len());

        match detections.into_iter().next() {
            Some(first) => {
                // Only the first face is tracked; extra detections are
                // ignored rather than rendered.
                self.mesh = Some(first.mesh);
                self.emit_placement(events);
            }
            None => self.apply_stale_policy(events),
        }
        Ok(())
    }

    fn apply_stale_policy(&mut self, events: &mut Vec<SessionEvent>) {
        match self.config.stale_policy {
            // The previous placement stands as-is; it is not recomputed
            // from the stale mesh.
            StalePolicy::Retain => {}
            StalePolicy::Clear => {
                if self.mesh.take().is_some() {
                    self.last_placement = None;
                    if let Some(smoother) = &mut self.smoother {
                        smoother.reset();
                    }
                    events.push(SessionEvent::PlacementCleared);
                }
            }
        }
    }

    fn emit_placement(&mut self, events: &mut Vec<SessionEvent>) {
        let Some(mesh) = &self.mesh else {
            return;
        };
        let Some((capture_w, capture_h)) = self.capture.native_size() else {
            log::debug!("capture reported no native size; skipping placement");
            return;
        };
        let viewport = Viewport::new(
            self.config.display_width,
            self.config.display_height,
            capture_w,
            capture_h,
        );

        match place(mesh, &viewport, self.wardrobe.active().aspect_ratio) {
            Some(raw) => {
                let placement = match &mut self.smoother {
                    Some(smoother) => smoother.smooth(raw),
                    None => raw,
                };
                self.last_placement = Some(placement);
                events.push(SessionEvent::PlacementUpdated(placement));
            }
            None => log::debug!("viewport not renderable; skipping placement"),
        }
    }

    fn set_phase(&mut self, to: SessionPhase, events: &mut Vec<SessionEvent>) {
        self.logger.phase_changed(self.phase, to);
        self.phase = to;
        events.push(SessionEvent::PhaseChanged(to));
    }
}
