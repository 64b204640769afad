use crate::session::session::SessionPhase;

/// Cross-cutting logger for session lifecycle events.
///
/// Decouples the state machine from specific output mechanisms (stdout,
/// GUI signals, log crate) so callers can observe session behavior without
/// changing the orchestration code.
pub trait SessionLogger: Send {
    /// Report a phase transition.
    fn phase_changed(&mut self, from: SessionPhase, to: SessionPhase);

    /// Record the detection outcome of one tick.
    fn detections(&mut self, frame_index: usize, count: usize);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);
}

/// Silent logger that discards all events.
pub struct NullSessionLogger;

impl SessionLogger for NullSessionLogger {
    fn phase_changed(&mut self, _from: SessionPhase, _to: SessionPhase) {}
    fn detections(&mut self, _frame_index: usize, _count: usize) {}
    fn info(&mut self, _message: &str) {}
}

/// Routes session events through the `log` crate.
///
/// Per-tick detection counts go to `trace` to keep a 10 Hz session from
/// flooding the log at default levels.
pub struct LogSessionLogger;

impl SessionLogger for LogSessionLogger {
    fn phase_changed(&mut self, from: SessionPhase, to: SessionPhase) {
        log::info!("session phase {from:?} -> {to:?}");
    }

    fn detections(&mut self, frame_index: usize, count: usize) {
        log::trace!("frame {frame_index}: {count} face(s)");
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }
}
