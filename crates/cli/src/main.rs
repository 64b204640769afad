mod script;

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;

use wigcam_core::capture::infrastructure::synthetic_capture::SyntheticCapture;
use wigcam_core::overlay::domain::wardrobe::Wardrobe;
use wigcam_core::overlay::infrastructure::image_aspect_probe::probe_descriptor;
use wigcam_core::session::infrastructure::polling_runner::{PollingRunner, SessionCommand};
use wigcam_core::session::session::{Session, SessionConfig, SessionEvent, StalePolicy};
use wigcam_core::session::session_logger::LogSessionLogger;
use wigcam_core::tracking::domain::landmark_provider::LandmarkProvider;
use wigcam_core::tracking::infrastructure::scripted_provider::ScriptedProvider;
use wigcam_core::tracking::infrastructure::threaded_provider_loader::ThreadedProviderLoader;

/// Replays a scripted landmark stream through a wig try-on session and
/// prints the placements a renderer would draw.
#[derive(Parser)]
#[command(name = "wigcam")]
struct Cli {
    /// Detection script JSON: one entry per tick, null for a dropout.
    script: PathBuf,

    /// Overlay image assets, in wardrobe order.
    #[arg(long, value_delimiter = ',', default_values = ["wig.png", "wig2.png"])]
    overlays: Vec<PathBuf>,

    /// Detection ticks to run before shutting down.
    #[arg(long, default_value = "50")]
    ticks: u64,

    /// Tick interval in milliseconds.
    #[arg(long, default_value = "100")]
    interval_ms: u64,

    /// What a zero-detection tick does to the overlay: retain or clear.
    #[arg(long, default_value = "retain")]
    stale_policy: String,

    /// EMA smoothing factor in (0, 1]; omitted = raw placements.
    #[arg(long)]
    smoothing: Option<f64>,

    /// Rendered video element size, WxH.
    #[arg(long, default_value = "640x480")]
    display: String,

    /// Native capture size, WxH.
    #[arg(long, default_value = "640x480")]
    capture: String,

    /// Switch to the next overlay after this many ticks.
    #[arg(long)]
    switch_at: Option<u64>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (display_w, display_h) = parse_size(&cli.display)?;
    let (capture_w, capture_h) = parse_size(&cli.capture)?;
    let stale_policy = parse_stale_policy(&cli.stale_policy)?;
    if let Some(alpha) = cli.smoothing {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err("smoothing must be in (0, 1]".into());
        }
    }

    let detections = script::load_script(&cli.script)?;
    log::info!(
        "loaded script with {} tick(s) from {}",
        detections.len(),
        cli.script.display()
    );

    let wardrobe = Wardrobe::new(cli.overlays.iter().map(|p| probe_descriptor(p)).collect())?;

    let loader = ThreadedProviderLoader::spawn(move || {
        Ok(Box::new(ScriptedProvider::new(detections)) as Box<dyn LandmarkProvider>)
    });

    let mut config = SessionConfig::new(display_w, display_h);
    config.stale_policy = stale_policy;
    config.smoothing_alpha = cli.smoothing;

    let session = Session::new(
        Box::new(loader),
        Box::new(SyntheticCapture::new(capture_w, capture_h)),
        wardrobe,
        config,
        Box::new(LogSessionLogger),
    );

    let interval = Duration::from_millis(cli.interval_ms);
    let (runner, events) = PollingRunner::spawn(session, interval);

    let started = Instant::now();
    let deadline = started + interval * cli.ticks as u32;
    let mut switch_due = cli.switch_at.map(|t| started + interval * t as u32);

    loop {
        if let Some(due) = switch_due {
            if Instant::now() >= due {
                runner.send(SessionCommand::NextOverlay);
                switch_due = None;
            }
        }

        let now = Instant::now();
        if now >= deadline {
            break;
        }
        let step = switch_due
            .filter(|due| *due < deadline)
            .unwrap_or(deadline)
            .saturating_duration_since(now);
        match events.recv_timeout(step) {
            Ok(event) => print_event(&event),
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => continue,
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Anything still queued was emitted before the deadline; show it.
    for event in events.try_iter() {
        print_event(&event);
    }

    runner.shutdown()?;
    Ok(())
}

fn print_event(event: &SessionEvent) {
    match event {
        SessionEvent::PhaseChanged(phase) => println!("phase: {phase:?}"),
        SessionEvent::PlacementUpdated(p) => println!(
            "placement: left={:.1} top={:.1} width={:.1} height={:.1}",
            p.left, p.top, p.width, p.height
        ),
        SessionEvent::PlacementCleared => println!("placement: cleared"),
        SessionEvent::OverlaySelected(index) => println!("overlay: {index}"),
    }
}

fn parse_size(value: &str) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    let (w, h) = value
        .split_once('x')
        .ok_or_else(|| format!("invalid size {value:?}, expected WxH"))?;
    Ok((w.parse()?, h.parse()?))
}

fn parse_stale_policy(value: &str) -> Result<StalePolicy, Box<dyn std::error::Error>> {
    match value {
        "retain" => Ok(StalePolicy::Retain),
        "clear" => Ok(StalePolicy::Clear),
        other => Err(format!("unknown stale policy {other:?}, expected retain or clear").into()),
    }
}
