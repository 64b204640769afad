use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};

use crate::session::session::{Session, SessionEvent};

/// Default detection cadence: one tick every 100 ms.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    NextOverlay,
    PrevOverlay,
    Shutdown,
}

/// Runs a [`Session`] on a dedicated thread at a fixed cadence.
///
/// Single-slot scheduling: the next tick is only scheduled after the
/// previous `tick` call returns, so at most one detection is ever in
/// flight and a slow provider cannot pile up overlapping calls. The
/// interval is measured from tick start with no catch-up bursts.
///
/// All session state stays owned by the runner thread; callers interact
/// through the command sender and the event receiver only.
pub struct PollingRunner {
    command_tx: Sender<SessionCommand>,
    cancelled: Arc<AtomicBool>,
    handle: JoinHandle<Session>,
}

impl PollingRunner {
    pub fn spawn(session: Session, interval: Duration) -> (Self, Receiver<SessionEvent>) {
        let (command_tx, command_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();

        let handle =
            std::thread::spawn(move || run_loop(session, interval, command_rx, event_tx, flag));

        (
            Self {
                command_tx,
                cancelled,
                handle,
            },
            event_rx,
        )
    }

    pub fn send(&self, command: SessionCommand) {
        let _ = self.command_tx.send(command);
    }

    /// Tears the loop down and returns the session.
    ///
    /// A tick that is still in flight runs to completion, but its events
    /// are discarded — nothing is emitted after shutdown.
    pub fn shutdown(self) -> Result<Session, Box<dyn std::error::Error>> {
        self.cancelled.store(true, Ordering::Relaxed);
        // Wake the loop if it is sleeping between ticks.
        let _ = self.command_tx.send(SessionCommand::Shutdown);
        self.handle
            .join()
            .map_err(|_| "session thread panicked".into())
    }
}

fn run_loop(
    mut session: Session,
    interval: Duration,
    commands: Receiver<SessionCommand>,
    events: Sender<SessionEvent>,
    cancelled: Arc<AtomicBool>,
) -> Session {
    loop {
        if cancelled.load(Ordering::Relaxed) {
            break;
        }
        let started = Instant::now();

        while let Ok(command) = commands.try_recv() {
            handle_command(command, &mut session, &events, &cancelled);
        }
        if cancelled.load(Ordering::Relaxed) {
            break;
        }

        match session.tick() {
            Ok(ticked) => {
                // A result that lands after teardown is stale by definition
                // and must not reach the renderer.
                if cancelled.load(Ordering::Relaxed) {
                    break;
                }
                for event in ticked {
                    if events.send(event).is_err() {
                        return session;
                    }
                }
            }
            Err(e) => log::error!("session tick failed: {e}"),
        }

        wait_for_next_tick(started + interval, &commands, &mut session, &events, &cancelled);
    }
    session
}

/// Sleeps out the remainder of the tick interval while staying responsive
/// to navigation and shutdown commands.
fn wait_for_next_tick(
    deadline: Instant,
    commands: &Receiver<SessionCommand>,
    session: &mut Session,
    events: &Sender<SessionEvent>,
    cancelled: &Arc<AtomicBool>,
) {
    loop {
        if cancelled.load(Ordering::Relaxed) {
            return;
        }
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        match commands.recv_timeout(deadline - now) {
            Ok(command) => handle_command(command, session, events, cancelled),
            Err(RecvTimeoutError::Timeout) => return,
            Err(RecvTimeoutError::Disconnected) => {
                // The controlling side dropped the runner without an
                // explicit shutdown; stop polling.
                cancelled.store(true, Ordering::Relaxed);
                return;
            }
        }
    }
}

fn handle_command(
    command: SessionCommand,
    session: &mut Session,
    events: &Sender<SessionEvent>,
    cancelled: &Arc<AtomicBool>,
) {
    match command {
        SessionCommand::NextOverlay => {
            if let Some(event) = session.select_next() {
                let _ = events.send(event);
            }
        }
        SessionCommand::PrevOverlay => {
            if let Some(event) = session.select_prev() {
                let _ = events.send(event);
            }
        }
        SessionCommand::Shutdown => cancelled.store(true, Ordering::Relaxed),
    }
}
