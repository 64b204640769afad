use crossbeam_channel::{bounded, Receiver, TryRecvError};

use crate::tracking::domain::landmark_provider::LandmarkProvider;
use crate::tracking::domain::provider_loader::{LoaderStatus, ProviderLoader};

type InitResult = Result<Box<dyn LandmarkProvider>, Box<dyn std::error::Error + Send + Sync>>;

/// Runs provider initialization on a background thread.
///
/// Model loading can take seconds; the session keeps ticking in its loading
/// phase and picks the provider up from the channel once the thread is done.
pub struct ThreadedProviderLoader {
    result_rx: Receiver<InitResult>,
    done: bool,
}

impl ThreadedProviderLoader {
    pub fn spawn<F>(init: F) -> Self
    where
        F: FnOnce() -> InitResult + Send + 'static,
    {
        let (result_tx, result_rx) = bounded::<InitResult>(1);
        std::thread::spawn(move || {
            // Receiver gone means the session was torn down while loading;
            // the freshly built provider is simply dropped.
            let _ = result_tx.send(init());
        });
        Self {
            result_rx,
            done: false,
        }
    }
}

impl ProviderLoader for ThreadedProviderLoader {
    fn poll_ready(&mut self) -> LoaderStatus {
        if self.done {
            return LoaderStatus::Pending;
        }
        match self.result_rx.try_recv() {
            Ok(Ok(provider)) => {
                self.done = true;
                LoaderStatus::Ready(provider)
            }
            Ok(Err(e)) => {
                self.done = true;
                LoaderStatus::Failed(e.to_string())
            }
            Err(TryRecvError::Empty) => LoaderStatus::Pending,
            Err(TryRecvError::Disconnected) => {
                self.done = true;
                LoaderStatus::Failed("initialization thread exited without a result".into())
            }
        }
    }
}
