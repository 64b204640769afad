use super::landmark_provider::LandmarkProvider;

/// Outcome of polling an in-progress provider initialization.
pub enum LoaderStatus {
    /// Initialization still running.
    Pending,
    /// Initialization finished; ownership of the provider transfers to the
    /// caller. Subsequent polls report `Pending`.
    Ready(Box<dyn LandmarkProvider>),
    /// Initialization failed. Terminal: the session stays in its loading
    /// phase and the failure is only surfaced to the log.
    Failed(String),
}

/// Asynchronous provider initialization, polled once per session tick.
pub trait ProviderLoader: Send {
    fn poll_ready(&mut self) -> LoaderStatus;
}

/// Loader for a provider that needs no asynchronous setup.
///
/// Used by tests and scripted replay, where the "model" is already in hand.
pub struct ReadyLoader {
    provider: Option<Box<dyn LandmarkProvider>>,
}

impl ReadyLoader {
    pub fn new(provider: Box<dyn LandmarkProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }
}

impl ProviderLoader for ReadyLoader {
    fn poll_ready(&mut self) -> LoaderStatus {
        match self.provider.take() {
            Some(provider) => LoaderStatus::Ready(provider),
            None => LoaderStatus::Pending,
        }
    }
}

/// Loader that always fails, for exercising the stuck-loading path.
pub struct FailedLoader {
    reason: String,
}

impl FailedLoader {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ProviderLoader for FailedLoader {
    fn poll_ready(&mut self) -> LoaderStatus {
        LoaderStatus::Failed(self.reason.clone())
    }
}
