//! Application state shared by every handler

use genloom_core::{GenerationService, ServerConfig};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Semaphore, SemaphorePermit};

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GenerationService>,
    /// Bounds concurrent generation work
    pub request_semaphore: Arc<Semaphore>,
    pub request_timeout_secs: u64,
}

impl AppState {
    pub fn new(service: GenerationService, config: &ServerConfig) -> Self {
        Self {
            service: Arc::new(service),
            request_semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
            request_timeout_secs: config.request_timeout_secs,
        }
    }

    pub async fn acquire_permit(&self) -> Result<SemaphorePermit<'_>, ApiError> {
        self.request_semaphore
            .acquire()
            .await
            .map_err(|_| ApiError::internal("Server is shutting down"))
    }

    /// Run `work` holding a permit, bounded by the request timeout.
    pub async fn run_limited<T, F>(&self, work: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let _permit = self.acquire_permit().await?;
        let timeout = Duration::from_secs(self.request_timeout_secs);
        tokio::time::timeout(timeout, work)
            .await
            .map_err(|_| ApiError::internal("Request timeout"))?
    }
}
