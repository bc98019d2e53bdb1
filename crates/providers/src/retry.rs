//! Retry wrapper: bounded re-attempts with a per-attempt timeout.
//!
//! Only errors that [`GeneratorError::is_retryable`] accepts are retried;
//! authentication and client errors return immediately.

use async_trait::async_trait;
use pagewright_core::error::GeneratorError;
use pagewright_core::generator::{GenerationRequest, GenerationResponse, TextGenerator};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// A generator that retries its inner generator on transient failures.
pub struct RetryingGenerator {
    inner: Arc<dyn TextGenerator>,
    max_retries: u32,
    timeout: Duration,
    backoff: Duration,
}

impl RetryingGenerator {
    pub fn new(inner: Arc<dyn TextGenerator>, max_retries: u32, timeout: Duration) -> Self {
        Self {
            inner,
            max_retries,
            timeout,
            backoff: Duration::from_millis(500),
        }
    }

    /// Delay before the second attempt; doubles for each further attempt.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Total attempts including the first.
    pub fn attempts(&self) -> u32 {
        self.max_retries + 1
    }
}

#[async_trait]
impl TextGenerator for RetryingGenerator {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_configured(&self) -> bool {
        self.inner.is_configured()
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GenerationResponse, GeneratorError> {
        let total = self.attempts();
        let mut last_error = GeneratorError::NotConfigured("no attempts made".into());

        for attempt in 0..total {
            if attempt > 0 {
                let delay = self.backoff * 2u32.saturating_pow(attempt - 1);
                info!(
                    generator = %self.inner.name(),
                    attempt = attempt + 1,
                    total,
                    delay_ms = delay.as_millis() as u64,
                    "Retry: trying generator again"
                );
                tokio::time::sleep(delay).await;
            }

            match tokio::time::timeout(self.timeout, self.inner.generate(request.clone())).await {
                Ok(Ok(response)) => return Ok(response),
                Ok(Err(e)) => {
                    warn!(
                        generator = %self.inner.name(),
                        error = %e,
                        "Retry: generator failed"
                    );
                    let retryable = e.is_retryable();
                    last_error = e;
                    if !retryable {
                        break;
                    }
                }
                Err(_) => {
                    warn!(
                        generator = %self.inner.name(),
                        timeout_secs = self.timeout.as_secs(),
                        "Retry: generator timed out"
                    );
                    last_error = GeneratorError::Timeout(format!(
                        "Generator '{}' timed out after {}s",
                        self.inner.name(),
                        self.timeout.as_secs()
                    ));
                }
            }
        }

        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Fails with the given error for the first `failures` calls, then succeeds.
    struct FlakyGenerator {
        error: GeneratorError,
        failures: usize,
        call_count: Mutex<usize>,
    }

    impl FlakyGenerator {
        fn new(error: GeneratorError, failures: usize) -> Self {
            Self {
                error,
                failures,
                call_count: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl TextGenerator for FlakyGenerator {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn generate(
            &self,
            _request: GenerationRequest,
        ) -> std::result::Result<GenerationResponse, GeneratorError> {
            let mut count = self.call_count.lock().unwrap();
            *count += 1;
            if *count <= self.failures {
                return Err(self.error.clone());
            }
            Ok(GenerationResponse {
                text: "success".into(),
                model: "test-model".into(),
                usage: None,
            })
        }
    }

    /// A generator that hangs forever (for timeout testing).
    struct HangingGenerator {
        call_count: Mutex<usize>,
    }

    #[async_trait]
    impl TextGenerator for HangingGenerator {
        fn name(&self) -> &str {
            "hanging"
        }

        async fn generate(
            &self,
            _request: GenerationRequest,
        ) -> std::result::Result<GenerationResponse, GeneratorError> {
            *self.call_count.lock().unwrap() += 1;
            tokio::time::sleep(Duration::from_secs(3600)).await;
            unreachable!()
        }
    }

    fn test_request() -> GenerationRequest {
        GenerationRequest::new("hello")
    }

    fn wrap(inner: Arc<dyn TextGenerator>, retries: u32) -> RetryingGenerator {
        RetryingGenerator::new(inner, retries, Duration::from_secs(5))
            .with_backoff(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn first_attempt_succeeds() {
        let inner = Arc::new(FlakyGenerator::new(GeneratorError::EmptyResponse, 0));
        let generator = wrap(inner.clone(), 2);

        let result = generator.generate(test_request()).await;
        assert_eq!(result.unwrap().text, "success");
        assert_eq!(inner.calls(), 1);
    }

    #[tokio::test]
    async fn retries_on_rate_limit() {
        let inner = Arc::new(FlakyGenerator::new(
            GeneratorError::RateLimited {
                retry_after_secs: 5,
            },
            2,
        ));
        let generator = wrap(inner.clone(), 2);

        assert!(generator.generate(test_request()).await.is_ok());
        assert_eq!(inner.calls(), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let inner = Arc::new(FlakyGenerator::new(
            GeneratorError::ApiError {
                status_code: 500,
                message: "Internal Server Error".into(),
            },
            10,
        ));
        let generator = wrap(inner.clone(), 2);

        match generator.generate(test_request()).await.unwrap_err() {
            GeneratorError::ApiError { status_code, .. } => assert_eq!(status_code, 500),
            other => panic!("Expected ApiError, got: {other:?}"),
        }
        assert_eq!(inner.calls(), 3);
    }

    #[tokio::test]
    async fn auth_failure_is_not_retried() {
        let inner = Arc::new(FlakyGenerator::new(
            GeneratorError::AuthenticationFailed("bad key".into()),
            10,
        ));
        let generator = wrap(inner.clone(), 3);

        assert!(matches!(
            generator.generate(test_request()).await,
            Err(GeneratorError::AuthenticationFailed(_))
        ));
        assert_eq!(inner.calls(), 1);
    }

    #[tokio::test]
    async fn timeout_counts_as_attempt() {
        let inner = Arc::new(HangingGenerator {
            call_count: Mutex::new(0),
        });
        let generator = RetryingGenerator::new(inner.clone(), 1, Duration::from_millis(20))
            .with_backoff(Duration::from_millis(1));

        assert!(matches!(
            generator.generate(test_request()).await,
            Err(GeneratorError::Timeout(_))
        ));
        assert_eq!(*inner.call_count.lock().unwrap(), 2);
    }

    #[test]
    fn attempts_include_first_call() {
        let inner = Arc::new(FlakyGenerator::new(GeneratorError::EmptyResponse, 0));
        let generator = RetryingGenerator::new(inner, 0, Duration::from_secs(1));
        assert_eq!(generator.attempts(), 1);
        assert_eq!(generator.name(), "flaky");
        assert!(generator.is_configured());
    }
}
