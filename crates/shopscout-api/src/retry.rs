// Retry logic with exponential backoff
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Retry configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay_ms: 500,
            max_delay_ms: 10_000,
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Single attempt, no waiting. Handy for tests and `--no-retry` style runs.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }
}

/// Errors that know whether another attempt could help
pub trait RetryableError: std::fmt::Display {
    fn is_retryable(&self) -> bool;
}

/// Execute a function with retry logic
///
/// Uses exponential backoff: if a request fails with something transient
/// (server error, rate limit, dropped connection) we wait progressively
/// longer before trying again. Permanent failures such as a 404 are
/// returned straight away.
pub async fn with_retry<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: RetryableError,
{
    let mut attempt = 0;
    let mut delay_ms = config.initial_delay_ms;

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    debug!("Request succeeded after {} retries", attempt);
                }
                return Ok(result);
            }
            Err(err) => {
                if !err.is_retryable() {
                    return Err(err);
                }

                attempt += 1;

                if attempt > config.max_retries {
                    if config.max_retries > 0 {
                        warn!("Request failed after {} retries: {}", config.max_retries, err);
                    }
                    return Err(err);
                }

                warn!(
                    "Request failed (attempt {}/{}): {}. Retrying in {}ms...",
                    attempt, config.max_retries, err, delay_ms
                );

                sleep(Duration::from_millis(delay_ms)).await;

                delay_ms = ((delay_ms as f64) * config.backoff_multiplier) as u64;
                delay_ms = delay_ms.min(config.max_delay_ms);
            }
        }
    }
}

/// Check if an HTTP status code is retryable
pub fn is_retryable_status(status: reqwest::StatusCode) -> bool {
    // 5xx, 429 and 408 are worth another go
    status.is_server_error()
        || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        || status == reqwest::StatusCode::REQUEST_TIMEOUT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug, PartialEq)]
    enum TestError {
        Transient,
        Permanent,
    }

    impl std::fmt::Display for TestError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self)
        }
    }

    impl RetryableError for TestError {
        fn is_retryable(&self) -> bool {
            matches!(self, TestError::Transient)
        }
    }

    fn fast_config(max_retries: u32) -> RetryConfig {
        RetryConfig {
            max_retries,
            initial_delay_ms: 5,
            max_delay_ms: 20,
            backoff_multiplier: 2.0,
        }
    }

    #[tokio::test]
    async fn test_retry_succeeds_immediately() {
        let call_count = AtomicU32::new(0);

        let result = with_retry(&fast_config(3), || async {
            call_count.fetch_add(1, Ordering::SeqCst);
            Ok::<_, TestError>(42)
        })
        .await;

        assert_eq!(result, Ok(42));
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_succeeds_after_failures() {
        let call_count = AtomicU32::new(0);

        let result = with_retry(&fast_config(3), || async {
            let count = call_count.fetch_add(1, Ordering::SeqCst) + 1;
            if count < 3 {
                Err(TestError::Transient)
            } else {
                Ok(42)
            }
        })
        .await;

        assert_eq!(result, Ok(42));
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_gives_up_after_max_attempts() {
        let call_count = AtomicU32::new(0);

        let result = with_retry(&fast_config(2), || async {
            call_count.fetch_add(1, Ordering::SeqCst);
            Err::<i32, _>(TestError::Transient)
        })
        .await;

        assert_eq!(result, Err(TestError::Transient));
        assert_eq!(call_count.load(Ordering::SeqCst), 3); // Initial attempt + 2 retries
    }

    #[tokio::test]
    async fn test_permanent_errors_are_not_retried() {
        let call_count = AtomicU32::new(0);

        let result = with_retry(&fast_config(5), || async {
            call_count.fetch_add(1, Ordering::SeqCst);
            Err::<i32, _>(TestError::Permanent)
        })
        .await;

        assert_eq!(result, Err(TestError::Permanent));
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_no_retry_config_makes_one_attempt() {
        let call_count = AtomicU32::new(0);

        let result = with_retry(&RetryConfig::none(), || async {
            call_count.fetch_add(1, Ordering::SeqCst);
            Err::<i32, _>(TestError::Transient)
        })
        .await;

        assert!(result.is_err());
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_retryable_status_codes() {
        assert!(is_retryable_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_retryable_status(reqwest::StatusCode::BAD_GATEWAY));
        assert!(is_retryable_status(reqwest::StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_retryable_status(reqwest::StatusCode::TOO_MANY_REQUESTS));

        assert!(!is_retryable_status(reqwest::StatusCode::NOT_FOUND));
        assert!(!is_retryable_status(reqwest::StatusCode::BAD_REQUEST));
        assert!(!is_retryable_status(reqwest::StatusCode::UNAUTHORIZED));
    }
}
