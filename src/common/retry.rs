// Named bounded-retry policy: a fixed number of attempts with a fixed delay
// between them. The route guard uses it to materialize user data; any other
// resource-loading boundary can reuse it.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Runs `operation` up to `max_attempts` times, sleeping `delay` between
    /// attempts. The closure receives the 1-based attempt number. Returns the
    /// first success or the last failure.
    pub async fn run<T, E, F, Fut>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let limit = self.max_attempts.max(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if attempt >= limit {
                        return Err(err);
                    }
                    debug!(attempt, limit, "attempt failed, retrying after delay");
                    tokio::time::sleep(self.delay).await;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    // Matches the user-data refresh behavior: three tries, one second apart.
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn returns_first_success() {
        let policy = RetryPolicy::new(3, Duration::from_millis(1));
        let calls = AtomicU32::new(0);
        let result: Result<u32, &str> = policy
            .run(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(7) }
            })
            .await;
        assert_eq!(result, Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn exhausts_attempts_and_returns_last_error() {
        let policy = RetryPolicy::new(3, Duration::from_millis(1));
        let calls = AtomicU32::new(0);
        let result: Result<u32, String> = policy
            .run(|attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Err(format!("failed attempt {attempt}")) }
            })
            .await;
        assert_eq!(result, Err("failed attempt 3".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn succeeds_midway() {
        let policy = RetryPolicy::new(5, Duration::from_millis(1));
        let result: Result<u32, &str> = policy
            .run(|attempt| async move {
                if attempt < 3 {
                    Err("not yet")
                } else {
                    Ok(attempt)
                }
            })
            .await;
        assert_eq!(result, Ok(3));
    }
}
