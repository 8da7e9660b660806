//! Startup readiness probing
//!
//! Polls a dependency until it answers, with a fixed delay between attempts.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy)]
pub struct ReadinessPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            delay: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Error)]
#[error("{target} not ready after {attempts} attempts: {last_error}")]
pub struct NotReady {
    pub target: String,
    pub attempts: u32,
    pub last_error: String,
}

/// Run `probe` until it succeeds or the attempts are exhausted.
///
/// Returns the number of attempts used.
pub async fn wait_until_ready<F, Fut, E>(
    target: &str,
    policy: ReadinessPolicy,
    mut probe: F,
) -> Result<u32, NotReady>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: std::fmt::Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=max_attempts {
        match probe().await {
            Ok(()) => {
                tracing::info!(target_name = target, attempt, "Dependency is ready");
                return Ok(attempt);
            }
            Err(e) => {
                last_error = e.to_string();
                tracing::warn!(
                    target_name = target,
                    attempt,
                    max_attempts,
                    error = %last_error,
                    "Dependency not ready yet"
                );
            }
        }

        if attempt < max_attempts {
            tokio::time::sleep(policy.delay).await;
        }
    }

    Err(NotReady {
        target: target.to_string(),
        attempts: max_attempts,
        last_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast(max_attempts: u32) -> ReadinessPolicy {
        ReadinessPolicy {
            max_attempts,
            delay: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn test_ready_on_first_attempt() {
        let attempts = wait_until_ready("db", fast(3), || async { Ok::<(), String>(()) })
            .await
            .unwrap();
        assert_eq!(attempts, 1);
    }

    #[tokio::test]
    async fn test_ready_after_retries() {
        let calls = AtomicU32::new(0);
        let attempts = wait_until_ready("db", fast(5), || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err("connection refused".to_string())
                } else {
                    Ok(())
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(attempts, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let err = wait_until_ready("db", fast(4), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err::<(), _>("connection refused") }
        })
        .await
        .unwrap_err();

        assert_eq!(err.attempts, 4);
        assert_eq!(err.last_error, "connection refused");
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }
}
