use std::{future::Future, time::Duration};

use crate::error::CrawlError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

/// Runs `probe` until it yields `true`, sleeping `interval` between attempts.
///
/// Returns the attempt number that succeeded. Probe errors are returned as is,
/// running out of attempts gives [`CrawlError::Timeout`]. A policy with zero
/// attempts still probes once.
pub async fn poll_until<F, Fut>(
    policy: WaitPolicy,
    condition: &str,
    mut probe: F,
) -> Result<u32, CrawlError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, CrawlError>>,
{
    let attempts = policy.max_attempts.max(1);

    for attempt in 1..=attempts {
        if probe().await? {
            return Ok(attempt);
        }
        if attempt < attempts {
            tokio::time::sleep(policy.interval).await;
        }
    }

    Err(CrawlError::Timeout {
        condition: condition.to_string(),
        attempts,
    })
}
