use serde::Deserialize;
use std::time::Duration;

/// Linear backoff: the nth retry waits `n * step`.
#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the initial attempt.
    pub retries: u32,
    pub step_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 3,
            step_ms: 3_000,
        }
    }
}

impl RetryPolicy {
    pub fn delay(&self, retry: u32) -> Duration {
        Duration::from_millis(self.step_ms.saturating_mul(u64::from(retry)))
    }

    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

/// Record of one retry, kept alongside the reply.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Retry {
    pub attempt: u32,
    pub url: String,
    pub delay: Duration,
    pub cause: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_is_linear() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 4);
        let delays: Vec<_> = (1..=policy.retries).map(|n| policy.delay(n)).collect();
        assert_eq!(
            delays,
            [
                Duration::from_millis(3_000),
                Duration::from_millis(6_000),
                Duration::from_millis(9_000),
            ]
        );
    }

    #[test]
    fn partial_table_keeps_defaults() {
        let policy: RetryPolicy = toml::from_str("retries = 1").unwrap();
        assert_eq!(policy, RetryPolicy { retries: 1, step_ms: 3_000 });
    }
}
