use std::net::Ipv4Addr;
use std::time::Duration;

/// Aggregate of the sequential connects made against one host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeSample {
    pub successful: u32,
    pub failed: u32,
    total_latency: Duration,
}

impl ProbeSample {
    pub fn record_success(&mut self, elapsed: Duration) {
        self.successful += 1;
        self.total_latency += elapsed;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn attempts(&self) -> u32 {
        self.successful + self.failed
    }

    /// Mean connect time over the successful attempts only.
    ///
    /// `None` when nothing succeeded: the host is unmeasurable, which is not
    /// the same thing as a zero latency.
    pub fn mean_latency(&self) -> Option<Duration> {
        (self.successful > 0).then(|| self.total_latency / self.successful)
    }

    pub fn mean_latency_ms(&self) -> Option<f64> {
        self.mean_latency().map(|mean| mean.as_secs_f64() * 1_000.0)
    }
}

/// Latency report for a single address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostLatency {
    pub addr: Ipv4Addr,
    pub sample: ProbeSample,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_ignores_failed_attempts() {
        let mut sample = ProbeSample::default();
        sample.record_success(Duration::from_millis(10));
        sample.record_failure();
        sample.record_success(Duration::from_millis(30));

        assert_eq!(sample.successful, 2);
        assert_eq!(sample.failed, 1);
        assert_eq!(sample.attempts(), 3);
        assert_eq!(sample.mean_latency(), Some(Duration::from_millis(20)));
        let mean_ms = sample.mean_latency_ms().unwrap();
        assert!((mean_ms - 20.0).abs() < 1e-9, "mean was {mean_ms}");
    }

    #[test]
    fn all_failed_is_unmeasurable() {
        let mut sample = ProbeSample::default();
        for _ in 0..5 {
            sample.record_failure();
        }
        assert_eq!(sample.failed, 5);
        assert_eq!(sample.mean_latency(), None);
        assert_eq!(sample.mean_latency_ms(), None);
    }
}
