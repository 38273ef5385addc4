use std::time::Duration;
use rand::Rng;

pub const DEFAULT_LATENCY_MS: u64 = 500;

// LatencyStrategy emulates the network round trip in front of every store operation
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LatencyStrategy {
    None,
    Fixed(Duration),
    Jittered {
        base: Duration,
        jitter: Duration,
    },
}

impl LatencyStrategy {
    pub fn fixed_millis(millis: u64) -> Self {
        LatencyStrategy::Fixed(Duration::from_millis(millis))
    }

    pub fn jittered_millis(base: u64, jitter: u64) -> Self {
        if jitter == 0 {
            return LatencyStrategy::fixed_millis(base);
        }
        LatencyStrategy::Jittered {
            base: Duration::from_millis(base),
            jitter: Duration::from_millis(jitter),
        }
    }

    pub fn delay(&self) -> Duration {
        match self {
            LatencyStrategy::None => Duration::ZERO,
            LatencyStrategy::Fixed(delay) => *delay,
            LatencyStrategy::Jittered { base, jitter } => {
                let extra = rand::thread_rng().gen_range(0..=jitter.as_millis() as u64);
                *base + Duration::from_millis(extra)
            }
        }
    }

    pub async fn simulate(&self) {
        let delay = self.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for LatencyStrategy {
    fn default() -> Self {
        LatencyStrategy::fixed_millis(DEFAULT_LATENCY_MS)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tokio::time::Instant;
    use crate::utils::latency::LatencyStrategy;

    #[tokio::test]
    async fn test_should_default_to_fixed_delay() {
        assert_eq!(LatencyStrategy::Fixed(Duration::from_millis(500)), LatencyStrategy::default());
        assert_eq!(Duration::ZERO, LatencyStrategy::None.delay());
    }

    #[tokio::test]
    async fn test_should_keep_jitter_in_bounds() {
        let latency = LatencyStrategy::jittered_millis(100, 50);
        for _ in 0..100 {
            let delay = latency.delay();
            assert!(delay >= Duration::from_millis(100));
            assert!(delay <= Duration::from_millis(150));
        }
    }

    #[tokio::test]
    async fn test_should_collapse_zero_jitter() {
        assert_eq!(LatencyStrategy::fixed_millis(20), LatencyStrategy::jittered_millis(20, 0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_should_sleep_for_fixed_delay() {
        let started = Instant::now();
        LatencyStrategy::fixed_millis(500).simulate().await;
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
