use std::time::{Duration, Instant};

/// Keeps at least `interval` between consecutive outbound requests by
/// sleeping the calling thread.
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Blocks until the next request may go out, then marks it as sent.
    /// Returns how long it slept.
    pub fn wait(&mut self) -> Duration {
        let slept = match self.last {
            Some(last) => {
                let elapsed = last.elapsed();
                if elapsed < self.interval {
                    let remaining = self.interval - elapsed;
                    std::thread::sleep(remaining);
                    remaining
                } else {
                    Duration::ZERO
                }
            }
            None => Duration::ZERO,
        };
        self.last = Some(Instant::now());
        slept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_goes_out_immediately() {
        let mut throttle = Throttle::new(Duration::from_secs(60));
        assert_eq!(throttle.wait(), Duration::ZERO);
    }

    #[test]
    fn second_request_waits_for_interval() {
        let mut throttle = Throttle::new(Duration::from_millis(40));
        throttle.wait();
        let start = Instant::now();
        throttle.wait();
        assert!(start.elapsed() >= Duration::from_millis(35));
    }

    #[test]
    fn zero_interval_never_sleeps() {
        let mut throttle = Throttle::new(Duration::ZERO);
        throttle.wait();
        assert_eq!(throttle.wait(), Duration::ZERO);
    }
}
