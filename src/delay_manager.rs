use std::time::Duration;
use std::thread;
use rand::Rng;
use log::debug;

/// Bounds, in milliseconds, for the pause taken after every page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        // a reversed pair is treated as the same interval
        if min_ms <= max_ms {
            DelayRange { min_ms, max_ms }
        } else {
            DelayRange { min_ms: max_ms, max_ms: min_ms }
        }
    }

    /// No sleeping at all.
    pub fn none() -> Self {
        DelayRange { min_ms: 0, max_ms: 0 }
    }

    pub fn pick(&self) -> Duration {
        let mut rng = rand::thread_rng();
        Duration::from_millis(rng.gen_range(self.min_ms..=self.max_ms))
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        DelayRange { min_ms: 500, max_ms: 2000 }
    }
}

pub fn random_page_delay(range: &DelayRange) {
    let delay = range.pick();
    if delay.is_zero() {
        return;
    }
    debug!("Waiting for {:.2} seconds (Page Delay)...", delay.as_secs_f64());
    thread::sleep(delay);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_stays_in_bounds() {
        let range = DelayRange::default();
        for _ in 0..200 {
            let d = range.pick();
            assert!(d >= Duration::from_millis(500));
            assert!(d <= Duration::from_millis(2000));
        }
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        let range = DelayRange::new(900, 100);
        assert_eq!(range, DelayRange { min_ms: 100, max_ms: 900 });
    }

    #[test]
    fn test_zero_range_does_not_sleep() {
        assert_eq!(DelayRange::none().pick(), Duration::ZERO);
        random_page_delay(&DelayRange::none());
    }
}
