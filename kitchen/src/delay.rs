use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trattoria_rt as rt;

/// Random source for one worker. With a seed, worker `index` always draws the same sequence.
pub fn worker_rng(seed: Option<u64>, index: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index)),
        None => StdRng::from_entropy(),
    }
}

/// A simulated activity duration: `base` plus a uniformly drawn extra in `[0, spread)`,
/// drawn with nanosecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jitter {
    pub base: Duration,
    pub spread: Duration,
}

impl Jitter {
    pub const fn new(base: Duration, spread: Duration) -> Self {
        Self { base, spread }
    }

    pub const fn fixed(duration: Duration) -> Self {
        Self::new(duration, Duration::ZERO)
    }

    /// Activity of a given size: `500ms * size` plus up to another `500ms * size`.
    pub const fn work(size: u64) -> Self {
        let half = Duration::from_millis(500 * size);
        Self::new(half, half)
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        let spread = u64::try_from(self.spread.as_nanos()).unwrap_or(u64::MAX);
        if spread == 0 {
            return self.base;
        }
        self.base + Duration::from_nanos(rng.gen_range(0..spread))
    }

    /// Sleeps the current task for one sampled duration.
    pub async fn pass<R: Rng>(&self, rng: &mut R) {
        let duration = self.sample(rng);
        rt::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_size_ten_is_five_to_ten_seconds() {
        let jitter = Jitter::work(10);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let d = jitter.sample(&mut rng);
            assert!(d >= Duration::from_millis(5000));
            assert!(d < Duration::from_millis(10000));
        }
    }

    #[test]
    fn fixed_jitter_never_varies() {
        let jitter = Jitter::fixed(Duration::from_millis(200));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(jitter.sample(&mut rng), Duration::from_millis(200));
        assert_eq!(jitter.sample(&mut rng), Duration::from_millis(200));
    }

    #[test]
    fn sub_millisecond_spread_still_varies() {
        let jitter = Jitter::new(Duration::ZERO, Duration::from_micros(500));
        let mut rng = worker_rng(Some(5), 0);
        let draws: Vec<_> = (0..100).map(|_| jitter.sample(&mut rng)).collect();
        assert!(draws.iter().all(|d| *d < Duration::from_micros(500)));
        assert!(draws.iter().any(|d| *d != draws[0]));
    }

    #[test]
    fn seeded_workers_repeat_their_draws() {
        let jitter = Jitter::work(4);
        let mut a = worker_rng(Some(42), 3);
        let mut b = worker_rng(Some(42), 3);
        for _ in 0..10 {
            assert_eq!(jitter.sample(&mut a), jitter.sample(&mut b));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn pass_sleeps_at_least_base() {
        let jitter = Jitter::new(Duration::from_secs(2), Duration::from_secs(2));
        let mut rng = StdRng::seed_from_u64(3);
        let start = tokio::time::Instant::now();
        jitter.pass(&mut rng).await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(2));
        assert!(elapsed < Duration::from_secs(4));
    }
}
