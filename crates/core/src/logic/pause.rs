use std::time::Duration;

use rand::Rng;

use crate::prelude::*;

/// Uniform over `[min, max]`, both ends included.
pub fn random_pause_duration<R: Rng + ?Sized>(bounds: PauseBounds, rng: &mut R) -> Duration {
    Duration::from_millis(rng.gen_range(bounds.min_ms()..=bounds.max_ms()))
}

pub async fn pause(duration: Duration) {
    info!("Pausing for {:.2} seconds...", duration.as_secs_f64());
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn stays_within_bounds_and_hits_both_ends() {
        let bounds = PauseBounds::new(10, 19).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let samples: Vec<u128> = (0..10_000)
            .map(|_| random_pause_duration(bounds, &mut rng).as_millis())
            .collect();

        assert!(samples.iter().all(|ms| (10..=19).contains(ms)));
        assert!(samples.contains(&10));
        assert!(samples.contains(&19));
    }

    #[test]
    fn degenerate_bounds_yield_exact_duration() {
        let bounds = PauseBounds::new(500, 500).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            random_pause_duration(bounds, &mut rng),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn default_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let ms = random_pause_duration(PauseBounds::default(), &mut rng).as_millis();
            assert!((25_000..=73_000).contains(&ms));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn pause_sleeps_for_duration() {
        let start = tokio::time::Instant::now();
        pause(Duration::from_millis(1_500)).await;
        assert!(start.elapsed() >= Duration::from_millis(1_500));
    }
}
