//! Probability-weighted, score-gated obstacle spawning
//!
//! One uniform draw per spawn deadline, walked through descending thresholds.
//! Each branch is additionally gated on a minimum score, so early game ticks
//! mostly produce nothing and harder hazards unlock as the run progresses.

use rand::Rng;
use rand_pcg::Pcg32;

use super::obstacle::Obstacle;
use crate::atlas::{SpriteAtlas, SpriteId};
use crate::consts::*;

/// Periodic obstacle generator with a shrinking interval
#[derive(Debug, Clone)]
pub struct Spawner {
    interval_ms: u64,
    next_deadline_ms: u64,
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            interval_ms: SPAWN_INTERVAL_MS,
            next_deadline_ms: 0,
        }
    }

    /// Schedule the next spawn attempt one interval from `now_ms`
    pub fn arm(&mut self, now_ms: u64) {
        self.next_deadline_ms = now_ms + self.interval_ms;
    }

    /// Shrink the spawn interval by one difficulty step, floored
    pub fn shrink_interval(&mut self) {
        self.interval_ms = self
            .interval_ms
            .saturating_sub(SPAWN_INTERVAL_STEP_MS)
            .max(SPAWN_INTERVAL_MIN_MS);
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Attempt a spawn if the deadline has elapsed. Most attempts produce
    /// nothing; that is normal, not an error.
    pub fn poll(
        &mut self,
        now_ms: u64,
        score: u32,
        atlas: &dyn SpriteAtlas,
        rng: &mut Pcg32,
    ) -> Option<Obstacle> {
        if now_ms < self.next_deadline_ms {
            return None;
        }
        self.next_deadline_ms = now_ms + self.interval_ms;
        roll(score, atlas, rng)
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

/// Map one uniform draw to an outcome. First matching branch wins.
fn roll(score: u32, atlas: &dyn SpriteAtlas, rng: &mut Pcg32) -> Option<Obstacle> {
    let spawn_x = BOARD_WIDTH + SPAWN_LEAD_X;
    let chance: f64 = rng.random();

    if chance > 0.70 && score > 80 {
        Some(Obstacle::ground(SpriteId::CactusSmall, spawn_x, atlas))
    } else if chance > 0.50 && score > 200 {
        Some(Obstacle::ground(SpriteId::CactusLarge, spawn_x, atlas))
    } else if chance > 0.30 && score > 400 {
        Some(Obstacle::ground(SpriteId::CactusCluster, spawn_x, atlas))
    } else if chance > 0.15 && score > 500 {
        // Flyers appear later, at a randomized height above the ground line
        let bird_h = atlas.size(SpriteId::Bird1).y;
        let y = GROUND_Y - bird_h - rng.random_range(0.0..FLYING_Y_BAND);
        Some(Obstacle::flying(spawn_x, y, atlas))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::PixelAtlas;
    use rand::SeedableRng;

    fn rng(seed: u64) -> Pcg32 {
        Pcg32::seed_from_u64(seed)
    }

    #[test]
    fn test_low_score_never_spawns() {
        // All branches require score > 80 at minimum, so at score 50 no seed
        // may produce a hazard.
        for seed in 0..500 {
            let mut rng = rng(seed);
            assert!(roll(50, &PixelAtlas, &mut rng).is_none());
        }
    }

    #[test]
    fn test_high_score_reaches_all_branches() {
        let mut seen_small = false;
        let mut seen_large = false;
        let mut seen_cluster = false;
        let mut seen_flying = false;

        for seed in 0..2000 {
            let mut rng = rng(seed);
            match roll(600, &PixelAtlas, &mut rng) {
                Some(ob) => match ob.sprite() {
                    SpriteId::CactusSmall => seen_small = true,
                    SpriteId::CactusLarge => seen_large = true,
                    SpriteId::CactusCluster => seen_cluster = true,
                    SpriteId::Bird1 | SpriteId::Bird2 => seen_flying = true,
                    other => panic!("unexpected spawn {other:?}"),
                },
                None => {}
            }
        }

        assert!(seen_small && seen_large && seen_cluster && seen_flying);
    }

    #[test]
    fn test_mid_score_gates_harder_hazards() {
        // At score 300 only the two cheapest cacti are unlocked
        for seed in 0..1000 {
            let mut rng = rng(seed);
            if let Some(ob) = roll(300, &PixelAtlas, &mut rng) {
                assert!(matches!(
                    ob.sprite(),
                    SpriteId::CactusSmall | SpriteId::CactusLarge
                ));
            }
        }
    }

    #[test]
    fn test_poll_respects_deadline() {
        let mut spawner = Spawner::new();
        let mut rng = rng(7);
        spawner.arm(0);
        assert!(spawner.poll(100, 600, &PixelAtlas, &mut rng).is_none());
        // Past the deadline the roll runs (spawn or not) and re-arms
        let _ = spawner.poll(SPAWN_INTERVAL_MS, 600, &PixelAtlas, &mut rng);
        assert!(
            spawner
                .poll(SPAWN_INTERVAL_MS + 10, 600, &PixelAtlas, &mut rng)
                .is_none()
        );
    }

    #[test]
    fn test_interval_floors_at_minimum() {
        let mut spawner = Spawner::new();
        for _ in 0..100 {
            spawner.shrink_interval();
        }
        assert_eq!(spawner.interval_ms(), SPAWN_INTERVAL_MIN_MS);
    }
}
