//! World targets (trees) and their placement.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::math::Vec2;

/// Number of trees placed at session start.
pub const TREE_COUNT: usize = 15;
/// Rejected candidates tolerated per placed target before placement stops.
/// The spawn area only holds a few dozen targets at the minimum separation,
/// so an oversized count would otherwise never terminate.
pub const PLACEMENT_ATTEMPTS_PER_TARGET: usize = 256;
/// Candidates are drawn uniformly from `[-SPAWN_RANGE, SPAWN_RANGE]²`.
pub const SPAWN_RANGE: f32 = 30.0;
/// Trees never spawn closer than this to the origin (the actor spawn).
pub const MIN_ORIGIN_DIST: f32 = 5.0;
/// Minimum pairwise distance between trees.
pub const MIN_SEPARATION: f32 = 8.0;

/// A fixed-position world object that can be marked exactly once for score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub position: Vec2,
    /// Flips false→true at most once and never reverts.
    pub marked: bool,
}

impl Target {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            marked: false,
        }
    }
}

/// Places `count` targets by rejection sampling: a candidate is kept only if
/// it is far enough from the origin and from every previously placed target.
/// When the attempt budget runs out (the area cannot hold `count` targets at
/// the required separation), placement stops with however many fit.
pub fn generate_targets<R: Rng>(rng: &mut R, count: usize) -> Vec<Target> {
    let mut targets: Vec<Target> = Vec::with_capacity(count);
    let mut attempts = count.saturating_mul(PLACEMENT_ATTEMPTS_PER_TARGET);
    while targets.len() < count && attempts > 0 {
        attempts -= 1;
        let candidate = Vec2::new(
            rng.gen_range(-SPAWN_RANGE..SPAWN_RANGE),
            rng.gen_range(-SPAWN_RANGE..SPAWN_RANGE),
        );
        if candidate.len() <= MIN_ORIGIN_DIST {
            continue;
        }
        if targets
            .iter()
            .any(|t| t.position.dist(candidate) < MIN_SEPARATION)
        {
            continue;
        }
        targets.push(Target::new(candidate));
    }
    if targets.len() < count {
        warn!(
            requested = count,
            placed = targets.len(),
            "Target placement exhausted its attempt budget"
        );
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generated_targets_respect_spacing_rules() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let targets = generate_targets(&mut rng, TREE_COUNT);
            assert_eq!(targets.len(), TREE_COUNT);

            for (i, a) in targets.iter().enumerate() {
                assert!(a.position.len() > MIN_ORIGIN_DIST);
                assert!(a.position.x.abs() <= SPAWN_RANGE);
                assert!(a.position.z.abs() <= SPAWN_RANGE);
                for b in &targets[i + 1..] {
                    assert!(a.position.dist(b.position) >= MIN_SEPARATION);
                }
            }
        }
    }

    #[test]
    fn oversized_count_terminates_with_a_partial_placement() {
        // [-30,30]² cannot hold 200 targets at 8-unit separation; the
        // attempt budget must stop the loop, with spacing still honored.
        let mut rng = StdRng::seed_from_u64(3);
        let targets = generate_targets(&mut rng, 200);
        assert!(!targets.is_empty());
        assert!(targets.len() < 200);

        for (i, a) in targets.iter().enumerate() {
            assert!(a.position.len() > MIN_ORIGIN_DIST);
            for b in &targets[i + 1..] {
                assert!(a.position.dist(b.position) >= MIN_SEPARATION);
            }
        }
    }

    #[test]
    fn targets_start_unmarked() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generate_targets(&mut rng, 5).iter().all(|t| !t.marked));
    }
}
