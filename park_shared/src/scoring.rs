//! Proximity detection and the scored countdown session.
//!
//! Per frame: find the nearest target (marked or not), expose the markable
//! hint, and apply at-most-once marking when the action fires. A separate
//! 1-second tick drives the countdown. Once the session ends, both ticks
//! become no-ops for this component.

use serde::{Deserialize, Serialize};

use crate::{
    event::{EventQueue, GameEvent},
    math::Vec2,
    world::Target,
};

/// Distance within which a target can be marked.
pub const PROXIMITY_THRESHOLD: f32 = 3.0;
/// Score awarded per marked target.
pub const POINTS_PER_MARK: u32 = 10;

/// Session lifecycle. `Ended` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Active,
    Ended,
}

/// Scored countdown session. Score never decreases; time remaining strictly
/// decreases once per timer tick while active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub score: u32,
    pub time_left: u32,
    pub phase: Phase,
}

impl Session {
    pub fn new(seconds: u32) -> Self {
        Self {
            score: 0,
            time_left: seconds,
            phase: Phase::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// One wall-clock second elapsed. Transitions to `Ended` at zero and
    /// emits [`GameEvent::SessionEnded`]; further ticks do nothing. A session
    /// constructed with zero seconds ends on its first tick.
    pub fn timer_tick(&mut self, events: &mut EventQueue) {
        if !self.is_active() {
            return;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.phase = Phase::Ended;
            events.push(GameEvent::SessionEnded {
                final_score: self.score,
            });
        }
    }

    /// Attempts to mark the nearest target. Returns true when a target was
    /// newly marked this tick. Idempotent per target: re-marking never
    /// changes score or flag state.
    pub fn try_mark(
        &mut self,
        actor_pos: Vec2,
        targets: &mut [Target],
        events: &mut EventQueue,
    ) -> bool {
        if !self.is_active() {
            return false;
        }
        let Some(idx) = nearest_target(actor_pos, targets) else {
            return false;
        };
        let target = &mut targets[idx];
        if target.marked || actor_pos.dist(target.position) >= PROXIMITY_THRESHOLD {
            return false;
        }
        target.marked = true;
        self.score += POINTS_PER_MARK;
        events.push(GameEvent::TargetMarked {
            target: idx,
            score: self.score,
        });
        true
    }
}

/// Index of the nearest target overall, regardless of marked state. Exact
/// distance ties break to the first in iteration order.
pub fn nearest_target(actor_pos: Vec2, targets: &[Target]) -> Option<usize> {
    let mut nearest = None;
    let mut best = f32::INFINITY;
    for (i, t) in targets.iter().enumerate() {
        let d = actor_pos.dist_sq(t.position);
        if d < best {
            best = d;
            nearest = Some(i);
        }
    }
    nearest
}

/// Whether the markable hint should show: nearest target is unmarked and
/// within the proximity threshold. Recomputed every tick, independent of the
/// action input.
pub fn markable(actor_pos: Vec2, targets: &[Target]) -> bool {
    nearest_target(actor_pos, targets).is_some_and(|i| {
        let t = &targets[i];
        !t.marked && actor_pos.dist(t.position) < PROXIMITY_THRESHOLD
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets_at(positions: &[(f32, f32)]) -> Vec<Target> {
        positions
            .iter()
            .map(|&(x, z)| Target::new(Vec2::new(x, z)))
            .collect()
    }

    #[test]
    fn nearest_breaks_ties_by_iteration_order() {
        let targets = targets_at(&[(2.0, 0.0), (-2.0, 0.0)]);
        assert_eq!(nearest_target(Vec2::ZERO, &targets), Some(0));
    }

    #[test]
    fn nearest_of_empty_set_is_none() {
        assert_eq!(nearest_target(Vec2::ZERO, &[]), None);
        assert!(!markable(Vec2::ZERO, &[]));
    }

    #[test]
    fn markable_requires_unmarked_within_threshold() {
        let mut targets = targets_at(&[(2.0, 0.0)]);
        assert!(markable(Vec2::ZERO, &targets));

        targets[0].marked = true;
        assert!(!markable(Vec2::ZERO, &targets));

        let far = targets_at(&[(10.0, 0.0)]);
        assert!(!markable(Vec2::ZERO, &far));
    }

    #[test]
    fn marking_is_at_most_once_per_target() {
        let mut session = Session::new(30);
        let mut targets = targets_at(&[(2.0, 0.0)]);
        let mut events = EventQueue::default();

        assert!(session.try_mark(Vec2::ZERO, &mut targets, &mut events));
        assert_eq!(session.score, POINTS_PER_MARK);
        assert!(targets[0].marked);
        assert_eq!(events.drain().len(), 1);

        // Repeated action on a marked target changes nothing.
        for _ in 0..5 {
            assert!(!session.try_mark(Vec2::ZERO, &mut targets, &mut events));
        }
        assert_eq!(session.score, POINTS_PER_MARK);
        assert!(events.is_empty());
    }

    #[test]
    fn only_nearest_is_eligible_when_several_in_range() {
        let mut session = Session::new(30);
        let mut targets = targets_at(&[(2.5, 0.0), (1.0, 0.0)]);
        let mut events = EventQueue::default();

        assert!(session.try_mark(Vec2::ZERO, &mut targets, &mut events));
        assert!(!targets[0].marked);
        assert!(targets[1].marked);
    }

    #[test]
    fn marked_nearest_shadows_unmarked_in_range() {
        // The nearest target is chosen regardless of marked state, so a
        // marked tree standing between the actor and an unmarked one blocks
        // the mark that tick.
        let mut session = Session::new(30);
        let mut targets = targets_at(&[(1.0, 0.0), (2.5, 0.0)]);
        targets[0].marked = true;
        let mut events = EventQueue::default();

        assert!(!session.try_mark(Vec2::ZERO, &mut targets, &mut events));
        assert!(!targets[1].marked);
    }

    #[test]
    fn score_tracks_marked_count() {
        let mut session = Session::new(30);
        let mut targets = targets_at(&[(2.0, 0.0), (10.0, 0.0), (0.0, 9.0)]);
        let mut events = EventQueue::default();

        let positions: Vec<Vec2> = targets.iter().map(|t| t.position).collect();
        for pos in positions {
            session.try_mark(pos, &mut targets, &mut events);
            let marked = targets.iter().filter(|t| t.marked).count() as u32;
            assert_eq!(session.score, POINTS_PER_MARK * marked);
        }
        assert_eq!(session.score, 30);
    }

    #[test]
    fn countdown_reaches_terminal_state() {
        let mut session = Session::new(30);
        let mut events = EventQueue::default();

        for _ in 0..29 {
            session.timer_tick(&mut events);
        }
        assert!(session.is_active());
        assert_eq!(session.time_left, 1);

        session.timer_tick(&mut events);
        assert_eq!(session.phase, Phase::Ended);
        assert_eq!(session.time_left, 0);
        assert_eq!(
            events.drain(),
            vec![GameEvent::SessionEnded { final_score: 0 }]
        );

        // Terminal: further ticks hold at zero, no new events.
        for _ in 0..3 {
            session.timer_tick(&mut events);
        }
        assert_eq!(session.time_left, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn zero_second_session_ends_on_first_tick() {
        let mut session = Session::new(0);
        assert!(session.is_active());
        let mut events = EventQueue::default();

        session.timer_tick(&mut events);
        assert_eq!(session.phase, Phase::Ended);
        assert_eq!(session.time_left, 0);
        assert_eq!(
            events.drain(),
            vec![GameEvent::SessionEnded { final_score: 0 }]
        );
    }

    #[test]
    fn ended_session_refuses_marks() {
        let mut session = Session::new(1);
        let mut targets = targets_at(&[(1.0, 0.0)]);
        let mut events = EventQueue::default();

        session.timer_tick(&mut events);
        assert!(!session.is_active());
        assert!(!session.try_mark(Vec2::ZERO, &mut targets, &mut events));
        assert_eq!(session.score, 0);
        assert!(!targets[0].marked);
    }
}
