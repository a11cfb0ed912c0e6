//! Collision and bounds checks. Read-only: reports a terminal reason, never mutates.

use super::spawner::ObstacleSpawner;
use super::types::{Bird, TerminalReason};

#[derive(Debug, Clone, Copy)]
pub struct CollisionMonitor {
    screen_height: f64,
}

impl CollisionMonitor {
    pub fn new(screen_height: f64) -> Self {
        Self { screen_height }
    }

    /// Check the bird after physics integration. At most one reason per call:
    /// leaving the screen wins over an overlap, and overlaps are only tested
    /// for a live bird, stopping at the first hit.
    pub fn check(&self, bird: &Bird, obstacles: &ObstacleSpawner) -> Option<TerminalReason> {
        if bird.y() < 0.0 || bird.y() > self.screen_height {
            return Some(TerminalReason::OutOfBounds);
        }

        if !bird.alive {
            return None;
        }

        let hitbox = bird.bounds();
        obstacles
            .segments()
            .any(|segment| hitbox.overlaps(&segment.bounds()))
            .then_some(TerminalReason::Collision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SCREEN_HEIGHT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spawner_with_column() -> ObstacleSpawner {
        let mut spawner = ObstacleSpawner::new();
        spawner.spawn_column(&mut StdRng::seed_from_u64(11));
        spawner
    }

    /// Park every segment of the first column on the bird's x.
    fn align_with_bird(spawner: &mut ObstacleSpawner, bird: &Bird) {
        let x = bird.bounds().x;
        for segment in &mut spawner.columns_mut()[0].segments {
            segment.body.x = x;
        }
    }

    #[test]
    fn test_inside_screen_no_obstacles() {
        let monitor = CollisionMonitor::new(SCREEN_HEIGHT);
        assert_eq!(monitor.check(&Bird::new(), &ObstacleSpawner::new()), None);
    }

    #[test]
    fn test_above_and_below_screen() {
        let monitor = CollisionMonitor::new(SCREEN_HEIGHT);
        let spawner = ObstacleSpawner::new();
        let mut bird = Bird::new();

        bird.body.y = -0.5;
        assert_eq!(monitor.check(&bird, &spawner), Some(TerminalReason::OutOfBounds));
        bird.body.y = 491.0;
        assert_eq!(monitor.check(&bird, &spawner), Some(TerminalReason::OutOfBounds));
        // Edges themselves are inside
        bird.body.y = 0.0;
        assert_eq!(monitor.check(&bird, &spawner), None);
        bird.body.y = 490.0;
        assert_eq!(monitor.check(&bird, &spawner), None);
    }

    #[test]
    fn test_overlap_reports_collision() {
        let monitor = CollisionMonitor::new(SCREEN_HEIGHT);
        let mut spawner = spawner_with_column();
        let mut bird = Bird::new();
        align_with_bird(&mut spawner, &bird);
        // Slot 0 band is y 10..60; bird hitbox is y-25..y+25
        bird.body.y = 35.0;

        assert_eq!(monitor.check(&bird, &spawner), Some(TerminalReason::Collision));
    }

    #[test]
    fn test_bird_in_gap_passes() {
        let monitor = CollisionMonitor::new(SCREEN_HEIGHT);
        let mut spawner = spawner_with_column();
        let mut bird = Bird::new();
        align_with_bird(&mut spawner, &bird);

        let low = spawner.columns()[0].gap_start;
        let high = low + 1;
        // Free band runs from the bottom of slot low-1 to the top of slot high+1
        let gap_top = crate::game::types::slot_y(low - 1) + 50.0;
        let gap_bottom = crate::game::types::slot_y(high + 1);
        bird.body.y = (gap_top + gap_bottom) / 2.0;
        assert!(gap_bottom - gap_top > 50.0);

        assert_eq!(monitor.check(&bird, &spawner), None);
    }

    #[test]
    fn test_dead_bird_ignores_overlap() {
        let monitor = CollisionMonitor::new(SCREEN_HEIGHT);
        let mut spawner = spawner_with_column();
        let mut bird = Bird::new();
        align_with_bird(&mut spawner, &bird);
        bird.body.y = 35.0;
        bird.alive = false;

        assert_eq!(monitor.check(&bird, &spawner), None);
    }

    #[test]
    fn test_out_of_bounds_wins_over_overlap() {
        let monitor = CollisionMonitor::new(SCREEN_HEIGHT);
        let mut spawner = spawner_with_column();
        let mut bird = Bird::new();
        align_with_bird(&mut spawner, &bird);
        for segment in &mut spawner.columns_mut()[0].segments {
            segment.body.y = -30.0;
        }
        bird.body.y = -1.0;

        assert_eq!(monitor.check(&bird, &spawner), Some(TerminalReason::OutOfBounds));
    }
}
