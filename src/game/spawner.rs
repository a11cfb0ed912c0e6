//! Obstacle spawner: owns the live pipe columns and the spawn timer handle.

use super::types::{Column, Segment};
use crate::constants::{GAP_START_MAX, GAP_START_MIN, SPAWN_INTERVAL_MS};
use crate::engine::{TimerEvents, TimerHandle};
use rand::Rng;

/// Draw the lower gap slot uniformly from `GAP_START_MIN..=GAP_START_MAX`.
///
/// Slots 0 and 7 are never part of the gap.
pub fn draw_gap_start<R: Rng>(rng: &mut R) -> usize {
    rng.gen_range(GAP_START_MIN..=GAP_START_MAX)
}

#[derive(Debug, Clone, Default)]
pub struct ObstacleSpawner {
    columns: Vec<Column>,
    timer: Option<TimerHandle>,
}

impl ObstacleSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the repeating spawn timer. No-op if already armed.
    pub fn arm(&mut self, timers: &mut TimerEvents) {
        if self.timer.is_none() {
            self.timer = Some(timers.add_loop(SPAWN_INTERVAL_MS));
        }
    }

    /// Cancel future firings. Live columns are untouched.
    pub fn disarm(&mut self, timers: &mut TimerEvents) {
        if let Some(handle) = self.timer.take() {
            timers.remove(handle);
        }
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// True if `handle` is this spawner's timer.
    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.timer == Some(handle)
    }

    /// Append one column with a freshly drawn gap.
    pub fn spawn_column<R: Rng>(&mut self, rng: &mut R) -> &Column {
        let gap_start = draw_gap_start(rng);
        tracing::debug!(gap_start, "spawning column");
        self.columns.push(Column::new(gap_start));
        &self.columns[self.columns.len() - 1]
    }

    /// Move every segment and drop the ones that left through the left edge.
    pub fn scroll(&mut self, dt: f64) {
        for column in &mut self.columns {
            for segment in &mut column.segments {
                segment.body.integrate(dt);
            }
            column.segments.retain(|s| !s.body.is_past_left_edge(0.0));
        }
        self.columns.retain(|c| !c.segments.is_empty());
    }

    /// Stop all horizontal movement.
    pub fn freeze(&mut self) {
        for segment in self.columns.iter_mut().flat_map(|c| c.segments.iter_mut()) {
            segment.body.velocity_x = 0.0;
        }
    }

    pub fn clear(&mut self) {
        self.columns.clear();
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.columns.iter().flat_map(|c| c.segments.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gap_start_stays_interior() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 8];
        for _ in 0..2000 {
            let gap = draw_gap_start(&mut rng);
            assert!((1..=5).contains(&gap));
            seen[gap] = true;
        }
        // Every allowed start shows up
        assert!(seen[1..=5].iter().all(|&s| s));
        assert!(!seen[0] && !seen[6] && !seen[7]);
    }

    #[test]
    fn test_arm_is_idempotent() {
        let mut timers = TimerEvents::new();
        let mut spawner = ObstacleSpawner::new();
        spawner.arm(&mut timers);
        spawner.arm(&mut timers);
        assert!(spawner.is_armed());
        // One loop, so one firing per interval
        assert_eq!(timers.advance(SPAWN_INTERVAL_MS).len(), 1);
    }

    #[test]
    fn test_disarm_keeps_columns() {
        let mut timers = TimerEvents::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut spawner = ObstacleSpawner::new();
        spawner.arm(&mut timers);
        spawner.spawn_column(&mut rng);

        spawner.disarm(&mut timers);
        assert!(!spawner.is_armed());
        assert_eq!(spawner.columns().len(), 1);
        assert!(timers.advance(SPAWN_INTERVAL_MS * 3).is_empty());
    }

    #[test]
    fn test_scroll_moves_and_culls() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut spawner = ObstacleSpawner::new();
        spawner.spawn_column(&mut rng);

        spawner.scroll(1.0);
        let x = spawner.segments().next().unwrap().body.x;
        assert!((x - 200.0).abs() < 1e-9);

        // 400 -> -50 puts the right edge exactly on 0: still live
        spawner.scroll(1.25);
        assert_eq!(spawner.columns().len(), 1);

        spawner.scroll(0.01);
        assert!(spawner.columns().is_empty());
    }

    #[test]
    fn test_freeze_stops_segments() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut spawner = ObstacleSpawner::new();
        spawner.spawn_column(&mut rng);
        spawner.spawn_column(&mut rng);
        spawner.freeze();

        assert!(spawner.segments().all(|s| s.body.velocity_x == 0.0));
        let before: Vec<f64> = spawner.segments().map(|s| s.body.x).collect();
        spawner.scroll(0.5);
        let after: Vec<f64> = spawner.segments().map(|s| s.body.x).collect();
        assert_eq!(before, after);
    }
}
