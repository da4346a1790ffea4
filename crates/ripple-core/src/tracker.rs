use glam::Vec2;

use crate::constants::MOVE_THRESHOLD;

/// Latest and previous pointer samples in centered screen space.
///
/// Samples arrive event-driven but are only consulted once per tick; the
/// caller keeps a single-slot "latest sample" cell and feeds it here, so
/// intermediate samples between ticks are dropped by construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct MotionTracker {
    current: Vec2,
    previous: Vec2,
}

impl MotionTracker {
    /// Shift current → previous and store the new sample.
    pub fn update(&mut self, x: f32, y: f32) {
        self.previous = self.current;
        self.current = Vec2::new(x, y);
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    /// Displacement since the last sample. Meaningful for one tick only.
    pub fn velocity(&self) -> Vec2 {
        self.current - self.previous
    }

    /// Deadband filter: true iff either axis moved strictly more than the
    /// threshold since the previous sample. Sub-threshold jitter spawns
    /// nothing, which bounds the spawn rate under noisy input.
    pub fn should_spawn(&self) -> bool {
        let delta = self.velocity();
        delta.x.abs() > MOVE_THRESHOLD || delta.y.abs() > MOVE_THRESHOLD
    }
}

/// Viewport pixel coordinates (origin top-left, Y down) to centered Y-up
/// world coordinates: `(x - w/2, h/2 - y)`.
#[inline]
pub fn centered_from_viewport(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(x - width / 2.0, height / 2.0 - y)
}
