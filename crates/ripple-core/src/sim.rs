use glam::Vec2;

use crate::constants::TIME_STEP;
use crate::pool::RipplePool;
use crate::tracker::MotionTracker;

/// All per-frame mutable simulation state: the pool, the motion tracker,
/// global shader time and the running flag. Owned by whoever drives frames;
/// single writer, mutated exactly once per tick.
pub struct Simulation {
    pub pool: RipplePool,
    pub tracker: MotionTracker,
    pub time: f32,
    running: bool,
}

impl Simulation {
    pub fn new(seed: u64) -> Self {
        Self {
            pool: RipplePool::with_default_capacity(seed),
            tracker: MotionTracker::default(),
            time: 0.0,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Flag flip observed at the top of the next tick; an in-flight tick is
    /// never interrupted.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Advance one frame. `pointer` is the latest centered pointer sample if
    /// any arrived since the previous tick (the caller's single-slot cell;
    /// older samples were already overwritten).
    ///
    /// Returns true when the render passes should execute for this tick.
    /// While stopped, motion tracking (and the spawn it may trigger) still
    /// runs, but time stands still, nothing ages and nothing renders.
    pub fn tick(&mut self, pointer: Option<Vec2>) -> bool {
        if let Some(sample) = pointer {
            self.tracker.update(sample.x, sample.y);
            if self.tracker.should_spawn() {
                let at = self.tracker.current();
                self.pool.spawn(at.x, at.y);
            }
        }
        if !self.running {
            return false;
        }
        self.time += TIME_STEP;
        self.pool.age_all();
        true
    }
}
