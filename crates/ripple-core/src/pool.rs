use glam::Vec2;
use rand::prelude::*;

use crate::constants::{
    MAX_RIPPLES, OPACITY_DECAY, ROTATION_RATE, SCALE_GROWTH, SCALE_OFFSET, SPAWN_SCALE,
    VISIBILITY_EPSILON,
};

/// One recyclable ripple. Exactly `capacity` of these exist for the life of
/// the pool; a slot is reset in place on spawn and silently overwritten when
/// the ring cursor comes back around, even if the previous occupant is still
/// fading. The overwrite is masked by the additive low-opacity blending.
#[derive(Clone, Copy, Debug)]
pub struct Ripple {
    /// World-space placement, origin at viewport center, Y up.
    pub position: Vec2,
    /// Assigned once at pool construction; spawn never resets it.
    pub rotation: f32,
    pub opacity: f32,
    pub scale: f32,
    pub visible: bool,
}

/// Fixed-capacity ring of ripple instances. The single cursor `next_slot`
/// names the instance overwritten by the next spawn; slot assignment is a
/// pure function of the spawn count.
pub struct RipplePool {
    ripples: Vec<Ripple>,
    next_slot: usize,
}

impl RipplePool {
    /// Build `capacity` idle instances. Rotations are drawn once here,
    /// uniform in [0, 2π), and survive every recycle.
    pub fn new(capacity: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let ripples = (0..capacity)
            .map(|_| Ripple {
                position: Vec2::ZERO,
                rotation: rng.gen::<f32>() * std::f32::consts::TAU,
                opacity: 0.0,
                scale: 0.0,
                visible: false,
            })
            .collect();
        Self {
            ripples,
            next_slot: 0,
        }
    }

    pub fn with_default_capacity(seed: u64) -> Self {
        Self::new(MAX_RIPPLES, seed)
    }

    pub fn capacity(&self) -> usize {
        self.ripples.len()
    }

    pub fn next_slot(&self) -> usize {
        self.next_slot
    }

    pub fn get(&self, index: usize) -> &Ripple {
        &self.ripples[index]
    }

    /// Reset the slot under the ring cursor and advance the cursor. Total:
    /// capacity is fixed and overwriting a still-visible occupant is legal.
    /// Returns the slot that was written.
    pub fn spawn(&mut self, x: f32, y: f32) -> usize {
        let index = self.next_slot;
        let ripple = &mut self.ripples[index];
        ripple.position = Vec2::new(x, y);
        ripple.opacity = 1.0;
        ripple.scale = SPAWN_SCALE;
        ripple.visible = true;
        self.next_slot = (self.next_slot + 1) % self.ripples.len();
        index
    }

    /// One aging step for every visible instance, applied once per tick:
    /// spin, exponential opacity decay, exponential approach of scale to its
    /// asymptote, then the implicit end-of-life once opacity drops under the
    /// visibility threshold. Idle instances are untouched.
    pub fn age_all(&mut self) {
        for ripple in self.ripples.iter_mut().filter(|r| r.visible) {
            ripple.rotation += ROTATION_RATE;
            ripple.opacity *= OPACITY_DECAY;
            ripple.scale = SCALE_GROWTH * ripple.scale + SCALE_OFFSET;
            if ripple.opacity < VISIBILITY_EPSILON {
                ripple.visible = false;
            }
        }
    }

    /// Instances eligible for rendering this tick.
    pub fn visible(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter().filter(|r| r.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.ripples.iter().filter(|r| r.visible).count()
    }
}
