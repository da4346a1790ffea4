// Tuning constants for the ripple simulation and the displacement pass.

/// Fixed number of pre-allocated ripple instances; never grows or shrinks.
pub const MAX_RIPPLES: usize = 100;

/// Pointer deadband in device-independent units; smaller moves spawn nothing.
pub const MOVE_THRESHOLD: f32 = 4.0;

/// Per-tick multiplicative opacity decay.
pub const OPACITY_DECAY: f32 = 0.96;

/// Below this opacity an instance stops rendering and its slot is reusable.
pub const VISIBILITY_EPSILON: f32 = 0.02;

/// Per-tick scale recurrence: `scale = SCALE_GROWTH * scale + SCALE_OFFSET`.
/// Converges toward `SCALE_OFFSET / (1 - SCALE_GROWTH)` = 10.0.
pub const SCALE_GROWTH: f32 = 0.98;
pub const SCALE_OFFSET: f32 = 0.2;

/// Scale a freshly spawned ripple starts from.
pub const SPAWN_SCALE: f32 = 0.1;

/// Cosmetic per-tick spin in radians.
pub const ROTATION_RATE: f32 = 0.024;

/// Global shader time advance per tick.
pub const TIME_STEP: f32 = 0.05;

/// Edge length of the ripple sprite quad in world units (pixels at scale 1).
pub const RIPPLE_QUAD_SIZE: f32 = 40.0;

/// Intrinsic aspect ratio assumed for the background when the real image
/// could not be loaded (width / height).
pub const IMAGE_ASPECT: f32 = 2400.0 / 1920.0;

/// How strongly the displacement buffer perturbs background UVs.
pub const DISPLACEMENT_STRENGTH: f32 = 0.1;
