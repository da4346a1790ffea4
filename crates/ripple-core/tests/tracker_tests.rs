// Deadband filtering and coordinate centering.

use glam::Vec2;
use ripple_core::constants::MOVE_THRESHOLD;
use ripple_core::{centered_from_viewport, MotionTracker};

#[test]
fn motion_at_or_below_the_threshold_spawns_nothing() {
    let mut tracker = MotionTracker::default();
    tracker.update(0.0, 0.0);

    // exactly at the threshold on both axes: still inside the deadband
    tracker.update(MOVE_THRESHOLD, MOVE_THRESHOLD);
    assert!(!tracker.should_spawn());

    tracker.update(MOVE_THRESHOLD + 3.9, MOVE_THRESHOLD + 3.9);
    assert!(!tracker.should_spawn());
}

#[test]
fn either_axis_alone_can_break_the_deadband() {
    let mut tracker = MotionTracker::default();
    tracker.update(10.0, 10.0);

    tracker.update(10.0 + MOVE_THRESHOLD + 0.1, 10.0);
    assert!(tracker.should_spawn(), "x axis alone should trigger");

    let mut tracker = MotionTracker::default();
    tracker.update(10.0, 10.0);
    tracker.update(10.0, 10.0 + MOVE_THRESHOLD + 0.1);
    assert!(tracker.should_spawn(), "y axis alone should trigger");
}

#[test]
fn negative_deltas_count_by_magnitude() {
    let mut tracker = MotionTracker::default();
    tracker.update(0.0, 0.0);
    tracker.update(-(MOVE_THRESHOLD + 1.0), 0.0);
    assert!(tracker.should_spawn());
}

#[test]
fn velocity_is_the_displacement_since_the_last_sample() {
    let mut tracker = MotionTracker::default();
    tracker.update(3.0, 4.0);
    tracker.update(10.0, -2.0);
    assert_eq!(tracker.velocity(), Vec2::new(7.0, -6.0));
    assert_eq!(tracker.current(), Vec2::new(10.0, -2.0));
}

#[test]
fn centering_maps_viewport_pixels_to_y_up_world() {
    let (w, h) = (800.0, 600.0);
    assert_eq!(centered_from_viewport(0.0, 0.0, w, h), Vec2::new(-400.0, 300.0));
    assert_eq!(centered_from_viewport(400.0, 300.0, w, h), Vec2::ZERO);
    assert_eq!(centered_from_viewport(800.0, 600.0, w, h), Vec2::new(400.0, -300.0));
}
