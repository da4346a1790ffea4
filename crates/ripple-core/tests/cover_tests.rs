// Aspect-correct "cover" UV mapping.

use ripple_core::cover::{cover_factors, resolution_vec4};

#[test]
fn wide_viewport_crops_vertically() {
    // 800x600 with image aspect 1.25: height/width = 0.75 <= 1.25
    let factors = cover_factors(1.25, 800.0, 600.0).unwrap();
    assert!((factors[0] - 1.0).abs() < 1e-6);
    assert!((factors[1] - 0.6).abs() < 1e-6);
}

#[test]
fn tall_viewport_crops_horizontally() {
    // 600x1000 with image aspect 1.25: height/width = 1.667 > 1.25
    let factors = cover_factors(1.25, 600.0, 1000.0).unwrap();
    assert!((factors[0] - 0.75).abs() < 1e-6);
    assert!((factors[1] - 1.0).abs() < 1e-6);
}

#[test]
fn degenerate_viewports_are_rejected() {
    assert!(cover_factors(1.25, 0.0, 600.0).is_none());
    assert!(cover_factors(1.25, 800.0, 0.0).is_none());
    assert!(cover_factors(1.25, -800.0, 600.0).is_none());
    assert!(cover_factors(0.0, 800.0, 600.0).is_none());
}

#[test]
fn resolution_vec4_packs_in_shader_order() {
    let v = resolution_vec4(800.0, 600.0, [1.0, 0.6]);
    assert_eq!(v, [800.0, 600.0, 1.0, 0.6]);
}
