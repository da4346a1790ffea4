/// "Cover" UV scale factors for an image of aspect `image_aspect`
/// (width / height) shown in a `width` × `height` viewport: the image fills
/// the viewport and the longer axis is cropped, never letterboxed.
///
/// Returns `None` for degenerate inputs; callers keep their previous factors
/// until a valid resize arrives.
pub fn cover_factors(image_aspect: f32, width: f32, height: f32) -> Option<[f32; 2]> {
    if width <= 0.0 || height <= 0.0 || image_aspect <= 0.0 {
        return None;
    }
    let factors = if height / width > image_aspect {
        [(width / height) * image_aspect, 1.0]
    } else {
        [1.0, (height / width) / image_aspect]
    };
    Some(factors)
}

/// Pack viewport size and cover factors into the `resolution` vec4 handed to
/// the displacement shader: `(width, height, a1, a2)`.
pub fn resolution_vec4(width: f32, height: f32, factors: [f32; 2]) -> [f32; 4] {
    [width, height, factors[0], factors[1]]
}
