//! Stroke glyphs for the axis labels
//!
//! Each glyph is a handful of line strokes in a unit cell spanning
//! `[-0.5, 0.5]` on both axes, +y down like pixels. Only the letters the
//! viewer draws are defined.

/// One stroke, start and end in cell coordinates
pub type Stroke = [[f32; 2]; 2];

/// Width of a glyph relative to its height
pub const GLYPH_ASPECT: f32 = 0.7;

const X: &[Stroke] = &[
    [[-0.5, -0.5], [0.5, 0.5]],
    [[0.5, -0.5], [-0.5, 0.5]],
];

const Y: &[Stroke] = &[
    [[-0.5, -0.5], [0.0, 0.0]],
    [[0.5, -0.5], [0.0, 0.0]],
    [[0.0, 0.0], [0.0, 0.5]],
];

const Z: &[Stroke] = &[
    [[-0.5, -0.5], [0.5, -0.5]],
    [[0.5, -0.5], [-0.5, 0.5]],
    [[-0.5, 0.5], [0.5, 0.5]],
];

const W: &[Stroke] = &[
    [[-0.5, -0.5], [-0.25, 0.5]],
    [[-0.25, 0.5], [0.0, 0.0]],
    [[0.0, 0.0], [0.25, 0.5]],
    [[0.25, 0.5], [0.5, -0.5]],
];

/// Strokes for `c`, or `None` if the letter has no glyph
pub fn strokes(c: char) -> Option<&'static [Stroke]> {
    match c.to_ascii_uppercase() {
        'X' => Some(X),
        'Y' => Some(Y),
        'Z' => Some(Z),
        'W' => Some(W),
        _ => None,
    }
}
