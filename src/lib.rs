pub mod arena;
pub mod audio;
pub mod behavior;
pub mod color;
pub mod config;
pub mod director;
pub mod entity;
pub mod geometry;
pub mod input;
pub mod level;
pub mod levels;
pub mod random;
pub mod renderer;
pub mod scene;
pub mod timer;

/// Tolerance used by [`float_equals`].
pub const EPSILON: f32 = 0.0001;

/// `a` and `b` differ by at most [`EPSILON`].
pub fn float_equals(a: f32, b: f32) -> bool {
    float_equals_within(a, b, EPSILON)
}

pub fn float_equals_within(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}
