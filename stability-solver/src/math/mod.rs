//! Mathematical utilities for planar statics

pub mod polynomial;
pub mod vector;

use nalgebra::{Matrix2, Vector2};

pub use polynomial::Polynomial;
pub use vector::Vector2D;

pub type Mat2 = Matrix2<f64>;
pub type Vec2 = Vector2<f64>;

/// Rotation matrix for the angle whose tangent is `slope`.
///
/// Only meaningful for finite slopes; quarter turns are handled by
/// [`Vector2D::rotate_by_slope`].
pub fn slope_rotation(slope: f64) -> Mat2 {
    let hypot = (slope * slope + 1.0).sqrt();
    let cos = 1.0 / hypot;
    let sin = slope / hypot;

    Mat2::new(
        cos, -sin,
        sin, cos,
    )
}

/// Rotates every `(x, y)` point of a plot by the given slope
pub fn rotate_points(x: &[f64], y: &[f64], slope: f64) -> (Vec<f64>, Vec<f64>) {
    x.iter()
        .zip(y)
        .map(|(&px, &py)| Vector2D::new(px, py).rotate_by_slope(slope))
        .map(|p| (p.x, p.y))
        .unzip()
}

/// Multiplies every value of an axis by `factor`
pub fn scale_axis(axis: &[f64], factor: f64) -> Vec<f64> {
    axis.iter().map(|v| v * factor).collect()
}
