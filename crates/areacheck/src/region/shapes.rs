//! Closed sub-regions of the hit area. Each `contains` is a plain conjunction
//! of `<=`/`>=` comparisons; NaN coordinates fail every comparison and so are
//! never contained.

use nalgebra::Vector2;

/// Quarter disk `x <= 0, y >= 0, x² + y² <= radius²`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    pub radius: f64,
}

impl Sector {
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x <= 0.0 && p.y >= 0.0 && p.x * p.x + p.y * p.y <= self.radius * self.radius
    }
}

/// Box `0 <= x <= width, -depth <= y <= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub depth: f64,
}

impl Rectangle {
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y <= 0.0 && p.y >= -self.depth
    }
}

/// Right triangle with legs on the negative axes: (0,0), (0,-height), (-height/2,0).
///
/// The short leg is always half the long one, so the hypotenuse test is
/// `x >= -(y + height) / 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub height: f64,
}

impl Triangle {
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.y <= 0.0 && p.y >= -self.height && p.x <= 0.0 && p.x >= -(p.y + self.height) / 2.0
    }
}
