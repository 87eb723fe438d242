//! Composite hit area parameterized by an integer radius `r`.
//!
//! The area is the union of three closed sub-regions:
//! - `Sector`: quarter disk of radius r in the second quadrant.
//! - `Rectangle`: box x ∈ [0, r/2], y ∈ [-r, 0].
//! - `Triangle`: vertices (0,0), (0,-r), (-r/2,0).
//!
//! Boundaries count as hits. All arithmetic is f64; `r` is widened before any
//! product or division so `r/2` is a true half.

mod shapes;

pub use shapes::{Rectangle, Sector, Triangle};

use nalgebra::Vector2;

/// The three sub-regions for one radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub sector: Sector,
    pub rectangle: Rectangle,
    pub triangle: Triangle,
}

/// Which sub-regions contain a given point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Regions {
    pub sector: bool,
    pub rectangle: bool,
    pub triangle: bool,
}

impl Regions {
    #[inline]
    pub fn any(&self) -> bool {
        self.sector || self.rectangle || self.triangle
    }
}

impl Region {
    /// Build the area for radius `r`. Any integer is accepted; `r <= 0`
    /// produces a degenerate (possibly empty) area rather than an error.
    pub fn with_radius(r: i32) -> Self {
        let r = f64::from(r);
        Self {
            sector: Sector { radius: r },
            rectangle: Rectangle {
                width: r / 2.0,
                depth: r,
            },
            triangle: Triangle { height: r },
        }
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.sector.contains(p) || self.rectangle.contains(p) || self.triangle.contains(p)
    }

    /// Per-shape membership; `classify(p).any() == contains(p)`.
    pub fn classify(&self, p: Vector2<f64>) -> Regions {
        Regions {
            sector: self.sector.contains(p),
            rectangle: self.rectangle.contains(p),
            triangle: self.triangle.contains(p),
        }
    }
}

/// Whether `(x, y)` lies in the area for radius `r`. Total for all inputs.
#[inline]
pub fn is_hit(x: f64, y: f64, r: i32) -> bool {
    Region::with_radius(r).contains(Vector2::new(x, y))
}

#[cfg(test)]
mod tests;
