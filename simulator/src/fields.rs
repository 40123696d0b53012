//! Background stars and the asteroid belt.
//! Both are generated once by the loader and only ever read here.

use crate::bodies::{Point, Vector};

/// One dot in the background.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BackgroundStar {
    pub pos: Point,
    /// Radius in screen pixels
    pub size: f64,
    pub opacity: f64,
    /// Color is stored as 0xRRGGBB
    pub color: u32,
}

/// One rock in the asteroid belt.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BeltParticle {
    /// Starting angle, radians
    pub angle: f64,
    /// Distance from the star, in AU
    pub distance: f64,
    /// Radius in screen pixels
    pub size: f64,
}

impl BeltParticle {
    /// Relative angular speed. Farther out is slower.
    pub fn speed(&self) -> f64 {
        4.0 * self.distance.sqrt().recip()
    }

    /// Where the rock is after the belt has turned by `belt_clock`.
    pub fn position(&self, belt_clock: f64, au_pixels: f64) -> Point {
        let angle = self.angle + belt_clock * self.speed();
        (Vector::new(angle.cos(), angle.sin()) * (self.distance * au_pixels)).to_point()
    }
}

/// The immutable point sets the renderer draws behind everything.
#[derive(Clone, Debug, Default)]
pub struct Fields {
    pub stars: Vec<BackgroundStar>,
    pub belt: Vec<BeltParticle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_rocks_lap_outer_rocks() {
        let inner = BeltParticle {
            angle: 0.0,
            distance: 2.2,
            size: 1.0,
        };
        let outer = BeltParticle {
            distance: 3.2,
            ..inner
        };
        assert!(inner.speed() > outer.speed());
        let p = inner.position(0.0, 120.0);
        assert!((p.x - 264.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
        assert!((inner.position(1.0, 120.0).to_vector().length() - 264.0).abs() < 1e-9);
    }
}
