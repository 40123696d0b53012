//! Scatters the background stars and the asteroid belt.

use crate::error::{LoadError, LoadResult};
use simulator::bodies::Point;
use simulator::fields::{BackgroundStar, BeltParticle, Fields};

use rand::{rngs::SmallRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use std::f64::consts::PI;

/// White, blue-ish, yellow-ish, red-ish
const STAR_COLORS: [u32; 4] = [0xFFFFFF, 0xD6EBFF, 0xFFF4D6, 0xFFDAB8];

/// How to scatter things. Every field here can be set from a system file.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSettings {
    pub stars: usize,
    /// Stars land in a square this far out from the middle, in render units
    pub star_spread: f64,
    pub asteroids: usize,
    /// Inner and outer edge of the belt, in AU
    pub belt_au: (f64, f64),
    /// Standard deviation of the belt's density, in AU. The belt is thickest in the middle.
    pub belt_spread: f64,
}

impl Default for FieldSettings {
    fn default() -> Self {
        FieldSettings {
            stars: 1000,
            star_spread: 2000.0,
            asteroids: 500,
            belt_au: (2.2, 3.2),
            belt_spread: 0.3,
        }
    }
}

impl FieldSettings {
    pub fn check(&self) -> LoadResult<()> {
        let (inner, outer) = self.belt_au;
        if !(inner > 0.0 && outer > inner) {
            return Err(LoadError::BadSetting {
                name: "belt_au",
                reason: format!("need 0 < inner < outer, got ({}, {})", inner, outer),
            });
        }
        if !(self.belt_spread.is_finite() && self.belt_spread > 0.0) {
            return Err(LoadError::BadSetting {
                name: "belt_spread",
                reason: format!("must be positive, got {}", self.belt_spread),
            });
        }
        if !(self.star_spread.is_finite() && self.star_spread > 0.0) {
            return Err(LoadError::BadSetting {
                name: "star_spread",
                reason: format!("must be positive, got {}", self.star_spread),
            });
        }
        Ok(())
    }
}

/// Scatter stars uniformly over a square.
pub fn stars(settings: &FieldSettings, rand: &mut SmallRng) -> Vec<BackgroundStar> {
    let spread = settings.star_spread;
    (0..settings.stars)
        .map(|_| BackgroundStar {
            pos: Point::new(rand.gen_range(-spread, spread), rand.gen_range(-spread, spread)),
            size: rand.gen_range(0.2, 1.7),
            opacity: rand.gen_range(0.2, 1.0),
            color: STAR_COLORS[rand.gen_range(0, STAR_COLORS.len())],
        })
        .collect()
}

/// Scatter asteroids around the belt, thickest in the middle.
pub fn belt(settings: &FieldSettings, rand: &mut SmallRng) -> LoadResult<Vec<BeltParticle>> {
    let (inner, outer) = settings.belt_au;
    let normal = Normal::new((inner + outer) / 2.0, settings.belt_spread).map_err(|e| {
        LoadError::BadSetting {
            name: "belt_spread",
            reason: format!("{:?}", e),
        }
    })?;

    Ok((0..settings.asteroids)
        .map(|_| {
            // Anything thrown outside the belt gets a second, flat chance
            let sample = normal.sample(rand);
            let distance = if sample >= inner && sample <= outer {
                sample
            } else {
                rand.gen_range(inner, outer)
            };
            BeltParticle {
                angle: rand.gen_range(0.0, 2.0 * PI),
                distance,
                size: rand.gen_range(0.5, 2.0),
            }
        })
        .collect())
}

/// Make both fields from one seed.
pub fn generate(settings: &FieldSettings, seed: u64) -> LoadResult<Fields> {
    settings.check()?;
    let mut rand = SmallRng::seed_from_u64(seed);
    let stars = stars(settings, &mut rand);
    let belt = belt(settings, &mut rand)?;
    log::info!("Scattered {} stars and {} asteroids", stars.len(), belt.len());
    Ok(Fields { stars, belt })
}
