//! Handles bodies and such

use euclid::default::{Point2D, Vector2D};

/// A point in render space. The star sits at (0, 0).
pub type Point = Point2D<f64>;
/// An offset in render space.
pub type Vector = Vector2D<f64>;

/// What kind of thing something is.
/// Bodies in the catalogue are never `Satellite`; that one only shows up for picks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Star,
    Planet,
    Dwarf,
    Comet,
    Satellite,
}

impl Kind {
    /// Does this thing move around the star?
    pub fn orbits(self) -> bool {
        match self {
            Kind::Star => false,
            Kind::Planet | Kind::Dwarf | Kind::Comet => true,
            Kind::Satellite => false,
        }
    }

    /// Human name for the detail panel
    pub fn label(self) -> &'static str {
        match self {
            Kind::Star => "Bintang",
            Kind::Planet => "Planet",
            Kind::Dwarf => "Planet Kerdil",
            Kind::Comet => "Komet",
            Kind::Satellite => "Satelit Alami",
        }
    }
}

/// Descriptive stats shown in the detail panel. Pure display data.
#[derive(Clone, Debug, Default)]
pub struct Facts {
    pub diameter: String,
    pub temp: String,
    pub day_length: String,
    pub year_length: String,
    pub fun_fact: String,
}

/// The representation of a body, like a star, planet, comet...
/// Doesn't store its position; see `orbit::BodyRuntimeState` for that.
#[derive(Clone, Debug)]
pub struct Body {
    pub name: String,
    pub kind: Kind,
    /// Semi-major axis, in AU
    pub distance: f64,
    /// 0 is a circle. Must be below 1.
    pub eccentricity: f64,
    /// Base angular speed, before the Kepler fudge and the speed multiplier
    pub speed: f64,
    /// Radius in render units
    pub radius: f64,
    /// Color is stored as 0xRRGGBB
    pub color: u32,
    /// Gradient stops, inside to outside. Colors are stored as 0xRRGGBB
    pub colors: Vec<u32>,
    pub ring: bool,
    /// Draw a hazy glow around it
    pub atmosphere: bool,
    pub satellites: Vec<Satellite>,
    pub description: String,
    pub facts: Facts,
}

impl Body {
    /// A bare body with sensible blanks, handy for building catalogues by hand.
    pub fn new(name: &str, kind: Kind, distance: f64, eccentricity: f64, radius: f64) -> Self {
        Body {
            name: name.to_string(),
            kind,
            distance,
            eccentricity,
            speed: 1.0,
            radius,
            color: 0xffffff,
            colors: vec![0xffffff],
            ring: false,
            atmosphere: false,
            satellites: Vec::new(),
            description: String::new(),
            facts: Facts::default(),
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_satellite(mut self, satellite: Satellite) -> Self {
        self.satellites.push(satellite);
        self
    }
}

/// A moon. Its position is always relative to the parent body.
#[derive(Clone, Debug)]
pub struct Satellite {
    pub name: String,
    /// Distance from the parent's center in render units
    pub distance: f64,
    /// Radians per tick at speed 1, before the satellite rate. Negative goes backwards.
    pub speed: f64,
    pub radius: f64,
    /// Color is stored as 0xRRGGBB
    pub color: u32,
    pub description: String,
}

impl Satellite {
    pub fn new(name: &str, distance: f64, speed: f64, radius: f64) -> Self {
        Satellite {
            name: name.to_string(),
            distance,
            speed,
            radius,
            color: 0xcfcfcf,
            description: String::new(),
        }
    }
}

/// The ordered, immutable table of bodies the session runs on.
#[derive(Clone, Debug, Default)]
pub struct Catalogue {
    bodies: Vec<Body>,
}

impl Catalogue {
    pub fn new(bodies: Vec<Body>) -> Self {
        Catalogue { bodies }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn get(&self, idx: usize) -> Option<&Body> {
        self.bodies.get(idx)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Index of the body with this name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }
}

/// A reference to something you can point at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pick {
    /// Index into the catalogue
    Body(usize),
    /// Parent's catalogue index, then the satellite's index in the parent
    Satellite(usize, usize),
}

/// Whatever a `Pick` points at, borrowed from the catalogue.
#[derive(Copy, Clone, Debug)]
pub enum Subject<'a> {
    Body(&'a Body),
    Satellite(&'a Satellite),
}

impl<'a> Subject<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Subject::Body(b) => &b.name,
            Subject::Satellite(s) => &s.name,
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Subject::Body(b) => b.kind,
            Subject::Satellite(_) => Kind::Satellite,
        }
    }

    pub fn radius(&self) -> f64 {
        match self {
            Subject::Body(b) => b.radius,
            Subject::Satellite(s) => s.radius,
        }
    }

    pub fn color(&self) -> u32 {
        match self {
            Subject::Body(b) => b.color,
            Subject::Satellite(s) => s.color,
        }
    }

    pub fn description(&self) -> &'a str {
        match self {
            Subject::Body(b) => &b.description,
            Subject::Satellite(s) => &s.description,
        }
    }
}

impl Pick {
    /// Look the pick up in a catalogue.
    pub fn resolve(self, catalogue: &Catalogue) -> Option<Subject<'_>> {
        match self {
            Pick::Body(idx) => catalogue.get(idx).map(Subject::Body),
            Pick::Satellite(idx, sat) => catalogue
                .get(idx)
                .and_then(|b| b.satellites.get(sat))
                .map(Subject::Satellite),
        }
    }

    /// The catalogue index of the body this pick lives on
    pub fn body_index(self) -> usize {
        match self {
            Pick::Body(idx) | Pick::Satellite(idx, _) => idx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn little_catalogue() -> Catalogue {
        Catalogue::new(vec![
            Body::new("Sun", Kind::Star, 0.0, 0.0, 25.0),
            Body::new("Earth", Kind::Planet, 1.0, 0.017, 7.5)
                .with_satellite(Satellite::new("Moon", 14.0, 12.0, 2.0)),
        ])
    }

    #[test]
    fn only_non_stars_orbit() {
        assert!(!Kind::Star.orbits());
        assert!(Kind::Planet.orbits());
        assert!(Kind::Dwarf.orbits());
        assert!(Kind::Comet.orbits());
    }

    #[test]
    fn picks_resolve_to_subjects() {
        let cat = little_catalogue();
        let moon = Pick::Satellite(1, 0).resolve(&cat).unwrap();
        assert_eq!(moon.name(), "Moon");
        assert_eq!(moon.kind(), Kind::Satellite);
        assert_eq!(Pick::Body(0).resolve(&cat).unwrap().kind(), Kind::Star);
        assert!(Pick::Satellite(0, 0).resolve(&cat).is_none());
        assert!(Pick::Body(9).resolve(&cat).is_none());
    }

    #[test]
    fn catalogue_finds_by_name() {
        let cat = little_catalogue();
        assert_eq!(cat.position("Earth"), Some(1));
        assert_eq!(cat.position("Pluto"), None);
    }
}
