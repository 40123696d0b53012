//! Lets you load a solar system from a file.

use serde::Deserialize;

/// The whole file.
#[derive(Deserialize)]
struct RawSystem {
    #[serde(default)]
    settings: RawSettings,
    bodies: Vec<Entry>,
}

/// Anything left out keeps its default.
#[derive(Deserialize, Default)]
struct RawSettings {
    seed: Option<u64>,
    stars: Option<usize>,
    star_spread: Option<f64>,
    asteroids: Option<usize>,
    belt_au: Option<(f64, f64)>,
    belt_spread: Option<f64>,
    au_pixels: Option<f64>,
    initial_zoom: Option<f64>,
    initial_speed: Option<f64>,
    trail_capacity: Option<usize>,
    habitable_zone_au: Option<(f64, f64)>,
}

/// A Body in the catalogue
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Prefab(String), // A pre-made pre-defined Body, by name
    Custom(RawBody),
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawKind {
    Star,
    Planet,
    Dwarf,
    Comet,
}

#[derive(Deserialize)]
struct RawBody {
    name: String,
    kind: RawKind,
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    eccentricity: f64,
    #[serde(default)]
    speed: f64,
    radius: f64,
    color: u32,
    #[serde(default)]
    colors: Vec<u32>,
    #[serde(default)]
    ring: bool,
    #[serde(default)]
    atmosphere: bool,
    #[serde(default)]
    satellites: Vec<RawSatellite>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    facts: RawFacts,
}

#[derive(Deserialize)]
struct RawSatellite {
    name: String,
    distance: f64,
    speed: f64,
    radius: f64,
    #[serde(default = "get_moon_gray_for_serde")]
    color: u32,
    #[serde(default)]
    description: String,
}

/// Returns the default moon color because Serde needs a function
fn get_moon_gray_for_serde() -> u32 {
    0xCFCFCF
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawFacts {
    diameter: String,
    temp: String,
    day_length: String,
    year_length: String,
    fun_fact: String,
}

use crate::error::{LoadError, LoadResult};
use crate::fields::{self, FieldSettings};
use crate::prefabs;
use simulator::bodies::{self, Catalogue, Kind};
use simulator::config::SimConfig;
use simulator::fields::Fields;
use simulator::SolarSystem;

use std::path::Path;

/// Seed used when the file doesn't pick one.
pub const DEFAULT_SEED: u64 = 0x5EED_1AB5;

/// Everything needed to start a session.
#[derive(Clone, Debug)]
pub struct LoadedSystem {
    pub catalogue: Catalogue,
    pub fields: Fields,
    pub config: SimConfig,
    /// Starting phases come from this
    pub seed: u64,
}

impl LoadedSystem {
    pub fn into_solar_system(self) -> SolarSystem {
        SolarSystem::new(self.catalogue, self.fields, self.config, self.seed)
    }
}

/// Loads the contents of a system file.
pub fn load(contents: &str) -> LoadResult<LoadedSystem> {
    let raw: RawSystem = json5::from_str(contents)?;

    let bodies = raw
        .bodies
        .into_iter()
        .map(convert_entry)
        .collect::<LoadResult<Vec<_>>>()?;
    if bodies.is_empty() {
        return Err(LoadError::Empty);
    }
    for body in &bodies {
        check_body(body)?;
    }

    let (config, field_settings, seed) = apply_settings(raw.settings)?;
    let fields = fields::generate(&field_settings, seed)?;
    let catalogue = Catalogue::new(bodies);
    log::info!(
        "Loaded {} bodies: {}",
        catalogue.len(),
        catalogue
            .bodies()
            .iter()
            .map(|b| b.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(LoadedSystem {
        catalogue,
        fields,
        config,
        seed,
    })
}

/// Reads and loads a system file.
pub fn load_file<P: AsRef<Path>>(path: P) -> LoadResult<LoadedSystem> {
    log::info!("Reading system from {}", path.as_ref().display());
    let contents = std::fs::read_to_string(path)?;
    load(&contents)
}

/// Our own solar system with stock settings, no file needed.
pub fn default_system() -> LoadResult<LoadedSystem> {
    let fields = fields::generate(&FieldSettings::default(), DEFAULT_SEED)?;
    Ok(LoadedSystem {
        catalogue: prefabs::systems::tata_surya(),
        fields,
        config: SimConfig::default(),
        seed: DEFAULT_SEED,
    })
}

/// Helper function to convert from serde to real
fn convert_entry(entry: Entry) -> LoadResult<bodies::Body> {
    match entry {
        Entry::Prefab(id) => get_body_from_id(&id),
        Entry::Custom(raw) => Ok(bodies::Body {
            name: raw.name,
            kind: match raw.kind {
                RawKind::Star => Kind::Star,
                RawKind::Planet => Kind::Planet,
                RawKind::Dwarf => Kind::Dwarf,
                RawKind::Comet => Kind::Comet,
            },
            distance: raw.distance,
            eccentricity: raw.eccentricity,
            speed: raw.speed,
            radius: raw.radius,
            color: raw.color,
            colors: if raw.colors.is_empty() {
                vec![raw.color]
            } else {
                raw.colors
            },
            ring: raw.ring,
            atmosphere: raw.atmosphere,
            satellites: raw
                .satellites
                .into_iter()
                .map(|s| bodies::Satellite {
                    name: s.name,
                    distance: s.distance,
                    speed: s.speed,
                    radius: s.radius,
                    color: s.color,
                    description: s.description,
                })
                .collect(),
            description: raw.description,
            facts: bodies::Facts {
                diameter: raw.facts.diameter,
                temp: raw.facts.temp,
                day_length: raw.facts.day_length,
                year_length: raw.facts.year_length,
                fun_fact: raw.facts.fun_fact,
            },
        }),
    }
}

/// Anything the orbit maths can't cope with.
fn check_body(body: &bodies::Body) -> LoadResult<()> {
    let e = body.eccentricity;
    if !(e >= 0.0 && e < 1.0) {
        return Err(LoadError::BadEccentricity {
            name: body.name.clone(),
            eccentricity: e,
        });
    }
    if body.kind.orbits() && !(body.distance > 0.0) {
        log::warn!("{} orbits but sits on top of the star", body.name);
    }
    Ok(())
}

/// Splits the settings block into the simulation's config and the field generator's.
fn apply_settings(raw: RawSettings) -> LoadResult<(SimConfig, FieldSettings, u64)> {
    let mut config = SimConfig::default();
    let mut field_settings = FieldSettings::default();

    if let Some(au) = raw.au_pixels {
        if !(au.is_finite() && au > 0.0) {
            return Err(LoadError::BadSetting {
                name: "au_pixels",
                reason: format!("must be positive, got {}", au),
            });
        }
        config.au_pixels = au;
    }
    if let Some(zoom) = raw.initial_zoom {
        config.initial_zoom = config.clamp_zoom(zoom);
    }
    if let Some(speed) = raw.initial_speed {
        config.initial_speed = speed.max(0.0).min(config.max_speed);
    }
    if let Some(cap) = raw.trail_capacity {
        config.trail_capacity = cap;
    }
    if let Some((inner, outer)) = raw.habitable_zone_au {
        if !(inner > 0.0 && outer > inner) {
            return Err(LoadError::BadSetting {
                name: "habitable_zone_au",
                reason: format!("need 0 < inner < outer, got ({}, {})", inner, outer),
            });
        }
        config.habitable_zone_au = (inner, outer);
    }

    if let Some(n) = raw.stars {
        field_settings.stars = n;
    }
    if let Some(spread) = raw.star_spread {
        field_settings.star_spread = spread;
    }
    if let Some(n) = raw.asteroids {
        field_settings.asteroids = n;
    }
    if let Some(au) = raw.belt_au {
        field_settings.belt_au = au;
    }
    if let Some(spread) = raw.belt_spread {
        field_settings.belt_spread = spread;
    }

    Ok((config, field_settings, raw.seed.unwrap_or(DEFAULT_SEED)))
}

/// Gets a premade Body from its name
fn get_body_from_id(id: &str) -> LoadResult<bodies::Body> {
    use std::collections::HashMap;

    macro_rules! maker {
        (
            $($name:ident),*
        ) => {
            {
                let mut h: HashMap<String, fn() -> bodies::Body> = HashMap::new();
                $( h.insert(prefabs::bodies::$name().name, prefabs::bodies::$name); )*
                h
            }
        };
    }

    lazy_static! {
        static ref BODIES: HashMap<String, fn() -> bodies::Body> = maker![
            matahari,
            merkurius,
            venus,
            bumi,
            mars,
            jupiter,
            saturnus,
            uranus,
            neptunus,
            pluto,
            komet_halley
        ];
    }

    BODIES
        .get(id)
        .map(|make| make())
        .ok_or_else(|| LoadError::UnknownPrefab(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefabs_and_custom_bodies_mix() {
        let system = load(
            r#"{
                // A tiny system
                settings: { seed: 3, stars: 10, asteroids: 5, au_pixels: 100 },
                bodies: [
                    "Matahari",
                    "Bumi",
                    {
                        name: "Vulkan",
                        kind: "planet",
                        distance: 0.2,
                        eccentricity: 0.1,
                        speed: 6,
                        radius: 3,
                        color: 0xFF2200,
                        satellites: [{ name: "Spock", distance: 5, speed: 9, radius: 0.5 }],
                    },
                ],
            }"#,
        )
        .unwrap();
        let names: Vec<&str> = system
            .catalogue
            .bodies()
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, vec!["Matahari", "Bumi", "Vulkan"]);

        let vulkan = &system.catalogue.bodies()[2];
        assert_eq!(vulkan.kind, Kind::Planet);
        assert_eq!(vulkan.color, 0xFF2200);
        assert_eq!(vulkan.colors, vec![0xFF2200]);
        assert_eq!(vulkan.satellites[0].color, 0xCFCFCF);
        assert_eq!(system.catalogue.bodies()[1].satellites[0].name, "Bulan");

        assert_eq!(system.config.au_pixels, 100.0);
        assert_eq!(system.fields.stars.len(), 10);
        assert_eq!(system.fields.belt.len(), 5);
        assert_eq!(system.seed, 3);
    }

    #[test]
    fn unknown_prefabs_are_an_error() {
        match load(r#"{ bodies: ["Matahari", "Nibiru"] }"#) {
            Err(LoadError::UnknownPrefab(name)) => assert_eq!(name, "Nibiru"),
            other => panic!("expected an unknown prefab, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn open_orbits_are_an_error() {
        let contents = r#"{ bodies: [
            { name: "Oumuamua", kind: "comet", distance: 1, eccentricity: 1.2, radius: 1, color: 0xffffff },
        ] }"#;
        match load(contents) {
            Err(LoadError::BadEccentricity { name, eccentricity }) => {
                assert_eq!(name, "Oumuamua");
                assert_eq!(eccentricity, 1.2);
            }
            other => panic!("expected a bad eccentricity, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn empty_systems_are_an_error() {
        assert!(matches!(load("{ bodies: [] }"), Err(LoadError::Empty)));
    }

    #[test]
    fn broken_files_are_an_error() {
        assert!(matches!(load("{ bodies: [ "), Err(LoadError::Json5(_))));
        assert!(matches!(
            load_file("there/is/no/such/system.json5"),
            Err(LoadError::Io(_))
        ));
    }

    #[test]
    fn silly_settings_are_caught_or_clamped() {
        let system = load(r#"{ settings: { initial_zoom: 40, initial_speed: -1 }, bodies: ["Matahari"] }"#).unwrap();
        assert_eq!(system.config.initial_zoom, 5.0);
        assert_eq!(system.config.initial_speed, 0.0);

        assert!(matches!(
            load(r#"{ settings: { au_pixels: 0 }, bodies: ["Matahari"] }"#),
            Err(LoadError::BadSetting { name: "au_pixels", .. })
        ));
    }

    #[test]
    fn default_system_is_ours() {
        let system = default_system().unwrap();
        assert_eq!(system.catalogue.len(), 11);
        assert_eq!(system.catalogue.bodies()[0].name, "Matahari");
        let session = system.into_solar_system();
        assert_eq!(session.zoom(), 0.4);
    }
}
