//! Moves things along their orbits.
//!
//! Physics here is angle based: every tick nudges each phase angle forward, and positions
//! are derived from the angle and the static orbital parameters. Nothing is integrated.

use crate::bodies::{Body, Catalogue, Kind, Point, Satellite, Vector};
use crate::config::SimConfig;

use std::collections::VecDeque;

/// The shape of an elliptical orbit in render units, with the star at a focus.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrbitGeometry {
    /// Semi-major axis
    pub a: f64,
    /// Semi-minor axis
    pub b: f64,
    /// Distance from the ellipse's center to the focus
    pub c: f64,
    pub e: f64,
}

impl OrbitGeometry {
    /// Eccentricity has to be in [0, 1) or `b` comes out NaN. Catalogues are trusted.
    pub fn new(distance: f64, eccentricity: f64, au_pixels: f64) -> Self {
        let a = distance * au_pixels;
        let e = eccentricity;
        OrbitGeometry {
            a,
            b: a * (1.0 - e * e).sqrt(),
            c: a * e,
            e,
        }
    }

    pub fn of(body: &Body, config: &SimConfig) -> Self {
        OrbitGeometry::new(body.distance, body.eccentricity, config.au_pixels)
    }

    /// Where the geometric center of the ellipse is. The star is at the origin.
    pub fn center(&self) -> Point {
        Point::new(-self.c, 0.0)
    }

    /// Focus-relative position at a phase angle.
    pub fn position(&self, phase: f64) -> Point {
        Point::new(self.a * phase.cos() - self.c, self.b * phase.sin())
    }

    /// Distance from the focus over the semi-major axis, from the polar conic
    /// r(θ) = a(1 - e²) / (1 + e cos θ).
    pub fn normalized_radius(&self, phase: f64) -> f64 {
        (1.0 - self.e * self.e) / (1.0 + self.e * phase.cos())
    }
}

/// How far a body's phase moves this tick.
/// Faster near perihelion and slower near aphelion, roughly like Kepler's second law.
/// `phase` is last tick's angle.
pub fn angular_step(body: &Body, geometry: &OrbitGeometry, phase: f64, multiplier: f64, config: &SimConfig) -> f64 {
    let r = geometry.normalized_radius(phase);
    body.speed * config.base_rate * multiplier / (r * r)
}

/// Where a satellite is, given where its parent is.
/// Everything that needs a satellite's position goes through here.
pub fn satellite_position(parent: Point, satellite: &Satellite, phase: f64) -> Point {
    parent + Vector::new(phase.cos(), phase.sin()) * satellite.distance
}

/// The moving part of a satellite. Just the angle; the position is always derived.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SatelliteRuntimeState {
    pub phase: f64,
}

/// The moving part of a body.
#[derive(Clone, Debug)]
pub struct BodyRuntimeState {
    /// Radians, never wrapped
    pub phase: f64,
    /// Focus-relative position, refreshed from `phase` every tick
    pub pos: Point,
    /// Recent positions, oldest first
    trail: VecDeque<Point>,
    pub satellites: Vec<SatelliteRuntimeState>,
}

impl BodyRuntimeState {
    pub fn new(body: &Body, phase: f64, satellite_phases: Vec<f64>, config: &SimConfig) -> Self {
        let pos = if body.kind.orbits() {
            OrbitGeometry::of(body, config).position(phase)
        } else {
            Point::zero()
        };
        debug_assert_eq!(satellite_phases.len(), body.satellites.len());
        BodyRuntimeState {
            phase,
            pos,
            trail: VecDeque::with_capacity(config.trail_capacity + 1),
            satellites: satellite_phases
                .into_iter()
                .map(|phase| SatelliteRuntimeState { phase })
                .collect(),
        }
    }

    pub fn trail(&self) -> &VecDeque<Point> {
        &self.trail
    }

    /// Add a point to the trail, throwing out the oldest if it's too long.
    pub fn push_trail(&mut self, point: Point, capacity: usize) {
        self.trail.push_back(point);
        while self.trail.len() > capacity {
            self.trail.pop_front();
        }
    }

    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// Where satellite `idx` of this body is right now.
    pub fn satellite_pos(&self, body: &Body, idx: usize) -> Option<Point> {
        let sat = body.satellites.get(idx)?;
        let rt = self.satellites.get(idx)?;
        Some(satellite_position(self.pos, sat, rt.phase))
    }
}

/// Does a body of this kind drop a trail point on this tick?
pub fn samples_trail(kind: Kind, tick: u64, config: &SimConfig) -> bool {
    let period = match kind {
        Kind::Comet => config.comet_trail_period,
        Kind::Planet | Kind::Dwarf => config.planet_trail_period,
        Kind::Star | Kind::Satellite => return false,
    };
    tick % period.max(1) == 0
}

/// Advance every orbiting body and every satellite by one tick.
/// `tick` is the number of ticks run before this one.
pub fn advance(
    catalogue: &Catalogue,
    runtime: &mut [BodyRuntimeState],
    multiplier: f64,
    tick: u64,
    config: &SimConfig,
) {
    for (body, rt) in catalogue.bodies().iter().zip(runtime.iter_mut()) {
        match body.kind {
            Kind::Star | Kind::Satellite => {
                // Stays put
                rt.pos = Point::zero();
            }
            Kind::Planet | Kind::Dwarf | Kind::Comet => {
                let geometry = OrbitGeometry::of(body, config);
                rt.phase += angular_step(body, &geometry, rt.phase, multiplier, config);
                rt.pos = geometry.position(rt.phase);

                if samples_trail(body.kind, tick, config) {
                    let pos = rt.pos;
                    rt.push_trail(pos, config.trail_capacity);
                }
            }
        }

        for (sat, sat_rt) in body.satellites.iter().zip(rt.satellites.iter_mut()) {
            sat_rt.phase += sat.speed * config.satellite_rate * multiplier;
        }
    }
}
