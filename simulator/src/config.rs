//! Every knob the simulation has.

/// Tunables for the simulation, camera and picking.
/// `Default` gives the stock values; the loader may override some of them from a system file.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Render units per AU
    pub au_pixels: f64,
    /// Radians per tick at speed 1 for bodies, before the Kepler fudge
    pub base_rate: f64,
    /// Radians per tick at speed 1 for satellites
    pub satellite_rate: f64,
    /// How many trail points each body keeps
    pub trail_capacity: usize,
    /// A comet drops a trail point every this many ticks
    pub comet_trail_period: u64,
    /// Everything else drops a trail point every this many ticks
    pub planet_trail_period: u64,
    /// Simulated milliseconds per tick at speed 1
    pub clock_ms_per_tick: f64,

    pub min_zoom: f64,
    pub max_zoom: f64,
    pub initial_zoom: f64,
    pub initial_speed: f64,
    pub max_speed: f64,
    /// Zoom change per wheel unit, multiplied by the current zoom
    pub wheel_sensitivity: f64,

    /// Satellites are drawn and pickable above this zoom
    pub satellite_zoom: f64,
    /// Labels are drawn below this zoom
    pub label_zoom: f64,
    /// Smallest hit radius for a body, in pixels
    pub body_hit_px: f64,
    /// Smallest hit radius for a satellite, in pixels
    pub satellite_hit_px: f64,

    /// Bodies at least this big get zoom 1 on select
    pub large_radius: f64,
    /// Small bodies get zoom `select_zoom_factor / radius`
    pub select_zoom_factor: f64,
    pub select_zoom_min: f64,
    pub select_zoom_max: f64,

    /// Pointer travel below this many pixels still counts as a tap
    pub tap_slop_px: f64,
    /// Touches longer than this are not taps
    pub tap_max_ms: u64,

    /// Comets grow tails inside this many AU
    pub tail_range_au: f64,
    /// Inner and outer edge of the habitable zone, in AU
    pub habitable_zone_au: (f64, f64),
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            au_pixels: 120.0,
            base_rate: 0.002,
            satellite_rate: 0.02,
            trail_capacity: 80,
            comet_trail_period: 2,
            planet_trail_period: 4,
            clock_ms_per_tick: 86_400_000.0 * 0.1, // a tenth of a day

            min_zoom: 0.01,
            max_zoom: 5.0,
            initial_zoom: 0.4,
            initial_speed: 1.0,
            max_speed: 10.0,
            wheel_sensitivity: 0.001,

            satellite_zoom: 0.15,
            label_zoom: 0.25,
            body_hit_px: 12.0,
            satellite_hit_px: 6.0,

            large_radius: 15.0,
            select_zoom_factor: 20.0,
            select_zoom_min: 1.0,
            select_zoom_max: 3.5,

            tap_slop_px: 10.0,
            tap_max_ms: 300,

            tail_range_au: 5.0,
            habitable_zone_au: (0.95, 1.67),
        }
    }
}

impl SimConfig {
    /// Clamp a zoom value into the allowed range.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }
}
