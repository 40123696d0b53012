//! Works out what's under the pointer.

use crate::bodies::{Catalogue, Kind, Pick, Point};
use crate::camera::ViewTransform;
use crate::config::SimConfig;
use crate::orbit::BodyRuntimeState;

/// Everything the hit tester needs to look at, borrowed from the session.
pub struct HitTester<'a> {
    pub catalogue: &'a Catalogue,
    pub runtime: &'a [BodyRuntimeState],
    pub transform: ViewTransform,
    pub config: &'a SimConfig,
    pub show_comets: bool,
}

/// Screen radius you have to be inside to hit something this big.
/// Tiny things still get a few pixels so you can click on them.
pub fn hit_radius(radius: f64, scale: f64, min_px: f64) -> f64 {
    (radius * scale).max(min_px)
}

impl<'a> HitTester<'a> {
    /// Satellites are only on screen when we're zoomed in enough.
    pub fn satellites_visible(&self) -> bool {
        self.transform.scale > self.config.satellite_zoom
    }

    /// Is this kind of body being drawn at all?
    pub fn is_shown(&self, kind: Kind) -> bool {
        kind != Kind::Comet || self.show_comets
    }

    /// Find the first thing, in catalogue order, whose hit circle holds `screen`.
    /// A body's satellites are tried before the body itself.
    pub fn pick(&self, screen: Point) -> Option<Pick> {
        let scale = self.transform.scale;
        for (idx, (body, rt)) in self
            .catalogue
            .bodies()
            .iter()
            .zip(self.runtime.iter())
            .enumerate()
        {
            if !self.is_shown(body.kind) {
                continue;
            }
            let world = match body.kind {
                Kind::Star => Point::zero(),
                _ => rt.pos,
            };

            if self.satellites_visible() {
                for sat_idx in 0..body.satellites.len() {
                    let sat = &body.satellites[sat_idx];
                    let sat_world = match rt.satellite_pos(body, sat_idx) {
                        Some(p) => p,
                        None => continue,
                    };
                    let on_screen = self.transform.to_screen(sat_world);
                    let reach = hit_radius(sat.radius, scale, self.config.satellite_hit_px);
                    if (screen - on_screen).length() < reach {
                        return Some(Pick::Satellite(idx, sat_idx));
                    }
                }
            }

            let on_screen = self.transform.to_screen(world);
            let reach = hit_radius(body.radius, scale, self.config.body_hit_px);
            if (screen - on_screen).length() < reach {
                return Some(Pick::Body(idx));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{Body, Satellite, Vector};

    struct Fixture {
        catalogue: Catalogue,
        runtime: Vec<BodyRuntimeState>,
        config: SimConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let config = SimConfig::default();
            let catalogue = Catalogue::new(vec![
                Body::new("Sun", Kind::Star, 0.0, 0.0, 25.0),
                Body::new("Earth", Kind::Planet, 1.0, 0.0, 7.5)
                    .with_satellite(Satellite::new("Moon", 14.0, 12.0, 2.0)),
                Body::new("Halley", Kind::Comet, 2.0, 0.0, 3.0),
            ]);
            let runtime = vec![
                BodyRuntimeState::new(&catalogue.bodies()[0], 0.0, vec![], &config),
                // Earth at (120, 0), moon straight "up" from it
                BodyRuntimeState::new(&catalogue.bodies()[1], 0.0, vec![std::f64::consts::FRAC_PI_2], &config),
                // Halley at (-240, 0)
                BodyRuntimeState::new(&catalogue.bodies()[2], std::f64::consts::PI, vec![], &config),
            ];
            Fixture {
                catalogue,
                runtime,
                config,
            }
        }

        fn tester(&self, scale: f64, show_comets: bool) -> HitTester<'_> {
            HitTester {
                catalogue: &self.catalogue,
                runtime: &self.runtime,
                transform: ViewTransform {
                    origin: Point::new(400.0, 300.0),
                    scale,
                },
                config: &self.config,
                show_comets,
            }
        }
    }

    #[test]
    fn hit_radius_boundary() {
        let f = Fixture::new();
        let t = f.tester(1.0, true);
        let earth = t.transform.to_screen(f.runtime[1].pos);
        // Earth's own radius wins over the 12px floor at zoom 1
        let reach = hit_radius(7.5, 1.0, 12.0);
        assert_eq!(reach, 12.0);
        // Step away from the moon, downwards
        assert_eq!(t.pick(earth + Vector::new(0.0, -(reach - 0.01))), Some(Pick::Body(1)));
        assert_eq!(t.pick(earth + Vector::new(0.0, -(reach + 0.01))), None);

        let t = f.tester(4.0, true);
        let earth = t.transform.to_screen(f.runtime[1].pos);
        let reach = hit_radius(7.5, 4.0, 12.0);
        assert_eq!(reach, 30.0);
        assert_eq!(t.pick(earth + Vector::new(reach - 0.01, 0.0)), Some(Pick::Body(1)));
        assert_eq!(t.pick(earth + Vector::new(reach + 0.01, 0.0)), None);
    }

    #[test]
    fn satellite_beats_parent() {
        let f = Fixture::new();
        let t = f.tester(1.0, true);
        let moon = t.transform.to_screen(f.runtime[1].satellite_pos(&f.catalogue.bodies()[1], 0).unwrap());
        // The moon sits 14px from Earth; 3px towards Earth is inside both hit circles
        let both = moon + Vector::new(0.0, -3.0);
        let earth = t.transform.to_screen(f.runtime[1].pos);
        assert!((both - earth).length() < 12.0);
        assert_eq!(t.pick(both), Some(Pick::Satellite(1, 0)));
    }

    #[test]
    fn satellites_ignored_when_zoomed_out() {
        let f = Fixture::new();
        let t = f.tester(0.1, true);
        let moon = t.transform.to_screen(f.runtime[1].satellite_pos(&f.catalogue.bodies()[1], 0).unwrap());
        // at zoom 0.1 the moon is 1.4px from Earth, so Earth takes it
        assert_eq!(t.pick(moon), Some(Pick::Body(1)));
    }

    #[test]
    fn star_sits_at_the_origin() {
        let f = Fixture::new();
        let t = f.tester(1.0, true);
        assert_eq!(t.pick(Point::new(405.0, 290.0)), Some(Pick::Body(0)));
    }

    #[test]
    fn hidden_comets_cannot_be_picked() {
        let f = Fixture::new();
        let halley = f.tester(1.0, true).transform.to_screen(f.runtime[2].pos);
        assert_eq!(f.tester(1.0, true).pick(halley), Some(Pick::Body(2)));
        assert_eq!(f.tester(1.0, false).pick(halley), None);
    }

    #[test]
    fn empty_space_is_nothing() {
        let f = Fixture::new();
        assert_eq!(f.tester(1.0, true).pick(Point::new(0.0, 0.0)), None);
    }
}
