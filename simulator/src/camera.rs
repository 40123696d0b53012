//! Where we're looking and how close.

use crate::bodies::{Catalogue, Point, Vector};
use crate::config::SimConfig;
use crate::orbit::BodyRuntimeState;

use euclid::default::Size2D;

/// The camera's persistent state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraState {
    /// Always inside the configured zoom bounds
    zoom: f64,
    /// Screen-pixel pan away from the viewport center
    pub offset: Vector,
    pub dragging: bool,
    /// Where the pointer was last seen while dragging
    pub last_pointer: Point,
}

impl CameraState {
    pub fn new(config: &SimConfig) -> Self {
        CameraState {
            zoom: config.clamp_zoom(config.initial_zoom),
            offset: Vector::zero(),
            dragging: false,
            last_pointer: Point::zero(),
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom, keeping it in bounds. Returns the zoom actually used.
    pub fn set_zoom(&mut self, zoom: f64, config: &SimConfig) -> f64 {
        // NaN would slip through min/max, so hold the old value instead
        if zoom.is_finite() {
            self.zoom = config.clamp_zoom(zoom);
        }
        self.zoom
    }

    /// Multiply the zoom, keeping it in bounds.
    pub fn scale_zoom(&mut self, factor: f64, config: &SimConfig) -> f64 {
        self.set_zoom(self.zoom * factor, config)
    }

    /// Effective transform for a viewport of this size.
    pub fn transform(&self, viewport: Size2D<f64>) -> ViewTransform {
        ViewTransform {
            origin: Point::new(viewport.width / 2.0, viewport.height / 2.0) + self.offset,
            scale: self.zoom,
        }
    }
}

/// Maps render space onto the screen: translate to the viewport center plus the pan offset,
/// then scale by the zoom. Drawing and picking both go through this.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewTransform {
    /// Screen position of the render-space origin (the star)
    pub origin: Point,
    pub scale: f64,
}

impl ViewTransform {
    pub fn to_screen(&self, world: Point) -> Point {
        self.origin + world.to_vector() * self.scale
    }

    pub fn to_world(&self, screen: Point) -> Point {
        ((screen - self.origin) / self.scale).to_point()
    }

    /// A length in screen pixels that stays the same size on screen whatever the zoom,
    /// expressed in render units.
    pub fn px(&self, pixels: f64) -> f64 {
        pixels / self.scale
    }
}

/// Find where the thing named `name` is: top-level bodies first, then every satellite.
pub fn locate(name: &str, catalogue: &Catalogue, runtime: &[BodyRuntimeState]) -> Option<Point> {
    let bodies = catalogue.bodies();
    if let Some(idx) = bodies.iter().position(|b| b.name == name) {
        return runtime.get(idx).map(|rt| rt.pos);
    }
    for (body, rt) in bodies.iter().zip(runtime.iter()) {
        if let Some(sat_idx) = body.satellites.iter().position(|s| s.name == name) {
            return rt.satellite_pos(body, sat_idx);
        }
    }
    None
}

/// If we're following something, put it in the middle of the screen.
/// If it can't be found the camera stays where it was.
/// Returns whether the target was found.
pub fn follow(
    camera: &mut CameraState,
    target: &str,
    catalogue: &Catalogue,
    runtime: &[BodyRuntimeState],
) -> bool {
    match locate(target, catalogue, runtime) {
        Some(pos) => {
            camera.offset = -pos.to_vector();
            true
        }
        None => false,
    }
}

/// The zoom to jump to when something with this radius gets selected.
/// Big things get 1, small things get zoomed in on, up to a cap.
pub fn select_zoom(radius: f64, config: &SimConfig) -> f64 {
    if radius >= config.large_radius {
        1.0
    } else {
        (config.select_zoom_factor / radius)
            .max(config.select_zoom_min)
            .min(config.select_zoom_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{Body, Kind, Satellite};

    fn setup() -> (Catalogue, Vec<BodyRuntimeState>, SimConfig) {
        let config = SimConfig::default();
        let cat = Catalogue::new(vec![
            Body::new("Sun", Kind::Star, 0.0, 0.0, 25.0),
            Body::new("Mars", Kind::Planet, 1.52, 0.094, 5.0)
                .with_satellite(Satellite::new("Phobos", 9.0, 18.0, 0.9))
                .with_satellite(Satellite::new("Deimos", 14.0, 14.0, 0.7)),
        ]);
        let rt = vec![
            BodyRuntimeState::new(&cat.bodies()[0], 0.0, vec![], &config),
            BodyRuntimeState::new(&cat.bodies()[1], 2.0, vec![0.3, 1.1], &config),
        ];
        (cat, rt, config)
    }

    #[test]
    fn zoom_is_clamped() {
        let config = SimConfig::default();
        let mut cam = CameraState::new(&config);
        assert_eq!(cam.zoom(), 0.4);
        assert_eq!(cam.set_zoom(100.0, &config), 5.0);
        assert_eq!(cam.set_zoom(-3.0, &config), 0.01);
        assert_eq!(cam.set_zoom(std::f64::NAN, &config), 0.01);
        for _ in 0..50 {
            cam.scale_zoom(1.7, &config);
        }
        assert_eq!(cam.zoom(), 5.0);
    }

    #[test]
    fn transform_round_trips() {
        let config = SimConfig::default();
        let mut cam = CameraState::new(&config);
        cam.offset = Vector::new(30.0, -12.0);
        let t = cam.transform(Size2D::new(800.0, 600.0));
        assert_eq!(t.to_screen(Point::zero()), Point::new(430.0, 288.0));
        let w = Point::new(-57.0, 91.5);
        let back = t.to_world(t.to_screen(w));
        assert!((back - w).length() < 1e-9);
    }

    #[test]
    fn follows_bodies_and_satellites() {
        let (cat, rt, config) = setup();
        let mut cam = CameraState::new(&config);

        assert!(follow(&mut cam, "Mars", &cat, &rt));
        assert_eq!(cam.offset, -rt[1].pos.to_vector());

        assert!(follow(&mut cam, "Deimos", &cat, &rt));
        let deimos = rt[1].satellite_pos(&cat.bodies()[1], 1).unwrap();
        assert_eq!(cam.offset, -deimos.to_vector());
    }

    #[test]
    fn missing_target_leaves_camera_alone() {
        let (cat, rt, config) = setup();
        let mut cam = CameraState::new(&config);
        cam.offset = Vector::new(5.0, 6.0);
        assert!(!follow(&mut cam, "Vulcan", &cat, &rt));
        assert_eq!(cam.offset, Vector::new(5.0, 6.0));
    }

    #[test]
    fn select_zoom_clamps() {
        let config = SimConfig::default();
        assert_eq!(select_zoom(4.0, &config), 3.5);
        assert_eq!(select_zoom(10.0, &config), 2.0);
        assert_eq!(select_zoom(14.0, &config), 20.0 / 14.0);
        assert_eq!(select_zoom(15.0, &config), 1.0);
        assert_eq!(select_zoom(25.0, &config), 1.0);
        assert_eq!(select_zoom(0.7, &config), 3.5);
    }
}
