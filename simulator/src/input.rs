//! Turns raw pointer and touch input into camera moves and taps.
//!
//! This only knows about the camera. Picking and selection happen in the session,
//! which asks this module what kind of gesture just happened.

use crate::bodies::{Point, Vector};
use crate::camera::CameraState;
use crate::config::SimConfig;

/// Start panning from `pos`.
pub fn begin_drag(camera: &mut CameraState, pos: Point) {
    camera.dragging = true;
    camera.last_pointer = pos;
}

/// Pan by however far the pointer moved since last time. Returns the move.
pub fn drag_to(camera: &mut CameraState, pos: Point) -> Vector {
    let delta = pos - camera.last_pointer;
    camera.offset += delta;
    camera.last_pointer = pos;
    delta
}

pub fn end_drag(camera: &mut CameraState) {
    camera.dragging = false;
}

/// Scroll to zoom. The step is proportional to the current zoom, so it feels multiplicative.
/// Positive `delta_y` (scrolling down/towards you) zooms out.
pub fn wheel_zoom(camera: &mut CameraState, delta_y: f64, config: &SimConfig) -> f64 {
    let zoom = camera.zoom();
    camera.set_zoom(zoom - delta_y * config.wheel_sensitivity * zoom, config)
}

/// Keeps track of whether a press is still a tap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TapTracker {
    pub start: Point,
    /// Total distance moved, in pixels
    pub travelled: f64,
    pub started_ms: u64,
    /// Set once a second finger shows up
    pub spoiled: bool,
}

impl TapTracker {
    pub fn new(start: Point, now_ms: u64) -> Self {
        TapTracker {
            start,
            travelled: 0.0,
            started_ms: now_ms,
            spoiled: false,
        }
    }

    pub fn moved(&mut self, delta: Vector) {
        self.travelled += delta.length();
    }

    /// Pointer clicks only care about distance.
    pub fn is_click(&self, config: &SimConfig) -> bool {
        !self.spoiled && self.travelled < config.tap_slop_px
    }

    /// Touch taps also have to be quick.
    pub fn is_tap(&self, now_ms: u64, config: &SimConfig) -> bool {
        self.is_click(config) && now_ms.saturating_sub(self.started_ms) < config.tap_max_ms
    }
}

/// What a touch move turned into.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TouchMotion {
    /// One finger dragging; the camera was panned by this much
    Pan(Vector),
    /// Two fingers; the zoom is now this
    Pinch(f64),
    /// First two-finger move, only sets the baseline
    PinchStarted,
    Nothing,
}

/// Touch state across a gesture.
#[derive(Clone, Debug, Default)]
pub struct TouchGesture {
    /// Finger spread from the previous pinch move
    pinch_baseline: Option<f64>,
    tap: Option<TapTracker>,
}

fn spread(touches: &[Point]) -> Option<f64> {
    match touches {
        [a, b, ..] => Some((*a - *b).length()),
        _ => None,
    }
}

impl TouchGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingers went down. `touches` is every finger currently touching.
    pub fn start(&mut self, touches: &[Point], now_ms: u64, camera: &mut CameraState) {
        match touches {
            [] => {}
            [only] => {
                begin_drag(camera, *only);
                self.tap = Some(TapTracker::new(*only, now_ms));
                self.pinch_baseline = None;
            }
            _ => {
                end_drag(camera);
                self.pinch_baseline = None;
                if let Some(tap) = self.tap.as_mut() {
                    tap.spoiled = true;
                }
            }
        }
    }

    /// Fingers moved.
    pub fn move_to(&mut self, touches: &[Point], camera: &mut CameraState, config: &SimConfig) -> TouchMotion {
        match touches {
            [] => TouchMotion::Nothing,
            [only] => {
                if !camera.dragging {
                    // Came back down to one finger after a pinch
                    begin_drag(camera, *only);
                    return TouchMotion::Nothing;
                }
                let delta = drag_to(camera, *only);
                if let Some(tap) = self.tap.as_mut() {
                    tap.moved(delta);
                }
                TouchMotion::Pan(delta)
            }
            _ => {
                let now = match spread(touches) {
                    Some(d) if d > 0.0 => d,
                    _ => return TouchMotion::Nothing,
                };
                match self.pinch_baseline.replace(now) {
                    None => TouchMotion::PinchStarted,
                    Some(before) => TouchMotion::Pinch(camera.scale_zoom(now / before, config)),
                }
            }
        }
    }

    /// Fingers lifted. `remaining` is whoever is still touching.
    /// Returns where the tap was, if this ended one.
    pub fn end(
        &mut self,
        remaining: &[Point],
        now_ms: u64,
        camera: &mut CameraState,
        config: &SimConfig,
    ) -> Option<Point> {
        self.pinch_baseline = None;
        match remaining {
            [] => {
                end_drag(camera);
                self.tap
                    .take()
                    .filter(|tap| tap.is_tap(now_ms, config))
                    .map(|tap| tap.start)
            }
            [only] => {
                begin_drag(camera, *only);
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dragging_accumulates_offset() {
        let config = SimConfig::default();
        let mut cam = CameraState::new(&config);
        begin_drag(&mut cam, Point::new(10.0, 10.0));
        drag_to(&mut cam, Point::new(15.0, 8.0));
        drag_to(&mut cam, Point::new(20.0, 20.0));
        end_drag(&mut cam);
        assert_eq!(cam.offset, Vector::new(10.0, 10.0));
        assert!(!cam.dragging);
    }

    #[test]
    fn wheel_stays_in_bounds() {
        let config = SimConfig::default();
        let mut cam = CameraState::new(&config);
        for _ in 0..200 {
            let z = wheel_zoom(&mut cam, -900.0, &config);
            assert!(z >= config.min_zoom && z <= config.max_zoom);
        }
        assert_eq!(cam.zoom(), config.max_zoom);
        for _ in 0..200 {
            let z = wheel_zoom(&mut cam, 2000.0, &config);
            assert!(z >= config.min_zoom && z <= config.max_zoom);
        }
        assert_eq!(cam.zoom(), config.min_zoom);
    }

    #[test]
    fn wheel_is_proportional() {
        let config = SimConfig::default();
        let mut cam = CameraState::new(&config);
        // 0.4 - 100 * 0.001 * 0.4
        assert!((wheel_zoom(&mut cam, 100.0, &config) - 0.36).abs() < 1e-12);
    }

    #[test]
    fn pinch_scales_by_ratio() {
        let config = SimConfig::default();
        let mut cam = CameraState::new(&config);
        let mut g = TouchGesture::new();
        let a = Point::new(100.0, 100.0);
        g.start(&[a], 0, &mut cam);
        g.start(&[a, Point::new(200.0, 100.0)], 10, &mut cam);
        assert_eq!(
            g.move_to(&[a, Point::new(200.0, 100.0)], &mut cam, &config),
            TouchMotion::PinchStarted
        );
        match g.move_to(&[a, Point::new(300.0, 100.0)], &mut cam, &config) {
            TouchMotion::Pinch(z) => assert!((z - 0.8).abs() < 1e-12),
            other => panic!("unexpected {:?}", other),
        }
        // A pinch is never a tap
        assert_eq!(g.end(&[], 20, &mut cam, &config), None);
    }

    #[test]
    fn wild_pinches_stay_in_bounds() {
        let config = SimConfig::default();
        let mut cam = CameraState::new(&config);
        let mut g = TouchGesture::new();
        let a = Point::new(0.0, 0.0);
        g.start(&[a, Point::new(1.0, 0.0)], 0, &mut cam);
        for i in 0..40 {
            let far = if i % 2 == 0 { 1000.0 } else { 1.0 };
            g.move_to(&[a, Point::new(far, 0.0)], &mut cam, &config);
            assert!(cam.zoom() >= config.min_zoom && cam.zoom() <= config.max_zoom);
        }
    }

    #[test]
    fn quick_still_touch_is_a_tap() {
        let config = SimConfig::default();
        let mut cam = CameraState::new(&config);
        let mut g = TouchGesture::new();
        let p = Point::new(50.0, 60.0);
        g.start(&[p], 1000, &mut cam);
        g.move_to(&[Point::new(53.0, 60.0)], &mut cam, &config);
        assert_eq!(g.end(&[], 1100, &mut cam, &config), Some(p));
    }

    #[test]
    fn slow_or_long_touches_are_not_taps() {
        let config = SimConfig::default();
        let mut cam = CameraState::new(&config);
        let mut g = TouchGesture::new();
        let p = Point::new(50.0, 60.0);
        g.start(&[p], 1000, &mut cam);
        assert_eq!(g.end(&[], 1500, &mut cam, &config), None);

        g.start(&[p], 2000, &mut cam);
        g.move_to(&[Point::new(80.0, 60.0)], &mut cam, &config);
        assert_eq!(g.end(&[], 2050, &mut cam, &config), None);
    }
}
