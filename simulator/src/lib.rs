//! Handles the simulation of the solar system

pub mod bodies;
pub mod camera;
pub mod clock;
pub mod config;
pub mod fields;
pub mod input;
pub mod orbit;
pub mod picking;
pub mod scene;
pub mod scheduler;
pub mod selection;

use crate::bodies::{Catalogue, Kind, Pick, Point, Subject};
use crate::camera::{CameraState, ViewTransform};
use crate::clock::SimClock;
use crate::config::SimConfig;
use crate::fields::Fields;
use crate::input::{TapTracker, TouchGesture, TouchMotion};
use crate::orbit::{BodyRuntimeState, OrbitGeometry};
use crate::picking::HitTester;
use crate::scene::{Frame, SceneRenderer};
use crate::selection::SelectionState;

use euclid::default::Size2D;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use std::f64::consts::PI;

/// One running solar system: the catalogue it was built from, where everything is,
/// the camera, and what's selected. Everything that changes goes through a method here.
pub struct SolarSystem {
    catalogue: Catalogue,
    fields: Fields,
    config: SimConfig,
    /// Parallel to the catalogue
    runtime: Vec<BodyRuntimeState>,
    camera: CameraState,
    selection: SelectionState,

    speed: f64,
    playing: bool,
    show_comets: bool,
    show_habitable_zone: bool,

    clock: SimClock,
    /// How far the asteroid belt has turned
    belt_clock: f64,
    ticks_elapsed: u64,
    viewport: Size2D<f64>,

    /// The mouse press in progress, if any
    press: Option<TapTracker>,
    touch: TouchGesture,
}

impl SolarSystem {
    /// Set up a solar system. Every body and satellite gets a random starting phase from `seed`.
    pub fn new(catalogue: Catalogue, fields: Fields, config: SimConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let runtime: Vec<BodyRuntimeState> = catalogue
            .bodies()
            .iter()
            .map(|body| {
                let phase = rng.gen_range(0.0, 2.0 * PI);
                let moons = body
                    .satellites
                    .iter()
                    .map(|_| rng.gen_range(0.0, 2.0 * PI))
                    .collect();
                BodyRuntimeState::new(body, phase, moons, &config)
            })
            .collect();

        log::info!(
            "Solar system ready: {} bodies, {} satellites, {} stars, {} asteroids",
            catalogue.len(),
            catalogue.bodies().iter().map(|b| b.satellites.len()).sum::<usize>(),
            fields.stars.len(),
            fields.belt.len()
        );

        SolarSystem {
            camera: CameraState::new(&config),
            selection: SelectionState::new(),
            speed: config.initial_speed,
            playing: true,
            show_comets: true,
            show_habitable_zone: false,
            clock: SimClock::starting_at(0.0),
            belt_clock: 0.0,
            ticks_elapsed: 0,
            viewport: Size2D::new(800.0, 600.0),
            press: None,
            touch: TouchGesture::new(),
            catalogue,
            fields,
            config,
            runtime,
        }
    }

    /// Start the calendar at some real date.
    pub fn with_start_date(mut self, unix_ms: f64) -> Self {
        self.clock = SimClock::starting_at(unix_ms);
        self
    }

    // SIMULATION

    /// Run one tick. Does nothing to the orbits while paused.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        orbit::advance(
            &self.catalogue,
            &mut self.runtime,
            self.speed,
            self.ticks_elapsed,
            &self.config,
        );
        self.clock.advance(self.speed, &self.config);
        self.belt_clock += self.config.base_rate * self.speed;
        self.ticks_elapsed += 1;
    }

    /// Work out this frame's view transform, chasing the follow target if there is one.
    pub fn resolve_camera(&mut self) -> ViewTransform {
        if let Some(target) = self.selection.following.as_deref() {
            camera::follow(&mut self.camera, target, &self.catalogue, &self.runtime);
        }
        self.camera.transform(self.viewport)
    }

    /// Build the frame for a viewport of this size.
    pub fn frame(&mut self, viewport: Size2D<f64>) -> Frame {
        if viewport != self.viewport {
            log::debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
            self.viewport = viewport;
        }
        let transform = self.resolve_camera();
        SceneRenderer {
            catalogue: &self.catalogue,
            runtime: &self.runtime,
            fields: &self.fields,
            belt_clock: self.belt_clock,
            transform,
            config: &self.config,
            show_comets: self.show_comets,
            show_habitable_zone: self.show_habitable_zone,
            hovered: self.selection.hovered,
            selected: self.selection.selected,
        }
        .render(viewport)
    }

    /// What's at this screen position, using the positions and transform from this frame.
    pub fn hit_test(&self, screen: Point) -> Option<Pick> {
        HitTester {
            catalogue: &self.catalogue,
            runtime: &self.runtime,
            transform: self.camera.transform(self.viewport),
            config: &self.config,
            show_comets: self.show_comets,
        }
        .pick(screen)
    }

    // POINTER INPUT

    pub fn pointer_down(&mut self, pos: Point) {
        input::begin_drag(&mut self.camera, pos);
        self.press = Some(TapTracker::new(pos, 0));
        // Grabbing the map always wins over following
        if self.selection.following.take().is_some() {
            log::debug!("Stopped following, the user grabbed the camera");
        }
    }

    pub fn pointer_move(&mut self, pos: Point) {
        if self.camera.dragging {
            let delta = input::drag_to(&mut self.camera, pos);
            if let Some(press) = self.press.as_mut() {
                press.moved(delta);
            }
            self.selection.hovered = None;
            return;
        }
        self.hover(pos);
    }

    /// Ends a drag. If the pointer barely moved, it was a click; returns what got clicked.
    pub fn pointer_up(&mut self, pos: Point) -> Option<Pick> {
        input::end_drag(&mut self.camera);
        match self.press.take() {
            Some(press) if press.is_click(&self.config) => self.click(pos),
            _ => None,
        }
    }

    /// The pointer left the window. Ends any drag without clicking.
    pub fn pointer_left(&mut self) {
        input::end_drag(&mut self.camera);
        self.press = None;
        self.selection.hovered = None;
    }

    pub fn wheel(&mut self, delta_y: f64) -> f64 {
        input::wheel_zoom(&mut self.camera, delta_y, &self.config)
    }

    /// A click or tap at `pos`. Selects and follows whatever is there.
    pub fn click(&mut self, pos: Point) -> Option<Pick> {
        let hit = self.hit_test(pos).or(self.selection.hovered)?;
        Some(hit).filter(|&hit| self.select(hit))
    }

    fn hover(&mut self, pos: Point) {
        self.selection.hovered = self.hit_test(pos);
        if self.selection.hovered.is_some() {
            self.selection.cursor = pos;
        }
    }

    // TOUCH INPUT

    /// `touches` is every finger down after this event; `now_ms` is any monotonic clock.
    pub fn touch_start(&mut self, touches: &[Point], now_ms: u64) {
        if self.selection.following.take().is_some() {
            log::debug!("Stopped following, the user grabbed the camera");
        }
        self.touch.start(touches, now_ms, &mut self.camera);
    }

    pub fn touch_move(&mut self, touches: &[Point]) -> TouchMotion {
        let motion = self.touch.move_to(touches, &mut self.camera, &self.config);
        if let TouchMotion::Pan(_) = motion {
            self.selection.hovered = None;
        }
        motion
    }

    /// `remaining` is whoever is still touching. Returns what got tapped, if anything.
    pub fn touch_end(&mut self, remaining: &[Point], now_ms: u64) -> Option<Pick> {
        let tap = self
            .touch
            .end(remaining, now_ms, &mut self.camera, &self.config)?;
        let hit = self.hit_test(tap)?;
        Some(hit).filter(|&hit| self.select(hit))
    }

    // COMMANDS

    /// Select something, follow it and zoom to suit its size. Returns whether it took.
    pub fn select(&mut self, pick: Pick) -> bool {
        let subject = match pick.resolve(&self.catalogue) {
            Some(s) => s,
            None => {
                log::warn!("Tried to select {:?}, which isn't in the catalogue", pick);
                return false;
            }
        };
        let on_comet = self
            .catalogue
            .get(pick.body_index())
            .map_or(false, |b| b.kind == Kind::Comet);
        if on_comet && !self.show_comets {
            log::debug!("Ignoring selection of {}, comets are hidden", subject.name());
            return false;
        }
        let name = subject.name().to_string();
        let zoom = camera::select_zoom(subject.radius(), &self.config);
        self.camera.set_zoom(zoom, &self.config);
        log::debug!("Selected {} at zoom {:.2}", name, self.camera.zoom());
        self.selection.selected = Some(pick);
        self.selection.following = Some(name);
        true
    }

    /// Quick-select by name, bodies first then satellites. Returns whether anything got selected.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        match self.find(name) {
            Some(pick) => self.select(pick),
            None => false,
        }
    }

    /// Look something up by name.
    pub fn find(&self, name: &str) -> Option<Pick> {
        if let Some(idx) = self.catalogue.position(name) {
            return Some(Pick::Body(idx));
        }
        self.catalogue
            .bodies()
            .iter()
            .enumerate()
            .find_map(|(idx, body)| {
                body.satellites
                    .iter()
                    .position(|s| s.name == name)
                    .map(|sat| Pick::Satellite(idx, sat))
            })
    }

    /// Dismiss the detail panel.
    pub fn close_selection(&mut self) {
        self.selection.selected = None;
    }

    /// Follow `name`, or stop if we already are.
    pub fn toggle_follow(&mut self, name: &str) {
        if self.selection.is_following(name) {
            self.selection.following = None;
        } else {
            self.selection.following = Some(name.to_string());
        }
    }

    /// Clamped to [0, max_speed].
    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() {
            self.speed = speed.max(0.0).min(self.config.max_speed);
        }
    }

    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        self.camera.set_zoom(zoom, &self.config)
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    pub fn set_show_habitable_zone(&mut self, show: bool) {
        self.show_habitable_zone = show;
    }

    /// Hiding comets also lets go of any comet that was hovered, selected or followed.
    pub fn set_show_comets(&mut self, show: bool) {
        self.show_comets = show;
        if show {
            return;
        }
        for (idx, body) in self.catalogue.bodies().iter().enumerate() {
            if body.kind != Kind::Comet {
                continue;
            }
            let mut names: Vec<&str> = body.satellites.iter().map(|s| s.name.as_str()).collect();
            names.push(&body.name);
            self.selection.forget_body(idx, &names);
        }
    }

    /// Line every orbiting body up at perihelion and wipe the trails.
    pub fn align_planets(&mut self) {
        for idx in 0..self.runtime.len() {
            self.set_phase(idx, 0.0);
            self.runtime[idx].clear_trail();
        }
    }

    /// Jump a body to a phase angle. Stars ignore this.
    pub fn set_phase(&mut self, idx: usize, phase: f64) {
        let body = match self.catalogue.get(idx) {
            Some(b) if b.kind.orbits() => b,
            _ => return,
        };
        let rt = &mut self.runtime[idx];
        rt.phase = phase;
        rt.pos = OrbitGeometry::of(body, &self.config).position(phase);
    }

    // QUERIES

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn runtime(&self) -> &[BodyRuntimeState] {
        &self.runtime
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn zoom(&self) -> f64 {
        self.camera.zoom()
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn shows_comets(&self) -> bool {
        self.show_comets
    }

    pub fn shows_habitable_zone(&self) -> bool {
        self.show_habitable_zone
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn ticks_elapsed(&self) -> u64 {
        self.ticks_elapsed
    }

    pub fn viewport(&self) -> Size2D<f64> {
        self.viewport
    }

    pub fn hovered(&self) -> Option<Subject<'_>> {
        self.selection.hovered.and_then(|p| p.resolve(&self.catalogue))
    }

    pub fn selected(&self) -> Option<Subject<'_>> {
        self.selection.selected.and_then(|p| p.resolve(&self.catalogue))
    }

    pub fn following(&self) -> Option<&str> {
        self.selection.following.as_deref()
    }

    /// Where something is in render space right now.
    pub fn position_of(&self, pick: Pick) -> Option<Point> {
        match pick {
            Pick::Body(idx) => self.runtime.get(idx).map(|rt| rt.pos),
            Pick::Satellite(idx, sat) => {
                let body = self.catalogue.get(idx)?;
                self.runtime.get(idx)?.satellite_pos(body, sat)
            }
        }
    }
}
