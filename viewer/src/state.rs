//! Handles the state for the viewer.

use crate::{hud, paint::Painter};

use simulator::bodies::{Pick, Point};
use simulator::scheduler::{FixedStep, TickScheduler};
use simulator::SolarSystem;

use euclid::default::Size2D;
use ggez::event::{self, EventHandler, KeyCode, KeyMods, MouseButton};
use ggez::{graphics, timer, Context, GameResult};

/// Ticks per second, no matter the refresh rate
const TICKS_PER_SECOND: u32 = 60;
/// Roughly what a browser reports for one wheel notch
const WHEEL_NOTCH: f64 = 100.0;
/// How much `[` and `]` change the speed
const SPEED_STEP: f64 = 0.5;
/// How much `-` and `=` multiply the zoom
const ZOOM_STEP: f64 = 1.25;

/// The state of the viewer.
pub struct State {
    solar_system: SolarSystem,
    scheduler: FixedStep,
}

impl State {
    pub fn new(_ctx: &mut Context, solar_system: SolarSystem) -> Self {
        let mut scheduler = FixedStep::new(TICKS_PER_SECOND);
        scheduler.start();
        State {
            solar_system,
            scheduler,
        }
    }

    /// Fix the screen space to always have (0, 0) in the corner and (w, h) in the other.
    fn fix_coordinates(&mut self, ctx: &mut Context, width: f32, height: f32) -> GameResult<()> {
        let rect = graphics::Rect::new(0.0, 0.0, width, height);
        graphics::set_screen_coordinates(ctx, rect)
    }

    /// Number keys pick bodies in catalogue order, 1 first and 0 tenth.
    fn quick_select(&mut self, slot: usize) {
        let name = match self.solar_system.catalogue().get(slot) {
            Some(body) => body.name.clone(),
            None => return,
        };
        if self.solar_system.select_by_name(&name) {
            log::info!("Quick-selected {}", name);
        }
    }

    /// Tab walks the whole catalogue, past the ten number keys.
    fn cycle_selection(&mut self) {
        let current = self.solar_system.selection().selected.map(|p| p.body_index());
        let len = self.solar_system.catalogue().len();
        for slot in cycle_order(current, len) {
            if self.solar_system.select(Pick::Body(slot)) {
                return;
            }
        }
    }

    fn toggle_follow_selected(&mut self) {
        let name = match self.solar_system.selected() {
            Some(subject) => subject.name().to_string(),
            None => return,
        };
        self.solar_system.toggle_follow(&name);
    }
}

fn slot_for(keycode: KeyCode) -> Option<usize> {
    let slot = match keycode {
        KeyCode::Key1 => 0,
        KeyCode::Key2 => 1,
        KeyCode::Key3 => 2,
        KeyCode::Key4 => 3,
        KeyCode::Key5 => 4,
        KeyCode::Key6 => 5,
        KeyCode::Key7 => 6,
        KeyCode::Key8 => 7,
        KeyCode::Key9 => 8,
        KeyCode::Key0 => 9,
        _ => return None,
    };
    Some(slot)
}

/// Every catalogue slot once, starting after `current`.
fn cycle_order(current: Option<usize>, len: usize) -> impl Iterator<Item = usize> {
    let start = current.map_or(0, |idx| idx + 1);
    (0..len).map(move |k| (start + k) % len)
}

/// The viewport in the same logical units the mouse events use.
fn logical_viewport(screen: graphics::Rect) -> Size2D<f64> {
    Size2D::new(screen.w as f64, screen.h as f64)
}

impl EventHandler for State {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        let solar_system = &mut self.solar_system;
        self.scheduler.pump(timer::delta(ctx), || solar_system.tick());
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        graphics::clear(ctx, graphics::Color::from_rgb_u32(0x020205));

        let frame = self
            .solar_system
            .frame(logical_viewport(graphics::screen_coordinates(ctx)));
        Painter::new(&frame).paint(ctx)?;
        hud::draw(ctx, &self.solar_system)?;

        graphics::present(ctx)
    }

    fn mouse_button_down_event(&mut self, _ctx: &mut Context, button: MouseButton, x: f32, y: f32) {
        if button == MouseButton::Left {
            self.solar_system.pointer_down(Point::new(x as f64, y as f64));
        }
    }

    fn mouse_button_up_event(&mut self, _ctx: &mut Context, button: MouseButton, x: f32, y: f32) {
        if button != MouseButton::Left {
            return;
        }
        if let Some(pick) = self.solar_system.pointer_up(Point::new(x as f64, y as f64)) {
            let name = pick
                .resolve(self.solar_system.catalogue())
                .map(|s| s.name().to_string())
                .unwrap_or_default();
            match pick {
                Pick::Body(_) => log::info!("Clicked {}", name),
                Pick::Satellite(..) => log::info!("Clicked the moon {}", name),
            }
        }
    }

    fn mouse_motion_event(&mut self, _ctx: &mut Context, x: f32, y: f32, _dx: f32, _dy: f32) {
        self.solar_system.pointer_move(Point::new(x as f64, y as f64));
    }

    fn mouse_wheel_event(&mut self, _ctx: &mut Context, _x: f32, y: f32) {
        // ggez says up is positive, the zoom wants down positive
        self.solar_system.wheel(-(y as f64) * WHEEL_NOTCH);
    }

    fn mouse_enter_or_leave(&mut self, _ctx: &mut Context, entered: bool) {
        if !entered {
            self.solar_system.pointer_left();
        }
    }

    fn key_down_event(&mut self, ctx: &mut Context, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        let system = &mut self.solar_system;
        match keycode {
            // Holding these down should keep going
            KeyCode::LBracket => system.set_speed(system.speed() - SPEED_STEP),
            KeyCode::RBracket => system.set_speed(system.speed() + SPEED_STEP),
            KeyCode::Minus => {
                system.set_zoom(system.zoom() / ZOOM_STEP);
            }
            KeyCode::Equals => {
                system.set_zoom(system.zoom() * ZOOM_STEP);
            }
            _ if repeat => {}

            KeyCode::Space => system.toggle_playing(),
            KeyCode::H => system.set_show_habitable_zone(!system.shows_habitable_zone()),
            KeyCode::C => system.set_show_comets(!system.shows_comets()),
            KeyCode::A => system.align_planets(),
            KeyCode::Escape => system.close_selection(),
            KeyCode::F => self.toggle_follow_selected(),
            KeyCode::Tab => self.cycle_selection(),
            KeyCode::Q => {
                log::info!("Bye!");
                event::quit(ctx);
            }
            other => {
                if let Some(slot) = slot_for(other) {
                    self.quick_select(slot);
                }
            }
        }
    }

    fn resize_event(&mut self, ctx: &mut Context, width: f32, height: f32) {
        if let Err(e) = self.fix_coordinates(ctx, width, height) {
            log::warn!("Couldn't fix the screen coordinates after a resize: {}", e);
        }
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> bool {
        self.scheduler.stop();
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_reaches_every_slot_once() {
        let order: Vec<usize> = cycle_order(Some(9), 11).collect();
        assert_eq!(order, vec![10, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(cycle_order(None, 3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(cycle_order(Some(2), 3).next(), Some(0));
        assert_eq!(cycle_order(None, 0).count(), 0);
    }

    #[test]
    fn tab_can_reach_the_comet() {
        let mut system = loader::default_system().unwrap().into_solar_system();
        let comet = system.find("Komet Halley").unwrap().body_index();
        assert!(comet >= 10);
        let before = system.catalogue().bodies()[comet - 1].name.clone();
        assert!(system.select_by_name(&before));
        let next = cycle_order(Some(comet - 1), system.catalogue().len())
            .find(|&slot| system.select(Pick::Body(slot)));
        assert_eq!(next, Some(comet));
        assert_eq!(system.selected().unwrap().name(), "Komet Halley");
    }

    #[test]
    fn viewport_uses_logical_size() {
        let screen = graphics::Rect::new(0.0, 0.0, 1280.0, 800.0);
        assert_eq!(logical_viewport(screen), Size2D::new(1280.0, 800.0));
    }
}
