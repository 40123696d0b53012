//! The writing on top of the sky: controls, the hover tooltip and the detail panel.

use simulator::bodies::{Kind, Subject};
use simulator::SolarSystem;

use ggez::graphics::{self, Align, DrawMode, DrawParam, Mesh, Rect, Scale, Text, TextFragment};
use ggez::nalgebra::Point2;
use ggez::{Context, GameResult};

const MARGIN: f32 = 12.0;
const PANEL_WIDTH: f32 = 300.0;
const TOOLTIP_WIDTH: f32 = 200.0;

fn rgb(c: u32) -> graphics::Color {
    graphics::Color::from_rgb_u32(c)
}

fn line(s: &str, px: f32, color: u32) -> TextFragment {
    TextFragment::new(format!("{}\n", s))
        .color(rgb(color))
        .scale(Scale::uniform(px))
}

/// A translucent box behind some text.
fn backdrop(ctx: &mut Context, rect: Rect) -> GameResult<()> {
    let fill = Mesh::new_rectangle(ctx, DrawMode::fill(), rect, graphics::Color::new(0.0, 0.0, 0.0, 0.8))?;
    let edge = Mesh::new_rectangle(ctx, DrawMode::stroke(1.0), rect, rgb(0x444444))?;
    graphics::draw(ctx, &fill, DrawParam::default())?;
    graphics::draw(ctx, &edge, DrawParam::default())
}

/// Draws everything.
pub fn draw(ctx: &mut Context, system: &SolarSystem) -> GameResult<()> {
    controls(ctx, system)?;
    if let Some(subject) = system.selected() {
        panel(ctx, system, subject)?;
    }
    if let Some(subject) = tooltip_subject(system) {
        tooltip(ctx, system, subject)?;
    }
    Ok(())
}

/// The tooltip stays out of the way while the panel is open.
fn tooltip_subject(system: &SolarSystem) -> Option<Subject<'_>> {
    match system.selected() {
        Some(_) => None,
        None => system.hovered(),
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "tampil"
    } else {
        "sembunyi"
    }
}

/// Date, speed, zoom and the toggles, top left.
fn controls(ctx: &mut Context, system: &SolarSystem) -> GameResult<()> {
    let mut text = Text::default();
    text.add(line("TATA SURYA", 18.0, 0xFFFFFF));
    text.add(line(&system.clock().date_string(), 16.0, 0x60A5FA));
    text.add(line(
        &format!(
            "[Spasi] {}   [ ] Kecepatan {:.1}x   - = Zoom {:.2}",
            if system.is_playing() { "Berjalan" } else { "Dijeda" },
            system.speed(),
            system.zoom()
        ),
        14.0,
        0xDDDDDD,
    ));
    text.add(line(
        &format!(
            "[H] Zona layak huni: {}   [C] Komet: {}   [A] Sejajarkan",
            on_off(system.shows_habitable_zone()),
            on_off(system.shows_comets())
        ),
        14.0,
        0xAAAAAA,
    ));
    text.add(line("[1-0] [Tab] Pilih objek   [Q] Keluar", 14.0, 0x888888));

    let (w, h) = text.dimensions(ctx);
    backdrop(ctx, Rect::new(MARGIN - 6.0, MARGIN - 6.0, w as f32 + 12.0, h as f32 + 12.0))?;
    graphics::draw(ctx, &text, DrawParam::default().dest(Point2::new(MARGIN, MARGIN)))
}

/// A little card by the pointer.
fn tooltip(ctx: &mut Context, system: &SolarSystem, subject: Subject<'_>) -> GameResult<()> {
    let mut text = Text::default();
    text.add(line(subject.name(), 15.0, subject.color()));
    text.add(line(subject.description(), 12.0, 0xCCCCCC));
    match subject {
        Subject::Body(body) => {
            text.add(line(&format!("Jarak Orbit: {} AU", body.distance), 11.0, 0x999999));
            if body.kind != Kind::Star && body.speed != 0.0 {
                text.add(line(
                    &format!("Periode: {:.2} Tahun", body.speed.abs().recip()),
                    11.0,
                    0x999999,
                ));
            }
        }
        Subject::Satellite(_) => {
            text.add(line(Kind::Satellite.label(), 11.0, 0x999999));
        }
    }
    text.set_bounds(Point2::new(TOOLTIP_WIDTH, std::f32::INFINITY), Align::Left);

    let cursor = system.selection().cursor;
    let (w, h) = text.dimensions(ctx);
    let at = Point2::new(cursor.x as f32 + 15.0, cursor.y as f32 + 15.0);
    backdrop(ctx, Rect::new(at.x - 8.0, at.y - 8.0, w as f32 + 16.0, h as f32 + 16.0))?;
    graphics::draw(ctx, &text, DrawParam::default().dest(at))
}

/// Everything about the selected thing, down the right side.
fn panel(ctx: &mut Context, system: &SolarSystem, subject: Subject<'_>) -> GameResult<()> {
    let mut text = Text::default();
    for fragment in panel_lines(system, subject) {
        text.add(fragment);
    }
    text.set_bounds(Point2::new(PANEL_WIDTH, std::f32::INFINITY), Align::Left);

    let (screen_w, screen_h) = graphics::drawable_size(ctx);
    let x = screen_w - PANEL_WIDTH - MARGIN;
    backdrop(ctx, Rect::new(x - 10.0, MARGIN, PANEL_WIDTH + 20.0, screen_h - 2.0 * MARGIN))?;
    graphics::draw(ctx, &text, DrawParam::default().dest(Point2::new(x, MARGIN + 10.0)))
}

fn panel_lines(system: &SolarSystem, subject: Subject<'_>) -> Vec<TextFragment> {
    let mut lines = vec![
        line(subject.kind().label(), 12.0, 0x60A5FA),
        line(subject.name(), 24.0, 0xFFFFFF),
        line("", 8.0, 0xFFFFFF),
        line(subject.description(), 13.0, 0xDDDDDD),
        line("", 8.0, 0xFFFFFF),
    ];
    if let Subject::Body(body) = subject {
        let facts = &body.facts;
        for (label, value) in &[
            ("Jarak (AU)", body.distance.to_string()),
            ("Diameter", facts.diameter.clone()),
            ("Suhu", facts.temp.clone()),
            ("Rotasi", facts.day_length.clone()),
            ("Revolusi", facts.year_length.clone()),
        ] {
            if !value.is_empty() {
                lines.push(line(&format!("{}: {}", label, value), 13.0, 0xBBBBBB));
            }
        }
        if !body.satellites.is_empty() {
            lines.push(line("", 8.0, 0xFFFFFF));
            lines.push(line("SATELIT ALAMI UTAMA", 12.0, 0x888888));
            for moon in &body.satellites {
                lines.push(
                    TextFragment::new("\u{25CF} ")
                        .color(rgb(moon.color))
                        .scale(Scale::uniform(13.0)),
                );
                lines.push(line(&moon.name, 13.0, 0xEEEEEE));
                if !moon.description.is_empty() {
                    lines.push(line(&moon.description, 12.0, 0x999999));
                }
            }
        }
        if !facts.fun_fact.is_empty() {
            lines.push(line("", 8.0, 0xFFFFFF));
            lines.push(line("Tahukah kamu?", 13.0, 0xFACC15));
            lines.push(line(&facts.fun_fact, 13.0, 0xDDDDDD));
        }
    }
    lines.push(line("", 8.0, 0xFFFFFF));
    let following = system.following() == Some(subject.name());
    lines.push(line(
        if following {
            "[F] Berhenti Mengikuti"
        } else {
            "[F] Ikuti Objek Ini"
        },
        14.0,
        if following { 0xF87171 } else { 0x60A5FA },
    ));
    lines.push(line("[Esc] Tutup", 14.0, 0x888888));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(lines: &[TextFragment]) -> Vec<&str> {
        lines.iter().map(|f| f.text.trim_end()).collect()
    }

    #[test]
    fn panel_lists_the_moons_of_a_planet() {
        let mut system = loader::default_system().unwrap().into_solar_system();
        assert!(system.select_by_name("Mars"));
        let lines = panel_lines(&system, system.selected().unwrap());
        let words = words(&lines);
        let heading = words.iter().position(|&w| w == "SATELIT ALAMI UTAMA").unwrap();
        assert!(words[heading..].contains(&"Phobos"));
        assert!(words[heading..].contains(&"Deimos"));

        let dot = &lines[heading + 1];
        let phobos = &system.catalogue().bodies()[system.find("Mars").unwrap().body_index()].satellites[0];
        assert_eq!(dot.color, Some(rgb(phobos.color)));
    }

    #[test]
    fn panel_has_no_moon_list_without_moons() {
        let mut system = loader::default_system().unwrap().into_solar_system();
        assert!(system.select_by_name("Merkurius"));
        let lines = panel_lines(&system, system.selected().unwrap());
        assert!(!words(&lines).contains(&"SATELIT ALAMI UTAMA"));
    }

    #[test]
    fn tooltip_hides_while_something_is_selected() {
        let mut system = loader::default_system().unwrap().into_solar_system();
        system.set_playing(false);
        system.set_zoom(1.0);
        let transform = system.resolve_camera();
        let sun = transform.to_screen(system.position_of(simulator::bodies::Pick::Body(0)).unwrap());
        system.pointer_move(sun);
        assert!(tooltip_subject(&system).is_some());

        assert!(system.select_by_name("Bumi"));
        let transform = system.resolve_camera();
        let bumi = system.find("Bumi").and_then(|p| system.position_of(p)).unwrap();
        system.pointer_move(transform.to_screen(bumi));
        assert!(system.hovered().is_some());
        assert!(tooltip_subject(&system).is_none());
    }
}
