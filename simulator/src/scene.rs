//! Turns the simulation into a list of things to draw.
//!
//! The renderer doesn't touch a screen. It builds a `Frame`: the view transform plus an
//! ordered list of primitives in render space, back to front. The host paints them.

use crate::bodies::{Body, Catalogue, Kind, Pick, Point, Vector};
use crate::camera::ViewTransform;
use crate::config::SimConfig;
use crate::fields::Fields;
use crate::orbit::{BodyRuntimeState, OrbitGeometry};

use euclid::default::Size2D;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, PI};

/// Linear RGBA, 0 to 1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// From 0xRRGGBB
    pub fn from_rgb_u32(rgb: u32) -> Self {
        Color::new(
            ((rgb >> 16) & 0xff) as f32 / 255.0,
            ((rgb >> 8) & 0xff) as f32 / 255.0,
            (rgb & 0xff) as f32 / 255.0,
            1.0,
        )
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Color { a, ..self }
    }

    /// Straight mix between two colors. `t` is clamped to [0, 1].
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.max(0.0).min(1.0);
        Color::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

/// A gradient stop: offset in [0, 1] and the color there.
pub type Stop = (f32, Color);

/// Sample a list of stops at `t`.
pub fn sample_stops(stops: &[Stop], t: f32) -> Color {
    match stops {
        [] => Color::TRANSPARENT,
        [(_, only)] => *only,
        _ => {
            if t <= stops[0].0 {
                return stops[0].1;
            }
            for pair in stops.windows(2) {
                let (t0, c0) = pair[0];
                let (t1, c1) = pair[1];
                if t <= t1 {
                    let span = (t1 - t0).max(std::f32::EPSILON);
                    return c0.lerp(c1, (t - t0) / span);
                }
            }
            stops[stops.len() - 1].1
        }
    }
}

/// How to fill a shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Circles around `center`, from `inner` to `outer` radius
    Radial {
        center: Point,
        inner: f64,
        outer: f64,
        stops: Vec<Stop>,
    },
    /// Bands perpendicular to the line from `from` to `to`
    Linear {
        from: Point,
        to: Point,
        stops: Vec<Stop>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle { center: Point, radius: f64 },
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
        /// Radians, counterclockwise in screen terms (y down)
        rotation: f64,
    },
    Polygon(Vec<Point>),
    Polyline(Vec<Point>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Style {
    Fill(Paint),
    Stroke {
        color: Color,
        /// Render units
        width: f64,
        /// Dash length in render units, or solid
        dash: Option<f64>,
    },
}

/// What a command is part of. Mostly useful for checking draw order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    Starfield,
    Belt,
    HabitableZone,
    Orbits,
    Sun,
    Trail,
    Tail,
    Surface,
    Rings,
    Terminator,
    Satellites,
    Highlight,
    Label,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    /// Fill the whole viewport, in screen space, with a radial fade from the middle
    Background { base: Color, inner: Color, outer: Color },
    Shape { shape: Shape, style: Style },
    /// Centered text. `size` is in render units.
    Text {
        anchor: Point,
        text: String,
        size: f64,
        color: Color,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    pub layer: Layer,
    /// The body or satellite this was drawn for, if any
    pub owner: Option<Pick>,
    pub item: Item,
}

/// One frame's worth of drawing.
#[derive(Clone, Debug)]
pub struct Frame {
    pub viewport: Size2D<f64>,
    /// Applies to every command except `Item::Background`
    pub transform: ViewTransform,
    pub commands: Vec<Command>,
}

impl Frame {
    /// Everything drawn on behalf of a body, its satellites included.
    pub fn drawn_for(&self, body_idx: usize) -> impl Iterator<Item = &Command> {
        self.commands
            .iter()
            .filter(move |c| c.owner.map(Pick::body_index) == Some(body_idx))
    }
}

/// Everything the renderer needs to look at, borrowed from the session.
pub struct SceneRenderer<'a> {
    pub catalogue: &'a Catalogue,
    pub runtime: &'a [BodyRuntimeState],
    pub fields: &'a Fields,
    pub belt_clock: f64,
    pub transform: ViewTransform,
    pub config: &'a SimConfig,
    pub show_comets: bool,
    pub show_habitable_zone: bool,
    pub hovered: Option<Pick>,
    pub selected: Option<Pick>,
}

/// Sides on the polygons we approximate arcs with
const ARC_SEGMENTS: usize = 24;

const ORBIT_COLOR: u32 = 0x333333;
const BELT_COLOR: u32 = 0x555555;
const RING_COLOR: u32 = 0xcdba96;
const LABEL_COLOR: u32 = 0xeeeeee;
const HABITABLE_COLOR: u32 = 0x22cc66;

/// Rotate a vector by `angle` radians.
fn rotate(v: Vector, angle: f64) -> Vector {
    let (s, c) = angle.sin_cos();
    Vector::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// The half of a disc facing away from `facing`, as a polygon.
fn half_disc(center: Point, radius: f64, facing: f64) -> Vec<Point> {
    (0..=ARC_SEGMENTS)
        .map(|k| {
            let a = FRAC_PI_2 + PI * k as f64 / ARC_SEGMENTS as f64;
            center + rotate(Vector::new(a.cos(), a.sin()) * radius, facing)
        })
        .collect()
}

/// The middle strip of a disc, `half_width` either side of the center, turned by `facing`.
fn disc_strip(center: Point, radius: f64, half_width: f64, facing: f64) -> Vec<Point> {
    (0..ARC_SEGMENTS * 2)
        .map(|k| {
            let a = 2.0 * PI * k as f64 / (ARC_SEGMENTS * 2) as f64;
            let local = Vector::new(
                (a.cos() * radius).max(-half_width).min(half_width),
                a.sin() * radius,
            );
            center + rotate(local, facing)
        })
        .collect()
}

/// Evenly spaced gradient stops from a list of 0xRRGGBB colors.
fn spread_stops(colors: &[u32]) -> Vec<Stop> {
    let last = colors.len().saturating_sub(1).max(1) as f32;
    colors
        .iter()
        .enumerate()
        .map(|(i, &c)| (i as f32 / last, Color::from_rgb_u32(c)))
        .collect()
}

impl<'a> SceneRenderer<'a> {
    /// Build the whole frame, back to front.
    pub fn render(&self, viewport: Size2D<f64>) -> Frame {
        let mut out = Vec::new();
        self.background(&mut out);
        self.starfield(&mut out);
        self.belt(&mut out);
        if self.show_habitable_zone {
            self.habitable_zone(&mut out);
        }
        self.orbits(&mut out);
        self.sun(&mut out);
        for (idx, (body, rt)) in self
            .catalogue
            .bodies()
            .iter()
            .zip(self.runtime.iter())
            .enumerate()
        {
            if body.kind.orbits() && self.is_shown(body.kind) {
                self.body(idx, body, rt, &mut out);
            }
        }
        Frame {
            viewport,
            transform: self.transform,
            commands: out,
        }
    }

    fn is_shown(&self, kind: Kind) -> bool {
        kind != Kind::Comet || self.show_comets
    }

    fn scale(&self) -> f64 {
        self.transform.scale
    }

    fn is_marked(&self, pick: Pick) -> bool {
        self.hovered == Some(pick) || self.selected == Some(pick)
    }

    fn push(out: &mut Vec<Command>, layer: Layer, owner: Option<Pick>, shape: Shape, style: Style) {
        out.push(Command {
            layer,
            owner,
            item: Item::Shape { shape, style },
        });
    }

    fn background(&self, out: &mut Vec<Command>) {
        out.push(Command {
            layer: Layer::Background,
            owner: None,
            item: Item::Background {
                base: Color::from_rgb_u32(0x020205),
                inner: Color::from_rgb_u32(0x0a0b14),
                outer: Color::BLACK,
            },
        });
    }

    fn starfield(&self, out: &mut Vec<Command>) {
        // Farther zoomed out, the stars spread out less than the planets do
        let parallax = self.scale().recip().max(0.1);
        for star in &self.fields.stars {
            Self::push(
                out,
                Layer::Starfield,
                None,
                Shape::Circle {
                    center: (star.pos.to_vector() * parallax).to_point(),
                    radius: self.transform.px(star.size),
                },
                Style::Fill(Paint::Solid(
                    Color::from_rgb_u32(star.color).with_alpha(star.opacity as f32),
                )),
            );
        }
    }

    fn belt(&self, out: &mut Vec<Command>) {
        let color = Color::from_rgb_u32(BELT_COLOR).with_alpha(0.6);
        for rock in &self.fields.belt {
            Self::push(
                out,
                Layer::Belt,
                None,
                Shape::Circle {
                    center: rock.position(self.belt_clock, self.config.au_pixels),
                    radius: self.transform.px(rock.size),
                },
                Style::Fill(Paint::Solid(color)),
            );
        }
    }

    fn habitable_zone(&self, out: &mut Vec<Command>) {
        let (inner, outer) = self.config.habitable_zone_au;
        let au = self.config.au_pixels;
        let mid = (inner + outer) / 2.0 * au;
        Self::push(
            out,
            Layer::HabitableZone,
            None,
            Shape::Circle {
                center: Point::zero(),
                radius: mid,
            },
            Style::Stroke {
                color: Color::from_rgb_u32(HABITABLE_COLOR).with_alpha(0.12),
                width: (outer - inner) * au,
                dash: None,
            },
        );
    }

    fn orbits(&self, out: &mut Vec<Command>) {
        let width = self.transform.px(0.5).max(0.5);
        let color = Color::from_rgb_u32(ORBIT_COLOR);
        for (idx, body) in self.catalogue.bodies().iter().enumerate() {
            let dash = match body.kind {
                Kind::Star | Kind::Satellite => continue,
                Kind::Planet => None,
                Kind::Dwarf => Some(self.transform.px(6.0)),
                Kind::Comet if self.show_comets => Some(self.transform.px(6.0)),
                Kind::Comet => continue,
            };
            let geo = OrbitGeometry::of(body, self.config);
            Self::push(
                out,
                Layer::Orbits,
                Some(Pick::Body(idx)),
                Shape::Ellipse {
                    center: geo.center(),
                    rx: geo.a,
                    ry: geo.b,
                    rotation: 0.0,
                },
                Style::Stroke { color, width, dash },
            );
        }
    }

    fn sun(&self, out: &mut Vec<Command>) {
        for (idx, body) in self.catalogue.bodies().iter().enumerate() {
            if body.kind != Kind::Star {
                continue;
            }
            let r = body.radius;
            let owner = Some(Pick::Body(idx));
            let flare = Color::from_rgb_u32(*body.colors.get(1).unwrap_or(&body.color));
            let rim = Color::from_rgb_u32(*body.colors.last().unwrap_or(&body.color));
            // Corona
            Self::push(
                out,
                Layer::Sun,
                owner,
                Shape::Circle {
                    center: Point::zero(),
                    radius: r * 4.0,
                },
                Style::Fill(Paint::Radial {
                    center: Point::zero(),
                    inner: r,
                    outer: r * 4.0,
                    stops: vec![
                        (0.0, flare.with_alpha(0.4)),
                        (0.5, rim.with_alpha(0.1)),
                        (1.0, Color::TRANSPARENT),
                    ],
                }),
            );
            // Photosphere
            let mut stops = spread_stops(&body.colors);
            if stops.len() > 1 {
                stops.pop(); // the outermost color is for the corona
                let n = stops.len().saturating_sub(1).max(1) as f32;
                for (i, stop) in stops.iter_mut().enumerate() {
                    stop.0 = i as f32 / n;
                }
            }
            Self::push(
                out,
                Layer::Sun,
                owner,
                Shape::Circle {
                    center: Point::zero(),
                    radius: r,
                },
                Style::Fill(Paint::Radial {
                    center: Point::zero(),
                    inner: r * 0.2,
                    outer: r,
                    stops,
                }),
            );
            if let Some(rt) = self.runtime.get(idx) {
                self.satellites(idx, body, rt, out);
            }
            if self.is_marked(Pick::Body(idx)) {
                self.highlight(out, Pick::Body(idx), Point::zero(), r, 4.0, 2.0);
            }
            if self.wants_label(Pick::Body(idx)) {
                self.label(out, Pick::Body(idx), &body.name, Point::zero(), r);
            }
        }
    }

    fn wants_label(&self, pick: Pick) -> bool {
        self.scale() < self.config.label_zoom || self.selected == Some(pick)
    }

    fn body(&self, idx: usize, body: &Body, rt: &BodyRuntimeState, out: &mut Vec<Command>) {
        let pick = Pick::Body(idx);
        let owner = Some(pick);
        let pos = rt.pos;
        let r = body.radius;
        let color = Color::from_rgb_u32(body.color);

        // Trail
        if rt.trail().len() > 1 {
            let alpha = if body.kind == Kind::Comet { 0.5 } else { 0.3 };
            Self::push(
                out,
                Layer::Trail,
                owner,
                Shape::Polyline(rt.trail().iter().copied().collect()),
                Style::Stroke {
                    color: color.with_alpha(alpha),
                    width: self.transform.px(1.0).max(1.0),
                    dash: None,
                },
            );
        }

        if body.kind == Kind::Comet {
            self.tail(out, pick, body, pos);
        }

        // Atmosphere
        if body.atmosphere {
            let haze = *body.colors.get(2).or_else(|| body.colors.last()).unwrap_or(&body.color);
            Self::push(
                out,
                Layer::Surface,
                owner,
                Shape::Circle {
                    center: pos,
                    radius: r * 1.3,
                },
                Style::Fill(Paint::Radial {
                    center: pos,
                    inner: r,
                    outer: r * 1.3,
                    stops: vec![
                        (0.0, Color::from_rgb_u32(haze).with_alpha(0x88 as f32 / 255.0)),
                        (1.0, Color::TRANSPARENT),
                    ],
                }),
            );
        }

        // Surface
        let paint = match body.colors.len() {
            0 | 1 => Paint::Solid(color),
            2 => Paint::Radial {
                center: pos + Vector::new(-r, -r) * 0.3,
                inner: 0.0,
                outer: r * 1.3,
                stops: spread_stops(&body.colors),
            },
            _ => {
                let diag = Vector::new(FRAC_PI_4.cos(), FRAC_PI_4.sin()) * r;
                Paint::Linear {
                    from: pos - diag,
                    to: pos + diag,
                    stops: spread_stops(&body.colors),
                }
            }
        };
        Self::push(
            out,
            Layer::Surface,
            owner,
            Shape::Circle { center: pos, radius: r },
            Style::Fill(paint),
        );

        if body.ring {
            Self::push(
                out,
                Layer::Rings,
                owner,
                Shape::Ellipse {
                    center: pos,
                    rx: r * 2.2,
                    ry: r * 0.6,
                    rotation: FRAC_PI_6,
                },
                Style::Stroke {
                    color: Color::from_rgb_u32(RING_COLOR).with_alpha(0.7),
                    width: r * 0.8,
                    dash: None,
                },
            );
            // The gap
            Self::push(
                out,
                Layer::Rings,
                owner,
                Shape::Ellipse {
                    center: pos,
                    rx: r * 1.8,
                    ry: r * 0.5,
                    rotation: FRAC_PI_6,
                },
                Style::Stroke {
                    color: Color::BLACK.with_alpha(0.5),
                    width: r * 0.1,
                    dash: None,
                },
            );
        }

        self.terminator(out, Layer::Terminator, pick, pos, r, 0.75, true);

        self.satellites(idx, body, rt, out);

        if self.is_marked(pick) {
            self.highlight(out, pick, pos, r, 4.0, 2.0);
        }

        if self.wants_label(pick) {
            self.label(out, pick, &body.name, pos, r);
        }
    }

    /// Moons go on top of whatever they circle, star or planet.
    fn satellites(&self, idx: usize, body: &Body, rt: &BodyRuntimeState, out: &mut Vec<Command>) {
        if self.scale() <= self.config.satellite_zoom {
            return;
        }
        for (sat_idx, sat) in body.satellites.iter().enumerate() {
            let sat_pos = match rt.satellite_pos(body, sat_idx) {
                Some(p) => p,
                None => continue,
            };
            let sat_pick = Pick::Satellite(idx, sat_idx);
            Self::push(
                out,
                Layer::Satellites,
                Some(sat_pick),
                Shape::Circle {
                    center: sat_pos,
                    radius: sat.radius,
                },
                Style::Fill(Paint::Solid(Color::from_rgb_u32(sat.color))),
            );
            self.terminator(out, Layer::Satellites, sat_pick, sat_pos, sat.radius, 0.8, false);
            if self.is_marked(sat_pick) {
                self.highlight(out, sat_pick, sat_pos, sat.radius, 2.0, 1.0);
            }
        }
    }

    /// A comet's tail: a fading triangle pointing away from the star.
    /// Closer to the star means longer and brighter. Nothing at all past the tail range.
    fn tail(&self, out: &mut Vec<Command>, pick: Pick, body: &Body, pos: Point) {
        let dist = pos.to_vector().length();
        let range = self.config.tail_range_au * self.config.au_pixels;
        if dist >= range || dist <= std::f64::EPSILON {
            return;
        }
        let away = pos.to_vector() / dist;
        let closeness = (self.config.au_pixels / dist).min(3.0);
        let length = body.radius * 12.0 * closeness;
        let opacity = (0.35 * closeness).min(0.8) as f32;
        let side = Vector::new(-away.y, away.x) * (body.radius * 0.9);
        let tip = pos + away * length;
        let color = Color::from_rgb_u32(*body.colors.get(1).unwrap_or(&body.color));
        Self::push(
            out,
            Layer::Tail,
            Some(pick),
            Shape::Polygon(vec![pos + side, tip, pos - side]),
            Style::Fill(Paint::Linear {
                from: pos,
                to: tip,
                stops: vec![(0.0, color.with_alpha(opacity)), (1.0, color.with_alpha(0.0))],
            }),
        );
    }

    /// Night side: a dark half disc facing away from the star,
    /// plus an optional soft fade across the middle.
    fn terminator(
        &self,
        out: &mut Vec<Command>,
        layer: Layer,
        pick: Pick,
        pos: Point,
        r: f64,
        darkness: f32,
        soft: bool,
    ) {
        let toward_sun = (-pos.y).atan2(-pos.x);
        Self::push(
            out,
            layer,
            Some(pick),
            Shape::Polygon(half_disc(pos, r, toward_sun)),
            Style::Fill(Paint::Solid(Color::BLACK.with_alpha(darkness))),
        );
        if soft {
            let across = rotate(Vector::new(r / 2.0, 0.0), toward_sun);
            Self::push(
                out,
                layer,
                Some(pick),
                Shape::Polygon(disc_strip(pos, r, r / 2.0, toward_sun)),
                Style::Fill(Paint::Linear {
                    from: pos - across,
                    to: pos + across,
                    stops: vec![
                        (0.0, Color::BLACK.with_alpha(0.8)),
                        (1.0, Color::TRANSPARENT),
                    ],
                }),
            );
        }
    }

    fn highlight(&self, out: &mut Vec<Command>, pick: Pick, pos: Point, r: f64, gap_px: f64, width_px: f64) {
        Self::push(
            out,
            Layer::Highlight,
            Some(pick),
            Shape::Circle {
                center: pos,
                radius: r + self.transform.px(gap_px),
            },
            Style::Stroke {
                color: Color::WHITE,
                width: self.transform.px(width_px),
                dash: None,
            },
        );
    }

    fn label(&self, out: &mut Vec<Command>, pick: Pick, name: &str, pos: Point, r: f64) {
        let size = self.transform.px(12.0);
        out.push(Command {
            layer: Layer::Label,
            owner: Some(pick),
            item: Item::Text {
                anchor: pos - Vector::new(0.0, r + size),
                text: name.to_string(),
                size,
                color: Color::from_rgb_u32(LABEL_COLOR),
            },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Satellite;
    use crate::fields::{BackgroundStar, BeltParticle};

    struct Fixture {
        catalogue: Catalogue,
        runtime: Vec<BodyRuntimeState>,
        fields: Fields,
        config: SimConfig,
    }

    fn fixture() -> Fixture {
        let config = SimConfig::default();
        let mut sun = Body::new("Sun", Kind::Star, 0.0, 0.0, 25.0);
        sun.colors = vec![0xffffff, 0xfdb813, 0xff8c00, 0xff4500];
        let mut saturn = Body::new("Saturn", Kind::Planet, 9.58, 0.056, 15.0)
            .with_satellite(Satellite::new("Titan", 38.0, 3.0, 1.9));
        saturn.ring = true;
        saturn.colors = vec![0xf4e2b5, 0xedd59e, 0xd4c28d];
        let catalogue = Catalogue::new(vec![
            sun,
            saturn,
            Body::new("Pluto", Kind::Dwarf, 39.5, 0.25, 3.0),
            Body::new("Halley", Kind::Comet, 1.2, 0.5, 3.0),
        ]);
        let mut runtime: Vec<_> = catalogue
            .bodies()
            .iter()
            .map(|b| BodyRuntimeState::new(b, 0.0, vec![0.0; b.satellites.len()], &config))
            .collect();
        runtime[1].push_trail(Point::new(1.0, 1.0), 80);
        runtime[1].push_trail(Point::new(2.0, 1.0), 80);
        let fields = Fields {
            stars: vec![BackgroundStar {
                pos: Point::new(100.0, 50.0),
                size: 1.0,
                opacity: 0.5,
                color: 0xffffff,
            }],
            belt: vec![BeltParticle {
                angle: 0.0,
                distance: 2.5,
                size: 1.0,
            }],
        };
        Fixture {
            catalogue,
            runtime,
            fields,
            config,
        }
    }

    fn renderer<'a>(f: &'a Fixture, scale: f64, show_comets: bool) -> SceneRenderer<'a> {
        SceneRenderer {
            catalogue: &f.catalogue,
            runtime: &f.runtime,
            fields: &f.fields,
            belt_clock: 0.0,
            transform: ViewTransform {
                origin: Point::new(400.0, 300.0),
                scale,
            },
            config: &f.config,
            show_comets,
            show_habitable_zone: true,
            hovered: None,
            selected: None,
        }
    }

    #[test]
    fn layers_come_back_to_front() {
        let f = fixture();
        let frame = renderer(&f, 1.0, true).render(Size2D::new(800.0, 600.0));
        let layers: Vec<Layer> = frame.commands.iter().map(|c| c.layer).collect();
        assert_eq!(layers[0], Layer::Background);
        // Everything before the first body-owned layer is in global order
        let first_body = layers.iter().position(|&l| l >= Layer::Trail).unwrap();
        assert!(layers[..first_body].windows(2).all(|w| w[0] <= w[1]));
        // Each body's own commands are in order too
        for idx in 1..f.catalogue.len() {
            let own: Vec<Layer> = frame
                .drawn_for(idx)
                .map(|c| c.layer)
                .filter(|&l| l != Layer::Orbits)
                .collect();
            assert!(own.windows(2).all(|w| w[0] <= w[1]), "{:?}", own);
        }
    }

    #[test]
    fn hidden_comets_are_not_drawn() {
        let f = fixture();
        let shown = renderer(&f, 1.0, true).render(Size2D::new(800.0, 600.0));
        let hidden = renderer(&f, 1.0, false).render(Size2D::new(800.0, 600.0));
        assert!(shown.drawn_for(3).count() > 0);
        assert_eq!(hidden.drawn_for(3).count(), 0);
        assert!(hidden.drawn_for(2).count() > 0);
    }

    #[test]
    fn orbit_outline_matches_body_position() {
        let f = fixture();
        let frame = renderer(&f, 1.0, true).render(Size2D::new(800.0, 600.0));
        let outline = frame
            .drawn_for(1)
            .find(|c| c.layer == Layer::Orbits)
            .unwrap();
        match &outline.item {
            Item::Shape {
                shape: Shape::Ellipse { center, rx, ry, .. },
                style: Style::Stroke { dash: None, .. },
            } => {
                let p = f.runtime[1].pos;
                let lhs = ((p.x - center.x) / rx).powi(2) + ((p.y - center.y) / ry).powi(2);
                assert!((lhs - 1.0).abs() < 1e-9);
            }
            other => panic!("unexpected {:?}", other),
        }
        // Dwarf planets get dashes
        let pluto = frame.drawn_for(2).find(|c| c.layer == Layer::Orbits).unwrap();
        match &pluto.item {
            Item::Shape {
                style: Style::Stroke { dash: Some(_), .. },
                ..
            } => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn satellites_and_labels_depend_on_zoom() {
        let f = fixture();
        let near = renderer(&f, 1.0, true).render(Size2D::new(800.0, 600.0));
        let far = renderer(&f, 0.1, true).render(Size2D::new(800.0, 600.0));
        let count = |frame: &Frame, layer| frame.commands.iter().filter(|c| c.layer == layer).count();
        assert!(count(&near, Layer::Satellites) > 0);
        assert_eq!(count(&far, Layer::Satellites), 0);
        assert_eq!(count(&near, Layer::Label), 0);
        assert!(count(&far, Layer::Label) > 0);
    }

    #[test]
    fn selection_gets_a_ring_and_a_label() {
        let f = fixture();
        let mut r = renderer(&f, 1.0, true);
        r.selected = Some(Pick::Body(1));
        r.hovered = Some(Pick::Satellite(1, 0));
        let frame = r.render(Size2D::new(800.0, 600.0));
        let rings: Vec<_> = frame.commands.iter().filter(|c| c.layer == Layer::Highlight).collect();
        assert_eq!(rings.len(), 2);
        let labels: Vec<_> = frame.commands.iter().filter(|c| c.layer == Layer::Label).collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].owner, Some(Pick::Body(1)));
        // Line widths stay a constant number of pixels
        if let Item::Shape {
            style: Style::Stroke { width, .. },
            ..
        } = &rings[0].item
        {
            assert!((width * frame.transform.scale - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn comet_tail_points_away_from_the_star() {
        let f = fixture();
        let frame = renderer(&f, 1.0, true).render(Size2D::new(800.0, 600.0));
        let tail = frame.drawn_for(3).find(|c| c.layer == Layer::Tail).unwrap();
        let comet = f.runtime[3].pos;
        match &tail.item {
            Item::Shape {
                shape: Shape::Polygon(points),
                ..
            } => {
                let tip = points[1];
                assert!(tip.to_vector().length() > comet.to_vector().length());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn stops_blend() {
        let stops = vec![(0.0, Color::BLACK), (1.0, Color::WHITE)];
        let mid = sample_stops(&stops, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert_eq!(sample_stops(&stops, -1.0), Color::BLACK);
        assert_eq!(sample_stops(&stops, 2.0), Color::WHITE);
        assert_eq!(Color::from_rgb_u32(0xff0080).g, 0.0);
    }
}
