//! Paints a `Frame` with ggez.
//!
//! ggez only does flat colors, so gradients are faked with bands: rings for radial paint,
//! strips for linear paint, each clipped to the shape being filled.

use simulator::bodies::{Point, Vector};
use simulator::camera::ViewTransform;
use simulator::scene::{self, Frame, Item, Paint, Shape, Style};

use ggez::graphics::{self, DrawMode, DrawParam, MeshBuilder, Scale, Text, TextFragment};
use ggez::nalgebra::Point2;
use ggez::{Context, GameResult};

use std::f64::consts::PI;

/// How many flat bands make up a gradient
const BANDS: usize = 12;
/// Nothing thinner than this many pixels gets drawn
const HAIRLINE: f32 = 0.5;

fn to_ggez(c: scene::Color) -> graphics::Color {
    graphics::Color::new(c.r, c.g, c.b, c.a)
}

/// Segments for a circle of this many pixels across. More for bigger circles.
fn segments_for(screen_radius: f64) -> usize {
    ((screen_radius * 0.8) as usize).max(8).min(96)
}

/// Walk around an ellipse.
fn ellipse_points(center: Point, rx: f64, ry: f64, rotation: f64, segments: usize) -> Vec<Point> {
    let (s, c) = rotation.sin_cos();
    (0..segments)
        .map(|k| {
            let a = 2.0 * PI * k as f64 / segments as f64;
            let (x, y) = (a.cos() * rx, a.sin() * ry);
            center + Vector::new(x * c - y * s, x * s + y * c)
        })
        .collect()
}

/// Sutherland-Hodgman against one half plane: keeps whatever has `(p - origin) . normal >= 0`.
fn clip_half_plane(poly: &[Point], origin: Point, normal: Vector) -> Vec<Point> {
    let side = |p: Point| (p - origin).dot(normal);
    let mut out = Vec::with_capacity(poly.len() + 2);
    for (i, &cur) in poly.iter().enumerate() {
        let prev = poly[(i + poly.len() - 1) % poly.len()];
        let (sc, sp) = (side(cur), side(prev));
        if sc >= 0.0 {
            if sp < 0.0 {
                out.push(prev.lerp(cur, sp / (sp - sc)));
            }
            out.push(cur);
        } else if sp >= 0.0 {
            out.push(prev.lerp(cur, sp / (sp - sc)));
        }
    }
    out
}

/// Clip a polygon to a convex, counterclockwise (in math terms) clip polygon.
fn clip_convex(poly: &[Point], clip: &[Point]) -> Vec<Point> {
    let mut out = poly.to_vec();
    for (i, &a) in clip.iter().enumerate() {
        if out.len() < 3 {
            break;
        }
        let b = clip[(i + 1) % clip.len()];
        let edge = b - a;
        // Inside is to the left of every edge
        out = clip_half_plane(&out, a, Vector::new(-edge.y, edge.x));
    }
    out
}

/// Paints one frame, then whatever text it has on top.
pub struct Painter<'a> {
    transform: ViewTransform,
    mesh: MeshBuilder,
    /// Primitives added so far; ggez refuses to build an empty mesh
    added: usize,
    texts: Vec<(Text, Point2<f32>)>,
    frame: &'a Frame,
}

impl<'a> Painter<'a> {
    pub fn new(frame: &'a Frame) -> Self {
        Painter {
            transform: frame.transform,
            mesh: MeshBuilder::new(),
            added: 0,
            texts: Vec::new(),
            frame,
        }
    }

    fn screen(&self, p: Point) -> Point2<f32> {
        let s = self.transform.to_screen(p);
        Point2::new(s.x as f32, s.y as f32)
    }

    /// Build up the mesh and draw it.
    pub fn paint(mut self, ctx: &mut Context) -> GameResult<()> {
        let frame = self.frame;
        for command in &frame.commands {
            match &command.item {
                Item::Background { base, inner, outer } => self.background(*base, *inner, *outer)?,
                Item::Shape { shape, style } => self.shape(shape, style)?,
                Item::Text {
                    anchor,
                    text,
                    size,
                    color,
                } => self.text(ctx, *anchor, text, *size, *color),
            }
        }

        if self.added > 0 {
            let mesh = self.mesh.build(ctx)?;
            graphics::draw(ctx, &mesh, DrawParam::default())?;
        }
        for (text, dest) in &self.texts {
            graphics::draw(ctx, text, DrawParam::default().dest(*dest))?;
        }
        Ok(())
    }

    fn background(&mut self, base: scene::Color, inner: scene::Color, outer: scene::Color) -> GameResult<()> {
        let (w, h) = (self.frame.viewport.width, self.frame.viewport.height);
        self.mesh.rectangle(
            DrawMode::fill(),
            graphics::Rect::new(0.0, 0.0, w as f32, h as f32),
            to_ggez(base),
        );
        self.added += 1;

        // A glow in the middle fading out to the corners
        let center = Point2::new((w / 2.0) as f32, (h / 2.0) as f32);
        let reach = (w.hypot(h) / 2.0) as f32;
        for k in (1..=BANDS).rev() {
            let t = k as f32 / BANDS as f32;
            let color = inner.lerp(outer, t).with_alpha(0.6 * (1.0 - t) + 0.1);
            self.mesh
                .circle(DrawMode::fill(), center, reach * t, 1.0, to_ggez(color));
            self.added += 1;
        }
        Ok(())
    }

    /// A shape as a closed outline in render space.
    fn outline(&self, shape: &Shape) -> Vec<Point> {
        let scale = self.transform.scale;
        match shape {
            Shape::Circle { center, radius } => {
                ellipse_points(*center, *radius, *radius, 0.0, segments_for(radius * scale))
            }
            Shape::Ellipse {
                center,
                rx,
                ry,
                rotation,
            } => ellipse_points(*center, *rx, *ry, *rotation, segments_for(rx.max(*ry) * scale)),
            Shape::Polygon(points) | Shape::Polyline(points) => points.clone(),
        }
    }

    fn shape(&mut self, shape: &Shape, style: &Style) -> GameResult<()> {
        match style {
            Style::Fill(paint) => {
                if let (Shape::Circle { center, radius }, Paint::Solid(color)) = (shape, paint) {
                    // The common case: skip the polygon dance
                    let r = (*radius * self.transform.scale) as f32;
                    if r > 0.0 {
                        let c = self.screen(*center);
                        self.mesh
                            .circle(DrawMode::fill(), c, r.max(HAIRLINE), 0.25, to_ggez(*color));
                        self.added += 1;
                    }
                    return Ok(());
                }
                let outline = self.outline(shape);
                self.fill(&outline, paint)
            }
            Style::Stroke { color, width, dash } => {
                let mut points = self.outline(shape);
                if !matches!(shape, Shape::Polyline(_)) {
                    if let Some(&first) = points.first() {
                        points.push(first);
                    }
                }
                let width = ((*width * self.transform.scale) as f32).max(HAIRLINE);
                match dash {
                    Some(dash) if *dash > 0.0 => {
                        for piece in dashes(&points, *dash) {
                            self.polyline(&piece, width, *color)?;
                        }
                        Ok(())
                    }
                    _ => self.polyline(&points, width, *color),
                }
            }
        }
    }

    fn polyline(&mut self, points: &[Point], width: f32, color: scene::Color) -> GameResult<()> {
        if points.len() < 2 {
            return Ok(());
        }
        let screen: Vec<Point2<f32>> = points.iter().map(|&p| self.screen(p)).collect();
        self.mesh.line(&screen, width, to_ggez(color))?;
        self.added += 1;
        Ok(())
    }

    fn polygon(&mut self, points: &[Point], color: scene::Color) -> GameResult<()> {
        if points.len() < 3 || color.a <= 0.0 {
            return Ok(());
        }
        let screen: Vec<Point2<f32>> = points.iter().map(|&p| self.screen(p)).collect();
        self.mesh.polygon(DrawMode::fill(), &screen, to_ggez(color))?;
        self.added += 1;
        Ok(())
    }

    fn fill(&mut self, outline: &[Point], paint: &Paint) -> GameResult<()> {
        match paint {
            Paint::Solid(color) => self.polygon(outline, *color),
            Paint::Radial {
                center,
                inner,
                outer,
                stops,
            } => {
                // Outside the last ring is the last color, then ever smaller discs on top
                self.polygon(outline, scene::sample_stops(stops, 1.0))?;
                let segments = segments_for(outer * self.transform.scale);
                for k in (0..BANDS).rev() {
                    let t = (k as f64 + 1.0) / BANDS as f64;
                    let r = inner + (outer - inner) * t;
                    if r <= 0.0 {
                        continue;
                    }
                    let disc = ellipse_points(*center, r, r, 0.0, segments);
                    let band = clip_convex(outline, &disc);
                    let color = scene::sample_stops(stops, (t - 0.5 / BANDS as f64) as f32);
                    self.polygon(&band, color)?;
                }
                Ok(())
            }
            Paint::Linear { from, to, stops } => {
                let along = *to - *from;
                let length = along.length();
                if length <= std::f64::EPSILON {
                    return self.polygon(outline, scene::sample_stops(stops, 0.0));
                }
                let dir = along / length;
                for k in 0..BANDS {
                    let mut band = outline.to_vec();
                    // The first and last bands run off to infinity
                    if k > 0 {
                        let start = *from + dir * (length * k as f64 / BANDS as f64);
                        band = clip_half_plane(&band, start, dir);
                    }
                    if k + 1 < BANDS {
                        let end = *from + dir * (length * (k + 1) as f64 / BANDS as f64);
                        band = clip_half_plane(&band, end, -dir);
                    }
                    let t = (k as f64 + 0.5) / BANDS as f64;
                    self.polygon(&band, scene::sample_stops(stops, t as f32))?;
                }
                Ok(())
            }
        }
    }

    fn text(&mut self, ctx: &mut Context, anchor: Point, text: &str, size: f64, color: scene::Color) {
        let px = (size * self.transform.scale) as f32;
        if px < 1.0 {
            return;
        }
        let text = Text::new(
            TextFragment::new(text)
                .color(to_ggez(color))
                .scale(Scale::uniform(px)),
        );
        let (w, h) = text.dimensions(ctx);
        let at = self.screen(anchor);
        let dest = Point2::new(at.x - w as f32 / 2.0, at.y - h as f32 / 2.0);
        self.texts.push((text, dest));
    }
}

/// Chop a polyline into dashes `dash` long with gaps just as long.
fn dashes(points: &[Point], dash: f64) -> Vec<Vec<Point>> {
    let mut out = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut drawing = true;
    // How far into the current dash or gap we are
    let mut run = 0.0;

    for pair in points.windows(2) {
        let (mut a, b) = (pair[0], pair[1]);
        let mut left = (b - a).length();
        while left > 0.0 {
            let step = (dash - run).min(left);
            let next = a + (b - a) * (step / left);
            if drawing {
                if current.is_empty() {
                    current.push(a);
                }
                current.push(next);
            }
            run += step;
            left -= step;
            a = next;
            if run >= dash {
                run = 0.0;
                if drawing && current.len() > 1 {
                    out.push(std::mem::replace(&mut current, Vec::new()));
                }
                current.clear();
                drawing = !drawing;
            }
        }
    }
    if current.len() > 1 {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    fn area(poly: &[Point]) -> f64 {
        let mut twice = 0.0;
        for (i, p) in poly.iter().enumerate() {
            let q = poly[(i + 1) % poly.len()];
            twice += p.x * q.y - q.x * p.y;
        }
        twice.abs() / 2.0
    }

    #[test]
    fn half_plane_cuts_the_square_in_half() {
        let half = clip_half_plane(&square(), Point::new(5.0, 0.0), Vector::new(1.0, 0.0));
        assert!((area(&half) - 50.0).abs() < 1e-9);
        assert!(half.iter().all(|p| p.x >= 5.0 - 1e-9));
    }

    #[test]
    fn clipping_to_a_big_disc_keeps_everything() {
        let disc = ellipse_points(Point::new(5.0, 5.0), 100.0, 100.0, 0.0, 32);
        let kept = clip_convex(&square(), &disc);
        assert!((area(&kept) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn dashes_alternate() {
        let line = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let pieces = dashes(&line, 2.0);
        // On 0-2, 4-6, 8-10
        assert_eq!(pieces.len(), 3);
        assert!((pieces[1][0].x - 4.0).abs() < 1e-9);
        assert!((pieces[2].last().unwrap().x - 10.0).abs() < 1e-9);
    }
}
