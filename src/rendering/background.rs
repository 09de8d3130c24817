//! Background layer: solid fill or multi-stop linear gradient

use tiny_skia::{Color, GradientStop, LinearGradient, Paint, Pixmap, Point, SpreadMode, Transform};

use crate::presets::GradientPreset;
use crate::Rgb;

/// The backdrop to paint, resolved from the style
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    Solid(Rgb),
    Gradient(&'static GradientPreset),
}

/// Evenly spaced stops: color `i` of `n` sits at `i / (n - 1)`.
pub fn gradient_stops(colors: &[Rgb]) -> Vec<(f32, Rgb)> {
    let last = colors.len().saturating_sub(1).max(1) as f32;
    colors
        .iter()
        .enumerate()
        .map(|(i, c)| (i as f32 / last, *c))
        .collect()
}

/// Gradient line for `angle_deg` across a `width`×`height` canvas.
///
/// The line passes through the canvas center and its projection spans the
/// full box: `center ∓ (cos·W/2, sin·H/2)`.
pub fn gradient_line(angle_deg: f32, width: f32, height: f32) -> (Point, Point) {
    let angle = angle_deg.to_radians();
    let (cx, cy) = (width / 2.0, height / 2.0);
    let dx = angle.cos() * width / 2.0;
    let dy = angle.sin() * height / 2.0;
    (Point::from_xy(cx - dx, cy - dy), Point::from_xy(cx + dx, cy + dy))
}

pub fn paint_background(pixmap: &mut Pixmap, background: &Background) {
    match background {
        Background::Solid(c) => pixmap.fill(Color::from_rgba8(c.r, c.g, c.b, 255)),
        Background::Gradient(preset) => paint_gradient(pixmap, preset),
    }
}

fn paint_gradient(pixmap: &mut Pixmap, preset: &GradientPreset) {
    let (w, h) = (pixmap.width() as f32, pixmap.height() as f32);
    let (start, end) = gradient_line(preset.angle, w, h);
    let stops = gradient_stops(preset.colors)
        .into_iter()
        .map(|(pos, c)| GradientStop::new(pos, Color::from_rgba8(c.r, c.g, c.b, 255)))
        .collect();

    let Some(shader) = LinearGradient::new(start, end, stops, SpreadMode::Pad, Transform::identity()) else {
        // Degenerate line or a single color: fall back to the first stop.
        if let Some(c) = preset.colors.first() {
            pixmap.fill(Color::from_rgba8(c.r, c.g, c.b, 255));
        }
        return;
    };

    let Some(rect) = tiny_skia::Rect::from_xywh(0.0, 0.0, w, h) else {
        return;
    };
    let mut paint = Paint::default();
    paint.shader = shader;
    paint.anti_alias = false;
    pixmap.fill_rect(rect, &paint, Transform::identity(), None);
}
