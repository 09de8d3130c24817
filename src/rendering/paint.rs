//! Shared paint primitives: colors, rounded rectangles and bitmap text

use font8x8::{UnicodeFonts, BASIC_FONTS};
use tiny_skia::{FillRule, Mask, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use super::layout::Rect;
use crate::Rgb;

/// Per-corner radii, clockwise from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Radii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl Radii {
    pub fn uniform(r: f32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    /// Square top, rounded bottom: the shape of an image sitting under a frame header.
    pub fn bottom(r: f32) -> Self {
        Self {
            top_left: 0.0,
            top_right: 0.0,
            bottom_right: r,
            bottom_left: r,
        }
    }

    fn clamped(self, rect: &Rect) -> Self {
        let max = (rect.width.min(rect.height) / 2.0).max(0.0);
        let c = |r: f32| r.clamp(0.0, max);
        Self {
            top_left: c(self.top_left),
            top_right: c(self.top_right),
            bottom_right: c(self.bottom_right),
            bottom_left: c(self.bottom_left),
        }
    }
}

/// Anti-aliased solid paint.
pub fn solid(color: Rgb, alpha: u8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, alpha);
    paint.anti_alias = true;
    paint
}

/// Rounded rectangle built from quadratic corner curves.
///
/// Radii larger than half the shorter side are clamped so the outline never
/// crosses itself. Returns `None` for an empty rectangle.
pub fn rounded_rect_path(rect: Rect, radii: Radii) -> Option<Path> {
    if rect.is_empty() {
        return None;
    }
    let Radii {
        top_left: tl,
        top_right: tr,
        bottom_right: br,
        bottom_left: bl,
    } = radii.clamped(&rect);
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);

    let mut pb = PathBuilder::new();
    pb.move_to(x + tl, y);
    pb.line_to(x + w - tr, y);
    pb.quad_to(x + w, y, x + w, y + tr);
    pb.line_to(x + w, y + h - br);
    pb.quad_to(x + w, y + h, x + w - br, y + h);
    pb.line_to(x + bl, y + h);
    pb.quad_to(x, y + h, x, y + h - bl);
    pb.line_to(x, y + tl);
    pb.quad_to(x, y, x + tl, y);
    pb.close();
    pb.finish()
}

// The fill and stroke helpers below draw through `clip` when one is given.

pub fn fill_rounded_rect(pixmap: &mut Pixmap, rect: Rect, radius: f32, paint: &Paint, clip: Option<&Mask>) {
    if let Some(path) = rounded_rect_path(rect, Radii::uniform(radius)) {
        pixmap.fill_path(&path, paint, FillRule::Winding, Transform::identity(), clip);
    }
}

pub fn fill_rect(pixmap: &mut Pixmap, rect: Rect, paint: &Paint, clip: Option<&Mask>) {
    if let Some(r) = rect.to_skia() {
        pixmap.fill_rect(r, paint, Transform::identity(), clip);
    }
}

pub fn fill_circle(pixmap: &mut Pixmap, cx: f32, cy: f32, radius: f32, paint: &Paint, clip: Option<&Mask>) {
    if let Some(path) = PathBuilder::from_circle(cx, cy, radius) {
        pixmap.fill_path(&path, paint, FillRule::Winding, Transform::identity(), clip);
    }
}

pub fn stroke_rect(pixmap: &mut Pixmap, rect: Rect, width: f32, paint: &Paint, clip: Option<&Mask>) {
    if let Some(r) = rect.to_skia() {
        let path = PathBuilder::from_rect(r);
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, paint, &stroke, Transform::identity(), clip);
    }
}

/// Stroke a set of independent line segments `((x0, y0), (x1, y1))`.
pub fn stroke_segments(
    pixmap: &mut Pixmap,
    segments: &[((f32, f32), (f32, f32))],
    width: f32,
    paint: &Paint,
    clip: Option<&Mask>,
) {
    let mut pb = PathBuilder::new();
    for ((x0, y0), (x1, y1)) in segments {
        pb.move_to(*x0, *y0);
        pb.line_to(*x1, *y1);
    }
    if let Some(path) = pb.finish() {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, paint, &stroke, Transform::identity(), clip);
    }
}

/// Horizontal advance of `text` in the 8×8 bitmap face at `size` pixels.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size
}

/// Draw `text` with its left edge at `x` and baseline at `baseline`.
///
/// Glyphs come from the 8×8 font8x8 face scaled to `size`; the bottom glyph row
/// sits a quarter em below the baseline, like a descender.
pub fn draw_text(
    pixmap: &mut Pixmap,
    text: &str,
    x: f32,
    baseline: f32,
    size: f32,
    paint: &Paint,
    clip: Option<&Mask>,
) {
    let cell = size / 8.0;
    let top = baseline - size * 0.75;
    let mut pb = PathBuilder::new();
    for (i, ch) in text.chars().enumerate() {
        let glyph = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?'));
        let Some(glyph) = glyph else {
            continue;
        };
        let origin = x + i as f32 * size;
        for (row_idx, row) in glyph.iter().enumerate() {
            for col in 0..8 {
                if (row >> col) & 1 == 0 {
                    continue;
                }
                if let Some(r) = tiny_skia::Rect::from_xywh(
                    origin + col as f32 * cell,
                    top + row_idx as f32 * cell,
                    cell,
                    cell,
                ) {
                    pb.push_rect(r);
                }
            }
        }
    }
    if let Some(path) = pb.finish() {
        pixmap.fill_path(&path, paint, FillRule::Winding, Transform::identity(), clip);
    }
}
