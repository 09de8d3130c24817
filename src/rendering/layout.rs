//! Geometry resolver: canvas size and card placement

use crate::presets::SizePreset;

/// An axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub(crate) fn to_skia(self) -> Option<tiny_skia::Rect> {
        if self.is_empty() {
            return None;
        }
        tiny_skia::Rect::from_xywh(self.x, self.y, self.width, self.height)
    }
}

/// Concrete rectangles for one render, recomputed from scratch every call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedGeometry {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Where the screenshot lands (already scaled)
    pub image_rect: Rect,
    /// Header strip directly above `image_rect`; zero height without a frame
    pub frame_rect: Rect,
    /// Applied image scale; `1.0` in auto mode
    pub scale: f32,
}

impl ResolvedGeometry {
    /// Outer bounds of the card: the image plus its frame header.
    pub fn card_rect(&self) -> Rect {
        Rect::new(
            self.image_rect.x,
            self.frame_rect.y,
            self.image_rect.width,
            self.image_rect.height + self.frame_rect.height,
        )
    }

    pub fn has_frame(&self) -> bool {
        self.frame_rect.height > 0.0
    }
}

/// Resolve canvas and card geometry.
///
/// `padding` and `header` must already be sanitized (finite, non-negative).
/// Auto presets grow the canvas around the native-size image; fixed presets
/// keep their size and aspect-fit the image into the padded area left below
/// the header. With a frame, the card is pushed down by the header plus a
/// quarter of the padding so the chrome does not crowd the top edge.
pub fn resolve(image_width: u32, image_height: u32, padding: f32, header: f32, preset: &SizePreset) -> ResolvedGeometry {
    let iw = image_width.max(1) as f32;
    let ih = image_height.max(1) as f32;

    let (canvas_width, canvas_height, scale) = if preset.is_auto() {
        let w = (iw + padding * 2.0).floor().max(1.0) as u32;
        let h = (ih + padding * 2.0 + header).floor().max(1.0) as u32;
        (w, h, 1.0)
    } else {
        let available_w = (preset.width as f32 - padding * 2.0).max(0.0);
        let available_h = (preset.height as f32 - padding * 2.0 - header).max(0.0);
        let scale = (available_w / iw).min(available_h / ih);
        (preset.width, preset.height, scale)
    };

    let img_w = iw * scale;
    let img_h = ih * scale;
    let cw = canvas_width as f32;
    let ch = canvas_height as f32;

    let x = (cw - img_w) / 2.0;
    let frame_offset = if header > 0.0 { padding / 4.0 } else { 0.0 };
    let y = (ch - img_h - header) / 2.0 + header + frame_offset;

    let image_rect = Rect::new(x, y, img_w, img_h);
    let frame_rect = Rect::new(x, y - header, img_w, header);

    log::debug!(
        "resolved geometry: canvas {}x{}, image {:?}, scale {:.3}",
        canvas_width,
        canvas_height,
        image_rect,
        scale
    );

    ResolvedGeometry {
        canvas_width,
        canvas_height,
        image_rect,
        frame_rect,
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::SIZE_PRESETS;

    const AUTO: SizePreset = SIZE_PRESETS[0];
    const SQUARE: SizePreset = SIZE_PRESETS[3];

    #[test]
    fn auto_grows_around_native_image() {
        let g = resolve(800, 600, 64.0, 0.0, &AUTO);
        assert_eq!((g.canvas_width, g.canvas_height), (928, 728));
        assert_eq!(g.image_rect, Rect::new(64.0, 64.0, 800.0, 600.0));
        assert_eq!(g.scale, 1.0);
        assert!(!g.has_frame());
    }

    #[test]
    fn fixed_preset_aspect_fits() {
        let g = resolve(800, 600, 64.0, 0.0, &SQUARE);
        assert_eq!((g.canvas_width, g.canvas_height), (1080, 1080));
        assert!((g.scale - 1.19).abs() < 1e-4);
        assert!((g.image_rect.width - 952.0).abs() < 1e-2);
        assert!((g.image_rect.height - 714.0).abs() < 1e-2);
        assert!((g.image_rect.x - 64.0).abs() < 1e-2);
        assert!((g.image_rect.y - 183.0).abs() < 1e-2);
    }

    #[test]
    fn browser_frame_offsets_card() {
        let g = resolve(800, 600, 64.0, 40.0, &AUTO);
        assert_eq!(g.canvas_height, 768);
        assert_eq!(g.image_rect.y, 120.0);
        assert_eq!(g.frame_rect, Rect::new(64.0, 80.0, 800.0, 40.0));
        assert_eq!(g.card_rect().height, 640.0);
    }

    #[test]
    fn oversized_padding_yields_empty_image() {
        let g = resolve(800, 600, 600.0, 0.0, &SQUARE);
        assert_eq!(g.scale, 0.0);
        assert!(g.image_rect.is_empty());
    }

    #[test]
    fn half_sized_preset_is_auto() {
        let preset = SizePreset { name: "broken", width: 500, height: 0 };
        let g = resolve(100, 50, 10.0, 0.0, &preset);
        assert_eq!((g.canvas_width, g.canvas_height), (120, 70));
    }

    #[test]
    fn zero_image_does_not_divide_by_zero() {
        let g = resolve(0, 0, 0.0, 0.0, &SQUARE);
        assert!(g.scale.is_finite());
        assert_eq!((g.canvas_width, g.canvas_height), (1080, 1080));
    }
}
