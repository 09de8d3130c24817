//! Image layer: the screenshot, scaled into its rect and clipped to rounded corners

use tiny_skia::{FillRule, FilterQuality, Mask, Pixmap, PixmapPaint, Transform};

use super::layout::Rect;
use super::paint::{rounded_rect_path, Radii};
use crate::SourceImage;

/// Corner shape for the image: a frame header owns the top corners.
pub fn clip_radii(radius: f32, has_frame: bool) -> Radii {
    if has_frame {
        Radii::bottom(radius)
    } else {
        Radii::uniform(radius)
    }
}

/// Draw `image` scaled into `rect` through a rounded clip.
///
/// The clip mask lives only for this call, so later draws are never clipped.
pub fn composite_image(pixmap: &mut Pixmap, image: &SourceImage, rect: Rect, radii: Radii) {
    let Some(path) = rounded_rect_path(rect, radii) else {
        return;
    };
    let Some(mut mask) = Mask::new(pixmap.width(), pixmap.height()) else {
        return;
    };
    mask.fill_path(&path, FillRule::Winding, true, Transform::identity());

    let src = image.pixmap();
    let sx = rect.width / src.width() as f32;
    let sy = rect.height / src.height() as f32;
    let transform = Transform::from_row(sx, 0.0, 0.0, sy, rect.x, rect.y);
    let paint = PixmapPaint {
        quality: if sx == 1.0 && sy == 1.0 {
            FilterQuality::Nearest
        } else {
            FilterQuality::Bicubic
        },
        ..PixmapPaint::default()
    };
    pixmap.draw_pixmap(0, 0, src.as_ref(), &paint, transform, Some(&mask));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::Color;

    fn red_image(w: u32, h: u32) -> SourceImage {
        let rgba: Vec<u8> = std::iter::repeat([255u8, 0, 0, 255]).take((w * h) as usize).flatten().collect();
        SourceImage::from_rgba(w, h, &rgba).unwrap()
    }

    fn canvas() -> Pixmap {
        let mut p = Pixmap::new(100, 100).unwrap();
        p.fill(Color::from_rgba8(0, 0, 255, 255));
        p
    }

    #[test]
    fn all_corners_rounded_without_frame() {
        let mut p = canvas();
        composite_image(&mut p, &red_image(80, 80), Rect::new(10.0, 10.0, 80.0, 80.0), clip_radii(16.0, false));
        assert_eq!(p.pixel(10, 10).unwrap().blue(), 255);
        assert_eq!(p.pixel(89, 89).unwrap().blue(), 255);
        assert_eq!(p.pixel(50, 50).unwrap().red(), 255);
    }

    #[test]
    fn top_corners_square_under_frame() {
        let mut p = canvas();
        composite_image(&mut p, &red_image(80, 80), Rect::new(10.0, 10.0, 80.0, 80.0), clip_radii(16.0, true));
        assert_eq!(p.pixel(10, 10).unwrap().red(), 255);
        assert_eq!(p.pixel(89, 10).unwrap().red(), 255);
        assert_eq!(p.pixel(10, 89).unwrap().blue(), 255);
    }

    #[test]
    fn image_is_scaled_into_rect() {
        let mut p = canvas();
        composite_image(&mut p, &red_image(10, 5), Rect::new(0.0, 0.0, 100.0, 50.0), Radii::default());
        assert_eq!(p.pixel(99, 49).unwrap().red(), 255);
        assert_eq!(p.pixel(50, 60).unwrap().blue(), 255);
    }

    #[test]
    fn empty_rect_draws_nothing() {
        let mut p = canvas();
        let before = p.clone();
        composite_image(&mut p, &red_image(4, 4), Rect::new(10.0, 10.0, 0.0, 0.0), Radii::uniform(4.0));
        assert_eq!(p.data(), before.data());
    }
}
