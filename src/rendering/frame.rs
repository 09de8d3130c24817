//! Device-frame chrome drawn above the screenshot
//!
//! Each skin paints through a mask of its header strip, so nothing lands
//! outside it however narrow the strip is. The header is filled as a rounded
//! rectangle a few pixels taller than the strip and then squared off at the
//! bottom, so it joins the image below into one continuous card.

use tiny_skia::{FillRule, Mask, Pixmap, Transform};

use super::layout::Rect;
use super::paint::{
    draw_text, fill_circle, fill_rect, fill_rounded_rect, rounded_rect_path, solid, stroke_rect, stroke_segments,
    text_width, Radii,
};
use crate::{DeviceFrame, Rgb};

const TRAFFIC_LIGHTS: [Rgb; 3] = [
    Rgb::new(0xff, 0x5f, 0x57),
    Rgb::new(0xfe, 0xbc, 0x2e),
    Rgb::new(0x28, 0xc8, 0x40),
];

const MAC_HEADER: Rgb = Rgb::new(0xe8, 0xe8, 0xe8);
const WINDOWS_HEADER: Rgb = Rgb::new(0xf0, 0xf0, 0xf0);
const WINDOWS_GLYPH: Rgb = Rgb::new(0xcc, 0xcc, 0xcc);

pub const URL_PLACEHOLDER: &str = "localhost:3000";
pub const WINDOW_TITLE: &str = "SnapPretty";

/// Draw `frame`'s chrome into `rect` (the header strip above the image).
///
/// An empty `rect` draws nothing.
pub fn paint_frame(pixmap: &mut Pixmap, frame: DeviceFrame, rect: Rect, radius: f32) {
    if frame == DeviceFrame::None || rect.is_empty() {
        return;
    }
    let Some(path) = rounded_rect_path(rect, Radii::default()) else {
        return;
    };
    let Some(mut mask) = Mask::new(pixmap.width(), pixmap.height()) else {
        return;
    };
    mask.fill_path(&path, FillRule::Winding, true, Transform::identity());

    let header = Header {
        x: rect.x,
        y: rect.y,
        w: rect.width,
        radius,
        clip: &mask,
    };
    match frame {
        DeviceFrame::None => {}
        DeviceFrame::Browser => draw_browser(pixmap, &header),
        DeviceFrame::Macos => draw_macos(pixmap, &header),
        DeviceFrame::Windows => draw_windows(pixmap, &header),
    }
}

/// Where a skin draws, and the mask every draw goes through
struct Header<'a> {
    x: f32,
    y: f32,
    w: f32,
    radius: f32,
    clip: &'a Mask,
}

fn header_bar(pixmap: &mut Pixmap, hd: &Header, h: f32, color: Rgb) {
    let paint = solid(color, 255);
    let clip = Some(hd.clip);
    fill_rounded_rect(pixmap, Rect::new(hd.x, hd.y, hd.w, h + 4.0), hd.radius, &paint, clip);
    fill_rect(pixmap, Rect::new(hd.x, hd.y + h - 4.0, hd.w, 8.0), &paint, clip);
}

fn traffic_lights(pixmap: &mut Pixmap, hd: &Header, x: f32, cy: f32, spacing: f32, dot_radius: f32) {
    for (i, color) in TRAFFIC_LIGHTS.iter().enumerate() {
        fill_circle(pixmap, x + i as f32 * spacing, cy, dot_radius, &solid(*color, 255), Some(hd.clip));
    }
}

fn draw_browser(pixmap: &mut Pixmap, hd: &Header) {
    let (x, y, w) = (hd.x, hd.y, hd.w);
    let h = DeviceFrame::Browser.header_height();
    header_bar(pixmap, hd, h, MAC_HEADER);
    traffic_lights(pixmap, hd, x + 20.0, y + h / 2.0, 22.0, 6.0);

    let bar = Rect::new(x + 90.0, y + (h - 22.0) / 2.0, w - 180.0, 22.0);
    if bar.is_empty() {
        return;
    }
    fill_rounded_rect(pixmap, bar, 4.0, &solid(Rgb::WHITE, 255), Some(hd.clip));

    let size = 11.0;
    let text_x = bar.x + bar.width / 2.0 - text_width(URL_PLACEHOLDER, size) / 2.0;
    let ink = solid(Rgb::new(0x99, 0x99, 0x99), 255);
    draw_text(pixmap, URL_PLACEHOLDER, text_x, bar.y + 15.0, size, &ink, Some(hd.clip));
}

fn draw_macos(pixmap: &mut Pixmap, hd: &Header) {
    let h = DeviceFrame::Macos.header_height();
    header_bar(pixmap, hd, h, MAC_HEADER);
    traffic_lights(pixmap, hd, hd.x + 16.0, hd.y + h / 2.0, 20.0, 5.5);
}

fn draw_windows(pixmap: &mut Pixmap, hd: &Header) {
    let (x, y, w) = (hd.x, hd.y, hd.w);
    let clip = Some(hd.clip);
    let h = DeviceFrame::Windows.header_height();
    header_bar(pixmap, hd, h, WINDOWS_HEADER);

    // 46px button cells, right aligned: minimize, maximize, close
    let button_w = 46.0;
    let mid = y + h / 2.0;
    let glyph = solid(WINDOWS_GLYPH, 255);

    fill_rect(pixmap, Rect::new(x + w - button_w * 3.0, mid - 0.5, 10.0, 1.0), &glyph, clip);
    stroke_rect(pixmap, Rect::new(x + w - button_w * 2.0 + 18.0, mid - 5.0, 10.0, 10.0), 1.0, &glyph, clip);

    let close_x = x + w - button_w + 18.0;
    stroke_segments(
        pixmap,
        &[
            ((close_x, mid - 5.0), (close_x + 10.0, mid + 5.0)),
            ((close_x + 10.0, mid - 5.0), (close_x, mid + 5.0)),
        ],
        1.5,
        &glyph,
        clip,
    );

    let ink = solid(Rgb::new(0x33, 0x33, 0x33), 255);
    draw_text(pixmap, WINDOW_TITLE, x + 12.0, mid + 4.0, 12.0, &ink, clip);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::Color;

    fn canvas() -> Pixmap {
        let mut p = Pixmap::new(400, 120).unwrap();
        p.fill(Color::BLACK);
        p
    }

    fn rgb_at(p: &Pixmap, x: u32, y: u32) -> (u8, u8, u8) {
        let px = p.pixel(x, y).unwrap();
        (px.red(), px.green(), px.blue())
    }

    #[test]
    fn none_draws_nothing() {
        let mut p = canvas();
        let before = p.clone();
        paint_frame(&mut p, DeviceFrame::None, Rect::new(20.0, 20.0, 300.0, 0.0), 12.0);
        assert_eq!(p.data(), before.data());
    }

    #[test]
    fn browser_has_dots_and_url_bar() {
        let mut p = canvas();
        paint_frame(&mut p, DeviceFrame::Browser, Rect::new(20.0, 20.0, 360.0, 40.0), 12.0);
        // first traffic light centered at (40, 40)
        assert_eq!(rgb_at(&p, 40, 40), (0xff, 0x5f, 0x57));
        // third at (84, 40)
        assert_eq!(rgb_at(&p, 84, 40), (0x28, 0xc8, 0x40));
        // url bar is white away from its text
        assert_eq!(rgb_at(&p, 115, 40), (255, 255, 255));
        // header body
        assert_eq!(rgb_at(&p, 300, 55), (0xe8, 0xe8, 0xe8));
        // nothing below the strip
        assert_eq!(rgb_at(&p, 200, 70), (0, 0, 0));
    }

    #[test]
    fn macos_has_no_url_bar() {
        let mut p = canvas();
        paint_frame(&mut p, DeviceFrame::Macos, Rect::new(20.0, 20.0, 360.0, 28.0), 12.0);
        assert_eq!(rgb_at(&p, 36, 34), (0xff, 0x5f, 0x57));
        assert_eq!(rgb_at(&p, 200, 34), (0xe8, 0xe8, 0xe8));
    }

    #[test]
    fn windows_header_is_light_gray_with_controls() {
        let mut p = canvas();
        paint_frame(&mut p, DeviceFrame::Windows, Rect::new(20.0, 20.0, 360.0, 32.0), 0.0);
        // square corners when radius is zero
        assert_eq!(rgb_at(&p, 20, 20), (0xf0, 0xf0, 0xf0));
        // minimize glyph straddles the header's vertical middle
        let (r, _, _) = rgb_at(&p, 20 + 360 - 138 + 5, 35);
        assert!(r < 0xf0 && r >= 0xcc);
        // title ink is darker than any control glyph
        let title_ink = (32..80).any(|x| (24..40).any(|y| rgb_at(&p, x, y).0 < 0xa0));
        assert!(title_ink);
    }

    #[test]
    fn rounded_header_corner_is_transparent() {
        let mut p = Pixmap::new(400, 120).unwrap();
        paint_frame(&mut p, DeviceFrame::Macos, Rect::new(20.0, 20.0, 360.0, 28.0), 12.0);
        assert_eq!(p.pixel(20, 20).unwrap().alpha(), 0);
        // bottom edge of the strip is square
        assert_eq!(p.pixel(20, 47).unwrap().alpha(), 255);
        // the squared-off strip stops at the header's bottom edge
        assert_eq!(p.pixel(20, 48).unwrap().alpha(), 0);
    }

    #[test]
    fn empty_rect_draws_nothing() {
        for frame in [DeviceFrame::Browser, DeviceFrame::Macos, DeviceFrame::Windows] {
            let mut p = canvas();
            let before = p.clone();
            paint_frame(&mut p, frame, Rect::new(20.0, 20.0, 0.0, 40.0), 12.0);
            paint_frame(&mut p, frame, Rect::new(20.0, 20.0, -5.0, 40.0), 12.0);
            assert_eq!(p.data(), before.data(), "{frame:?}");
        }
    }

    #[test]
    fn narrow_rect_keeps_chrome_inside_the_strip() {
        for frame in [DeviceFrame::Browser, DeviceFrame::Macos, DeviceFrame::Windows] {
            let mut p = canvas();
            paint_frame(&mut p, frame, Rect::new(20.0, 20.0, 30.0, 40.0), 12.0);
            for y in 0..120 {
                for x in 0..400 {
                    if (20..50).contains(&x) && (20..60).contains(&y) {
                        continue;
                    }
                    assert_eq!(rgb_at(&p, x, y), (0, 0, 0), "{frame:?} leaked at ({x}, {y})");
                }
            }
            // the strip itself is painted
            assert_ne!(rgb_at(&p, 35, 22), (0, 0, 0), "{frame:?}");
        }
    }
}
