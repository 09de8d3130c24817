//! Drop shadow layer
//!
//! The silhouette is rasterized into its own small layer, blurred there and
//! composited onto the surface at the shadow offset. The blur follows canvas
//! `shadowBlur` semantics (sigma = blur / 2), approximated by three box passes.
//! Large blurs run on a downscaled layer that is stretched back when drawn, so
//! the layer never grows past the card plus a bounded margin.

use tiny_skia::{FilterQuality, Pixmap, PixmapPaint, Transform};

use super::layout::Rect;
use super::paint::{fill_rounded_rect, solid};
use super::raster::new_pixmap;
use crate::{Result, Rgb, ShadowStyle};

/// Largest sigma blurred at full resolution. Above it the layer is downscaled.
const MAX_LAYER_SIGMA: f32 = 32.0;

/// Paint the shadow for a card occupying `card`, then fill the card white.
///
/// The white fill is covered by the frame and image layers; only the blurred
/// halo around it stays visible. Nothing is drawn when `blur <= 0`.
pub fn paint_shadow(pixmap: &mut Pixmap, card: Rect, radius: f32, shadow: &ShadowStyle) -> Result<()> {
    if shadow.blur <= 0.0 || card.is_empty() {
        return Ok(());
    }

    let sigma = shadow.blur / 2.0;
    let scale = (sigma / MAX_LAYER_SIGMA).ceil().max(1.0);
    let layer_sigma = sigma / scale;
    let margin = (layer_sigma * 3.0).ceil();
    let local = Rect::new(margin, margin, card.width / scale, card.height / scale);
    let layer_w = (local.width + margin * 2.0).ceil() as u32;
    let layer_h = (local.height + margin * 2.0).ceil() as u32;
    let mut layer = new_pixmap(layer_w, layer_h)?;

    let alpha = (shadow.opacity * 255.0).round() as u8;
    fill_rounded_rect(&mut layer, local, radius / scale, &solid(shadow.color, alpha), None);
    box_blur(&mut layer, layer_sigma);

    let transform = Transform::from_row(
        scale,
        0.0,
        0.0,
        scale,
        card.x - margin * scale + shadow.offset_x,
        card.y - margin * scale + shadow.offset_y,
    );
    let paint = PixmapPaint {
        quality: if scale > 1.0 { FilterQuality::Bilinear } else { FilterQuality::Nearest },
        ..PixmapPaint::default()
    };
    pixmap.draw_pixmap(0, 0, layer.as_ref(), &paint, transform, None);
    log::debug!("shadow: sigma {:.1}, layer {}x{} at 1/{}", sigma, layer_w, layer_h, scale);

    fill_rounded_rect(pixmap, card, radius, &solid(Rgb::WHITE, 255), None);
    Ok(())
}

/// Box sizes for a three-pass Gaussian approximation (CSS filter effects §blur).
fn box_size(sigma: f32) -> usize {
    let d = (sigma * 3.0 * (2.0 * std::f32::consts::PI).sqrt() / 4.0 + 0.5).floor();
    d.max(1.0) as usize
}

/// Blur a premultiplied pixmap in place with three horizontal and three vertical box passes.
pub(crate) fn box_blur(pixmap: &mut Pixmap, sigma: f32) {
    if sigma <= 0.0 {
        return;
    }
    let radius = box_size(sigma) / 2;
    if radius == 0 {
        return;
    }
    let width = pixmap.width() as usize;
    let height = pixmap.height() as usize;
    let data = pixmap.data_mut();
    let mut scratch = vec![0u8; data.len()];

    for _ in 0..3 {
        box_pass(data, &mut scratch, width, height, radius, 4, width * 4);
        data.copy_from_slice(&scratch);
    }
    for _ in 0..3 {
        box_pass(data, &mut scratch, height, width, radius, width * 4, 4);
        data.copy_from_slice(&scratch);
    }
}

/// One box pass along lines of `len` pixels; `step` walks within a line and
/// `line_step` moves to the next line. Samples outside the buffer count as
/// transparent.
fn box_pass(src: &[u8], dst: &mut [u8], len: usize, lines: usize, radius: usize, step: usize, line_step: usize) {
    let window = (radius * 2 + 1) as u32;
    for line in 0..lines {
        let base = line * line_step;
        for channel in 0..4 {
            let at = |i: usize| src[base + i * step + channel] as u32;
            let mut sum: u32 = (0..=radius.min(len - 1)).map(at).sum();
            for i in 0..len {
                dst[base + i * step + channel] = (sum / window) as u8;
                let entering = i + radius + 1;
                if entering < len {
                    sum += at(entering);
                }
                if i >= radius {
                    sum -= at(i - radius);
                }
            }
        }
    }
}
