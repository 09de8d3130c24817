//! Compositing pipeline
//!
//! One render call resolves geometry and paints four layers onto the caller's
//! surface, each on top of the previous one:
//!
//! 1. **Background**: solid color or linear gradient over the whole canvas
//! 2. **Shadow**: blurred silhouette of the card (skipped when blur is 0)
//! 3. **Frame**: optional window chrome directly above the image
//! 4. **Image**: the screenshot, clipped to rounded corners
//!
//! Nothing is cached between calls: every render recomputes geometry and
//! repaints every pixel, so identical inputs give identical output.

pub mod background;
pub mod compositor;
pub mod frame;
pub mod layout;
pub mod paint;
pub mod raster;
pub mod shadow;

pub use layout::{Rect, ResolvedGeometry};
pub use raster::Surface;

use crate::{BackgroundKind, Result, SourceImage, StyleConfig};
use background::Background;

/// Resolve the geometry a render with `style` would use for `image`.
pub fn resolve_geometry(style: &StyleConfig, image: &SourceImage) -> ResolvedGeometry {
    geometry_for(&style.sanitized(), image)
}

fn geometry_for(style: &StyleConfig, image: &SourceImage) -> ResolvedGeometry {
    layout::resolve(
        image.width(),
        image.height(),
        style.padding,
        style.device_frame.header_height(),
        style.size(),
    )
}

/// Repaint `surface` with `image` composited according to `style`.
///
/// The surface is resized to the resolved canvas. Out-of-range style values
/// are clamped first; the only failure is a surface that cannot be allocated.
pub fn render(surface: &mut Surface, style: &StyleConfig, image: &SourceImage) -> Result<()> {
    let style = style.sanitized();
    let geometry = geometry_for(&style, image);
    let pixmap = surface.reset(geometry.canvas_width, geometry.canvas_height)?;

    let backdrop = match style.background {
        BackgroundKind::Solid => Background::Solid(style.solid_color),
        BackgroundKind::Gradient => Background::Gradient(style.gradient()),
    };
    background::paint_background(pixmap, &backdrop);

    shadow::paint_shadow(pixmap, geometry.card_rect(), style.corner_radius, &style.shadow)?;

    frame::paint_frame(pixmap, style.device_frame, geometry.frame_rect, style.corner_radius);

    let radii = compositor::clip_radii(style.corner_radius, style.device_frame.is_some());
    compositor::composite_image(pixmap, image, geometry.image_rect, radii);

    log::debug!(
        "rendered {}x{} ({:?} background, {} frame)",
        geometry.canvas_width,
        geometry.canvas_height,
        style.background,
        style.device_frame.name()
    );
    Ok(())
}

/// Render into a fresh surface.
pub fn render_to_surface(style: &StyleConfig, image: &SourceImage) -> Result<Surface> {
    let mut surface = Surface::new();
    render(&mut surface, style, image)?;
    Ok(surface)
}
