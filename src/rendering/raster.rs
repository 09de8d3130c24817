//! Output surface: the raster buffer a render call paints into

use image::RgbaImage;
use sha2::{Digest, Sha256};
use tiny_skia::{Color, IntSize, Pixmap};

use crate::{Error, Result};

const BYTES_PER_PIXEL: u64 = 4;
/// Upper bound on a single surface allocation to avoid process aborts on OOM.
pub(crate) const MAX_SURFACE_BYTES: u64 = 512 * 1024 * 1024;

/// A mutable raster owned by the caller and repainted by every render
///
/// A fresh surface is empty (zero area). [`render`](crate::render) resizes it
/// to the resolved canvas and repaints every pixel, so a surface handle can be
/// reused across parameter changes.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    pixmap: Option<Pixmap>,
}

impl Surface {
    pub fn new() -> Self {
        Self { pixmap: None }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.as_ref().map_or(0, Pixmap::width)
    }

    pub fn height(&self) -> u32 {
        self.pixmap.as_ref().map_or(0, Pixmap::height)
    }

    /// True until the first successful render.
    pub fn is_empty(&self) -> bool {
        self.pixmap.is_none()
    }

    /// The premultiplied pixels, if the surface has been rendered.
    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    /// Resize to `width`×`height` and clear to transparent.
    ///
    /// The existing buffer is reused when the size is unchanged.
    pub(crate) fn reset(&mut self, width: u32, height: u32) -> Result<&mut Pixmap> {
        let reusable = matches!(&self.pixmap, Some(p) if p.width() == width && p.height() == height);
        if reusable {
            if let Some(pixmap) = self.pixmap.as_mut() {
                pixmap.fill(Color::TRANSPARENT);
            }
        } else {
            self.pixmap = Some(new_pixmap(width, height)?);
        }
        self.pixmap
            .as_mut()
            .ok_or_else(|| Error::Surface("surface was not allocated".into()))
    }

    /// Extract straight-alpha RGBA rows, bypassing any file encoding.
    ///
    /// This is the clipboard path; it fails on an empty surface.
    pub fn to_rgba(&self) -> Result<RgbaImage> {
        let pixmap = self.pixmap.as_ref().ok_or_else(|| Error::EncodingFailure {
            format: "RGBA".into(),
            reason: "surface has zero area".into(),
        })?;
        let mut data = Vec::with_capacity(pixmap.data().len());
        for px in pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        RgbaImage::from_raw(pixmap.width(), pixmap.height(), data).ok_or_else(|| Error::EncodingFailure {
            format: "RGBA".into(),
            reason: "pixel buffer does not match surface size".into(),
        })
    }

    /// SHA-256 of the dimensions and premultiplied pixels, hex encoded.
    ///
    /// Two renders with identical inputs always produce the same fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width().to_le_bytes());
        hasher.update(self.height().to_le_bytes());
        if let Some(pixmap) = &self.pixmap {
            hasher.update(pixmap.data());
        }
        hex::encode(hasher.finalize())
    }
}

fn guard_dimensions(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::Surface(format!("surface size is zero ({}x{})", width, height)));
    }
    let bytes = (width as u64)
        .checked_mul(height as u64)
        .and_then(|px| px.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(|| Error::Surface(format!("surface dimensions overflow ({}x{})", width, height)))?;
    if bytes > MAX_SURFACE_BYTES {
        return Err(Error::Surface(format!(
            "surface {}x{} would allocate {} bytes (limit {})",
            width, height, bytes, MAX_SURFACE_BYTES
        )));
    }
    usize::try_from(bytes).map_err(|_| Error::Surface(format!("surface size {} does not fit in usize", bytes)))
}

/// Allocate a transparent pixmap, refusing zero, overflowing or oversized requests.
pub(crate) fn new_pixmap(width: u32, height: u32) -> Result<Pixmap> {
    let bytes = guard_dimensions(width, height)?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(bytes)
        .map_err(|e| Error::Surface(format!("buffer allocation failed for {} bytes: {}", bytes, e)))?;
    buffer.resize(bytes, 0);
    let size = IntSize::from_wh(width, height)
        .ok_or_else(|| Error::Surface(format!("surface dimensions out of range ({}x{})", width, height)))?;
    Pixmap::from_vec(buffer, size)
        .ok_or_else(|| Error::Surface(format!("pixmap creation failed for {}x{}", width, height)))
}
