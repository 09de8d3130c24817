//! Decoded source screenshots
//!
//! Decoding is delegated to the `image` crate. The decoded pixels are stored
//! premultiplied so the compositor can draw them without per-render conversion.

use std::path::Path;

use base64::Engine as _;
use tiny_skia::{ColorU8, IntSize, Pixmap};

use crate::{Error, Result};

/// An immutable decoded raster supplied by the caller
///
/// The compositor only reads from it; cloning is cheap enough for hand-off to a
/// worker thread but is never needed on the render path.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixmap: Pixmap,
}

impl SourceImage {
    /// Build from straight (non-premultiplied) RGBA8 rows.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(|| Error::Decode(format!("image dimensions overflow ({}x{})", width, height)))?;
        if rgba.len() != expected {
            return Err(Error::Decode(format!(
                "expected {} bytes for {}x{} RGBA, got {}",
                expected,
                width,
                height,
                rgba.len()
            )));
        }
        let size = IntSize::from_wh(width, height)
            .ok_or_else(|| Error::Decode(format!("image has zero area ({}x{})", width, height)))?;

        let mut data = Vec::with_capacity(expected);
        for px in rgba.chunks_exact(4) {
            let c = ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        let pixmap = Pixmap::from_vec(data, size)
            .ok_or_else(|| Error::Decode(format!("pixmap creation failed for {}x{}", width, height)))?;
        Ok(Self { pixmap })
    }

    /// Decode an encoded image (PNG, JPEG) from memory.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        Self::from_rgba(img.width(), img.height(), img.as_raw())
    }

    /// Read and decode an image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        log::debug!("decoding {} ({} bytes)", path.display(), bytes.len());
        Self::decode(&bytes)
    }

    /// Decode a pasted `data:image/...;base64,...` URL.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let rest = url
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| Error::Decode("not a data URL".into()))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::Decode("data URL has no payload".into()))?;
        if !meta.starts_with("image/") {
            return Err(Error::Decode(format!("data URL is not an image ({})", meta)));
        }
        if !meta.ends_with(";base64") {
            return Err(Error::Decode("only base64 data URLs are supported".into()));
        }
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| Error::Decode(format!("invalid base64 payload: {}", e)))?;
        Self::decode(&bytes)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub(crate) fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}
