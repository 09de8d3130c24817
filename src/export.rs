//! Export: encode a rendered surface, write it where the host says, or copy it

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::platform::{ClipboardImage, ClipboardSink, SaveDestination, SaveRequest};
use crate::rendering::Surface;
use crate::{Error, ExportFormat, Result};

/// Lowest quality `export_to_file` will encode with.
pub const MIN_EXPORT_QUALITY: u8 = 10;
pub const MAX_EXPORT_QUALITY: u8 = 100;

fn encode_error(format: ExportFormat, reason: impl Into<String>) -> Error {
    Error::EncodingFailure {
        format: format.extension().to_ascii_uppercase(),
        reason: reason.into(),
    }
}

/// JPEG codec quality for a user quality. The codec takes the same 1..=100
/// scale, so this only clamps.
pub fn jpeg_quality(quality: u8) -> u8 {
    quality.clamp(1, 100)
}

/// Encode `surface` to PNG or JPEG bytes.
///
/// `quality` only affects JPEG. Fails on an empty surface or an empty encode.
pub fn encode(surface: &Surface, format: ExportFormat, quality: u8) -> Result<Vec<u8>> {
    let rgba = surface.to_rgba().map_err(|_| encode_error(format, "surface has zero area"))?;
    let (width, height) = rgba.dimensions();

    let mut buffer = Vec::new();
    match format {
        ExportFormat::Png => {
            let mut cursor = Cursor::new(&mut buffer);
            rgba.write_to(&mut cursor, ImageFormat::Png)
                .map_err(|e| encode_error(format, e.to_string()))?;
        }
        ExportFormat::Jpg => {
            // JPEG has no alpha channel
            let rgb_data: Vec<u8> = rgba.pixels().flat_map(|p| [p.0[0], p.0[1], p.0[2]]).collect();
            let rgb = RgbImage::from_raw(width, height, rgb_data)
                .ok_or_else(|| encode_error(format, "failed to create RGB image"))?;

            let mut cursor = Cursor::new(&mut buffer);
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, jpeg_quality(quality));
            rgb.write_with_encoder(encoder)
                .map_err(|e| encode_error(format, e.to_string()))?;
        }
    }

    if buffer.is_empty() {
        return Err(encode_error(format, "encoder produced no data"));
    }
    log::debug!("encoded {}x{} as {} ({} bytes)", width, height, format.mime_type(), buffer.len());
    Ok(buffer)
}

/// The picker request an export in `format` makes.
pub fn save_request(format: ExportFormat) -> SaveRequest {
    SaveRequest {
        default_name: format!("screenshot.{}", format.extension()),
        filter_name: format.filter_name(),
        extensions: vec![format.extension().to_string()],
    }
}

/// Ask `destination` for a path, encode and write the file.
///
/// Returns `Ok(false)` without encoding or writing when the picker is
/// canceled. Quality is clamped to 10..=100.
pub fn export_to_file(
    surface: &Surface,
    format: ExportFormat,
    quality: u8,
    destination: &dyn SaveDestination,
) -> Result<bool> {
    let quality = quality.clamp(MIN_EXPORT_QUALITY, MAX_EXPORT_QUALITY);
    let Some(path) = destination.choose(&save_request(format)) else {
        log::warn!("export canceled: no destination chosen");
        return Ok(false);
    };

    write_encoded(surface, format, quality, &path)?;
    Ok(true)
}

/// Encode and write to `path`, with no destination picker involved.
pub(crate) fn write_encoded(surface: &Surface, format: ExportFormat, quality: u8, path: &Path) -> Result<()> {
    let bytes = encode(surface, format, quality)?;
    std::fs::write(path, &bytes)?;
    log::info!("exported {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Hand the surface's raw RGBA pixels to `sink`, bypassing file encoding.
pub fn copy_to_clipboard(surface: &Surface, sink: &mut dyn ClipboardSink) -> Result<()> {
    let rgba = surface.to_rgba()?;
    let image = ClipboardImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    };
    sink.write_image(&image).map_err(Error::ClipboardUnavailable)?;
    log::info!("copied {}x{} image to clipboard", image.width, image.height);
    Ok(())
}
