//! SnapPretty screenshot compositor
//!
//! Turns a screenshot and a declarative style into a single "beautified"
//! raster: a gradient or solid backdrop, a soft drop shadow, optional window
//! chrome (browser, macOS, Windows) and the corner-rounded screenshot itself.
//!
//! # Features
//!
//! - **Deterministic pipeline**: identical inputs always produce identical pixels
//! - **Fixed or free-form canvases**: auto-size to content or fit social presets
//! - **Export**: PNG/JPEG encoding and raw RGBA extraction for clipboard hand-off
//! - **Host seams**: save destinations and clipboards are small traits, so the
//!   compositor can be embedded in a GUI shell, a CLI or tests
//!
//! # Example
//!
//! ```no_run
//! use snappretty::{render, DeviceFrame, SourceImage, StyleConfig, Surface};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let image = SourceImage::open("screenshot.png")?;
//! let style = StyleConfig {
//!     device_frame: DeviceFrame::Macos,
//!     output_preset: 3, // Instagram Square
//!     ..Default::default()
//! };
//!
//! let mut surface = Surface::new();
//! render(&mut surface, &style, &image)?;
//! let png = snappretty::export::encode(&surface, snappretty::ExportFormat::Png, 100)?;
//! std::fs::write("pretty.png", png)?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod presets;
pub use presets::{GradientPreset, SizePreset, GRADIENT_PRESETS, SIZE_PRESETS};

pub mod source;
pub use source::SourceImage;

// Compositing pipeline (geometry, layers, surface)
pub mod rendering;
pub use rendering::{render, render_to_surface, resolve_geometry, ResolvedGeometry, Surface};

// Encoding, file export and clipboard hand-off
pub mod export;
pub use export::{copy_to_clipboard, export_to_file};

// Host collaborators: save destination picker and clipboard
pub mod platform;

// Async-friendly boundary API (decode and export on a worker thread)
pub mod async_api;
pub use async_api::IoWorker;

/// An opaque RGB color, written as `#rrggbb` in style files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the short `#rgb` form. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Some(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rgb::from_hex(s).ok_or_else(|| Error::Config(format!("invalid hex color '{}'", s)))
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

/// Backdrop painted behind the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Solid,
    #[default]
    Gradient,
}

impl FromStr for BackgroundKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(BackgroundKind::Solid),
            "gradient" => Ok(BackgroundKind::Gradient),
            other => Err(Error::Config(format!("unknown background kind '{}'", other))),
        }
    }
}

/// Window chrome drawn above the screenshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceFrame {
    #[default]
    None,
    Browser,
    Macos,
    Windows,
}

impl DeviceFrame {
    /// All skins in their stable selection order
    pub const ALL: [DeviceFrame; 4] = [
        DeviceFrame::None,
        DeviceFrame::Browser,
        DeviceFrame::Macos,
        DeviceFrame::Windows,
    ];

    /// Fixed height of the skin's header bar in pixels
    pub fn header_height(self) -> f32 {
        match self {
            DeviceFrame::None => 0.0,
            DeviceFrame::Browser => 40.0,
            DeviceFrame::Macos => 28.0,
            DeviceFrame::Windows => 32.0,
        }
    }

    pub fn is_some(self) -> bool {
        self != DeviceFrame::None
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceFrame::None => "none",
            DeviceFrame::Browser => "browser",
            DeviceFrame::Macos => "macos",
            DeviceFrame::Windows => "windows",
        }
    }
}

impl FromStr for DeviceFrame {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        DeviceFrame::ALL
            .into_iter()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| Error::Config(format!("unknown device frame '{}'", s)))
    }
}

/// Drop shadow parameters, mirroring the canvas `shadow*` properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShadowStyle {
    /// Blur radius; `0` disables the shadow layer entirely
    pub blur: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub color: Rgb,
    /// Opacity in `[0, 1]`
    pub opacity: f32,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            blur: 40.0,
            offset_x: 0.0,
            offset_y: 20.0,
            color: Rgb::BLACK,
            opacity: 0.4,
        }
    }
}

/// Style parameters for one render call
///
/// This is a plain value: the caller (a UI shell, the CLI, a test) owns it and
/// re-invokes [`render`] whenever it changes. The defaults match the look the
/// application starts with:
/// - Sunset gradient, 64px padding, 12px corners
/// - 40px black shadow at 40% opacity, pushed 20px down
/// - no window chrome, auto-sized canvas
///
/// # Examples
///
/// ```
/// let style = snappretty::StyleConfig::default();
/// assert_eq!(style.padding, 64.0);
/// assert_eq!(style.output_preset, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    /// Solid color or gradient backdrop
    pub background: BackgroundKind,
    /// Color used when `background` is `Solid`
    pub solid_color: Rgb,
    /// Index into [`GRADIENT_PRESETS`]
    pub gradient_preset: usize,
    /// Space between the card and the canvas edge, in pixels
    pub padding: f32,
    /// Corner radius of the card
    pub corner_radius: f32,
    pub shadow: ShadowStyle,
    pub device_frame: DeviceFrame,
    /// Index into [`SIZE_PRESETS`]; `0` is "Auto"
    pub output_preset: usize,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: BackgroundKind::Gradient,
            solid_color: Rgb::new(0x66, 0x7e, 0xea),
            gradient_preset: 0,
            padding: 64.0,
            corner_radius: 12.0,
            shadow: ShadowStyle::default(),
            device_frame: DeviceFrame::None,
            output_preset: 0,
        }
    }
}

impl StyleConfig {
    /// Parse a style from JSON. Missing keys take their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a style file written by [`StyleConfig::to_json`] or by the UI shell.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Return a copy with every numeric parameter forced into its valid range.
    ///
    /// This is a visual tool, so out-of-range input is clamped rather than
    /// rejected: negative or non-finite lengths become `0`, opacity is clamped
    /// to `[0, 1]` and preset indices are pinned to the last table entry.
    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();
        out.padding = non_negative(self.padding);
        out.corner_radius = non_negative(self.corner_radius);
        out.shadow.blur = non_negative(self.shadow.blur);
        out.shadow.offset_x = finite_or_zero(self.shadow.offset_x);
        out.shadow.offset_y = finite_or_zero(self.shadow.offset_y);
        out.shadow.opacity = if self.shadow.opacity.is_finite() {
            self.shadow.opacity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        out.gradient_preset = self.gradient_preset.min(GRADIENT_PRESETS.len() - 1);
        out.output_preset = self.output_preset.min(SIZE_PRESETS.len() - 1);
        if out != *self {
            log::warn!("style parameters out of range were clamped");
        }
        out
    }

    pub fn gradient(&self) -> &'static GradientPreset {
        presets::gradient_preset(self.gradient_preset)
    }

    pub fn size(&self) -> &'static SizePreset {
        presets::size_preset(self.output_preset)
    }
}

fn non_negative(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// Encoded export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    #[serde(alias = "jpeg")]
    Jpg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpg => "jpg",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpg => "image/jpeg",
        }
    }

    /// Label shown in the save dialog filter, e.g. `PNG Image`
    pub fn filter_name(self) -> String {
        format!("{} Image", self.extension().to_ascii_uppercase())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpg),
            other => Err(Error::Config(format!("unknown export format '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = StyleConfig::default();
        assert_eq!(style.background, BackgroundKind::Gradient);
        assert_eq!(style.solid_color.to_hex(), "#667eea");
        assert_eq!(style.corner_radius, 12.0);
        assert_eq!(style.shadow.blur, 40.0);
        assert_eq!(style.device_frame, DeviceFrame::None);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex("#ff5f57"), Some(Rgb::new(0xff, 0x5f, 0x57)));
        assert_eq!(Rgb::from_hex("999"), Some(Rgb::new(0x99, 0x99, 0x99)));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
    }

    #[test]
    fn test_header_heights() {
        assert_eq!(DeviceFrame::None.header_height(), 0.0);
        assert_eq!(DeviceFrame::Browser.header_height(), 40.0);
        assert_eq!(DeviceFrame::Macos.header_height(), 28.0);
        assert_eq!(DeviceFrame::Windows.header_height(), 32.0);
    }

    #[test]
    fn test_sanitized_clamps() {
        let style = StyleConfig {
            padding: -10.0,
            corner_radius: f32::NAN,
            gradient_preset: 99,
            output_preset: 42,
            shadow: ShadowStyle {
                opacity: 3.0,
                blur: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let s = style.sanitized();
        assert_eq!(s.padding, 0.0);
        assert_eq!(s.corner_radius, 0.0);
        assert_eq!(s.gradient_preset, GRADIENT_PRESETS.len() - 1);
        assert_eq!(s.output_preset, SIZE_PRESETS.len() - 1);
        assert_eq!(s.shadow.opacity, 1.0);
        assert_eq!(s.shadow.blur, 0.0);
    }

    #[test]
    fn test_style_json_roundtrip_and_partial() {
        let style = StyleConfig::from_json_str(
            r##"{"background":"solid","solidColor":"#101820","deviceFrame":"browser","shadow":{"blur":0}}"##,
        )
        .unwrap();
        assert_eq!(style.background, BackgroundKind::Solid);
        assert_eq!(style.solid_color, Rgb::new(0x10, 0x18, 0x20));
        assert_eq!(style.device_frame, DeviceFrame::Browser);
        assert_eq!(style.shadow.blur, 0.0);
        assert_eq!(style.shadow.offset_y, 20.0);
        assert_eq!(style.padding, 64.0);

        let again = StyleConfig::from_json_str(&style.to_json().unwrap()).unwrap();
        assert_eq!(again, style);
    }

    #[test]
    fn test_bad_color_is_config_error() {
        let err = StyleConfig::from_json_str(r#"{"solidColor":"blue"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_export_format_names() {
        assert_eq!("jpeg".parse::<ExportFormat>().unwrap(), ExportFormat::Jpg);
        assert_eq!(ExportFormat::Png.filter_name(), "PNG Image");
        assert_eq!(ExportFormat::Jpg.mime_type(), "image/jpeg");
    }
}
