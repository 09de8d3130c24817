//! Static preset tables
//!
//! Selections are persisted by index, so entries may be appended but never
//! reordered or removed.

use crate::Rgb;

/// A named multi-stop linear gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPreset {
    pub name: &'static str,
    /// At least two colors, evenly spaced along the gradient line
    pub colors: &'static [Rgb],
    /// Angle in degrees, `0` running left to right
    pub angle: f32,
}

impl GradientPreset {
    /// CSS rendition for UI swatches, e.g. `linear-gradient(135deg, #f093fb 0%, #f5576c 100%)`
    pub fn css(&self) -> String {
        let last = self.colors.len().saturating_sub(1).max(1) as f32;
        let stops: Vec<String> = self
            .colors
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{} {}%", c, (i as f32 / last * 100.0).round()))
            .collect();
        format!("linear-gradient({}deg, {})", self.angle, stops.join(", "))
    }
}

/// A named output canvas size; `0×0` means auto-size to content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePreset {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl SizePreset {
    /// A preset only pins the canvas when both sides are set.
    pub fn is_auto(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

pub const GRADIENT_PRESETS: [GradientPreset; 12] = [
    GradientPreset { name: "Sunset", colors: &[Rgb::new(0xf0, 0x93, 0xfb), Rgb::new(0xf5, 0x57, 0x6c)], angle: 135.0 },
    GradientPreset { name: "Ocean", colors: &[Rgb::new(0x4f, 0xac, 0xfe), Rgb::new(0x00, 0xf2, 0xfe)], angle: 135.0 },
    GradientPreset { name: "Forest", colors: &[Rgb::new(0x43, 0xe9, 0x7b), Rgb::new(0x38, 0xf9, 0xd7)], angle: 135.0 },
    GradientPreset { name: "Lavender", colors: &[Rgb::new(0xa1, 0x8c, 0xd1), Rgb::new(0xfb, 0xc2, 0xeb)], angle: 135.0 },
    GradientPreset { name: "Peach", colors: &[Rgb::new(0xff, 0xec, 0xd2), Rgb::new(0xfc, 0xb6, 0x9f)], angle: 135.0 },
    GradientPreset {
        name: "Night",
        colors: &[Rgb::new(0x0c, 0x0c, 0x1d), Rgb::new(0x1a, 0x1a, 0x3e), Rgb::new(0x2d, 0x1b, 0x69)],
        angle: 135.0,
    },
    GradientPreset { name: "Flame", colors: &[Rgb::new(0xf8, 0x36, 0x00), Rgb::new(0xf9, 0xd4, 0x23)], angle: 135.0 },
    GradientPreset { name: "Arctic", colors: &[Rgb::new(0xe0, 0xea, 0xfc), Rgb::new(0xcf, 0xde, 0xf3)], angle: 135.0 },
    GradientPreset { name: "Berry", colors: &[Rgb::new(0x83, 0x60, 0xc3), Rgb::new(0x2e, 0xbf, 0x91)], angle: 135.0 },
    GradientPreset { name: "Coral", colors: &[Rgb::new(0xff, 0x9a, 0x9e), Rgb::new(0xfa, 0xd0, 0xc4)], angle: 135.0 },
    GradientPreset { name: "Midnight", colors: &[Rgb::new(0x2b, 0x58, 0x76), Rgb::new(0x4e, 0x43, 0x76)], angle: 135.0 },
    GradientPreset { name: "Cotton Candy", colors: &[Rgb::new(0xa1, 0xc4, 0xfd), Rgb::new(0xc2, 0xe9, 0xfb)], angle: 135.0 },
];

pub const SIZE_PRESETS: [SizePreset; 7] = [
    SizePreset { name: "Auto", width: 0, height: 0 },
    SizePreset { name: "Twitter Post", width: 1200, height: 675 },
    SizePreset { name: "LinkedIn Post", width: 1200, height: 627 },
    SizePreset { name: "Instagram Square", width: 1080, height: 1080 },
    SizePreset { name: "Instagram Story", width: 1080, height: 1920 },
    SizePreset { name: "Facebook Post", width: 1200, height: 630 },
    SizePreset { name: "Product Hunt", width: 1270, height: 760 },
];

/// Gradient lookup; out-of-range indices resolve to the last preset.
pub fn gradient_preset(index: usize) -> &'static GradientPreset {
    &GRADIENT_PRESETS[index.min(GRADIENT_PRESETS.len() - 1)]
}

/// Size lookup; out-of-range indices resolve to the last preset.
pub fn size_preset(index: usize) -> &'static SizePreset {
    &SIZE_PRESETS[index.min(SIZE_PRESETS.len() - 1)]
}

/// Resolve a CLI/UI selector: either a table index or a case-insensitive name.
pub fn find_gradient(selector: &str) -> Option<usize> {
    find_index(selector, GRADIENT_PRESETS.iter().map(|p| p.name))
}

pub fn find_size(selector: &str) -> Option<usize> {
    find_index(selector, SIZE_PRESETS.iter().map(|p| p.name))
}

fn find_index<'a>(selector: &str, mut names: impl ExactSizeIterator<Item = &'a str>) -> Option<usize> {
    let len = names.len();
    let selector = selector.trim();
    if let Ok(index) = selector.parse::<usize>() {
        return (index < len).then_some(index);
    }
    names.position(|name| name.eq_ignore_ascii_case(selector))
}
