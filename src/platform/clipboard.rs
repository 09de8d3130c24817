//! Clipboard image hand-off primitives

/// Raw straight-alpha RGBA pixels, the format clipboard image APIs accept
#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub trait ClipboardSink: Send {
    /// Write the image. An `Err` carries the host's reason for rejecting it.
    fn write_image(&mut self, image: &ClipboardImage) -> std::result::Result<(), String>;
}

/// In-process clipboard that keeps the last written image
#[derive(Default)]
pub struct MemoryClipboard {
    last: Option<ClipboardImage>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_image(&self) -> Option<ClipboardImage> {
        self.last.clone()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_image(&mut self, image: &ClipboardImage) -> std::result::Result<(), String> {
        self.last = Some(image.clone());
        Ok(())
    }
}

/// A clipboard that is never available (headless sessions, tests)
pub struct UnavailableClipboard;

impl ClipboardSink for UnavailableClipboard {
    fn write_image(&mut self, _image: &ClipboardImage) -> std::result::Result<(), String> {
        Err("no clipboard available".into())
    }
}

/// The desktop clipboard via `arboard`
#[cfg(feature = "clipboard")]
#[derive(Default)]
pub struct SystemClipboard;

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardSink for SystemClipboard {
    fn write_image(&mut self, image: &ClipboardImage) -> std::result::Result<(), String> {
        let mut clip = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        let data = arboard::ImageData {
            width: image.width as usize,
            height: image.height as usize,
            bytes: std::borrow::Cow::Borrowed(image.rgba.as_slice()),
        };
        clip.set_image(data).map_err(|e| e.to_string())
    }
}
