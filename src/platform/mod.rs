//! Host collaborators: where exports are saved and where copies go
//!
//! The compositor never opens dialogs or talks to the desktop itself. A host
//! (GUI shell, CLI, test) hands it small trait objects instead, so export and
//! clipboard logic stays deterministic and testable.

pub mod clipboard;
pub mod dialog;

pub use clipboard::{ClipboardImage, ClipboardSink, MemoryClipboard, UnavailableClipboard};
#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
pub use dialog::{CanceledDestination, DirectoryDestination, FixedDestination, SaveDestination, SaveRequest};

/// A small composite trait a host implements to offer its collaborators.
pub trait HostPlatform: Send + Sync {
    fn save_destination(&self) -> Box<dyn SaveDestination>;
    fn clipboard(&self) -> Box<dyn ClipboardSink>;
}

/// A host with no desktop: every save is canceled and the clipboard is absent.
pub struct NoopPlatform;

impl NoopPlatform {
    pub fn new() -> Self {
        NoopPlatform
    }
}

impl Default for NoopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl HostPlatform for NoopPlatform {
    fn save_destination(&self) -> Box<dyn SaveDestination> {
        Box::new(CanceledDestination)
    }

    fn clipboard(&self) -> Box<dyn ClipboardSink> {
        Box::new(UnavailableClipboard)
    }
}
