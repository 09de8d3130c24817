use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use snappretty::platform::{
    ClipboardImage, ClipboardSink, HostPlatform, MemoryClipboard, NoopPlatform, SaveDestination, SaveRequest,
    UnavailableClipboard,
};
use snappretty::{copy_to_clipboard, export_to_file, render_to_surface, Error, ExportFormat, SourceImage, StyleConfig};

/// Records every request and answers with a fixed path
struct RecordingDestination {
    path: Option<PathBuf>,
    seen: Mutex<Vec<SaveRequest>>,
}

impl SaveDestination for RecordingDestination {
    fn choose(&self, request: &SaveRequest) -> Option<PathBuf> {
        self.seen.lock().unwrap().push(request.clone());
        self.path.clone()
    }
}

struct SharedClipboard(Arc<Mutex<Vec<ClipboardImage>>>);

impl ClipboardSink for SharedClipboard {
    fn write_image(&mut self, image: &ClipboardImage) -> Result<(), String> {
        self.0.lock().unwrap().push(image.clone());
        Ok(())
    }
}

fn surface() -> snappretty::Surface {
    let image = SourceImage::from_rgba(2, 2, &[200u8; 16]).unwrap();
    render_to_surface(&StyleConfig { padding: 4.0, ..Default::default() }, &image).unwrap()
}

#[test]
fn picker_sees_format_specific_request() {
    let dest = RecordingDestination { path: None, seen: Mutex::new(Vec::new()) };
    assert!(!export_to_file(&surface(), ExportFormat::Png, 90, &dest).unwrap());
    assert!(!export_to_file(&surface(), ExportFormat::Jpg, 90, &dest).unwrap());

    let seen = dest.seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].default_name, "screenshot.png");
    assert_eq!(seen[0].filter_name, "PNG Image");
    assert_eq!(seen[1].default_name, "screenshot.jpg");
    assert_eq!(seen[1].extensions, vec!["jpg".to_string()]);
}

#[test]
fn clipboard_gets_raw_pixels_matching_surface() {
    let s = surface();
    let store = Arc::new(Mutex::new(Vec::new()));
    copy_to_clipboard(&s, &mut SharedClipboard(store.clone())).unwrap();

    let images = store.lock().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!((images[0].width, images[0].height), (s.width(), s.height()));
    assert_eq!(images[0].rgba, s.to_rgba().unwrap().into_raw());
}

#[test]
fn clipboard_failures_are_reported() {
    let err = copy_to_clipboard(&surface(), &mut UnavailableClipboard).unwrap_err();
    match err {
        Error::ClipboardUnavailable(reason) => assert!(reason.contains("no clipboard")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn copying_an_empty_surface_fails() {
    let mut clip = MemoryClipboard::new();
    assert!(copy_to_clipboard(&snappretty::Surface::new(), &mut clip).is_err());
    assert!(clip.last_image().is_none());
}

#[test]
fn noop_platform_never_saves() {
    let platform = NoopPlatform::new();
    let dest = platform.save_destination();
    assert!(!export_to_file(&surface(), ExportFormat::Png, 100, dest.as_ref()).unwrap());
    let mut clip = platform.clipboard();
    assert!(copy_to_clipboard(&surface(), clip.as_mut()).is_err());
}
