use crate::export::{self, save_request};
use crate::platform::SaveDestination;
use crate::{Error, ExportFormat, Result, SourceImage, Surface};
use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};
use std::thread;
use tokio::sync::oneshot;

enum Command {
    Decode(PathBuf, oneshot::Sender<Result<SourceImage>>),
    DecodeDataUrl(String, oneshot::Sender<Result<SourceImage>>),
    Encode(Surface, ExportFormat, u8, oneshot::Sender<Result<Vec<u8>>>),
    Write(Surface, ExportFormat, u8, PathBuf, oneshot::Sender<Result<()>>),
    Close(oneshot::Sender<Result<()>>),
}

/// An async-friendly I/O boundary backed by a dedicated worker thread.
///
/// Image decoding and export encoding run on the worker; rendering stays
/// synchronous on the caller's thread. Every request is answered exactly once
/// and cannot be canceled once sent. Exports carry a snapshot of the surface,
/// so the caller may keep rendering into its own surface meanwhile.
#[derive(Clone)]
pub struct IoWorker {
    cmd_tx: Sender<Command>,
}

impl IoWorker {
    /// Spawn the worker thread.
    pub async fn new() -> Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let (init_tx, init_rx) = oneshot::channel::<Result<()>>();

        thread::Builder::new()
            .name("snappretty-io".into())
            .spawn(move || {
                let _ = init_tx.send(Ok(()));

                while let Ok(cmd) = cmd_rx.recv() {
                    match cmd {
                        Command::Decode(path, resp) => {
                            let _ = resp.send(SourceImage::open(&path));
                        }
                        Command::DecodeDataUrl(url, resp) => {
                            let _ = resp.send(SourceImage::from_data_url(&url));
                        }
                        Command::Encode(surface, format, quality, resp) => {
                            let _ = resp.send(export::encode(&surface, format, quality));
                        }
                        Command::Write(surface, format, quality, path, resp) => {
                            let _ = resp.send(export::write_encoded(&surface, format, quality, &path));
                        }
                        Command::Close(resp) => {
                            let _ = resp.send(Ok(()));
                            break;
                        }
                    }
                }
                log::debug!("io worker stopped");
            })?;

        init_rx
            .await
            .map_err(|e| Error::Other(format!("Worker init canceled: {}", e)))??;

        Ok(Self { cmd_tx })
    }

    fn send(&self, cmd: Command) -> Result<()> {
        self.cmd_tx
            .send(cmd)
            .map_err(|_| Error::Other("io worker has shut down".into()))
    }

    /// Decode an image file.
    pub async fn load_image(&self, path: impl Into<PathBuf>) -> Result<SourceImage> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Decode(path.into(), tx))?;
        rx.await
            .map_err(|e| Error::Other(format!("Decode canceled: {}", e)))?
    }

    /// Decode a `data:image/...;base64,` URL (e.g. a pasted image).
    pub async fn load_data_url(&self, url: &str) -> Result<SourceImage> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::DecodeDataUrl(url.to_string(), tx))?;
        rx.await
            .map_err(|e| Error::Other(format!("Decode canceled: {}", e)))?
    }

    /// Encode a snapshot of `surface` without writing it anywhere.
    pub async fn encode(&self, surface: &Surface, format: ExportFormat, quality: u8) -> Result<Vec<u8>> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Encode(surface.clone(), format, quality, tx))?;
        rx.await
            .map_err(|e| Error::Other(format!("Encode canceled: {}", e)))?
    }

    /// Async counterpart of [`export_to_file`](crate::export_to_file).
    ///
    /// The destination is asked on the calling task; only encoding and the
    /// write happen on the worker. Returns `Ok(false)` when canceled.
    pub async fn export(
        &self,
        surface: &Surface,
        format: ExportFormat,
        quality: u8,
        destination: &dyn SaveDestination,
    ) -> Result<bool> {
        let quality = quality.clamp(export::MIN_EXPORT_QUALITY, export::MAX_EXPORT_QUALITY);
        let Some(path) = destination.choose(&save_request(format)) else {
            log::warn!("export canceled: no destination chosen");
            return Ok(false);
        };

        let (tx, rx) = oneshot::channel();
        self.send(Command::Write(surface.clone(), format, quality, path, tx))?;
        rx.await
            .map_err(|e| Error::Other(format!("Export canceled: {}", e)))??;
        Ok(true)
    }

    /// Shut the worker down. Pending requests sent before this are answered first.
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Close(tx))?;
        rx.await
            .map_err(|e| Error::Other(format!("Close canceled: {}", e)))?
    }
}
