use base64::Engine as _;
use snappretty::platform::{CanceledDestination, FixedDestination};
use snappretty::{render_to_surface, Error, ExportFormat, IoWorker, StyleConfig, Surface};

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([12, 34, 56, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[tokio::test]
async fn decodes_files_on_worker() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("shot.png");
    std::fs::write(&path, png_bytes(30, 20))?;

    let worker = IoWorker::new().await?;
    let image = worker.load_image(&path).await?;
    assert_eq!((image.width(), image.height()), (30, 20));

    let missing = worker.load_image(dir.path().join("missing.png")).await;
    assert!(matches!(missing, Err(Error::Io(_))));

    worker.close().await?;
    Ok(())
}

#[tokio::test]
async fn decodes_pasted_data_urls() {
    let worker = IoWorker::new().await.unwrap();
    let url = format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png_bytes(5, 7))
    );
    let image = worker.load_data_url(&url).await.unwrap();
    assert_eq!((image.width(), image.height()), (5, 7));

    let bad = worker.load_data_url("data:text/plain;base64,aGk=").await;
    assert!(matches!(bad, Err(Error::Decode(_))));
    worker.close().await.unwrap();
}

#[tokio::test]
async fn exports_snapshot_while_caller_keeps_surface() {
    let dir = tempfile::tempdir().unwrap();
    let worker = IoWorker::new().await.unwrap();
    let image = worker.load_data_url(&format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png_bytes(16, 16))
    ))
    .await
    .unwrap();
    let mut surface = render_to_surface(&StyleConfig::default(), &image).unwrap();
    let before = surface.fingerprint();

    let path = dir.path().join("pretty.png");
    let saved = worker
        .export(&surface, ExportFormat::Png, 100, &FixedDestination::new(&path))
        .await
        .unwrap();
    assert!(saved);
    assert_eq!(surface.fingerprint(), before);

    let written = image::open(&path).unwrap().to_rgba8();
    assert_eq!(written, surface.to_rgba().unwrap());

    // the caller can keep rendering into its own surface
    snappretty::render(&mut surface, &StyleConfig { padding: 8.0, ..Default::default() }, &image).unwrap();
    assert_ne!(surface.fingerprint(), before);

    assert!(!worker.export(&surface, ExportFormat::Jpg, 80, &CanceledDestination).await.unwrap());
    worker.close().await.unwrap();
}

#[tokio::test]
async fn encode_errors_come_back_through_the_worker() {
    let worker = IoWorker::new().await.unwrap();
    let err = worker.encode(&Surface::new(), ExportFormat::Png, 100).await.unwrap_err();
    assert!(matches!(err, Error::EncodingFailure { .. }));
    worker.close().await.unwrap();
}

#[tokio::test]
async fn requests_after_close_fail() {
    let worker = IoWorker::new().await.unwrap();
    let handle = worker.clone();
    worker.close().await.unwrap();
    let res = handle.encode(&Surface::new(), ExportFormat::Png, 100).await;
    assert!(matches!(res, Err(Error::Other(_))));
}
