use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use snappretty::platform::{
    CanceledDestination, ClipboardSink, FixedDestination, HostPlatform, SaveDestination,
};
use snappretty::presets::{find_gradient, find_size};
use snappretty::{
    copy_to_clipboard, render, BackgroundKind, DeviceFrame, ExportFormat, IoWorker, Rgb, StyleConfig, Surface,
    GRADIENT_PRESETS, SIZE_PRESETS,
};

#[derive(Parser, Debug)]
#[command(name = "snappretty", about = "Put a screenshot on a backdrop with a shadow and window chrome")]
struct Args {
    /// Screenshot to beautify (PNG or JPEG)
    #[arg(required_unless_present = "list_presets")]
    input: Option<PathBuf>,

    /// Where to write the result; without it nothing is saved
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON style file; flags below override its values
    #[arg(long)]
    style: Option<PathBuf>,

    /// `solid` or `gradient`
    #[arg(long)]
    background: Option<BackgroundKind>,

    /// Solid background color, e.g. `#667eea`
    #[arg(long)]
    color: Option<Rgb>,

    /// Gradient preset index or name
    #[arg(long)]
    gradient: Option<String>,

    #[arg(long)]
    padding: Option<f32>,

    #[arg(long)]
    radius: Option<f32>,

    #[arg(long)]
    shadow_blur: Option<f32>,

    #[arg(long, allow_negative_numbers = true)]
    shadow_offset_x: Option<f32>,

    #[arg(long, allow_negative_numbers = true)]
    shadow_offset_y: Option<f32>,

    #[arg(long)]
    shadow_color: Option<Rgb>,

    #[arg(long)]
    shadow_opacity: Option<f32>,

    /// `none`, `browser`, `macos` or `windows`
    #[arg(long)]
    frame: Option<DeviceFrame>,

    /// Output size preset index or name (`auto`, `Instagram Square`, ...)
    #[arg(long)]
    size: Option<String>,

    /// `png` or `jpg`; defaults to the output file's extension
    #[arg(long)]
    format: Option<ExportFormat>,

    /// JPEG quality, 10 to 100
    #[arg(long, default_value_t = 92)]
    quality: u8,

    /// Copy the result to the clipboard
    #[arg(long)]
    copy: bool,

    /// Print the preset tables and exit
    #[arg(long)]
    list_presets: bool,
}

struct CliPlatform {
    output: Option<PathBuf>,
}

impl HostPlatform for CliPlatform {
    fn save_destination(&self) -> Box<dyn SaveDestination> {
        match &self.output {
            Some(path) => Box::new(FixedDestination::new(path.clone())),
            None => Box::new(CanceledDestination),
        }
    }

    fn clipboard(&self) -> Box<dyn ClipboardSink> {
        #[cfg(feature = "clipboard")]
        {
            Box::new(snappretty::platform::SystemClipboard::new())
        }
        #[cfg(not(feature = "clipboard"))]
        {
            Box::new(snappretty::platform::UnavailableClipboard)
        }
    }
}

fn list_presets() {
    println!("Gradients:");
    for (i, p) in GRADIENT_PRESETS.iter().enumerate() {
        println!("  {:>2}  {:<14} {}", i, p.name, p.css());
    }
    println!("Sizes:");
    for (i, p) in SIZE_PRESETS.iter().enumerate() {
        if p.is_auto() {
            println!("  {:>2}  {}", i, p.name);
        } else {
            println!("  {:>2}  {:<18} {}x{}", i, p.name, p.width, p.height);
        }
    }
    println!("Frames:");
    for frame in DeviceFrame::ALL {
        println!("      {}", frame.name());
    }
}

fn build_style(args: &Args) -> Result<StyleConfig> {
    let mut style = match &args.style {
        Some(path) => StyleConfig::load(path).with_context(|| format!("loading style {}", path.display()))?,
        None => StyleConfig::default(),
    };

    if let Some(v) = args.background {
        style.background = v;
    }
    if let Some(v) = args.color {
        style.solid_color = v;
        if args.background.is_none() {
            style.background = BackgroundKind::Solid;
        }
    }
    if let Some(sel) = &args.gradient {
        let Some(i) = find_gradient(sel) else {
            bail!("unknown gradient preset '{}'", sel);
        };
        style.gradient_preset = i;
    }
    if let Some(v) = args.padding {
        style.padding = v;
    }
    if let Some(v) = args.radius {
        style.corner_radius = v;
    }
    if let Some(v) = args.shadow_blur {
        style.shadow.blur = v;
    }
    if let Some(v) = args.shadow_offset_x {
        style.shadow.offset_x = v;
    }
    if let Some(v) = args.shadow_offset_y {
        style.shadow.offset_y = v;
    }
    if let Some(v) = args.shadow_color {
        style.shadow.color = v;
    }
    if let Some(v) = args.shadow_opacity {
        style.shadow.opacity = v;
    }
    if let Some(v) = args.frame {
        style.device_frame = v;
    }
    if let Some(sel) = &args.size {
        let Some(i) = find_size(sel) else {
            bail!("unknown size preset '{}'", sel);
        };
        style.output_preset = i;
    }
    Ok(style)
}

fn output_format(args: &Args) -> ExportFormat {
    if let Some(f) = args.format {
        return f;
    }
    args.output
        .as_deref()
        .and_then(Path::extension)
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ext.parse().ok())
        .unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_presets {
        list_presets();
        return Ok(());
    }
    let Some(input) = args.input.clone() else {
        bail!("no input image given");
    };

    let style = build_style(&args)?;
    let worker = IoWorker::new().await?;
    let image = worker
        .load_image(&input)
        .await
        .with_context(|| format!("reading {}", input.display()))?;

    let mut surface = Surface::new();
    render(&mut surface, &style, &image)?;
    log::info!("rendered {}x{}", surface.width(), surface.height());

    let platform = CliPlatform {
        output: args.output.clone(),
    };
    if args.copy {
        copy_to_clipboard(&surface, platform.clipboard().as_mut()).context("copying to clipboard")?;
        println!("Copied {}x{} image to clipboard", surface.width(), surface.height());
    }

    let format = output_format(&args);
    let destination = platform.save_destination();
    if worker.export(&surface, format, args.quality, destination.as_ref()).await? {
        if let Some(path) = &args.output {
            println!("Saved {}", path.display());
        }
    } else if !args.copy {
        println!("Nothing saved (pass --output to write a file)");
    }

    worker.close().await?;
    Ok(())
}
