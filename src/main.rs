use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use zoomport::cli::CliArgs;
use zoomport::config::ViewportConfig;
use zoomport::image::{is_image_file, BlurTransform, FileImageSource};
use zoomport::messages::Msg;
use zoomport::runtime::Runtime;
use zoomport::view::{SnapshotSurface, ViewSnapshot};

fn main() -> Result<()> {
    zoomport::tracing::init();

    let args = CliArgs::parse();

    if !args.image.exists() {
        bail!("Image not found: {}", args.image.display());
    }
    if !is_image_file(&args.image) {
        tracing::warn!(
            "{} does not have a known image extension",
            args.image.display()
        );
    }

    let base = match &args.config {
        Some(path) => ViewportConfig::load_from(path)?,
        None => ViewportConfig::load(),
    };
    let config = args.viewport_config(base).map_err(|e| anyhow!(e))?;
    let frame = args.frame().map_err(|e| anyhow!(e))?;

    let source = Arc::new(FileImageSource::new(&args.image));
    let mut runtime = Runtime::new(config, source);
    if let Some(sigma) = args.blur {
        runtime = runtime.with_transform(Arc::new(BlurTransform::new(sigma)));
    }

    // First layout pass starts the load
    runtime.dispatch(Msg::layout(frame));
    if !runtime.wait_while_loading(Duration::from_secs(args.timeout)) {
        bail!(
            "Timed out after {}s loading {}",
            args.timeout,
            args.image.display()
        );
    }

    for _ in 0..args.double_taps {
        runtime.dispatch(Msg::double_tap());
    }

    let mut surface = SnapshotSurface::default();
    let snapshot = surface.capture(runtime.model()).clone();

    if args.json {
        let json = serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
        println!("{}", json);
    } else {
        print_snapshot(&snapshot);
    }

    if runtime.model().load.state().is_failed() {
        bail!("Could not load {}", args.image.display());
    }
    Ok(())
}

fn print_snapshot(snapshot: &ViewSnapshot) {
    println!("state:        {}", snapshot.load_state);
    match snapshot.image {
        Some(size) => println!("image:        {}x{}", size.width, size.height),
        None => println!("image:        -"),
    }
    println!(
        "image frame:  {:.1}x{:.1}",
        snapshot.image_frame.width, snapshot.image_frame.height
    );
    println!(
        "insets:       top/bottom {:.1}, left/right {:.1}",
        snapshot.content_insets.top, snapshot.content_insets.left
    );
    println!(
        "zoom:         {:.2} (range {:.2}..{:.2})",
        snapshot.zoom_scale, snapshot.min_scale, snapshot.max_scale
    );
    println!(
        "gestures:     double-tap {}, single-tap {}, pinch {}",
        on_off(snapshot.gestures.double_tap),
        on_off(snapshot.gestures.single_tap),
        on_off(snapshot.gestures.pinch)
    );
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
