//! Command-line argument parsing for the headless viewer
//!
//! Supports:
//! - Container size
//! - Zoom settings overriding the config file
//! - Optional blur transform
//! - Double taps applied after loading

use clap::Parser;
use std::path::PathBuf;

use crate::config::ViewportConfig;
use crate::geometry::{FitMode, Frame};

/// Load an image into a viewport and print what it would show
#[derive(Parser, Debug)]
#[command(
    name = "zoomport",
    version,
    about = "Load an image into a zoomable viewport and print its layout"
)]
pub struct CliArgs {
    /// Image file to load
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Container width
    #[arg(long, default_value_t = 375.0)]
    pub width: f64,

    /// Container height
    #[arg(long, default_value_t = 667.0)]
    pub height: f64,

    /// Config file (defaults to ~/.config/zoomport/config.yaml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Maximum zoom scale
    #[arg(long, value_name = "SCALE")]
    pub max_scale: Option<f64>,

    /// Zoom to the maximum scale on the first layout pass
    #[arg(long)]
    pub zoom_in_initially: bool,

    /// Disable zooming
    #[arg(long)]
    pub no_zoom: bool,

    /// Stretch the image to the container instead of aspect-fitting it
    #[arg(long)]
    pub fill: bool,

    /// Blur the image after loading
    #[arg(long, value_name = "SIGMA")]
    pub blur: Option<f32>,

    /// Number of double taps to apply once loaded
    #[arg(long, default_value_t = 0)]
    pub double_taps: u32,

    /// Seconds to wait for the image before giving up
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Apply command-line overrides on top of `base`
    pub fn viewport_config(&self, base: ViewportConfig) -> Result<ViewportConfig, String> {
        let mut config = base;
        if let Some(max_scale) = self.max_scale {
            if !max_scale.is_finite() || max_scale < 1.0 {
                return Err(format!("--max-scale must be at least 1.0, got {}", max_scale));
            }
            config.max_scale = max_scale;
        }
        if self.zoom_in_initially {
            config.zoom_in_initially = true;
        }
        if self.no_zoom {
            config.zoom_enabled = false;
        }
        if self.fill {
            config.fit_mode = FitMode::Fill;
        }
        Ok(config)
    }

    /// Container frame for the layout pass
    pub fn frame(&self) -> Result<Frame, String> {
        if !(self.width >= 0.0 && self.height >= 0.0) {
            return Err(format!(
                "Container size must be non-negative, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(Frame::sized(self.width, self.height))
    }
}
