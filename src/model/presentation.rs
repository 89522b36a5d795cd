//! What the host should be showing
//!
//! `Presentation` is the content the coordinator pushes to the surface.
//! Gesture enablement and the loading indicator are not stored here; they
//! are projected from the load state on demand.

use serde::Serialize;

use crate::geometry::{Frame, Insets, Size};
use crate::image::Image;

use super::load::LoadState;

/// Displayed content, frame, insets and zoom scale
#[derive(Debug, Clone)]
pub struct Presentation {
    /// Image on screen, if any
    pub image: Option<Image>,
    /// Last container frame reported by the host
    pub container: Option<Frame>,
    /// Image frame at minimum zoom
    pub image_size: Size,
    pub content_insets: Insets,
    pub zoom_scale: f64,
    /// Whether the last scale change should animate
    pub zoom_animated: bool,
    pub is_full_screen: bool,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            image: None,
            container: None,
            image_size: Size::ZERO,
            content_insets: Insets::ZERO,
            zoom_scale: super::zoom::MIN_SCALE,
            zoom_animated: false,
            is_full_screen: false,
        }
    }
}

/// Which gesture recognizers the host should enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GestureState {
    /// Double-tap zoom toggle
    pub double_tap: bool,
    /// Single-tap retry
    pub single_tap: bool,
    /// Pinch zoom
    pub pinch: bool,
}

impl GestureState {
    /// Derive gestures from the load state.
    ///
    /// Zooming is off while failed (nothing to zoom into) and retry is on
    /// only while failed.
    pub fn project(state: &LoadState, zoom_enabled: bool) -> Self {
        let failed = state.is_failed();
        Self {
            double_tap: zoom_enabled && !failed,
            single_tap: failed,
            pinch: zoom_enabled && !failed,
        }
    }
}
