//! Presentation surface
//!
//! The host implements [`PresentationSurface`] on top of its toolkit
//! (scroll view, image view, activity indicator, gesture recognizers).
//! [`present`] pushes the model's presentation state onto it after an
//! update asked for a redraw.

use serde::Serialize;

use crate::geometry::{Insets, Size};
use crate::image::Image;
use crate::model::{GestureState, ViewportModel};

/// Host-side rendering target for one viewport
pub trait PresentationSurface {
    /// Show `image`, or clear the displayed content
    fn set_image(&mut self, image: Option<&Image>);

    /// Image frame at minimum zoom
    fn set_image_frame(&mut self, size: Size);

    fn set_content_insets(&mut self, insets: Insets);

    /// Allowed zoom range; `min == max` disables zooming
    fn set_zoom_range(&mut self, min: f64, max: f64);

    fn set_zoom_scale(&mut self, scale: f64, animated: bool);

    fn set_loading_indicator_visible(&mut self, visible: bool);

    fn set_gestures(&mut self, gestures: GestureState);
}

/// Push the current presentation state to `surface`
pub fn present(model: &ViewportModel, surface: &mut impl PresentationSurface) {
    let presentation = &model.presentation;

    surface.set_image(presentation.image.as_ref());
    surface.set_zoom_range(model.zoom.min_scale(), model.zoom.max_scale());
    surface.set_image_frame(presentation.image_size);
    surface.set_zoom_scale(presentation.zoom_scale, presentation.zoom_animated);
    surface.set_content_insets(presentation.content_insets);
    surface.set_loading_indicator_visible(model.loading_indicator_visible());
    surface.set_gestures(model.gestures());
}

/// Serializable record of what a surface was told to show
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub load_state: &'static str,
    /// Natural size of the displayed image
    pub image: Option<Size>,
    pub image_frame: Size,
    pub content_insets: Insets,
    pub min_scale: f64,
    pub max_scale: f64,
    pub zoom_scale: f64,
    pub zoom_animated: bool,
    pub loading_indicator: bool,
    pub gestures: GestureState,
}

/// Surface that records everything it is told, for headless runs and tests
#[derive(Debug, Clone)]
pub struct SnapshotSurface {
    pub snapshot: ViewSnapshot,
    /// Number of `set_image` calls that changed the displayed image
    pub image_changes: usize,
    displayed: Option<Image>,
}

impl Default for SnapshotSurface {
    fn default() -> Self {
        Self {
            snapshot: ViewSnapshot {
                load_state: "empty",
                image: None,
                image_frame: Size::ZERO,
                content_insets: Insets::ZERO,
                min_scale: crate::model::MIN_SCALE,
                max_scale: crate::model::MIN_SCALE,
                zoom_scale: crate::model::MIN_SCALE,
                zoom_animated: false,
                loading_indicator: false,
                gestures: GestureState {
                    double_tap: false,
                    single_tap: false,
                    pinch: false,
                },
            },
            image_changes: 0,
            displayed: None,
        }
    }
}

impl SnapshotSurface {
    /// Present `model` and return the resulting snapshot
    pub fn capture(&mut self, model: &ViewportModel) -> &ViewSnapshot {
        present(model, self);
        self.snapshot.load_state = model.load.state().label();
        &self.snapshot
    }

    pub fn displayed(&self) -> Option<&Image> {
        self.displayed.as_ref()
    }
}

impl PresentationSurface for SnapshotSurface {
    fn set_image(&mut self, image: Option<&Image>) {
        let same = match (&self.displayed, image) {
            (Some(current), Some(next)) => current.ptr_eq(next),
            (None, None) => true,
            _ => false,
        };
        if !same {
            self.image_changes += 1;
            self.displayed = image.cloned();
        }
        self.snapshot.image = image.map(|image| image.size());
    }

    fn set_image_frame(&mut self, size: Size) {
        self.snapshot.image_frame = size;
    }

    fn set_content_insets(&mut self, insets: Insets) {
        self.snapshot.content_insets = insets;
    }

    fn set_zoom_range(&mut self, min: f64, max: f64) {
        self.snapshot.min_scale = min;
        self.snapshot.max_scale = max;
    }

    fn set_zoom_scale(&mut self, scale: f64, animated: bool) {
        self.snapshot.zoom_scale = scale;
        self.snapshot.zoom_animated = animated;
    }

    fn set_loading_indicator_visible(&mut self, visible: bool) {
        self.snapshot.loading_indicator = visible;
    }

    fn set_gestures(&mut self, gestures: GestureState) {
        self.snapshot.gestures = gestures;
    }
}
