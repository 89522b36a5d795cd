//! Viewport model - the complete state of one zoomable image viewport
//!
//! This module contains all the state types following the Elm Architecture
//! pattern. The model composes the load controller, the zoom state machine
//! and the presentation state; geometry is derived on each layout pass.

pub mod load;
pub mod presentation;
pub mod zoom;

pub use load::{LoadController, LoadState};
pub use presentation::{GestureState, Presentation};
pub use zoom::{ZoomChange, ZoomConfig, ZoomState, MIN_SCALE};

use crate::config::ViewportConfig;
use crate::geometry::{fitted_size, Frame, Size, ViewportGeometry};

/// The complete viewport model
#[derive(Debug)]
pub struct ViewportModel {
    /// Current configuration; `max_scale` and `fit_mode` are re-read per layout pass
    pub config: ViewportConfig,
    pub load: LoadController,
    pub zoom: ZoomState,
    pub presentation: Presentation,
    /// A cosmetic transform runs between fetch and display
    pub transform_enabled: bool,
}

impl ViewportModel {
    pub fn new(config: ViewportConfig) -> Self {
        let config = config.normalized();
        let zoom = ZoomState::new(config.zoom_config());
        Self {
            config,
            load: LoadController::new(),
            zoom,
            presentation: Presentation::default(),
            transform_enabled: false,
        }
    }

    /// Natural size of the resident image, zero when none is loaded
    pub fn image_natural_size(&self) -> Size {
        self.load
            .state()
            .image()
            .or(self.presentation.image.as_ref())
            .map(|image| image.size())
            .unwrap_or(Size::ZERO)
    }

    /// Geometry for the current container, base image size and scale
    pub fn geometry(&self) -> Option<ViewportGeometry> {
        let container = self.presentation.container?;
        Some(ViewportGeometry::from_fitted(
            container.size,
            self.presentation.image_size,
            self.zoom.scale(),
        ))
    }

    pub fn gestures(&self) -> GestureState {
        GestureState::project(self.load.state(), self.zoom.zoom_enabled())
    }

    pub fn loading_indicator_visible(&self) -> bool {
        self.load.state().is_loading()
    }

    /// No image is resident and nothing has torn the viewport down
    pub fn wants_initial_load(&self) -> bool {
        self.presentation.image.is_none()
            && matches!(self.load.state(), LoadState::Empty)
            && !self.load.pending_release()
    }

    /// Layout pass for a new (or unchanged) container frame
    pub fn layout(&mut self, frame: Frame) {
        if let Some(change) = self.zoom.set_max_scale(self.config.max_scale) {
            self.apply_zoom(change);
        }

        self.presentation.container = Some(frame);

        // Leave the base size alone while the user is zoomed in
        if self.zoom.is_at_minimum() {
            self.refit();
        }

        if let Some(change) = self.zoom.apply_forced_initial_zoom(frame) {
            self.apply_zoom(change);
        }

        self.update_insets();
    }

    /// Re-fit and re-center after the displayed image changed
    pub fn relayout_content(&mut self) {
        self.refit();
        self.update_insets();
    }

    /// Mirror a zoom change onto the presentation and re-center
    pub fn apply_zoom(&mut self, change: ZoomChange) {
        self.presentation.zoom_scale = change.scale;
        self.presentation.zoom_animated = change.animated;
        self.update_insets();
    }

    fn refit(&mut self) {
        let Some(container) = self.presentation.container else {
            return;
        };
        self.presentation.image_size = fitted_size(
            container.size,
            self.image_natural_size(),
            self.config.fit_mode,
        );
    }

    fn update_insets(&mut self) {
        let Some(geometry) = self.geometry() else {
            return;
        };
        self.presentation.content_insets = geometry.centering_insets;
        self.presentation.is_full_screen = geometry.is_full_screen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Insets;
    use crate::image::Image;

    #[test]
    fn test_layout_without_image_fills_container() {
        let mut model = ViewportModel::new(ViewportConfig::default());
        model.layout(Frame::sized(300.0, 600.0));
        assert_eq!(model.presentation.image_size, Size::new(300.0, 600.0));
        assert_eq!(model.presentation.content_insets, Insets::ZERO);
        assert!(model.presentation.is_full_screen);
    }

    #[test]
    fn test_layout_fits_and_centers_resident_image() {
        let mut model = ViewportModel::new(ViewportConfig::default());
        model.presentation.image = Some(Image::filled(1200, 600, [0; 4]));
        model.layout(Frame::sized(300.0, 600.0));
        assert_eq!(model.presentation.image_size, Size::new(300.0, 150.0));
        assert_eq!(
            model.presentation.content_insets,
            Insets::symmetric(225.0, 0.0)
        );
        assert!(!model.presentation.is_full_screen);
    }

    #[test]
    fn test_layout_keeps_base_size_while_zoomed() {
        let mut model = ViewportModel::new(ViewportConfig::default());
        model.presentation.image = Some(Image::filled(1200, 600, [0; 4]));
        model.layout(Frame::sized(300.0, 600.0));

        let change = model.zoom.toggle(false).unwrap();
        model.apply_zoom(change);

        model.layout(Frame::sized(400.0, 800.0));
        assert_eq!(model.presentation.image_size, Size::new(300.0, 150.0));
        // 600x300 content in a 400x800 container
        assert_eq!(
            model.presentation.content_insets,
            Insets::symmetric(250.0, 0.0)
        );
    }

    #[test]
    fn test_layout_reapplies_configured_max_scale() {
        let mut model = ViewportModel::new(ViewportConfig {
            max_scale: 4.0,
            ..ViewportConfig::default()
        });
        let change = model.zoom.toggle(false).unwrap();
        model.apply_zoom(change);

        model.config.max_scale = 3.0;
        model.layout(Frame::sized(100.0, 100.0));
        assert_eq!(model.zoom.scale(), 3.0);
        assert_eq!(model.presentation.zoom_scale, 3.0);
    }

    #[test]
    fn test_wants_initial_load() {
        let mut model = ViewportModel::new(ViewportConfig::default());
        assert!(model.wants_initial_load());
        model.load.release();
        assert!(!model.wants_initial_load());
    }
}
