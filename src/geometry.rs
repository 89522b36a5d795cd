//! Viewport geometry
//!
//! Pure functions that fit an image into a container, center the scaled
//! content and detect when the content covers the whole container.
//! Nothing here holds state; the coordinator recomputes everything on
//! each layout pass.

use serde::{Deserialize, Serialize};

/// Width and height in container (point) units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True if either axis is zero, negative or not a number
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Width divided by height, or None for degenerate sizes
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.is_degenerate() {
            None
        } else {
            Some(self.width / self.height)
        }
    }

    /// Uniformly scale both axes
    pub fn scaled(&self, scale: f64) -> Size {
        Size::new(self.width * scale, self.height * scale)
    }
}

/// Position of a container inside its parent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Container frame as reported by the host on a layout pass
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub origin: Point,
    pub size: Size,
}

impl Frame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Frame at the origin with the given size
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

/// Content insets, always symmetric per axis
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Build insets with `vertical` on top/bottom and `horizontal` on left/right
    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            left: horizontal,
            bottom: vertical,
            right: horizontal,
        }
    }
}

/// How the image is fitted into the container at minimum zoom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// Preserve aspect ratio, touch the container on one axis
    #[default]
    AspectFit,
    /// Stretch to the container on both axes
    Fill,
}

/// Fit an image of natural size `image` into `container`.
///
/// Unknown or zero image sizes (and zero containers) fall back to the
/// container size.
pub fn fitted_size(container: Size, image: Size, fit_mode: FitMode) -> Size {
    if fit_mode == FitMode::Fill {
        return container;
    }

    let (Some(image_ratio), Some(container_ratio)) =
        (image.aspect_ratio(), container.aspect_ratio())
    else {
        return container;
    };

    if image_ratio > container_ratio {
        Size::new(container.width, container.width / image_ratio)
    } else {
        Size::new(container.height * image_ratio, container.height)
    }
}

/// Insets that center `content` inside `container`, never negative
pub fn centering_insets(container: Size, content: Size) -> Insets {
    let vertical = ((container.height - content.height) / 2.0).max(0.0);
    let horizontal = ((container.width - content.width) / 2.0).max(0.0);
    Insets::symmetric(vertical, horizontal)
}

/// Content covers the container on both axes
pub fn is_full_screen(content: Size, container: Size) -> bool {
    content.width >= container.width && content.height >= container.height
}

/// Geometry derived from container, image and zoom scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportGeometry {
    /// Image size at minimum zoom
    pub fitted_image_size: Size,
    /// Fitted size multiplied by the current zoom scale
    pub content_size: Size,
    pub centering_insets: Insets,
    pub is_full_screen: bool,
}

impl ViewportGeometry {
    /// Derive geometry for the current layout pass
    pub fn compute(container: Size, image: Size, zoom_scale: f64, fit_mode: FitMode) -> Self {
        let fitted = fitted_size(container, image, fit_mode);
        Self::from_fitted(container, fitted, zoom_scale)
    }

    /// Derive geometry from an already-fitted base size.
    ///
    /// Used while the user is zoomed in: the base size is kept from the
    /// last unzoomed layout and only the insets follow the container.
    pub fn from_fitted(container: Size, fitted: Size, zoom_scale: f64) -> Self {
        let content_size = fitted.scaled(zoom_scale);
        let is_full_screen = is_full_screen(content_size, container);
        let centering_insets = if is_full_screen {
            Insets::ZERO
        } else {
            centering_insets(container, content_size)
        };

        Self {
            fitted_image_size: fitted,
            content_size,
            centering_insets,
            is_full_screen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_fill_returns_container() {
        let container = Size::new(300.0, 600.0);
        let fitted = fitted_size(container, Size::new(1200.0, 600.0), FitMode::Fill);
        assert_eq!(fitted, container);
    }

    #[test]
    fn test_wide_image_is_width_constrained() {
        let fitted = fitted_size(
            Size::new(300.0, 600.0),
            Size::new(1200.0, 600.0),
            FitMode::AspectFit,
        );
        assert!((fitted.width - 300.0).abs() < EPS);
        assert!((fitted.height - 150.0).abs() < EPS);
    }

    #[test]
    fn test_tall_image_is_height_constrained() {
        let fitted = fitted_size(
            Size::new(800.0, 600.0),
            Size::new(100.0, 2000.0),
            FitMode::AspectFit,
        );
        assert!((fitted.height - 600.0).abs() < EPS);
        assert!((fitted.width - 30.0).abs() < EPS);
    }

    #[test]
    fn test_equal_ratio_fills_container() {
        let fitted = fitted_size(
            Size::new(400.0, 300.0),
            Size::new(800.0, 600.0),
            FitMode::AspectFit,
        );
        assert!((fitted.width - 400.0).abs() < EPS);
        assert!((fitted.height - 300.0).abs() < EPS);
    }

    #[test]
    fn test_unknown_image_size_falls_back_to_container() {
        let container = Size::new(320.0, 480.0);
        assert_eq!(
            fitted_size(container, Size::ZERO, FitMode::AspectFit),
            container
        );
        assert_eq!(
            fitted_size(container, Size::new(0.0, 100.0), FitMode::AspectFit),
            container
        );
    }

    #[test]
    fn test_zero_container_does_not_produce_nan() {
        let fitted = fitted_size(Size::ZERO, Size::new(100.0, 50.0), FitMode::AspectFit);
        assert_eq!(fitted, Size::ZERO);
    }

    #[test]
    fn test_centering_insets_are_symmetric_and_non_negative() {
        let insets = centering_insets(Size::new(300.0, 600.0), Size::new(300.0, 150.0));
        assert_eq!(insets, Insets::symmetric(225.0, 0.0));

        let insets = centering_insets(Size::new(100.0, 100.0), Size::new(400.0, 50.0));
        assert_eq!(insets.left, 0.0);
        assert_eq!(insets.right, 0.0);
        assert_eq!(insets.top, 25.0);
    }

    #[test]
    fn test_full_screen_requires_both_axes() {
        let container = Size::new(300.0, 600.0);
        assert!(is_full_screen(Size::new(300.0, 600.0), container));
        assert!(is_full_screen(Size::new(600.0, 1200.0), container));
        assert!(!is_full_screen(Size::new(600.0, 300.0), container));
    }

    #[test]
    fn test_geometry_forces_zero_insets_when_full_screen() {
        // 300x150 at 4x covers 1200x600, larger than the 300x600 container
        let geometry = ViewportGeometry::compute(
            Size::new(300.0, 600.0),
            Size::new(1200.0, 600.0),
            4.0,
            FitMode::AspectFit,
        );
        assert!(geometry.is_full_screen);
        assert_eq!(geometry.centering_insets, Insets::ZERO);
    }

    #[test]
    fn test_geometry_scales_content_by_zoom() {
        let geometry = ViewportGeometry::compute(
            Size::new(300.0, 600.0),
            Size::new(1200.0, 600.0),
            2.0,
            FitMode::AspectFit,
        );
        assert_eq!(geometry.fitted_image_size, Size::new(300.0, 150.0));
        assert_eq!(geometry.content_size, Size::new(600.0, 300.0));
        assert!(!geometry.is_full_screen);
        assert_eq!(geometry.centering_insets, Insets::symmetric(150.0, 0.0));
    }
}
