//! Tests for the geometry engine across many container/image combinations

mod common;

use common::approx_eq;
use zoomport::geometry::{
    centering_insets, fitted_size, is_full_screen, FitMode, Insets, Size, ViewportGeometry,
};

const CONTAINERS: &[(f64, f64)] = &[
    (300.0, 600.0),
    (600.0, 300.0),
    (375.0, 667.0),
    (1024.0, 768.0),
    (1.0, 1.0),
    (1920.0, 1080.0),
    (123.4, 56.7),
];

const IMAGES: &[(f64, f64)] = &[
    (1200.0, 600.0),
    (600.0, 1200.0),
    (1.0, 1.0),
    (4000.0, 3000.0),
    (10.0, 2000.0),
    (2000.0, 10.0),
    (333.0, 333.0),
];

// ============================================================================
// fitted_size
// ============================================================================

#[test]
fn test_aspect_fit_stays_inside_container() {
    for &(cw, ch) in CONTAINERS {
        for &(iw, ih) in IMAGES {
            let container = Size::new(cw, ch);
            let fitted = fitted_size(container, Size::new(iw, ih), FitMode::AspectFit);
            assert!(
                fitted.width <= cw + 1e-9 && fitted.height <= ch + 1e-9,
                "{}x{} image fitted into {}x{} gave {:?}",
                iw,
                ih,
                cw,
                ch,
                fitted
            );
        }
    }
}

#[test]
fn test_aspect_fit_preserves_ratio_and_touches_one_axis() {
    for &(cw, ch) in CONTAINERS {
        for &(iw, ih) in IMAGES {
            let fitted = fitted_size(Size::new(cw, ch), Size::new(iw, ih), FitMode::AspectFit);
            let expected_ratio = iw / ih;
            let ratio = fitted.width / fitted.height;
            assert!(
                (ratio - expected_ratio).abs() / expected_ratio < 1e-9,
                "ratio {} != {} for {}x{} in {}x{}",
                ratio,
                expected_ratio,
                iw,
                ih,
                cw,
                ch
            );
            assert!(approx_eq(fitted.width, cw) || approx_eq(fitted.height, ch));
        }
    }
}

#[test]
fn test_fill_ignores_image() {
    for &(cw, ch) in CONTAINERS {
        for &(iw, ih) in IMAGES {
            let container = Size::new(cw, ch);
            assert_eq!(
                fitted_size(container, Size::new(iw, ih), FitMode::Fill),
                container
            );
        }
    }
}

#[test]
fn test_degenerate_image_returns_container() {
    let container = Size::new(300.0, 600.0);
    for image in [
        Size::ZERO,
        Size::new(0.0, 10.0),
        Size::new(10.0, 0.0),
        Size::new(f64::NAN, 10.0),
    ] {
        assert_eq!(fitted_size(container, image, FitMode::AspectFit), container);
    }
}

// ============================================================================
// centering_insets / is_full_screen
// ============================================================================

#[test]
fn test_insets_never_negative() {
    for &(cw, ch) in CONTAINERS {
        for &(iw, ih) in IMAGES {
            let insets = centering_insets(Size::new(cw, ch), Size::new(iw, ih));
            assert!(insets.top >= 0.0 && insets.left >= 0.0);
            assert_eq!(insets.top, insets.bottom);
            assert_eq!(insets.left, insets.right);
        }
    }
}

#[test]
fn test_full_screen_forces_zero_insets_at_any_scale() {
    for &(cw, ch) in CONTAINERS {
        for &(iw, ih) in IMAGES {
            for scale in [1.0, 1.5, 2.0, 4.0, 10.0] {
                let container = Size::new(cw, ch);
                let geometry =
                    ViewportGeometry::compute(container, Size::new(iw, ih), scale, FitMode::AspectFit);
                assert_eq!(
                    geometry.is_full_screen,
                    is_full_screen(geometry.content_size, container)
                );
                if geometry.is_full_screen {
                    assert_eq!(geometry.centering_insets, Insets::ZERO);
                } else {
                    assert!(geometry.centering_insets.top >= 0.0);
                    assert!(geometry.centering_insets.left >= 0.0);
                }
            }
        }
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_wide_image_in_portrait_container() {
    let geometry = ViewportGeometry::compute(
        Size::new(300.0, 600.0),
        Size::new(1200.0, 600.0),
        1.0,
        FitMode::AspectFit,
    );
    assert_eq!(geometry.fitted_image_size, Size::new(300.0, 150.0));
    assert_eq!(geometry.centering_insets.top, 225.0);
    assert_eq!(geometry.centering_insets.bottom, 225.0);
    assert_eq!(geometry.centering_insets.left, 0.0);
    assert_eq!(geometry.centering_insets.right, 0.0);
    assert!(!geometry.is_full_screen);
}

#[test]
fn test_fill_mode_is_always_full_screen() {
    let geometry = ViewportGeometry::compute(
        Size::new(300.0, 600.0),
        Size::new(1200.0, 600.0),
        1.0,
        FitMode::Fill,
    );
    assert!(geometry.is_full_screen);
    assert_eq!(geometry.centering_insets, Insets::ZERO);
}
