//! Cosmetic post-load transforms
//!
//! A transform runs on a worker thread after a successful fetch. Returning
//! `None` means the transform produced nothing; the viewport then shows the
//! untransformed image.

use super::Image;

/// Optional post-load image filter
pub trait ImageTransform: Send + Sync {
    fn apply(&self, image: &Image) -> Option<Image>;
}

/// Gaussian blur, e.g. for preview-only content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurTransform {
    pub sigma: f32,
}

impl BlurTransform {
    pub fn new(sigma: f32) -> Self {
        Self { sigma }
    }
}

impl ImageTransform for BlurTransform {
    fn apply(&self, image: &Image) -> Option<Image> {
        if !(self.sigma > 0.0) || image.width() == 0 || image.height() == 0 {
            return None;
        }
        let blurred = ::image::imageops::blur(image.as_rgba(), self.sigma);
        Some(Image::from_rgba(blurred))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_keeps_dimensions() {
        let image = Image::filled(16, 8, [200, 100, 50, 255]);
        let blurred = BlurTransform::new(2.0).apply(&image).unwrap();
        assert_eq!((blurred.width(), blurred.height()), (16, 8));
        assert!(!blurred.ptr_eq(&image));
    }

    #[test]
    fn test_blur_smooths_hard_edge() {
        let mut pixels = ::image::RgbaImage::from_pixel(20, 1, ::image::Rgba([0, 0, 0, 255]));
        for x in 10..20 {
            pixels.put_pixel(x, 0, ::image::Rgba([255, 255, 255, 255]));
        }
        let blurred = BlurTransform::new(2.0)
            .apply(&Image::from_rgba(pixels))
            .unwrap();
        let edge = blurred.as_rgba().get_pixel(10, 0)[0];
        assert!(edge > 0 && edge < 255, "edge pixel should be mixed, got {}", edge);
    }

    #[test]
    fn test_non_positive_sigma_yields_nothing() {
        let image = Image::filled(4, 4, [0; 4]);
        assert!(BlurTransform::new(0.0).apply(&image).is_none());
        assert!(BlurTransform::new(-1.0).apply(&image).is_none());
    }

    #[test]
    fn test_empty_image_yields_nothing() {
        let image = Image::filled(0, 0, [0; 4]);
        assert!(BlurTransform::new(1.0).apply(&image).is_none());
    }
}
