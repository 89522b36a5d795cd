//! Image handles and the image source port
//!
//! Images are decoded into shared RGBA pixel buffers so they can move
//! between the owner context and worker threads without copying.

mod source;
pub mod transform;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use ::image::RgbaImage;

use crate::geometry::Size;

pub use source::FileImageSource;
pub use transform::{BlurTransform, ImageTransform};

/// Supported image file extensions (lowercase)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Decoded image shared between the viewport and worker threads
#[derive(Clone)]
pub struct Image {
    pixels: Arc<RgbaImage>,
}

impl Image {
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Solid-colored image, mostly useful for placeholders and tests
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::from_rgba(RgbaImage::from_pixel(width, height, ::image::Rgba(rgba)))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Natural size used by the geometry engine
    pub fn size(&self) -> Size {
        Size::new(self.width() as f64, self.height() as f64)
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    /// True if both handles point at the same pixel buffer
    pub fn ptr_eq(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Handle returned by an [`ImageSource`] for an in-flight load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CancelToken(pub u64);

/// Completion invoked by an [`ImageSource`], possibly on another thread.
/// `None` means the source could not produce an image.
pub type LoadCompletion = Box<dyn FnOnce(Option<Image>) + Send + 'static>;

/// Port for fetching the image shown in a viewport
pub trait ImageSource: Send + Sync {
    /// Start loading. The completion must be called at most once.
    ///
    /// Returns a token when the source supports cancellation.
    fn load(&self, completion: LoadCompletion) -> Option<CancelToken>;

    /// Cancel an in-flight load.
    ///
    /// Sources without cancellation keep the default no-op; the viewport
    /// still discards the late result on its own.
    fn cancel(&self, _token: CancelToken) {}
}

/// Check if a path has a supported image extension
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
