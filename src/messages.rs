//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::config::ViewportConfig;
use crate::geometry::Frame;
use crate::image::Image;

/// Events reported by the host on the owner context
#[derive(Debug, Clone)]
pub enum ViewportMsg {
    /// Start loading unless an image is present or a load is running
    LoadImage,
    /// Tear down: cancel the fetch and clear displayed content
    ReleaseImage,
    /// Reload after a failure
    RetryLoadImage,
    /// Zoom-toggle gesture
    DoubleTap,
    /// Retry gesture (only acts while the load has failed)
    SingleTap,
    /// Container resized or moved
    LayoutChanged(Frame),
    /// Host-driven zoom (pinch) settled at a new scale
    ZoomScaleChanged(f64),
    /// New configuration; the max scale applies from the next layout pass
    ConfigChanged(ViewportConfig),
}

/// Results marshaled back from worker threads
#[derive(Debug, Clone)]
pub enum LoadMsg {
    /// The source finished; `None` means no image
    FetchCompleted {
        generation: u64,
        image: Option<Image>,
    },
    /// The cosmetic transform finished; `None` means it produced nothing
    TransformCompleted {
        generation: u64,
        original: Image,
        transformed: Option<Image>,
    },
}

/// Top-level message
#[derive(Debug, Clone)]
pub enum Msg {
    Viewport(ViewportMsg),
    Load(LoadMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn load_image() -> Self {
        Msg::Viewport(ViewportMsg::LoadImage)
    }

    pub fn release_image() -> Self {
        Msg::Viewport(ViewportMsg::ReleaseImage)
    }

    pub fn retry_load_image() -> Self {
        Msg::Viewport(ViewportMsg::RetryLoadImage)
    }

    pub fn double_tap() -> Self {
        Msg::Viewport(ViewportMsg::DoubleTap)
    }

    pub fn single_tap() -> Self {
        Msg::Viewport(ViewportMsg::SingleTap)
    }

    /// Create a layout message for a container at the origin
    pub fn resize(width: f64, height: f64) -> Self {
        Msg::Viewport(ViewportMsg::LayoutChanged(Frame::sized(width, height)))
    }

    pub fn layout(frame: Frame) -> Self {
        Msg::Viewport(ViewportMsg::LayoutChanged(frame))
    }

    pub fn fetch_completed(generation: u64, image: Option<Image>) -> Self {
        Msg::Load(LoadMsg::FetchCompleted { generation, image })
    }
}
