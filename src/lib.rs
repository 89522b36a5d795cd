//! zoomport - zoomable single-image viewport
//!
//! This crate provides the coordination logic for one lazily-loaded,
//! zoomable image inside a slideshow, implementing the Elm Architecture
//! pattern: host events become messages, `update` mutates the model and
//! returns commands, and the runtime executes those commands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod geometry;
pub mod image;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ViewportConfig;
pub use messages::Msg;
pub use model::ViewportModel;
pub use runtime::Runtime;
