//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod load;
mod viewport;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::ViewportModel;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use load::update_load;
pub use viewport::update_viewport;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut ViewportModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut ViewportModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Viewport(m) => update_viewport(model, m),
        Msg::Load(m) => update_load(model, m),
    }
}

/// Update with a debug span and a before/after load-state log line
#[cfg(debug_assertions)]
fn update_traced(model: &mut ViewportModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = model.load.state().label();
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = model.load.state().label();
    if before != after {
        debug!(target: "load", "state changed: {} -> {}", before, after);
    }

    result
}

/// Get a display name for a message type
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Viewport(m) => format!("Viewport::{:?}", m),
        Msg::Load(m) => format!("Load::{:?}", m),
    }
}
