//! Zoom state machine
//!
//! The scale is continuous, but toggling only cares whether the viewport
//! sits at its minimum scale or not.

use crate::geometry::Frame;

/// Minimum zoom scale; the fitted image is shown at 1.0
pub const MIN_SCALE: f64 = 1.0;

/// Tolerance when comparing a scale against the minimum
const SCALE_EPSILON: f64 = 1e-6;

/// Zoom settings fixed at construction (apart from `max_scale`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub max_scale: f64,
    pub zoom_in_initially: bool,
    pub zoom_enabled: bool,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_scale: 2.0,
            zoom_in_initially: false,
            zoom_enabled: true,
        }
    }
}

/// A scale change the presentation surface should apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomChange {
    pub scale: f64,
    pub animated: bool,
}

#[derive(Debug, Clone)]
pub struct ZoomState {
    scale: f64,
    max_scale: f64,
    zoom_in_initially: bool,
    zoom_enabled: bool,
    /// Container frame seen on the previous layout pass
    last_frame: Option<Frame>,
}

impl ZoomState {
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            scale: MIN_SCALE,
            max_scale: config.max_scale.max(MIN_SCALE),
            zoom_in_initially: config.zoom_in_initially,
            zoom_enabled: config.zoom_enabled,
            last_frame: None,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn min_scale(&self) -> f64 {
        MIN_SCALE
    }

    /// Maximum scale the host may zoom to; the minimum when zoom is disabled
    pub fn max_scale(&self) -> f64 {
        if self.zoom_enabled {
            self.max_scale
        } else {
            MIN_SCALE
        }
    }

    pub fn zoom_enabled(&self) -> bool {
        self.zoom_enabled
    }

    pub fn is_at_minimum(&self) -> bool {
        (self.scale - MIN_SCALE).abs() <= SCALE_EPSILON
    }

    /// Update the ceiling, clamping the current scale down if needed
    pub fn set_max_scale(&mut self, max_scale: f64) -> Option<ZoomChange> {
        self.max_scale = max_scale.max(MIN_SCALE);
        if self.scale > self.max_scale() {
            self.scale = self.max_scale();
            return Some(ZoomChange {
                scale: self.scale,
                animated: false,
            });
        }
        None
    }

    /// Record a scale reported by the host (pinch), clamped to the range
    pub fn set_scale(&mut self, scale: f64) -> Option<ZoomChange> {
        if !self.zoom_enabled || !scale.is_finite() {
            return None;
        }
        let clamped = scale.clamp(MIN_SCALE, self.max_scale);
        if (clamped - self.scale).abs() <= SCALE_EPSILON {
            return None;
        }
        self.scale = clamped;
        Some(ZoomChange {
            scale: clamped,
            animated: false,
        })
    }

    /// Double-tap: minimum <-> maximum, animated.
    ///
    /// Does nothing while zoom is disabled or the load has failed.
    pub fn toggle(&mut self, load_failed: bool) -> Option<ZoomChange> {
        if !self.zoom_enabled || load_failed {
            tracing::debug!(
                "toggle ignored (zoom_enabled={}, load_failed={})",
                self.zoom_enabled,
                load_failed
            );
            return None;
        }

        self.scale = if self.is_at_minimum() {
            self.max_scale
        } else {
            MIN_SCALE
        };
        tracing::debug!("toggle: scale -> {}", self.scale);
        Some(ZoomChange {
            scale: self.scale,
            animated: true,
        })
    }

    /// Jump to the maximum scale whenever the container frame changes.
    ///
    /// Only active with `zoom_in_initially`. Fires again on every later
    /// frame change, not just the first one.
    pub fn apply_forced_initial_zoom(&mut self, frame: Frame) -> Option<ZoomChange> {
        let changed = self.last_frame != Some(frame);
        self.last_frame = Some(frame);

        if !(changed && self.zoom_in_initially && self.zoom_enabled) {
            return None;
        }

        self.scale = self.max_scale;
        tracing::debug!("forced initial zoom: scale -> {}", self.scale);
        Some(ZoomChange {
            scale: self.scale,
            animated: false,
        })
    }
}
