// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Element-zoom units per pixel of surface width.
///
/// The default focus-zoom factor is the rendered diagram's pixel width times
/// this constant, floored at `1.0`: wide diagrams need a deeper zoom before a
/// single node is readable, while small diagrams should not be magnified past
/// usefulness. The value was tuned empirically against generated dependency
/// graphs of widely varying size.
pub const ELEMENT_ZOOM_PER_PIXEL: f64 = 0.0008;

/// Configuration for a [`ViewController`](crate::ViewController).
///
/// All fields have working defaults; hosts typically override only the zoom
/// step sizes. Factors are expressed as "per step" multipliers greater than
/// `1.0`; the controller inverts them for zooming in.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlOptions {
    /// Discrete zoom step for button/keyboard zoom.
    pub zoom_factor: f64,
    /// Focus-zoom step for zoom-to-element.
    ///
    /// `None` derives the factor from the surface pixel width via
    /// [`ELEMENT_ZOOM_PER_PIXEL`]. Explicit values are still floored at
    /// `1.0`: focusing never zooms out.
    pub zoom_element_factor: Option<f64>,
    /// Fine wheel-zoom step for hosts with a notched wheel device.
    pub slow_zoom_factor: f64,
    /// Fine wheel-zoom step for hosts with a continuous (trackpad-style)
    /// device, where per-event deltas arrive far more often.
    pub trackpad_zoom_factor: f64,
    /// Pan-speed coefficient applied to plain (unmodified) wheel deltas.
    pub wheel_pan_speed: f64,
    /// Duration hint for host-driven view-box animation
    /// ([`ViewBoxTween`](graphloupe_viewbox::ViewBoxTween)).
    pub animation_duration: Duration,
    /// Lower bound on the cumulative zoom scale `initial_width / width`.
    ///
    /// `1e-3` allows zooming out until the window is a thousand times the
    /// initial extent.
    pub min_zoom: f64,
    /// Upper bound on the cumulative zoom scale `initial_width / width`.
    pub max_zoom: f64,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            zoom_factor: 1.5,
            zoom_element_factor: None,
            slow_zoom_factor: 1.1,
            trackpad_zoom_factor: 1.05,
            wheel_pan_speed: 0.5,
            animation_duration: Duration::from_millis(300),
            min_zoom: 1e-3,
            max_zoom: 1e3,
        }
    }
}

impl ControlOptions {
    /// Resolves the focus-zoom factor for a surface of the given pixel width.
    ///
    /// Uses [`ControlOptions::zoom_element_factor`] when set, otherwise
    /// derives from the width; either way the result is floored at `1.0`.
    #[must_use]
    pub fn element_zoom_for_width(&self, surface_width_px: f64) -> f64 {
        self.zoom_element_factor
            .unwrap_or(surface_width_px * ELEMENT_ZOOM_PER_PIXEL)
            .max(1.0)
    }
}
