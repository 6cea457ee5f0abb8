// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-driven view-box animation: sample a linear tween from a frame loop.
//!
//! ## Usage
//!
//! 1) Build a [`ViewBoxTween`] from the current window, the target window, and
//!    the configured animation duration.
//! 2) On each host frame, call [`ViewBoxTween::sample`] with the elapsed time
//!    and publish the result to the rendering surface.
//! 3) Stop once [`ViewBoxTween::is_finished`] reports completion; the final
//!    sample equals the target window exactly.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use graphloupe_viewbox::{ViewBox, ViewBoxTween};
//!
//! let from = ViewBox::new(0.0, 0.0, 200.0, 100.0);
//! let to = ViewBox::new(50.0, 25.0, 100.0, 50.0);
//! let tween = ViewBoxTween::new(from, to, Duration::from_millis(300));
//!
//! assert_eq!(tween.sample(Duration::ZERO), from);
//! assert_eq!(tween.sample(Duration::from_millis(150)), from.lerp(&to, 0.5));
//! assert_eq!(tween.sample(Duration::from_millis(300)), to);
//! assert!(tween.is_finished(Duration::from_millis(300)));
//! ```

use core::time::Duration;

use crate::ViewBox;

/// Linear interpolation between two view windows over a fixed duration.
///
/// The tween itself holds no clock; the host's frame loop supplies elapsed
/// time, which keeps this model synchronous and trivially testable. Progress
/// is clamped, so sampling past the duration keeps returning the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBoxTween {
    from: ViewBox,
    to: ViewBox,
    duration: Duration,
}

impl ViewBoxTween {
    /// Creates a tween from `from` to `to` over `duration`.
    ///
    /// A zero duration is legal and yields `to` from the first sample.
    #[must_use]
    pub const fn new(from: ViewBox, to: ViewBox, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    /// Returns the target window.
    #[must_use]
    pub fn target(&self) -> ViewBox {
        self.to
    }

    /// Returns the interpolated window at `elapsed` since the tween started.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> ViewBox {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        };
        self.from.lerp(&self.to, progress)
    }

    /// Returns `true` once `elapsed` has reached the tween duration.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
