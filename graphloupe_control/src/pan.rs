// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-drag pan session state.
//!
//! Panning is a two-state machine: idle, or panning with a live
//! [`PanSession`]. The session snapshots the pointer anchor and the window at
//! drag start, so every move computes its delta against the anchor rather
//! than the previous move; a dropped or reordered move event cannot
//! accumulate drift.

use graphloupe_viewbox::ViewBox;
use kurbo::Point;

/// Pointer button reported with a pointer-down event.
///
/// Only [`PointerButton::Primary`] starts a pan; the controller ignores
/// pointer-downs from other buttons entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// The primary button (usually left).
    Primary,
    /// The secondary button (usually right).
    Secondary,
    /// The auxiliary button (usually the wheel/middle button).
    Auxiliary,
    /// Any other button.
    Other,
}

/// Live drag-pan state: created on primary pointer-down, consumed by every
/// pointer-move, destroyed on pointer-up or pointer-leave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSession {
    /// Pointer position at drag start, in container pixels.
    pub anchor: Point,
    /// Window snapshot at drag start.
    pub start: ViewBox,
}

impl PanSession {
    /// Starts a session at `anchor` over the current `window`.
    #[must_use]
    pub const fn new(anchor: Point, window: ViewBox) -> Self {
        Self {
            anchor,
            start: window,
        }
    }
}
