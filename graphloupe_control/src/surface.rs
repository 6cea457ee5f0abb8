// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host seam: a rendering surface the controller publishes to.

use graphloupe_viewbox::ViewBox;
use kurbo::{Point, Rect};

/// How a requested scroll should be performed by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump immediately.
    Auto,
    /// Animate toward the target; the host picks the curve and timing.
    Smooth,
}

/// Rendering surface displaying the diagram inside a scrollable container.
///
/// The controller reads the view-window descriptor once at construction and
/// rewrites it after every mutation; geometry queries are answered fresh on
/// each call so the host may resize or reflow freely between events.
///
/// Both rects share one pixel coordinate space (the host's page/client
/// space): `container_rect` is the scrollable viewing area, whose size is
/// the visible extent, and `surface_rect` is the rendered diagram itself,
/// which may be larger than the container. Pointer positions handed to the
/// controller are measured from the container's visual top-left.
pub trait RenderSurface {
    /// Returns the current `"x y width height"` view-window descriptor.
    fn view_box_attr(&self) -> String;

    /// Rewrites the view-window descriptor, updating the visible diagram.
    fn set_view_box_attr(&mut self, view_box: &ViewBox);

    /// Pixel rect of the scrollable viewing area.
    fn container_rect(&self) -> Rect;

    /// Pixel rect of the rendered diagram surface.
    fn surface_rect(&self) -> Rect;

    /// Requests the container scroll so `offset` becomes its top-left.
    ///
    /// Smooth scrolls are fire-and-forget: the controller does not await or
    /// cancel in-flight animations, and a later request supersedes an
    /// earlier one per the host's own scrolling rules.
    fn scroll_to(&mut self, offset: Point, behavior: ScrollBehavior);
}
