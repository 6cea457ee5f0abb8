// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use graphloupe_viewbox::{ParseViewBoxError, ViewBox, ViewBoxTween, flip_negative_y};
use kurbo::{Point, Rect, Size, Vec2};
use tracing::debug;

use crate::options::ControlOptions;
use crate::pan::{PanSession, PointerButton};
use crate::platform::WheelKind;
use crate::surface::{RenderSurface, ScrollBehavior};

/// Interactive controller over a diagram view window.
///
/// `ViewController` owns the sole piece of persistent state (the current
/// [`ViewBox`]) plus the ephemeral pan session and the zoom-level counter.
/// It converts between container pixels and diagram units, applies pan and
/// zoom operations, and republishes the window to the [`RenderSurface`] after
/// every mutation. No other component reads or writes the window directly.
#[derive(Clone, Debug)]
pub struct ViewController {
    window: ViewBox,
    initial: ViewBox,
    zoom_level: i32,
    pan: Option<PanSession>,
    options: ControlOptions,
    wheel_kind: WheelKind,
}

impl ViewController {
    /// Builds a controller over `surface`, whose view-window descriptor
    /// declares the diagram's natural bounds.
    ///
    /// The descriptor is parsed, captured as the reset target, and rewritten
    /// back to the surface. A malformed descriptor fails fast here with a
    /// diagnostic naming the defect; nothing downstream ever sees a NaN
    /// window.
    pub fn new<S: RenderSurface>(
        options: ControlOptions,
        wheel_kind: WheelKind,
        surface: &mut S,
    ) -> Result<Self, ParseViewBoxError> {
        let window = ViewBox::parse(&surface.view_box_attr())?;
        debug!(window = %window, ?wheel_kind, "view controller initialized");
        let controller = Self {
            window,
            initial: window,
            zoom_level: 0,
            pan: None,
            options,
            wheel_kind,
        };
        surface.set_view_box_attr(&controller.window);
        Ok(controller)
    }

    /// Returns the current view window.
    #[must_use]
    pub fn window(&self) -> ViewBox {
        self.window
    }

    /// Returns the window captured at construction, the reset target.
    #[must_use]
    pub fn initial_window(&self) -> ViewBox {
        self.initial
    }

    /// Returns the zoom-level counter.
    ///
    /// Incremented by every applied factor above `1`, decremented below `1`,
    /// zeroed by reset. An observable indicator only; the window-extent clamp
    /// is what actually bounds zooming.
    #[must_use]
    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    /// Returns `true` while a drag pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Returns the controller configuration.
    #[must_use]
    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    /// Converts a container-pixel point into diagram units.
    #[must_use]
    pub fn diagram_point<S: RenderSurface>(&self, surface: &S, point: Point) -> Point {
        self.window
            .point_from_container(point, surface.container_rect().size())
    }

    /// Pointer-down handler. Starts a pan for the primary button and returns
    /// `true`; any other button is ignored.
    pub fn pointer_down(&mut self, button: PointerButton, point: Point) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        self.pan = Some(PanSession::new(point, self.window));
        true
    }

    /// Pointer-move handler. While panning, repositions the window against
    /// the drag-start snapshot and republishes; while idle, does nothing and
    /// returns `false`.
    pub fn pointer_move<S: RenderSurface>(&mut self, point: Point, surface: &mut S) -> bool {
        let Some(session) = self.pan else {
            return false;
        };
        let Some(container) = non_degenerate(surface.container_rect().size()) else {
            return false;
        };
        let drag = point - session.anchor;
        self.window = ViewBox {
            x: session.start.x - drag.x * (self.window.width / container.width),
            y: session.start.y - drag.y * (self.window.height / container.height),
            ..self.window
        };
        self.publish(surface);
        true
    }

    /// Pointer-up handler. Ends the pan session, if any.
    pub fn pointer_up(&mut self) -> bool {
        self.pan.take().is_some()
    }

    /// Pointer-leave handler. Leaving the tracked surface ends the pan the
    /// same way releasing the button does.
    pub fn pointer_leave(&mut self) -> bool {
        self.pointer_up()
    }

    /// Zooms by `factor` about `anchor` (diagram units), keeping the anchor
    /// under the same container pixel.
    ///
    /// `factor < 1` zooms in, `factor > 1` zooms out. Non-positive or
    /// non-finite factors are rejected. The cumulative scale is clamped into
    /// `[min_zoom, max_zoom]`; a request landing on the clamp boundary
    /// applies the reduced effective factor, and a fully-clamped request is a
    /// no-op that leaves the zoom level untouched.
    pub fn zoom_to_point<S: RenderSurface>(
        &mut self,
        anchor: Point,
        factor: f64,
        surface: &mut S,
    ) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let scale = self.initial.width / self.window.width;
        let target = (scale / factor).clamp(self.options.min_zoom, self.options.max_zoom);
        let effective = scale / target;
        if (effective - 1.0).abs() < f64::EPSILON {
            return;
        }
        self.window = self.window.zoomed_about(anchor, effective);
        self.zoom_level += if effective > 1.0 { 1 } else { -1 };
        self.publish(surface);
    }

    /// Discrete zoom in (button/keyboard), anchored at the container center.
    pub fn zoom_in<S: RenderSurface>(&mut self, surface: &mut S) {
        if let Some(anchor) = self.center_anchor(surface) {
            self.zoom_to_point(anchor, 1.0 / self.options.zoom_factor, surface);
        }
    }

    /// Discrete zoom out (button/keyboard), anchored at the container center.
    pub fn zoom_out<S: RenderSurface>(&mut self, surface: &mut S) {
        if let Some(anchor) = self.center_anchor(surface) {
            self.zoom_to_point(anchor, self.options.zoom_factor, surface);
        }
    }

    /// Wheel handler.
    ///
    /// With the zoom modifier held, the wheel zooms about the pointer: the
    /// vertical delta's sign picks the direction and the step comes from the
    /// wheel profile (trackpad-style hosts get the gentler factor). Without
    /// the modifier the wheel is not a zoom at all: both delta axes pan the
    /// window, scaled by the pan-speed coefficient and the current
    /// window/container ratio.
    ///
    /// `position` is the pointer location in container pixels.
    pub fn wheel<S: RenderSurface>(
        &mut self,
        delta: Vec2,
        zoom_modifier: bool,
        position: Point,
        surface: &mut S,
    ) {
        let Some(container) = non_degenerate(surface.container_rect().size()) else {
            return;
        };
        if zoom_modifier {
            let step = match self.wheel_kind {
                WheelKind::Notched => self.options.slow_zoom_factor,
                WheelKind::Continuous => self.options.trackpad_zoom_factor,
            };
            let anchor = self.window.point_from_container(position, container);
            if delta.y < 0.0 {
                self.zoom_to_point(anchor, 1.0 / step, surface);
            } else if delta.y > 0.0 {
                self.zoom_to_point(anchor, step, surface);
            }
        } else {
            let speed = self.options.wheel_pan_speed;
            let shift = Vec2::new(
                delta.x * speed * (self.window.width / container.width),
                delta.y * speed * (self.window.height / container.height),
            );
            if shift == Vec2::ZERO {
                return;
            }
            self.window = self.window.translated(shift);
            self.publish(surface);
        }
    }

    /// Restores the window captured at construction, zeroes the zoom level,
    /// and scrolls the container back to the origin.
    ///
    /// Idempotent: resetting twice yields the same window as resetting once.
    /// A live pan session is dropped; its snapshot refers to a window that no
    /// longer exists.
    pub fn reset<S: RenderSurface>(&mut self, surface: &mut S) {
        self.pan = None;
        self.window = self.initial;
        self.zoom_level = 0;
        self.publish(surface);
        surface.scroll_to(Point::ZERO, ScrollBehavior::Smooth);
    }

    /// Focuses a diagram node given its bounding box in the diagram's own
    /// drawing coordinates.
    ///
    /// Resets first: the scale and center math below assumes the initial
    /// window, and focusing from an arbitrary zoom would compound. The box is
    /// corrected with [`flip_negative_y`] exactly once, and that corrected
    /// rectangle feeds both the zoom center and the scroll target. After
    /// zooming in by the element factor, a smooth scroll centers the node in
    /// the container viewport; rescaling alone cannot guarantee visibility
    /// when the surface is larger than its container, and scrolling alone
    /// cannot guarantee readability.
    pub fn focus_on<S: RenderSurface>(&mut self, bounds: Rect, surface: &mut S) {
        self.reset(surface);
        let bounds = flip_negative_y(bounds, self.window.height);
        let center = bounds.center();
        let factor = self
            .options
            .element_zoom_for_width(surface.surface_rect().width());
        debug!(bounds = ?bounds, factor, "focusing element");
        self.zoom_to_point(center, 1.0 / factor, surface);
        self.scroll_to_center(center, surface);
    }

    /// Requests a smooth scroll that centers the diagram-unit `target` within
    /// the container's visible viewport, using the post-zoom pixel scale.
    fn scroll_to_center<S: RenderSurface>(&self, target: Point, surface: &mut S) {
        let surface_rect = surface.surface_rect();
        let container_rect = surface.container_rect();
        if surface_rect.width() <= 0.0 || surface_rect.height() <= 0.0 {
            return;
        }
        let pixel = Point::new(
            (target.x - self.window.x) * (surface_rect.width() / self.window.width),
            (target.y - self.window.y) * (surface_rect.height() / self.window.height),
        );
        let scroll = Point::new(
            pixel.x + surface_rect.x0 - container_rect.x0 - container_rect.width() / 2.0,
            pixel.y + surface_rect.y0 - container_rect.y0 - container_rect.height() / 2.0,
        );
        surface.scroll_to(scroll, ScrollBehavior::Smooth);
    }

    /// Builds a tween from the current window toward `target` over the
    /// configured animation duration.
    ///
    /// For hosts that animate view-box changes frame by frame instead of
    /// jumping: sample the tween from the frame loop and publish each sample.
    /// The controller itself stays instantaneous.
    #[must_use]
    pub fn tween_to(&self, target: ViewBox) -> ViewBoxTween {
        ViewBoxTween::new(self.window, target, self.options.animation_duration)
    }

    /// Container center in diagram units, the implicit anchor for discrete
    /// zoom. `None` while the container has no extent.
    fn center_anchor<S: RenderSurface>(&self, surface: &S) -> Option<Point> {
        let container = non_degenerate(surface.container_rect().size())?;
        let center = Point::new(container.width / 2.0, container.height / 2.0);
        Some(self.window.point_from_container(center, container))
    }

    fn publish<S: RenderSurface>(&self, surface: &mut S) {
        surface.set_view_box_attr(&self.window);
    }
}

fn non_degenerate(size: Size) -> Option<Size> {
    (size.width > 0.0 && size.height > 0.0).then_some(size)
}
