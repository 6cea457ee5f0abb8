// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphloupe Control: the interactive controller over a diagram view window.
//!
//! This crate turns the headless window model from `graphloupe_viewbox` into
//! an input-driven controller. It owns the mutable [`ViewController`] state
//! and exposes the operations a host wires its events to:
//! - Pointer-drag panning as a two-state machine ([`PanSession`]), gated on
//!   the primary button and safe to feed stray moves while idle.
//! - Scale-about-a-point zooming with three speed policies: a coarse discrete
//!   step for buttons/keyboard, a fine modifier-wheel step chosen per
//!   [`WheelKind`] (trackpad-style hosts get a gentler factor), and plain
//!   wheel input reinterpreted as a two-axis pan.
//! - An idempotent reset back to the window captured at construction.
//! - Focus-on-element: reset, correct the target box with
//!   [`flip_negative_y`], zoom in on its center by a size-derived factor, and
//!   request a smooth scroll that centers it in the container.
//!
//! The host side is a single seam, [`RenderSurface`]: the controller parses
//! the surface's `"x y width height"` view-window descriptor once at
//! construction (failing fast on malformed input) and rewrites it after every
//! mutation, so the visible diagram always tracks the model.
//!
//! ## Minimal example
//!
//! ```rust
//! use graphloupe_control::{
//!     ControlOptions, PointerButton, RenderSurface, ScrollBehavior, ViewController, WheelKind,
//! };
//! use graphloupe_viewbox::ViewBox;
//! use kurbo::{Point, Rect};
//!
//! // A toy surface: a real host would write through to its renderer.
//! struct Surface {
//!     attr: String,
//! }
//!
//! impl RenderSurface for Surface {
//!     fn view_box_attr(&self) -> String {
//!         self.attr.clone()
//!     }
//!     fn set_view_box_attr(&mut self, view_box: &ViewBox) {
//!         self.attr = view_box.to_string();
//!     }
//!     fn container_rect(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 800.0, 400.0)
//!     }
//!     fn surface_rect(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 800.0, 400.0)
//!     }
//!     fn scroll_to(&mut self, _offset: Point, _behavior: ScrollBehavior) {}
//! }
//!
//! let mut surface = Surface { attr: "0 0 200 100".into() };
//! let mut view = ViewController::new(
//!     ControlOptions::default(),
//!     WheelKind::from_platform(Some("MacIntel")),
//!     &mut surface,
//! )
//! .unwrap();
//!
//! // Drag from (10, 10) to (50, 30): the window moves opposite the pointer.
//! view.pointer_down(PointerButton::Primary, Point::new(10.0, 10.0));
//! view.pointer_move(Point::new(50.0, 30.0), &mut surface);
//! view.pointer_up();
//! assert_eq!(view.window(), ViewBox::new(-10.0, -5.0, 200.0, 100.0));
//!
//! // Reset restores the window captured at construction.
//! view.reset(&mut surface);
//! assert_eq!(view.window(), ViewBox::new(0.0, 0.0, 200.0, 100.0));
//! assert_eq!(surface.attr, "0 0 200 100");
//! ```
//!
//! ## Design notes
//!
//! - The controller does not own the surface; every mutating operation takes
//!   `&mut impl RenderSurface`, keeping the model headless and the host free
//!   to share its surface handle elsewhere between calls.
//! - All state mutation is synchronous inside whichever handler the host
//!   event loop invokes; handlers are state-transition-safe instead of
//!   locked (a pan move while idle is a no-op, reset drops a live pan).
//! - The cumulative zoom scale is clamped into a configurable range, so no
//!   input sequence can drive the window into a degenerate or unbounded
//!   extent.

mod controller;
mod options;
mod pan;
mod platform;
mod surface;

pub use controller::ViewController;
pub use graphloupe_viewbox::{ParseViewBoxError, ViewBox, ViewBoxTween, flip_negative_y};
pub use options::{ControlOptions, ELEMENT_ZOOM_PER_PIXEL};
pub use pan::{PanSession, PointerButton};
pub use platform::WheelKind;
pub use surface::{RenderSurface, ScrollBehavior};
