// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphloupe View Box: the diagram view-window model and its coordinate math.
//!
//! This crate provides the small, headless data model underneath an interactive
//! diagram viewer: a rectangular view window ([`ViewBox`]) over a diagram drawn
//! in its own unit space, together with the conversions and transforms every
//! pan/zoom/focus operation routes through. It focuses on:
//! - Parsing and formatting the `"x y width height"` view-window descriptor
//!   exposed by the rendering surface.
//! - Converting points between container-pixel space and diagram-unit space.
//! - Scale-about-a-point and translation transforms over the window.
//! - The vertical-axis correction for layout tools that emit node geometry
//!   with a negative y origin ([`flip_negative_y`]).
//! - Linear view-box interpolation for host-driven animation
//!   ([`ViewBox::lerp`], [`ViewBoxTween`]).
//!
//! It does **not** own any rendering surface or event loop. Callers are
//! expected to:
//! - Keep the authoritative window state in a higher-level controller
//!   (for example `graphloupe_control`).
//! - Republish the window to their rendering surface after each mutation.
//! - Feed input events into pan/zoom operations at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use graphloupe_viewbox::ViewBox;
//!
//! // The rendering surface declares its natural bounds as a descriptor.
//! let window = ViewBox::parse("0 0 200 100").unwrap();
//!
//! // Convert a container-pixel point into diagram units (for anchoring zoom,
//! // hit testing, and so on) inside an 800x400 pixel container.
//! let container = Size::new(800.0, 400.0);
//! let p = window.point_from_container(Point::new(400.0, 200.0), container);
//! assert_eq!(p, Point::new(100.0, 50.0));
//!
//! // Zoom in 2x around that point; the window halves and keeps the anchor.
//! let zoomed = window.zoomed_about(p, 0.5);
//! assert_eq!(zoomed, ViewBox::new(50.0, 25.0, 100.0, 50.0));
//! ```
//!
//! ## Design notes
//!
//! - The window is axis-aligned with independent width/height extents; both
//!   extents are strictly positive for any window produced by [`ViewBox::parse`]
//!   or by the transforms here (given a positive factor).
//! - The window may legally extend outside the diagram's drawn bounds;
//!   over-zoom-out is not an error at this layer.
//! - Animation is expressed as pure interpolation sampled by the host's frame
//!   loop; nothing here schedules time.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod tween;
mod view_box;

pub use tween::ViewBoxTween;
pub use view_box::{ParseViewBoxError, ViewBox, flip_negative_y};
