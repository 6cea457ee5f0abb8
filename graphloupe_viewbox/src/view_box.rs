// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size, Vec2};
use thiserror::Error;

/// Rectangular view window over a diagram, in diagram units.
///
/// A `ViewBox` is the region of diagram-unit space currently mapped onto the
/// visible container: `x`/`y` is the top-left corner, `width`/`height` the
/// extent. Both extents are strictly positive for any window produced by
/// [`ViewBox::parse`], and the transforms here preserve that given a positive
/// scale factor. The window may extend outside the diagram's drawn bounds.
///
/// The textual form is the rendering surface's view-window descriptor: four
/// space-separated numbers, `x y width height`. [`ViewBox::parse`] and the
/// [`fmt::Display`] impl round-trip it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    /// Left edge of the window in diagram units.
    pub x: f64,
    /// Top edge of the window in diagram units.
    pub y: f64,
    /// Horizontal extent in diagram units. Strictly positive.
    pub width: f64,
    /// Vertical extent in diagram units. Strictly positive.
    pub height: f64,
}

/// Failure to parse a view-window descriptor.
///
/// Descriptor parsing is the one place malformed host input can enter the
/// system, so each variant names the exact defect; callers should fail fast
/// with the message rather than let a NaN propagate through every subsequent
/// transform.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseViewBoxError {
    /// The descriptor did not contain exactly four fields.
    #[error("expected 4 fields `x y width height`, found {found}")]
    FieldCount {
        /// Number of whitespace-separated fields found.
        found: usize,
    },
    /// A field could not be parsed as a number.
    #[error("field {index} is not a number: {value:?}")]
    InvalidNumber {
        /// Zero-based field index.
        index: usize,
        /// The offending field text.
        value: String,
    },
    /// A field parsed as a number but is NaN or infinite.
    #[error("field {index} is not finite")]
    NonFinite {
        /// Zero-based field index.
        index: usize,
    },
    /// The width or height field is zero or negative.
    #[error("view box extent must be positive, got width {width} height {height}")]
    NonPositiveExtent {
        /// Parsed width field.
        width: f64,
        /// Parsed height field.
        height: f64,
    },
}

impl ViewBox {
    /// Creates a view box from its four components.
    ///
    /// This does not validate the extents; use [`ViewBox::parse`] for host
    /// input. Transform helpers assume `width > 0` and `height > 0`.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Parses a `"x y width height"` descriptor.
    ///
    /// Accepts any ASCII whitespace between fields. Returns an error if the
    /// field count is wrong, a field is unparseable or non-finite, or an
    /// extent is not strictly positive.
    pub fn parse(descriptor: &str) -> Result<Self, ParseViewBoxError> {
        descriptor.parse()
    }

    /// Returns the top-left corner as a point in diagram units.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the window extent.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the center of the window in diagram units.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns the window as a [`Rect`].
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }

    /// Converts a container-pixel point into diagram units.
    ///
    /// `point` is measured from the container's visual top-left; `container`
    /// is the container's pixel extent. This mapping is the single source of
    /// truth for pointer-to-diagram conversion: every pan and zoom operation
    /// that takes a screen-space input routes through it.
    #[must_use]
    pub fn point_from_container(&self, point: Point, container: Size) -> Point {
        Point::new(
            self.x + (point.x / container.width) * self.width,
            self.y + (point.y / container.height) * self.height,
        )
    }

    /// Converts a diagram-unit point into container pixels.
    ///
    /// Inverse of [`ViewBox::point_from_container`] for the same container
    /// extent.
    #[must_use]
    pub fn point_to_container(&self, point: Point, container: Size) -> Point {
        Point::new(
            (point.x - self.x) / self.width * container.width,
            (point.y - self.y) / self.height * container.height,
        )
    }

    /// Returns the window scaled by `factor` about `anchor`.
    ///
    /// `factor < 1` shrinks the window (zooms in), `factor > 1` grows it
    /// (zooms out). `anchor` is a fixed point of the transform: it maps to the
    /// same container pixel before and after. `factor` must be positive and
    /// finite.
    #[must_use]
    pub fn zoomed_about(&self, anchor: Point, factor: f64) -> Self {
        debug_assert!(
            factor.is_finite() && factor > 0.0,
            "zoom factor must be positive and finite"
        );
        Self {
            x: anchor.x - (anchor.x - self.x) * factor,
            y: anchor.y - (anchor.y - self.y) * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Returns the window translated by `delta` in diagram units.
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }

    /// Linearly interpolates toward `to` with progress `t`.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `to`; values outside `[0, 1]`
    /// extrapolate. [`crate::ViewBoxTween`] clamps progress for callers
    /// driving an animation.
    #[must_use]
    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
            width: self.width + (to.width - self.width) * t,
            height: self.height + (to.height - self.height) * t,
        }
    }
}

impl FromStr for ViewBox {
    type Err = ParseViewBoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = [0.0_f64; 4];
        let mut count = 0;
        for (index, field) in s.split_ascii_whitespace().enumerate() {
            count = index + 1;
            if index >= 4 {
                continue;
            }
            let value = field
                .parse::<f64>()
                .map_err(|_| ParseViewBoxError::InvalidNumber {
                    index,
                    value: field.to_string(),
                })?;
            if !value.is_finite() {
                return Err(ParseViewBoxError::NonFinite { index });
            }
            fields[index] = value;
        }
        if count != 4 {
            return Err(ParseViewBoxError::FieldCount { found: count });
        }
        let [x, y, width, height] = fields;
        if width <= 0.0 || height <= 0.0 {
            return Err(ParseViewBoxError::NonPositiveExtent { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// Remaps a bounding box whose origin has a negative vertical coordinate.
///
/// Some diagram generators emit node geometry with the y origin measured
/// upward from the bottom edge of the drawing, so a node's box arrives with
/// `y < 0` relative to a top-origin window of the given vertical `extent`.
/// This remaps such a box into top-origin coordinates (`y := extent + y`,
/// size unchanged) and returns boxes with a non-negative origin untouched.
///
/// Apply this exactly once, in diagram units, before deriving anything else
/// from the box (zoom center, scroll target); both computations must read the
/// same corrected rectangle.
///
/// ```rust
/// use kurbo::Rect;
/// use graphloupe_viewbox::flip_negative_y;
///
/// let node = Rect::from_origin_size((10.0, -40.0), (20.0, 20.0));
/// let corrected = flip_negative_y(node, 100.0);
/// assert_eq!(corrected.y0, 60.0);
/// assert_eq!(corrected.center(), (20.0, 70.0).into());
/// ```
#[must_use]
pub fn flip_negative_y(rect: Rect, extent: f64) -> Rect {
    if rect.y0 < 0.0 {
        Rect::from_origin_size((rect.x0, extent + rect.y0), rect.size())
    } else {
        rect
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use kurbo::{Point, Rect, Size, Vec2};

    use super::{ParseViewBoxError, ViewBox, flip_negative_y};

    #[test]
    fn parse_accepts_four_numbers() {
        let vb = ViewBox::parse("0 0 200 100").unwrap();
        assert_eq!(vb, ViewBox::new(0.0, 0.0, 200.0, 100.0));

        // Negative origins and fractional values are legal.
        let vb = ViewBox::parse("-4.5 -738.2 1024.66 738.25").unwrap();
        assert_eq!(vb.x, -4.5);
        assert_eq!(vb.height, 738.25);
    }

    #[test]
    fn parse_tolerates_extra_whitespace() {
        let vb = ViewBox::parse("  0\t0   200  100 ").unwrap();
        assert_eq!(vb, ViewBox::new(0.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn parse_rejects_wrong_field_count() {
        assert_eq!(
            ViewBox::parse("0 0 200"),
            Err(ParseViewBoxError::FieldCount { found: 3 })
        );
        assert_eq!(
            ViewBox::parse("0 0 200 100 7"),
            Err(ParseViewBoxError::FieldCount { found: 5 })
        );
        assert_eq!(
            ViewBox::parse(""),
            Err(ParseViewBoxError::FieldCount { found: 0 })
        );
    }

    #[test]
    fn parse_rejects_garbage_and_non_finite_fields() {
        assert!(matches!(
            ViewBox::parse("0 zero 200 100"),
            Err(ParseViewBoxError::InvalidNumber { index: 1, .. })
        ));
        assert_eq!(
            ViewBox::parse("0 0 inf 100"),
            Err(ParseViewBoxError::NonFinite { index: 2 })
        );
        assert_eq!(
            ViewBox::parse("NaN 0 200 100"),
            Err(ParseViewBoxError::NonFinite { index: 0 })
        );
    }

    #[test]
    fn parse_rejects_non_positive_extents() {
        assert_eq!(
            ViewBox::parse("0 0 0 100"),
            Err(ParseViewBoxError::NonPositiveExtent {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            ViewBox::parse("0 0 200 -1"),
            Err(ParseViewBoxError::NonPositiveExtent {
                width: 200.0,
                height: -1.0
            })
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let vb = ViewBox::new(-4.5, 0.0, 1024.66, 738.25);
        let descriptor = format!("{vb}");
        assert_eq!(descriptor, "-4.5 0 1024.66 738.25");
        assert_eq!(ViewBox::parse(&descriptor).unwrap(), vb);
    }

    #[test]
    fn container_point_conversion_round_trips() {
        let vb = ViewBox::new(10.0, -20.0, 400.0, 300.0);
        let container = Size::new(800.0, 600.0);

        let px = Point::new(123.0, 456.0);
        let diagram = vb.point_from_container(px, container);
        let back = vb.point_to_container(diagram, container);
        assert!((back.x - px.x).abs() < 1e-9);
        assert!((back.y - px.y).abs() < 1e-9);
    }

    #[test]
    fn container_center_maps_to_window_center() {
        let vb = ViewBox::new(50.0, 25.0, 100.0, 50.0);
        let container = Size::new(640.0, 480.0);
        let center = vb.point_from_container(Point::new(320.0, 240.0), container);
        assert_eq!(center, vb.center());
    }

    #[test]
    fn zoom_halves_window_around_center() {
        let vb = ViewBox::new(0.0, 0.0, 200.0, 100.0);
        let zoomed = vb.zoomed_about(Point::new(100.0, 50.0), 0.5);
        assert_eq!(zoomed, ViewBox::new(50.0, 25.0, 100.0, 50.0));
    }

    #[test]
    fn zoom_anchor_is_a_fixed_point() {
        let vb = ViewBox::new(-30.0, 12.0, 640.0, 480.0);
        let container = Size::new(800.0, 600.0);
        let anchor_px = Point::new(213.0, 77.0);
        let anchor = vb.point_from_container(anchor_px, container);

        for factor in [0.25, 0.5, 1.5, 3.0] {
            let zoomed = vb.zoomed_about(anchor, factor);
            let after = zoomed.point_to_container(anchor, container);
            assert!((after.x - anchor_px.x).abs() < 1e-9);
            assert!((after.y - anchor_px.y).abs() < 1e-9);
        }
    }

    #[test]
    fn translated_moves_origin_only() {
        let vb = ViewBox::new(1.0, 2.0, 30.0, 40.0);
        let moved = vb.translated(Vec2::new(-5.0, 8.0));
        assert_eq!(moved, ViewBox::new(-4.0, 10.0, 30.0, 40.0));
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let a = ViewBox::new(0.0, 0.0, 200.0, 100.0);
        let b = ViewBox::new(50.0, 25.0, 100.0, 50.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), ViewBox::new(25.0, 12.5, 150.0, 75.0));
    }

    #[test]
    fn flip_remaps_negative_y_from_bottom_edge() {
        let node = Rect::from_origin_size((10.0, -40.0), (20.0, 20.0));
        let corrected = flip_negative_y(node, 100.0);
        assert_eq!(corrected, Rect::from_origin_size((10.0, 60.0), (20.0, 20.0)));
        assert_eq!(corrected.center(), Point::new(20.0, 70.0));
    }

    #[test]
    fn flip_leaves_non_negative_y_untouched() {
        let node = Rect::from_origin_size((10.0, 0.0), (20.0, 20.0));
        assert_eq!(flip_negative_y(node, 100.0), node);

        let node = Rect::from_origin_size((10.0, 35.0), (20.0, 20.0));
        assert_eq!(flip_negative_y(node, 100.0), node);
    }
}
