// Copyright 2025 the Graphloupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end interaction flows over a recording host surface.
//!
//! These drive the controller the way a host event loop would (interleaved
//! drags, wheels, discrete zooms, resets, and focuses) and check the
//! promises the interaction model makes: the published descriptor always
//! tracks the model, the window extents stay positive, and reset always
//! lands back on the construction window.

use graphloupe_control::{
    ControlOptions, PointerButton, RenderSurface, ScrollBehavior, ViewController, WheelKind,
};
use graphloupe_viewbox::ViewBox;
use kurbo::{Point, Rect, Vec2};
use proptest::prelude::*;

struct Host {
    attr: String,
    container: Rect,
    surface: Rect,
    scrolls: Vec<(Point, ScrollBehavior)>,
}

impl Host {
    fn new(attr: &str) -> Self {
        Self {
            attr: attr.into(),
            container: Rect::new(100.0, 50.0, 1060.0, 530.0),
            surface: Rect::new(130.0, 50.0, 2050.0, 1010.0),
            scrolls: Vec::new(),
        }
    }
}

impl RenderSurface for Host {
    fn view_box_attr(&self) -> String {
        self.attr.clone()
    }

    fn set_view_box_attr(&mut self, view_box: &ViewBox) {
        self.attr = view_box.to_string();
    }

    fn container_rect(&self) -> Rect {
        self.container
    }

    fn surface_rect(&self) -> Rect {
        self.surface
    }

    fn scroll_to(&mut self, offset: Point, behavior: ScrollBehavior) {
        self.scrolls.push((offset, behavior));
    }
}

#[test]
fn drag_zoom_drag_reset_round_trip() {
    let mut host = Host::new("0 0 960 480");
    let mut view =
        ViewController::new(ControlOptions::default(), WheelKind::Notched, &mut host).unwrap();

    view.pointer_down(PointerButton::Primary, Point::new(480.0, 240.0));
    view.pointer_move(Point::new(500.0, 250.0), &mut host);
    view.pointer_up();

    view.zoom_in(&mut host);
    view.wheel(Vec2::new(0.0, 4.0), false, Point::new(0.0, 0.0), &mut host);

    assert_ne!(view.window(), view.initial_window());

    view.reset(&mut host);
    assert_eq!(view.window(), view.initial_window());
    assert_eq!(host.attr, "0 0 960 480");
}

#[test]
fn focus_centers_the_node_inside_an_offset_container() {
    let mut host = Host::new("0 0 960 480");
    let mut view = ViewController::new(
        ControlOptions {
            zoom_element_factor: Some(2.0),
            ..ControlOptions::default()
        },
        WheelKind::Notched,
        &mut host,
    )
    .unwrap();

    view.focus_on(Rect::from_origin_size((100.0, -180.0), (40.0, 20.0)), &mut host);

    // Flip against the 480-high window: y = 480 - 180 = 300; center (120, 310).
    // Factor 2 halves the window about that center.
    assert_eq!(view.window(), ViewBox::new(60.0, 155.0, 480.0, 240.0));

    // Surface is 1920x960 px over a 480x240 window: 4 px per unit. The center
    // lands at pixel (240, 620); the scroll target accounts for the surface
    // offset relative to the container and half the 960x480 viewport.
    let (target, behavior) = *host.scrolls.last().unwrap();
    assert_eq!(behavior, ScrollBehavior::Smooth);
    assert!((target.x - (240.0 + 130.0 - 100.0 - 480.0)).abs() < 1e-9);
    assert!((target.y - (620.0 + 50.0 - 50.0 - 240.0)).abs() < 1e-9);
}

#[test]
fn focus_requests_origin_scroll_then_centering_scroll() {
    let mut host = Host::new("0 0 960 480");
    let mut view =
        ViewController::new(ControlOptions::default(), WheelKind::Notched, &mut host).unwrap();

    view.focus_on(Rect::from_origin_size((10.0, 10.0), (20.0, 20.0)), &mut host);

    // Reset scrolls to the origin first, then the focus scroll centers.
    assert_eq!(host.scrolls.len(), 2);
    assert_eq!(host.scrolls[0], (Point::ZERO, ScrollBehavior::Smooth));
    assert_ne!(host.scrolls[1].0, Point::ZERO);
}

#[test]
fn descriptor_on_the_surface_always_tracks_the_model() {
    let mut host = Host::new("0 0 960 480");
    let mut view =
        ViewController::new(ControlOptions::default(), WheelKind::Continuous, &mut host).unwrap();

    view.zoom_in(&mut host);
    assert_eq!(host.attr, view.window().to_string());

    view.wheel(Vec2::new(-6.0, 9.0), false, Point::new(10.0, 10.0), &mut host);
    assert_eq!(host.attr, view.window().to_string());

    view.wheel(Vec2::new(0.0, -2.0), true, Point::new(33.0, 44.0), &mut host);
    assert_eq!(host.attr, view.window().to_string());

    view.focus_on(Rect::from_origin_size((300.0, 200.0), (40.0, 20.0)), &mut host);
    assert_eq!(host.attr, view.window().to_string());
}

#[derive(Clone, Debug)]
enum Op {
    Down(f64, f64),
    Move(f64, f64),
    Up,
    Leave,
    Wheel { dx: f64, dy: f64, zoom: bool, x: f64, y: f64 },
    ZoomIn,
    ZoomOut,
    ZoomTo(f64, f64, f64),
    Reset,
    Focus(f64, f64, f64, f64),
}

fn op() -> impl Strategy<Value = Op> {
    let coord = -2000.0..2000.0_f64;
    let extent = 1.0..400.0_f64;
    prop_oneof![
        (coord.clone(), coord.clone()).prop_map(|(x, y)| Op::Down(x, y)),
        (coord.clone(), coord.clone()).prop_map(|(x, y)| Op::Move(x, y)),
        Just(Op::Up),
        Just(Op::Leave),
        (
            -300.0..300.0_f64,
            -300.0..300.0_f64,
            any::<bool>(),
            coord.clone(),
            coord.clone()
        )
            .prop_map(|(dx, dy, zoom, x, y)| Op::Wheel { dx, dy, zoom, x, y }),
        Just(Op::ZoomIn),
        Just(Op::ZoomOut),
        (coord.clone(), coord.clone(), 0.001..10.0_f64)
            .prop_map(|(x, y, f)| Op::ZoomTo(x, y, f)),
        Just(Op::Reset),
        (coord.clone(), coord, extent.clone(), extent)
            .prop_map(|(x, y, w, h)| Op::Focus(x, y, w, h)),
    ]
}

proptest! {
    #[test]
    fn any_operation_sequence_keeps_the_window_positive(ops in prop::collection::vec(op(), 1..60)) {
        let mut host = Host::new("0 0 960 480");
        let mut view =
            ViewController::new(ControlOptions::default(), WheelKind::Notched, &mut host).unwrap();

        for op in ops {
            match op {
                Op::Down(x, y) => {
                    view.pointer_down(PointerButton::Primary, Point::new(x, y));
                }
                Op::Move(x, y) => {
                    view.pointer_move(Point::new(x, y), &mut host);
                }
                Op::Up => {
                    view.pointer_up();
                }
                Op::Leave => {
                    view.pointer_leave();
                }
                Op::Wheel { dx, dy, zoom, x, y } => {
                    view.wheel(Vec2::new(dx, dy), zoom, Point::new(x, y), &mut host);
                }
                Op::ZoomIn => view.zoom_in(&mut host),
                Op::ZoomOut => view.zoom_out(&mut host),
                Op::ZoomTo(x, y, f) => view.zoom_to_point(Point::new(x, y), f, &mut host),
                Op::Reset => view.reset(&mut host),
                Op::Focus(x, y, w, h) => {
                    view.focus_on(Rect::from_origin_size((x, y), (w, h)), &mut host);
                }
            }
            let window = view.window();
            prop_assert!(window.width > 0.0, "width {} after {:?}", window.width, window);
            prop_assert!(window.height > 0.0, "height {} after {:?}", window.height, window);
            prop_assert!(window.width.is_finite() && window.height.is_finite());
        }
    }
}
