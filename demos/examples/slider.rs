// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless slider: mouse drag, touch drag, RTL, and keyboard stepping.
//!
//! This example drives a [`DragController`] over stub geometry and a logging
//! document, the way a widget toolkit would forward its native events.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_examples --example slider`

use kurbo::{Point, Rect};
use understory_drag::stub::StubGeometry;
use understory_drag::{
    Direction, DragConfig, DragController, Key, ListenerHost, ListenerId, ListenerKind, Outcome,
    PointerKind, ValueChange,
};
use understory_range::{Stop, ValueDomain, map};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Element {
    Rail,
    Thumb,
}

/// Document-level listener registry that logs what a real host would do.
#[derive(Default)]
struct Document {
    next: u64,
    live: Vec<(ListenerId, ListenerKind)>,
}

impl ListenerHost for Document {
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        self.next += 1;
        let id = ListenerId(self.next);
        log::debug!("document.addEventListener({kind:?}) -> {id:?}");
        self.live.push((id, kind));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        log::debug!("document.removeEventListener({id:?})");
        self.live.retain(|(live, _)| *live != id);
    }
}

/// Lay out a 240px rail with a 16px thumb positioned for `value`.
fn layout(domain: &ValueDomain, value: f64, direction: Direction) -> StubGeometry<Element> {
    let rail = Rect::new(20.0, 0.0, 260.0, 16.0);
    let travel = rail.width() - 16.0;
    let offset = map::offset_for_value(domain, value, travel);
    let x0 = match direction {
        Direction::Ltr => rail.x0 + offset,
        Direction::Rtl => rail.x1 - offset - 16.0,
    };
    StubGeometry::new()
        .with_rect(Element::Rail, rail)
        .with_rect(Element::Thumb, Rect::new(x0, 0.0, x0 + 16.0, 16.0))
        .with_direction(Element::Rail, direction)
}

fn dispatch(outcome: Outcome) {
    if let Some(ValueChange { value, input_value }) = outcome.change {
        println!(
            "  change: value={value} input_value={input_value:?} (bubbles={}, composed={})",
            ValueChange::FLAGS.bubbles,
            ValueChange::FLAGS.composed
        );
    }
    if outcome.prevent_default {
        println!("  preventDefault()");
    }
}

fn drag(
    slider: &mut DragController<Element, ValueDomain>,
    document: &mut Document,
    direction: Direction,
    pointer: PointerKind,
    path: &[f64],
) {
    let geometry = layout(slider.target(), slider.value(), direction);
    let Some(thumb) = geometry_thumb_center(&geometry) else {
        return;
    };
    println!("{pointer:?} down at x={}", thumb.x);
    if !slider.on_pointer_down(&geometry, document, pointer, thumb) {
        println!("  ignored");
        return;
    }
    for x in path {
        println!("{pointer:?} move to x={x}");
        dispatch(slider.on_pointer_move(&geometry, pointer, Point::new(*x, thumb.y)));
    }
    match pointer {
        PointerKind::Mouse => slider.on_pointer_up(document, pointer),
        PointerKind::Touch => slider.on_touch_cancel(document),
    };
    println!("{pointer:?} released, value={}", slider.value());
    assert!(document.live.is_empty(), "listeners leaked");
}

fn geometry_thumb_center(geometry: &StubGeometry<Element>) -> Option<Point> {
    use understory_drag::GeometryProvider;
    geometry.bounds(&Element::Thumb).map(|r| r.center())
}

fn main() {
    env_logger::init();
    let mut document = Document::default();

    println!("== continuous 0..=100, step 5 ==");
    let domain = ValueDomain::continuous(0.0, 100.0, 5.0).expect("valid domain");
    let config = DragConfig {
        pair_input_value: true,
        ..DragConfig::default()
    };
    let mut slider = DragController::new(Element::Rail, Element::Thumb, domain, config, 50.0);
    drag(
        &mut slider,
        &mut document,
        Direction::Ltr,
        PointerKind::Mouse,
        &[150.0, 151.0, 152.0, 200.0, 400.0],
    );

    println!("== same slider in RTL, touch ==");
    drag(
        &mut slider,
        &mut document,
        Direction::Rtl,
        PointerKind::Touch,
        &[100.0, 60.0, -50.0],
    );

    println!("== keyboard ==");
    let geometry = layout(slider.target(), slider.value(), Direction::Ltr);
    for key in [Key::ArrowRight, Key::ArrowRight, Key::ArrowLeft, Key::ArrowUp] {
        println!("{key:?}");
        dispatch(slider.on_key(&geometry, key));
    }

    println!("== custom stops ==");
    let sizes = ValueDomain::stops(
        vec![
            Stop::new(0.0, "S"),
            Stop::new(1.0, "M"),
            Stop::new(2.0, "L"),
            Stop::new(4.0, "XL"),
        ],
        false,
    )
    .expect("valid stops");
    let mut slider = DragController::new(
        Element::Rail,
        Element::Thumb,
        sizes,
        DragConfig::default(),
        1.0,
    );
    drag(
        &mut slider,
        &mut document,
        Direction::Ltr,
        PointerKind::Mouse,
        &[90.0, 120.0, 150.0, 250.0],
    );
    let label = slider
        .target()
        .stop_index(slider.value())
        .map(|i| slider.target().stop_list()[i].label.as_str());
    println!("selected stop: {label:?}");
}
