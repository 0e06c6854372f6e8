// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resizable drawer panels driven by the same drag controller as a slider.
//!
//! Shows a panel docked at the end of a horizontal drawer (mirrored drag) and a
//! panel docked at the bottom (vertical axis, grows upward). The stub geometry is
//! re-laid out after every change, as a host would after applying the new size.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_examples --example drawer_panel`

use kurbo::{Point, Rect};
use understory_drag::stub::{RecordingHost, StubGeometry};
use understory_drag::{Axis, DragConfig, DragController, Key, PanelResize, PointerKind};

const DRAWER: u8 = 0;
const SPLITTER: u8 = 1;
const SPLITTER_WIDTH: f64 = 4.0;

/// Lay out a panel of `size` docked at the right edge of `drawer`.
fn end_docked(drawer: Rect, size: f64) -> StubGeometry<u8> {
    let inner = drawer.x1 - size;
    StubGeometry::new()
        .with_rect(DRAWER, drawer)
        .with_rect(
            SPLITTER,
            Rect::new(inner, drawer.y0, inner + SPLITTER_WIDTH, drawer.y1),
        )
}

/// Lay out a panel of `size` docked at the bottom edge of `drawer`.
fn bottom_docked(drawer: Rect, size: f64) -> StubGeometry<u8> {
    let inner = drawer.y1 - size;
    StubGeometry::new()
        .with_rect(DRAWER, drawer)
        .with_rect(
            SPLITTER,
            Rect::new(drawer.x0, inner, drawer.x1, inner + SPLITTER_WIDTH),
        )
}

fn run(
    name: &str,
    panel: &mut DragController<u8, PanelResize>,
    layout: impl Fn(f64) -> StubGeometry<u8>,
    path: &[Point],
    keys: &[Key],
) {
    let mut document = RecordingHost::new();
    println!("== {name}: starting at {} ==", panel.value());

    let Some(&first) = path.first() else {
        return;
    };
    let geometry = layout(panel.value());
    panel.on_pointer_down(&geometry, &mut document, PointerKind::Mouse, first);
    for point in &path[1..] {
        // The geometry follows the panel; the session keeps the original grab offset.
        let geometry = layout(panel.value());
        if let Some(change) = panel
            .on_pointer_move(&geometry, PointerKind::Mouse, *point)
            .change
        {
            log::info!("{name}: resized to {}", change.value);
        }
    }
    panel.on_pointer_up(&mut document, PointerKind::Mouse);
    println!(
        "released at {}; listeners added {} removed {}",
        panel.value(),
        document.added(),
        document.removed()
    );

    for key in keys {
        let geometry = layout(panel.value());
        match panel.on_key(&geometry, *key).change {
            Some(change) => println!("{key:?} -> {}", change.value),
            None => println!("{key:?} -> unchanged"),
        }
    }
}

fn main() {
    env_logger::init();

    let drawer = Rect::new(0.0, 0.0, 800.0, 500.0);
    let limits = PanelResize {
        min_size: 150.0,
        max_size: Some(600.0),
        increment: 10.0,
    };

    let mut side = DragController::new(
        DRAWER,
        SPLITTER,
        limits,
        DragConfig {
            mirrored: true,
            ..DragConfig::default()
        },
        300.0,
    );
    run(
        "end-docked",
        &mut side,
        |size| end_docked(drawer, size),
        &[
            Point::new(502.0, 40.0),
            Point::new(450.0, 40.0),
            Point::new(100.0, 40.0),
            Point::new(790.0, 40.0),
        ],
        &[Key::ArrowLeft, Key::ArrowRight, Key::ArrowRight, Key::ArrowUp],
    );

    let mut bottom = DragController::new(
        DRAWER,
        SPLITTER,
        PanelResize::default(),
        DragConfig {
            axis: Axis::Vertical,
            ..DragConfig::default()
        },
        120.0,
    );
    run(
        "bottom-docked",
        &mut bottom,
        |size| bottom_docked(drawer, size),
        &[
            Point::new(400.0, 381.0),
            Point::new(400.0, 300.0),
            Point::new(400.0, 200.0),
        ],
        &[Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft],
    );
}
