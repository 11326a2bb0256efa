// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotate and resize basics.
//!
//! Rotate a simulated element with the handle, snap it with shift, then
//! resize it through the handle that now sits at its visual bottom right.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example rotatable_basics`

use kurbo::{Point, Size, Vec2};
use tracing_subscriber::EnvFilter;
use understory_demos::SimulatedElement;
use understory_rotatable::{
    Axis, AxisResizeEngine, HandleMarkers, Modifiers, PointerButton, ResizeState, Rotatable,
    RotatableOptions,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut element = SimulatedElement::new("div", Point::new(40.0, 40.0), Size::new(160.0, 90.0));
    let mut rotatable = Rotatable::new(RotatableOptions::new()).expect("default angle is valid");
    element.apply_rotate(&rotatable.init(element.transform));
    println!("classes after init: {:?}", element.classes());

    // Drag the handle from straight above the center around to the right,
    // holding shift so the result snaps to 15° steps.
    let center = element.bounds().center();
    rotatable.press(
        element.bounds(),
        element.transform,
        center - Vec2::new(0.0, 80.0),
        PointerButton::Primary,
    );
    for pointer in [
        center + Vec2::new(30.0, -70.0),
        center + Vec2::new(60.0, -40.0),
        center + Vec2::new(80.0, 5.0),
    ] {
        let events = rotatable.pointer_move(pointer, Modifiers::SHIFT);
        element.apply_rotate(&events);
        println!(
            "angle {:6.1}°  body {:?}",
            rotatable.angle().to_degrees(),
            element.body_classes()
        );
    }
    element.apply_rotate(&rotatable.release());
    element.tick();
    println!("transform after rotate: {}", element.css_transform());

    // Resize through whichever handle is drawn at the bottom right now.
    let mut engine = AxisResizeEngine::new();
    let mut resize = ResizeState::new();
    let rotation = rotatable.decomposed(element.transform).rotation;
    let handle = HandleMarkers::for_rotation(rotation).handle_at(Axis::Se);
    let pointer = element.handle_position(handle);
    let opposite = element.handle_position(handle.opposite());

    let Some(start) = resize.press(
        handle,
        element.geometry(),
        pointer,
        PointerButton::Primary,
        &mut engine,
    ) else {
        return;
    };
    element.apply_resize_start(&start);
    println!("dragging `{handle}` with cursor {}", element.body_cursor());

    for step in 1..=4 {
        let offset = Vec2::new(10.0, 10.0) * f64::from(step);
        if let Some(tick) = resize.drag(pointer + offset, Modifiers::empty(), &mut engine) {
            element.apply_resize_tick(&tick);
            println!(
                "size {:>6.1} x {:<6.1} position ({:.2}, {:.2})",
                element.size.width, element.size.height, element.position.x, element.position.y
            );
        }
    }
    if let Some(stop) = resize.release(&mut engine) {
        element.apply_resize_stop(&stop);
    }

    let drift = element.handle_position(handle.opposite()) - opposite;
    println!("opposite handle moved by ({:.3}, {:.3})", drift.x, drift.y);
}
