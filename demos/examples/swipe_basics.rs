// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe basics: hysteresis, clamping, and dispatch on a single controller.
//!
//! Walks through the two canonical drags on a 200 wide row:
//! - a leading drag that commits, falls back inside the hysteresis band, then releases
//!   before the finger lifts (no action);
//! - a trailing-only row dragged far left (trailing action runs once).
//!
//! Run:
//! - `cargo run -p understory_swipe_demos --example swipe_basics`
//! - `RUST_LOG=debug cargo run -p understory_swipe_demos --example swipe_basics`

use std::cell::Cell;
use std::rc::Rc;

use understory_swipe::config::SwipeConfig;
use understory_swipe::controller::SwipeController;
use understory_swipe::haptics::ImpactStyle;
use understory_swipe::types::{Edge, SwipePhase};

fn main() {
    let _ = env_logger::try_init();

    let pulses = Rc::new(Cell::new(0_u32));
    let fired = Rc::new(Cell::new(0_u32));

    // Row with both edges.
    let p = pulses.clone();
    let f = fired.clone();
    let config = SwipeConfig::builder()
        .leading("pin", "purple", move || f.set(f.get() + 1))
        .trailing("delete", "blue", || println!("  trailing action"))
        .build()
        .expect("default tuning is valid");
    let mut row = SwipeController::with_haptics(config, move |style: ImpactStyle| {
        println!("  haptic: {style:?}");
        p.set(p.get() + 1);
    });
    row.on_content_measured(200.0);

    println!("== Leading drag with hysteresis ==");
    for x in [150.0, 85.0, 70.0] {
        let change = row.on_drag_update(x);
        println!(
            "  drag {x:>6}: offset {:>6} phase {:?} change {:?}",
            row.offset(),
            row.phase(),
            change
        );
    }
    let dispatched = row.on_drag_end();
    println!("  release: dispatched {dispatched:?}, phase {:?}", row.phase());

    assert_eq!(dispatched, None);
    assert_eq!(pulses.get(), 2);
    assert_eq!(fired.get(), 0);
    assert_eq!(row.phase(), SwipePhase::Idle);

    // Row with only a trailing edge.
    println!("== Trailing-only row ==");
    let trailing = Rc::new(Cell::new(0_u32));
    let t = trailing.clone();
    let config = SwipeConfig::builder()
        .trailing("archive", "blue", move || t.set(t.get() + 1))
        .build()
        .expect("default tuning is valid");
    let mut row = SwipeController::new(config);
    row.on_content_measured(200.0);

    row.on_drag_update(60.0);
    println!("  drag     60: offset {} (leading disabled)", row.offset());
    assert_eq!(row.offset(), 0.0);

    row.on_drag_update(-250.0);
    println!(
        "  drag   -250: offset {} selection {:?}",
        row.offset(),
        row.selection()
    );
    let dispatched = row.on_drag_end();
    println!("  release: dispatched {dispatched:?}");

    assert_eq!(dispatched, Some(Edge::Trailing));
    assert_eq!(trailing.get(), 1);
    assert_eq!(row.offset(), 0.0);
}
