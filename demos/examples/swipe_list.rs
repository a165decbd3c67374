// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A list of swipable rows driven by raw pointer input.
//!
//! Builds a hundred rows, each with its own controller, and replays a few pointer gestures:
//! a tap, a short wobble under the minimum drag distance, a full leading swipe on one row, and
//! a cancelled trailing swipe on another. A renderer subscribed to one row prints the computed
//! layout after every change.
//!
//! Run:
//! - `cargo run -p understory_swipe_demos --example swipe_list`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size};
use understory_swipe::config::SwipeConfig;
use understory_swipe::layout::SwipeLayout;
use understory_swipe::swipable::Swipable;
use understory_swipe::types::{Edge, SwipeEffect, SwipeState};

const ROW_SIZE: Size = Size::new(390.0, 64.0);

type Row = Swipable<String, &'static str, u32>;

fn make_rows(log: &Rc<RefCell<Vec<String>>>) -> Vec<Row> {
    (1..=100)
        .map(|i| {
            let (lead, trail) = (log.clone(), log.clone());
            let config = SwipeConfig::builder()
                .leading("text.line.first", 0x8e44ad, move || {
                    lead.borrow_mut().push(format!("leading action on Item {i}"));
                })
                .trailing("text.line.last", 0x2980b9, move || {
                    trail.borrow_mut().push(format!("trailing action on Item {i}"));
                })
                .build()
                .expect("default tuning is valid");
            let mut row = Swipable::new(format!("Item {i}"), config);
            row.measure(ROW_SIZE);
            row
        })
        .collect()
}

fn swipe(row: &mut Row, from: Point, to: Point, steps: u32) -> Vec<SwipeEffect> {
    let mut effects = Vec::new();
    row.pointer_down(from);
    for s in 1..=steps {
        let t = f64::from(s) / f64::from(steps);
        effects.extend(row.pointer_move(from.lerp(to, t)));
    }
    effects
}

fn main() {
    let _ = env_logger::try_init();

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut rows = make_rows(&log);

    // Renderer for row 3: recompute layout on every change.
    rows[2].controller_mut().subscribe(|s: &SwipeState| {
        let layout = SwipeLayout::compute(s, ROW_SIZE);
        println!(
            "  [Item 3] content.x0 {:>7.1} leading {:?} trailing {:?} highlighted {:?}",
            layout.content.x0,
            layout.revealed_area(Edge::Leading).map(|r| r.width()),
            layout.revealed_area(Edge::Trailing).map(|r| r.width()),
            layout.highlighted,
        );
    });

    println!("== Tap on Item 1 ==");
    rows[0].pointer_down(Point::new(100.0, 30.0));
    assert_eq!(rows[0].pointer_up(), None);

    println!("== Wobble under the minimum distance on Item 2 ==");
    let effects = swipe(&mut rows[1], Point::new(100.0, 30.0), Point::new(115.0, 38.0), 5);
    assert!(effects.is_empty());
    assert_eq!(rows[1].controller().offset(), 0.0);
    assert_eq!(rows[1].pointer_up(), None);

    println!("== Leading swipe on Item 3 ==");
    let effects = swipe(&mut rows[2], Point::new(20.0, 30.0), Point::new(260.0, 34.0), 8);
    println!("  effects {effects:?}");
    assert_eq!(rows[2].pointer_up(), Some(SwipeEffect::Dispatched(Edge::Leading)));

    println!("== Cancelled trailing swipe on Item 4 ==");
    let _ = swipe(&mut rows[3], Point::new(380.0, 30.0), Point::new(100.0, 30.0), 4);
    assert_eq!(rows[3].cancel(), Some(SwipeEffect::Dispatched(Edge::Trailing)));
    assert!(!rows[3].is_dragging());

    println!("== Actions ==");
    for line in log.borrow().iter() {
        println!("  {line}");
    }
    assert_eq!(
        *log.borrow(),
        vec![
            "leading action on Item 3".to_string(),
            "trailing action on Item 4".to_string(),
        ]
    );
    assert!(rows.iter().all(|r| r.layout().content == r.layout().clip));
}
