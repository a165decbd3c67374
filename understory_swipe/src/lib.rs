// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: a toolkit-agnostic, `no_std` swipe-to-act state machine.
//!
//! ## Overview
//!
//! A swipable row wraps arbitrary content and reveals a leading or trailing action as the user
//! drags the content horizontally. Past a distance threshold the row commits to that action, and
//! releasing runs it. This crate holds the part of that widget that is logic rather than drawing:
//! the gesture-to-state mapping and the commit/cancel state machine.
//!
//! It does not render, animate, or hit test. A host toolkit forwards layout measurements and
//! pointer input, and draws from the state (or the computed [`SwipeLayout`](crate::layout::SwipeLayout)).
//!
//! ## Pieces
//!
//! - [`SwipeController`](crate::controller::SwipeController): drag offset, selection with
//!   hysteresis, haptic pulses, action dispatch.
//! - [`SwipeConfig`](crate::config::SwipeConfig): the per-edge `(icon, color, action)` triples and
//!   [`SwipeTuning`](crate::config::SwipeTuning), assembled by a fluent builder.
//! - [`HorizontalDragRecognizer`](crate::gesture::HorizontalDragRecognizer): withholds translation
//!   until the pointer has travelled a minimum distance, so taps and vertical scrolls stay taps
//!   and scrolls.
//! - [`SwipeLayout`](crate::layout::SwipeLayout): content and affordance rectangles as a pure
//!   function of the state.
//! - [`SwipeObserver`](crate::observer::SwipeObserver): change notification for renderers.
//! - [`HapticFeedback`](crate::haptics::HapticFeedback): the pulse sink.
//! - [`Swipable`](crate::swipable::Swipable): all of the above for one row.
//!
//! ## Behavior
//!
//! With content width `w = 200`, default tuning, and both edges configured, an update commits
//! past `w / 2 = 100` and releases below `100 - 20 = 80`:
//!
//! | drag to | offset | selection | pulses |
//! |---------|--------|-----------|--------|
//! | 150     | 150    | leading   | 1      |
//! | 85      | 85     | leading   | 1      |
//! | 70      | 70     | none      | 2      |
//! | release | 0      | none      | 2      |
//!
//! Releasing with a selection runs that edge's action once, before the reset.
//!
//! ```
//! use understory_swipe::config::SwipeConfig;
//! use understory_swipe::controller::SwipeController;
//! use understory_swipe::haptics::ImpactStyle;
//! use understory_swipe::types::Edge;
//!
//! let mut pulses = Vec::new();
//! let config = SwipeConfig::builder()
//!     .leading("pin", "purple", || println!("pinned"))
//!     .trailing("delete", "red", || println!("deleted"))
//!     .build()
//!     .unwrap();
//! let mut c = SwipeController::with_haptics(config, |s: ImpactStyle| pulses.push(s));
//! c.on_content_measured(200.0);
//!
//! c.on_drag_update(150.0);
//! c.on_drag_update(85.0);
//! assert_eq!(c.selection(), Some(Edge::Leading));
//! c.on_drag_update(70.0);
//! assert_eq!(c.selection(), None);
//! assert_eq!(c.on_drag_end(), None);
//! assert_eq!(c.offset(), 0.0);
//! drop(c);
//! assert_eq!(pulses.len(), 2);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`. Diagnostics go through the [`log`] facade.

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod gesture;
pub mod haptics;
pub mod layout;
pub mod observer;
pub mod swipable;
pub mod types;
