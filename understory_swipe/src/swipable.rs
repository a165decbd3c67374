// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipable container: content, recognizer, and controller wired together.
//!
//! [`Swipable`] is what a host creates per row. It owns the row's content (opaque to this crate),
//! gates raw pointer input through a [`HorizontalDragRecognizer`] configured from the tuning's
//! minimum drag distance, drives a [`SwipeController`], and produces a [`SwipeLayout`] on demand.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_swipe::config::SwipeConfig;
//! use understory_swipe::swipable::Swipable;
//! use understory_swipe::types::{Edge, SwipeEffect};
//!
//! let config = SwipeConfig::builder()
//!     .leading("flag", "orange", || {})
//!     .build()
//!     .unwrap();
//! let mut row = Swipable::new("Person Name", config);
//! row.measure(Size::new(300.0, 56.0));
//!
//! row.pointer_down(Point::new(10.0, 20.0));
//! row.pointer_move(Point::new(200.0, 22.0));
//! assert_eq!(row.pointer_up(), Some(SwipeEffect::Dispatched(Edge::Leading)));
//! assert_eq!(*row.content(), "Person Name");
//! ```

use kurbo::{Point, Size};

use crate::config::SwipeConfig;
use crate::controller::SwipeController;
use crate::gesture::{DragEvent, HorizontalDragRecognizer};
use crate::haptics::{HapticFeedback, NoHaptics};
use crate::layout::SwipeLayout;
use crate::types::SwipeEffect;

/// A row of content `T` that can be swiped toward its configured edges.
pub struct Swipable<T, I, C, H: HapticFeedback = NoHaptics> {
    content: T,
    content_size: Size,
    recognizer: HorizontalDragRecognizer,
    controller: SwipeController<I, C, H>,
}

impl<T: core::fmt::Debug, I, C, H: HapticFeedback> core::fmt::Debug for Swipable<T, I, C, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Swipable")
            .field("content", &self.content)
            .field("content_size", &self.content_size)
            .field("recognizer", &self.recognizer)
            .field("controller", &self.controller)
            .finish()
    }
}

impl<T, I, C> Swipable<T, I, C, NoHaptics> {
    /// Wrap `content` without haptic feedback.
    pub fn new(content: T, config: SwipeConfig<I, C>) -> Self {
        Self::with_haptics(content, config, NoHaptics)
    }
}

impl<T, I, C, H: HapticFeedback> Swipable<T, I, C, H> {
    /// Wrap `content`, pulsing `haptics` on selection transitions.
    pub fn with_haptics(content: T, config: SwipeConfig<I, C>, haptics: H) -> Self {
        let recognizer = HorizontalDragRecognizer::new(config.tuning().min_drag_distance);
        Self {
            content,
            content_size: Size::ZERO,
            recognizer,
            controller: SwipeController::with_haptics(config, haptics),
        }
    }

    /// The wrapped content.
    pub fn content(&self) -> &T {
        &self.content
    }

    /// Mutable access to the wrapped content.
    pub fn content_mut(&mut self) -> &mut T {
        &mut self.content
    }

    /// Unwrap the content, dropping the swipe state.
    pub fn into_content(self) -> T {
        self.content
    }

    /// The state machine.
    pub fn controller(&self) -> &SwipeController<I, C, H> {
        &self.controller
    }

    /// Mutable access to the state machine, for subscribing observers.
    pub fn controller_mut(&mut self) -> &mut SwipeController<I, C, H> {
        &mut self.controller
    }

    /// Last measured content size.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.recognizer.is_dragging()
    }

    /// Layout callback: the content was measured at `size`.
    ///
    /// Non-finite or negative extents are stored as zero.
    pub fn measure(&mut self, size: Size) {
        let sanitize = |v: f64| if v.is_finite() && v >= 0.0 { v } else { 0.0 };
        let sanitized = Size::new(sanitize(size.width), sanitize(size.height));
        if sanitized != size {
            log::warn!("invalid content size {size:?}; using {sanitized:?}");
        }
        self.content_size = sanitized;
        self.controller.on_content_measured(sanitized.width);
    }

    /// A press landed on the row, in local coordinates.
    pub fn pointer_down(&mut self, position: Point) {
        self.recognizer.pointer_down(position);
    }

    /// The pressed pointer moved.
    pub fn pointer_move(&mut self, position: Point) -> Option<SwipeEffect> {
        let event = self.recognizer.pointer_move(position);
        self.forward(event)
    }

    /// The pressed pointer lifted.
    pub fn pointer_up(&mut self) -> Option<SwipeEffect> {
        let event = self.recognizer.pointer_up();
        self.forward(event)
    }

    /// The host cancelled the gesture. A started drag ends without losing its reset.
    pub fn cancel(&mut self) -> Option<SwipeEffect> {
        let event = self.recognizer.cancel();
        self.forward(event)
    }

    /// Geometry for the current frame.
    pub fn layout(&self) -> SwipeLayout {
        SwipeLayout::compute(&self.controller.state(), self.content_size)
    }

    fn forward(&mut self, event: Option<DragEvent>) -> Option<SwipeEffect> {
        event.and_then(|e| self.controller.apply(e))
    }
}
