// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation geometry derived from a [`SwipeState`].
//!
//! [`SwipeLayout::compute`] is a pure function of the state snapshot and the content size. It
//! places, in the row's local coordinates:
//! - the content, shifted horizontally by the offset;
//! - the leading affordance background, exactly one content width to the left of the content;
//! - the trailing affordance background, exactly one content width to the right of it.
//!
//! The row clips to `(0, 0)..content_size`, so an affordance only becomes visible as the content
//! slides away from it. Icons are shown only while their side is being revealed.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_swipe::layout::SwipeLayout;
//! use understory_swipe::types::{Edge, SwipeState};
//!
//! let state = SwipeState { offset: 60.0, selection: None, content_width: 200.0 };
//! let layout = SwipeLayout::compute(&state, Size::new(200.0, 44.0));
//! assert_eq!(layout.content, Rect::new(60.0, 0.0, 260.0, 44.0));
//! assert_eq!(layout.background(Edge::Leading), Rect::new(-140.0, 0.0, 60.0, 44.0));
//! assert!(layout.icon_visible(Edge::Leading));
//! assert!(!layout.icon_visible(Edge::Trailing));
//! ```

use kurbo::{Rect, Size};

use crate::types::{Edge, SwipeState};

/// Rectangles and visibility for one frame of a swipable row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeLayout {
    /// Clip of the whole row.
    pub clip: Rect,
    /// Where the wrapped content is drawn.
    pub content: Rect,
    /// Background of the leading affordance.
    pub leading_background: Rect,
    /// Background of the trailing affordance.
    pub trailing_background: Rect,
    /// Edge to draw fully highlighted (the committed selection).
    pub highlighted: Option<Edge>,
    revealed: Option<Edge>,
}

impl SwipeLayout {
    /// Lay out a row of `content_size` for `state`.
    pub fn compute(state: &SwipeState, content_size: Size) -> Self {
        let (w, h) = (content_size.width, content_size.height);
        let x = state.offset;
        Self {
            clip: Rect::new(0.0, 0.0, w, h),
            content: Rect::new(x, 0.0, x + w, h),
            leading_background: Rect::new(x - w, 0.0, x, h),
            trailing_background: Rect::new(x + w, 0.0, x + 2.0 * w, h),
            highlighted: state.selection,
            revealed: state.revealed_edge(),
        }
    }

    /// Background rectangle for `edge`.
    pub fn background(&self, edge: Edge) -> Rect {
        match edge {
            Edge::Leading => self.leading_background,
            Edge::Trailing => self.trailing_background,
        }
    }

    /// Whether the icon for `edge` should be drawn (its side is being revealed).
    pub fn icon_visible(&self, edge: Edge) -> bool {
        self.revealed == Some(edge)
    }

    /// The visible part of `edge`'s background, or `None` when fully hidden.
    pub fn revealed_area(&self, edge: Edge) -> Option<Rect> {
        let area = self.background(edge).intersect(self.clip);
        (area.width() > 0.0 && area.height() > 0.0).then_some(area)
    }
}
