// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Haptic feedback sink.
//!
//! The controller pulses the sink once per selection transition. Platforms plug in their
//! impact generator by implementing [`HapticFeedback`]; closures taking an [`ImpactStyle`]
//! implement it too.
//!
//! ```
//! use understory_swipe::haptics::{HapticFeedback, ImpactStyle};
//!
//! let mut pulses = 0;
//! let mut sink = |_: ImpactStyle| pulses += 1;
//! sink.impact_occurred(ImpactStyle::Medium);
//! assert_eq!(pulses, 1);
//! ```

/// Strength of an impact pulse.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ImpactStyle {
    /// A light tap.
    Light,
    /// The default pulse used for selection transitions.
    #[default]
    Medium,
    /// A strong thud.
    Heavy,
}

/// Receiver of haptic pulses.
pub trait HapticFeedback {
    /// Play a single impact. Must not block.
    fn impact_occurred(&mut self, style: ImpactStyle);
}

impl<F: FnMut(ImpactStyle)> HapticFeedback for F {
    #[inline]
    fn impact_occurred(&mut self, style: ImpactStyle) {
        self(style);
    }
}

/// A sink that drops every pulse. Used when a host has no haptics hardware.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    #[inline]
    fn impact_occurred(&mut self, _style: ImpactStyle) {}
}
