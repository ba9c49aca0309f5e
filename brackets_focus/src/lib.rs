// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brackets Focus: focus-origin classification and focus history.
//!
//! This crate answers two questions a focus ring needs answered:
//!
//! - **Was this focus caused by the keyboard?** [`FocusOrigin`] tracks the
//!   modality of the most recent focus-causing input. A key-down marks the
//!   keyboard as the origin; a pointer-down marks the pointer. Native focus
//!   rings only show for keyboard-driven focus and disappear as soon as the
//!   pointer is used again, and [`FocusOrigin`] reproduces that.
//! - **Should this region show focus at all?** [`FocusDecision::classify`]
//!   combines the origin with a region's "focus only" opt-in: regions that
//!   exist purely as keyboard focus rings are only marked focused when the
//!   keyboard moved focus there.
//!
//! [`FocusHistory`] additionally remembers the most recently focused key so a
//! host can restore focus after a transient view closes.
//!
//! ## Minimal example
//!
//! ```rust
//! use brackets_focus::{FocusDecision, FocusOrigin};
//!
//! let mut origin = FocusOrigin::new();
//!
//! // Tab into a focus-only region: it shows a keyboard ring.
//! origin.on_key_down();
//! let d = FocusDecision::classify(true, origin.is_keyboard());
//! assert!(d.focused && d.origin_keyboard);
//!
//! // Clicking into it instead does not mark it focused.
//! origin.on_pointer_down();
//! let d = FocusDecision::classify(true, origin.is_keyboard());
//! assert!(!d.focused);
//!
//! // Regular regions are focused either way, but only keyboard focus is
//! // flagged as keyboard-originated.
//! let d = FocusDecision::classify(false, origin.is_keyboard());
//! assert!(d.focused && !d.origin_keyboard);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use core::hash::Hash;

use hashbrown::HashSet;

/// Input modality that most recently moved focus.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Modality {
    /// A pointer-down-class input (mouse, pen, touch).
    #[default]
    Pointer,
    /// A key-down-class input.
    Keyboard,
}

/// Tracks whether the most recent focus-causing input was keyboard or pointer.
///
/// The state only changes through [`FocusOrigin::on_key_down`] and
/// [`FocusOrigin::on_pointer_down`]; region-local focus and blur notifications
/// read it but never write it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusOrigin {
    modality: Modality,
}

impl FocusOrigin {
    /// Create a classifier that starts in pointer modality.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down-class input.
    pub fn on_key_down(&mut self) {
        self.modality = Modality::Keyboard;
    }

    /// Record a pointer-down-class input.
    ///
    /// Returns `true` if this switched the origin away from the keyboard, in
    /// which case callers should clear any keyboard-origin focus styling.
    pub fn on_pointer_down(&mut self) -> bool {
        let was_keyboard = self.is_keyboard();
        self.modality = Modality::Pointer;
        was_keyboard
    }

    /// Whether the most recent focus-causing input was the keyboard.
    pub fn is_keyboard(&self) -> bool {
        self.modality == Modality::Keyboard
    }

    /// The current modality.
    pub fn modality(&self) -> Modality {
        self.modality
    }
}

/// Focus state a region should take when it receives focus.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FocusDecision {
    /// The region is marked focused.
    pub focused: bool,
    /// The region is focused and the focus came from the keyboard.
    ///
    /// Always `false` when `focused` is `false`.
    pub origin_keyboard: bool,
}

impl FocusDecision {
    /// The cleared state, as after blur or when a region is disabled.
    pub const CLEARED: Self = Self {
        focused: false,
        origin_keyboard: false,
    };

    /// Decide how a region reacts to gaining focus.
    ///
    /// Focus-only regions are only marked focused when `keyboard` is set;
    /// other regions are always marked focused.
    pub fn classify(focus_only: bool, keyboard: bool) -> Self {
        let focused = !focus_only || keyboard;
        Self {
            focused,
            origin_keyboard: focused && keyboard,
        }
    }
}

/// Remembers the most recently focused key.
///
/// Keys in the ignore set are never recorded, and nothing is recorded while
/// the history is paused (for example while an auxiliary overlay owns focus).
#[derive(Clone, Debug)]
pub struct FocusHistory<K> {
    last: Option<K>,
    ignored: HashSet<K>,
    paused: bool,
}

impl<K> Default for FocusHistory<K> {
    fn default() -> Self {
        Self {
            last: None,
            ignored: HashSet::new(),
            paused: false,
        }
    }
}

impl<K: Copy + Eq + Hash> FocusHistory<K> {
    /// Create an empty, unpaused history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `key` received focus.
    ///
    /// Returns `true` when the key was recorded.
    pub fn record(&mut self, key: K) -> bool {
        if self.paused || self.ignored.contains(&key) {
            return false;
        }
        self.last = Some(key);
        true
    }

    /// The most recently recorded key.
    pub fn last(&self) -> Option<K> {
        self.last
    }

    /// Never record `key` from now on.
    pub fn ignore(&mut self, key: K) {
        self.ignored.insert(key);
    }

    /// Start recording `key` again.
    pub fn unignore(&mut self, key: &K) {
        self.ignored.remove(key);
    }

    /// Whether `key` is in the ignore set.
    pub fn is_ignored(&self, key: &K) -> bool {
        self.ignored.contains(key)
    }

    /// Pause or resume recording.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Whether recording is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Drop every trace of `key`, e.g. when its region is destroyed.
    pub fn forget(&mut self, key: &K) {
        if self.last.as_ref() == Some(key) {
            self.last = None;
        }
        self.ignored.remove(key);
    }
}
