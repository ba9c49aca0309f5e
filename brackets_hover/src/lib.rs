// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brackets Hover: arbitration between nested, simultaneously entered regions.
//!
//! ## Overview
//!
//! When regions nest, a single pointer position is "inside" several of them at
//! once, and the host delivers an enter notification for each. Only one of them
//! should show a hover affordance. [`HoverStack`] keeps the entered regions in
//! enter order and grants hover to exactly one: the most recently entered key
//! still on the stack.
//!
//! Enter notifications for nested regions arrive outside-in (an ancestor is
//! entered before its descendant), so the most recently entered key is the
//! deepest region under the pointer. No depth computation is needed.
//!
//! ## Transitions
//!
//! Every mutating call returns the [`HoverChange`] list needed to go from the
//! previous grant to the new one. Losses are always reported before the gain, and
//! a leave of the granted key reports its loss before any parent regains hover.
//!
//! ```rust
//! use brackets_hover::{HoverChange, HoverStack};
//!
//! let mut stack = HoverStack::new();
//!
//! // Pointer enters an outer card, then a button inside it.
//! assert_eq!(stack.enter(1).as_slice(), &[HoverChange::Gained(1)]);
//! assert_eq!(
//!     stack.enter(2).as_slice(),
//!     &[HoverChange::Lost(1), HoverChange::Gained(2)]
//! );
//!
//! // Leaving the button hands hover back to the card.
//! assert_eq!(
//!     stack.leave(&2).as_slice(),
//!     &[HoverChange::Lost(2), HoverChange::Gained(1)]
//! );
//!
//! // Resolving again without intervening events changes nothing.
//! assert!(stack.resolve().is_empty());
//! ```
//!
//! The stack has no notion of regions that opt out of hover; callers simply
//! never enter them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use smallvec::SmallVec;

/// A single hover grant transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverChange<K> {
    /// `K` was hovering and no longer is.
    Lost(K),
    /// `K` is now the hovering region.
    Gained(K),
}

impl<K> HoverChange<K> {
    /// The key this change applies to.
    pub fn key(&self) -> &K {
        match self {
            Self::Lost(k) | Self::Gained(k) => k,
        }
    }

    /// The hover value the key holds after this change.
    pub fn hovering(&self) -> bool {
        matches!(self, Self::Gained(_))
    }

    /// Split into `(key, hovering)`.
    pub fn into_parts(self) -> (K, bool) {
        match self {
            Self::Lost(k) => (k, false),
            Self::Gained(k) => (k, true),
        }
    }
}

/// Changes produced by one stack operation.
///
/// An operation reports at most one loss and one gain on resolve, plus the
/// eager loss emitted by [`HoverStack::leave`].
pub type HoverChanges<K> = SmallVec<[HoverChange<K>; 3]>;

/// Ordered set of entered regions plus the region currently granted hover.
///
/// ## Usage
///
/// - Call [`HoverStack::enter`] on pointer-enter and [`HoverStack::leave`] on
///   pointer-leave (or when a region goes away).
/// - Apply the returned [`HoverChange`]s in order.
/// - [`HoverStack::resolve`] recomputes the grant; it is idempotent.
#[derive(Clone, Debug)]
pub struct HoverStack<K> {
    /// Entered keys in enter order. No duplicates.
    entries: Vec<K>,
    /// The key currently granted hover, if any.
    granted: Option<K>,
}

impl<K> Default for HoverStack<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            granted: None,
        }
    }
}

impl<K: Copy + Eq> HoverStack<K> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the pointer entered `key` and re-resolve.
    ///
    /// Entering a key that is already on the stack does not move it.
    pub fn enter(&mut self, key: K) -> HoverChanges<K> {
        if !self.entries.contains(&key) {
            self.entries.push(key);
        }
        self.resolve()
    }

    /// Record that the pointer left `key` and re-resolve.
    ///
    /// If `key` holds the grant, its loss is reported first, before the key is
    /// removed and a new top is selected. Leaving a key that is not on the
    /// stack only re-resolves, which yields nothing when the stack is settled.
    pub fn leave(&mut self, key: &K) -> HoverChanges<K> {
        let mut changes = HoverChanges::new();
        if self.granted.as_ref() == Some(key) {
            self.granted = None;
            changes.push(HoverChange::Lost(*key));
        }
        if let Some(idx) = self.entries.iter().position(|k| k == key) {
            self.entries.remove(idx);
        }
        changes.extend(self.resolve());
        changes
    }

    /// Recompute which key holds the grant.
    ///
    /// The most recently entered key on the stack wins. Every other key loses
    /// the grant; an empty stack grants nothing.
    pub fn resolve(&mut self) -> HoverChanges<K> {
        let mut changes = HoverChanges::new();
        let top = self.top();
        if self.granted == top {
            return changes;
        }
        if let Some(old) = self.granted.take() {
            changes.push(HoverChange::Lost(old));
        }
        if let Some(new) = top {
            changes.push(HoverChange::Gained(new));
        }
        self.granted = top;
        changes
    }

    /// The most recently entered key still on the stack.
    pub fn top(&self) -> Option<K> {
        self.entries.last().copied()
    }

    /// The key currently granted hover.
    pub fn hovered(&self) -> Option<K> {
        self.granted
    }

    /// Whether `key` is on the stack.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains(key)
    }

    /// Number of entered keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key is entered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entered keys in enter order (outermost first).
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.entries.iter()
    }

    /// Drop every entry and report the loss of the current grant, if any.
    pub fn clear(&mut self) -> HoverChanges<K> {
        self.entries.clear();
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn changes<K: Copy>(c: HoverChanges<K>) -> Vec<HoverChange<K>> {
        c.into_iter().collect()
    }

    #[test]
    fn single_entry_is_granted() {
        let mut stack = HoverStack::new();
        assert_eq!(changes(stack.enter(7)), vec![HoverChange::Gained(7)]);
        assert_eq!(stack.hovered(), Some(7));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn innermost_of_nested_chain_wins() {
        let mut stack = HoverStack::new();
        for k in 1..=4 {
            let _ = stack.enter(k);
        }
        assert_eq!(stack.hovered(), Some(4));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn losses_are_reported_before_gains() {
        let mut stack = HoverStack::new();
        let _ = stack.enter(1);
        assert_eq!(
            changes(stack.enter(2)),
            vec![HoverChange::Lost(1), HoverChange::Gained(2)]
        );
    }

    #[test]
    fn leave_restores_parent() {
        let mut stack = HoverStack::new();
        let _ = stack.enter(1);
        let _ = stack.enter(2);
        assert_eq!(
            changes(stack.leave(&2)),
            vec![HoverChange::Lost(2), HoverChange::Gained(1)]
        );
        assert_eq!(stack.hovered(), Some(1));
    }

    #[test]
    fn leave_of_last_entry_clears_grant() {
        let mut stack = HoverStack::new();
        let _ = stack.enter(1);
        assert_eq!(changes(stack.leave(&1)), vec![HoverChange::Lost(1)]);
        assert_eq!(stack.hovered(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn leaving_an_ancestor_keeps_the_descendant() {
        let mut stack = HoverStack::new();
        let _ = stack.enter(1);
        let _ = stack.enter(2);
        // Out-of-order leave (e.g. the ancestor is torn down first).
        assert!(stack.leave(&1).is_empty());
        assert_eq!(stack.hovered(), Some(2));
        assert!(!stack.contains(&1));
    }

    #[test]
    fn duplicate_enter_is_a_noop() {
        let mut stack = HoverStack::new();
        let _ = stack.enter(1);
        let _ = stack.enter(2);
        assert!(stack.enter(1).is_empty());
        assert_eq!(stack.len(), 2);
        // Re-entering does not move the key to the top.
        assert_eq!(stack.top(), Some(2));
    }

    #[test]
    fn leave_without_enter_is_a_noop() {
        let mut stack: HoverStack<u32> = HoverStack::new();
        assert!(stack.leave(&9).is_empty());
        let _ = stack.enter(1);
        assert!(stack.leave(&9).is_empty());
        assert_eq!(stack.hovered(), Some(1));
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut stack = HoverStack::new();
        let _ = stack.enter(1);
        let _ = stack.enter(2);
        assert!(stack.resolve().is_empty());
        assert!(stack.resolve().is_empty());
    }

    #[test]
    fn clear_reports_loss() {
        let mut stack = HoverStack::new();
        let _ = stack.enter(1);
        let _ = stack.enter(2);
        assert_eq!(changes(stack.clear()), vec![HoverChange::Lost(2)]);
        assert!(stack.clear().is_empty());
    }

    #[test]
    fn change_accessors() {
        assert_eq!(HoverChange::Gained(3).into_parts(), (3, true));
        assert_eq!(HoverChange::Lost(3).into_parts(), (3, false));
        assert!(HoverChange::Gained(1).hovering());
        assert_eq!(*HoverChange::Lost(5).key(), 5);
    }
}
