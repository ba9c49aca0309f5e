// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State tags applied to an overlay.

bitflags::bitflags! {
    /// Visual state tags of an overlay.
    ///
    /// Each tag maps to one class name (see [`StateTags::class_name`]); the
    /// host's stylesheet decides what each combination looks like.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StateTags: u8 {
        /// The region holds the hover grant.
        const HOVERING              = 0b0000_0001;
        /// The region is focused.
        const FOCUSED               = 0b0000_0010;
        /// The focus came from the keyboard.
        const FOCUS_ORIGIN_KEYBOARD = 0b0000_0100;
        /// The region is a keyboard focus ring only.
        const FOCUS_ONLY            = 0b0000_1000;
        /// The region is disabled.
        const ITEM_DISABLED         = 0b0001_0000;
        /// The region is persistently selected.
        const SELECTED              = 0b0010_0000;
    }
}

const CLASS_NAMES: [(StateTags, &str); 6] = [
    (StateTags::HOVERING, "hovering"),
    (StateTags::FOCUSED, "focused"),
    (StateTags::FOCUS_ORIGIN_KEYBOARD, "focus-origin-keyboard"),
    (StateTags::FOCUS_ONLY, "focus-only"),
    (StateTags::ITEM_DISABLED, "item-disabled"),
    (StateTags::SELECTED, "selected"),
];

impl StateTags {
    /// Class name of a single tag, or `None` for empty or combined sets.
    pub fn class_name(self) -> Option<&'static str> {
        CLASS_NAMES
            .iter()
            .find(|(tag, _)| *tag == self)
            .map(|(_, name)| *name)
    }

    /// Class names of every tag in the set, in declaration order.
    pub fn class_names(self) -> impl Iterator<Item = &'static str> {
        CLASS_NAMES
            .into_iter()
            .filter(move |(tag, _)| self.contains(*tag))
            .map(|(_, name)| name)
    }

    /// Every tag paired with whether it is set, for hosts that toggle classes
    /// one by one.
    pub fn class_toggles(self) -> impl Iterator<Item = (&'static str, bool)> {
        CLASS_NAMES
            .into_iter()
            .map(move |(tag, name)| (name, self.contains(tag)))
    }

    /// Whether the set describes a visible bracket.
    ///
    /// Brackets show while a hoverable region is hovered, while a region is
    /// focused, or while it is selected. Hosts with a stylesheet usually derive
    /// this from the classes instead.
    pub fn shows_brackets(self) -> bool {
        (self.contains(Self::HOVERING) && !self.contains(Self::FOCUS_ONLY))
            || self.contains(Self::FOCUSED)
            || self.contains(Self::SELECTED)
    }
}
