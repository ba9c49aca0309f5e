// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay style and geometry computation.

use alloc::format;
use alloc::string::String;
use kurbo::{Point, Rect};

use crate::props::BracketProps;
use crate::tags::StateTags;

/// Class name of the overlay root element.
pub const OVERLAY_CLASS: &str = "brackets-overlay";

/// Class name of the decoration element inside the overlay root.
pub const HELPER_CLASS: &str = "bracket-helper";

/// Custom property carrying [`BracketProps::offset`].
pub const OFFSET_PROPERTY: &str = "--bracket-offset";

/// Custom property carrying [`BracketProps::size`].
pub const SIZE_PROPERTY: &str = "--bracket-size";

/// Live interaction state of a region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Interaction {
    /// The region holds the hover grant.
    pub hovering: bool,
    /// The region is focused.
    pub focused: bool,
    /// The focus came from the keyboard.
    pub focus_origin_keyboard: bool,
}

/// Whether the overlay may be displayed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Let the stylesheet decide from the state tags.
    #[default]
    Auto,
    /// Hidden regardless of state.
    Hidden,
}

/// Everything needed to restyle one overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayStyle<'a> {
    /// State tags to apply as classes.
    pub tags: StateTags,
    /// Inset in pixels, if configured.
    pub offset: Option<f64>,
    /// Thickness, passed through verbatim.
    pub size: &'a str,
    /// Display override.
    pub visibility: Visibility,
}

impl<'a> OverlayStyle<'a> {
    /// Derive the overlay style of a region from its props and interaction state.
    pub fn compute(props: &'a BracketProps, interaction: Interaction) -> Self {
        let mut tags = StateTags::empty();
        tags.set(StateTags::HOVERING, interaction.hovering);
        tags.set(StateTags::FOCUSED, interaction.focused);
        tags.set(
            StateTags::FOCUS_ORIGIN_KEYBOARD,
            interaction.focus_origin_keyboard,
        );
        tags.set(StateTags::FOCUS_ONLY, props.focus_only);
        tags.set(StateTags::ITEM_DISABLED, props.disabled);
        tags.set(StateTags::SELECTED, props.selected);

        Self {
            tags,
            offset: props.offset,
            size: &props.size,
            visibility: if props.render_suppressed() {
                Visibility::Hidden
            } else {
                Visibility::Auto
            },
        }
    }

    /// Class names to apply, in a stable order.
    pub fn classes(&self) -> impl Iterator<Item = &'static str> {
        self.tags.class_names()
    }

    /// Value of [`OFFSET_PROPERTY`], e.g. `"4px"`.
    pub fn offset_value(&self) -> Option<String> {
        self.offset.map(|offset| format!("{offset}px"))
    }

    /// Whether the overlay would be displayed by a stylesheet that shows
    /// brackets for every visible tag.
    pub fn is_displayed(&self) -> bool {
        self.visibility == Visibility::Auto && self.tags.shows_brackets()
    }
}

/// Overlay bounds for a host element with bounding box `host_box`.
///
/// The overlay is a child of its host, so it is anchored at the host's local
/// origin and only takes the host's size.
pub fn overlay_bounds(host_box: Rect) -> Rect {
    Rect::from_origin_size(Point::ORIGIN, host_box.size())
}
