// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brackets Overlay: the visual model of a bracket highlight.
//!
//! A bracket overlay is a non-interactive element appended inside the region it
//! decorates. It never affects layout or hit testing; its appearance is driven
//! entirely by a small set of state tags and two custom properties, which the
//! host's styling layer maps to pixels.
//!
//! - [`BracketProps`]: per-region configuration (disabled, focus-only, offset,
//!   size, selected, render override, overlay target).
//! - [`Interaction`]: the live hover/focus state of a region.
//! - [`StateTags`]: the tag set derived from props and interaction, with the
//!   class name of each tag.
//! - [`OverlayStyle`]: everything a host needs to restyle the overlay in one
//!   call: tags, offset, size and [`Visibility`].
//! - [`overlay_bounds`]: overlay geometry relative to its host element.
//!
//! ## Example
//!
//! ```rust
//! use brackets_overlay::{BracketProps, Interaction, OverlayStyle, StateTags, Visibility};
//!
//! let props = BracketProps {
//!     offset: Some(4.0),
//!     ..BracketProps::default()
//! };
//! let hovered = Interaction {
//!     hovering: true,
//!     ..Interaction::default()
//! };
//!
//! let style = OverlayStyle::compute(&props, hovered);
//! assert_eq!(style.tags, StateTags::HOVERING);
//! assert_eq!(style.classes().collect::<Vec<_>>(), ["hovering"]);
//! assert_eq!(style.offset_value().as_deref(), Some("4px"));
//! assert_eq!(style.size, "0.5rem");
//! assert_eq!(style.visibility, Visibility::Auto);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`BracketProps`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod props;
mod style;
mod tags;

pub use props::{BracketProps, DEFAULT_SIZE};
pub use style::{
    HELPER_CLASS, Interaction, OFFSET_PROPERTY, OVERLAY_CLASS, OverlayStyle, SIZE_PROPERTY,
    Visibility, overlay_bounds,
};
pub use tags::StateTags;
