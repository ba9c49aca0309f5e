// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brackets: a deterministic, `no_std` controller for bracket overlays.
//!
//! ## Overview
//!
//! A bracket overlay is a non-interactive highlight drawn inside a UI element
//! to show that it is hovered, keyboard focused, or selected. This crate owns
//! the interaction logic behind those highlights for any number of nested
//! regions:
//!
//! - **Region registration**: [`Brackets::register`] attaches one overlay to a
//!   region and subscribes to its notifications; [`Brackets::update`] swaps its
//!   config; [`Brackets::unregister`] tears everything down.
//! - **Hover arbitration**: of all regions currently under the pointer, only
//!   the most recently entered (the deepest) one shows hover. Focus-only
//!   regions never take part. See [`brackets_hover`].
//! - **Focus origin**: keyboard focus shows a focus ring; pointer focus does
//!   not show one on focus-only regions, and any pointer-down removes
//!   keyboard-origin styling everywhere. See [`brackets_focus`].
//! - **Geometry synchronization**: overlays follow their host's size as it
//!   resizes or becomes visible.
//!
//! It does not hit test, lay out, or paint. The host describes its elements
//! through the [`Surface`] trait and forwards native notifications as method
//! calls.
//!
//! ## Workflow
//!
//! 1) Implement [`Surface`] for your toolkit and build a [`Brackets`] around it.
//! 2) Register each interactive region with its [`BracketProps`] and optional
//!    observers ([`RegionConfig`]). Keep the [`RegionId`].
//! 3) When [`Surface::subscribe`] was asked for a [`Channel`], deliver that
//!    channel's notifications for the region: `pointer_enter`/`pointer_leave`,
//!    `focus`/`blur`, `resized`, `visibility_changed`.
//! 4) Deliver global `key_down` and `pointer_down` notifications.
//! 5) Map [`OverlayStyle`] (state tags, offset, size, visibility) to your
//!    styling in [`Surface::apply_style`].
//!
//! Every call is synchronous: when it returns, region state, observer
//! callbacks and surface updates are complete. Stale handles, leaves without
//! an enter, and blurs without a focus are no-ops.
//!
//! The `brackets_demos` crate in this workspace contains a complete text-mode
//! [`Surface`] that drives nested regions end to end.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for [`BracketProps`].
//!
//! Diagnostics are emitted through `tracing` at `debug` (lifecycle) and `trace`
//! (transitions) levels; install a subscriber in the host to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod geometry;
mod region;
mod registry;
mod render;
mod surface;

#[cfg(test)]
mod mock;

pub use brackets_focus::FocusHistory;
pub use brackets_overlay::{
    BracketProps, HELPER_CLASS, OFFSET_PROPERTY, OVERLAY_CLASS, OverlayStyle, SIZE_PROPERTY,
    StateTags, Visibility,
};
pub use controller::Brackets;
pub use region::{Observer, RegionConfig, RegionState};
pub use registry::RegionId;
pub use surface::{Channel, Surface};
