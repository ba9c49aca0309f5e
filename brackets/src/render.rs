// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay rendering: push a region's style and geometry to the surface.

use brackets_overlay::overlay_bounds;

use crate::Surface;
use crate::region::Region;

/// Recompute the region's state tags and properties and apply them.
pub(crate) fn apply_visual_state<S: Surface>(surface: &mut S, region: &Region<S>) {
    let style = region.style();
    surface.apply_style(&region.overlay, &style);
}

/// Size the overlay to the current bounding box of its host.
pub(crate) fn apply_geometry<S: Surface>(surface: &mut S, region: &Region<S>) {
    let host_box = surface.bounding_box(&region.target);
    surface.set_overlay_bounds(&region.overlay, overlay_bounds(host_box));
}

/// Full render pass: visual state, then geometry.
pub(crate) fn render<S: Surface>(surface: &mut S, region: &Region<S>) {
    apply_visual_state(surface, region);
    apply_geometry(surface, region);
}
