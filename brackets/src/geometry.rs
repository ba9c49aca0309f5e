// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry synchronization: keep overlay bounds in step with host layout.
//!
//! Each region subscribes its overlay host to [`Channel::Resize`] and
//! [`Channel::Visibility`] at registration. Any resize re-reads the host's
//! bounding box. A visibility change only does so when the host became
//! visible, which covers hosts laid out while hidden (and therefore measured
//! with a stale or zero box).

use smallvec::SmallVec;
use tracing::trace;

use crate::render;
use crate::{Brackets, Channel, RegionId, Surface};

/// Subscribe the geometry channels the host supports.
pub(crate) fn subscribe<S: Surface>(
    surface: &mut S,
    region: RegionId,
    target: &S::Element,
) -> SmallVec<[S::Subscription; 2]> {
    Channel::GEOMETRY
        .into_iter()
        .filter_map(|channel| surface.subscribe(region, target, channel))
        .collect()
}

impl<S: Surface> Brackets<S> {
    /// The overlay host of `id` changed size.
    pub fn resized(&mut self, id: RegionId) {
        if let Some(region) = self.regions.get(id) {
            trace!(region = ?id, "resize");
            render::apply_geometry(&mut self.surface, region);
        }
    }

    /// The overlay host of `id` changed visibility.
    pub fn visibility_changed(&mut self, id: RegionId, visible: bool) {
        if !visible {
            return;
        }
        if let Some(region) = self.regions.get(id) {
            trace!(region = ?id, "became visible");
            render::apply_geometry(&mut self.surface, region);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::mock::MockSurface;
    use crate::{BracketProps, Brackets};
    use kurbo::Rect;

    #[test]
    fn resize_tracks_host_box() {
        let mut b = Brackets::new(MockSurface::new());
        b.surface_mut()
            .boxes
            .insert(1, Rect::new(0.0, 0.0, 40.0, 20.0));
        let id = b.register(1, BracketProps::default());
        let overlay = *b.overlay(id).unwrap();

        b.surface_mut()
            .boxes
            .insert(1, Rect::new(5.0, 5.0, 85.0, 35.0));
        b.resized(id);
        let o = b.surface().overlay(overlay);
        assert_eq!(o.bounds, Rect::new(0.0, 0.0, 80.0, 30.0));
        assert_eq!(o.bounds_writes, 2);
    }

    #[test]
    fn only_becoming_visible_remeasures() {
        let mut b = Brackets::new(MockSurface::new());
        let id = b.register(1, BracketProps::default());
        let overlay = *b.overlay(id).unwrap();
        b.surface_mut()
            .boxes
            .insert(1, Rect::new(0.0, 0.0, 10.0, 10.0));

        b.visibility_changed(id, false);
        assert_eq!(b.surface().overlay(overlay).bounds, Rect::ZERO);

        b.visibility_changed(id, true);
        assert_eq!(
            b.surface().overlay(overlay).bounds,
            Rect::new(0.0, 0.0, 10.0, 10.0)
        );
    }

    #[test]
    fn host_without_geometry_channels_still_renders() {
        let mut surface = MockSurface::new();
        surface.no_geometry = true;
        surface.boxes.insert(1, Rect::new(0.0, 0.0, 12.0, 6.0));
        let mut b = Brackets::new(surface);
        let id = b.register(1, BracketProps::default());

        assert_eq!(b.surface().live_subscriptions(id).len(), 2);
        let overlay = *b.overlay(id).unwrap();
        assert_eq!(
            b.surface().overlay(overlay).bounds,
            Rect::new(0.0, 0.0, 12.0, 6.0)
        );
    }
}
