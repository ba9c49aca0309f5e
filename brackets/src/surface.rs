// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host boundary: what the controller needs from the UI environment.

use kurbo::Rect;

use crate::RegionId;
use brackets_overlay::OverlayStyle;

/// Notification channel a region subscribes to.
///
/// The host delivers each subscribed channel back into the controller by
/// calling the matching method on [`Brackets`](crate::Brackets):
///
/// | Channel        | Controller methods                                  |
/// |----------------|-----------------------------------------------------|
/// | `Pointer`      | `pointer_enter`, `pointer_leave`                     |
/// | `Focus`        | `focus`, `blur` (capturing, so descendants' focus reaches the region) |
/// | `Resize`       | `resized`                                            |
/// | `Visibility`   | `visibility_changed`                                 |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Pointer enter/leave on the region element.
    Pointer,
    /// Capturing focus/blur on the region element.
    Focus,
    /// Size changes of the overlay host.
    Resize,
    /// Visibility (intersection) changes of the overlay host.
    Visibility,
}

impl Channel {
    /// Channels subscribed on the region element.
    pub const INPUT: [Self; 2] = [Self::Pointer, Self::Focus];
    /// Channels subscribed on the overlay host for geometry synchronization.
    pub const GEOMETRY: [Self; 2] = [Self::Resize, Self::Visibility];
}

/// A UI environment that can host bracket overlays.
///
/// Implementations wrap whatever the toolkit calls elements (DOM nodes, widget
/// ids, box tree nodes) and translate overlay styling into toolkit calls. The
/// controller never hit tests and never assumes an element tree; everything it
/// learns about elements comes through this trait.
///
/// Method calls are synchronous and must not call back into the controller.
pub trait Surface {
    /// A handle to a UI element.
    type Element: Clone + PartialEq;
    /// A handle to an overlay attached with [`Surface::attach_overlay`].
    type Overlay;
    /// A live notification subscription, released with [`Surface::unsubscribe`].
    type Subscription;

    /// Resolve `selector` to a descendant of `element`.
    fn query_target(&self, element: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// Give `element` a positioning context so that an overlay appended as its
    /// child is laid out relative to it.
    fn ensure_positioned(&mut self, element: &Self::Element);

    /// Create a non-interactive overlay and append it as a child of `host`.
    ///
    /// The overlay root carries [`OVERLAY_CLASS`](crate::OVERLAY_CLASS). Hosts
    /// whose styling draws the brackets from a nested element also create a
    /// [`HELPER_CLASS`](crate::HELPER_CLASS) child; the controller never
    /// addresses it.
    fn attach_overlay(&mut self, host: &Self::Element) -> Self::Overlay;

    /// Remove an overlay from its host and discard it.
    fn detach_overlay(&mut self, overlay: Self::Overlay);

    /// Apply state classes, custom properties and visibility to an overlay.
    ///
    /// The custom properties are [`OFFSET_PROPERTY`](crate::OFFSET_PROPERTY)
    /// (from [`OverlayStyle::offset_value`], removed when `None`) and
    /// [`SIZE_PROPERTY`](crate::SIZE_PROPERTY) (from [`OverlayStyle::size`]).
    fn apply_style(&mut self, overlay: &Self::Overlay, style: &OverlayStyle<'_>);

    /// Set the overlay's bounds in its host's local coordinates.
    fn set_overlay_bounds(&mut self, overlay: &Self::Overlay, bounds: Rect);

    /// Current bounding box of `element`.
    fn bounding_box(&self, element: &Self::Element) -> Rect;

    /// Whether `element` is exactly the focused element.
    fn is_focused(&self, element: &Self::Element) -> bool;

    /// Start delivering `channel` notifications for `element` tagged with `region`.
    ///
    /// Return `None` when the host cannot provide the channel. For geometry
    /// channels the controller then only updates overlay bounds when it
    /// re-renders for other reasons.
    fn subscribe(
        &mut self,
        region: RegionId,
        element: &Self::Element,
        channel: Channel,
    ) -> Option<Self::Subscription>;

    /// Stop a subscription. No notification may be delivered for it afterwards.
    fn unsubscribe(&mut self, subscription: Self::Subscription);
}
