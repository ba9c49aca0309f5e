// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bracket controller: region lifecycle and notification handling.

use brackets_focus::{FocusDecision, FocusHistory, FocusOrigin};
use brackets_hover::{HoverChanges, HoverStack};
use brackets_overlay::BracketProps;
use tracing::{debug, trace};

use crate::region::{Region, RegionConfig, RegionState, Teardown};
use crate::registry::Registry;
use crate::{Channel, RegionId, Surface, geometry, render};

/// Controller for every bracketed region of one surface.
///
/// ## Usage
///
/// - Construct with [`Brackets::new`], handing over the [`Surface`].
/// - Call [`Brackets::register`] once per interactive region and keep the
///   returned [`RegionId`]; call [`Brackets::update`] when its config changes
///   and [`Brackets::unregister`] when it goes away.
/// - Forward host notifications: [`Brackets::pointer_enter`] /
///   [`Brackets::pointer_leave`] / [`Brackets::focus`] / [`Brackets::blur`] /
///   [`Brackets::resized`] / [`Brackets::visibility_changed`] for the channels
///   each region subscribed, and [`Brackets::key_down`] /
///   [`Brackets::pointer_down`] for global input.
///
/// Every call returns after all derived state changes, observer calls and
/// surface updates are done. Calls with a stale [`RegionId`] are ignored.
pub struct Brackets<S: Surface> {
    pub(crate) surface: S,
    pub(crate) regions: Registry<Region<S>>,
    pub(crate) hover: HoverStack<RegionId>,
    pub(crate) origin: FocusOrigin,
    pub(crate) history: FocusHistory<RegionId>,
}

impl<S: Surface> core::fmt::Debug for Brackets<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Brackets")
            .field("regions", &self.regions.len())
            .field("hover", &self.hover)
            .field("origin", &self.origin)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Brackets<S> {
    /// Create a controller with no regions.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            regions: Registry::default(),
            hover: HoverStack::new(),
            origin: FocusOrigin::new(),
            history: FocusHistory::new(),
        }
    }

    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The surface, mutably.
    ///
    /// Changing what the surface reports (focus, bounding boxes) does not by
    /// itself re-render anything; deliver the matching notification.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the controller and return the surface.
    ///
    /// Overlays and subscriptions of still registered regions are left in place.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Register `element` as a bracketed region.
    ///
    /// Resolves the overlay host (`props.target` if it names a descendant,
    /// otherwise `element`), gives it a positioning context, attaches the
    /// overlay, subscribes input and geometry channels and renders once.
    pub fn register(&mut self, element: S::Element, config: impl Into<RegionConfig>) -> RegionId {
        let config = config.into();
        let target = config
            .props
            .target
            .as_deref()
            .and_then(|selector| self.surface.query_target(&element, selector))
            .unwrap_or_else(|| element.clone());
        self.surface.ensure_positioned(&target);
        let overlay = self.surface.attach_overlay(&target);

        let surface = &mut self.surface;
        let id = self.regions.insert_with(|id| {
            let mut teardown = Teardown::<S>::new();
            teardown.extend(
                Channel::INPUT
                    .into_iter()
                    .filter_map(|channel| surface.subscribe(id, &element, channel)),
            );
            teardown.extend(geometry::subscribe(surface, id, &target));
            Region::new(element, target, overlay, config, teardown)
        });

        if let Some(region) = self.regions.get(id) {
            debug!(
                region = ?id,
                subscriptions = region.teardown.len(),
                disabled = region.disabled(),
                focus_only = region.props().focus_only,
                "region registered"
            );
            render::render(&mut self.surface, region);
        }
        id
    }

    /// Replace the config of `id`, observers included.
    ///
    /// Interaction state is kept, except that a disabled config clears hover
    /// and focus first (calling the new observers with `false`). A region that
    /// stops being hoverable also leaves the hover stack, so the enclosing
    /// region can take the grant.
    ///
    /// Returns `false` for a stale handle.
    pub fn update(&mut self, id: RegionId, config: impl Into<RegionConfig>) -> bool {
        let Some(region) = self.regions.get_mut(id) else {
            return false;
        };
        region.config = config.into();
        let hoverable = region.hoverable();
        debug!(
            region = ?id,
            disabled = region.disabled(),
            focus_only = region.props().focus_only,
            "region updated"
        );

        if !hoverable {
            let changes = self.hover.leave(&id);
            self.apply_hover_changes(changes);
        }

        if let Some(region) = self.regions.get_mut(id) {
            if region.disabled() && region.focused {
                region.focused = false;
                region.focus_origin_keyboard = false;
                trace!(region = ?id, "focus cleared by disable");
                region.notify_focus(false);
            }
            render::render(&mut self.surface, region);
        }
        true
    }

    /// Replace only the props of `id`, keeping its observers.
    ///
    /// Same semantics as [`Brackets::update`] otherwise.
    pub fn update_props(&mut self, id: RegionId, props: BracketProps) -> bool {
        let Some(region) = self.regions.get_mut(id) else {
            return false;
        };
        let config = RegionConfig {
            props,
            on_hover_change: region.config.on_hover_change.take(),
            on_focus_change: region.config.on_focus_change.take(),
        };
        self.update(id, config)
    }

    /// Unregister `id`.
    ///
    /// The region leaves the hover stack (calling its hover observer with
    /// `false` if it held the grant) and the focus history before its
    /// subscriptions are released and its overlay is detached.
    ///
    /// Returns `false`, doing nothing, if `id` is already unregistered.
    pub fn unregister(&mut self, id: RegionId) -> bool {
        if !self.regions.is_alive(id) {
            return false;
        }
        let changes = self.hover.leave(&id);
        self.apply_hover_changes(changes);
        self.history.forget(&id);

        let Some(region) = self.regions.remove(id) else {
            return false;
        };
        debug!(
            region = ?id,
            subscriptions = region.teardown.len(),
            "region unregistered"
        );
        for subscription in region.teardown {
            self.surface.unsubscribe(subscription);
        }
        self.surface.detach_overlay(region.overlay);
        true
    }

    /// The pointer entered the element of `id`.
    ///
    /// Disabled and focus-only regions do not take part in hover arbitration.
    pub fn pointer_enter(&mut self, id: RegionId) {
        let Some(region) = self.regions.get(id) else {
            return;
        };
        if !region.hoverable() {
            return;
        }
        let changes = self.hover.enter(id);
        self.apply_hover_changes(changes);
    }

    /// The pointer left the element of `id`.
    pub fn pointer_leave(&mut self, id: RegionId) {
        let Some(region) = self.regions.get(id) else {
            return;
        };
        if region.props().focus_only {
            return;
        }
        let changes = self.hover.leave(&id);
        self.apply_hover_changes(changes);
    }

    /// Re-run hover arbitration without a pointer event.
    ///
    /// Arbitration is idempotent, so this only changes anything if the stack
    /// and the regions fell out of step.
    pub fn resolve_hover(&mut self) {
        let changes = self.hover.resolve();
        self.apply_hover_changes(changes);
    }

    /// A focus notification reached the element of `id`.
    ///
    /// Ignored unless the surface reports the overlay host as the focused
    /// element (focus of a descendant bubbles through the capturing
    /// subscription), and ignored for disabled regions.
    pub fn focus(&mut self, id: RegionId) {
        let keyboard = self.origin.is_keyboard();
        let Some(region) = self.regions.get_mut(id) else {
            return;
        };
        if region.disabled() || !self.surface.is_focused(&region.target) {
            return;
        }
        let decision = FocusDecision::classify(region.props().focus_only, keyboard);
        region.focused = decision.focused;
        region.focus_origin_keyboard = decision.origin_keyboard;
        trace!(
            region = ?id,
            focused = decision.focused,
            keyboard,
            "focus"
        );
        region.notify_focus(decision.focused);
        render::render(&mut self.surface, region);
        if self.history.record(id) {
            trace!(region = ?id, "focus recorded");
        }
    }

    /// A blur notification reached the element of `id`.
    ///
    /// Ignored while the surface still reports the overlay host as focused,
    /// and when the region holds no focus state.
    pub fn blur(&mut self, id: RegionId) {
        let Some(region) = self.regions.get_mut(id) else {
            return;
        };
        if self.surface.is_focused(&region.target) {
            return;
        }
        if !region.focused && !region.focus_origin_keyboard {
            return;
        }
        region.focused = false;
        region.focus_origin_keyboard = false;
        trace!(region = ?id, "blur");
        region.notify_focus(false);
        render::apply_visual_state(&mut self.surface, region);
    }

    /// A key-down-class input happened anywhere.
    pub fn key_down(&mut self) {
        self.origin.on_key_down();
    }

    /// A pointer-down-class input happened anywhere.
    ///
    /// Switches the focus origin to the pointer and drops keyboard-origin
    /// styling from every region. Focused regions stay focused and their focus
    /// observers are not called. Nothing is swept when the origin already was
    /// the pointer, since keyboard-origin styling only exists under the
    /// keyboard origin.
    pub fn pointer_down(&mut self) {
        if !self.origin.on_pointer_down() {
            return;
        }
        for (id, region) in self.regions.iter_mut() {
            if region.focus_origin_keyboard {
                region.focus_origin_keyboard = false;
                trace!(region = ?id, "keyboard focus ring cleared");
                render::apply_visual_state(&mut self.surface, region);
            }
        }
    }

    /// Interaction state of `id`.
    pub fn state(&self, id: RegionId) -> Option<RegionState> {
        self.regions.get(id).map(Region::state)
    }

    /// Current props of `id`.
    pub fn props(&self, id: RegionId) -> Option<&BracketProps> {
        self.regions.get(id).map(Region::props)
    }

    /// The element `id` was registered with.
    pub fn element(&self, id: RegionId) -> Option<&S::Element> {
        self.regions.get(id).map(|r| &r.element)
    }

    /// The element hosting the overlay of `id`.
    pub fn target(&self, id: RegionId) -> Option<&S::Element> {
        self.regions.get(id).map(|r| &r.target)
    }

    /// The overlay of `id`.
    pub fn overlay(&self, id: RegionId) -> Option<&S::Overlay> {
        self.regions.get(id).map(|r| &r.overlay)
    }

    /// The region holding the hover grant.
    pub fn hovered(&self) -> Option<RegionId> {
        self.hover.hovered()
    }

    /// Whether `id` is registered.
    pub fn is_alive(&self, id: RegionId) -> bool {
        self.regions.is_alive(id)
    }

    /// Number of registered regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no region is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the most recent focus-causing input was the keyboard.
    pub fn is_keyboard_modality(&self) -> bool {
        self.origin.is_keyboard()
    }

    /// The most recently focused region, per the focus history.
    pub fn last_focused(&self) -> Option<RegionId> {
        self.history.last()
    }

    /// The focus history, e.g. to ignore regions or pause recording.
    pub fn focus_history_mut(&mut self) -> &mut FocusHistory<RegionId> {
        &mut self.history
    }

    /// Store, notify and re-render each change, in order.
    fn apply_hover_changes(&mut self, changes: HoverChanges<RegionId>) {
        for change in changes {
            let (id, hovering) = change.into_parts();
            let Some(region) = self.regions.get_mut(id) else {
                continue;
            };
            if region.hovering == hovering {
                continue;
            }
            trace!(region = ?id, hovering, "hover");
            region.hovering = hovering;
            region.notify_hover(hovering);
            render::apply_visual_state(&mut self.surface, region);
        }
    }
}
