// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-region configuration and state.

use alloc::boxed::Box;
use smallvec::SmallVec;

use brackets_overlay::{BracketProps, Interaction, OverlayStyle};

use crate::Surface;

/// Observer invoked with the new value on a hover or focus transition.
pub type Observer = Box<dyn FnMut(bool)>;

/// Full configuration of a region: props plus observers.
///
/// Observers run synchronously inside the notification that caused the
/// transition. A missing observer is simply not called.
pub struct RegionConfig {
    /// Declarative props.
    pub props: BracketProps,
    /// Called when the region gains or loses the hover grant.
    pub on_hover_change: Option<Observer>,
    /// Called when the region's focused state is (re)computed.
    pub on_focus_change: Option<Observer>,
}

impl core::fmt::Debug for RegionConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegionConfig")
            .field("props", &self.props)
            .field("on_hover_change", &self.on_hover_change.is_some())
            .field("on_focus_change", &self.on_focus_change.is_some())
            .finish()
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self::new(BracketProps::default())
    }
}

impl From<BracketProps> for RegionConfig {
    fn from(props: BracketProps) -> Self {
        Self::new(props)
    }
}

impl RegionConfig {
    /// Config with the given props and no observers.
    pub fn new(props: BracketProps) -> Self {
        Self {
            props,
            on_hover_change: None,
            on_focus_change: None,
        }
    }

    /// Set the hover observer.
    pub fn on_hover_change(mut self, observer: impl FnMut(bool) + 'static) -> Self {
        self.on_hover_change = Some(Box::new(observer));
        self
    }

    /// Set the focus observer.
    pub fn on_focus_change(mut self, observer: impl FnMut(bool) + 'static) -> Self {
        self.on_focus_change = Some(Box::new(observer));
        self
    }
}

/// Snapshot of a region's interaction state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RegionState {
    /// The region holds the hover grant.
    pub hovering: bool,
    /// The region is focused.
    pub focused: bool,
    /// The region is focused and the focus came from the keyboard.
    pub focus_origin_keyboard: bool,
    /// The region is disabled.
    pub disabled: bool,
}

pub(crate) type Teardown<S> = SmallVec<[<S as Surface>::Subscription; 4]>;

pub(crate) struct Region<S: Surface> {
    /// The registered element; receives pointer and focus subscriptions.
    pub(crate) element: S::Element,
    /// The overlay host: `element` or the descendant `props.target` resolved to.
    pub(crate) target: S::Element,
    pub(crate) overlay: S::Overlay,
    pub(crate) config: RegionConfig,
    pub(crate) hovering: bool,
    pub(crate) focused: bool,
    pub(crate) focus_origin_keyboard: bool,
    pub(crate) teardown: Teardown<S>,
}

impl<S: Surface> Region<S> {
    pub(crate) fn new(
        element: S::Element,
        target: S::Element,
        overlay: S::Overlay,
        config: RegionConfig,
        teardown: Teardown<S>,
    ) -> Self {
        Self {
            element,
            target,
            overlay,
            config,
            hovering: false,
            focused: false,
            focus_origin_keyboard: false,
            teardown,
        }
    }

    pub(crate) fn props(&self) -> &BracketProps {
        &self.config.props
    }

    pub(crate) fn hoverable(&self) -> bool {
        self.config.props.hoverable()
    }

    pub(crate) fn disabled(&self) -> bool {
        self.config.props.disabled
    }

    pub(crate) fn state(&self) -> RegionState {
        RegionState {
            hovering: self.hovering,
            focused: self.focused,
            focus_origin_keyboard: self.focus_origin_keyboard,
            disabled: self.disabled(),
        }
    }

    pub(crate) fn style(&self) -> OverlayStyle<'_> {
        OverlayStyle::compute(
            &self.config.props,
            Interaction {
                hovering: self.hovering,
                focused: self.focused,
                focus_origin_keyboard: self.focus_origin_keyboard,
            },
        )
    }

    pub(crate) fn notify_hover(&mut self, hovering: bool) {
        if let Some(observer) = self.config.on_hover_change.as_mut() {
            observer(hovering);
        }
    }

    pub(crate) fn notify_focus(&mut self, focused: bool) {
        if let Some(observer) = self.config.on_focus_change.as_mut() {
            observer(focused);
        }
    }
}
