// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording surface used by the controller tests.

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use hashbrown::{HashMap, HashSet};
use kurbo::Rect;

use crate::{
    BracketProps, Channel, OverlayStyle, RegionConfig, RegionId, StateTags, Surface, Visibility,
};

#[derive(Clone, Debug)]
pub(crate) struct MockOverlay {
    pub(crate) host: u32,
    pub(crate) tags: StateTags,
    pub(crate) visibility: Visibility,
    pub(crate) offset: Option<String>,
    pub(crate) size: String,
    pub(crate) bounds: Rect,
    pub(crate) style_writes: usize,
    pub(crate) bounds_writes: usize,
}

#[derive(Debug, Default)]
pub(crate) struct MockSurface {
    /// Indexed by overlay handle; `None` once detached.
    pub(crate) overlays: Vec<Option<MockOverlay>>,
    /// Indexed by subscription handle; `None` once released.
    pub(crate) subscriptions: Vec<Option<(RegionId, u32, Channel)>>,
    pub(crate) focused: Option<u32>,
    pub(crate) boxes: HashMap<u32, Rect>,
    /// `(parent, selector) -> descendant`
    pub(crate) descendants: HashMap<(u32, String), u32>,
    pub(crate) positioned: HashSet<u32>,
    pub(crate) no_geometry: bool,
}

impl MockSurface {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn overlay(&self, handle: usize) -> &MockOverlay {
        self.overlays[handle]
            .as_ref()
            .expect("overlay should be attached")
    }

    pub(crate) fn is_attached(&self, handle: usize) -> bool {
        self.overlays.get(handle).is_some_and(Option::is_some)
    }

    pub(crate) fn live_subscriptions(&self, region: RegionId) -> Vec<(u32, Channel)> {
        self.subscriptions
            .iter()
            .flatten()
            .filter(|(r, _, _)| *r == region)
            .map(|(_, el, ch)| (*el, *ch))
            .collect()
    }
}

impl Surface for MockSurface {
    type Element = u32;
    type Overlay = usize;
    type Subscription = usize;

    fn query_target(&self, element: &u32, selector: &str) -> Option<u32> {
        self.descendants
            .get(&(*element, selector.to_string()))
            .copied()
    }

    fn ensure_positioned(&mut self, element: &u32) {
        self.positioned.insert(*element);
    }

    fn attach_overlay(&mut self, host: &u32) -> usize {
        self.overlays.push(Some(MockOverlay {
            host: *host,
            tags: StateTags::empty(),
            visibility: Visibility::Auto,
            offset: None,
            size: String::new(),
            bounds: Rect::ZERO,
            style_writes: 0,
            bounds_writes: 0,
        }));
        self.overlays.len() - 1
    }

    fn detach_overlay(&mut self, overlay: usize) {
        self.overlays[overlay] = None;
    }

    fn apply_style(&mut self, overlay: &usize, style: &OverlayStyle<'_>) {
        let o = self.overlays[*overlay]
            .as_mut()
            .expect("styled overlay should be attached");
        o.tags = style.tags;
        o.visibility = style.visibility;
        o.offset = style.offset_value();
        o.size = style.size.to_string();
        o.style_writes += 1;
    }

    fn set_overlay_bounds(&mut self, overlay: &usize, bounds: Rect) {
        let o = self.overlays[*overlay]
            .as_mut()
            .expect("sized overlay should be attached");
        o.bounds = bounds;
        o.bounds_writes += 1;
    }

    fn bounding_box(&self, element: &u32) -> Rect {
        self.boxes.get(element).copied().unwrap_or(Rect::ZERO)
    }

    fn is_focused(&self, element: &u32) -> bool {
        self.focused == Some(*element)
    }

    fn subscribe(&mut self, region: RegionId, element: &u32, channel: Channel) -> Option<usize> {
        if self.no_geometry && Channel::GEOMETRY.contains(&channel) {
            return None;
        }
        self.subscriptions.push(Some((region, *element, channel)));
        Some(self.subscriptions.len() - 1)
    }

    fn unsubscribe(&mut self, subscription: usize) {
        self.subscriptions[subscription] = None;
    }
}

/// Shared log of observer calls: `(region name, "hover" | "focus", value)`.
pub(crate) type Log = Rc<RefCell<Vec<(&'static str, &'static str, bool)>>>;

pub(crate) fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub(crate) fn drain(log: &Log) -> Vec<(&'static str, &'static str, bool)> {
    core::mem::take(&mut *log.borrow_mut())
}

/// Config whose observers append to `log` under `name`.
pub(crate) fn observed(name: &'static str, props: BracketProps, log: &Log) -> RegionConfig {
    let hover_log = log.clone();
    let focus_log = log.clone();
    RegionConfig::new(props)
        .on_hover_change(move |v| hover_log.borrow_mut().push((name, "hover", v)))
        .on_focus_change(move |v| focus_log.borrow_mut().push((name, "focus", v)))
}
