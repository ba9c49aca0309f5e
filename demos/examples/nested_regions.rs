// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested bracket regions driven by a scripted sequence of host notifications.
//!
//! This example shows how to:
//! - implement `brackets::Surface` for a (text-mode) toolkit,
//! - register nested regions, including a keyboard-only focus ring,
//! - forward pointer, keyboard, focus and resize notifications,
//! - render the overlay classes and custom properties the controller applied.
//!
//! Run:
//! - `cargo run -p brackets_demos --example nested_regions`

use std::collections::HashMap;

use brackets::{
    BracketProps, Brackets, Channel, HELPER_CLASS, OFFSET_PROPERTY, OVERLAY_CLASS, OverlayStyle,
    RegionConfig, RegionId, SIZE_PROPERTY, Surface,
};
use kurbo::Rect;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

/// A toy element tree: names, boxes and a focus pointer.
#[derive(Default)]
struct TextSurface {
    boxes: HashMap<&'static str, Rect>,
    children: HashMap<(&'static str, String), &'static str>,
    focused: Option<&'static str>,
    /// Per overlay handle: host and the last rendered style line.
    overlays: Vec<Option<(&'static str, String)>>,
    live_subscriptions: usize,
}

impl Surface for TextSurface {
    type Element = &'static str;
    type Overlay = usize;
    type Subscription = (RegionId, Channel);

    fn query_target(&self, element: &&'static str, selector: &str) -> Option<&'static str> {
        self.children.get(&(*element, selector.to_owned())).copied()
    }

    fn ensure_positioned(&mut self, element: &&'static str) {
        println!("  [{element}] position: relative");
    }

    fn attach_overlay(&mut self, host: &&'static str) -> usize {
        println!(
            "  [{host}] <div class=\"{OVERLAY_CLASS}\"><div class=\"{HELPER_CLASS}\"/></div>"
        );
        self.overlays.push(Some((host, String::new())));
        self.overlays.len() - 1
    }

    fn detach_overlay(&mut self, overlay: usize) {
        if let Some((host, _)) = self.overlays[overlay].take() {
            println!("  [{host}] overlay removed");
        }
    }

    fn apply_style(&mut self, overlay: &usize, style: &OverlayStyle<'_>) {
        let Some((host, rendered)) = self.overlays[*overlay].as_mut() else {
            return;
        };
        let mut next = String::from(OVERLAY_CLASS);
        for class in style.classes() {
            next.push(' ');
            next.push_str(class);
        }
        next.push_str(&format!("; {SIZE_PROPERTY}: {}", style.size));
        if let Some(offset) = style.offset_value() {
            next.push_str(&format!("; {OFFSET_PROPERTY}: {offset}"));
        }
        if *rendered != next {
            let shown = if style.is_displayed() { "shown" } else { "hidden" };
            println!("  [{host}] {next} ({shown})");
            *rendered = next;
        }
    }

    fn set_overlay_bounds(&mut self, overlay: &usize, bounds: Rect) {
        if let Some((host, _)) = &self.overlays[*overlay] {
            println!("  [{host}] overlay {}x{}", bounds.width(), bounds.height());
        }
    }

    fn bounding_box(&self, element: &&'static str) -> Rect {
        self.boxes.get(element).copied().unwrap_or(Rect::ZERO)
    }

    fn is_focused(&self, element: &&'static str) -> bool {
        self.focused == Some(*element)
    }

    fn subscribe(
        &mut self,
        region: RegionId,
        _element: &&'static str,
        channel: Channel,
    ) -> Option<(RegionId, Channel)> {
        self.live_subscriptions += 1;
        Some((region, channel))
    }

    fn unsubscribe(&mut self, _subscription: (RegionId, Channel)) {
        self.live_subscriptions -= 1;
    }
}

fn step(label: &str) {
    println!("\n== {label} ==");
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_target(false)
        .init();

    let mut surface = TextSurface::default();
    surface.boxes.insert("card", Rect::new(0.0, 0.0, 300.0, 120.0));
    surface.boxes.insert("button", Rect::new(20.0, 70.0, 120.0, 100.0));
    surface.boxes.insert("button-label", Rect::new(30.0, 75.0, 110.0, 95.0));
    surface.boxes.insert("toolbar", Rect::new(0.0, 0.0, 300.0, 30.0));
    surface
        .children
        .insert(("button", "label".to_owned()), "button-label");

    let mut brackets = Brackets::new(surface);

    step("register");
    let card = brackets.register("card", BracketProps::default());
    let button = brackets.register(
        "button",
        RegionConfig::new(BracketProps {
            target: Some("label".to_owned()),
            offset: Some(4.0),
            ..BracketProps::default()
        })
        .on_hover_change(|h| info!(hovering = h, "button hover observer"))
        .on_focus_change(|f| info!(focused = f, "button focus observer")),
    );
    let toolbar = brackets.register(
        "toolbar",
        BracketProps {
            focus_only: true,
            ..BracketProps::default()
        },
    );

    step("pointer enters card, then button");
    brackets.pointer_enter(card);
    brackets.pointer_enter(button);

    step("pointer leaves button");
    brackets.pointer_leave(button);

    step("tab to toolbar");
    brackets.key_down();
    brackets.surface_mut().focused = Some("toolbar");
    brackets.focus(toolbar);

    step("click elsewhere");
    brackets.pointer_down();

    step("button label grows");
    brackets
        .surface_mut()
        .boxes
        .insert("button-label", Rect::new(30.0, 75.0, 150.0, 95.0));
    brackets.resized(button);

    step("select the card, then disable it");
    let selected = BracketProps {
        selected: true,
        ..BracketProps::default()
    };
    brackets.update_props(card, selected);
    brackets.update_props(
        card,
        BracketProps {
            disabled: true,
            ..BracketProps::default()
        },
    );

    step("teardown");
    for id in [button, toolbar, card] {
        brackets.unregister(id);
    }
    let surface = brackets.into_surface();
    println!("live subscriptions left: {}", surface.live_subscriptions);
}
