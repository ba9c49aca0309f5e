// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-region bracket configuration.

use alloc::string::String;

/// Thickness used when a region does not configure [`BracketProps::size`].
pub const DEFAULT_SIZE: &str = "0.5rem";

/// Declarative configuration of one bracketed region.
///
/// Props may be replaced at any time; replacing them never resets the
/// region's hover or focus state, except that `disabled` clears both.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct BracketProps {
    /// The region ignores hover and focus and is styled as disabled.
    pub disabled: bool,
    /// The region acts as a keyboard focus ring only.
    ///
    /// It never takes part in hover arbitration and is only marked focused
    /// when focus came from the keyboard.
    pub focus_only: bool,
    /// Visual inset of the brackets, in pixels. Left to the stylesheet when `None`.
    pub offset: Option<f64>,
    /// Visual thickness of the brackets, passed through to styling verbatim.
    pub size: String,
    /// Persistently show the brackets, independent of hover and focus.
    pub selected: bool,
    /// Explicit visibility override. `Some(false)` hides the overlay whatever
    /// the interaction state; `None` and `Some(true)` leave it to styling.
    pub render: Option<bool>,
    /// Selector of a descendant that should host the overlay instead of the
    /// region itself. Ignored when it does not resolve.
    pub target: Option<String>,
}

impl Default for BracketProps {
    fn default() -> Self {
        Self {
            disabled: false,
            focus_only: false,
            offset: None,
            size: String::from(DEFAULT_SIZE),
            selected: false,
            render: None,
            target: None,
        }
    }
}

impl BracketProps {
    /// Whether the region takes part in hover arbitration.
    pub fn hoverable(&self) -> bool {
        !self.disabled && !self.focus_only
    }

    /// Whether rendering is explicitly suppressed.
    pub fn render_suppressed(&self) -> bool {
        self.render == Some(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let props = BracketProps::default();
        assert_eq!(props.size, DEFAULT_SIZE);
        assert!(!props.disabled && !props.focus_only && !props.selected);
        assert!(props.hoverable());
        assert!(!props.render_suppressed());
    }

    #[test]
    fn hoverable_excludes_disabled_and_focus_only() {
        let disabled = BracketProps {
            disabled: true,
            ..BracketProps::default()
        };
        let focus_only = BracketProps {
            focus_only: true,
            ..BracketProps::default()
        };
        assert!(!disabled.hoverable());
        assert!(!focus_only.hoverable());
    }

    #[test]
    fn only_explicit_false_suppresses() {
        for (render, suppressed) in [(None, false), (Some(true), false), (Some(false), true)] {
            let props = BracketProps {
                render,
                ..BracketProps::default()
            };
            assert_eq!(props.render_suppressed(), suppressed, "{render:?}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_camel_case_config_fills_defaults() {
        let props: BracketProps =
            serde_json::from_str(r#"{"focusOnly":true,"offset":3}"#).unwrap();
        assert_eq!(
            props,
            BracketProps {
                focus_only: true,
                offset: Some(3.0),
                ..BracketProps::default()
            }
        );
        assert_eq!(props.size, DEFAULT_SIZE);

        let json = serde_json::to_string(&props).unwrap();
        assert!(json.contains(r#""focusOnly":true"#), "{json}");
        let back: BracketProps = serde_json::from_str(&json).unwrap();
        assert_eq!(back, props);
    }
}
