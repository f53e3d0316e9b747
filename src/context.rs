//! Application context consulted by atomic controls.
//!
//! Controls never reach for global state. Whatever they need to know about
//! the signed-in account and the active theme travels in a [`ControlContext`]
//! that the host hands to each control. The context is also the default
//! [`StyleProvider`]: given a [`StylingRequest`] it computes the base
//! [`InputStyle`] of a control, which the control then refines with its own
//! props.
//!
//! `ControlContext::default()` is a complete, self-contained context, which
//! makes it the natural stand-in when a control is rendered outside a full
//! application (tests, demos).

use crate::style::{Background, BorderKind, Dimension, InputStyle};

/// Account preferences that influence how controls look.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountState {
    /// Display name of the signed-in user, if any.
    pub user_name: Option<String>,
    /// Use heavier borders and bold text.
    pub high_contrast: bool,
}

/// Theme values shared by all controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylingState {
    /// Text color.
    pub text_color: String,
    /// Placeholder text color.
    pub placeholder_color: String,
    /// Text color of disabled controls.
    pub disabled_color: String,
    /// Border color of idle controls.
    pub border_color: String,
    /// Border color of the focused control.
    pub focus_border_color: String,
    /// Border color of required controls that are still empty.
    pub required_color: String,
    /// Control background; `None` leaves the terminal background.
    pub background_color: Option<String>,
    /// Border kind used by default.
    pub border: BorderKind,
    /// Draw a drop shadow under controls.
    pub box_shadow: bool,
    /// Default padding as `(top, right, bottom, left)` cells.
    pub padding: (u16, u16, u16, u16),
}

impl Default for StylingState {
    fn default() -> Self {
        Self {
            text_color: "#dddddd".to_string(),
            placeholder_color: "240".to_string(),
            disabled_color: "#777777".to_string(),
            border_color: "#444444".to_string(),
            focus_border_color: "#874BFD".to_string(),
            required_color: "#FF5F87".to_string(),
            background_color: None,
            border: BorderKind::Normal,
            box_shadow: false,
            padding: (0, 1, 0, 1),
        }
    }
}

/// The kind of control asking for a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlType {
    /// Single-line text input.
    Input,
}

/// Everything a [`StyleProvider`] gets to know about the control it styles.
#[derive(Debug, Clone, Copy)]
pub struct StylingRequest<'a> {
    /// What kind of control is being styled.
    pub control_type: ControlType,
    /// The control's current value.
    pub control_value: &'a str,
    /// Width the control asks for.
    pub container_width: Option<Dimension>,
    /// Height the control asks for.
    pub container_height: Option<Dimension>,
    /// Whether a value is mandatory.
    pub required: bool,
    /// Whether the control accepts input.
    pub enabled: bool,
    /// Whether the control holds keyboard focus.
    pub focused: bool,
}

/// Computes the base style of a control.
pub trait StyleProvider {
    /// The style a control should start from before applying its own props.
    fn input_style(&self, request: &StylingRequest<'_>) -> InputStyle;

    /// Color spec for placeholder text.
    fn placeholder_color(&self) -> String;
}

/// Account and styling state handed to every control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlContext {
    /// Account slice.
    pub account: AccountState,
    /// Styling slice.
    pub styling: StylingState,
}

impl ControlContext {
    /// Creates a context from its two slices.
    pub fn new(account: AccountState, styling: StylingState) -> Self {
        Self { account, styling }
    }
}

impl StyleProvider for ControlContext {
    fn input_style(&self, request: &StylingRequest<'_>) -> InputStyle {
        let theme = &self.styling;
        let (top, right, bottom, left) = theme.padding;

        let border_color = if !request.enabled {
            &theme.border_color
        } else if request.required && request.control_value.is_empty() {
            &theme.required_color
        } else if request.focused {
            &theme.focus_border_color
        } else {
            &theme.border_color
        };

        let border = if self.account.high_contrast && theme.border != BorderKind::None {
            BorderKind::Thick
        } else {
            theme.border
        };

        InputStyle {
            width: request.container_width,
            height: request.container_height,
            padding_top: Some(Dimension::Cells(top)),
            padding_right: Some(Dimension::Cells(right)),
            padding_bottom: Some(Dimension::Cells(bottom)),
            padding_left: Some(Dimension::Cells(left)),
            font_size: None,
            border: Some(border),
            border_color: Some(border_color.clone()),
            box_shadow: Some(theme.box_shadow),
            background: theme.background_color.clone().map(Background::Color),
            foreground: Some(if request.enabled {
                theme.text_color.clone()
            } else {
                theme.disabled_color.clone()
            }),
            bold: Some(self.account.high_contrast),
            faint: Some(!request.enabled),
        }
    }

    fn placeholder_color(&self) -> String {
        self.styling.placeholder_color.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(value: &str) -> StylingRequest<'_> {
        StylingRequest {
            control_type: ControlType::Input,
            control_value: value,
            container_width: Some(Dimension::Cells(20)),
            container_height: Some(Dimension::Cells(1)),
            required: false,
            enabled: true,
            focused: false,
        }
    }

    #[test]
    fn test_default_style_uses_theme() {
        let ctx = ControlContext::default();
        let style = ctx.input_style(&request("x"));

        assert_eq!(style.width, Some(Dimension::Cells(20)));
        assert_eq!(style.height, Some(Dimension::Cells(1)));
        assert_eq!(style.padding_left, Some(Dimension::Cells(1)));
        assert_eq!(style.padding_right, Some(Dimension::Cells(1)));
        assert_eq!(style.border, Some(BorderKind::Normal));
        assert_eq!(style.border_color.as_deref(), Some("#444444"));
        assert_eq!(style.background, None);
        assert_eq!(style.faint, Some(false));
    }

    #[test]
    fn test_required_and_empty_uses_required_color() {
        let ctx = ControlContext::default();
        let mut req = request("");
        req.required = true;
        req.focused = true;
        let style = ctx.input_style(&req);
        assert_eq!(style.border_color.as_deref(), Some("#FF5F87"));

        let mut filled = request("value");
        filled.required = true;
        filled.focused = true;
        let style = ctx.input_style(&filled);
        assert_eq!(style.border_color.as_deref(), Some("#874BFD"));
    }

    #[test]
    fn test_disabled_is_faint() {
        let ctx = ControlContext::default();
        let mut req = request("x");
        req.enabled = false;
        let style = ctx.input_style(&req);
        assert_eq!(style.faint, Some(true));
        assert_eq!(style.foreground.as_deref(), Some("#777777"));
    }

    #[test]
    fn test_high_contrast_account() {
        let ctx = ControlContext::new(
            AccountState {
                user_name: Some("sam".to_string()),
                high_contrast: true,
            },
            StylingState {
                background_color: Some("#1a1a1a".to_string()),
                ..StylingState::default()
            },
        );
        let style = ctx.input_style(&request("x"));
        assert_eq!(style.border, Some(BorderKind::Thick));
        assert_eq!(style.bold, Some(true));
        assert_eq!(
            style.background,
            Some(Background::Color("#1a1a1a".to_string()))
        );
    }
}
