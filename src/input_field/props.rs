//! The configuration bag of the input field.

use super::types::{RestrictionType, SubmitCallback, ValueCallback, ValueReport};
use crate::style::{Dimension, InputStyle};

/// Props of an input field.
///
/// The parent owns the props and may replace them wholesale with
/// `Model::set_props` whenever its own state changes. Builder methods consume
/// and return the props so a field can be configured in one expression:
///
/// ```rust
/// use atomic_controls::input_field::InputProps;
///
/// let props = InputProps::new()
///     .value("abc")
///     .length(8)
///     .allow_space(false)
///     .placeholder("Code");
/// assert_eq!(props.value, "abc");
/// assert_eq!(props.length, Some(8));
/// ```
pub struct InputProps {
    /// Accept spaces.
    pub allow_space: bool,
    /// Accept characters outside `[a-zA-Z0-9 ]`.
    pub allow_symbols: bool,
    /// Accept input at all.
    pub enabled: bool,
    /// Requested font size.
    pub font_size: Option<u16>,
    /// Label, shown as placeholder when no placeholder is set.
    pub heading: Option<String>,
    /// Content height.
    pub height: Option<Dimension>,
    /// Maximum number of characters; `None` or `0` means unlimited.
    pub length: Option<usize>,
    /// Keep interior padding. When false the padding is folded into the box size.
    pub padded: bool,
    /// Top padding overriding the computed one.
    pub padding_top: Option<u16>,
    /// Text shown while the value is empty.
    pub placeholder: Option<String>,
    /// A value is mandatory.
    pub required: bool,
    /// Semantic input type.
    pub restriction_type: RestrictionType,
    /// Draw the background.
    pub show_background: bool,
    /// Draw the border and shadow.
    pub show_borders: bool,
    /// Explicit style replacing the computed one.
    pub style: Option<InputStyle>,
    /// Hint text for hosts that show tooltips.
    pub tooltip: Option<String>,
    /// The current value, owned by the parent.
    pub value: String,
    /// Content width.
    pub width: Option<Dimension>,

    /// Called with the value when the field loses focus.
    pub on_blur: Option<ValueCallback>,
    /// Called with the new value after an edit.
    pub on_change: Option<ValueCallback>,
    /// Called when the user presses enter.
    pub on_submit: Option<SubmitCallback>,
}

impl Default for InputProps {
    fn default() -> Self {
        Self {
            allow_space: true,
            allow_symbols: true,
            enabled: true,
            font_size: None,
            heading: None,
            height: Some(Dimension::Cells(1)),
            length: None,
            padded: true,
            padding_top: None,
            placeholder: None,
            required: false,
            restriction_type: RestrictionType::Text,
            show_background: true,
            show_borders: true,
            style: None,
            tooltip: None,
            value: String::new(),
            width: Some(Dimension::Percent(100)),
            on_blur: None,
            on_change: None,
            on_submit: None,
        }
    }
}

impl InputProps {
    /// Props with every default applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// The effective length limit. Zero counts as no limit.
    pub fn max_length(&self) -> Option<usize> {
        self.length.filter(|&n| n > 0)
    }

    /// Placeholder text, falling back to the heading.
    pub fn placeholder_text(&self) -> &str {
        self.placeholder
            .as_deref()
            .filter(|p| !p.is_empty())
            .or(self.heading.as_deref())
            .unwrap_or("")
    }

    /// Sets the value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets whether spaces are accepted.
    pub fn allow_space(mut self, allow: bool) -> Self {
        self.allow_space = allow;
        self
    }

    /// Sets whether symbols are accepted.
    pub fn allow_symbols(mut self, allow: bool) -> Self {
        self.allow_symbols = allow;
        self
    }

    /// Enables or disables the field.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the font size.
    pub fn font_size(mut self, size: u16) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Sets the heading.
    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Sets the content height.
    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Sets the maximum length.
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets whether interior padding is kept.
    pub fn padded(mut self, padded: bool) -> Self {
        self.padded = padded;
        self
    }

    /// Sets the top padding.
    pub fn padding_top(mut self, cells: u16) -> Self {
        self.padding_top = Some(cells);
        self
    }

    /// Sets the placeholder.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Marks the field as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the restriction type.
    pub fn restriction_type(mut self, kind: RestrictionType) -> Self {
        self.restriction_type = kind;
        self
    }

    /// Sets whether the background is drawn.
    pub fn show_background(mut self, show: bool) -> Self {
        self.show_background = show;
        self
    }

    /// Sets whether borders are drawn.
    pub fn show_borders(mut self, show: bool) -> Self {
        self.show_borders = show;
        self
    }

    /// Sets an explicit style.
    pub fn style(mut self, style: InputStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the tooltip.
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Sets the content width.
    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Sets the blur callback.
    pub fn on_blur(mut self, f: impl Fn(ValueReport) + Send + 'static) -> Self {
        self.on_blur = Some(Box::new(f));
        self
    }

    /// Sets the change callback.
    pub fn on_change(mut self, f: impl Fn(ValueReport) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Sets the submit callback.
    pub fn on_submit(mut self, f: impl Fn() + Send + 'static) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }
}
