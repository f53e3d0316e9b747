//! The style record of atomic controls.
//!
//! [`InputStyle`] is a flat, partially filled bag of visual attributes, much
//! like an inline style object: every attribute is optional and later layers
//! overwrite earlier ones. Sizes are [`Dimension`]s, either absolute terminal
//! cells or a percentage of the container. Only cell values take part in the
//! padding arithmetic of [`InputStyle::remove_padding`].
//!
//! ```rust
//! use atomic_controls::style::{Dimension, InputStyle};
//!
//! let mut style = InputStyle {
//!     width: Some(Dimension::Cells(100)),
//!     padding_left: Some(Dimension::Cells(10)),
//!     padding_right: Some(Dimension::Cells(5)),
//!     ..InputStyle::default()
//! };
//! style.remove_padding();
//! assert_eq!(style.width, Some(Dimension::Cells(115)));
//! assert_eq!(style.padding_left, Some(Dimension::Cells(0)));
//! ```

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// A length in terminal cells or relative to the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Absolute number of cells.
    Cells(u16),
    /// Percentage of the container's size.
    Percent(u16),
}

impl Dimension {
    /// The cell count, if this is an absolute dimension.
    pub fn cells(self) -> Option<u16> {
        match self {
            Dimension::Cells(n) => Some(n),
            Dimension::Percent(_) => None,
        }
    }

    /// Resolves against a container size in cells.
    pub fn resolve(self, container: u16) -> u16 {
        match self {
            Dimension::Cells(n) => n,
            Dimension::Percent(p) => {
                let scaled = u32::from(container) * u32::from(p) / 100;
                u16::try_from(scaled).unwrap_or(u16::MAX)
            }
        }
    }
}

impl From<u16> for Dimension {
    fn from(cells: u16) -> Self {
        Dimension::Cells(cells)
    }
}

/// Border drawn around a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderKind {
    /// No border; takes no space.
    None,
    /// Single line border.
    #[default]
    Normal,
    /// Single line border with rounded corners.
    Rounded,
    /// Heavy line border.
    Thick,
    /// Double line border.
    Double,
}

impl BorderKind {
    fn apply(self, style: Style) -> Style {
        let style = match self {
            BorderKind::None => return style,
            BorderKind::Normal => style.border_style(lipgloss::normal_border()),
            BorderKind::Rounded => style.border_style(lipgloss::rounded_border()),
            BorderKind::Thick => style.border_style(lipgloss::thick_border()),
            BorderKind::Double => style.border_style(lipgloss::double_border()),
        };
        style
            .border_top(true)
            .border_right(true)
            .border_bottom(true)
            .border_left(true)
    }
}

/// Background fill of a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    /// Let the terminal's own background show through.
    Transparent,
    /// A lipgloss color spec (`"62"`, `"#1a1a1a"`, ...).
    Color(String),
}

/// Visual attributes of an input control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputStyle {
    /// Content width.
    pub width: Option<Dimension>,
    /// Content height.
    pub height: Option<Dimension>,
    /// Padding above the content.
    pub padding_top: Option<Dimension>,
    /// Padding right of the content.
    pub padding_right: Option<Dimension>,
    /// Padding below the content.
    pub padding_bottom: Option<Dimension>,
    /// Padding left of the content.
    pub padding_left: Option<Dimension>,
    /// Requested font size. Terminals render a single size; hosts that
    /// mirror the style elsewhere read it from here.
    pub font_size: Option<u16>,
    /// Border kind.
    pub border: Option<BorderKind>,
    /// Border color spec.
    pub border_color: Option<String>,
    /// Drop shadow along the right and bottom edges.
    pub box_shadow: Option<bool>,
    /// Background fill.
    pub background: Option<Background>,
    /// Text color spec.
    pub foreground: Option<String>,
    /// Bold text.
    pub bold: Option<bool>,
    /// Dimmed text.
    pub faint: Option<bool>,
}

/// Adds `padding` into `size` when both are cell values, zeroing the padding.
fn fold_padding(size: &mut Option<Dimension>, padding: &mut Option<Dimension>) {
    let Some(Dimension::Cells(total)) = size else {
        return;
    };
    if let Some(Dimension::Cells(pad)) = padding {
        if *pad > 0 {
            *total = total.saturating_add(*pad);
            *pad = 0;
        }
    }
}

impl InputStyle {
    /// Moves cell paddings into the box size so the visible box keeps its
    /// size without interior padding.
    ///
    /// Left and right padding fold into a cell width, bottom and top padding
    /// into a cell height. Percentage values are left untouched.
    pub fn remove_padding(&mut self) {
        fold_padding(&mut self.width, &mut self.padding_left);
        fold_padding(&mut self.width, &mut self.padding_right);
        fold_padding(&mut self.height, &mut self.padding_bottom);
        fold_padding(&mut self.height, &mut self.padding_top);
    }

    /// Padding as `(top, right, bottom, left)` cells. Percentages resolve
    /// against the container width.
    pub fn padding_cells(&self, container_width: u16) -> (u16, u16, u16, u16) {
        let resolve = |d: Option<Dimension>| d.map_or(0, |d| d.resolve(container_width));
        (
            resolve(self.padding_top),
            resolve(self.padding_right),
            resolve(self.padding_bottom),
            resolve(self.padding_left),
        )
    }

    /// Whether a border takes up space.
    pub fn has_border(&self) -> bool {
        self.border.unwrap_or(BorderKind::None) != BorderKind::None
    }

    /// Builds the lipgloss style that draws the frame around the content.
    ///
    /// Sizing is not part of the result; callers lay out the content block
    /// themselves and let lipgloss add padding and border.
    pub fn to_lipgloss(&self, container_width: u16) -> Style {
        let (top, right, bottom, left) = self.padding_cells(container_width);
        let mut style = Style::new().padding(
            i32::from(top),
            i32::from(right),
            i32::from(bottom),
            i32::from(left),
        );

        if self.has_border() {
            style = self.border.unwrap_or_default().apply(style);
            if let Some(color) = &self.border_color {
                style = style.border_foreground(Color::from(color.as_str()));
            }
        }

        if let Some(Background::Color(color)) = &self.background {
            style = style.background(Color::from(color.as_str()));
        }
        if let Some(color) = &self.foreground {
            style = style.foreground(Color::from(color.as_str()));
        }
        if self.bold == Some(true) {
            style = style.bold(true);
        }
        if self.faint == Some(true) {
            style = style.faint(true);
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_padding_folds_horizontal_padding() {
        let mut style = InputStyle {
            width: Some(Dimension::Cells(100)),
            padding_left: Some(Dimension::Cells(10)),
            padding_right: Some(Dimension::Cells(5)),
            ..InputStyle::default()
        };
        style.remove_padding();

        assert_eq!(style.width, Some(Dimension::Cells(115)));
        assert_eq!(style.padding_left, Some(Dimension::Cells(0)));
        assert_eq!(style.padding_right, Some(Dimension::Cells(0)));
    }

    #[test]
    fn test_remove_padding_folds_vertical_padding() {
        let mut style = InputStyle {
            height: Some(Dimension::Cells(1)),
            padding_top: Some(Dimension::Cells(1)),
            padding_bottom: Some(Dimension::Cells(2)),
            ..InputStyle::default()
        };
        style.remove_padding();

        assert_eq!(style.height, Some(Dimension::Cells(4)));
        assert_eq!(style.padding_top, Some(Dimension::Cells(0)));
        assert_eq!(style.padding_bottom, Some(Dimension::Cells(0)));
    }

    #[test]
    fn test_remove_padding_keeps_relative_sizes() {
        let mut style = InputStyle {
            width: Some(Dimension::Percent(100)),
            padding_left: Some(Dimension::Cells(2)),
            height: Some(Dimension::Cells(1)),
            padding_top: Some(Dimension::Percent(5)),
            ..InputStyle::default()
        };
        let before = style.clone();
        style.remove_padding();
        assert_eq!(style, before);
    }

    #[test]
    fn test_dimension_resolve() {
        assert_eq!(Dimension::Cells(12).resolve(80), 12);
        assert_eq!(Dimension::Percent(50).resolve(80), 40);
        assert_eq!(Dimension::Percent(100).resolve(0), 0);
        assert_eq!(Dimension::from(3).cells(), Some(3));
        assert_eq!(Dimension::Percent(3).cells(), None);
    }

    #[test]
    fn test_padding_cells_resolves_percentages() {
        let style = InputStyle {
            padding_left: Some(Dimension::Percent(10)),
            padding_top: Some(Dimension::Cells(1)),
            ..InputStyle::default()
        };
        assert_eq!(style.padding_cells(50), (1, 0, 0, 5));
    }

    #[test]
    fn test_has_border() {
        let mut style = InputStyle::default();
        assert!(!style.has_border());
        style.border = Some(BorderKind::Rounded);
        assert!(style.has_border());
        style.border = Some(BorderKind::None);
        assert!(!style.has_border());
    }
}
