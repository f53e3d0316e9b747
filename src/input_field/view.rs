//! Style computation and rendering of the input field.

use super::model::Model;
use super::types::Size;
use crate::context::{ControlType, StylingRequest};
use crate::style::{Background, BorderKind, Dimension, InputStyle};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

impl Model {
    /// The style the field renders with.
    ///
    /// An explicit `style` prop wins over the provider's computed style; the
    /// `width` and `height` props are re-applied on top of it. Font size,
    /// top padding, border and background switches are overlaid next, and an
    /// unpadded field finally folds its padding into its size.
    pub fn computed_style(&self) -> InputStyle {
        let p = &self.props;
        let mut style = match &p.style {
            Some(explicit) => {
                let mut style = explicit.clone();
                if p.width.is_some() {
                    style.width = p.width;
                }
                if p.height.is_some() {
                    style.height = p.height;
                }
                style
            }
            None => self.styler.input_style(&StylingRequest {
                control_type: ControlType::Input,
                control_value: &p.value,
                container_width: p.width,
                container_height: p.height,
                required: p.required,
                enabled: p.enabled,
                focused: self.focus,
            }),
        };

        if let Some(size) = p.font_size.filter(|&s| s > 0) {
            style.font_size = Some(size);
        }
        if let Some(top) = p.padding_top.filter(|&t| t > 0) {
            style.padding_top = Some(Dimension::Cells(top));
        }
        if !p.show_borders {
            style.border = Some(BorderKind::None);
            style.box_shadow = Some(false);
        }
        if !p.show_background {
            style.background = Some(Background::Transparent);
        }
        if !p.padded {
            style.remove_padding();
        }
        style
    }

    /// Renders the field.
    pub fn view(&self) -> String {
        let style = self.computed_style();
        let (container_width, container_height) = self.container;
        let (_, right, _, left) = style.padding_cells(container_width);
        let frame = usize::from(left) + usize::from(right) + if style.has_border() { 2 } else { 0 };

        let width = match style.width {
            Some(Dimension::Cells(n)) => usize::from(n),
            Some(relative) => usize::from(relative.resolve(container_width)).saturating_sub(frame),
            None => self.natural_width(),
        }
        .max(1);
        let height = style
            .height
            .map_or(1, |h| usize::from(h.resolve(container_height)))
            .max(1);

        let above = (height - 1) / 2;
        let mut lines = vec![" ".repeat(width); height];
        lines[above] = self.content_line(width);

        let rendered = style.to_lipgloss(container_width).render(&lines.join("\n"));
        if style.box_shadow == Some(true) {
            with_shadow(&rendered)
        } else {
            rendered
        }
    }

    /// Size of the rendered field in cells.
    pub fn measure(&self) -> Size {
        let rendered = self.view();
        let lines: Vec<&str> = rendered.lines().collect();
        Size {
            width: lines
                .iter()
                .map(|line| lipgloss::width_visible(line))
                .max()
                .unwrap_or(0),
            height: lines.len(),
        }
    }

    /// Renders the tooltip, or nothing when none is set.
    pub fn tooltip_view(&self) -> String {
        match self.props.tooltip.as_deref() {
            Some(tip) if !tip.is_empty() => Style::new().faint(true).render(tip),
            _ => String::new(),
        }
    }

    fn display_chars(&self) -> Vec<char> {
        let value = self.value();
        if self.props.restriction_type.masked() {
            vec![self.echo_character; value.chars().count()]
        } else {
            value.chars().collect()
        }
    }

    fn natural_width(&self) -> usize {
        let text = if self.props.value.is_empty() {
            self.props.placeholder_text().width()
        } else {
            self.display_chars().iter().map(|c| c.width().unwrap_or(0)).sum()
        };
        text + 1
    }

    fn caret_active(&self) -> bool {
        self.focus && self.props.enabled
    }

    /// One line of exactly `width` cells holding the value or placeholder.
    fn content_line(&self, width: usize) -> String {
        let chars = self.display_chars();
        if chars.is_empty() {
            return self.placeholder_line(width);
        }

        let pos = self.position().min(chars.len());
        let cell = |c: &char| c.width().unwrap_or(0);

        // Scroll so the caret cell stays visible.
        let mut offset = 0;
        loop {
            let caret_cell = usize::from(pos == chars.len());
            let used: usize = chars[offset..pos].iter().map(cell).sum::<usize>()
                + chars.get(pos).map_or(caret_cell, cell);
            if used <= width || offset >= pos {
                break;
            }
            offset += 1;
        }

        let mut visible = Vec::new();
        let mut used = 0;
        for c in &chars[offset..] {
            let w = cell(c);
            if used + w > width {
                break;
            }
            used += w;
            visible.push(*c);
        }

        let caret_at = pos - offset;
        let mut line = String::new();
        if self.caret_active() {
            let before: String = visible.iter().take(caret_at).collect();
            line.push_str(&before);
            let mut caret = self.caret.clone();
            match visible.get(caret_at) {
                Some(c) => {
                    caret.set_char(&c.to_string());
                    line.push_str(&caret.view());
                    let after: String = visible.iter().skip(caret_at + 1).collect();
                    line.push_str(&after);
                }
                None if used < width => {
                    caret.set_char(" ");
                    line.push_str(&caret.view());
                    used += 1;
                }
                None => {}
            }
        } else {
            line.extend(visible.iter());
        }

        line.push_str(&" ".repeat(width.saturating_sub(used)));
        line
    }

    fn placeholder_line(&self, width: usize) -> String {
        let placeholder_style = Style::new().foreground(Color::from(
            self.styler.placeholder_color().as_str(),
        ));
        let mut chars = self.props.placeholder_text().chars();
        let mut line = String::new();
        let mut used = 0;

        if self.caret_active() {
            let first = chars.next().unwrap_or(' ');
            let mut caret = self.caret.clone();
            caret.set_char(&first.to_string());
            line.push_str(&caret.view());
            used += first.width().unwrap_or(0).max(1);
        }

        let mut rest = String::new();
        for c in chars {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            rest.push(c);
        }
        if !rest.is_empty() {
            line.push_str(&placeholder_style.render(&rest));
        }
        line.push_str(&" ".repeat(width.saturating_sub(used)));
        line
    }
}

/// Adds a shade along the right and bottom edges of a block.
fn with_shadow(block: &str) -> String {
    let shade = Style::new().faint(true);
    let lines: Vec<&str> = block.lines().collect();
    let width = lines
        .iter()
        .map(|line| lipgloss::width_visible(line))
        .max()
        .unwrap_or(0);

    let mut out: Vec<String> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let pad = " ".repeat(width - lipgloss::width_visible(line));
            let edge = if i == 0 { " ".to_string() } else { shade.render("▒") };
            format!("{line}{pad}{edge}")
        })
        .collect();
    out.push(format!(" {}", shade.render(&"▒".repeat(width))));
    out.join("\n")
}
