//! Caret sub-component for atomic controls.
//!
//! The caret marks the insertion point of a focused field. It renders the
//! character underneath it in reverse video and can blink, stay solid or be
//! hidden. Blinking is driven by [`CaretBlinkMsg`] ticks that carry the id of
//! the caret that scheduled them, so several fields on one screen never steal
//! each other's ticks.

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

/// Hands out ids shared by carets and element handles.
pub(crate) fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Tick that toggles a blinking caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretBlinkMsg {
    /// Id of the caret that scheduled the tick.
    pub id: usize,
    /// Sequence tag; stale ticks are dropped.
    pub tag: usize,
}

/// How the caret is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaretMode {
    /// Toggles on every blink tick.
    #[default]
    Blink,
    /// Always drawn while focused.
    Static,
    /// Never drawn.
    Hide,
}

/// The caret of a text field.
#[derive(Debug, Clone)]
pub struct Caret {
    /// Delay between blink ticks.
    pub blink_speed: Duration,
    /// Style applied when the caret is drawn. Reverse video is always added.
    pub style: Style,
    /// Style for the character underneath while the caret is not drawn.
    pub text_style: Style,

    ch: String,
    id: usize,
    focus: bool,
    // true while the caret block is *not* drawn
    off: bool,
    tag: usize,
    mode: CaretMode,
}

impl Default for Caret {
    fn default() -> Self {
        Self {
            blink_speed: DEFAULT_BLINK_SPEED,
            style: Style::new(),
            text_style: Style::new(),
            ch: " ".to_string(),
            id: next_id(),
            focus: false,
            off: true,
            tag: 0,
            mode: CaretMode::Blink,
        }
    }
}

impl Caret {
    /// Creates an unfocused blinking caret.
    pub fn new() -> Self {
        Self::default()
    }

    /// The caret's id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The current mode.
    pub fn mode(&self) -> CaretMode {
        self.mode
    }

    /// Changes the mode. Returns the first blink tick when switching to
    /// [`CaretMode::Blink`] while focused.
    pub fn set_mode(&mut self, mode: CaretMode) -> Option<Cmd> {
        self.mode = mode;
        self.off = mode == CaretMode::Hide || !self.focus;
        if mode == CaretMode::Blink && self.focus {
            return self.schedule_blink();
        }
        None
    }

    /// Shows the caret and starts blinking if the mode asks for it.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.off = self.mode == CaretMode::Hide;
        if self.mode == CaretMode::Blink {
            return self.schedule_blink();
        }
        None
    }

    /// Hides the caret and stops accepting blink ticks.
    pub fn blur(&mut self) {
        self.focus = false;
        self.off = true;
    }

    /// Whether the caret block is drawn right now.
    pub fn visible(&self) -> bool {
        !self.off
    }

    /// Sets the character drawn under the caret.
    pub fn set_char(&mut self, ch: &str) {
        self.ch = ch.to_string();
    }

    /// Handles blink ticks addressed to this caret.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let blink = msg.downcast_ref::<CaretBlinkMsg>()?;
        if self.mode != CaretMode::Blink || !self.focus {
            return None;
        }
        if blink.id != self.id || blink.tag != self.tag {
            return None;
        }
        self.off = !self.off;
        self.schedule_blink()
    }

    fn schedule_blink(&mut self) -> Option<Cmd> {
        self.tag += 1;
        let (id, tag) = (self.id, self.tag);
        Some(tick(self.blink_speed, move |_| {
            Box::new(CaretBlinkMsg { id, tag }) as Msg
        }))
    }

    /// Renders the character under the caret.
    pub fn view(&self) -> String {
        if self.off {
            return self.text_style.clone().inline(true).render(&self.ch);
        }
        self.style.clone().inline(true).reverse(true).render(&self.ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_shows_caret() {
        let mut caret = Caret::new();
        assert!(!caret.visible());

        let cmd = caret.focus();
        assert!(cmd.is_some());
        assert!(caret.visible());

        caret.blur();
        assert!(!caret.visible());
    }

    #[test]
    fn test_static_mode_schedules_nothing() {
        let mut caret = Caret::new();
        assert!(caret.set_mode(CaretMode::Static).is_none());
        assert!(caret.focus().is_none());
        assert!(caret.visible());
    }

    #[test]
    fn test_hidden_mode_never_draws() {
        let mut caret = Caret::new();
        let _ = caret.set_mode(CaretMode::Hide);
        let _ = caret.focus();
        assert!(!caret.visible());
    }

    #[test]
    fn test_blink_toggles_only_for_current_tag() {
        let mut caret = Caret::new();
        let _ = caret.focus();
        let current = CaretBlinkMsg {
            id: caret.id(),
            tag: caret.tag,
        };
        let stale = CaretBlinkMsg {
            id: caret.id(),
            tag: caret.tag - 1,
        };
        let foreign = CaretBlinkMsg {
            id: caret.id() + 1000,
            tag: caret.tag,
        };

        assert!(caret.update(&(Box::new(stale) as Msg)).is_none());
        assert!(caret.update(&(Box::new(foreign) as Msg)).is_none());
        assert!(caret.visible());

        assert!(caret.update(&(Box::new(current) as Msg)).is_some());
        assert!(!caret.visible());
    }

    #[tokio::test]
    async fn test_blink_tick_carries_caret_id() {
        let mut caret = Caret::new();
        caret.blink_speed = Duration::from_millis(1);
        let cmd = caret.focus().expect("blink cmd");

        let msg = cmd.await.expect("blink msg");
        let blink = msg.downcast_ref::<CaretBlinkMsg>().expect("caret blink");
        assert_eq!(blink.id, caret.id());
        assert_eq!(blink.tag, caret.tag);
    }
}
