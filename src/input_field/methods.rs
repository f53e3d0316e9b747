//! Props access, focus handling and event handlers of the input field.

use super::editing::{self, Edit};
use super::filter::{clamp_reported, clamp_value, dropped_before, filter_value, single_line};
use super::model::{paste, Model};
use super::props::InputProps;
use super::types::{
    BlurElementMsg, ChangeType, ElementHandle, FocusElementMsg, PasteErrMsg, PasteMsg,
    ValueReport,
};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};
use tracing::{debug, trace};

impl Model {
    /// The current props.
    pub fn props(&self) -> &InputProps {
        &self.props
    }

    /// Replaces the props, as a parent does when its own state changes.
    ///
    /// Disabling a focused field drops focus without a blur report.
    pub fn set_props(&mut self, props: InputProps) {
        let was_empty = self.props.value.is_empty();
        self.props = props;
        if !self.props.enabled && self.focus {
            self.focus = false;
            self.caret.blur();
        }
        self.sync_cursor(was_empty);
    }

    /// Adopts a new value from the parent.
    pub fn set_value(&mut self, value: &str) {
        let was_empty = self.props.value.is_empty();
        self.props.value = value.to_string();
        self.sync_cursor(was_empty);
    }

    fn sync_cursor(&mut self, was_empty: bool) {
        let len = self.props.value.chars().count();
        if (was_empty && self.pos == 0) || self.pos > len {
            self.pos = len;
        }
    }

    /// The displayed value: the value prop clamped to the length limit.
    pub fn value(&self) -> String {
        clamp_value(&self.props.value, self.props.max_length())
    }

    /// Caret position as a character index.
    pub fn position(&self) -> usize {
        self.pos.min(self.props.value.chars().count())
    }

    /// Moves the caret, clamped to the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.props.value.chars().count());
    }

    /// Moves the caret to the start.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the caret to the end.
    pub fn cursor_end(&mut self) {
        self.set_cursor(usize::MAX);
    }

    /// Whether the field holds keyboard focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Takes keyboard focus. Disabled fields stay unfocused.
    ///
    /// Returns the caret's first blink tick, if any.
    pub fn focus(&mut self) -> Option<Cmd> {
        if !self.props.enabled {
            trace!(id = self.id, "focus ignored: field disabled");
            return None;
        }
        self.focus = true;
        self.caret.focus()
    }

    /// Gives up keyboard focus.
    ///
    /// An enabled field that was focused reports its value, clamped to the
    /// length limit, through `on_blur`.
    pub fn blur(&mut self) {
        let was_focused = self.focus;
        self.focus = false;
        self.caret.blur();

        if !was_focused || !self.props.enabled {
            return;
        }
        let value = clamp_value(&self.props.value, self.props.max_length());
        self.report(ValueReport {
            value,
            change_type: ChangeType::Blurred,
        });
    }

    /// Handle for imperative focus control.
    pub fn element(&self) -> ElementHandle {
        ElementHandle { id: self.id }
    }

    /// Processes a message.
    ///
    /// Window sizes and element requests are handled in every state; key,
    /// paste and caret messages only while the field is focused and enabled.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.container = (size.width, size.height);
            return None;
        }
        if let Some(req) = msg.downcast_ref::<FocusElementMsg>() {
            if req.id == self.id {
                return self.focus();
            }
            return None;
        }
        if let Some(req) = msg.downcast_ref::<BlurElementMsg>() {
            if req.id == self.id {
                self.blur();
            }
            return None;
        }

        if !self.focus || !self.props.enabled {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }
        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            self.insert_text(&paste_msg.0);
            return None;
        }
        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            debug!(id = self.id, error = %paste_err.0, "clipboard read failed");
            self.err = Some(paste_err.0.clone());
            return None;
        }

        self.caret.update(&msg)
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        // Return submits whatever modifiers are held.
        let submit_msg = KeyMsg {
            key: key_msg.key,
            modifiers: if key_msg.key == KeyCode::Enter {
                KeyModifiers::NONE
            } else {
                key_msg.modifiers
            },
        };
        if matches_binding(&submit_msg, &self.key_map.submit) {
            self.submit();
            return None;
        }
        if matches_binding(key_msg, &self.key_map.paste) {
            return Some(paste());
        }
        if self.handle_deletion_keys(key_msg) || self.handle_movement_keys(key_msg) {
            return None;
        }

        if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_text(&ch.to_string());
            }
        }
        None
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let value: Vec<char> = self.props.value.chars().collect();
        let pos = self.position();

        let edit = if matches_binding(key_msg, &self.key_map.delete_word_backward) {
            editing::delete_word_backward(&value, pos)
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            editing::delete_backward(&value, pos)
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            editing::delete_forward(&value, pos)
        } else if matches_binding(key_msg, &self.key_map.delete_before_cursor) {
            editing::delete_before(&value, pos)
        } else if matches_binding(key_msg, &self.key_map.delete_after_cursor) {
            editing::delete_after(&value, pos)
        } else {
            return false;
        };

        if let Some(edit) = edit {
            self.apply_edit(edit);
        }
        true
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let value: Vec<char> = self.props.value.chars().collect();
        let pos = self.position();

        if matches_binding(key_msg, &self.key_map.word_backward) {
            self.pos = editing::word_backward(&value, pos);
        } else if matches_binding(key_msg, &self.key_map.character_backward) {
            self.pos = pos.saturating_sub(1);
        } else if matches_binding(key_msg, &self.key_map.word_forward) {
            self.pos = editing::word_forward(&value, pos);
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            self.set_cursor(pos + 1);
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        } else {
            return false;
        }
        true
    }

    /// Inserts text at the caret as one change event.
    ///
    /// Line breaks and tabs become spaces, then characters the restriction
    /// type does not take are dropped.
    pub fn insert_text(&mut self, text: &str) {
        let kind = self.props.restriction_type;
        let accepted: Vec<char> = single_line(text)
            .chars()
            .filter(|&c| kind.accepts(c))
            .collect();
        if accepted.is_empty() {
            trace!(id = self.id, restriction = %kind, "input rejected by restriction type");
            return;
        }
        let value: Vec<char> = self.props.value.chars().collect();
        if let Some(edit) = editing::insert(&value, self.position(), &accepted) {
            self.apply_edit(edit);
        }
    }

    /// Runs the change pipeline on an edited value and reports the result.
    fn apply_edit(&mut self, edit: Edit) {
        let edited = edit.text();
        let filtered = filter_value(&edited, self.props.allow_space, self.props.allow_symbols);
        if filtered == self.props.value {
            trace!(id = self.id, "change suppressed: value unchanged after filtering");
            return;
        }

        let dropped = dropped_before(
            &edit.value,
            edit.pos,
            self.props.allow_space,
            self.props.allow_symbols,
        );
        let reported = clamp_reported(&self.props.value, filtered, self.props.max_length());
        self.pos = edit
            .pos
            .saturating_sub(dropped)
            .min(reported.chars().count());

        self.report(ValueReport {
            value: reported,
            change_type: ChangeType::Changed,
        });
    }

    /// Invokes the submit callback.
    pub fn submit(&self) {
        debug!(id = self.id, "submit");
        if let Some(on_submit) = &self.props.on_submit {
            on_submit();
        }
    }

    fn report(&self, report: ValueReport) {
        debug!(
            id = self.id,
            change_type = %report.change_type,
            len = report.value.chars().count(),
            "value report"
        );
        let callback = match report.change_type {
            ChangeType::Changed => &self.props.on_change,
            ChangeType::Blurred => &self.props.on_blur,
        };
        if let Some(callback) = callback {
            callback(report);
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
