//! Key bindings for the input field.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// Key bindings of the input field.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Submit the field.
    pub submit: Binding,
    /// Move one character right.
    pub character_forward: Binding,
    /// Move one character left.
    pub character_backward: Binding,
    /// Move one word right.
    pub word_forward: Binding,
    /// Move one word left.
    pub word_backward: Binding,
    /// Delete the previous word.
    pub delete_word_backward: Binding,
    /// Delete everything after the caret.
    pub delete_after_cursor: Binding,
    /// Delete everything before the caret.
    pub delete_before_cursor: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Jump to the start.
    pub line_start: Binding,
    /// Jump to the end.
    pub line_end: Binding,
    /// Paste from the clipboard.
    pub paste: Binding,
}

/// The default bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        submit: new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "submit")]),
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        word_forward: new_binding(vec![with_keys_str(&["alt+right", "ctrl+right", "alt+f"])]),
        word_backward: new_binding(vec![with_keys_str(&["alt+left", "ctrl+left", "alt+b"])]),
        delete_word_backward: new_binding(vec![with_keys_str(&["alt+backspace", "ctrl+w"])]),
        delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
        delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        paste: new_binding(vec![with_keys_str(&["ctrl+v"]), with_help("ctrl+v", "paste")]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.submit, &self.paste]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.submit, &self.paste],
            vec![
                &self.character_forward,
                &self.character_backward,
                &self.word_forward,
                &self.word_backward,
                &self.line_start,
                &self.line_end,
            ],
            vec![
                &self.delete_character_backward,
                &self.delete_character_forward,
                &self.delete_word_backward,
                &self.delete_before_cursor,
                &self.delete_after_cursor,
            ],
        ]
    }
}
