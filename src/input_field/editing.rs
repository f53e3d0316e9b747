//! Edits and caret movement over the field's characters.
//!
//! Every function here is pure: it looks at the current characters and caret
//! and describes the result. The model decides what to report.

/// A candidate value together with the caret position after the edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Edit {
    pub value: Vec<char>,
    pub pos: usize,
}

impl Edit {
    pub fn text(&self) -> String {
        self.value.iter().collect()
    }
}

pub(super) fn insert(value: &[char], pos: usize, text: &[char]) -> Option<Edit> {
    if text.is_empty() {
        return None;
    }
    let mut out = Vec::with_capacity(value.len() + text.len());
    out.extend_from_slice(&value[..pos]);
    out.extend_from_slice(text);
    out.extend_from_slice(&value[pos..]);
    Some(Edit {
        value: out,
        pos: pos + text.len(),
    })
}

pub(super) fn delete_backward(value: &[char], pos: usize) -> Option<Edit> {
    if pos == 0 {
        return None;
    }
    let mut out = value.to_vec();
    out.remove(pos - 1);
    Some(Edit {
        value: out,
        pos: pos - 1,
    })
}

pub(super) fn delete_forward(value: &[char], pos: usize) -> Option<Edit> {
    if pos >= value.len() {
        return None;
    }
    let mut out = value.to_vec();
    out.remove(pos);
    Some(Edit { value: out, pos })
}

pub(super) fn delete_before(value: &[char], pos: usize) -> Option<Edit> {
    if pos == 0 {
        return None;
    }
    Some(Edit {
        value: value[pos..].to_vec(),
        pos: 0,
    })
}

pub(super) fn delete_after(value: &[char], pos: usize) -> Option<Edit> {
    if pos >= value.len() {
        return None;
    }
    Some(Edit {
        value: value[..pos].to_vec(),
        pos,
    })
}

pub(super) fn delete_word_backward(value: &[char], pos: usize) -> Option<Edit> {
    if pos == 0 {
        return None;
    }
    let start = word_backward(value, pos);
    let mut out = value[..start].to_vec();
    out.extend_from_slice(&value[pos..]);
    Some(Edit {
        value: out,
        pos: start,
    })
}

/// Start of the word left of `pos`, skipping whitespace first.
pub(super) fn word_backward(value: &[char], pos: usize) -> usize {
    let mut i = pos;
    while i > 0 && value[i - 1].is_whitespace() {
        i -= 1;
    }
    while i > 0 && !value[i - 1].is_whitespace() {
        i -= 1;
    }
    i
}

/// End of the word right of `pos`, skipping whitespace first.
pub(super) fn word_forward(value: &[char], pos: usize) -> usize {
    let mut i = pos;
    while i < value.len() && value[i].is_whitespace() {
        i += 1;
    }
    while i < value.len() && !value[i].is_whitespace() {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_insert_in_middle() {
        let edit = insert(&chars("helld"), 3, &chars("lo wor")).unwrap();
        assert_eq!(edit.text(), "hello world");
        assert_eq!(edit.pos, 9);
        assert!(insert(&chars("x"), 0, &[]).is_none());
    }

    #[test]
    fn test_single_character_deletes() {
        let value = chars("abc");
        assert_eq!(delete_backward(&value, 2).unwrap().text(), "ac");
        assert!(delete_backward(&value, 0).is_none());
        assert_eq!(delete_forward(&value, 0).unwrap().text(), "bc");
        assert!(delete_forward(&value, 3).is_none());
    }

    #[test]
    fn test_line_deletes() {
        let value = chars("hello world");
        let before = delete_before(&value, 6).unwrap();
        assert_eq!(before.text(), "world");
        assert_eq!(before.pos, 0);

        let after = delete_after(&value, 5).unwrap();
        assert_eq!(after.text(), "hello");
        assert_eq!(after.pos, 5);
    }

    #[test]
    fn test_word_motion() {
        let value = chars("one  two three");
        assert_eq!(word_backward(&value, 14), 9);
        assert_eq!(word_backward(&value, 9), 5);
        assert_eq!(word_forward(&value, 0), 3);
        assert_eq!(word_forward(&value, 3), 8);

        let edit = delete_word_backward(&value, 8).unwrap();
        assert_eq!(edit.text(), "one   three");
        assert_eq!(edit.pos, 5);
    }
}
