//! Character filtering and length clamping.
//!
//! These run on every change event, in this order: [`filter_value`] and then
//! [`clamp_reported`].

/// Characters that count as non-symbols.
pub fn is_plain(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == ' '
}

/// Applies the space and symbol switches to a freshly edited value.
///
/// With `allow_space` off only the first space is dropped. A keystroke adds
/// at most one character, so a value that starts without spaces stays
/// without them. With `allow_symbols` off every character outside
/// `[a-zA-Z0-9 ]` is dropped.
pub fn filter_value(value: &str, allow_space: bool, allow_symbols: bool) -> String {
    let mut result = value.to_string();
    if !allow_space {
        if let Some(at) = result.find(' ') {
            result.remove(at);
        }
    }
    if !allow_symbols {
        result.retain(is_plain);
    }
    result
}

/// Counts the characters in front of `pos` that [`filter_value`] drops.
pub fn dropped_before(value: &[char], pos: usize, allow_space: bool, allow_symbols: bool) -> usize {
    let first_space = if allow_space {
        None
    } else {
        value.iter().position(|&c| c == ' ')
    };
    value
        .iter()
        .take(pos)
        .enumerate()
        .filter(|&(i, &c)| Some(i) == first_space || (!allow_symbols && !is_plain(c)))
        .count()
}

/// Replaces line breaks and tabs so pasted text stays on one line.
pub fn single_line(text: &str) -> String {
    text.replace("\r\n", " ")
        .chars()
        .map(|c| match c {
            '\r' | '\n' | '\t' => ' ',
            other => other,
        })
        .collect()
}

/// The first `n` characters of `s`.
pub fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Clamps an edited value against the length limit before it is reported.
///
/// An over-long edit is rejected by reporting the previous value's first
/// `limit` characters. With no previous value the edit itself is cut down.
pub fn clamp_reported(previous: &str, edited: String, limit: Option<usize>) -> String {
    let Some(limit) = limit else {
        return edited;
    };
    if edited.chars().count() <= limit {
        return edited;
    }
    if previous.is_empty() {
        take_chars(&edited, limit)
    } else {
        take_chars(previous, limit)
    }
}

/// Clamps a value to the length limit.
pub fn clamp_value(value: &str, limit: Option<usize>) -> String {
    match limit {
        Some(limit) => take_chars(value, limit),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_spaces_and_symbols() {
        assert_eq!(filter_value("hello world!", false, false), "helloworld");
    }

    #[test]
    fn test_filter_only_first_space() {
        assert_eq!(filter_value("a b c", false, true), "ab c");
    }

    #[test]
    fn test_filter_symbols_keeps_spaces() {
        assert_eq!(filter_value("a-b c_d?", true, false), "ab cd");
        assert_eq!(filter_value("héllo", true, false), "hllo");
    }

    #[test]
    fn test_dropped_before_counts_only_leading_part() {
        let value: Vec<char> = "xa b".chars().collect();
        assert_eq!(dropped_before(&value, 1, false, true), 0);
        assert_eq!(dropped_before(&value, 4, false, true), 1);

        let value: Vec<char> = "a#b c!".chars().collect();
        assert_eq!(dropped_before(&value, 3, true, false), 1);
        assert_eq!(dropped_before(&value, 6, false, false), 3);
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("ab\ncd"), "ab cd");
        assert_eq!(single_line("a\r\nb\tc"), "a b c");
        assert_eq!(single_line("plain"), "plain");
    }

    #[test]
    fn test_filter_passthrough() {
        assert_eq!(filter_value("any thing!", true, true), "any thing!");
    }

    #[test]
    fn test_clamp_uses_previous_prefix() {
        let reported = clamp_reported("abcdef", "abcdefg".to_string(), Some(4));
        assert_eq!(reported, "abcd");
    }

    #[test]
    fn test_clamp_empty_previous_cuts_edit() {
        let reported = clamp_reported("", "abcdefg".to_string(), Some(4));
        assert_eq!(reported, "abcd");
    }

    #[test]
    fn test_clamp_within_limit_or_unlimited() {
        assert_eq!(clamp_reported("ab", "abc".to_string(), Some(4)), "abc");
        assert_eq!(clamp_reported("ab", "abcdef".to_string(), None), "abcdef");
    }

    #[test]
    fn test_clamp_counts_characters() {
        assert_eq!(clamp_value("ÿÿÿÿ", Some(2)), "ÿÿ");
        assert_eq!(clamp_value("abc", None), "abc");
    }
}
