//! Core types for the input field.

use bubbletea_rs::{Cmd, Msg};
use std::fmt;
use std::str::FromStr;

/// Why a value is being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    /// The user edited the value.
    Changed,
    /// The field lost focus.
    Blurred,
}

impl ChangeType {
    /// The tag as a string: `"changed"` or `"blurred"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeType::Changed => "changed",
            ChangeType::Blurred => "blurred",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of the change and blur callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueReport {
    /// The value the parent should adopt.
    pub value: String,
    /// Why it is reported.
    pub change_type: ChangeType,
}

/// Callback receiving change and blur reports.
/// `Send` keeps the field usable inside a bubbletea-rs `Model`.
pub type ValueCallback = Box<dyn Fn(ValueReport) + Send>;

/// Callback invoked when the user submits the field.
pub type SubmitCallback = Box<dyn Fn() + Send>;

/// Clipboard paste message carrying raw text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Asks the field with the given id to take focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusElementMsg {
    /// Target element id.
    pub id: usize,
}

/// Asks the field with the given id to give up focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurElementMsg {
    /// Target element id.
    pub id: usize,
}

/// Handle to a rendered field, for imperative focus control.
///
/// Obtain one with `Model::element()` and keep it wherever the field itself
/// is out of reach; the commands it produces are routed back to the field by
/// the regular update loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle {
    pub(super) id: usize,
}

impl ElementHandle {
    /// The element id.
    pub fn id(self) -> usize {
        self.id
    }

    /// Command that focuses the field.
    pub fn focus(self) -> Cmd {
        let id = self.id;
        Box::pin(async move { Some(Box::new(FocusElementMsg { id }) as Msg) })
    }

    /// Command that blurs the field.
    pub fn blur(self) -> Cmd {
        let id = self.id;
        Box::pin(async move { Some(Box::new(BlurElementMsg { id }) as Msg) })
    }
}

/// Rendered size in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
}

/// The semantic type of an input, controlling its input affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestrictionType {
    /// Free text.
    #[default]
    Text,
    /// Numeric entry; only digits, sign, point and exponent keys are taken.
    Number,
    /// Masked entry.
    Password,
    /// E-mail address.
    Email,
    /// Telephone number; only digits and dialing symbols are taken.
    Tel,
    /// Search box.
    Search,
    /// URL.
    Url,
}

impl RestrictionType {
    /// The lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            RestrictionType::Text => "text",
            RestrictionType::Number => "number",
            RestrictionType::Password => "password",
            RestrictionType::Email => "email",
            RestrictionType::Tel => "tel",
            RestrictionType::Search => "search",
            RestrictionType::Url => "url",
        }
    }

    /// Whether a typed character is accepted at all.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            RestrictionType::Number => ch.is_ascii_digit() || matches!(ch, '.' | '+' | '-' | 'e' | 'E'),
            RestrictionType::Tel => {
                ch.is_ascii_digit() || matches!(ch, '+' | '-' | '(' | ')' | '#' | '*' | ' ')
            }
            _ => true,
        }
    }

    /// Whether the value is masked on screen.
    pub fn masked(self) -> bool {
        self == RestrictionType::Password
    }
}

impl fmt::Display for RestrictionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown restriction type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseRestrictionError {
    /// The name matches no restriction type.
    #[error("unknown restriction type: {0:?}")]
    Unknown(String),
}

impl FromStr for RestrictionType {
    type Err = ParseRestrictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(RestrictionType::Text),
            "number" => Ok(RestrictionType::Number),
            "password" => Ok(RestrictionType::Password),
            "email" => Ok(RestrictionType::Email),
            "tel" => Ok(RestrictionType::Tel),
            "search" => Ok(RestrictionType::Search),
            "url" => Ok(RestrictionType::Url),
            _ => Err(ParseRestrictionError::Unknown(s.to_string())),
        }
    }
}

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}
