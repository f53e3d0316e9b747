//! Core model of the input field.

use super::keymap::{default_key_map, KeyMap};
use super::props::InputProps;
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::PasteErrMsg;
use crate::context::{ControlContext, StyleProvider};
use crate::cursor::{next_id, Caret};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::time::Duration;

/// Container size assumed until the first `WindowSizeMsg` arrives.
pub(super) const DEFAULT_CONTAINER: (u16, u16) = (80, 24);

/// A single-line text input bound to parent-owned props.
///
/// The field is fully controlled: it never changes `props.value` on its own.
/// Edits are filtered, clamped and reported through `on_change`; the parent
/// decides whether to feed the reported value back with
/// [`Model::set_value`].
///
/// # Examples
///
/// ```rust
/// use atomic_controls::input_field::{InputProps, Model};
/// use std::sync::mpsc;
///
/// let (tx, rx) = mpsc::channel();
/// let mut field = Model::with_props(
///     InputProps::new()
///         .value("hello world!")
///         .allow_space(false)
///         .allow_symbols(false)
///         .on_change(move |report| {
///             let _ = tx.send(report);
///         }),
/// );
/// let _ = field.focus();
/// field.insert_text("?");
///
/// let report = rx.try_recv().unwrap();
/// assert_eq!(report.value, "helloworld");
/// field.set_value(&report.value);
/// assert_eq!(field.value(), "helloworld");
/// ```
pub struct Model {
    /// Error from the last clipboard read, if any.
    pub err: Option<String>,
    /// Key bindings.
    pub key_map: KeyMap,
    /// The caret drawn while focused.
    pub caret: Caret,
    /// Character shown in place of each character of a masked value.
    pub echo_character: char,

    pub(super) props: InputProps,
    pub(super) styler: Box<dyn StyleProvider + Send>,
    pub(super) focus: bool,
    pub(super) pos: usize,
    pub(super) container: (u16, u16),
    pub(super) id: usize,
}

/// Creates a field with default props and the default context.
pub fn new() -> Model {
    Model::with_props(InputProps::default())
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Creates a field from props, styled by the default context.
    pub fn with_props(props: InputProps) -> Self {
        let pos = props.value.chars().count();
        Self {
            err: None,
            key_map: default_key_map(),
            caret: Caret::new(),
            echo_character: '*',
            props,
            styler: Box::new(ControlContext::default()),
            focus: false,
            pos,
            container: DEFAULT_CONTAINER,
            id: next_id(),
        }
    }

    /// Uses `context` for style computation.
    pub fn with_context(mut self, context: ControlContext) -> Self {
        self.set_context(context);
        self
    }

    /// Uses `context` for style computation.
    pub fn set_context(&mut self, context: ControlContext) {
        self.styler = Box::new(context);
    }

    /// Replaces the style provider with a custom one.
    pub fn set_style_provider(&mut self, provider: Box<dyn StyleProvider + Send>) {
        self.styler = provider;
    }
}

/// Command that reads the system clipboard and yields a [`PasteMsg`] or
/// [`PasteErrMsg`].
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
