#![warn(missing_docs)]

//! # atomic-controls
//!
//! Atomic form controls for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) and styled with
//! lipgloss.
//!
//! ## Overview
//!
//! Controls are leaf widgets. A parent owns their configuration (the props),
//! feeds messages into `update()`, draws them with `view()`, and learns about
//! user actions through callbacks. Nothing is read from global state: the
//! account and theme information a control needs is passed explicitly as a
//! [`ControlContext`](context::ControlContext).
//!
//! ## Components
//!
//! - **`InputField`**: single-line text input with character filtering,
//!   length limits and computed styling
//!
//! ## Modules
//!
//! - [`input_field`]: the input field widget
//! - [`style`]: the style record and its padding arithmetic
//! - [`context`]: account/theme context and style providers
//! - [`cursor`]: the caret drawn inside focused fields
//! - [`key`]: key bindings
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use atomic_controls::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//! use std::sync::mpsc::{channel, Receiver};
//!
//! struct App {
//!     name: InputField,
//!     changes: Receiver<ValueReport>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let (tx, changes) = channel();
//!         let mut name = InputField::with_props(
//!             InputProps::new()
//!                 .heading("Name")
//!                 .allow_symbols(false)
//!                 .on_change(move |report| {
//!                     let _ = tx.send(report);
//!                 }),
//!         );
//!         let cmd = name.focus();
//!         (Self { name, changes }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         let cmd = self.name.update(msg);
//!         while let Ok(report) = self.changes.try_recv() {
//!             self.name.set_value(&report.value);
//!         }
//!         cmd
//!     }
//!
//!     fn view(&self) -> String {
//!         self.name.view()
//!     }
//! }
//! ```

pub mod context;
pub mod cursor;
pub mod input_field;
pub mod key;
pub mod style;

use bubbletea_rs::Cmd;

/// Focus management shared by all controls.
///
/// - `focus()` marks the control as receiving keyboard input and may return a
///   command, such as the first caret blink.
/// - `blur()` releases focus. Controls that report on focus loss do so here.
/// - `focused()` reports the current state.
///
/// ```rust
/// use atomic_controls::prelude::*;
///
/// fn cycle<T: Component>(control: &mut T) {
///     let _ = control.focus();
///     assert!(control.focused());
///     control.blur();
///     assert!(!control.focused());
/// }
///
/// let mut field = input_field_new();
/// cycle(&mut field);
/// ```
pub trait Component {
    /// Takes keyboard focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Releases keyboard focus.
    fn blur(&mut self);

    /// Whether the control holds keyboard focus.
    fn focused(&self) -> bool;
}

pub use context::{AccountState, ControlContext, StyleProvider, StylingRequest, StylingState};
pub use cursor::{Caret, CaretMode};
pub use input_field::{
    new as input_field_new, ChangeType, ElementHandle, InputProps, Model as InputField,
    RestrictionType, ValueReport,
};
pub use key::{matches, matches_binding, new_binding, with_help, with_keys_str, Binding, KeyPress};
pub use style::{BorderKind, Dimension, InputStyle};

/// Commonly used types in one import.
///
/// ```rust
/// use atomic_controls::prelude::*;
///
/// let field = InputField::with_props(InputProps::new().value("abc"));
/// assert_eq!(field.value(), "abc");
/// ```
pub mod prelude {
    pub use crate::context::{
        AccountState, ControlContext, StyleProvider, StylingRequest, StylingState,
    };
    pub use crate::cursor::{Caret, CaretMode};
    pub use crate::input_field::{
        new as input_field_new, ChangeType, ElementHandle, InputProps, Model as InputField,
        RestrictionType, Size, ValueReport,
    };
    pub use crate::key::{
        matches, matches_binding, new_binding, with_help, with_keys_str, Binding, KeyMap,
        KeyPress,
    };
    pub use crate::style::{Background, BorderKind, Dimension, InputStyle};
    pub use crate::Component;
}
