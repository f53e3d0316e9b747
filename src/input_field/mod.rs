//! Styled single-line input field.
//!
//! The field is a controlled component: its configuration and value arrive
//! as [`InputProps`] owned by the parent, and every user action is reported
//! back through callbacks instead of being applied in place.
//!
//! # Reports
//!
//! - Each edit (typed character, deletion, paste) produces a candidate value.
//!   The candidate is filtered by the `allow_space` and `allow_symbols`
//!   switches, dropped if it equals the current value, clamped to `length`
//!   and reported to `on_change` tagged [`ChangeType::Changed`].
//! - Losing focus reports the clamped value to `on_blur` tagged
//!   [`ChangeType::Blurred`], unless the field is disabled.
//! - Enter calls `on_submit`.
//!
//! # Basic Usage
//!
//! ```rust
//! use atomic_controls::input_field::{InputProps, Model};
//! use atomic_controls::style::Dimension;
//!
//! let mut field = Model::with_props(
//!     InputProps::new()
//!         .placeholder("Name")
//!         .width(Dimension::Cells(20))
//!         .length(32),
//! );
//! let _ = field.focus();
//! assert!(field.focused());
//! assert!(!field.view().is_empty());
//! ```
//!
//! # Styling
//!
//! The base style comes from the field's
//! [`StyleProvider`](crate::context::StyleProvider), by default a
//! [`ControlContext`](crate::context::ControlContext). See
//! [`Model::computed_style`] for how props refine it.

mod editing;
pub mod filter;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod props;
pub mod types;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, paste, Model};
pub use props::InputProps;
pub use types::{
    BlurElementMsg, ChangeType, ElementHandle, FocusElementMsg, ParseRestrictionError,
    PasteErrMsg, PasteMsg, RestrictionType, Size, SubmitCallback, ValueCallback, ValueReport,
};
