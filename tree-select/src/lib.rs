//! Tree-structured value selector for terminal forms.
//!
//! The crate is organised around one widget, [`TreeSelectField`], and the
//! pieces it is built from:
//!
//! - [`tree`]: the node model, pre-order flattening and label resolution.
//! - [`form`]: a small form-state store that owns field values and runs
//!   validation on submit.
//! - [`view`]: the tree browser and anchored panel the field delegates to.
//! - [`render`]: the cell buffer everything draws into.

pub mod error;
pub mod event;
pub mod field;
pub mod form;
pub mod render;
pub mod tree;
pub mod view;

pub use error::{FormError, TreeError};
pub use field::{TreeSelectField, TreeSelectProps};
pub use form::{FormControl, FormValues, Rules, ValidationResult};
pub use tree::{FlatIndex, Tree, TreeNode, flatten, resolve_label};

pub mod prelude {
    pub use crate::event::{EventResult, Key, KeyCombo, Modifiers};
    pub use crate::field::{Phase, TreeSelectField, TreeSelectProps};
    pub use crate::form::{FieldBinding, FormControl, FormValues, Rules, ValidationResult};
    pub use crate::render::{Buffer, Palette, Rect};
    pub use crate::tree::{FlatIndex, Tree, TreeNode, flatten, resolve_label};
    pub use crate::view::{AnchoredPanel, PanelConfig, Popper, TreeBrowser, TreeView};
}
