//! Tree select field: a controlled form input that picks one node of a tree.
//!
//! The field shows the label of the currently selected node in a text
//! surface. Opening it shows the whole tree in an anchored panel; picking a
//! node commits that node's id to the form store and closes the panel.
//!
//! # Example
//!
//! ```ignore
//! use tree_select::prelude::*;
//!
//! let items = Tree::new(vec![
//!     TreeNode::new("a", "A").child(TreeNode::new("b", "B")),
//! ]);
//! let control = FormControl::with_defaults([("category", "")]);
//!
//! let mut field = TreeSelectField::new(
//!     TreeSelectProps::new("category", "Category", items).required(),
//!     &control,
//! );
//!
//! field.open();
//! field.select("b");
//! assert_eq!(field.display_text(), "B");
//! assert_eq!(control.value("category").as_deref(), Some("b"));
//! ```

mod events;
mod props;
mod render;
mod state;

pub use props::{DEFAULT_PLACEHOLDER, TreeSelectProps};
pub use render::FIELD_HEIGHT;
pub use state::{CloseReason, InputReason, Phase, TreeSelectField};
