//! Rendering collaborators used by the tree select field.
//!
//! The field depends only on the [`TreeView`] and [`AnchoredPanel`] traits.
//! [`TreeBrowser`] and [`Popper`] are the default terminal implementations;
//! any other toolkit can be plugged in by implementing the traits.

mod browser;
mod popper;

pub use browser::{TreeBrowser, VisibleNode};
pub use popper::{PanelConfig, Placement, Popper};

use crate::event::{EventResult, KeyCombo};
use crate::render::{Buffer, Palette, Rect};
use crate::tree::Tree;

/// A widget that renders a tree and reports node selection.
pub trait TreeView {
    /// Replace the items shown.
    fn set_items(&mut self, tree: &Tree);

    /// Highlight the node with this id and make sure it is visible.
    fn set_selected(&mut self, id: Option<&str>);

    /// Rows needed to show every visible node.
    fn content_height(&self) -> u16;

    /// Handle a key. `on_select` is called with the id of a picked node.
    fn handle_key(&mut self, key: &KeyCombo, on_select: &mut dyn FnMut(&str)) -> EventResult;

    /// Handle a click at `(x, y)` relative to the last render area.
    fn handle_click(&mut self, x: u16, y: u16, on_select: &mut dyn FnMut(&str)) -> EventResult;

    /// Move the cursor to the first visible node whose label starts with `query`.
    fn type_ahead(&mut self, _query: &str) {}

    /// Draw into `area`.
    fn render(&mut self, area: Rect, buf: &mut Buffer, palette: &Palette);
}

/// A floating panel anchored to another element.
pub trait AnchoredPanel {
    /// Compute where a panel with `content_height` rows goes.
    fn place(&self, anchor: Rect, viewport: Rect, content_height: u16) -> Rect;

    /// Draw the panel chrome over `area` and return the content rect.
    fn render_frame(&self, area: Rect, title: &str, buf: &mut Buffer, palette: &Palette) -> Rect;
}
