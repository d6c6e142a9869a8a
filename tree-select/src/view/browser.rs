//! Default tree view: an expandable, scrollable tree with a cursor.

use std::collections::HashSet;

use crate::event::{EventResult, Key, KeyCombo};
use crate::render::text::truncate_to_width;
use crate::render::{Brush, Buffer, Palette, Rect, TextStyle};
use crate::tree::{Tree, TreeNode};

use super::TreeView;

/// Columns of indentation per depth level.
const INDENT: u16 = 2;

/// A visible node in the flattened tree page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleNode {
    pub id: String,
    pub label: String,
    /// Depth in tree (0 = root).
    pub depth: u16,
    pub has_children: bool,
    pub is_expanded: bool,
}

/// Expand/collapse tree browser with cursor navigation and single selection.
///
/// Only nodes whose ancestors are all expanded are visible. The cursor is an
/// index into the visible list; selection is tracked by id so it survives
/// expand and collapse.
#[derive(Debug, Default)]
pub struct TreeBrowser {
    tree: Tree,
    /// Set of expanded node IDs.
    expanded: HashSet<String>,
    /// Flattened visible nodes (rebuilt on expand/collapse).
    visible: Vec<VisibleNode>,
    /// Id of the highlighted selection.
    selected: Option<String>,
    /// Cursor (index into visible list).
    cursor: Option<usize>,
    /// Scroll offset in rows.
    scroll_offset: u16,
    /// Viewport height from the last render.
    viewport_height: u16,
}

impl TreeBrowser {
    /// Create an empty browser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a browser showing `tree` with every node collapsed.
    pub fn with_items(tree: &Tree) -> Self {
        let mut browser = Self::new();
        browser.set_items(tree);
        browser
    }

    // -------------------------------------------------------------------------
    // Item access
    // -------------------------------------------------------------------------

    /// Get the number of visible nodes.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Get a visible node by index.
    pub fn visible_node(&self, index: usize) -> Option<&VisibleNode> {
        self.visible.get(index)
    }

    /// All visible node ids in order.
    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible.iter().map(|n| n.id.as_str()).collect()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    // -------------------------------------------------------------------------
    // Expand/Collapse
    // -------------------------------------------------------------------------

    /// Expand a node by ID.
    pub fn expand(&mut self, node_id: &str) {
        if self.expanded.insert(node_id.to_string()) {
            self.rebuild_visible();
        }
    }

    /// Collapse a node by ID.
    pub fn collapse(&mut self, node_id: &str) {
        if self.expanded.remove(node_id) {
            self.rebuild_visible();
        }
    }

    /// Toggle expand/collapse for a node.
    pub fn toggle(&mut self, node_id: &str) {
        if !self.expanded.remove(node_id) {
            self.expanded.insert(node_id.to_string());
        }
        self.rebuild_visible();
    }

    /// Check if a node is expanded.
    pub fn is_expanded(&self, node_id: &str) -> bool {
        self.expanded.contains(node_id)
    }

    /// Expand all expandable nodes.
    pub fn expand_all(&mut self) {
        Self::collect_all_expandable_ids(self.tree.roots(), &mut self.expanded);
        self.rebuild_visible();
    }

    /// Collapse all nodes.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.rebuild_visible();
    }

    fn collect_all_expandable_ids(items: &[TreeNode], expanded: &mut HashSet<String>) {
        for item in items {
            if item.has_children() {
                expanded.insert(item.id.clone());
                Self::collect_all_expandable_ids(&item.children, expanded);
            }
        }
    }

    /// Expand every ancestor of `id` and put the cursor on it.
    ///
    /// Uses the first node with that id in pre-order. Returns `false` if the
    /// id is not in the tree.
    pub fn reveal(&mut self, id: &str) -> bool {
        let mut path = Vec::new();
        if !Self::path_to(self.tree.roots(), id, &mut path) {
            return false;
        }
        for ancestor in path {
            self.expanded.insert(ancestor);
        }
        self.rebuild_visible();
        if let Some(index) = self.visible.iter().position(|n| n.id == id) {
            self.cursor = Some(index);
            self.scroll_to_cursor();
        }
        true
    }

    /// Collect the ids of the ancestors of `id` into `path`, root first.
    fn path_to(items: &[TreeNode], id: &str, path: &mut Vec<String>) -> bool {
        for item in items {
            if item.id == id {
                return true;
            }
            path.push(item.id.clone());
            if Self::path_to(&item.children, id, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    /// Rebuild the flattened visible node list.
    fn rebuild_visible(&mut self) {
        self.visible.clear();
        Self::collect_visible(self.tree.roots(), &self.expanded, 0, &mut self.visible);

        // Clamp cursor if out of bounds
        if let Some(cursor) = self.cursor
            && cursor >= self.visible.len()
        {
            self.cursor = self.visible.len().checked_sub(1);
        }

        let max_scroll = self.max_scroll_offset();
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }
    }

    /// Recursively collect visible nodes into the flat list.
    fn collect_visible(
        items: &[TreeNode],
        expanded: &HashSet<String>,
        depth: u16,
        out: &mut Vec<VisibleNode>,
    ) {
        for item in items {
            let has_children = item.has_children();
            let is_expanded = expanded.contains(&item.id);

            out.push(VisibleNode {
                id: item.id.clone(),
                label: item.label.clone(),
                depth,
                has_children,
                is_expanded,
            });

            if is_expanded && has_children {
                Self::collect_visible(&item.children, expanded, depth + 1, out);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Get the current cursor position (index into visible list).
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Get the ID of the node at the cursor.
    pub fn cursor_id(&self) -> Option<&str> {
        self.cursor
            .and_then(|i| self.visible.get(i))
            .map(|n| n.id.as_str())
    }

    /// Set the cursor position. Out-of-range indices are ignored.
    pub fn set_cursor(&mut self, index: usize) {
        if index < self.visible.len() {
            self.cursor = Some(index);
            self.scroll_to_cursor();
        }
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) {
        match self.cursor {
            Some(cursor) if cursor > 0 => self.set_cursor(cursor - 1),
            None => self.set_cursor(0),
            _ => {}
        }
    }

    /// Move cursor down.
    pub fn cursor_down(&mut self) {
        match self.cursor {
            Some(cursor) => self.set_cursor(cursor + 1),
            None => self.set_cursor(0),
        }
    }

    /// Move cursor to the first node.
    pub fn cursor_first(&mut self) {
        self.set_cursor(0);
    }

    /// Move cursor to the last visible node.
    pub fn cursor_last(&mut self) {
        if let Some(last) = self.visible.len().checked_sub(1) {
            self.set_cursor(last);
        }
    }

    /// Move cursor by a page.
    fn cursor_page(&mut self, down: bool) {
        let page = self.viewport_height.max(1) as usize;
        let current = self.cursor.unwrap_or(0);
        let target = if down {
            (current + page).min(self.visible.len().saturating_sub(1))
        } else {
            current.saturating_sub(page)
        };
        self.set_cursor(target);
    }

    /// Move cursor to the parent of the current node.
    pub fn cursor_to_parent(&mut self) -> Option<usize> {
        let cursor = self.cursor?;
        let depth = self.visible.get(cursor)?.depth;
        if depth == 0 {
            return None;
        }
        let parent = (0..cursor).rev().find(|&i| self.visible[i].depth < depth)?;
        self.set_cursor(parent);
        Some(parent)
    }

    /// Move cursor to the first child of the current (expanded) node.
    pub fn cursor_to_first_child(&mut self) -> Option<usize> {
        let cursor = self.cursor?;
        let node = self.visible.get(cursor)?;
        if !node.is_expanded || !node.has_children {
            return None;
        }
        self.set_cursor(cursor + 1);
        Some(cursor + 1)
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    fn max_scroll_offset(&self) -> u16 {
        (self.visible.len() as u16).saturating_sub(self.viewport_height.max(1))
    }

    /// Adjust the scroll offset so the cursor row is in view.
    pub fn scroll_to_cursor(&mut self) {
        let Some(cursor) = self.cursor else { return };
        let cursor = cursor as u16;
        let height = self.viewport_height.max(1);
        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
        } else if cursor >= self.scroll_offset + height {
            self.scroll_offset = cursor + 1 - height;
        }
    }
}

impl TreeView for TreeBrowser {
    fn set_items(&mut self, tree: &Tree) {
        if self.tree.ptr_eq(tree) {
            return;
        }
        self.tree = tree.clone();
        self.rebuild_visible();
    }

    fn set_selected(&mut self, id: Option<&str>) {
        self.selected = id.filter(|id| !id.is_empty()).map(str::to_string);
        match self.selected.clone() {
            Some(id) => {
                if !self.reveal(&id) {
                    self.cursor = None;
                }
            }
            None => self.cursor = None,
        }
    }

    fn content_height(&self) -> u16 {
        self.visible.len() as u16
    }

    fn handle_key(&mut self, key: &KeyCombo, on_select: &mut dyn FnMut(&str)) -> EventResult {
        if key.modifiers.ctrl || key.modifiers.alt {
            return EventResult::Ignored;
        }

        match key.key {
            Key::Left => {
                let Some(node) = self.cursor.and_then(|i| self.visible.get(i)) else {
                    return EventResult::Ignored;
                };
                if node.is_expanded {
                    let id = node.id.clone();
                    self.collapse(&id);
                } else {
                    self.cursor_to_parent();
                }
            }
            Key::Right => {
                let Some(node) = self.cursor.and_then(|i| self.visible.get(i)) else {
                    return EventResult::Ignored;
                };
                if node.has_children && !node.is_expanded {
                    let id = node.id.clone();
                    self.expand(&id);
                } else {
                    self.cursor_to_first_child();
                }
            }
            Key::Up => self.cursor_up(),
            Key::Down => self.cursor_down(),
            Key::Home => self.cursor_first(),
            Key::End => self.cursor_last(),
            Key::PageUp => self.cursor_page(false),
            Key::PageDown => self.cursor_page(true),
            Key::Enter => {
                let Some(id) = self.cursor_id().map(str::to_string) else {
                    return EventResult::Ignored;
                };
                self.selected = Some(id.clone());
                on_select(&id);
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn handle_click(&mut self, x: u16, y: u16, on_select: &mut dyn FnMut(&str)) -> EventResult {
        let index = (self.scroll_offset + y) as usize;
        let Some(node) = self.visible.get(index) else {
            return EventResult::Ignored;
        };

        // The expand glyph toggles; anywhere else on the row selects.
        let glyph_start = node.depth * INDENT;
        if node.has_children && x >= glyph_start && x < glyph_start + INDENT {
            let id = node.id.clone();
            self.cursor = Some(index);
            self.toggle(&id);
            return EventResult::Consumed;
        }

        let id = node.id.clone();
        self.set_cursor(index);
        self.selected = Some(id.clone());
        on_select(&id);
        EventResult::Consumed
    }

    fn type_ahead(&mut self, query: &str) {
        if query.is_empty() {
            return;
        }
        let query = query.to_lowercase();
        if let Some(index) = self
            .visible
            .iter()
            .position(|n| n.label.to_lowercase().starts_with(&query))
        {
            self.set_cursor(index);
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        if area.is_empty() {
            return;
        }
        self.viewport_height = area.height;
        let max_scroll = self.max_scroll_offset();
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }
        self.scroll_to_cursor();

        for row in 0..area.height {
            let index = (self.scroll_offset + row) as usize;
            let Some(node) = self.visible.get(index) else {
                break;
            };
            let y = area.y + row;
            let is_cursor = self.cursor == Some(index);
            let is_selected = self.selected.as_deref() == Some(node.id.as_str());

            let bg = if is_cursor { palette.hover } else { palette.surface };
            let brush = if is_selected {
                Brush::new(palette.primary, bg).with_style(TextStyle::bold())
            } else {
                Brush::new(palette.text, bg)
            };
            buf.fill(Rect::new(area.x, y, area.width, 1), bg);

            let glyph = match (node.has_children, node.is_expanded) {
                (true, true) => "▾ ",
                (true, false) => "▸ ",
                (false, _) => "  ",
            };
            let indent = (node.depth * INDENT).min(area.width);
            let mut x = area.x + indent;
            let remaining = area.width - indent;
            let written = buf.set_string(x, y, glyph, remaining, Brush::new(palette.muted, bg));
            x += written;

            let label = truncate_to_width(&node.label, (remaining - written) as usize);
            buf.set_string(x, y, &label, remaining - written, brush);
        }
    }
}
