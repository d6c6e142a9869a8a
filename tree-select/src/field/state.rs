//! Tree select field state.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::form::{FieldBinding, FieldState, FormControl, Rules};
use crate::render::Rect;
use crate::tree::{FlatIndexCache, Tree, resolve_label};
use crate::view::{AnchoredPanel, Popper, TreeBrowser, TreeView};

use super::props::TreeSelectProps;

/// Whether the tree panel is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Closed,
    Open,
}

/// Why the panel closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// A node was picked.
    Selected,
    /// Escape, click-away or focus loss.
    Dismissed,
    /// `close()` was called by the owner.
    Programmatic,
}

/// Where a change to the typed text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputReason {
    /// The user typed or deleted characters.
    Input,
    /// The field replaced the text itself after a selection.
    Reset,
}

/// A controlled single-selection field over a tree.
///
/// The value lives in the form store and is reached through a
/// [`FieldBinding`]. The field itself only owns transient UI state: whether
/// the panel is open, whether it has focus, and the typed text.
///
/// Typed text is never a value candidate. The text surface always shows the
/// resolved label of the committed selection; only picking a node in the
/// tree changes the value.
///
/// Rendering and tree interaction go through the [`TreeView`] and
/// [`AnchoredPanel`] collaborators, [`TreeBrowser`] and [`Popper`] by default.
#[derive(Debug)]
pub struct TreeSelectField<V: TreeView = TreeBrowser, P: AnchoredPanel = Popper> {
    pub(super) props: TreeSelectProps,
    pub(super) binding: FieldBinding,
    pub(super) phase: Phase,
    pub(super) focused: bool,
    /// Transient typed text
    pub(super) input_text: String,
    /// Flat index of `props.items`, memoized by tree identity
    index: RefCell<FlatIndexCache>,
    /// Stale ids already logged
    warned_stale: RefCell<HashSet<String>>,
    pub(super) tree_view: V,
    pub(super) panel: P,
    /// Text surface rect from the last render
    pub(super) anchor: Option<Rect>,
    /// Panel rect (including chrome) from the last render
    pub(super) panel_area: Option<Rect>,
    /// Panel content rect from the last render
    pub(super) panel_content: Option<Rect>,
}

impl TreeSelectField {
    /// Create a field with the default terminal tree browser and panel.
    pub fn new(props: TreeSelectProps, control: &FormControl) -> Self {
        Self::with_collaborators(props, control, TreeBrowser::new(), Popper::default())
    }
}

impl<V: TreeView, P: AnchoredPanel> TreeSelectField<V, P> {
    /// Create a field with custom tree view and panel implementations.
    pub fn with_collaborators(
        props: TreeSelectProps,
        control: &FormControl,
        mut tree_view: V,
        panel: P,
    ) -> Self {
        let rules = if props.required {
            Rules::new().required(props.required_message())
        } else {
            Rules::new()
        };
        let binding = control.controller(props.name.clone(), rules);

        let duplicates = props.items.duplicate_ids();
        if !duplicates.is_empty() {
            log::warn!(
                "TreeSelectField name={} has duplicate node ids {:?}; first match wins",
                props.name,
                duplicates
            );
        }
        tree_view.set_items(&props.items);

        Self {
            props,
            binding,
            phase: Phase::Closed,
            focused: false,
            input_text: String::new(),
            index: RefCell::new(FlatIndexCache::new()),
            warned_stale: RefCell::new(HashSet::new()),
            tree_view,
            panel,
            anchor: None,
            panel_area: None,
            panel_content: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.props.name
    }

    pub fn props(&self) -> &TreeSelectProps {
        &self.props
    }

    pub fn binding(&self) -> &FieldBinding {
        &self.binding
    }

    pub fn tree_view(&self) -> &V {
        &self.tree_view
    }

    /// Replace the tree. The current value is kept even if it no longer resolves.
    pub fn set_items(&mut self, items: Tree) {
        self.props.items = items;
        self.tree_view.set_items(&self.props.items);
    }

    // -------------------------------------------------------------------------
    // Derived display state
    // -------------------------------------------------------------------------

    /// The committed value, `None` when nothing is selected.
    pub fn value(&self) -> Option<String> {
        self.binding.value()
    }

    /// Text shown in the text surface: the label of the selected node.
    ///
    /// Empty when nothing is selected or the selected id is not in the tree.
    pub fn display_text(&self) -> String {
        let value = self.value();
        let mut cache = self.index.borrow_mut();
        let index = cache.get(&self.props.items);
        let label = resolve_label(index, value.as_deref()).to_string();

        if let Some(id) = value.as_deref()
            && !index.contains(id)
        {
            if self.warned_stale.borrow_mut().insert(id.to_string()) {
                log::warn!(
                    "TreeSelectField name={} value {:?} is not in the tree",
                    self.props.name,
                    id
                );
            }
        }
        label
    }

    /// The committed id when it does not resolve to any node.
    pub fn stale_selection(&self) -> Option<String> {
        let value = self.value()?;
        let mut cache = self.index.borrow_mut();
        (!cache.get(&self.props.items).contains(&value)).then_some(value)
    }

    /// Number of distinct stale ids that have been logged.
    pub fn stale_warnings(&self) -> usize {
        self.warned_stale.borrow().len()
    }

    /// Number of times the flat index has been built.
    pub fn index_builds(&self) -> usize {
        self.index.borrow().builds()
    }

    pub fn field_state(&self) -> FieldState {
        self.binding.field_state()
    }

    /// Whether the field should be drawn in its error state.
    pub fn has_error(&self) -> bool {
        self.props.error || self.field_state().invalid()
    }

    /// The validation message from the form store, if validation failed.
    pub fn error_message(&self) -> Option<String> {
        self.field_state().error
    }

    /// Text under the field: configured helper text, else the validation message.
    pub fn helper_text(&self) -> Option<String> {
        if self.props.helper_text.is_empty() {
            self.error_message()
        } else {
            Some(self.props.helper_text.clone())
        }
    }

    // -------------------------------------------------------------------------
    // Transient UI state
    // -------------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if the tree panel is open.
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_disabled(&self) -> bool {
        self.props.disabled
    }

    /// The typed text. Never committed as a value.
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// Update the typed text. Only [`InputReason::Input`] changes it from outside.
    pub fn set_input(&mut self, text: impl Into<String>, reason: InputReason) {
        match reason {
            InputReason::Input => {
                self.input_text = text.into();
                self.tree_view.type_ahead(&self.input_text);
            }
            InputReason::Reset => self.input_text.clear(),
        }
    }

    // -------------------------------------------------------------------------
    // State transitions
    // -------------------------------------------------------------------------

    /// Give the field focus. Does not open the panel.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Take focus away, dismissing the panel and marking the field touched.
    pub fn blur(&mut self) {
        if !self.focused {
            return;
        }
        self.focused = false;
        if self.is_open() {
            self.transition_closed(CloseReason::Dismissed);
        }
        self.binding.on_blur();
    }

    /// Open the tree panel. Has no effect when disabled or already open.
    ///
    /// The value does not change. The panel reveals and highlights the
    /// current selection.
    pub fn open(&mut self) -> bool {
        if self.props.disabled || self.is_open() {
            return false;
        }
        self.focused = true;
        self.phase = Phase::Open;
        self.tree_view.set_items(&self.props.items);
        let value = self.value();
        self.tree_view.set_selected(value.as_deref());
        log::debug!(
            "TreeSelectField::open name={} value={:?}",
            self.props.name,
            value
        );
        true
    }

    /// Close the panel from the owner.
    pub fn close(&mut self) {
        if self.is_open() {
            self.transition_closed(CloseReason::Programmatic);
        }
    }

    /// Close the panel as if the user dismissed it.
    pub fn dismiss(&mut self) {
        if self.is_open() {
            self.transition_closed(CloseReason::Dismissed);
        }
    }

    /// Commit `node_id` as the field value and close the panel.
    ///
    /// An empty id is ignored and leaves the field as it was. Returns whether
    /// a value was committed.
    pub fn select(&mut self, node_id: &str) -> bool {
        if node_id.is_empty() || self.props.disabled {
            return false;
        }
        self.binding.on_change(Some(node_id.to_string()));
        self.set_input("", InputReason::Reset);
        self.tree_view.set_selected(Some(node_id));
        log::debug!(
            "TreeSelectField::select name={} id={}",
            self.props.name,
            node_id
        );
        if self.is_open() {
            self.transition_closed(CloseReason::Selected);
        }
        true
    }

    fn transition_closed(&mut self, reason: CloseReason) {
        self.phase = Phase::Closed;
        self.panel_area = None;
        self.panel_content = None;
        log::debug!(
            "TreeSelectField::close name={} reason={:?}",
            self.props.name,
            reason
        );
    }
}
