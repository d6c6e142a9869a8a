//! Event handling for the tree select field.

use crate::event::{EventResult, Key, KeyCombo};
use crate::view::{AnchoredPanel, TreeView};

use super::state::{InputReason, TreeSelectField};

impl<V: TreeView, P: AnchoredPanel> TreeSelectField<V, P> {
    /// Handle a key while the field has focus.
    pub fn handle_key(&mut self, key: &KeyCombo) -> EventResult {
        if self.props.disabled {
            return EventResult::Ignored;
        }

        if let Some(c) = key.printable()
            && !(c == ' ' && !self.is_open())
        {
            let mut text = self.input_text.clone();
            text.push(c);
            self.open();
            self.set_input(text, InputReason::Input);
            return EventResult::Consumed;
        }

        if !self.is_open() {
            // Closed state - open on Enter, Space, or Down
            return match key.key {
                Key::Enter | Key::Char(' ') | Key::Down if key.modifiers.none() => {
                    self.open();
                    EventResult::Consumed
                }
                Key::Backspace if !self.input_text.is_empty() => {
                    self.backspace();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        match key.key {
            Key::Escape => {
                self.dismiss();
                EventResult::Consumed
            }
            Key::Backspace => {
                self.backspace();
                EventResult::Consumed
            }
            Key::Tab | Key::BackTab => {
                // Let the host move focus; blur() will dismiss the panel.
                EventResult::Ignored
            }
            _ => {
                let mut picked: Option<String> = None;
                let result = self
                    .tree_view
                    .handle_key(key, &mut |id: &str| picked = Some(id.to_string()));
                if let Some(id) = picked {
                    self.select(&id);
                }
                result
            }
        }
    }

    fn backspace(&mut self) {
        let mut text = self.input_text.clone();
        text.pop();
        self.open();
        self.set_input(text, InputReason::Input);
    }

    /// Handle a mouse click at absolute coordinates.
    ///
    /// Clicks on the text surface toggle the panel, clicks inside the panel
    /// go to the tree view, and clicks anywhere else dismiss an open panel.
    pub fn handle_click(&mut self, x: u16, y: u16) -> EventResult {
        if self.props.disabled {
            return EventResult::Ignored;
        }

        if self.is_open()
            && let Some(content) = self.panel_content
            && content.contains(x, y)
        {
            let mut picked: Option<String> = None;
            let result = self.tree_view.handle_click(
                x - content.x,
                y - content.y,
                &mut |id: &str| picked = Some(id.to_string()),
            );
            if let Some(id) = picked {
                self.select(&id);
            }
            return result;
        }

        if self.is_open()
            && let Some(area) = self.panel_area
            && area.contains(x, y)
        {
            // Panel chrome: swallow without closing.
            return EventResult::Consumed;
        }

        if let Some(anchor) = self.anchor
            && anchor.contains(x, y)
        {
            self.focus();
            if self.is_open() {
                self.dismiss();
            } else {
                self.open();
            }
            return EventResult::Consumed;
        }

        if self.is_open() {
            // Click-away
            self.dismiss();
        }
        EventResult::Ignored
    }
}
