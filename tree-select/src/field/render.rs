//! Rendering for the tree select field.

use crate::render::text::truncate_to_width;
use crate::render::{Brush, Buffer, Palette, Rect, TextStyle};
use crate::view::{AnchoredPanel, TreeView};

use super::state::TreeSelectField;

/// Rows used by a field: label, text surface, helper text.
pub const FIELD_HEIGHT: u16 = 3;

impl<V: TreeView, P: AnchoredPanel> TreeSelectField<V, P> {
    /// Draw the label, text surface and helper text into `area`.
    ///
    /// Also records the text surface as the panel anchor. The panel itself
    /// is drawn by [`render_panel`](Self::render_panel), which should run
    /// after everything else so it stays on top.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        if area.is_empty() {
            return;
        }
        let has_error = self.has_error();
        let bg = palette.background;

        // Label
        if let Some(row) = area.row(0) {
            let fg = if has_error {
                palette.error
            } else if self.focused {
                palette.primary
            } else {
                palette.muted
            };
            let label = if self.props.required {
                format!("{} *", self.props.label)
            } else {
                self.props.label.clone()
            };
            buf.fill(row, bg);
            buf.set_string(row.x, row.y, &label, row.width, Brush::new(fg, bg));
        }

        // Text surface
        if let Some(row) = area.row(1) {
            self.anchor = Some(row);
            let surface = palette.surface;
            buf.fill(row, surface);

            let arrow = if self.is_open() { " ▴" } else { " ▾" };
            let text_width = row.width.saturating_sub(arrow.chars().count() as u16 + 1);
            let display = self.display_text();

            let (text, brush) = if display.is_empty() {
                (
                    self.props.placeholder.clone(),
                    Brush::new(palette.muted, surface).with_style(TextStyle::dim()),
                )
            } else if self.props.disabled {
                (
                    display,
                    Brush::new(palette.muted, surface).with_style(TextStyle::dim()),
                )
            } else {
                (display, Brush::new(palette.text, surface))
            };
            let text = truncate_to_width(&text, text_width as usize);
            buf.set_string(row.x + 1, row.y, &text, text_width, brush);

            let underline = if has_error {
                palette.error
            } else if self.focused {
                palette.primary
            } else {
                palette.border
            };
            buf.set_string(
                row.right().saturating_sub(arrow.chars().count() as u16),
                row.y,
                arrow,
                row.width,
                Brush::new(underline, surface),
            );
        }

        // Helper text
        if let Some(row) = area.row(2) {
            buf.fill(row, bg);
            if let Some(helper) = self.helper_text() {
                let fg = if has_error { palette.error } else { palette.muted };
                let helper = truncate_to_width(&helper, row.width as usize);
                buf.set_string(row.x, row.y, &helper, row.width, Brush::new(fg, bg));
            }
        }
    }

    /// Draw the open panel anchored to the text surface.
    ///
    /// Does nothing while closed or before the first [`render`](Self::render).
    pub fn render_panel(&mut self, viewport: Rect, buf: &mut Buffer, palette: &Palette) {
        let (true, Some(anchor)) = (self.is_open(), self.anchor) else {
            self.panel_area = None;
            self.panel_content = None;
            return;
        };

        let content_height = self.tree_view.content_height();
        let area = self.panel.place(anchor, viewport, content_height);
        if area.is_empty() {
            self.panel_area = None;
            self.panel_content = None;
            return;
        }

        let title = if self.input_text.is_empty() {
            String::new()
        } else {
            format!("› {}", self.input_text)
        };
        let content = self.panel.render_frame(area, &title, buf, palette);
        self.tree_view.render(content, buf, palette);

        self.panel_area = Some(area);
        self.panel_content = Some(content);
    }

    /// Text surface rect from the last render.
    pub fn anchor(&self) -> Option<Rect> {
        self.anchor
    }

    /// Panel rect from the last render, `None` while closed.
    pub fn panel_area(&self) -> Option<Rect> {
        self.panel_area
    }

    /// Panel content rect from the last render, `None` while closed.
    pub fn panel_content(&self) -> Option<Rect> {
        self.panel_content
    }
}
