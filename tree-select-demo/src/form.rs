//! The example form: two tree select fields, a submit button and a preview.

use tree_select::event::{EventResult, Key, KeyCombo};
use tree_select::render::{Brush, Buffer, Palette, Rect, TextStyle};
use tree_select::render::text::{display_width, truncate_to_width};
use tree_select::view::{AnchoredPanel, Popper};
use tree_select::field::FIELD_HEIGHT;
use tree_select::{FormControl, Tree, TreeSelectField, TreeSelectProps, ValidationResult};

const TITLE: &str = "Tree Select Input Example";
const SUBMIT_LABEL: &str = "[ Submit ]";
const HINT: &str = "Tab next · Enter open/select · Esc close · q quit";
const MAX_WIDTH: u16 = 56;
const MARGIN: u16 = 2;

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Category,
    Department,
    Submit,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Category => Focus::Department,
            Focus::Department => Focus::Submit,
            Focus::Submit => Focus::Category,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Category => Focus::Submit,
            Focus::Department => Focus::Category,
            Focus::Submit => Focus::Department,
        }
    }
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct ExampleForm {
    control: FormControl,
    category: TreeSelectField,
    department: TreeSelectField,
    focus: Focus,
    /// Confirmation shown after a valid submit, until dismissed
    message: Option<String>,
    submit_area: Option<Rect>,
}

impl ExampleForm {
    pub fn new(items: Tree) -> Self {
        let control = FormControl::with_defaults([("category", ""), ("department", "")]);

        let category = TreeSelectField::new(
            TreeSelectProps::new("category", "Product Category", items.clone())
                .placeholder("Choose a category")
                .required()
                .helper_text("Select a category from the tree"),
            &control,
        );
        let department = TreeSelectField::new(
            TreeSelectProps::new("department", "Department", items)
                .placeholder("Choose a department"),
            &control,
        );

        let mut form = Self {
            control,
            category,
            department,
            focus: Focus::Category,
            message: None,
            submit_area: None,
        };
        form.category.focus();
        form
    }

    pub fn control(&self) -> &FormControl {
        &self.control
    }

    pub fn category(&self) -> &TreeSelectField {
        &self.category
    }

    pub fn category_mut(&mut self) -> &mut TreeSelectField {
        &mut self.category
    }

    pub fn department(&self) -> &TreeSelectField {
        &self.department
    }

    pub fn department_mut(&mut self) -> &mut TreeSelectField {
        &mut self.department
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The confirmation text from the last valid submit, if still showing.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether either field has its panel open.
    pub fn any_open(&self) -> bool {
        self.category.is_open() || self.department.is_open()
    }

    fn field_mut(&mut self, focus: Focus) -> Option<&mut TreeSelectField> {
        match focus {
            Focus::Category => Some(&mut self.category),
            Focus::Department => Some(&mut self.department),
            Focus::Submit => None,
        }
    }

    /// Move focus, blurring the field that loses it.
    pub fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }
        if let Some(field) = self.field_mut(self.focus) {
            field.blur();
        }
        self.focus = focus;
        if let Some(field) = self.field_mut(focus) {
            field.focus();
        }
        log::debug!("ExampleForm focus={:?}", focus);
    }

    /// Validate and, when valid, show the confirmation and log the values.
    pub fn submit(&mut self) -> ValidationResult {
        let mut confirmation = None;
        let result = self.control.handle_submit(|values| {
            log::info!("Form submitted: {}", values.to_json());
            confirmation = Some(format!(
                "Selected:\nCategory: {}\nDepartment: {}",
                values.get("category").unwrap_or(""),
                values.get("department").unwrap_or(""),
            ));
        });

        if let Some(error) = result.first_error() {
            log::info!("Form invalid: {}: {}", error.field_name, error.message);
        }
        if confirmation.is_some() {
            self.message = confirmation;
        }
        result
    }

    /// Pretty JSON of the current values.
    pub fn preview(&self) -> String {
        self.control.watch().to_json_pretty()
    }

    pub fn handle_key(&mut self, key: KeyCombo) -> HostAction {
        if key.modifiers.ctrl && key.key == Key::Char('c') {
            return HostAction::Quit;
        }

        if self.message.is_some() {
            self.message = None;
            return HostAction::Continue;
        }

        if !self.any_open() && key.key == Key::Char('q') && key.modifiers.none() {
            return HostAction::Quit;
        }

        if let Some(field) = self.field_mut(self.focus)
            && field.handle_key(&key).is_consumed()
        {
            return HostAction::Continue;
        }

        match key.key {
            Key::BackTab => self.set_focus(self.focus.prev()),
            Key::Tab if key.modifiers.shift => self.set_focus(self.focus.prev()),
            Key::Tab => self.set_focus(self.focus.next()),
            Key::Enter | Key::Char(' ') if self.focus == Focus::Submit => {
                self.submit();
            }
            _ => {}
        }
        HostAction::Continue
    }

    pub fn handle_click(&mut self, x: u16, y: u16) {
        if self.message.is_some() {
            self.message = None;
            return;
        }

        // An open panel may cover the other field, so it sees the click first.
        let order = if self.department.is_open() {
            [Focus::Department, Focus::Category]
        } else {
            [Focus::Category, Focus::Department]
        };
        for which in order {
            let consumed = self
                .field_mut(which)
                .is_some_and(|field| field.handle_click(x, y) == EventResult::Consumed);
            if consumed {
                self.set_focus(which);
                return;
            }
        }

        if let Some(area) = self.submit_area
            && area.contains(x, y)
        {
            self.set_focus(Focus::Submit);
            self.submit();
        }
    }

    /// Layout rects for the two fields and the submit button within `area`.
    fn layout(area: Rect) -> (Rect, Rect, Rect) {
        let x = area.x + MARGIN;
        let width = area.width.saturating_sub(MARGIN * 2).min(MAX_WIDTH);
        let category = Rect::new(x, area.y + 2, width, FIELD_HEIGHT);
        let department = Rect::new(x, category.bottom() + 1, width, FIELD_HEIGHT);
        let submit = Rect::new(
            x,
            department.bottom() + 1,
            (SUBMIT_LABEL.len() as u16).min(width),
            1,
        );
        (
            category.clamp_to(area),
            department.clamp_to(area),
            submit.clamp_to(area),
        )
    }

    pub fn render(&mut self, buf: &mut Buffer, palette: &Palette) {
        let area = buf.area();
        let bg = palette.background;
        buf.fill(area, bg);

        let (category_area, department_area, submit_area) = Self::layout(area);

        buf.set_string(
            category_area.x,
            area.y,
            TITLE,
            category_area.width,
            Brush::new(palette.primary, bg).with_style(TextStyle::bold()),
        );

        self.category.render(category_area, buf, palette);
        self.department.render(department_area, buf, palette);

        // Submit button
        let brush = if self.focus == Focus::Submit {
            Brush::new(palette.background, palette.primary).with_style(TextStyle::bold())
        } else {
            Brush::new(palette.text, palette.surface)
        };
        if !submit_area.is_empty() {
            buf.fill(submit_area, brush.bg);
            buf.set_string(submit_area.x, submit_area.y, SUBMIT_LABEL, submit_area.width, brush);
            self.submit_area = Some(submit_area);
        } else {
            self.submit_area = None;
        }

        // Preview
        let mut y = submit_area.bottom() + 1;
        let muted = Brush::new(palette.muted, bg);
        if y < area.bottom() {
            buf.set_string(submit_area.x, y, "Current Form Values:", category_area.width, muted);
            y += 1;
        }
        for line in self.preview().lines() {
            if y >= area.bottom().saturating_sub(1) {
                break;
            }
            let line = truncate_to_width(line, category_area.width as usize);
            buf.set_string(
                submit_area.x,
                y,
                &line,
                category_area.width,
                Brush::new(palette.text, bg),
            );
            y += 1;
        }

        if area.height > 1 {
            let hint = truncate_to_width(HINT, area.width.saturating_sub(MARGIN) as usize);
            buf.set_string(area.x + MARGIN, area.bottom() - 1, &hint, area.width, muted);
        }

        // Panels go on top of everything else.
        self.category.render_panel(area, buf, palette);
        self.department.render_panel(area, buf, palette);

        if let Some(message) = &self.message {
            render_message(message, area, buf, palette);
        }
    }
}

/// Centered box with the submit confirmation.
fn render_message(message: &str, area: Rect, buf: &mut Buffer, palette: &Palette) {
    let lines: Vec<&str> = message.lines().collect();
    let text_width = lines
        .iter()
        .map(|l| display_width(l))
        .max()
        .unwrap_or(0) as u16;
    let width = (text_width + 4).max(24).min(area.width);
    let height = (lines.len() as u16 + 4).min(area.height);
    let boxed = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    let frame = Popper::default();
    let content = frame.render_frame(boxed, "Submitted", buf, palette);
    let brush = Brush::new(palette.text, palette.surface);
    for (i, line) in lines.iter().enumerate() {
        if let Some(row) = content.row(i as u16 + 1) {
            buf.set_string(row.x + 1, row.y, line, row.width.saturating_sub(1), brush);
        }
    }
    if let Some(row) = content.row(content.height.saturating_sub(1)) {
        buf.set_string(
            row.x + 1,
            row.y,
            "Press any key",
            row.width.saturating_sub(1),
            Brush::new(palette.muted, palette.surface),
        );
    }
}
