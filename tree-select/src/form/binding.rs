use super::control::FormControl;

/// Validation and interaction state of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Message from the last failed validation pass.
    pub error: Option<String>,
    /// Whether the value differs from its default.
    pub is_dirty: bool,
    /// Whether the field has been blurred at least once.
    pub is_touched: bool,
}

impl FieldState {
    pub fn invalid(&self) -> bool {
        self.error.is_some()
    }
}

/// A field's view of the form store: value, change callback and state.
///
/// The binding is the only way a controlled field reads or writes its value.
#[derive(Debug, Clone)]
pub struct FieldBinding {
    control: FormControl,
    name: String,
}

impl FieldBinding {
    pub(super) fn new(control: FormControl, name: String) -> Self {
        Self { control, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value, `None` when nothing is selected.
    pub fn value(&self) -> Option<String> {
        self.control.value(&self.name)
    }

    /// Notify the store of a new value.
    pub fn on_change(&self, value: Option<String>) {
        if let Err(e) = self.control.set_value(&self.name, value) {
            log::warn!("FieldBinding::on_change: {}", e);
        }
    }

    /// Notify the store that the field lost focus.
    pub fn on_blur(&self) {
        if let Err(e) = self.control.mark_touched(&self.name) {
            log::warn!("FieldBinding::on_blur: {}", e);
        }
    }

    pub fn field_state(&self) -> FieldState {
        self.control.field_state(&self.name)
    }

    pub fn control(&self) -> &FormControl {
        &self.control
    }
}
