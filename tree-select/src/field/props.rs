use crate::tree::Tree;

/// Placeholder shown when nothing is selected and none was configured.
pub const DEFAULT_PLACEHOLDER: &str = "Select an option";

/// Configuration of a tree select field.
#[derive(Debug, Clone)]
pub struct TreeSelectProps {
    /// Field name in the form store.
    pub name: String,
    /// Human-readable label shown above the text surface.
    pub label: String,
    /// Tree to pick from. The field never mutates it.
    pub items: Tree,
    pub placeholder: String,
    /// Register a `"<label> is required"` rule with the form store.
    pub required: bool,
    /// Ignore all interaction and never open.
    pub disabled: bool,
    /// Force the error styling regardless of validation state.
    pub error: bool,
    /// Shown under the field; takes precedence over validation messages.
    pub helper_text: String,
}

impl TreeSelectProps {
    /// Props with every optional setting at its default.
    pub fn new(name: impl Into<String>, label: impl Into<String>, items: Tree) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            items,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            required: false,
            disabled: false,
            error: false,
            helper_text: String::new(),
        }
    }

    /// Set the placeholder text shown when no value is selected.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Force the error state.
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Set the helper text.
    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = text.into();
        self
    }

    /// Message of the required rule for this field.
    pub fn required_message(&self) -> String {
        format!("{} is required", self.label)
    }
}
