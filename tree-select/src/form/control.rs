use std::sync::{Arc, RwLock};

use crate::error::FormError;

use super::binding::{FieldBinding, FieldState};
use super::result::{FieldError, ValidationResult};
use super::rules::Rules;
use super::values::FormValues;
use super::normalize;

/// Stored state for one field.
#[derive(Debug)]
struct FieldEntry {
    name: String,
    /// Value restored by `reset()`.
    default: Option<String>,
    value: Option<String>,
    rules: Rules,
    /// Message from the last validation pass, if it failed.
    error: Option<String>,
    touched: bool,
}

impl FieldEntry {
    fn new(name: String, default: Option<String>) -> Self {
        Self {
            name,
            value: default.clone(),
            default,
            rules: Rules::new(),
            error: None,
            touched: false,
        }
    }

    fn validate(&mut self) -> Option<FieldError> {
        self.error = self.rules.validate(self.value.as_deref()).err();
        self.error.as_ref().map(|message| FieldError {
            field_name: self.name.clone(),
            message: message.clone(),
        })
    }
}

#[derive(Debug, Default)]
struct FormInner {
    fields: Vec<FieldEntry>,
    /// Number of submit attempts since creation or the last reset.
    submit_count: u32,
}

impl FormInner {
    fn field(&self, name: &str) -> Option<&FieldEntry> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FieldEntry> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    fn values(&self) -> FormValues {
        FormValues::new(
            self.fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone()))
                .collect(),
        )
    }
}

/// Shared handle to a form's field values and validation state.
///
/// Cloning the handle shares the same store, so a host and all of its fields
/// can each hold one. Validation runs on every submit attempt; once the form
/// has been submitted at least once, a field is also re-validated whenever
/// its value changes.
#[derive(Debug)]
pub struct FormControl {
    inner: Arc<RwLock<FormInner>>,
}

impl FormControl {
    /// Create an empty form.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(FormInner::default())),
        }
    }

    /// Create a form with default values, which also fix the field order.
    pub fn with_defaults<N, V>(defaults: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let fields = defaults
            .into_iter()
            .map(|(name, value)| FieldEntry::new(name.into(), normalize(Some(value.into()))))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(FormInner {
                fields,
                submit_count: 0,
            })),
        }
    }

    /// Bind a field by name, registering it if it has no default.
    ///
    /// `rules` replace any rules registered for the name before.
    pub fn controller(&self, name: impl Into<String>, rules: Rules) -> FieldBinding {
        let name = name.into();
        if let Ok(mut guard) = self.inner.write() {
            match guard.field_mut(&name) {
                Some(entry) => entry.rules = rules,
                None => {
                    let mut entry = FieldEntry::new(name.clone(), None);
                    entry.rules = rules;
                    guard.fields.push(entry);
                }
            }
        }
        log::debug!("FormControl::controller name={}", name);
        FieldBinding::new(self.clone(), name)
    }

    // -------------------------------------------------------------------------
    // Values
    // -------------------------------------------------------------------------

    /// Current value of a field. `None` when empty or unknown.
    pub fn value(&self, name: &str) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.field(name).and_then(|f| f.value.clone()))
    }

    /// Change a field's value. An empty string clears the selection.
    pub fn set_value(&self, name: &str, value: Option<String>) -> Result<(), FormError> {
        let value = normalize(value);
        let Ok(mut guard) = self.inner.write() else {
            return Ok(());
        };
        let revalidate = guard.submit_count > 0;
        let entry = guard
            .field_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;

        if entry.value != value {
            log::debug!(
                "FormControl::set_value name={} old={:?} new={:?}",
                name,
                entry.value,
                value
            );
            entry.value = value;
        }
        if revalidate {
            entry.validate();
        }
        Ok(())
    }

    /// Mark a field as having been visited.
    pub fn mark_touched(&self, name: &str) -> Result<(), FormError> {
        let Ok(mut guard) = self.inner.write() else {
            return Ok(());
        };
        let entry = guard
            .field_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        entry.touched = true;
        Ok(())
    }

    /// Validation and interaction state of a field.
    pub fn field_state(&self, name: &str) -> FieldState {
        self.inner
            .read()
            .ok()
            .and_then(|g| {
                g.field(name).map(|f| FieldState {
                    error: f.error.clone(),
                    is_dirty: f.value != f.default,
                    is_touched: f.touched,
                })
            })
            .unwrap_or_default()
    }

    /// Snapshot of all field values.
    pub fn watch(&self) -> FormValues {
        self.inner
            .read()
            .map(|g| g.values())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Validation & submit
    // -------------------------------------------------------------------------

    /// Validate a single field, storing its error. Returns `true` if valid.
    pub fn trigger(&self, name: &str) -> Result<bool, FormError> {
        let Ok(mut guard) = self.inner.write() else {
            return Ok(false);
        };
        let entry = guard
            .field_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        let valid = entry.validate().is_none();
        Ok(valid)
    }

    /// Validate every field, storing each field's error.
    pub fn validate(&self) -> ValidationResult {
        let Ok(mut guard) = self.inner.write() else {
            return ValidationResult::Valid;
        };
        let errors: Vec<FieldError> = guard
            .fields
            .iter_mut()
            .filter_map(FieldEntry::validate)
            .collect();

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    /// Attempt a submit.
    ///
    /// Validates every field. `on_valid` is called with the current values
    /// only when all fields pass; otherwise it is not called at all.
    pub fn handle_submit<F>(&self, on_valid: F) -> ValidationResult
    where
        F: FnOnce(&FormValues),
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.submit_count = guard.submit_count.saturating_add(1);
        }

        let result = self.validate();
        if result.is_valid() {
            let values = self.watch();
            log::debug!("FormControl::handle_submit valid values={}", values.to_json());
            on_valid(&values);
        } else {
            log::debug!(
                "FormControl::handle_submit invalid errors={}",
                result.errors().len()
            );
        }
        result
    }

    /// Number of submit attempts since creation or the last reset.
    pub fn submit_count(&self) -> u32 {
        self.inner.read().map(|g| g.submit_count).unwrap_or(0)
    }

    /// Restore defaults and clear errors, touched flags and the submit count.
    pub fn reset(&self) {
        if let Ok(mut guard) = self.inner.write() {
            for field in &mut guard.fields {
                field.value = field.default.clone();
                field.error = None;
                field.touched = false;
            }
            guard.submit_count = 0;
        }
    }
}

impl Clone for FormControl {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for FormControl {
    fn default() -> Self {
        Self::new()
    }
}
