use std::fmt;
use std::sync::Arc;

/// Type alias for validation rule closures.
type Rule = Arc<dyn Fn(Option<&str>) -> Result<(), String> + Send + Sync>;

/// Validation rules attached to one field.
///
/// Rules run in the order they were added and the first failure wins.
#[derive(Clone, Default)]
pub struct Rules {
    required: Option<String>,
    custom: Vec<Rule>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a selection, failing with `msg` when the value is empty.
    pub fn required(mut self, msg: impl Into<String>) -> Self {
        self.required = Some(msg.into());
        self
    }

    /// Add a custom rule. `f` returns `true` when the value is acceptable.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(Option<&str>) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        self.custom
            .push(Arc::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// Run every rule against `value`, returning the first failure message.
    pub fn validate(&self, value: Option<&str>) -> Result<(), String> {
        if let Some(msg) = &self.required
            && value.is_none_or(str::is_empty)
        {
            return Err(msg.clone());
        }
        for rule in &self.custom {
            rule(value)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules")
            .field("required", &self.required)
            .field("custom", &self.custom.len())
            .finish()
    }
}
