//! Form-state store for controlled fields.
//!
//! A [`FormControl`] owns the values of every field in a form. Fields never
//! hold their own value; they get a [`FieldBinding`] from
//! [`FormControl::controller`] and route every change through it.
//!
//! # Example
//!
//! ```ignore
//! let control = FormControl::with_defaults([("category", ""), ("department", "")]);
//! let category = control.controller("category", Rules::new().required("Category is required"));
//!
//! category.on_change(Some("laptop".to_string()));
//!
//! let result = control.handle_submit(|values| {
//!     println!("{}", values.to_json());
//! });
//! assert!(result.is_valid());
//! ```

mod binding;
mod control;
mod result;
mod rules;
mod values;

pub use binding::{FieldBinding, FieldState};
pub use control::FormControl;
pub use result::{FieldError, ValidationResult};
pub use rules::Rules;
pub use values::FormValues;

/// Normalize a raw field value: the empty string means "no selection".
pub(crate) fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
