use tree_select::form::{FieldState, FormControl, Rules, ValidationResult};
use tree_select::FormError;

#[test]
fn test_defaults_fix_order_and_normalize_empty() {
    let control = FormControl::with_defaults([("category", ""), ("department", "books")]);
    let values = control.watch();
    let names: Vec<&str> = values.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["category", "department"]);
    assert_eq!(values.get("category"), None);
    assert_eq!(values.get("department"), Some("books"));
    assert_eq!(values.to_json(), r#"{"category":"","department":"books"}"#);
}

#[test]
fn test_controller_registers_unknown_field() {
    let control = FormControl::new();
    let binding = control.controller("extra", Rules::new());
    binding.on_change(Some("x".to_string()));
    assert_eq!(control.value("extra").as_deref(), Some("x"));
}

#[test]
fn test_set_value_unknown_field_errors() {
    let control = FormControl::new();
    let err = control.set_value("ghost", Some("x".to_string())).unwrap_err();
    assert_eq!(err, FormError::UnknownField("ghost".to_string()));
}

#[test]
fn test_required_rule_blocks_submit() {
    let control = FormControl::with_defaults([("category", "")]);
    control.controller("category", Rules::new().required("Category is required"));

    let mut called = false;
    let result = control.handle_submit(|_| called = true);

    assert!(!called);
    assert!(result.is_invalid());
    assert_eq!(result.error_for("category"), Some("Category is required"));
    assert_eq!(
        control.field_state("category").error.as_deref(),
        Some("Category is required")
    );
}

#[test]
fn test_valid_submit_passes_values() {
    let control = FormControl::with_defaults([("category", "")]);
    let binding = control.controller("category", Rules::new().required("Category is required"));
    binding.on_change(Some("laptop".to_string()));

    let mut submitted = None;
    let result = control.handle_submit(|values| submitted = Some(values.to_json()));

    assert_eq!(result, ValidationResult::Valid);
    assert_eq!(submitted.as_deref(), Some(r#"{"category":"laptop"}"#));
}

#[test]
fn test_no_validation_before_first_submit() {
    let control = FormControl::with_defaults([("category", "laptop")]);
    let binding = control.controller("category", Rules::new().required("required"));
    binding.on_change(None);
    assert!(binding.field_state().error.is_none());
}

#[test]
fn test_revalidates_on_change_after_submit() {
    let control = FormControl::with_defaults([("category", "")]);
    let binding = control.controller("category", Rules::new().required("required"));

    control.handle_submit(|_| {});
    assert!(binding.field_state().invalid());

    binding.on_change(Some("desktop".to_string()));
    assert!(!binding.field_state().invalid());

    binding.on_change(Some(String::new()));
    assert_eq!(binding.field_state().error.as_deref(), Some("required"));
}

#[test]
fn test_custom_rule() {
    let control = FormControl::with_defaults([("category", "")]);
    control.controller(
        "category",
        Rules::new().rule(|v| v != Some("books"), "Books cannot be chosen"),
    );
    control.set_value("category", Some("books".to_string())).unwrap();
    assert_eq!(control.trigger("category"), Ok(false));
    assert_eq!(
        control.field_state("category").error.as_deref(),
        Some("Books cannot be chosen")
    );
}

#[test]
fn test_field_state_dirty_and_touched() {
    let control = FormControl::with_defaults([("category", "")]);
    let binding = control.controller("category", Rules::new());
    assert_eq!(binding.field_state(), FieldState::default());

    binding.on_change(Some("fiction".to_string()));
    binding.on_blur();
    let state = binding.field_state();
    assert!(state.is_dirty);
    assert!(state.is_touched);
}

#[test]
fn test_reset_restores_defaults() {
    let control = FormControl::with_defaults([("category", "books")]);
    let binding = control.controller("category", Rules::new().required("required"));
    binding.on_change(None);
    control.handle_submit(|_| {});
    assert_eq!(control.submit_count(), 1);

    control.reset();
    assert_eq!(control.value("category").as_deref(), Some("books"));
    assert_eq!(control.submit_count(), 0);
    assert!(binding.field_state().error.is_none());
}

#[test]
fn test_pretty_json_preview() {
    let control = FormControl::with_defaults([("category", "laptop"), ("department", "")]);
    assert_eq!(
        control.watch().to_json_pretty(),
        "{\n  \"category\": \"laptop\",\n  \"department\": \"\"\n}"
    );
}
