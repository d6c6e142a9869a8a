use tree_select::event::{Key, KeyCombo, Modifiers};
use tree_select::render::{Buffer, Palette};
use tree_select_demo::taxonomy::product_categories;
use tree_select_demo::{ExampleForm, Focus, HostAction};

fn form() -> ExampleForm {
    ExampleForm::new(product_categories())
}

fn key(k: Key) -> KeyCombo {
    KeyCombo::plain(k)
}

#[test]
fn test_starts_empty_with_category_focused() {
    let form = form();
    assert_eq!(form.focus(), Focus::Category);
    assert!(form.category().is_focused());
    assert_eq!(form.category().value(), None);
    assert_eq!(form.department().value(), None);
    assert_eq!(form.message(), None);
}

#[test]
fn test_submit_without_category_is_blocked() {
    let mut form = form();
    let result = form.submit();

    assert!(result.is_invalid());
    assert_eq!(form.message(), None);
    assert_eq!(
        form.category().error_message().as_deref(),
        Some("Product Category is required")
    );
    // Configured helper text wins over the validation message.
    assert_eq!(
        form.category().helper_text().as_deref(),
        Some("Select a category from the tree")
    );
    assert!(form.category().has_error());
    assert!(!form.department().has_error());
}

#[test]
fn test_submit_with_category_shows_confirmation() {
    let mut form = form();
    assert!(form.category_mut().select("laptop"));

    let result = form.submit();
    assert!(result.is_valid());
    assert_eq!(
        form.message(),
        Some("Selected:\nCategory: laptop\nDepartment: ")
    );
}

#[test]
fn test_submit_with_both_fields() {
    let mut form = form();
    form.category_mut().select("laptop");
    form.department_mut().select("fiction");

    assert!(form.submit().is_valid());
    assert_eq!(
        form.message(),
        Some("Selected:\nCategory: laptop\nDepartment: fiction")
    );
}

#[test]
fn test_fields_are_independent() {
    let mut form = form();
    form.category_mut().select("laptop");
    form.department_mut().select("books");

    assert_eq!(form.category().value().as_deref(), Some("laptop"));
    assert_eq!(form.department().value().as_deref(), Some("books"));
    assert_eq!(form.category().display_text(), "Laptops");
    assert_eq!(form.department().display_text(), "Books");

    form.department_mut().select("tablet");
    assert_eq!(form.category().value().as_deref(), Some("laptop"));
}

#[test]
fn test_error_clears_after_selection() {
    let mut form = form();
    form.submit();
    assert!(form.category().has_error());

    form.category_mut().select("desktop");
    assert!(!form.category().has_error());
}

#[test]
fn test_preview_tracks_values() {
    let mut form = form();
    let empty: serde_json::Value = serde_json::from_str(&form.preview()).unwrap();
    assert_eq!(empty, serde_json::json!({"category": "", "department": ""}));

    form.category_mut().select("smartphone");
    let value: serde_json::Value = serde_json::from_str(&form.preview()).unwrap();
    assert_eq!(value["category"], "smartphone");
    assert_eq!(value["department"], "");
}

#[test]
fn test_tab_cycles_focus() {
    let mut form = form();

    form.handle_key(key(Key::Tab));
    assert_eq!(form.focus(), Focus::Department);
    assert!(!form.category().is_focused());
    assert!(form.department().is_focused());
    assert!(form.category().field_state().is_touched);

    form.handle_key(key(Key::Tab));
    assert_eq!(form.focus(), Focus::Submit);

    form.handle_key(key(Key::Tab));
    assert_eq!(form.focus(), Focus::Category);

    form.handle_key(key(Key::BackTab));
    assert_eq!(form.focus(), Focus::Submit);
}

#[test]
fn test_tab_dismisses_open_panel() {
    let mut form = form();
    form.handle_key(key(Key::Enter));
    assert!(form.category().is_open());

    form.handle_key(key(Key::Tab));
    assert!(!form.category().is_open());
    assert_eq!(form.focus(), Focus::Department);
    assert_eq!(form.category().value(), None);
}

#[test]
fn test_keyboard_selection() {
    let mut form = form();
    form.handle_key(key(Key::Enter));
    assert!(form.category().is_open());

    // Roots: Electronics, Clothing, Books
    form.handle_key(key(Key::Down));
    form.handle_key(key(Key::Down));
    form.handle_key(key(Key::Enter));

    assert!(!form.category().is_open());
    assert_eq!(form.category().value().as_deref(), Some("clothing"));
    assert_eq!(form.department().value(), None);
}

#[test]
fn test_enter_on_submit_button() {
    let mut form = form();
    form.category_mut().select("womens-tops");
    form.set_focus(Focus::Submit);

    form.handle_key(key(Key::Enter));
    assert_eq!(
        form.message(),
        Some("Selected:\nCategory: womens-tops\nDepartment: ")
    );

    // Any key dismisses the confirmation.
    assert_eq!(form.handle_key(key(Key::Char('x'))), HostAction::Continue);
    assert_eq!(form.message(), None);
}

#[test]
fn test_quit_keys() {
    let mut first = form();
    assert_eq!(first.handle_key(key(Key::Char('q'))), HostAction::Quit);

    let mut second = form();
    let ctrl_c = KeyCombo::new(Key::Char('c'), Modifiers::ctrl());
    assert_eq!(second.handle_key(ctrl_c), HostAction::Quit);
}

#[test]
fn test_q_types_while_panel_open() {
    let mut form = form();
    form.handle_key(key(Key::Enter));

    assert_eq!(form.handle_key(key(Key::Char('q'))), HostAction::Continue);
    assert!(form.category().is_open());
    assert_eq!(form.category().input_text(), "q");
    assert_eq!(form.category().value(), None);
}

#[test]
fn test_render_layout() {
    let mut form = form();
    let mut buf = Buffer::new(60, 24);
    form.render(&mut buf, &Palette::default());

    assert_eq!(buf.row_text(0), "  Tree Select Input Example");
    assert_eq!(buf.row_text(2), "  Product Category *");
    assert!(buf.row_text(3).contains("Choose a category"));
    assert_eq!(buf.row_text(4), "  Select a category from the tree");
    assert_eq!(buf.row_text(6), "  Department");
    assert!(buf.row_text(7).contains("Choose a department"));
    assert_eq!(buf.row_text(10), "  [ Submit ]");
    assert_eq!(buf.row_text(12), "  Current Form Values:");
}

#[test]
fn test_click_opens_and_selects() {
    let mut form = form();
    let palette = Palette::default();
    let mut buf = Buffer::new(60, 24);
    form.render(&mut buf, &palette);

    // Department text surface
    form.handle_click(5, 7);
    assert_eq!(form.focus(), Focus::Department);
    assert!(form.department().is_open());
    assert!(!form.category().is_focused());

    form.render(&mut buf, &palette);
    let content = form.department().panel_content().unwrap();
    // Third root row: Books
    form.handle_click(content.x + 4, content.y + 2);
    assert_eq!(form.department().value().as_deref(), Some("books"));
    assert!(!form.department().is_open());
}

#[test]
fn test_click_submit_button() {
    let mut form = form();
    let mut buf = Buffer::new(60, 24);
    form.render(&mut buf, &Palette::default());

    form.handle_click(4, 10);
    assert_eq!(form.focus(), Focus::Submit);
    assert!(form.category().has_error());
    assert_eq!(form.message(), None);
}
