use tree_select::event::{EventResult, Key, KeyCombo};
use tree_select::render::{Buffer, Palette, Rect};
use tree_select::tree::{Tree, TreeNode};
use tree_select::view::{AnchoredPanel, PanelConfig, Placement, Popper, TreeBrowser, TreeView};

fn sample() -> Tree {
    Tree::new(vec![
        TreeNode::new("electronics", "Electronics").with_children([
            TreeNode::new("computers", "Computers").with_children([
                TreeNode::new("laptop", "Laptops"),
                TreeNode::new("desktop", "Desktops"),
            ]),
            TreeNode::new("phones", "Phones"),
        ]),
        TreeNode::new("books", "Books"),
    ])
}

fn press(browser: &mut TreeBrowser, k: Key) -> Option<String> {
    let mut picked = None;
    browser.handle_key(&KeyCombo::plain(k), &mut |id: &str| picked = Some(id.to_string()));
    picked
}

#[test]
fn test_starts_collapsed() {
    let browser = TreeBrowser::with_items(&sample());
    assert_eq!(browser.visible_ids(), vec!["electronics", "books"]);
    assert_eq!(browser.cursor(), None);
}

#[test]
fn test_expand_collapse() {
    let mut browser = TreeBrowser::with_items(&sample());
    browser.expand("electronics");
    assert_eq!(
        browser.visible_ids(),
        vec!["electronics", "computers", "phones", "books"]
    );
    browser.collapse("electronics");
    assert_eq!(browser.visible_ids(), vec!["electronics", "books"]);

    browser.expand_all();
    assert_eq!(browser.visible_len(), 6);
    browser.collapse_all();
    assert_eq!(browser.visible_len(), 2);
}

#[test]
fn test_arrow_navigation() {
    let mut browser = TreeBrowser::with_items(&sample());
    press(&mut browser, Key::Down);
    assert_eq!(browser.cursor_id(), Some("electronics"));

    press(&mut browser, Key::Right); // expand
    assert!(browser.is_expanded("electronics"));
    press(&mut browser, Key::Right); // first child
    assert_eq!(browser.cursor_id(), Some("computers"));

    press(&mut browser, Key::Left); // to parent (computers is collapsed)
    assert_eq!(browser.cursor_id(), Some("electronics"));
    press(&mut browser, Key::Left); // collapse
    assert!(!browser.is_expanded("electronics"));

    press(&mut browser, Key::End);
    assert_eq!(browser.cursor_id(), Some("books"));
    press(&mut browser, Key::Home);
    assert_eq!(browser.cursor_id(), Some("electronics"));
}

#[test]
fn test_enter_reports_cursor_node() {
    let mut browser = TreeBrowser::with_items(&sample());
    assert_eq!(press(&mut browser, Key::Enter), None);
    press(&mut browser, Key::Down);
    press(&mut browser, Key::Down);
    assert_eq!(press(&mut browser, Key::Enter).as_deref(), Some("books"));
    assert_eq!(browser.selected(), Some("books"));
}

#[test]
fn test_unhandled_key_is_ignored() {
    let mut browser = TreeBrowser::with_items(&sample());
    let result = browser.handle_key(&KeyCombo::plain(Key::F(1)), &mut |_: &str| {});
    assert_eq!(result, EventResult::Ignored);
}

#[test]
fn test_set_selected_reveals_nested_node() {
    let mut browser = TreeBrowser::with_items(&sample());
    browser.set_selected(Some("desktop"));
    assert!(browser.is_expanded("electronics"));
    assert!(browser.is_expanded("computers"));
    assert_eq!(browser.cursor_id(), Some("desktop"));

    browser.set_selected(Some("unknown"));
    assert_eq!(browser.cursor(), None);
}

#[test]
fn test_type_ahead_is_case_insensitive() {
    let mut browser = TreeBrowser::with_items(&sample());
    browser.type_ahead("BO");
    assert_eq!(browser.cursor_id(), Some("books"));
    browser.type_ahead("zzz");
    assert_eq!(browser.cursor_id(), Some("books"));
}

#[test]
fn test_render_scrolls_to_cursor() {
    let mut browser = TreeBrowser::with_items(&sample());
    browser.expand_all();
    browser.cursor_last();

    let mut buf = Buffer::new(20, 3);
    browser.render(Rect::new(0, 0, 20, 3), &mut buf, &Palette::default());
    assert_eq!(browser.scroll_offset(), 3);
    assert_eq!(buf.row_text(2), "  Books");
}

#[test]
fn test_render_indents_children() {
    let mut browser = TreeBrowser::with_items(&sample());
    browser.expand("electronics");
    let mut buf = Buffer::new(20, 5);
    browser.render(Rect::new(0, 0, 20, 5), &mut buf, &Palette::default());
    assert_eq!(buf.row_text(0), "▾ Electronics");
    assert_eq!(buf.row_text(1), "  ▸ Computers");
    assert_eq!(buf.row_text(2), "    Phones");
}

#[test]
fn test_popper_places_below_anchor() {
    let popper = Popper::default();
    let anchor = Rect::new(2, 5, 30, 1);
    let area = popper.place(anchor, Rect::from_size(80, 24), 6);
    assert_eq!(area, Rect::new(2, 6, 30, 8));
    assert_eq!(popper.placement(anchor, Rect::from_size(80, 24), 8), Placement::BottomStart);
}

#[test]
fn test_popper_caps_height() {
    let popper = Popper::new(PanelConfig::new().max_height(5));
    let area = popper.place(Rect::new(0, 0, 30, 1), Rect::from_size(80, 24), 50);
    assert_eq!(area.height, 5);
}

#[test]
fn test_popper_flips_above_when_no_room() {
    let popper = Popper::default();
    let anchor = Rect::new(0, 20, 30, 1);
    let viewport = Rect::from_size(80, 24);
    assert_eq!(popper.placement(anchor, viewport, 8), Placement::TopStart);
    assert_eq!(popper.place(anchor, viewport, 6), Rect::new(0, 12, 30, 8));
}

#[test]
fn test_popper_no_flip_shrinks_instead() {
    let popper = Popper::new(PanelConfig::new().no_flip());
    let area = popper.place(Rect::new(0, 20, 30, 1), Rect::from_size(80, 24), 6);
    assert_eq!(area, Rect::new(0, 21, 30, 3));
}

#[test]
fn test_popper_min_width_and_right_edge() {
    let popper = Popper::default();
    let area = popper.place(Rect::new(70, 0, 5, 1), Rect::from_size(80, 24), 2);
    assert_eq!(area.width, 20);
    assert_eq!(area.x, 60);
}

#[test]
fn test_popper_frame() {
    let popper = Popper::default();
    let mut buf = Buffer::new(10, 4);
    let inner = popper.render_frame(Rect::new(0, 0, 10, 4), "", &mut buf, &Palette::default());
    assert_eq!(inner, Rect::new(1, 1, 8, 2));
    assert_eq!(buf.row_text(0), "┌────────┐");
    assert_eq!(buf.row_text(3), "└────────┘");
}
