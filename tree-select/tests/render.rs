use tree_select::render::text::{display_width, truncate_to_width};
use tree_select::render::{Brush, Buffer, Palette, Rect};

#[test]
fn test_truncate() {
    assert_eq!(truncate_to_width("Electronics", 20), "Electronics");
    assert_eq!(truncate_to_width("Electronics", 6), "Elect…");
    assert_eq!(truncate_to_width("Electronics", 0), "");
}

#[test]
fn test_display_width_wide() {
    assert_eq!(display_width("日本"), 4);
}

#[test]
fn test_set_string_clips() {
    let palette = Palette::default();
    let mut buf = Buffer::new(10, 1);
    let written = buf.set_string(
        2,
        0,
        "Smartphones",
        5,
        Brush::new(palette.text, palette.background),
    );
    assert_eq!(written, 5);
    assert_eq!(buf.row_text(0), "  Smart");
}

#[test]
fn test_set_string_wide_chars() {
    let mut buf = Buffer::new(10, 1);
    buf.set_string(0, 0, "日本", 10, Brush::default());
    assert_eq!(buf.row_text(0), "日本");
    assert!(buf.get(1, 0).is_some_and(|c| c.wide_continuation));
}

#[test]
fn test_rect_helpers() {
    let rect = Rect::new(2, 3, 10, 4);
    assert_eq!(rect.inner(), Rect::new(3, 4, 8, 2));
    assert_eq!(rect.row(1), Some(Rect::new(2, 4, 10, 1)));
    assert_eq!(rect.row(4), None);
    assert!(rect.contains(11, 6));
    assert!(!rect.contains(12, 6));
    assert_eq!(
        Rect::new(5, 5, 20, 20).clamp_to(Rect::from_size(10, 10)),
        Rect::new(5, 5, 5, 5)
    );
}

#[test]
fn test_diff_reports_changed_cells() {
    let mut a = Buffer::new(3, 1);
    let b = Buffer::new(3, 1);
    a.set_string(1, 0, "x", 1, Brush::default());
    let changed: Vec<(u16, u16)> = a.diff(&b).map(|(x, y, _)| (x, y)).collect();
    assert_eq!(changed, vec![(1, 0)]);
}
