use tree_select::tree::{FlatIndexCache, Tree, TreeNode, flatten, resolve_label};
use tree_select::{FlatIndex, TreeError};

fn sample() -> Tree {
    Tree::new(vec![
        TreeNode::new("electronics", "Electronics").with_children([
            TreeNode::new("computers", "Computers").with_children([
                TreeNode::new("laptop", "Laptops"),
                TreeNode::new("desktop", "Desktops"),
            ]),
            TreeNode::new("phones", "Phones"),
        ]),
        TreeNode::new("books", "Books").child(TreeNode::new("fiction", "Fiction")),
    ])
}

#[test]
fn test_flatten_is_preorder_and_complete() {
    let tree = sample();
    let ids: Vec<&str> = flatten(tree.roots()).iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "electronics",
            "computers",
            "laptop",
            "desktop",
            "phones",
            "books",
            "fiction"
        ]
    );
}

#[test]
fn test_flatten_empty_forest() {
    assert!(flatten(&[]).is_empty());
}

#[test]
fn test_flatten_keeps_duplicates() {
    let roots = vec![
        TreeNode::new("x", "First").child(TreeNode::new("y", "Child")),
        TreeNode::new("x", "Second"),
    ];
    assert_eq!(flatten(&roots).len(), 3);
}

#[test]
fn test_resolve_label_existing_id() {
    let index = FlatIndex::build(&sample());
    assert_eq!(resolve_label(&index, Some("desktop")), "Desktops");
    assert_eq!(resolve_label(&index, Some("books")), "Books");
}

#[test]
fn test_resolve_label_absent_or_unknown() {
    let index = FlatIndex::build(&sample());
    assert_eq!(resolve_label(&index, None), "");
    assert_eq!(resolve_label(&index, Some("")), "");
    assert_eq!(resolve_label(&index, Some("nope")), "");
}

#[test]
fn test_resolve_label_first_match_wins() {
    let tree = Tree::new(vec![
        TreeNode::new("root", "Root").child(TreeNode::new("dup", "Nested")),
        TreeNode::new("dup", "Top level"),
    ]);
    let index = FlatIndex::build(&tree);
    assert_eq!(resolve_label(&index, Some("dup")), "Nested");
    assert_eq!(index.len(), 3);
    assert_eq!(tree.duplicate_ids(), vec!["dup".to_string()]);
}

#[test]
fn test_flat_index_depth_and_ancestors() {
    let index = FlatIndex::build(&sample());
    let laptop = index.get("laptop").expect("laptop indexed");
    assert_eq!(laptop.depth, 2);
    assert!(!laptop.has_children);
    assert_eq!(index.ancestors("laptop"), vec!["electronics", "computers"]);
    assert!(index.ancestors("electronics").is_empty());
    assert!(index.ancestors("missing").is_empty());
}

#[test]
fn test_cache_reuses_same_tree() {
    let tree = sample();
    let mut cache = FlatIndexCache::new();
    assert_eq!(cache.get(&tree).len(), 7);
    assert_eq!(cache.get(&tree.clone()).len(), 7);
    assert_eq!(cache.builds(), 1);
}

#[test]
fn test_cache_rebuilds_for_new_allocation() {
    let mut cache = FlatIndexCache::new();
    cache.get(&sample());
    let other = Tree::new(vec![TreeNode::new("only", "Only")]);
    assert_eq!(resolve_label(cache.get(&other), Some("only")), "Only");
    assert_eq!(cache.builds(), 2);
}

#[test]
fn test_tree_from_json() {
    let json = r#"[
        { "id": "a", "label": "A", "children": [ { "id": "b", "label": "B" } ] },
        { "id": "c", "label": "C" }
    ]"#;
    let tree = Tree::from_json(json).expect("valid json");
    assert_eq!(tree.roots().len(), 2);
    assert_eq!(tree.roots()[0].children[0].label, "B");
    assert!(tree.roots()[1].children.is_empty());
}

#[test]
fn test_tree_from_json_invalid() {
    let err = Tree::from_json(r#"{ "id": "a" }"#).unwrap_err();
    assert!(matches!(err, TreeError::Parse(_)));
}

#[test]
fn test_tree_from_missing_file() {
    let err = Tree::from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, TreeError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.json"));
}
