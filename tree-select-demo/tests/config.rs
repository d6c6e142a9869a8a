use std::path::PathBuf;

use tree_select_demo::{DemoConfig, DemoError};

#[test]
fn test_no_args() {
    let config = DemoConfig::from_args(Vec::<String>::new()).unwrap();
    assert_eq!(config, DemoConfig::default());
    assert_eq!(config.load_tree().unwrap().roots().len(), 3);
}

#[test]
fn test_tree_path_and_log() {
    let config = DemoConfig::from_args(["--log", "/tmp/demo.log", "tree.json"]).unwrap();
    assert_eq!(config.tree_path, Some(PathBuf::from("tree.json")));
    assert_eq!(config.log_path, Some(PathBuf::from("/tmp/demo.log")));
    assert_eq!(config.log_file(), Some(PathBuf::from("/tmp/demo.log")));
    assert!(!config.show_help);
}

#[test]
fn test_help() {
    let config = DemoConfig::from_args(["--help"]).unwrap();
    assert!(config.show_help);
}

#[test]
fn test_rejects_bad_args() {
    assert!(matches!(
        DemoConfig::from_args(["--bogus"]),
        Err(DemoError::Usage(_))
    ));
    assert!(matches!(
        DemoConfig::from_args(["--log"]),
        Err(DemoError::Usage(_))
    ));
    assert!(matches!(
        DemoConfig::from_args(["a.json", "b.json"]),
        Err(DemoError::Usage(_))
    ));
}

#[test]
fn test_missing_tree_file() {
    let config = DemoConfig::from_args(["/nonexistent/tree.json"]).unwrap();
    assert!(config.load_tree().is_err());
}
