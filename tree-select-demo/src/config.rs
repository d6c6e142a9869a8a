//! Command-line configuration.

use std::path::PathBuf;

use tree_select::{Tree, TreeError};

use crate::error::DemoError;
use crate::paths;
use crate::taxonomy;

pub const USAGE: &str = "Usage: tree-select-demo [--log <FILE>] [TREE_JSON]";

/// Settings for one run of the demo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoConfig {
    /// JSON tree to use instead of the built-in taxonomy.
    pub tree_path: Option<PathBuf>,
    /// Log file override. Defaults to `latest.log` in the cache dir.
    pub log_path: Option<PathBuf>,
    /// Print usage and exit.
    pub show_help: bool,
}

impl DemoConfig {
    /// Parse arguments (without the program name).
    pub fn from_args<I, S>(args: I) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "--log" => {
                    let path = args
                        .next()
                        .ok_or_else(|| DemoError::Usage(format!("--log needs a path\n{USAGE}")))?;
                    config.log_path = Some(PathBuf::from(path));
                }
                flag if flag.starts_with('-') => {
                    return Err(DemoError::Usage(format!("Unknown option '{flag}'\n{USAGE}")));
                }
                _ if config.tree_path.is_some() => {
                    return Err(DemoError::Usage(format!(
                        "Unexpected argument '{arg}'\n{USAGE}"
                    )));
                }
                _ => config.tree_path = Some(PathBuf::from(arg)),
            }
        }
        Ok(config)
    }

    /// Where to write the log, if a location can be determined.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(paths::log_file)
    }

    /// Load the tree from `tree_path`, or the built-in taxonomy.
    pub fn load_tree(&self) -> Result<Tree, TreeError> {
        match &self.tree_path {
            Some(path) => Tree::from_file(path),
            None => Ok(taxonomy::product_categories()),
        }
    }
}
