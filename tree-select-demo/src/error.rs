use thiserror::Error;

use tree_select::TreeError;

/// Errors that stop the demo before or while it runs.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("{0}")]
    Usage(String),
}
