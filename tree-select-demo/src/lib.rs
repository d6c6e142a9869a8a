//! Example host for the tree select field: a two-field terminal form.

pub mod config;
pub mod error;
pub mod form;
pub mod paths;
pub mod taxonomy;
pub mod terminal;

pub use config::DemoConfig;
pub use error::DemoError;
pub use form::{ExampleForm, Focus, HostAction};
