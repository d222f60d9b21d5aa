//! Core library for nameholder: a statically linked module whose factory
//! yields records holding one private, mutable name.

pub mod config;
pub mod errors;
pub mod module;
pub mod output;
pub mod record;
pub mod session;

pub use config::{CliOverrides, HolderConfig};
pub use errors::{HolderError, Result};
pub use module::{Factory, Module, NameHolderModule};
pub use output::OutputFormat;
pub use record::{NameHolder, DEFAULT_NAME};
pub use session::{Command, Session};

/// Construct a new record holding [`DEFAULT_NAME`]
pub fn construct() -> NameHolder {
    NameHolderModule::instantiate()
}
