pub mod commands;
pub mod config;
pub mod driver;
pub mod error;
pub mod extract;
pub mod io;
pub mod layout;
pub mod paths;
pub mod preflight;
pub mod retrieve;
pub mod source;
pub mod synth;

pub use error::{InstallError, Result};

/// Version of the installer embedded at compile time.
pub const SUPA_VERSION: &str = env!("CARGO_PKG_VERSION");
