//! Core runtime surface for Just-In: environment-resolved configuration and
//! the shared error taxonomy, plus the `prelude` used by downstream services.
//!
//! Test-only support (fixtures, harnesses, scenario builders) lives behind
//! the separate `justin-testing` entry point. This crate never depends on
//! it, so production dependency graphs cannot pull test support in.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, ErrorKind, ErrorOrigin};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix shared by every environment variable the config layer reads.
pub const ENV_PREFIX: &str = "JUSTIN_";

///
/// Prelude
///
/// Prelude contains only the vocabulary downstream code needs day to day.
///

pub mod prelude {
    pub use crate::{Config, Error, ErrorKind};
}
