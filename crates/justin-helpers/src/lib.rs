//! Low-level test helpers for the Just-In core: deterministic fixtures,
//! scoped environment overrides, and error assertions.
//!
//! Test code should import these through the `justin-testing` entry point
//! rather than depending on this crate directly; the entry point re-exports
//! exactly the names listed in [`HELPER_EXPORTS`].

mod assert;
mod env;
mod fixture;

pub use assert::expect_err_kind;
pub use env::{EnvGuard, with_env};
pub use fixture::{Fixture, make_fixture, make_fixture_with};

///
/// HELPER_EXPORTS
///
/// Enumerated inventory of this group's public surface, as re-published by
/// the testing entry point. The modules behind these names are private, so
/// this list is the whole surface by construction. Kept explicit so a
/// collision with the testkit group shows up in review and in the surface
/// tests, not at a consumer's build.
///

pub const HELPER_EXPORTS: &[&str] = &[
    "EnvGuard",
    "Fixture",
    "HELPER_EXPORTS",
    "expect_err_kind",
    "make_fixture",
    "make_fixture_with",
    "with_env",
];
