//! Test-only entry point for the Just-In workspace.
//!
//! Re-exports the full public surface of `justin-helpers` and
//! `justin-testkit` under one path, so test code never needs to know the
//! internal crate layout. Pure pass-through: no renaming, no wrapping, and
//! nothing of this crate's own. The list is enumerated on purpose — a name
//! collision between the two groups fails compilation here instead of
//! silently shadowing.
//!
//! For test environments only. Nothing enforces that at runtime; production
//! crates keep this out by never listing it outside `[dev-dependencies]`.

pub use justin_helpers::{
    EnvGuard, Fixture, HELPER_EXPORTS, expect_err_kind, make_fixture, make_fixture_with, with_env,
};
pub use justin_testkit::{Scenario, TESTKIT_EXPORTS, TestHarness};
