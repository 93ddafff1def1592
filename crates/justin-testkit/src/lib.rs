//! Higher-level test support for the Just-In core: a process-level harness
//! with an isolated workspace and environment, and a scenario builder that
//! assembles one.
//!
//! Test code should import these through the `justin-testing` entry point;
//! the entry point re-exports exactly the names listed in
//! [`TESTKIT_EXPORTS`].

mod harness;
mod scenario;

pub use harness::TestHarness;
pub use scenario::Scenario;

///
/// TESTKIT_EXPORTS
///
/// Enumerated inventory of this group's public surface, as re-published by
/// the testing entry point. The modules behind these names are private, so
/// this list is the whole surface by construction. Must stay disjoint from
/// the helpers inventory; the surface tests assert that.
///

pub const TESTKIT_EXPORTS: &[&str] = &["Scenario", "TESTKIT_EXPORTS", "TestHarness"];
