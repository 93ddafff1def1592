//! Test-only member. The aggregation-contract tests live in `tests/`; this
//! crate exports nothing.
