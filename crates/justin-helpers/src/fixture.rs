use justin::Config;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

///
/// Fixture
///
/// Deterministic test fixture: a stable id, a derived name, and a ready-made
/// core `Config`. The same seed yields the same fixture in every process, so
/// fixtures can be compared across test binaries and written to disk.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Fixture {
    pub id: u64,
    pub name: String,
    pub config: Config,
}

/// Build the default fixture (seed 0).
#[must_use]
pub fn make_fixture() -> Fixture {
    make_fixture_with(0)
}

/// Build a deterministic fixture from an explicit seed.
#[must_use]
pub fn make_fixture_with(seed: u64) -> Fixture {
    let id = xxh3_64(&seed.to_le_bytes());
    let name = format!("fixture-{id:016x}");
    let config = Config {
        service_name: name.clone(),
        strict: seed % 2 == 1,
        ..Config::default()
    };

    Fixture { id, name, config }
}
