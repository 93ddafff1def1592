use justin::{Config, Error, config::ENV_DATA_DIR};
use justin_helpers::{EnvGuard, Fixture};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Once,
};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install the process-wide test subscriber exactly once. Later harnesses
/// reuse whatever filter the first one installed.
fn init_tracing(filter: &str) {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

///
/// TestHarness
///
/// Process-level harness for end-to-end tests. Owns an isolated temp
/// workspace, holds the `JUSTIN_` environment overrides for its lifetime,
/// and carries the `Config` resolved from that environment.
///
/// One harness at a time per thread: the held environment guard serializes
/// all env-mutating test support behind a single lock.
///

#[derive(Debug)]
pub struct TestHarness {
    root: TempDir,
    config: Config,
    _env: EnvGuard,
}

impl TestHarness {
    /// Build a harness with no overrides beyond the isolated workspace.
    pub fn new() -> Result<Self, Error> {
        Self::with_overrides(&[])
    }

    pub(crate) fn with_overrides(vars: &[(&str, &str)]) -> Result<Self, Error> {
        let root = TempDir::new()
            .map_err(|err| Error::internal(format!("create test workspace: {err}")))?;
        let root_path = root.path().display().to_string();

        // The workspace dir goes first so an explicit override still wins.
        let mut overrides: Vec<(&str, &str)> = vec![(ENV_DATA_DIR, root_path.as_str())];
        overrides.extend(vars.iter().copied());

        let env = EnvGuard::apply(&overrides);
        let config = Config::from_env()?;

        init_tracing(&config.log_filter);
        tracing::debug!(
            service = %config.service_name,
            root = %root.path().display(),
            "test harness ready"
        );

        Ok(Self {
            root,
            config,
            _env: env,
        })
    }

    /// Configuration resolved from the harness environment.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Root of the isolated workspace; removed when the harness drops.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Write a fixture as pretty JSON into the workspace, returning its path.
    pub fn write_fixture(&self, fixture: &Fixture) -> Result<PathBuf, Error> {
        let path = self.root.path().join(format!("{}.json", fixture.name));
        let bytes = serde_json::to_vec_pretty(fixture)
            .map_err(|err| Error::internal(format!("encode fixture {}: {err}", fixture.name)))?;
        fs::write(&path, bytes)
            .map_err(|err| Error::internal(format!("write {}: {err}", path.display())))?;

        Ok(path)
    }

    /// Read a fixture previously written into the workspace.
    pub fn read_fixture(&self, path: &Path) -> Result<Fixture, Error> {
        let bytes = fs::read(path)
            .map_err(|err| Error::internal(format!("read {}: {err}", path.display())))?;

        serde_json::from_slice(&bytes)
            .map_err(|err| Error::internal(format!("decode {}: {err}", path.display())))
    }
}
