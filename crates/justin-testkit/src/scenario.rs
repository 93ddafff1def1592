use crate::harness::TestHarness;
use justin::{
    Error,
    config::{ENV_LOG_FILTER, ENV_SERVICE_NAME, ENV_STRICT},
};

///
/// Scenario
///
/// Builder for `TestHarness`: declare environment overrides up front, then
/// `build` the harness that owns them for the test's lifetime. Overrides
/// apply in insertion order, so later calls win.
///

#[derive(Debug, Default)]
pub struct Scenario {
    vars: Vec<(String, String)>,
}

impl Scenario {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override an arbitrary environment variable.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.push((key.into(), value.into()));
        self
    }

    /// Set `JUSTIN_SERVICE_NAME` for the harness.
    #[must_use]
    pub fn service_name(self, name: impl Into<String>) -> Self {
        self.env(ENV_SERVICE_NAME, name)
    }

    /// Set `JUSTIN_LOG_FILTER` for the harness.
    #[must_use]
    pub fn log_filter(self, filter: impl Into<String>) -> Self {
        self.env(ENV_LOG_FILTER, filter)
    }

    /// Set `JUSTIN_STRICT` for the harness.
    #[must_use]
    pub fn strict(self, on: bool) -> Self {
        self.env(ENV_STRICT, if on { "true" } else { "false" })
    }

    /// Build the harness. Malformed overrides surface as config errors.
    pub fn build(self) -> Result<TestHarness, Error> {
        let vars: Vec<(&str, &str)> = self
            .vars
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();

        TestHarness::with_overrides(&vars)
    }
}
