use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

//
// Env vars
//

/// Human-readable service name, used in logs and diagnostics.
pub const ENV_SERVICE_NAME: &str = "JUSTIN_SERVICE_NAME";

/// Tracing filter directive, e.g. `info` or `justin=debug`.
pub const ENV_LOG_FILTER: &str = "JUSTIN_LOG_FILTER";

/// Strict mode toggle; accepts `true`/`false`/`1`/`0`.
pub const ENV_STRICT: &str = "JUSTIN_STRICT";

/// Root directory for runtime data. Unset means no data directory.
pub const ENV_DATA_DIR: &str = "JUSTIN_DATA_DIR";

///
/// Config
/// Process configuration resolved from `JUSTIN_`-prefixed environment
/// variables. Absent variables fall back to defaults; a variable that is
/// present but malformed is a config error, never a silent fallback.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Config {
    pub service_name: String,
    pub log_filter: String,
    pub strict: bool,
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "justin".to_string(),
            log_filter: "info".to_string(),
            strict: false,
            data_dir: None,
        }
    }
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary lookup.
    ///
    /// Factored out so parsing can be tested without touching the real
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let defaults = Self::default();

        let strict = match lookup(ENV_STRICT) {
            None => defaults.strict,
            Some(raw) => parse_bool(ENV_STRICT, &raw)?,
        };

        Ok(Self {
            service_name: lookup(ENV_SERVICE_NAME).unwrap_or(defaults.service_name),
            log_filter: lookup(ENV_LOG_FILTER).unwrap_or(defaults.log_filter),
            strict,
            data_dir: lookup(ENV_DATA_DIR).map(PathBuf::from),
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, Error> {
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Ok(false)
    } else {
        Err(Error::config(format!(
            "{key}: expected a boolean (true/false/1/0), got {raw:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn absent_variables_fall_back_to_defaults() {
        let config = Config::from_lookup(|_| None).expect("empty environment must resolve");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn present_variables_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_SERVICE_NAME, "orders-e2e"),
            (ENV_LOG_FILTER, "justin=debug"),
            (ENV_STRICT, "1"),
            (ENV_DATA_DIR, "/tmp/orders"),
        ]))
        .expect("well-formed environment must resolve");

        assert_eq!(config.service_name, "orders-e2e");
        assert_eq!(config.log_filter, "justin=debug");
        assert!(config.strict);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/orders")));
    }

    #[test]
    fn malformed_boolean_is_a_config_error() {
        let err = Config::from_lookup(lookup_from(&[(ENV_STRICT, "banana")]))
            .expect_err("malformed JUSTIN_STRICT must fail");

        assert_eq!(err.kind, ErrorKind::Config);
        assert!(
            err.message.contains("JUSTIN_STRICT"),
            "error should name the variable: {err:?}"
        );
    }

    #[test]
    fn boolean_parsing_is_case_insensitive() {
        for (raw, expected) in [("TRUE", true), ("False", false), ("0", false), ("1", true)] {
            let config = Config::from_lookup(lookup_from(&[(ENV_STRICT, raw)]))
                .unwrap_or_else(|err| panic!("{raw} must parse: {err:?}"));
            assert_eq!(config.strict, expected, "raw value {raw:?}");
        }
    }
}
