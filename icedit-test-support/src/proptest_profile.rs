//! Property-test run profile parsing for CI and local overrides.
//!
//! Every property suite in the workspace reads its case count, forking
//! policy and generated graph size from here, so one set of environment
//! variables scales them all.

use std::env;

use proptest::test_runner::Config as ProptestConfig;

/// Environment variable controlling proptest case counts.
pub const ICEDIT_PBT_CASES_ENV_KEY: &str = "ICEDIT_PBT_CASES";
/// Environment variable controlling proptest process forking.
pub const ICEDIT_PBT_FORK_ENV_KEY: &str = "ICEDIT_PBT_FORK";
/// Environment variable bounding the node count of generated graphs.
pub const ICEDIT_PBT_MAX_NODES_ENV_KEY: &str = "ICEDIT_PBT_MAX_NODES";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
    max_nodes: usize,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// Invalid overrides are logged and replaced by the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use icedit_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, 16);
    /// assert!(profile.cases() > 0);
    /// assert!(profile.max_nodes() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_max_nodes: usize) -> Self {
        Self {
            cases: read_env_or_default(ICEDIT_PBT_CASES_ENV_KEY, default_cases, parse_positive),
            fork: read_env_or_default(ICEDIT_PBT_FORK_ENV_KEY, false, parse_bool),
            max_nodes: read_env_or_default(
                ICEDIT_PBT_MAX_NODES_ENV_KEY,
                default_max_nodes,
                parse_positive,
            ),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }

    /// Upper bound on the node count of generated graphs.
    #[must_use]
    pub const fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Builds the proptest configuration described by this profile.
    #[must_use]
    pub fn config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            fork: self.fork,
            ..ProptestConfig::default()
        }
    }
}

fn read_env_or_default<T, F>(key: &'static str, default: T, parser: F) -> T
where
    T: Copy,
    F: Fn(&str) -> Result<T, String>,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_positive<T>(raw: &str) -> Result<T, String>
where
    T: std::str::FromStr + Default + PartialEq,
    T::Err: std::fmt::Display,
{
    let parsed = raw
        .trim()
        .parse::<T>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == T::default() {
        return Err("value must be > 0".to_owned());
    }
    Ok(parsed)
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
