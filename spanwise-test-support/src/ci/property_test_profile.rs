//! Property-test run profile read from the environment.
//!
//! Every property suite in the workspace builds its proptest configuration
//! from [`ProptestRunProfile`], so CI can scale case counts or isolate cases
//! in subprocesses without touching the suites.

use std::env;

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable enabling forked (one process per case) execution.
pub const SPANWISE_PBT_FORK_ENV_KEY: &str = "SPANWISE_PBT_FORK";

/// Why an override was ignored.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OverrideError {
    /// The value is not an unsigned integer.
    #[error("expected a positive integer, got {raw:?}")]
    NotANumber {
        /// Raw environment value.
        raw: String,
    },
    /// Zero cases would silently disable the suite.
    #[error("case count must be greater than zero")]
    ZeroCases,
    /// The value is not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got {raw:?}")]
    NotABool {
        /// Raw environment value.
        raw: String,
    },
}

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the environment, keeping the suite's defaults
    /// for unset or invalid values. Invalid values are logged at `warn`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanwise_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(SPANWISE_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

fn override_or<T>(
    key: &'static str,
    default: T,
    parse: impl Fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, %error, "ignoring property-test override");
        default
    })
}

/// Parses a positive case count.
///
/// # Errors
/// Returns [`OverrideError::NotANumber`] or [`OverrideError::ZeroCases`].
pub fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber {
            raw: raw.to_owned(),
        }),
    }
}

/// Parses a boolean flag, case-insensitively.
///
/// # Errors
/// Returns [`OverrideError::NotABool`] for unrecognised spellings.
pub fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool {
            raw: raw.to_owned(),
        }),
    }
}
