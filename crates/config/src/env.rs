//! Environment-source abstraction for configuration loading.
//!
//! Responsibilities:
//! - Define the `EnvSource` seam the loader reads variables through.
//! - Provide `ProcessEnv` (the real process environment) and a
//!   `HashMap` implementation for injecting synthetic environments in tests.
//! - Provide the uniform `var_or` resolution rule.
//!
//! Does NOT handle:
//! - `.env` file merging (see `ConfigLoader::load_dotenv`).
//! - Typed parsing (see `loader` module).
//!
//! Invariants:
//! - `var_or` returns the variable's value exactly as set when it is a
//!   non-empty string, with no trimming or case changes.
//! - The empty string counts as unset and falls back to the default.

use std::collections::HashMap;

/// Abstract key-value lookup over an environment.
///
/// The loader only reads variables through this trait, so tests can hand it
/// a synthetic map instead of mutating process-global state.
pub trait EnvSource {
    /// Look up a variable, returning `None` when it is not present.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Resolve a variable with the uniform rule: the variable's value if it is a
/// non-empty string, otherwise the documented default.
pub fn var_or(env: &impl EnvSource, key: &str, default: &str) -> String {
    match env.var(key) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn unset_var_resolves_to_default() {
        let env = map(&[]);
        assert_eq!(var_or(&env, "DB_HOST", "localhost"), "localhost");
    }

    #[test]
    fn empty_var_resolves_to_default() {
        let env = map(&[("DB_HOST", "")]);
        assert_eq!(var_or(&env, "DB_HOST", "localhost"), "localhost");
    }

    #[test]
    fn set_var_resolves_to_exact_value() {
        let env = map(&[("DB_HOST", "db.internal")]);
        assert_eq!(var_or(&env, "DB_HOST", "localhost"), "db.internal");
    }

    #[test]
    fn whitespace_only_var_counts_as_set() {
        // Only the empty string falls back; whitespace is a value.
        let env = map(&[("DB_PASSWORD", "   ")]);
        assert_eq!(var_or(&env, "DB_PASSWORD", ""), "   ");
    }

    #[test]
    fn value_is_not_trimmed() {
        let env = map(&[("JWT_SECRET", " padded ")]);
        assert_eq!(var_or(&env, "JWT_SECRET", "secret"), " padded ");
    }

    proptest! {
        /// Any non-empty string set in the environment resolves to itself,
        /// byte for byte.
        #[test]
        fn nonempty_values_pass_through_exactly(value in ".+") {
            let env = map(&[("X", value.as_str())]);
            prop_assert_eq!(var_or(&env, "X", "fallback"), value);
        }
    }

    #[test]
    fn process_env_reads_real_variables() {
        // PATH is set in any realistic test environment; this only checks
        // that the trait impl goes through std::env.
        let from_trait = ProcessEnv.var("PATH");
        let from_std = std::env::var("PATH").ok();
        assert_eq!(from_trait, from_std);
    }
}
