//! Environment lookups that tests can replace.
//!
//! [`Env::real()`] reads the process environment; [`Env::mock()`] reads a
//! fixed map so config tests never touch `std::env::set_var`.

use std::collections::HashMap;

/// Source of environment variables.
#[derive(Clone, Debug, Default)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the process environment.
    pub fn real() -> Self {
        Self { fixed: None }
    }

    /// Read from the given pairs only.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            fixed: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// Value of `name`, or `None` when unset or not UTF-8. Blank values are
    /// returned as-is; callers decide what blank means.
    pub fn var(&self, name: &str) -> Option<String> {
        match &self.fixed {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_configured_values() {
        let env = Env::mock([("USERFETCH_URL", "http://localhost/users")]);
        assert_eq!(
            env.var("USERFETCH_URL").as_deref(),
            Some("http://localhost/users")
        );
    }

    #[test]
    fn mock_missing_key_is_none() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert!(env.var("USERFETCH_FILTER").is_none());
    }

    #[test]
    fn blank_values_are_passed_through() {
        let env = Env::mock([("USERFETCH_FILTER", "")]);
        assert_eq!(env.var("USERFETCH_FILTER").as_deref(), Some(""));
    }

    #[test]
    fn real_env_sees_cargo_vars() {
        assert!(Env::real().var("CARGO_MANIFEST_DIR").is_some());
    }
}
