// Redacting wrapper for connection strings and client secrets.
//
// Responsibilities
// - Keep secret material out of Debug and Display output.
// - Zero the backing memory when the value is dropped.

use std::fmt;
use zeroize::Zeroizing;

#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(Zeroizing<String>);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Hand out the raw value. Callers must not log it.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretString(***REDACTED***)")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod secret_string_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_redact_debug_and_display_output() {
        let secret = SecretString::from("Server=db;Password=hunter2");
        assert_eq!(format!("{secret:?}"), "SecretString(***REDACTED***)");
        assert_eq!(secret.to_string(), "***REDACTED***");
    }

    #[rstest]
    fn it_should_expose_the_raw_value_on_request() {
        let secret = SecretString::new(String::from("Server=db"));
        assert_eq!(secret.expose_secret(), "Server=db");
    }

    #[rstest]
    #[case("", true)]
    #[case("   ", true)]
    #[case("Server=db", false)]
    fn it_should_treat_blank_values_as_empty(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(SecretString::from(raw).is_empty(), expected);
    }
}
