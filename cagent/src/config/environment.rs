//! Environment variable handling for hub connection settings.
//!
//! Three `CAGENT_HUB_*` variables seed the hub endpoint and credentials of a
//! [`MinValuableConfig`]. In fill-if-empty mode a variable only lands in an
//! empty field; in force mode it always overwrites.

use std::env::{self, VarError};

use crate::config::schema::MinValuableConfig;
use crate::error::{Error, Result};

/// Applies `CAGENT_HUB_*` environment overrides.
///
/// # Examples
///
/// ```
/// use cagent::config::{EnvironmentConfig, MinValuableConfig};
///
/// let mut mvc = MinValuableConfig::default();
/// EnvironmentConfig::apply_from(&mut mvc, false, |name| {
///     (name == "CAGENT_HUB_URL").then(|| "https://hub.example.com".to_string())
/// });
/// assert_eq!(mvc.hub_url, "https://hub.example.com");
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Hub endpoint variable.
    pub const HUB_URL_VAR: &'static str = "CAGENT_HUB_URL";
    /// Hub user variable.
    pub const HUB_USER_VAR: &'static str = "CAGENT_HUB_USER";
    /// Hub password variable.
    pub const HUB_PASSWORD_VAR: &'static str = "CAGENT_HUB_PASSWORD";

    /// All variables read by the overlay.
    pub const VARIABLES: [&'static str; 3] =
        [Self::HUB_URL_VAR, Self::HUB_USER_VAR, Self::HUB_PASSWORD_VAR];

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] if a variable is set to a value that is
    /// not valid UTF-8.
    pub fn apply(mvc: &mut MinValuableConfig, force: bool) -> Result<()> {
        let mut values = Vec::with_capacity(Self::VARIABLES.len());
        for name in Self::VARIABLES {
            match env::var(name) {
                Ok(value) => values.push((name, value)),
                Err(VarError::NotPresent) => {}
                Err(VarError::NotUnicode(_)) => {
                    return Err(Error::Environment {
                        variable: name.to_string(),
                        message: "value is not valid UTF-8".to_string(),
                    });
                }
            }
        }

        Self::apply_from(mvc, force, |name| {
            values
                .iter()
                .find(|(var, _)| *var == name)
                .map(|(_, value)| value.clone())
        });
        Ok(())
    }

    /// Apply overrides from an arbitrary lookup.
    ///
    /// A variable that is set, even to an empty string, replaces the field
    /// when `force` is true or the field is currently empty.
    pub fn apply_from<F>(mvc: &mut MinValuableConfig, force: bool, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::overlay(&mut mvc.hub_url, lookup(Self::HUB_URL_VAR), force);
        Self::overlay(&mut mvc.hub_user, lookup(Self::HUB_USER_VAR), force);
        Self::overlay(&mut mvc.hub_password, lookup(Self::HUB_PASSWORD_VAR), force);
    }

    /// Lookup backed by the process environment.
    ///
    /// Unset and non-UTF-8 variables both read as absent.
    #[must_use]
    pub fn process_lookup(name: &str) -> Option<String> {
        env::var(name).ok()
    }

    fn overlay(field: &mut String, value: Option<String>, force: bool) {
        if let Some(value) = value {
            if force || field.is_empty() {
                *field = value;
            }
        }
    }
}

impl MinValuableConfig {
    /// Apply `CAGENT_HUB_*` overrides from the process environment.
    ///
    /// # Errors
    ///
    /// See [`EnvironmentConfig::apply`].
    pub fn apply_env(&mut self, force: bool) -> Result<()> {
        EnvironmentConfig::apply(self, force)
    }

    /// Apply `CAGENT_HUB_*` overrides from `lookup`.
    pub fn apply_env_from<F>(&mut self, lookup: F, force: bool)
    where
        F: Fn(&str) -> Option<String>,
    {
        EnvironmentConfig::apply_from(self, force, lookup);
    }
}
