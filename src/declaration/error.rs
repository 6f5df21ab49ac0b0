//! Declaration errors.

use thiserror::Error;

/// A problem found while reading a `{ states, flags }` configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DriverError {
    #[error(
        "Flag `{flag}` must be a list of state names or a map keyed by state name, found {found}"
    )]
    InvalidFlagResolver { flag: String, found: String },

    #[error("Configuration must be an object with `states` and `flags`, found {found}")]
    InvalidConfig { found: String },

    #[error("Missing required option `{option}`")]
    MissingOption { option: &'static str },

    #[error("Option `{option}` must be an object, found {found}")]
    InvalidOption { option: &'static str, found: String },
}

/// Every problem found in a rejected configuration.
///
/// A configuration is either fully valid or rejected as a whole; no
/// partial declaration is ever produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid declaration ({} problem(s)): {}", .errors.len(), summary(.errors))]
pub struct DeclarationError {
    pub errors: Vec<DriverError>,
}

impl DeclarationError {
    /// True if any problem concerns the flag `name`.
    pub fn concerns_flag(&self, name: &str) -> bool {
        self.errors.iter().any(|error| {
            matches!(error, DriverError::InvalidFlagResolver { flag, .. } if flag == name)
        })
    }
}

fn summary(errors: &[DriverError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
