//! Error types.
//!
//! Formatting itself never fails: every entry point returns a `String`. The types
//! here cover contract violations in the data model, configuration loading, and the
//! structured payload of the unresolved-symbol diagnostic.

use std::io;

/// Violations of the unit data model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("malformed exponent {numer}/{denom}: denominator must be non-zero and the reduced fraction must fit in i32")]
    MalformedExponent { numer: i32, denom: i32 },
}

/// A unit symbol that no namespace in the search context could resolve.
///
/// This is never returned to callers; it is the body of the warning logged when the
/// resolver falls back to the unverified abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "could not resolve unit symbol `{abbreviation}` in namespaces [{}]; output may not be parsable",
    .namespaces.join(", ")
)]
pub struct UnresolvedSymbol {
    pub abbreviation: String,
    pub namespaces: Vec<String>,
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("No parsable_units.toml found in standard locations")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_symbol_lists_namespaces() {
        let err = UnresolvedSymbol {
            abbreviation: "furlong".to_string(),
            namespaces: vec!["builtin".to_string(), "astro".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "could not resolve unit symbol `furlong` in namespaces [builtin, astro]; output may not be parsable"
        );
    }

    #[test]
    fn malformed_exponent_message() {
        let err = ModelError::MalformedExponent { numer: 1, denom: 0 };
        assert!(err.to_string().contains("1/0"));
    }
}
