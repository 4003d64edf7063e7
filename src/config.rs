//! Generation defaults read from the environment.
//!
//! | Variable                    | Meaning                                   | Default |
//! |-----------------------------|-------------------------------------------|---------|
//! | `PWD_GEN_LENGTH`            | password length                           | `16`    |
//! | `PWD_GEN_CLASSES`           | comma list of `lower,upper,digits,symbols` | all     |
//! | `PWD_GEN_EXCLUDE_AMBIGUOUS` | `true/false`, `1/0`, `yes/no`             | `false` |
//!
//! Length bounds are not checked here; the generator enforces them.

use thiserror::Error;

use crate::charset::CharacterClass;
use crate::generator::GenerationRequest;

pub const ENV_LENGTH: &str = "PWD_GEN_LENGTH";
pub const ENV_CLASSES: &str = "PWD_GEN_CLASSES";
pub const ENV_EXCLUDE_AMBIGUOUS: &str = "PWD_GEN_EXCLUDE_AMBIGUOUS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PWD_GEN_LENGTH is not a valid length: {0:?}")]
    InvalidLength(String),
    #[error("PWD_GEN_CLASSES contains an unknown class: {0:?}")]
    UnknownClass(String),
    #[error("PWD_GEN_EXCLUDE_AMBIGUOUS is not a boolean: {0:?}")]
    InvalidFlag(String),
}

/// Builds a [`GenerationRequest`] from environment variables.
///
/// Unset variables keep the [`GenerationRequest::default`] values.
pub fn request_from_env() -> Result<GenerationRequest, ConfigError> {
    let mut request = GenerationRequest::default();

    if let Ok(raw) = std::env::var(ENV_LENGTH) {
        request.length = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidLength(raw.clone()))?;
    }

    if let Ok(raw) = std::env::var(ENV_CLASSES) {
        request = CharacterClass::ALL
            .into_iter()
            .fold(request, |req, class| req.with_class(class, false));
        for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            request = request.with_class(parse_class(name)?, true);
        }
    }

    if let Ok(raw) = std::env::var(ENV_EXCLUDE_AMBIGUOUS) {
        request.exclude_ambiguous = parse_flag(&raw)?;
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        length = request.length,
        exclude_ambiguous = request.exclude_ambiguous,
        "generation request loaded from environment"
    );

    Ok(request)
}

fn parse_class(name: &str) -> Result<CharacterClass, ConfigError> {
    match name.to_ascii_lowercase().as_str() {
        "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
        "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
        "digits" | "numbers" => Ok(CharacterClass::Numbers),
        "symbols" => Ok(CharacterClass::Symbols),
        _ => Err(ConfigError::UnknownClass(name.to_string())),
    }
}

fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag(raw.to_string())),
    }
}
