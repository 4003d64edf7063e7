//! Secure password generation.
//!
//! Passwords are sampled uniformly from a pool assembled from the requested
//! character classes. Candidates missing a requested class are rejected and
//! redrawn, up to [`MAX_ATTEMPTS`] times.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secrecy::SecretString;
use thiserror::Error;
use zeroize::{Zeroize, Zeroizing};

use crate::charset::{CharacterClass, build_pool};

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 64;
pub const DEFAULT_LENGTH: usize = 16;

/// Retry budget for candidates that miss a requested class.
pub const MAX_ATTEMPTS: usize = 10;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Select at least one character type")]
    NoClassSelected,
    #[error("Password length {length} is outside {min}..={max}")]
    LengthOutOfRange { length: usize, min: usize, max: usize },
    #[error("No usable characters left in the pool")]
    EmptyPool,
    #[error("Failed to generate a valid password after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),
}

/// Options for a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub use_uppercase: bool,
    pub use_lowercase: bool,
    pub use_numbers: bool,
    pub use_symbols: bool,
    /// Drop `0 O 1 l I` from the pool.
    pub exclude_ambiguous: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            use_uppercase: true,
            use_lowercase: true,
            use_numbers: true,
            use_symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl GenerationRequest {
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Enables or disables a single class.
    pub fn with_class(mut self, class: CharacterClass, enabled: bool) -> Self {
        match class {
            CharacterClass::Lowercase => self.use_lowercase = enabled,
            CharacterClass::Uppercase => self.use_uppercase = enabled,
            CharacterClass::Numbers => self.use_numbers = enabled,
            CharacterClass::Symbols => self.use_symbols = enabled,
        }
        self
    }

    pub fn with_exclude_ambiguous(mut self, exclude: bool) -> Self {
        self.exclude_ambiguous = exclude;
        self
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.use_lowercase,
            CharacterClass::Uppercase => self.use_uppercase,
            CharacterClass::Numbers => self.use_numbers,
            CharacterClass::Symbols => self.use_symbols,
        }
    }

    /// Enabled classes in pool order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |&class| self.is_enabled(class))
    }

    /// The sampling pool this request draws from.
    pub fn pool(&self) -> Vec<char> {
        build_pool(self.enabled_classes(), self.exclude_ambiguous)
    }
}

/// Generates a password using the operating system's secure RNG.
pub fn generate_password(request: &GenerationRequest) -> Result<SecretString, GenerationError> {
    generate_password_with(request, &mut OsRng)
}

/// Generates a password drawing randomness from `rng`.
///
/// Each attempt requests `length` random `u32` values in one call and maps
/// them onto the pool by modulo. RNG failures are returned as
/// [`GenerationError::EntropyUnavailable`]; there is no fallback source.
pub fn generate_password_with<R>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<SecretString, GenerationError>
where
    R: RngCore + CryptoRng,
{
    if request.enabled_classes().next().is_none() {
        return Err(GenerationError::NoClassSelected);
    }

    let length = request.length;
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(GenerationError::LengthOutOfRange {
            length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        });
    }

    let pool = request.pool();
    if pool.is_empty() {
        return Err(GenerationError::EmptyPool);
    }

    let mut random = Zeroizing::new(vec![0u8; length * 4]);

    for attempt in 1..=MAX_ATTEMPTS {
        if let Err(e) = rng.try_fill_bytes(&mut random) {
            #[cfg(feature = "tracing")]
            tracing::error!("Secure random source failed: {}", e);
            return Err(GenerationError::EntropyUnavailable(e));
        }

        let mut candidate: String = random
            .chunks_exact(4)
            .map(|chunk| {
                let value = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                pool[value as usize % pool.len()]
            })
            .collect();

        if satisfies_classes(request, &candidate) {
            #[cfg(feature = "tracing")]
            tracing::debug!(attempt, length, pool = pool.len(), "password generated");
            return Ok(SecretString::new(candidate.into_boxed_str()));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(attempt, "candidate missing a requested class, retrying");
        #[cfg(not(feature = "tracing"))]
        let _ = attempt;

        candidate.zeroize();
    }

    #[cfg(feature = "tracing")]
    tracing::warn!("Failed to generate valid password after {} attempts", MAX_ATTEMPTS);

    Err(GenerationError::GenerationExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

/// Every enabled class has at least one character in `candidate`.
fn satisfies_classes(request: &GenerationRequest, candidate: &str) -> bool {
    request
        .enabled_classes()
        .all(|class| candidate.chars().any(|c| class.contains(c)))
}
