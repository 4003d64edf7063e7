//! Password generation and strength estimation library
//!
//! This library generates random passwords from a cryptographically secure
//! source and scores any password's resistance to offline guessing.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GEN_LENGTH`: Default password length (default: `16`)
//! - `PWD_GEN_CLASSES`: Comma-separated classes, `lower,upper,digits,symbols`
//!   (default: all)
//! - `PWD_GEN_EXCLUDE_AMBIGUOUS`: Drop `0 O 1 l I` from the pool (default: `false`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_forge::{
//!     GenerationRequest, PasswordHistory, evaluate_password_strength, generate_password,
//! };
//!
//! let request = GenerationRequest::default().with_length(20);
//! let password = generate_password(&request).expect("Failed to generate password");
//!
//! let evaluation = evaluate_password_strength(&password);
//! println!("Score: {}", evaluation.score.value());
//! println!("Strength: {} ({})", evaluation.label, evaluation.color());
//! println!("{} bits, ~{} to crack", evaluation.entropy_bits(), evaluation.crack_time);
//!
//! let mut history = PasswordHistory::new();
//! history.push(password);
//! ```

// Internal modules
mod charset;
mod config;
mod crack_time;
mod evaluator;
mod generator;
mod history;
mod sections;
mod types;

// Public API
pub use charset::{AMBIGUOUS, CharacterClass, Composition, LOWERCASE, NUMBERS, SYMBOLS, UPPERCASE};
pub use config::{ConfigError, request_from_env};
pub use crack_time::{CrackTime, crack_time_for, estimate_crack_time};
pub use evaluator::evaluate_password_strength;
pub use generator::{
    DEFAULT_LENGTH, GenerationError, GenerationRequest, MAX_ATTEMPTS, MAX_LENGTH, MIN_LENGTH,
    generate_password, generate_password_with,
};
pub use history::{HISTORY_CAPACITY, PasswordHistory};
pub use types::{PasswordScore, StrengthLabel, StrengthResult};

// Secrets cross the API boundary as `SecretString`
pub use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DEBOUNCE, evaluate_password_strength_tx};
