//! Password generator library
//!
//! This library generates random passwords from selectable character
//! classes, scores them with a seven-point strength meter and tracks the
//! "copied to clipboard" acknowledgment of a generator form.
//!
//! # Features
//!
//! - `async` (default): Enables the clipboard writers and the session driver
//! - `system-clipboard` (default): Enables the `arboard` desktop clipboard
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GENERATOR_CONFIG`: Custom path to the config file
//!   (default: `./pwd-generator.toml`)
//!
//! # Example
//!
//! ```rust
//! use pwd_generator::{GeneratorOptions, evaluate_password_strength, generate_password_os};
//!
//! let options = GeneratorOptions::new(16).expect("length within 8..=32");
//! let password = generate_password_os(&options).expect("classes enabled");
//!
//! let evaluation = evaluate_password_strength(password.as_secret());
//! println!("Score: {}/7", evaluation.score.value());
//! println!("Strength: {}", evaluation.label());
//! ```

// Internal modules
mod charset;
mod config;
mod evaluator;
mod generator;
mod score;
mod sections;
mod state;
mod vault;
mod view;

#[cfg(feature = "async")]
mod clipboard;
#[cfg(feature = "async")]
mod session;

// Public API
pub use charset::{CharClass, build_alphabet};
pub use config::{
    CONFIG_PATH_ENV, ConfigError, DEFAULT_COPIED_ACK, GeneratorConfig, get_config_path,
};
pub use evaluator::{evaluate_password_strength, score_password};
pub use generator::{
    DEFAULT_LENGTH, GeneratedPassword, GeneratorError, GeneratorOptions, MAX_LENGTH, MIN_LENGTH,
    generate_password, generate_password_os,
};
pub use score::{MAX_SCORE, MeterColor, StrengthEvaluation, StrengthLabel, StrengthScore};
pub use state::{CopyRequest, Generation, GeneratorState, NO_CLASSES_MESSAGE};
pub use vault::VaultItem;
pub use view::{COPIED_TITLE, COPY_TITLE, ClassToggle, FormView, StrengthMeter};

#[cfg(feature = "async")]
pub use clipboard::{ClipboardError, ClipboardWriter, MemoryClipboard};
#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
#[cfg(feature = "async")]
pub use session::{CopyOutcome, GeneratorSession};

// Callers hold secrets through these types
pub use secrecy::{ExposeSecret, SecretString};
