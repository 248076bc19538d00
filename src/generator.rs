//! Password generator - builds the alphabet and draws random characters.

use rand::Rng;
use rand::rngs::OsRng;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::charset::{CharClass, build_alphabet};

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 12;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Please select at least one option")]
    NoClassesSelected,
    #[error("Password length {length} is outside the allowed range {min}..={max}")]
    LengthOutOfRange { length: usize, min: usize, max: usize },
}

/// Length and character-class options for a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GeneratorOptions {
    /// Options with the given length and every class enabled.
    pub fn new(length: usize) -> Result<Self, GeneratorError> {
        let mut options = Self::default();
        options.set_length(length)?;
        Ok(options)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn set_length(&mut self, length: usize) -> Result<(), GeneratorError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(GeneratorError::LengthOutOfRange {
                length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        self.length = length;
        Ok(())
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Digits => self.include_numbers,
            CharClass::Symbols => self.include_symbols,
        }
    }

    pub fn set_enabled(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Lowercase => self.include_lowercase = enabled,
            CharClass::Uppercase => self.include_uppercase = enabled,
            CharClass::Digits => self.include_numbers = enabled,
            CharClass::Symbols => self.include_symbols = enabled,
        }
    }

    /// Enabled classes, in alphabet order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|class| self.is_enabled(*class))
    }

    pub fn alphabet(&self) -> Vec<char> {
        build_alphabet(self.enabled_classes())
    }
}

/// A freshly generated password. Replaced, never mutated, on regeneration.
#[derive(Debug)]
pub struct GeneratedPassword(SecretString);

impl GeneratedPassword {
    pub fn as_secret(&self) -> &SecretString {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.expose_secret().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl ExposeSecret<str> for GeneratedPassword {
    fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Generates a password of exactly `options.length()` characters, each drawn
/// independently and uniformly from the enabled classes.
///
/// # Errors
/// `GeneratorError::NoClassesSelected` if every class is disabled.
pub fn generate_password<R>(
    options: &GeneratorOptions,
    rng: &mut R,
) -> Result<GeneratedPassword, GeneratorError>
where
    R: Rng + ?Sized,
{
    let alphabet = options.alphabet();
    if alphabet.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Password generation skipped: no character class selected");
        return Err(GeneratorError::NoClassesSelected);
    }

    let password: String = (0..options.length())
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generated password: {} chars from a {}-char alphabet",
        options.length(),
        alphabet.len()
    );

    Ok(GeneratedPassword(SecretString::from(password)))
}

/// Same as [`generate_password`], drawing from the operating system's CSPRNG.
pub fn generate_password_os(
    options: &GeneratorOptions,
) -> Result<GeneratedPassword, GeneratorError> {
    generate_password(options, &mut OsRng)
}
