//! Generator UI state and its pure transitions.
//!
//! The state is mutated only through the methods below. Time is passed in
//! explicitly so the acknowledgment revert can be driven by any clock.

use std::time::{Duration, Instant};

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

use crate::charset::CharClass;
use crate::evaluator::score_password;
use crate::generator::{GeneratedPassword, GeneratorError, GeneratorOptions, generate_password};
use crate::score::StrengthScore;

/// Text shown in place of a password when no character class is enabled.
pub const NO_CLASSES_MESSAGE: &str = "Please select at least one option";

/// Outcome of the most recent generate action.
#[derive(Debug)]
pub enum Generation {
    Password(GeneratedPassword),
    NoClassesSelected,
}

impl Generation {
    /// Text for the read-only password field.
    pub fn display_text(&self) -> &str {
        match self {
            Generation::Password(password) => password.expose_secret(),
            Generation::NoClassesSelected => NO_CLASSES_MESSAGE,
        }
    }

    pub fn password(&self) -> Option<&GeneratedPassword> {
        match self {
            Generation::Password(password) => Some(password),
            Generation::NoClassesSelected => None,
        }
    }
}

/// A pending clipboard write for the password of generation `serial`.
#[derive(Debug)]
pub struct CopyRequest {
    serial: u64,
    text: SecretString,
}

impl CopyRequest {
    pub fn text(&self) -> &SecretString {
        &self.text
    }
}

#[derive(Debug, Default)]
pub struct GeneratorState {
    options: GeneratorOptions,
    generation: Option<Generation>,
    serial: u64,
    score: Option<StrengthScore>,
    copied: bool,
    copied_until: Option<Instant>,
}

impl GeneratorState {
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn generation(&self) -> Option<&Generation> {
        self.generation.as_ref()
    }

    /// The current password, if one is shown (never the sentinel).
    pub fn password(&self) -> Option<&GeneratedPassword> {
        self.generation.as_ref().and_then(Generation::password)
    }

    /// Score of the current password; `None` while nothing or the sentinel is shown.
    pub fn score(&self) -> Option<StrengthScore> {
        self.score
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn set_length(&mut self, length: usize) -> Result<(), GeneratorError> {
        self.options.set_length(length)
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        self.options.set_enabled(class, enabled);
    }

    /// Replaces the current generation and clears the copy acknowledgment.
    pub fn generate<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.serial += 1;
        self.copied = false;
        self.copied_until = None;

        match generate_password(&self.options, rng) {
            Ok(password) => {
                self.score = Some(score_password(password.as_secret()));
                self.generation = Some(Generation::Password(password));
            }
            Err(GeneratorError::NoClassesSelected) => {
                self.score = None;
                self.generation = Some(Generation::NoClassesSelected);
            }
            Err(GeneratorError::LengthOutOfRange { length, .. }) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Password generation failed: length {} out of range", length);
                let _ = length;
                self.score = None;
                self.generation = None;
            }
        }
    }

    /// Returns a copy request for the current password, or `None` when there is
    /// nothing copyable (no generation yet, or the sentinel is shown).
    pub fn copy_request(&self) -> Option<CopyRequest> {
        self.password().map(|password| CopyRequest {
            serial: self.serial,
            text: SecretString::from(password.expose_secret().to_owned()),
        })
    }

    /// Records a successful clipboard write. The acknowledgment holds until
    /// `now + ack`, superseding any earlier deadline.
    ///
    /// Returns `false` and changes nothing if the password was replaced while
    /// the write was pending.
    pub fn mark_copied(&mut self, request: &CopyRequest, now: Instant, ack: Duration) -> bool {
        if request.serial != self.serial || self.password().is_none() {
            return false;
        }
        self.copied = true;
        self.copied_until = Some(now + ack);
        true
    }

    /// Reverts the acknowledgment once its deadline has passed.
    ///
    /// Returns `true` if the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.copied_until {
            Some(deadline) if self.copied && now >= deadline => {
                self.copied = false;
                self.copied_until = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ACK: Duration = Duration::from_secs(2);

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    fn disable_all(state: &mut GeneratorState) {
        for class in CharClass::ALL {
            state.set_class(class, false);
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GeneratorState::default();
        assert!(state.generation().is_none());
        assert!(state.score().is_none());
        assert!(!state.is_copied());
        assert!(state.copy_request().is_none());
        assert_eq!(state.options().length(), 12);
    }

    #[test]
    fn test_generate_sets_password_and_score() {
        let mut state = GeneratorState::default();
        state.set_length(16).unwrap();
        state.generate(&mut rng());

        let password = state.password().expect("password should be generated");
        assert_eq!(password.len(), 16);
        assert_eq!(state.score(), Some(score_password(password.as_secret())));
    }

    #[test]
    fn test_generate_without_classes_shows_sentinel() {
        let mut state = GeneratorState::default();
        disable_all(&mut state);
        state.generate(&mut rng());

        let generation = state.generation().unwrap();
        assert!(matches!(generation, Generation::NoClassesSelected));
        assert_eq!(generation.display_text(), NO_CLASSES_MESSAGE);
        assert!(state.password().is_none());
        assert!(state.score().is_none());
    }

    #[test]
    fn test_copy_request_suppressed_for_sentinel() {
        let mut state = GeneratorState::default();
        state.generate(&mut rng());
        disable_all(&mut state);
        state.generate(&mut rng());
        assert!(state.copy_request().is_none());
    }

    #[test]
    fn test_copy_request_carries_current_password() {
        let mut state = GeneratorState::default();
        state.generate(&mut rng());
        let request = state.copy_request().unwrap();
        assert_eq!(
            request.text().expose_secret(),
            state.password().unwrap().expose_secret()
        );
    }

    #[test]
    fn test_acknowledgment_reverts_after_deadline() {
        let mut state = GeneratorState::default();
        state.generate(&mut rng());
        let request = state.copy_request().unwrap();
        let t0 = Instant::now();

        assert!(state.mark_copied(&request, t0, ACK));
        assert!(state.is_copied());

        assert!(!state.tick(t0 + Duration::from_millis(1999)));
        assert!(state.is_copied());

        assert!(state.tick(t0 + ACK));
        assert!(!state.is_copied());
    }

    #[test]
    fn test_second_copy_supersedes_deadline() {
        let mut state = GeneratorState::default();
        state.generate(&mut rng());
        let t0 = Instant::now();

        let first = state.copy_request().unwrap();
        state.mark_copied(&first, t0, ACK);
        let second = state.copy_request().unwrap();
        state.mark_copied(&second, t0 + Duration::from_secs(1), ACK);

        assert!(!state.tick(t0 + ACK));
        assert!(state.is_copied());
        assert!(state.tick(t0 + Duration::from_secs(3)));
    }

    #[test]
    fn test_generate_resets_acknowledgment() {
        let mut state = GeneratorState::default();
        state.generate(&mut rng());
        let request = state.copy_request().unwrap();
        let t0 = Instant::now();
        state.mark_copied(&request, t0, ACK);

        state.generate(&mut rng());
        assert!(!state.is_copied());
        assert!(!state.tick(t0 + ACK));
    }

    #[test]
    fn test_stale_copy_request_is_ignored() {
        let mut state = GeneratorState::default();
        state.generate(&mut rng());
        let stale = state.copy_request().unwrap();
        state.generate(&mut rng());

        assert!(!state.mark_copied(&stale, Instant::now(), ACK));
        assert!(!state.is_copied());
    }

    #[test]
    fn test_regenerate_replaces_password() {
        let mut state = GeneratorState::default();
        let mut rng = rng();
        state.set_length(32).unwrap();
        state.generate(&mut rng);
        let first = state.password().unwrap().expose_secret().to_owned();
        state.generate(&mut rng);
        assert_ne!(state.password().unwrap().expose_secret(), first);
    }

    #[test]
    fn test_set_length_out_of_range() {
        let mut state = GeneratorState::default();
        assert!(state.set_length(4).is_err());
        assert_eq!(state.options().length(), 12);
    }
}
