//! Character variety section - one point per character class present.

use secrecy::{ExposeSecret, SecretString};

fn any_char(password: &SecretString, pred: impl Fn(char) -> bool) -> bool {
    password.expose_secret().chars().any(pred)
}

pub fn lowercase_check(password: &SecretString) -> bool {
    any_char(password, |c| c.is_ascii_lowercase())
}

pub fn uppercase_check(password: &SecretString) -> bool {
    any_char(password, |c| c.is_ascii_uppercase())
}

pub fn digit_check(password: &SecretString) -> bool {
    any_char(password, |c| c.is_ascii_digit())
}

/// Passes when the password contains anything outside `[A-Za-z0-9]`.
pub fn special_check(password: &SecretString) -> bool {
    any_char(password, |c| !c.is_ascii_alphanumeric())
}
