//! Length section - awards one point per length threshold reached.

use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;
const EXTRA_LONG_LENGTH: usize = 16;

fn char_len(password: &SecretString) -> usize {
    password.expose_secret().chars().count()
}

/// Passes when the password has at least 8 characters.
pub fn min_length_check(password: &SecretString) -> bool {
    char_len(password) >= MIN_LENGTH
}

/// Passes when the password has at least 12 characters.
pub fn long_length_check(password: &SecretString) -> bool {
    char_len(password) >= LONG_LENGTH
}

/// Passes when the password has at least 16 characters.
pub fn extra_long_length_check(password: &SecretString) -> bool {
    char_len(password) >= EXTRA_LONG_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_checks_too_short() {
        let pwd = secret("Short1!");
        assert!(!min_length_check(&pwd));
        assert!(!long_length_check(&pwd));
        assert!(!extra_long_length_check(&pwd));
    }

    #[test]
    fn test_length_checks_exact_thresholds() {
        assert!(min_length_check(&secret("12345678")));
        assert!(!long_length_check(&secret("12345678901")));
        assert!(long_length_check(&secret("123456789012")));
        assert!(!extra_long_length_check(&secret("123456789012345")));
        assert!(extra_long_length_check(&secret("1234567890123456")));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 4 chars, 8 bytes
        let pwd = secret("éééé");
        assert!(!min_length_check(&pwd));
    }
}
