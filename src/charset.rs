//! Character classes and alphabet construction.

use std::fmt;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// All classes, in alphabet concatenation order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    /// The characters belonging to this class.
    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    /// Label shown next to the class toggle.
    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "Lowercase Letters (a-z)",
            CharClass::Uppercase => "Uppercase Letters (A-Z)",
            CharClass::Digits => "Numbers (0-9)",
            CharClass::Symbols => "Symbols (!@#$%...)",
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digits => "numbers",
            CharClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

/// Concatenates the given classes in the fixed order lowercase, uppercase,
/// digits, symbols, regardless of the order they are passed in.
///
/// Returns an empty vector when no class is enabled.
pub fn build_alphabet<I>(enabled: I) -> Vec<char>
where
    I: IntoIterator<Item = CharClass>,
{
    let enabled: Vec<CharClass> = enabled.into_iter().collect();
    CharClass::ALL
        .iter()
        .filter(|class| enabled.contains(class))
        .flat_map(|class| class.chars().chars())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_sizes() {
        assert_eq!(CharClass::Lowercase.chars().len(), 26);
        assert_eq!(CharClass::Uppercase.chars().len(), 26);
        assert_eq!(CharClass::Digits.chars().len(), 10);
        assert_eq!(CharClass::Symbols.chars().len(), 26);
    }

    #[test]
    fn test_build_alphabet_fixed_order() {
        let alphabet = build_alphabet([CharClass::Symbols, CharClass::Lowercase]);
        let expected: Vec<char> = format!("{LOWERCASE}{SYMBOLS}").chars().collect();
        assert_eq!(alphabet, expected);
    }

    #[test]
    fn test_build_alphabet_all_classes() {
        let alphabet = build_alphabet(CharClass::ALL);
        assert_eq!(alphabet.len(), 88);
        assert_eq!(alphabet.first(), Some(&'a'));
        assert_eq!(alphabet.last(), Some(&'?'));
    }

    #[test]
    fn test_build_alphabet_empty() {
        assert!(build_alphabet(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_symbols_are_not_alphanumeric() {
        assert!(CharClass::Symbols.chars().chars().all(|c| !c.is_ascii_alphanumeric()));
    }
}
