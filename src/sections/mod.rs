//! Password strength sections
//!
//! Each section contributes independent pass/fail checks worth one point.

mod length;
mod variety;

pub use length::{extra_long_length_check, long_length_check, min_length_check};
pub use variety::{digit_check, lowercase_check, special_check, uppercase_check};

use secrecy::SecretString;

/// A single scoring check: `true` awards one point.
pub type Check = fn(&SecretString) -> bool;

/// The seven checks, in evaluation order, with their display names.
pub const CHECKS: [(&str, Check); 7] = [
    ("at least 8 characters", min_length_check),
    ("at least 12 characters", long_length_check),
    ("at least 16 characters", extra_long_length_check),
    ("a lowercase letter", lowercase_check),
    ("an uppercase letter", uppercase_check),
    ("a number", digit_check),
    ("a symbol", special_check),
];
