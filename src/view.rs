//! Form view model - everything a renderer needs to draw the generator form.

use std::fmt;

use crate::charset::CharClass;
use crate::generator::{MAX_LENGTH, MIN_LENGTH};
use crate::score::{MeterColor, StrengthLabel};
use crate::state::{Generation, GeneratorState};

pub const COPY_TITLE: &str = "Copy to Clipboard";
pub const COPIED_TITLE: &str = "Copied!";

#[derive(Debug, Clone, PartialEq)]
pub struct ClassToggle {
    pub class: CharClass,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrengthMeter {
    pub label: StrengthLabel,
    pub color: MeterColor,
    pub fill_percent: f64,
}

#[derive(Clone, PartialEq)]
pub struct FormView {
    pub length: usize,
    pub length_bounds: (usize, usize),
    /// Toggles in form order: uppercase, lowercase, numbers, symbols.
    pub toggles: Vec<ClassToggle>,
    pub show_regenerate: bool,
    /// Read-only field contents; `None` before the first generate action.
    pub display: Option<String>,
    pub copied: bool,
    pub copy_title: &'static str,
    /// Absent while the sentinel message is displayed.
    pub strength: Option<StrengthMeter>,
}

const TOGGLE_ORDER: [CharClass; 4] = [
    CharClass::Uppercase,
    CharClass::Lowercase,
    CharClass::Digits,
    CharClass::Symbols,
];

impl fmt::Debug for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormView")
            .field("length", &self.length)
            .field("length_bounds", &self.length_bounds)
            .field("toggles", &self.toggles)
            .field("show_regenerate", &self.show_regenerate)
            .field("display", &self.display.as_ref().map(|_| "[REDACTED]"))
            .field("copied", &self.copied)
            .field("copy_title", &self.copy_title)
            .field("strength", &self.strength)
            .finish()
    }
}

impl FormView {
    pub fn from_state(state: &GeneratorState) -> Self {
        let options = state.options();
        let toggles = TOGGLE_ORDER
            .iter()
            .map(|&class| ClassToggle {
                class,
                label: class.label(),
                checked: options.is_enabled(class),
            })
            .collect();

        let show_password = matches!(state.generation(), Some(Generation::Password(_)));
        let strength = state.score().filter(|_| show_password).map(|score| {
            let label = score.label();
            StrengthMeter {
                label,
                color: label.color(),
                fill_percent: score.fill_percent(),
            }
        });

        Self {
            length: options.length(),
            length_bounds: (MIN_LENGTH, MAX_LENGTH),
            toggles,
            show_regenerate: show_password,
            display: state.generation().map(|g| g.display_text().to_owned()),
            copied: state.is_copied(),
            copy_title: if state.is_copied() { COPIED_TITLE } else { COPY_TITLE },
            strength,
        }
    }
}
