//! Bilingual user-facing text. The active language is always passed in by
//! the caller; nothing here keeps a "current language".

use serde::{Deserialize, Serialize};

use crate::error::SolveError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl Lang {
    /// Accepts `es`/`en` and regional tags such as `es-MX` or `en_US`.
    pub fn parse(tag: &str) -> Option<Lang> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "es" => Some(Lang::Es),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    pub fn toggle(self) -> Lang {
        match self {
            Lang::Es => Lang::En,
            Lang::En => Lang::Es,
        }
    }

    /// Label for the switch button, which names the language it switches to.
    pub fn other_code(self) -> &'static str {
        match self {
            Lang::Es => "EN",
            Lang::En => "ES",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    ExactlyTwo,
    MoreThanTwo,
    LegGreaterThanHypotenuse,
    InvalidCombination,
    InvalidAngle,
    NonPositiveSide,
    ErrorPrefix,
}

impl Message {
    pub fn text(self, lang: Lang) -> &'static str {
        use Message::*;
        match (self, lang) {
            (ExactlyTwo, Lang::Es) => "Por favor, ingrese exactamente 2 valores conocidos.",
            (ExactlyTwo, Lang::En) => "Please enter exactly 2 known values.",
            (MoreThanTwo, Lang::Es) => {
                "Ha ingresado más de 2 valores. Por favor, ingrese solo 2 valores y deje los demás vacíos."
            }
            (MoreThanTwo, Lang::En) => {
                "You have entered more than 2 values. Please enter only 2 values and leave the rest empty."
            }
            (LegGreaterThanHypotenuse, Lang::Es) => "El cateto no puede ser mayor que la hipotenusa",
            (LegGreaterThanHypotenuse, Lang::En) => "The leg cannot be greater than the hypotenuse",
            (InvalidCombination, Lang::Es) => {
                "Combinación de valores no válida para resolver el triángulo"
            }
            (InvalidCombination, Lang::En) => "Invalid combination of values to solve the triangle",
            (InvalidAngle, Lang::Es) => "El ángulo debe estar entre 0° y 90°",
            (InvalidAngle, Lang::En) => "The angle must be between 0° and 90°",
            (NonPositiveSide, Lang::Es) => "Las longitudes deben ser mayores que cero",
            (NonPositiveSide, Lang::En) => "Side lengths must be greater than zero",
            (ErrorPrefix, _) => "Error: ",
        }
    }
}

/// Catalog entry used to report an error.
pub fn message_for(err: &SolveError) -> Message {
    match err {
        SolveError::WrongInputCount { found } if *found > 2 => Message::MoreThanTwo,
        SolveError::WrongInputCount { .. } => Message::ExactlyTwo,
        SolveError::InvalidAngleRange { .. } => Message::InvalidAngle,
        SolveError::LegExceedsHypotenuse { .. } => Message::LegGreaterThanHypotenuse,
        SolveError::NonPositiveSide { .. } => Message::NonPositiveSide,
        SolveError::InvalidCombination => Message::InvalidCombination,
    }
}

/// Full text shown to the user. Count problems are shown bare, solver
/// failures get the error prefix.
pub fn localize(err: &SolveError, lang: Lang) -> String {
    let body = message_for(err).text(lang);
    if err.is_count_error() {
        body.to_string()
    } else {
        format!("{}{}", Message::ErrorPrefix.text(lang), body)
    }
}
