use std::num::ParseFloatError;

/// Why a string could not be read as a sloppy duration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty string")]
    Empty,

    /// The part before the unit suffix is not a number. Catches composites
    /// like `1m30s`, whose numeral part is `1m30`.
    #[error("parsing {numeral:?}: {source}")]
    Numeral {
        numeral: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("missing unit in duration {input:?}")]
    MissingUnit { input: String },

    #[error("invalid duration {input:?}")]
    Invalid { input: String },

    #[error("duration {input:?} is out of range")]
    Overflow { input: String },

    #[error("negative durations are not supported: {input:?}")]
    Negative { input: String },
}

/// A template string that cannot be compiled.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unclosed '{{' at byte {offset}")]
    UnclosedBrace { offset: usize },

    #[error("unmatched '}}' at byte {offset}")]
    UnexpectedClosingBrace { offset: usize },

    #[error("unknown template field {name:?}, expected value, shortUnit or longUnit")]
    UnknownField { name: String },
}
