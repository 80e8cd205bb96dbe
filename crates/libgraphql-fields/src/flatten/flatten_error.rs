use crate::loc;
use std::num::ParseFloatError;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FlattenError {
    #[error("Fragment spreads form a cycle: {}", .cycle_path.join(" → "))]
    FragmentCycleDetected {
        cycle_path: Vec<String>,
    },

    #[error("Invalid float literal `{literal}`: {source}")]
    InvalidFloatLiteral {
        literal: String,
        source: ParseFloatError,
    },

    #[error("Invalid integer literal `{literal}`: {source}")]
    InvalidIntLiteral {
        literal: String,
        source: ParseIntError,
    },

    #[error("`@{directive_name}` at {location} is missing its `if` argument")]
    MissingDirectiveCondition {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Float literal `{literal}` is not a finite number")]
    NonFiniteFloatLiteral {
        literal: String,
    },

    #[error("Spread of undefined fragment `{fragment_name}` at {location}")]
    UndefinedFragment {
        fragment_name: String,
        location: loc::SourceLocation,
    },
}
