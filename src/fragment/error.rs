use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FragmentError {
    #[error("'{operation}' has no preceding term to modify")]
    NoTargetTerm { operation: &'static str },
    #[error("quantifier range {{{min},{max}}} is invalid; minimum must not exceed maximum")]
    InvalidRange { min: u32, max: u32 },
    #[error("any_of requires at least one alternative")]
    EmptyAlternatives,
    #[error("'{operation}' can only narrow a character class, found {found}")]
    NotAClass {
        operation: &'static str,
        found: &'static str,
    },
}

pub type FragmentResult<T> = Result<T, FragmentError>;
