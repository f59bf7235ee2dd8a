use crate::engine::{CompileOptionsError, EngineError};
use crate::fragment::FragmentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadableRegexError {
    #[error(transparent)]
    Fragment(#[from] FragmentError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Options(#[from] CompileOptionsError),
}

pub type ReadableRegexResult<T> = Result<T, ReadableRegexError>;
