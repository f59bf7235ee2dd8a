use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("regex engine rejected generated pattern '{pattern}': {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
