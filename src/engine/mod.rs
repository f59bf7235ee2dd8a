mod cache;
mod error;
mod ops;
mod options;

pub use cache::CompiledCache;
pub use error::{EngineError, EngineResult};
pub use options::{
    CompileOptions, CompileOptionsBuilder, CompileOptionsError, DEFAULT_DFA_SIZE_LIMIT,
    DEFAULT_NEST_LIMIT, DEFAULT_SIZE_LIMIT,
};
