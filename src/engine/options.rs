use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);
pub const DEFAULT_DFA_SIZE_LIMIT: usize = 2 * (1 << 20);
pub const DEFAULT_NEST_LIMIT: u32 = 250;

/// Settings handed to the regex engine when a fragment is compiled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompileOptions {
    pub crlf: bool,
    pub size_limit: usize,
    pub dfa_size_limit: usize,
    pub nest_limit: u32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            crlf: false,
            size_limit: DEFAULT_SIZE_LIMIT,
            dfa_size_limit: DEFAULT_DFA_SIZE_LIMIT,
            nest_limit: DEFAULT_NEST_LIMIT,
        }
    }
}

impl CompileOptions {
    pub fn builder() -> CompileOptionsBuilder {
        CompileOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), CompileOptionsError> {
        if self.size_limit == 0 {
            return Err(CompileOptionsError::SizeLimitInvalid {
                provided: self.size_limit,
            });
        }
        if self.dfa_size_limit == 0 {
            return Err(CompileOptionsError::DfaSizeLimitInvalid {
                provided: self.dfa_size_limit,
            });
        }
        if self.nest_limit == 0 {
            return Err(CompileOptionsError::NestLimitInvalid {
                provided: self.nest_limit,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct CompileOptionsBuilder {
    options: CompileOptions,
}

impl CompileOptionsBuilder {
    pub fn crlf(mut self, value: bool) -> Self {
        self.options.crlf = value;
        self
    }

    pub fn size_limit(mut self, value: usize) -> Self {
        self.options.size_limit = value;
        self
    }

    pub fn dfa_size_limit(mut self, value: usize) -> Self {
        self.options.dfa_size_limit = value;
        self
    }

    pub fn nest_limit(mut self, value: u32) -> Self {
        self.options.nest_limit = value;
        self
    }

    pub fn build(self) -> Result<CompileOptions, CompileOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileOptionsError {
    #[error("size_limit must be at least 1 byte (got {provided})")]
    SizeLimitInvalid { provided: usize },
    #[error("dfa_size_limit must be at least 1 byte (got {provided})")]
    DfaSizeLimitInvalid { provided: usize },
    #[error("nest_limit must be at least 1 (got {provided})")]
    NestLimitInvalid { provided: u32 },
}
