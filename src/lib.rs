//! Compose regular expressions from readable, chainable vocabulary.
//!
//! ```
//! use readable_regex_rs::Fragment;
//!
//! let email = Fragment::new().words().then("@").words().then(".").words();
//! assert_eq!(email.pattern(), r"\w+@\w+\.\w+");
//! assert!(email.test("user@example.com").unwrap());
//! ```
//!
//! Fragments are immutable; every call returns a new fragment, so a shared
//! base can be extended in several directions without interference. The
//! pattern is compiled by the [`regex`] crate on first use and cached on the
//! fragment.

pub mod engine;
pub mod errors;
pub mod flags;
pub mod fragment;
pub mod types;
pub mod vocabulary;

pub use engine::{CompileOptions, CompileOptionsBuilder, CompileOptionsError, EngineError};
pub use errors::{ReadableRegexError, ReadableRegexResult};
pub use flags::Flags;
pub use fragment::{
    AnchorKind, ClassKind, Fragment, FragmentError, FragmentResult, Quantifier, Repeat, Term,
};
pub use vocabulary::Exclude;

pub use regex::{Captures, Match, Regex};
