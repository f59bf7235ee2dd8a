mod class;
mod error;
mod escape;
mod model;
mod quantifier;
mod term;

pub use class::{ClassKind, Repeat};
pub use error::{FragmentError, FragmentResult};
pub use escape::escape;
pub use model::Fragment;
pub use quantifier::Quantifier;
pub use term::{AnchorKind, Term};
