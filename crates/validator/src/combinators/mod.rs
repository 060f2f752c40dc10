//! Validator combinators
//!
//! Combinators wrap validators and return new validators; the wrapped
//! validator is never modified.
//!
//! - [`And`]: both must pass, first failure wins
//! - [`Optional`]: `None` passes
//! - [`WithMessage`]: replace the failure message
//! - [`Preprocess`]: transform the input first
//! - [`Refine`]: predicate closure plus message

pub mod and;
pub mod message;
pub mod optional;
pub mod preprocess;
pub mod refine;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
pub use optional::{Optional, optional};
pub use preprocess::{Preprocess, preprocess};
pub use refine::{Refine, refine};
