//! Shared domain primitives (value objects and errors).

mod errors;
mod option_index;

pub use errors::ValidationError;
pub use option_index::OptionIndex;
