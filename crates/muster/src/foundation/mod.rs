//! Core validation types and traits
//!
//! - **Traits**: [`Rule`], the capability every `must_*` rule implements
//! - **Binding**: [`KeyValidator`], one rule bound to one field
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ConfigError`]
//! - **Values**: [`ValueKind`] and the comparison helpers rules share

pub mod error;
pub mod traits;
pub mod value;

pub use error::{ConfigError, ErrorKind, ValidationError, ValidationErrors};
pub use traits::{KeyValidator, Rule};
pub use value::{
    ValueKind, display_string, field_names, length_of, loose_cmp, loose_eq, strict_eq,
};

/// A fail-fast result: `Ok(())` or the first error.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A bulk result carrying every error found.
pub type ValidationResultMulti<T> = Result<T, ValidationErrors>;
