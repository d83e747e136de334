//! Built-in rules
//!
//! One type per `must_*` terminal on [`KeyBuilder`](crate::schema::KeyBuilder).
//! Every type implements [`Rule`](crate::foundation::Rule) and fixes its
//! message, parameterised with the field name, at construction.
//!
//! | Terminal                   | Rule             |
//! |----------------------------|------------------|
//! | `must_match`               | [`Matches`]      |
//! | `must_be_an_email_address` | [`EmailAddress`] |
//! | `must_be_one_of`           | [`OneOf`]        |
//! | `must_equal`               | [`Equals`]       |
//! | `must_have_length`         | [`HasLength`]    |
//! | `must_be_a`                | [`IsA`]          |
//! | `must_be_a_date_string`    | [`DateString`]   |
//! | `must_be_greater_than`     | [`GreaterThan`]  |
//! | `must_be_less_than`        | [`LessThan`]     |
//! | `must_pass`                | [`Predicate`]    |
//! | `must_pass_muster`         | [`PassesSchema`] |

pub mod format;
pub mod kind;
pub mod length;
pub mod membership;
pub mod nested;
pub mod predicate;
pub mod range;

pub use format::{DateString, EmailAddress, Matches};
pub use kind::IsA;
pub use length::{Comparator, HasLength};
pub use membership::{Equals, OneOf};
pub use nested::PassesSchema;
pub use predicate::{Predicate, PredicateFn};
pub use range::{GreaterThan, LessThan};
