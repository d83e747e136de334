//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: a rule struct with a fixed failure message and its
//!   [`Rule`](crate::foundation::Rule) impl

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a rule type whose failure message is fixed at construction.
///
/// The generated struct always carries a private `message: String` in
/// addition to the declared fields, derives `Debug` and `Clone`, and gets a
/// `with_message(message, fields...)` constructor. The `check` block returns
/// `true` when the value passes.
///
/// # Examples
///
/// ```
/// use muster::prelude::*;
/// use serde_json::json;
///
/// muster::rule! {
///     /// The value must be the given colour.
///     pub Colour { colour: String } as "must_be_the_colour";
///     check(self, value) { value.as_str() == Some(self.colour.as_str()) }
/// }
///
/// let schema = Schema::builder()
///     .key("colour")
///     .must_satisfy(Colour::with_message(
///         "Key 'colour' must be the colour blue.",
///         "blue".to_owned(),
///     ))
///     .build();
///
/// let error = schema.error(&json!({"colour": "yellow"})).unwrap();
/// assert_eq!(error.message, "Key 'colour' must be the colour blue.");
/// ```
#[macro_export]
macro_rules! rule {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),* $(,)? } as $rule_name:literal;
        check($self_:ident, $value:ident) $check:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            message: ::std::string::String,
            $($field: $fty,)*
        }

        impl $name {
            /// Creates the rule with its failure message.
            #[must_use]
            $vis fn with_message(
                message: impl ::std::convert::Into<::std::string::String>
                $(, $field: $fty)*
            ) -> Self {
                Self {
                    message: message.into(),
                    $($field,)*
                }
            }
        }

        impl $crate::foundation::Rule for $name {
            fn name(&self) -> &str {
                $rule_name
            }

            #[allow(unused_variables)]
            fn check(
                &$self_,
                $value: &$crate::Value,
            ) -> ::std::result::Result<(), ::std::borrow::Cow<'_, str>> {
                if $check {
                    Ok(())
                } else {
                    Err(::std::borrow::Cow::Borrowed($self_.message.as_str()))
                }
            }
        }
    };
}
