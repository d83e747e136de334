//! Length rule and the comparators it accepts.

use std::fmt;
use std::str::FromStr;

use crate::config::LengthMode;
use crate::foundation::{ConfigError, length_of};

// ============================================================================
// COMPARATOR
// ============================================================================

/// How a measured length is compared against the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Comparator {
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `==` or `=`
    #[default]
    Equal,
    /// `>=` or `=>`
    GreaterOrEqual,
    /// `<=` or `=<`
    LessOrEqual,
}

impl Comparator {
    /// Applies the comparator: `actual <op> expected`.
    #[must_use]
    pub const fn compare(self, actual: usize, expected: usize) -> bool {
        match self {
            Self::Greater => actual > expected,
            Self::Less => actual < expected,
            Self::Equal => actual == expected,
            Self::GreaterOrEqual => actual >= expected,
            Self::LessOrEqual => actual <= expected,
        }
    }

    /// Words used in messages, e.g. "greater than or equal to".
    #[must_use]
    pub const fn words(self) -> &'static str {
        match self {
            Self::Greater => "greater than",
            Self::Less => "less than",
            Self::Equal => "equal to",
            Self::GreaterOrEqual => "greater than or equal to",
            Self::LessOrEqual => "less than or equal to",
        }
    }

    /// Canonical symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "==",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Comparator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(Self::Greater),
            "<" => Ok(Self::Less),
            "==" | "=" => Ok(Self::Equal),
            ">=" | "=>" => Ok(Self::GreaterOrEqual),
            "<=" | "=<" => Ok(Self::LessOrEqual),
            other => Err(ConfigError::UnknownComparator(other.to_owned())),
        }
    }
}

// ============================================================================
// HAS LENGTH
// ============================================================================

crate::rule! {
    /// The value exposes a length that satisfies a comparator.
    #[derive(PartialEq, Eq)]
    pub HasLength { comparator: Comparator, length: usize, mode: LengthMode } as "must_have_length";
    check(self, value) {
        length_of(value, self.mode).is_some_and(|len| self.comparator.compare(len, self.length))
    }
}

impl HasLength {
    /// Creates the rule for `field`.
    #[must_use]
    pub fn new(field: &str, comparator: Comparator, length: usize, mode: LengthMode) -> Self {
        Self::with_message(
            format!(
                "Key '{field}' must have a length {} {length}.",
                comparator.words()
            ),
            comparator,
            length,
            mode,
        )
    }

    /// The comparator in use.
    #[must_use]
    pub fn comparator(&self) -> Comparator {
        self.comparator
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(">", Comparator::Greater)]
    #[case("<", Comparator::Less)]
    #[case("==", Comparator::Equal)]
    #[case("=", Comparator::Equal)]
    #[case(">=", Comparator::GreaterOrEqual)]
    #[case("=>", Comparator::GreaterOrEqual)]
    #[case("<=", Comparator::LessOrEqual)]
    #[case("=<", Comparator::LessOrEqual)]
    fn test_comparator_aliases(#[case] symbol: &str, #[case] expected: Comparator) {
        assert_eq!(symbol.parse::<Comparator>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_comparator() {
        let err = "!".parse::<Comparator>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownComparator(ref s) if s == "!"));
    }

    #[test]
    fn test_greater_than_on_arrays() {
        let rule = HasLength::new("somearr", Comparator::Greater, 3, LengthMode::Chars);
        assert!(rule.check(&json!([1, 2, 3, 4])).is_ok());
        assert!(rule.check(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_less_than_on_strings() {
        let rule = HasLength::new("somearr", Comparator::Less, 5, LengthMode::Chars);
        assert!(rule.check(&json!("1234")).is_ok());
    }

    #[test]
    fn test_no_length_fails() {
        let rule = HasLength::new("year", Comparator::Equal, 2, LengthMode::Chars);
        assert_eq!(
            rule.check(&json!(2010)).unwrap_err(),
            "Key 'year' must have a length equal to 2."
        );
    }

    #[test]
    fn test_message_words() {
        let rule = HasLength::new("somearr", Comparator::GreaterOrEqual, 4, LengthMode::Chars);
        assert_eq!(
            rule.check(&json!([])).unwrap_err(),
            "Key 'somearr' must have a length greater than or equal to 4."
        );
    }

    #[test]
    fn test_length_mode_applies_to_strings() {
        let chars = HasLength::new("s", Comparator::Equal, 1, LengthMode::Chars);
        let bytes = HasLength::new("s", Comparator::Equal, 1, LengthMode::Bytes);
        assert!(chars.check(&json!("\u{e9}")).is_ok());
        assert!(bytes.check(&json!("\u{e9}")).is_err());
    }
}
