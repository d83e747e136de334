//! Configuration for schema construction.

use serde::{Deserialize, Serialize};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How string length is counted by length rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    /// Count bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
    /// Count UTF-16 code units, matching what browsers report.
    Utf16,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            Self::Bytes => input.len(),
            Self::Chars => input.chars().count(),
            Self::Utf16 => input.encode_utf16().count(),
        }
    }
}

// ============================================================================
// SCHEMA CONFIG
// ============================================================================

/// Settings applied to rules as they are attached to a schema builder.
///
/// # Examples
///
/// ```
/// use muster::config::{LengthMode, SchemaConfig};
///
/// let config: SchemaConfig = serde_json::from_str(r#"{"length_mode": "bytes"}"#).unwrap();
/// assert_eq!(config.length_mode, LengthMode::Bytes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// String length counting used by `must_have_length`.
    pub length_mode: LengthMode,
}

impl SchemaConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the string length mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_length_mode(mut self, length_mode: LengthMode) -> Self {
        self.length_mode = length_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_modes() {
        let s = "h\u{e9}llo \u{1f44b}";
        assert_eq!(LengthMode::Chars.measure(s), 7);
        assert_eq!(LengthMode::Bytes.measure(s), 11);
        assert_eq!(LengthMode::Utf16.measure(s), 8);
    }

    #[test]
    fn test_default_config_from_empty_object() {
        let config: SchemaConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SchemaConfig::default());
        assert_eq!(config.length_mode, LengthMode::Chars);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = SchemaConfig::new().with_length_mode(LengthMode::Utf16);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"length_mode":"utf16"}"#);
    }
}
