//! Check severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The severity level attached to a check entry.
///
/// Levels describe the impact of a failing check and are ordered by
/// severity: High > Medium > Low. In configuration they are written in upper
/// case (`HIGH`, `MEDIUM`, `LOW`).
///
/// # Examples
///
/// ```rust
/// use term_yaml::core::CheckLevel;
///
/// let level: CheckLevel = "HIGH".parse().unwrap();
/// assert_eq!(level, CheckLevel::High);
/// assert!(CheckLevel::High > CheckLevel::Medium);
/// assert!("high".parse::<CheckLevel>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckLevel {
    /// Minor issues
    Low = 0,
    /// Issues that should be reviewed
    Medium = 1,
    /// Critical issues
    High = 2,
}

impl CheckLevel {
    /// Every level, in the order they are listed in error messages.
    pub const ALL: [CheckLevel; 3] = [CheckLevel::High, CheckLevel::Medium, CheckLevel::Low];

    /// Returns the configuration spelling of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckLevel::High => "HIGH",
            CheckLevel::Medium => "MEDIUM",
            CheckLevel::Low => "LOW",
        }
    }

    /// Returns the allowed spellings joined for display, e.g. `"HIGH, MEDIUM, LOW"`.
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(CheckLevel::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when text is not one of `HIGH`, `MEDIUM` or `LOW`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(pub String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Check level must be one of {}, got '{}'",
            CheckLevel::allowed_values(),
            self.0
        )
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for CheckLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(CheckLevel::High > CheckLevel::Medium);
        assert!(CheckLevel::Medium > CheckLevel::Low);
    }

    #[test]
    fn test_level_parse_is_case_sensitive() {
        assert_eq!("MEDIUM".parse::<CheckLevel>(), Ok(CheckLevel::Medium));
        assert_eq!("LOW".parse::<CheckLevel>(), Ok(CheckLevel::Low));
        assert!("Medium".parse::<CheckLevel>().is_err());
        assert!("CRITICAL".parse::<CheckLevel>().is_err());
    }

    #[test]
    fn test_allowed_values() {
        assert_eq!(CheckLevel::allowed_values(), "HIGH, MEDIUM, LOW");
    }

    #[test]
    fn test_level_serde() {
        let json = serde_json::to_string(&CheckLevel::High).unwrap();
        assert_eq!(json, "\"HIGH\"");

        let level: CheckLevel = serde_json::from_str("\"LOW\"").unwrap();
        assert_eq!(level, CheckLevel::Low);
    }
}
