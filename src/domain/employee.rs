//! Employee record and validated name

use crate::error::{Result, StaffrollError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Longest name kept on a record; longer input is truncated
pub const DEFAULT_NAME_MAX_LEN: usize = 24;

/// Letters, spaces and hyphens, at least one character
fn name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z -]+$").unwrap())
}

/// Check whether a raw string is an acceptable employee name
pub fn is_valid_name(raw: &str) -> bool {
    name_regex().is_match(raw)
}

/// Employee name that has passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeName(String);

impl EmployeeName {
    /// Validate `raw` and keep at most `max_len` characters of it
    pub fn parse(raw: &str, max_len: usize) -> Result<Self> {
        if !is_valid_name(raw) {
            return Err(StaffrollError::InvalidName(raw.to_string()));
        }

        Ok(EmployeeName(raw.chars().take(max_len).collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single employee record held by the store
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Insertion ordinal, assigned once when the record is created
    pub seq: u32,
    pub id: i64,
    pub name: EmployeeName,
    pub salary: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("Anne-Marie"));
        assert!(is_valid_name("Al Pacino"));
        assert!(is_valid_name("Bob"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("John3"));
        assert!(!is_valid_name("John_Doe"));
        assert!(!is_valid_name("O'Brien"));
        assert!(!is_valid_name("José"));
    }

    #[test]
    fn test_parse_rejects_invalid() {
        match EmployeeName::parse("John_Doe", DEFAULT_NAME_MAX_LEN) {
            Err(StaffrollError::InvalidName(name)) => assert_eq!(name, "John_Doe"),
            other => panic!("Expected InvalidName, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_truncates_long_names() {
        let name = EmployeeName::parse("Maximilian Alexander-Wolfgang", DEFAULT_NAME_MAX_LEN)
            .unwrap();
        assert_eq!(name.as_str(), "Maximilian Alexander-Wol");
        assert_eq!(name.as_str().len(), DEFAULT_NAME_MAX_LEN);
    }

    #[test]
    fn test_parse_keeps_short_names() {
        let name = EmployeeName::parse("Al Pacino", DEFAULT_NAME_MAX_LEN).unwrap();
        assert_eq!(name.to_string(), "Al Pacino");
    }
}
