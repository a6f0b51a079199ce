//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ledger::DEFAULT_PHONE_PATTERN;

// Singapore display format: "+65 dddd dddd"
static SINGAPORE_DISPLAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DEFAULT_PHONE_PATTERN).unwrap()
});

/// Compiled phone number format, matched against the whole string
#[derive(Debug, Clone)]
pub struct PhoneFormat {
    pattern: String,
    regex: Regex,
}

impl PhoneFormat {
    /// Compile a format from a regular expression
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: pattern.to_string(),
            regex: Regex::new(&format!("^(?:{})$", pattern))?,
        })
    }

    /// Check whether the input matches the format exactly, without trimming
    pub fn matches(&self, phone: &str) -> bool {
        self.regex.is_match(phone)
    }

    /// The source pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for PhoneFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PHONE_PATTERN.to_string(),
            regex: SINGAPORE_DISPLAY_REGEX.clone(),
        }
    }
}

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Mask a phone number for display (e.g., +65****5160)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("+65 8939 5160"), "+6589395160");
        assert_eq!(normalize_phone_number("(6589) 395-160"), "6589395160");
    }

    #[test]
    fn test_default_format() {
        let format = PhoneFormat::default();
        assert!(format.matches("+65 8939 5160"));
        assert!(!format.matches("+6589395160"));
        assert!(!format.matches("+65 8939 516"));
        assert!(!format.matches(" +65 8939 5160"));
        assert!(!format.matches("+65 8939 5160 "));
        assert!(!format.matches("+66 8939 5160"));
    }

    #[test]
    fn test_custom_format_is_anchored() {
        // Unanchored patterns still have to cover the whole input
        let format = PhoneFormat::new(r"\d{4}").unwrap();
        assert!(format.matches("1234"));
        assert!(!format.matches("12345"));
        assert!(PhoneFormat::new("(").is_err());
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+65 8939 5160"), "+65****5160");
        assert_eq!(mask_phone_number("12345"), "****");
    }
}
