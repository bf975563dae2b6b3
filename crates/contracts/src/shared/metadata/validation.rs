//! Validation rules for metadata fields

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Mutex;

/// Compiled field patterns. `None` marks a pattern that does not compile.
static PATTERNS: Lazy<Mutex<HashMap<&'static str, Option<Regex>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Whether `value` matches `pattern`; `None` when the pattern is invalid
fn pattern_matches(pattern: &'static str, value: &str) -> Option<bool> {
    let mut cache = PATTERNS.lock().unwrap_or_else(|e| e.into_inner());
    cache
        .entry(pattern)
        .or_insert_with(|| Regex::new(pattern).ok())
        .as_ref()
        .map(|re| re.is_match(value))
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static str>,
    /// Message shown when `pattern` does not match
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            pattern: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Required field whose value must match `pattern`
    pub const fn required_pattern(pattern: &'static str, error: &'static str) -> Self {
        Self {
            required: true,
            pattern: Some(pattern),
            custom_error: Some(error),
            ..Self::none()
        }
    }

    /// Required field with a minimum length in characters
    pub const fn required_min_length(min_length: usize) -> Self {
        Self {
            required: true,
            min_length: Some(min_length),
            ..Self::none()
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    /// Empty optional values skip the length and pattern checks.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        }

        let length = value.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!("Minimum {} characters", min));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!("Maximum {} characters", max));
            }
        }

        if let Some(pattern) = self.pattern {
            // Invalid pattern silently passes
            if pattern_matches(pattern, value) == Some(false) {
                return Err(self
                    .custom_error
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} is invalid", field_label)));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("  ", "Title"),
            Err("Title is required".to_string())
        );
        assert!(rules.validate_string("Hello", "Title").is_ok());
        assert!(ValidationRules::none().validate_string("", "Title").is_ok());
    }

    #[test]
    fn test_min_length() {
        let rules = ValidationRules::required_min_length(6);
        assert_eq!(
            rules.validate_string("12345", "Password"),
            Err("Minimum 6 characters".to_string())
        );
        assert!(rules.validate_string("123456", "Password").is_ok());
    }

    #[test]
    fn test_pattern_uses_custom_error() {
        let rules = ValidationRules::required_pattern(r"^[0-9]{10}$", "Enter valid 10-digit number");
        assert_eq!(
            rules.validate_string("12345", "Phone"),
            Err("Enter valid 10-digit number".to_string())
        );
        assert!(rules.validate_string("0123456789", "Phone").is_ok());
    }

    #[test]
    fn test_invalid_pattern_passes() {
        let rules = ValidationRules {
            pattern: Some("(unclosed"),
            ..ValidationRules::none()
        };
        assert!(rules.validate_string("anything", "Field").is_ok());
    }

    #[test]
    fn test_pattern_compiled_once() {
        let pattern = r"^\S+@\S+\.cache$";
        let rules = ValidationRules::required_pattern(pattern, "Enter a valid email");
        assert!(rules.validate_string("a@b.cache", "Email").is_ok());
        assert!(rules.validate_string("nope", "Email").is_err());
        let cache = PATTERNS.lock().unwrap();
        assert!(matches!(cache.get(pattern), Some(Some(_))));
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules {
            min: Some(0.0),
            ..ValidationRules::none()
        };
        assert!(rules.validate_number(10.0, "Plan Price").is_ok());
        assert_eq!(
            rules.validate_number(-1.0, "Plan Price"),
            Err("Plan Price must be at least 0".to_string())
        );
    }
}
