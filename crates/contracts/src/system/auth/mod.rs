//! Admin authentication DTOs and form rules

use crate::shared::metadata::{FieldKind, FieldMetadata, FieldUiMetadata, ValidationRules};
use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/admin/auth/login";
pub const REGISTER_PATH: &str = "/admin/auth/register";
pub const ME_PATH: &str = "/admin/auth/me";
pub const LOGOUT_PATH: &str = "/admin/auth/logout";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// `data` of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `data` of `GET /admin/auth/me`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl AdminInfo {
    /// Name shown in the top bar
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Admin"
        } else {
            &self.name
        }
    }
}

const EMAIL_RULES: ValidationRules = ValidationRules {
    required: true,
    pattern: Some(r"^\S+@\S+$"),
    custom_error: Some("Invalid email address"),
    ..ValidationRules::none()
};

const PASSWORD_RULES: ValidationRules = ValidationRules::required_min_length(6);

pub static LOGIN_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "email",
        FieldKind::Email,
        FieldUiMetadata::labeled("Email", "Enter your email"),
        EMAIL_RULES,
    ),
    FieldMetadata::new(
        "password",
        FieldKind::Text,
        FieldUiMetadata::labeled("Password", "Enter your password"),
        PASSWORD_RULES,
    ),
];

pub static REGISTER_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new(
        "name",
        FieldKind::Text,
        FieldUiMetadata::labeled("Name", "Enter your name"),
        ValidationRules::required_min_length(3),
    ),
    FieldMetadata::new(
        "email",
        FieldKind::Email,
        FieldUiMetadata::labeled("Email", "Enter your email"),
        EMAIL_RULES,
    ),
    FieldMetadata::new(
        "phone",
        FieldKind::Phone,
        FieldUiMetadata::labeled("Phone number", "Enter 10-digit phone number"),
        ValidationRules::required_pattern(r"^[0-9]{10}$", "Enter valid 10-digit number"),
    ),
    FieldMetadata::new(
        "password",
        FieldKind::Text,
        FieldUiMetadata::labeled("Password", "Create a password"),
        PASSWORD_RULES,
    ),
];

/// First failing rule per field, in field order
pub fn validate_fields(
    fields: &[FieldMetadata],
    value_of: impl Fn(&str) -> String,
) -> Vec<(&'static str, String)> {
    fields
        .iter()
        .filter_map(|f| {
            f.validation
                .validate_string(&value_of(f.name), f.ui.label)
                .err()
                .map(|e| (f.name, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn check(fields: &[FieldMetadata], values: &[(&str, &str)]) -> Vec<(&'static str, String)> {
        let map: HashMap<&str, &str> = values.iter().copied().collect();
        validate_fields(fields, |name| map.get(name).copied().unwrap_or("").to_string())
    }

    #[test]
    fn test_login_rules() {
        let errors = check(LOGIN_FIELDS, &[("email", "bad"), ("password", "123")]);
        assert_eq!(
            errors,
            vec![
                ("email", "Invalid email address".to_string()),
                ("password", "Minimum 6 characters".to_string()),
            ]
        );
        assert!(check(LOGIN_FIELDS, &[("email", "a@b"), ("password", "secret")]).is_empty());
    }

    #[test]
    fn test_register_rules() {
        let errors = check(
            REGISTER_FIELDS,
            &[("name", "Al"), ("email", "a@b.c"), ("phone", "12345"), ("password", "secret1")],
        );
        assert_eq!(
            errors,
            vec![
                ("name", "Minimum 3 characters".to_string()),
                ("phone", "Enter valid 10-digit number".to_string()),
            ]
        );
        let missing = check(REGISTER_FIELDS, &[]);
        assert_eq!(missing[2], ("phone", "Phone number is required".to_string()));
    }

    #[test]
    fn test_admin_display_name() {
        let admin: AdminInfo = serde_json::from_str(r#"{"id":1,"email":"a@b.c"}"#).unwrap();
        assert_eq!(admin.display_name(), "Admin");
        let named = AdminInfo {
            name: "Jo".to_string(),
            ..AdminInfo::default()
        };
        assert_eq!(named.display_name(), "Jo");
    }
}
