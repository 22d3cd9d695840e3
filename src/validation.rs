//! Request validation performed at the HTTP boundary.

use std::fmt;

use serde::Serialize;

use crate::models::department::CreateDepartment;

/// Maximum address length in characters.
pub const ADDRESS_MAX_LEN: usize = 200;

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

/// All constraints that failed for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub violations: Vec<Violation>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(Violation {
            field,
            message: message.into(),
        });
    }

    fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a department before it is created.
///
/// Every failed constraint is reported, not only the first.
pub fn validate_new_department(data: &CreateDepartment) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if data.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
        errors.push("name", "name is required");
    }

    if let Some(address) = &data.address {
        let len = address.chars().count();
        if len == 0 || len > ADDRESS_MAX_LEN {
            errors.push(
                "address",
                format!("length must be between 1 and {ADDRESS_MAX_LEN}"),
            );
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_field(errors: &ValidationErrors, field: &str) -> bool {
        errors.violations.iter().any(|v| v.field == field)
    }

    fn valid() -> CreateDepartment {
        CreateDepartment {
            name: Some("CS".to_string()),
            address: Some("Bldg A".to_string()),
            code: Some("CS01".to_string()),
        }
    }

    #[test]
    fn test_valid_department_passes() {
        assert!(validate_new_department(&valid()).is_ok());
    }

    #[test]
    fn test_address_and_code_optional() {
        let data = CreateDepartment {
            name: Some("CS".to_string()),
            address: None,
            code: None,
        };
        assert!(validate_new_department(&data).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut data = valid();
        data.name = Some("   ".to_string());
        let err = validate_new_department(&data).unwrap_err();
        assert!(has_field(&err, "name"));
        assert_eq!(err.violations.len(), 1);
    }

    #[test]
    fn test_missing_name_rejected() {
        let mut data = valid();
        data.name = None;
        let err = validate_new_department(&data).unwrap_err();
        assert!(has_field(&err, "name"));
    }

    #[test]
    fn test_address_length_bounds() {
        let mut data = valid();

        data.address = Some(String::new());
        assert!(has_field(&validate_new_department(&data).unwrap_err(), "address"));

        data.address = Some("a".repeat(ADDRESS_MAX_LEN + 1));
        assert!(has_field(&validate_new_department(&data).unwrap_err(), "address"));

        data.address = Some("a".repeat(ADDRESS_MAX_LEN));
        assert!(validate_new_department(&data).is_ok());

        // Counted in characters, not bytes.
        data.address = Some("é".repeat(ADDRESS_MAX_LEN));
        assert!(validate_new_department(&data).is_ok());
    }

    #[test]
    fn test_all_violations_reported() {
        let data = CreateDepartment {
            name: Some(String::new()),
            address: Some(String::new()),
            code: None,
        };
        let err = validate_new_department(&data).unwrap_err();
        assert!(has_field(&err, "name"));
        assert!(has_field(&err, "address"));
        assert_eq!(err.to_string(), "name: name is required; address: length must be between 1 and 200");
    }
}
