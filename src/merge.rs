//! Field-wise merge of a department patch onto a stored record.

use crate::entities::departments;
use crate::models::department::UpdateDepartment;

/// Apply `patch` to `existing` and return the result.
///
/// Each of `name`, `address` and `code` is overwritten only when the patch
/// carries a non-empty value. `None` and `""` both mean "no change", so an
/// update can never clear a field. The id always comes from `existing`.
pub fn merge(mut existing: departments::Model, patch: &UpdateDepartment) -> departments::Model {
    if let Some(name) = non_empty(&patch.name) {
        existing.name = name.to_owned();
    }
    if let Some(code) = non_empty(&patch.code) {
        existing.code = Some(code.to_owned());
    }
    if let Some(address) = non_empty(&patch.address) {
        existing.address = Some(address.to_owned());
    }
    existing
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> departments::Model {
        departments::Model {
            id: 1,
            name: "CS".to_string(),
            address: Some("Bldg A".to_string()),
            code: Some("CS01".to_string()),
        }
    }

    #[test]
    fn test_empty_patch_leaves_record_unchanged() {
        assert_eq!(merge(stored(), &UpdateDepartment::default()), stored());

        let blanks = UpdateDepartment {
            id: None,
            name: Some(String::new()),
            address: Some(String::new()),
            code: Some(String::new()),
        };
        assert_eq!(merge(stored(), &blanks), stored());
    }

    #[test]
    fn test_each_field_overwritten_independently() {
        let patch = UpdateDepartment {
            name: Some("Math".to_string()),
            ..Default::default()
        };
        let merged = merge(stored(), &patch);
        assert_eq!(merged.name, "Math");
        assert_eq!(merged.address.as_deref(), Some("Bldg A"));
        assert_eq!(merged.code.as_deref(), Some("CS01"));

        let patch = UpdateDepartment {
            code: Some("MA01".to_string()),
            ..Default::default()
        };
        let merged = merge(stored(), &patch);
        assert_eq!(merged.name, "CS");
        assert_eq!(merged.code.as_deref(), Some("MA01"));
    }

    #[test]
    fn test_mixed_patch() {
        let patch = UpdateDepartment {
            id: None,
            name: Some(String::new()),
            address: Some("Bldg B".to_string()),
            code: None,
        };
        let expected = departments::Model {
            id: 1,
            name: "CS".to_string(),
            address: Some("Bldg B".to_string()),
            code: Some("CS01".to_string()),
        };
        assert_eq!(merge(stored(), &patch), expected);
    }

    #[test]
    fn test_patch_id_is_ignored() {
        let patch = UpdateDepartment {
            id: Some(42),
            name: Some("Physics".to_string()),
            ..Default::default()
        };
        assert_eq!(merge(stored(), &patch).id, 1);
    }

    #[test]
    fn test_fills_previously_unset_fields() {
        let existing = departments::Model {
            id: 7,
            name: "HR".to_string(),
            address: None,
            code: None,
        };
        let patch = UpdateDepartment {
            address: Some("Annex".to_string()),
            code: Some("HR01".to_string()),
            ..Default::default()
        };
        let merged = merge(existing, &patch);
        assert_eq!(merged.address.as_deref(), Some("Annex"));
        assert_eq!(merged.code.as_deref(), Some("HR01"));
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let patch = UpdateDepartment {
            name: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(merge(stored(), &patch).name, " ");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let patch = UpdateDepartment {
            id: None,
            name: Some("EE".to_string()),
            address: Some("Bldg C".to_string()),
            code: Some("EE01".to_string()),
        };
        let once = merge(stored(), &patch);
        let twice = merge(once.clone(), &patch);
        assert_eq!(once, twice);
    }
}
