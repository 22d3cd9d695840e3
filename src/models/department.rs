//! Department DTOs for create and update operations.

use serde::{Deserialize, Serialize};

/// DTO for creating a department.
///
/// `name` is optional on the wire so that validation, not deserialization,
/// reports it as missing or null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDepartment {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// DTO for updating a department (a patch).
///
/// A field that is `None` or an empty string leaves the stored value as is.
/// `id` is accepted on the wire but never applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateDepartment {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub code: Option<String>,
}
