//! Department access service.
//!
//! Wraps the record store with the lookup, merge and not-found policy.
//! Not-found handling is deliberately uneven across operations:
//! - `get_by_id` reports absence as [`DepartmentLookup::NotFound`].
//! - `get_by_code` returns `None` with no extra wrapping.
//! - `update` fails with [`AppError::MissingRecord`], which the HTTP layer
//!   treats as a server error.
//! - `delete_by_id` never checks for existence.

use std::sync::Arc;

use tracing::{debug, error};

use crate::db::DepartmentStore;
use crate::entities::departments;
use crate::error::{AppError, Result};
use crate::merge::merge;
use crate::models::department::{CreateDepartment, UpdateDepartment};

/// Outcome of a lookup by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentLookup {
    Found(departments::Model),
    NotFound(i64),
}

impl DepartmentLookup {
    /// Message shown to callers when no record matched.
    pub fn not_found_message(id: i64) -> String {
        format!("Department not found with id:{id}")
    }
}

/// Department service over a pluggable record store.
#[derive(Clone)]
pub struct DepartmentService {
    store: Arc<dyn DepartmentStore>,
}

impl DepartmentService {
    /// Create a new department service.
    pub fn new(store: Arc<dyn DepartmentStore>) -> Self {
        Self { store }
    }

    /// Store a new department. Input is assumed to be validated.
    pub async fn create(&self, data: CreateDepartment) -> Result<departments::Model> {
        let created = self.store.create(data).await?;
        debug!(id = created.id, "Department created");
        Ok(created)
    }

    pub async fn list_all(&self) -> Result<Vec<departments::Model>> {
        Ok(self.store.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<DepartmentLookup> {
        let lookup = match self.store.find_by_id(id).await? {
            Some(model) => DepartmentLookup::Found(model),
            None => DepartmentLookup::NotFound(id),
        };
        Ok(lookup)
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<departments::Model>> {
        Ok(self.store.find_by_code(code).await?)
    }

    /// Merge `patch` into the stored record and persist it.
    ///
    /// The read and the write are separate store calls, so a concurrent
    /// update of the same id between them is overwritten.
    pub async fn update(&self, id: i64, patch: UpdateDepartment) -> Result<departments::Model> {
        let Some(existing) = self.store.find_by_id(id).await? else {
            error!(id, "Update requested for a department that does not exist");
            return Err(AppError::MissingRecord(id));
        };

        let merged = merge(existing, &patch);
        Ok(self.store.save(merged).await?)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.store.delete_by_id(id).await?;
        Ok(())
    }
}
