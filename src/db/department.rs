//! Department repository with CRUD operations.

use async_trait::async_trait;
use sea_orm::*;

use crate::entities::{departments, prelude::*};
use crate::models::department::CreateDepartment;

/// Record store for departments.
///
/// Exactly the operations the access service needs. Implementations are
/// expected to be synchronous with respect to a single call and provide no
/// cross-call atomicity.
#[async_trait]
pub trait DepartmentStore: Send + Sync {
    /// Insert a new record and return it with its generated id.
    async fn create(&self, data: CreateDepartment) -> Result<departments::Model, DbErr>;

    /// All records, in no guaranteed order.
    async fn find_all(&self) -> Result<Vec<departments::Model>, DbErr>;

    async fn find_by_id(&self, id: i64) -> Result<Option<departments::Model>, DbErr>;

    /// One record carrying `code`, if any.
    async fn find_by_code(&self, code: &str) -> Result<Option<departments::Model>, DbErr>;

    /// Delete by id. Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), DbErr>;

    /// Persist all mutable columns of an existing record.
    async fn save(&self, model: departments::Model) -> Result<departments::Model, DbErr>;
}

/// List all departments ordered by id.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<departments::Model>, DbErr> {
    Departments::find().order_by_asc(departments::Column::Id).all(db).await
}

/// Get department by ID.
pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<departments::Model>, DbErr> {
    Departments::find_by_id(id).one(db).await
}

/// Get department by code.
///
/// Codes are not unique; the lowest id wins when several rows match.
pub async fn get_by_code(db: &DatabaseConnection, code: &str) -> Result<Option<departments::Model>, DbErr> {
    Departments::find()
        .filter(departments::Column::Code.eq(code))
        .order_by_asc(departments::Column::Id)
        .one(db)
        .await
}

/// Create a new department.
pub async fn create(db: &DatabaseConnection, data: CreateDepartment) -> Result<departments::Model, DbErr> {
    let model = departments::ActiveModel {
        name: Set(data.name.unwrap_or_default()),
        address: Set(data.address),
        code: Set(data.code),
        ..Default::default()
    };
    model.insert(db).await
}

/// Write every mutable column of `model` back to its row.
pub async fn save(db: &DatabaseConnection, model: departments::Model) -> Result<departments::Model, DbErr> {
    let active = departments::ActiveModel {
        id: Unchanged(model.id),
        name: Set(model.name),
        address: Set(model.address),
        code: Set(model.code),
    };
    active.update(db).await
}

/// Delete a department by ID.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<u64, DbErr> {
    let result = Departments::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}

/// SeaORM implementation of [`DepartmentStore`].
#[derive(Clone)]
pub struct SeaOrmDepartmentStore {
    db: DatabaseConnection,
}

impl SeaOrmDepartmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DepartmentStore for SeaOrmDepartmentStore {
    async fn create(&self, data: CreateDepartment) -> Result<departments::Model, DbErr> {
        create(&self.db, data).await
    }

    async fn find_all(&self) -> Result<Vec<departments::Model>, DbErr> {
        list_all(&self.db).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<departments::Model>, DbErr> {
        get_by_id(&self.db, id).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<departments::Model>, DbErr> {
        get_by_code(&self.db, code).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DbErr> {
        let removed = delete(&self.db, id).await?;
        tracing::debug!(id, removed, "Department delete executed");
        Ok(())
    }

    async fn save(&self, model: departments::Model) -> Result<departments::Model, DbErr> {
        save(&self.db, model).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::memory_db;

    fn new_department(name: &str, code: Option<&str>) -> CreateDepartment {
        CreateDepartment {
            name: Some(name.to_string()),
            address: Some("Bldg A".to_string()),
            code: code.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let store = SeaOrmDepartmentStore::new(memory_db().await);

        let first = store.create(new_department("CS", Some("CS01"))).await.unwrap();
        let second = store.create(new_department("EE", None)).await.unwrap();

        assert!(first.id > 0);
        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "CS");
        assert_eq!(second.code, None);
    }

    #[tokio::test]
    async fn test_find_by_code_picks_lowest_id() {
        let store = SeaOrmDepartmentStore::new(memory_db().await);

        let first = store.create(new_department("CS", Some("DUP"))).await.unwrap();
        store.create(new_department("CS2", Some("DUP"))).await.unwrap();

        let found = store.find_by_code("DUP").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert!(store.find_by_code("NONE").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_columns() {
        let store = SeaOrmDepartmentStore::new(memory_db().await);
        let mut model = store.create(new_department("CS", Some("CS01"))).await.unwrap();

        model.name = "Computing".to_string();
        model.address = None;
        let saved = store.save(model.clone()).await.unwrap();
        assert_eq!(saved, model);

        let reloaded = store.find_by_id(model.id).await.unwrap().unwrap();
        assert_eq!(reloaded, model);
    }

    #[tokio::test]
    async fn test_delete_absent_id_is_ok() {
        let store = SeaOrmDepartmentStore::new(memory_db().await);
        store.delete_by_id(999).await.unwrap();

        let model = store.create(new_department("CS", None)).await.unwrap();
        store.delete_by_id(model.id).await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
