//! REST handlers for departments.
//!
//! Handlers are thin: bind input, validate new records, call the service.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::info;

use super::AppState;
use crate::entities::departments;
use crate::error::Result;
use crate::models::department::{CreateDepartment, UpdateDepartment};
use crate::service::DepartmentLookup;
use crate::validation::validate_new_department;

/// Confirmation body returned by the delete endpoint.
pub const DELETED_MESSAGE: &str = "Department deleted successfully";

/// GET / - Greeting.
pub async fn hello(State(state): State<AppState>) -> String {
    format!("Hello {}!", state.greeting)
}

/// POST /api/department/saveDepartmnt
pub async fn save_department(
    State(state): State<AppState>,
    Json(dept): Json<CreateDepartment>,
) -> Result<Json<departments::Model>> {
    info!("Handling save_department");
    validate_new_department(&dept)?;
    let created = state.service.create(dept).await?;
    Ok(Json(created))
}

/// GET /api/department/getDepts
pub async fn get_all_departments(State(state): State<AppState>) -> Result<Json<Vec<departments::Model>>> {
    info!("Handling get_all_departments");
    Ok(Json(state.service.list_all().await?))
}

/// GET /api/department/getDept/{id} - 404 with a text message when absent.
pub async fn get_department_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    info!(id, "Handling get_department_by_id");
    let response = match state.service.get_by_id(id).await? {
        DepartmentLookup::Found(dept) => Json(dept).into_response(),
        DepartmentLookup::NotFound(id) => {
            (StatusCode::NOT_FOUND, DepartmentLookup::not_found_message(id)).into_response()
        }
    };
    Ok(response)
}

/// GET /api/department/getDeptByCode/{code} - `null` when nothing matches.
pub async fn get_department_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Option<departments::Model>>> {
    info!(%code, "Handling get_department_by_code");
    Ok(Json(state.service.get_by_code(&code).await?))
}

/// DELETE /api/department/delete/{id}
pub async fn delete_department_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> Result<&'static str> {
    info!(id, "Handling delete_department_by_id");
    state.service.delete_by_id(id).await?;
    Ok(DELETED_MESSAGE)
}

/// PUT /api/department/update/{id}
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<UpdateDepartment>,
) -> Result<Json<departments::Model>> {
    info!(id, "Handling update_department");
    Ok(Json(state.service.update(id, patch).await?))
}
