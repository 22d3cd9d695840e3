//! HTTP boundary: routes, handlers and error mapping.

pub mod error;
pub mod handlers;


use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower_http::trace::TraceLayer;

use crate::service::DepartmentService;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: DepartmentService,
    /// Name used by the greeting endpoint.
    pub greeting: Arc<str>,
}

impl AppState {
    pub fn new(service: DepartmentService, greeting: impl Into<Arc<str>>) -> Self {
        Self {
            service,
            greeting: greeting.into(),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let departments = Router::new()
        .route("/saveDepartmnt", post(handlers::save_department))
        .route("/getDepts", get(handlers::get_all_departments))
        .route("/getDept/{id}", get(handlers::get_department_by_id))
        .route("/getDeptByCode/{code}", get(handlers::get_department_by_code))
        .route("/delete/{id}", delete(handlers::delete_department_by_id))
        .route("/update/{id}", put(handlers::update_department));

    Router::new()
        .route("/", get(handlers::hello))
        .nest("/api/department", departments)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
