//! Data models for departments.

pub mod department;

pub use department::{CreateDepartment, UpdateDepartment};
