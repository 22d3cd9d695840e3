//! Database connection pool and operations.

pub mod connection;
pub mod department;

pub use connection::{connect, count_departments, ensure_schema, test_connection};
pub use department::{DepartmentStore, SeaOrmDepartmentStore};
