//! SeaORM entities.

pub mod departments;
pub mod prelude;
