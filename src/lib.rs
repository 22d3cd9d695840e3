pub mod api;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod logging;
pub mod merge;
pub mod models;
pub mod service;
pub mod validation;

#[cfg(test)]
mod testing;

pub use error::{AppError, Result};
