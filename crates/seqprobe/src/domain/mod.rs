//! Core domain types shared across the application layer.

pub mod errors;
pub mod model;
