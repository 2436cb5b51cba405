//! Application layer orchestrating domain logic and infrastructure.

pub mod report;
pub mod search;
pub mod sort;
pub mod validate;
