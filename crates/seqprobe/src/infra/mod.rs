//! Infrastructure adapters for configuration and the environment.

pub mod config;
