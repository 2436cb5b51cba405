//! Terminal front end: line input sources and the run loop.

pub mod app;
pub mod prompt;
