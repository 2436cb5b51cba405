pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;
pub mod ui;

pub fn init() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
}
