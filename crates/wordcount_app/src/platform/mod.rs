mod app;
mod cli;
mod logging;
mod render;
mod request_file;

pub use app::run_app;
