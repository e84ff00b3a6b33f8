mod app;
mod effects;
mod input;
pub mod logging;
pub mod ui;

pub use app::run_app;
