pub mod app;
pub mod cli;
pub mod config;
pub mod console;
pub mod handlers;
pub mod theme;

pub use app::*;
pub use cli::*;
pub use config::*;
pub use console::*;
pub use theme::*;
