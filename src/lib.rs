// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod settings;

// public uses
pub use app::App;
pub use search::{Options, Search};
pub use settings::Settings;
