#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod server;
pub mod table;
pub mod ui;

// Re-export commonly used types outside of crate (for the proxy binary and tests)
pub use app::App;
pub use domain::AssetRecord;
pub use table::{SortColumn, SortDirection, TableState};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the proxy that holds the provider API key
    #[arg(long, default_value = config::DEFAULT_PROXY_URL)]
    pub proxy_url: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
