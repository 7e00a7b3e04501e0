//! CLI module
//!
//! Command-line interface over the folder engine.
//!
//! # Commands
//!
//! - `all` - List every folder of an organization
//! - `page` - Fetch a single page
//! - `walk` - Follow the cursor chain to the end
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, ServerConfig};
