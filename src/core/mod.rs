//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the shared Honeybadger session,
//! server lifecycle management, and transport layer abstractions.

pub mod config;
pub mod error;
pub mod server;
pub mod session;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use session::Session;
pub use transport::{TransportConfig, TransportService};
