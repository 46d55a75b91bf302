//! Honeybadger MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! read-only query tools against the Honeybadger error-tracking API.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the shared Honeybadger session, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use honeybadger_mcp_server::{core::Config, core::McpServer, core::Session};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let session = Arc::new(Session::from_config(&config)?);
//!     let server = McpServer::new(config, session);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result, Session};
