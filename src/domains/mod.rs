//! Domain modules containing business logic.
//!
//! Domains are organized by bounded context. This server exposes a single
//! context: read-only query tools against the Honeybadger API.

pub mod tools;
