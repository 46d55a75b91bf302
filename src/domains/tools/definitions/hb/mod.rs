//! Honeybadger tools module.
//!
//! Read-only query tools against the Honeybadger error-tracking API:
//! - `list_faults`: list faults for the configured project with optional filters
//! - `get_fault_details`: fetch notice records for a specific fault
//!
//! Both tools route through the shared request builder in [`common`], which
//! owns URL composition, filter serialization, and error normalization.

pub mod common;
pub mod get_fault_details;
pub mod list_faults;

pub use get_fault_details::{GetFaultDetailsParams, GetFaultDetailsTool};
pub use list_faults::{FaultOrder, ListFaultsParams, ListFaultsTool};
