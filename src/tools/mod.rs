//! Self-contained utility tool implementations
//!
//! Each submodule is a pure function plus its error type; the MCP layer in
//! [`crate::server`] wraps the results into protocol responses.

pub mod calc;
pub mod convert;
pub mod datetime;
