//! HTTP middleware for request processing.
//!
//! Provides the request tracing layer.

pub mod tracing;
