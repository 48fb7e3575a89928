//! tzmap API library.
//!
//! This module exposes the internal components for testing and benchmarking.

pub mod config;
pub mod export;
pub mod handlers;
pub mod routes;
pub mod state;
