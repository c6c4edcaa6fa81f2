//! Common test utilities for API integration tests
//!
//! Shared GraphQL documents, a memory-backed test harness, and helpers for
//! the PostgreSQL-backed tests.

#![allow(unused_imports)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
