//! Foundational data structures, error types, and the canonical book set.

pub mod book;
pub mod error;
pub mod models;
