//! Application layer (use-cases, policies).
//!
//! This module holds the catalog operations over the in-memory library
//! without depending on the CLI or on storage.

pub mod catalog;
