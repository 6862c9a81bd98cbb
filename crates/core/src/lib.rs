//! Shoplite Core - Shared types library.
//!
//! This crate provides common types used across all Shoplite components:
//! - `web` - Server-rendered store (catalog CRUD, accounts)
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
