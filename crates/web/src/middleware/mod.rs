//! HTTP middleware and request extractors.
//!
//! # Middleware order (outermost first)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Session layer (tower-sessions with a SQLite store)
//!
//! Handlers opt into authentication with the [`auth::RequireAuth`]
//! extractor rather than a router-wide guard; only the landing page
//! requires it.

pub mod auth;
pub mod session;
