//! Shoplite web server.
//!
//! A server-rendered CRUD application: a public product catalog with
//! create, update and delete pages, plus session-backed user accounts
//! guarding a landing page.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
