//! # tutordesk-api - Backend Collaborators
//!
//! The session list consumes a flat list of session records and an "update
//! status" capability. This crate defines that seam and its implementations.
//!
//! Depends on [`tutordesk_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`SessionRepository`] - fetch sessions, update one status, fetch upcoming tests
//! - [`HttpSessionRepository`] - REST backend client (reqwest)
//! - [`InMemorySessionRepository`] - shared in-memory store for `--demo` and tests

pub mod demo;
pub mod http;
pub mod memory;
pub mod repository;

pub use http::HttpSessionRepository;
pub use memory::InMemorySessionRepository;
pub use repository::{LocalSessionRepository, SessionRepository};
