//! Shared types and models for the Assistant Agricole Madagascar
//!
//! This crate contains the domain types shared between the backend services
//! and the integration tests.

pub mod models;

pub use models::*;
