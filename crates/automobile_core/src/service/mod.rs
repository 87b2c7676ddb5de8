//! Core use-case services.
//!
//! # Responsibility
//! - Own the five automobile operations for every transport.
//! - Keep REST/GraphQL layers decoupled from storage details.

pub mod automobile_service;
