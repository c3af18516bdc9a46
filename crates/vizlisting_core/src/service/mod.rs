//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and search calls into listing-page level APIs.
//! - Keep UI layers decoupled from storage details.

pub mod listing_service;
