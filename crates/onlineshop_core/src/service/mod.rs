//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and mapper calls into use-case level APIs.
//! - Keep callers (CLI, future HTTP layer) decoupled from storage details.

pub mod employee_service;
