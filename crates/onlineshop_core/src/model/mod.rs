//! Persistence-side domain model for the shop back office.
//!
//! # Responsibility
//! - Define the entities owned by repositories (`Employee`, `Department`).
//! - Keep transfer-object concerns out of entity shapes.
//!
//! # Invariants
//! - Identifiers are assigned by the persistence layer, never by callers.
//! - An employee always references exactly one department.

pub mod department;
pub mod employee;
