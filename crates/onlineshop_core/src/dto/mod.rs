//! Transfer objects used at the service boundary.
//!
//! These shapes are ephemeral: built per call and never stored.

pub mod employee;
