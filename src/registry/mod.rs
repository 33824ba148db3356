//! Staff registry and payroll reporting.
//!
//! `StaffRegistry` aggregates staff members behind the `StaffMember`
//! trait, tracks registrations through a shareable `StaffCounter`, and
//! renders the salary report. `PayrollSummary` computes aggregate
//! payroll indicators from a registry snapshot.

mod payroll;
mod roster;

pub use payroll::PayrollSummary;
pub use roster::{StaffCounter, StaffRegistry};
