//! Hospital staff roster for the U-Engine ecosystem.
//!
//! Provides typed staff entities (doctors, nurses, administrative
//! staff), polymorphic salary rules behind the `StaffMember` trait,
//! duty-change notifications, and payroll reporting.
//!
//! # Modules
//!
//! - **`models`**: `StaffProfile`, `Doctor`, `Nurse`, `AdminStaff`,
//!   `DutyStatus`, and the `StaffMember` trait
//! - **`registry`**: `StaffRegistry` (registration, counting, salary
//!   report) and `PayrollSummary`
//! - **`validation`**: Name and experience checks shared by all
//!   constructors
//!
//! # Architecture
//!
//! Pure in-memory domain crate with no I/O and no persistence. Callers
//! construct entities and register them; reports come back as plain
//! strings and aggregates for a presentation layer to render.

pub mod models;
pub mod registry;
pub mod validation;
