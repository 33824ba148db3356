//! Hospital staffing domain models.
//!
//! Core data types for staff members and their pay rules. Each variant
//! implements the `StaffMember` trait; salary and department are
//! computed per variant, the summary line is shared.
//!
//! # Pay Rules
//!
//! | Variant | Salary | Department label |
//! |---------|--------|------------------|
//! | Doctor | base + years * 500 + 2000 | `Medical (<specialty>)` |
//! | Nurse | base + years * 300 | `Nursing` |
//! | AdminStaff | base + 1000 | `Administration` |

mod admin;
mod doctor;
mod nurse;
mod staff;

pub use admin::AdminStaff;
pub use doctor::{Doctor, DutyStatus, DutySubscriber};
pub use nurse::Nurse;
pub use staff::{Money, StaffId, StaffMember, StaffProfile};
