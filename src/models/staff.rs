//! Staff identity and the shared staff member contract.
//!
//! Every staff variant is built around a [`StaffProfile`] (id, name,
//! experience, base salary) and implements [`StaffMember`], which
//! supplies the variant-specific salary formula and department label.
//! The summary line is shared: it is a provided method that calls the
//! late-bound `department()`.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::validation::{self, StaffResult, ValidationError};

/// Monetary amount in the hospital's accounting currency.
pub type Money = f64;

/// Opaque unique staff identifier, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StaffId(Uuid);

impl StaffId {
    /// Generates a fresh random identifier.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity and pay attributes shared by every staff member.
///
/// Fields are private: the name invariant (non-empty after trimming)
/// must hold on every assignment, and experience is fixed after
/// construction.
#[derive(Debug, Clone, Serialize)]
pub struct StaffProfile {
    id: StaffId,
    name: String,
    experience_years: i64,
    base_salary: Money,
}

impl StaffProfile {
    /// Creates a validated profile with a fresh [`StaffId`].
    ///
    /// # Errors
    /// [`ValidationError::EmptyName`] when `name` trims to nothing,
    /// [`ValidationError::NegativeExperience`] when `experience_years`
    /// is below zero.
    pub fn new(
        name: impl Into<String>,
        experience_years: i64,
        base_salary: Money,
    ) -> StaffResult<Self> {
        let name = name.into();
        if !validation::is_valid_name(&name) {
            return Err(ValidationError::EmptyName);
        }
        if !validation::is_non_negative(experience_years) {
            return Err(ValidationError::NegativeExperience(experience_years));
        }
        Ok(Self {
            id: StaffId::fresh(),
            name,
            experience_years,
            base_salary,
        })
    }

    /// Unique identifier.
    pub fn id(&self) -> StaffId {
        self.id
    }

    /// Current display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whole years of professional experience.
    pub fn experience_years(&self) -> i64 {
        self.experience_years
    }

    /// Base salary before variant adjustments.
    pub fn base_salary(&self) -> Money {
        self.base_salary
    }

    /// Replaces the name; the stored name is untouched on failure.
    ///
    /// # Errors
    /// [`ValidationError::EmptyName`] when `name` trims to nothing.
    pub fn rename(&mut self, name: impl Into<String>) -> StaffResult<()> {
        let name = name.into();
        if !validation::is_valid_name(&name) {
            return Err(ValidationError::EmptyName);
        }
        self.name = name;
        Ok(())
    }
}

/// A hospital staff member with variant-specific pay rules.
///
/// # Salary Convention
/// `salary()` is a pure function of the member's current attributes.
/// It is recomputed on every call and never cached, so reports built
/// at different times reflect attribute changes in between.
pub trait StaffMember: Send + Sync + fmt::Debug {
    /// Shared identity and pay attributes.
    fn profile(&self) -> &StaffProfile;

    /// Mutable access to the shared attributes.
    fn profile_mut(&mut self) -> &mut StaffProfile;

    /// Computes the full salary from the current attributes.
    fn salary(&self) -> Money;

    /// Human-readable department label.
    fn department(&self) -> String;

    /// One-line summary: id, name, experience, department.
    ///
    /// The department comes from the polymorphic call, so variants
    /// shape the summary without overriding it.
    fn summary(&self) -> String {
        let profile = self.profile();
        format!(
            "[{}] {} ({} yrs) - {}",
            profile.id(),
            profile.name(),
            profile.experience_years(),
            self.department()
        )
    }
}
