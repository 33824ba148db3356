//! Administrative staff with a flat allowance.

use serde::Serialize;

use super::staff::{Money, StaffMember, StaffProfile};
use crate::validation::StaffResult;

/// Flat allowance added on top of the base salary.
const ADMIN_ALLOWANCE: Money = 1000.0;

/// An administrative staff member.
///
/// Salary: base + 1000, independent of experience.
/// Department label: `Administration`.
#[derive(Debug, Clone, Serialize)]
pub struct AdminStaff {
    profile: StaffProfile,
}

impl AdminStaff {
    /// Creates a validated administrative staff member.
    ///
    /// # Errors
    /// Propagates [`StaffProfile::new`] validation failures.
    pub fn new(
        name: impl Into<String>,
        experience_years: i64,
        base_salary: Money,
    ) -> StaffResult<Self> {
        Ok(Self {
            profile: StaffProfile::new(name, experience_years, base_salary)?,
        })
    }
}

impl StaffMember for AdminStaff {
    fn profile(&self) -> &StaffProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut StaffProfile {
        &mut self.profile
    }

    fn salary(&self) -> Money {
        self.profile.base_salary() + ADMIN_ALLOWANCE
    }

    fn department(&self) -> String {
        "Administration".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_salary_formula() {
        let admin = AdminStaff::new("Fadi", 8, 7000.0).unwrap();
        // 7000 + 1000; experience does not contribute
        assert!((admin.salary() - 8000.0).abs() < 1e-10);
    }

    #[test]
    fn test_admin_experience_does_not_affect_salary() {
        let junior = AdminStaff::new("Fadi", 0, 7000.0).unwrap();
        let senior = AdminStaff::new("Fadi", 25, 7000.0).unwrap();
        assert!((junior.salary() - senior.salary()).abs() < 1e-10);
    }

    #[test]
    fn test_admin_department_label() {
        let admin = AdminStaff::new("Fadi", 8, 7000.0).unwrap();
        assert_eq!(admin.department(), "Administration");
    }

    #[test]
    fn test_admin_validation_propagates() {
        assert!(AdminStaff::new("\n", 8, 7000.0).is_err());
        assert!(AdminStaff::new("Fadi", -5, 7000.0).is_err());
    }
}
