//! Nurse: nursing staff with experience-weighted pay.

use serde::Serialize;

use super::staff::{Money, StaffMember, StaffProfile};
use crate::validation::StaffResult;

/// Pay added per year of experience.
const EXPERIENCE_RATE: Money = 300.0;

/// A nursing staff member.
///
/// Salary: base + experience * 300. Department label: `Nursing`.
#[derive(Debug, Clone, Serialize)]
pub struct Nurse {
    profile: StaffProfile,
}

impl Nurse {
    /// Creates a validated nurse.
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

impl StaffMember for Nurse {
    fn profile(&self) -> &StaffProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut StaffProfile {
        &mut self.profile
    }

    fn salary(&self) -> Money {
        self.profile.base_salary() + self.profile.experience_years() as f64 * EXPERIENCE_RATE
    }

    fn department(&self) -> String {
        "Nursing".to_string()
    }
}
