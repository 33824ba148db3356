//! Doctor: specialist staff with duty-change notifications.
//!
//! A doctor carries a medical specialty and an ordered list of duty
//! subscribers. Setting the duty status broadcasts the doctor's current
//! name and the new status to every subscriber, synchronously, in
//! subscription order.
//!
//! # Reference
//! Gamma et al. (1994), "Design Patterns", Observer

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::staff::{Money, StaffMember, StaffProfile};
use crate::validation::StaffResult;

/// Pay added per year of experience.
const EXPERIENCE_RATE: Money = 500.0;
/// Fixed specialist allowance.
const SPECIALIST_BONUS: Money = 2000.0;

/// Duty states broadcast to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DutyStatus {
    /// On shift.
    OnDuty,
    /// Off shift.
    OffDuty,
}

impl DutyStatus {
    /// Canonical display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::OnDuty => "On Duty",
            DutyStatus::OffDuty => "Off Duty",
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback invoked with the doctor's current name and the new status.
pub type DutySubscriber = Box<dyn Fn(&str, DutyStatus) + Send + Sync>;

/// A physician with a medical specialty.
///
/// Salary: base + experience * 500 + 2000.
/// Department label: `Medical (<specialty>)`.
///
/// # Example
///
/// ```
/// use u_roster::models::Doctor;
///
/// let mut doctor = Doctor::new("Ahmad", 12, 15000.0, "Cardiology").unwrap();
/// doctor.subscribe(|name, status| {
///     println!("{name} is now {status}");
/// });
/// doctor.set_on_duty_status(true);
/// assert_eq!(doctor.subscriber_count(), 1);
/// ```
#[derive(Serialize)]
pub struct Doctor {
    profile: StaffProfile,
    specialty: String,
    #[serde(skip)]
    subscribers: Vec<DutySubscriber>,
}

impl Doctor {
    /// Creates a validated doctor.
    ///
    /// # Errors
    /// Propagates [`StaffProfile::new`] validation failures.
    pub fn new(
        name: impl Into<String>,
        experience_years: i64,
        base_salary: Money,
        specialty: impl Into<String>,
    ) -> StaffResult<Self> {
        Ok(Self {
            profile: StaffProfile::new(name, experience_years, base_salary)?,
            specialty: specialty.into(),
            subscribers: Vec::new(),
        })
    }

    /// Medical specialty (e.g., "Cardiology").
    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    /// Registers a duty-change subscriber.
    ///
    /// Subscribers fire in registration order. No de-duplication:
    /// registering equivalent callbacks twice fires them twice.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&str, DutyStatus) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Broadcasts a duty change to every subscriber, in order.
    ///
    /// The status is transient: it is carried by the notification and
    /// not stored on the doctor. With zero subscribers this is a no-op.
    /// A panicking subscriber unwinds to the caller; later subscribers
    /// are not invoked.
    pub fn set_on_duty_status(&self, on_duty: bool) {
        let status = if on_duty {
            DutyStatus::OnDuty
        } else {
            DutyStatus::OffDuty
        };
        debug!(
            "duty change for {}: {} ({} subscriber(s))",
            self.profile.name(),
            status,
            self.subscribers.len()
        );
        for subscriber in &self.subscribers {
            subscriber(self.profile.name(), status);
        }
    }
}

impl StaffMember for Doctor {
    fn profile(&self) -> &StaffProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut StaffProfile {
        &mut self.profile
    }

    fn salary(&self) -> Money {
        self.profile.base_salary()
            + self.profile.experience_years() as f64 * EXPERIENCE_RATE
            + SPECIALIST_BONUS
    }

    fn department(&self) -> String {
        format!("Medical ({})", self.specialty)
    }
}

impl fmt::Debug for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Doctor")
            .field("profile", &self.profile)
            .field("specialty", &self.specialty)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
