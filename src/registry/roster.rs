//! Staff roster: registration, counting, and salary reporting.
//!
//! `StaffRegistry` owns members behind the `StaffMember` trait and keeps
//! them in registration order. Every registration bumps a monotonic
//! [`StaffCounter`]; sharing one counter across registries yields a
//! combined total.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::models::{Money, StaffMember};

/// Report header line.
const REPORT_HEADER: &str = "Hospital Staff Salary Report";

/// Monotonic count of staff registrations.
///
/// Clones share the underlying counter. The count only grows; there is
/// no removal operation and no decrement.
#[derive(Debug, Clone, Default)]
pub struct StaffCounter(Arc<AtomicUsize>);

impl StaffCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self(Arc::new(AtomicUsize::new(0)))
    }

    /// Records one registration.
    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Registrations recorded so far.
    pub fn total(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}

/// Ordered collection of staff members with payroll reporting.
///
/// Accepts any constructed [`StaffMember`]; validation happened at
/// construction. Salaries are recomputed from current attributes on
/// every report, never cached.
///
/// # Example
///
/// ```
/// use u_roster::models::{Doctor, Nurse};
/// use u_roster::registry::StaffRegistry;
///
/// let mut registry = StaffRegistry::new();
/// registry.add_staff(Doctor::new("Ahmad", 12, 15000.0, "Cardiology").unwrap());
/// registry.add_staff(Nurse::new("Layla", 5, 5000.0).unwrap());
///
/// let report = registry.salary_report();
/// assert_eq!(report.len(), 4); // header + 2 members + total
/// assert_eq!(report.last().unwrap(), "Total: 29500.00");
/// assert_eq!(registry.total_staff_count(), 2);
/// ```
#[derive(Debug)]
pub struct StaffRegistry {
    members: Vec<Box<dyn StaffMember>>,
    counter: StaffCounter,
}

impl StaffRegistry {
    /// Creates an empty registry with its own counter.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            counter: StaffCounter::new(),
        }
    }

    /// Creates an empty registry recording into an existing counter.
    ///
    /// Pass clones of one counter to several registries to track
    /// registrations across all of them.
    pub fn with_counter(counter: StaffCounter) -> Self {
        Self {
            members: Vec::new(),
            counter,
        }
    }

    /// Registers a staff member and bumps the counter by one.
    pub fn add_staff<S: StaffMember + 'static>(&mut self, member: S) {
        debug!("registering {}", member.summary());
        self.members.push(Box::new(member));
        self.counter.increment();
    }

    /// Members in registration order.
    pub fn members(&self) -> &[Box<dyn StaffMember>] {
        &self.members
    }

    /// Mutable access to the members, e.g. for renames.
    pub fn members_mut(&mut self) -> &mut [Box<dyn StaffMember>] {
        &mut self.members
    }

    /// Number of members held by this registry.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether this registry holds no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Registrations recorded by the attached counter.
    ///
    /// With a shared counter this can exceed [`len`](Self::len).
    pub fn total_staff_count(&self) -> usize {
        self.counter.total()
    }

    /// Handle to the attached counter.
    pub fn counter(&self) -> StaffCounter {
        self.counter.clone()
    }

    /// Sum of member salaries at their current attributes.
    pub fn total_payroll(&self) -> Money {
        self.members.iter().map(|m| m.salary()).sum()
    }

    /// Members whose department label equals `label`.
    pub fn members_in_department(&self, label: &str) -> Vec<&dyn StaffMember> {
        self.members
            .iter()
            .filter(|m| m.department() == label)
            .map(|m| m.as_ref())
            .collect()
    }

    /// Builds the salary report.
    ///
    /// One header line, one line per member in registration order
    /// (`<name> (<department>): salary = <value>` with two decimals),
    /// and a trailing grand total.
    pub fn salary_report(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.members.len() + 2);
        lines.push(REPORT_HEADER.to_string());

        let mut total: Money = 0.0;
        for member in &self.members {
            let salary = member.salary();
            total += salary;
            lines.push(format!(
                "{} ({}): salary = {:.2}",
                member.profile().name(),
                member.department(),
                salary
            ));
        }
        lines.push(format!("Total: {total:.2}"));

        debug!("salary report built for {} member(s)", self.members.len());
        lines
    }
}

impl Default for StaffRegistry {
    fn default() -> Self {
        Self::new()
    }
}
