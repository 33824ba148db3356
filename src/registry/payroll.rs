//! Payroll aggregates over a staff registry.
//!
//! Computes headline payroll figures from a registry snapshot.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Payroll | Sum of member salaries |
//! | Headcount | Members in the registry |
//! | Average Salary | Total / headcount (0 when empty) |
//! | Payroll by Department | Salary sum per department label |
//! | Headcount by Department | Member count per department label |

use std::collections::HashMap;

use serde::Serialize;

use super::StaffRegistry;
use crate::models::Money;

/// Payroll indicators computed from a registry's current members.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollSummary {
    /// Sum of all member salaries.
    pub total_payroll: Money,
    /// Number of members.
    pub headcount: usize,
    /// Mean salary (0.0 for an empty registry).
    pub average_salary: Money,
    /// Salary sum per department label.
    pub payroll_by_department: HashMap<String, Money>,
    /// Member count per department label.
    pub headcount_by_department: HashMap<String, usize>,
}

impl PayrollSummary {
    /// Computes payroll indicators from the registry's current members.
    pub fn calculate(registry: &StaffRegistry) -> Self {
        let mut total: Money = 0.0;
        let mut payroll_by_department: HashMap<String, Money> = HashMap::new();
        let mut headcount_by_department: HashMap<String, usize> = HashMap::new();

        for member in registry.members() {
            let salary = member.salary();
            let department = member.department();

            total += salary;
            *payroll_by_department
                .entry(department.clone())
                .or_insert(0.0) += salary;
            *headcount_by_department.entry(department).or_insert(0) += 1;
        }

        let headcount = registry.len();
        let average_salary = if headcount == 0 {
            0.0
        } else {
            total / headcount as f64
        };

        Self {
            total_payroll: total,
            headcount,
            average_salary,
            payroll_by_department,
            headcount_by_department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdminStaff, Doctor, Nurse};

    fn sample_registry() -> StaffRegistry {
        let mut registry = StaffRegistry::new();
        registry.add_staff(Doctor::new("Ahmad", 12, 15000.0, "Cardiology").unwrap());
        registry.add_staff(Nurse::new("Layla", 5, 5000.0).unwrap());
        registry.add_staff(AdminStaff::new("Fadi", 8, 7000.0).unwrap());
        registry
    }

    #[test]
    fn test_summary_totals() {
        let summary = PayrollSummary::calculate(&sample_registry());

        assert_eq!(summary.headcount, 3);
        assert!((summary.total_payroll - 37500.0).abs() < 1e-10);
        assert!((summary.average_salary - 12500.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_by_department() {
        let summary = PayrollSummary::calculate(&sample_registry());

        assert!((summary.payroll_by_department["Medical (Cardiology)"] - 23000.0).abs() < 1e-10);
        assert!((summary.payroll_by_department["Nursing"] - 6500.0).abs() < 1e-10);
        assert!((summary.payroll_by_department["Administration"] - 8000.0).abs() < 1e-10);

        assert_eq!(summary.headcount_by_department["Nursing"], 1);
        let counted: usize = summary.headcount_by_department.values().sum();
        assert_eq!(counted, summary.headcount);
    }

    #[test]
    fn test_summary_empty_registry() {
        let summary = PayrollSummary::calculate(&StaffRegistry::new());

        assert_eq!(summary.headcount, 0);
        assert!((summary.total_payroll - 0.0).abs() < 1e-10);
        assert!((summary.average_salary - 0.0).abs() < 1e-10);
        assert!(summary.payroll_by_department.is_empty());
    }

    #[test]
    fn test_summary_agrees_with_report_total() {
        let registry = sample_registry();
        let summary = PayrollSummary::calculate(&registry);
        let report = registry.salary_report();

        assert_eq!(
            report.last().unwrap(),
            &format!("Total: {:.2}", summary.total_payroll)
        );
        assert!((summary.total_payroll - registry.total_payroll()).abs() < 1e-10);
    }

    #[test]
    fn test_summary_groups_same_department() {
        let mut registry = StaffRegistry::new();
        registry.add_staff(Nurse::new("Layla", 5, 5000.0).unwrap());
        registry.add_staff(Nurse::new("Huda", 2, 4200.0).unwrap());

        let summary = PayrollSummary::calculate(&registry);
        assert_eq!(summary.headcount_by_department["Nursing"], 2);
        // 6500 + 4800
        assert!((summary.payroll_by_department["Nursing"] - 11300.0).abs() < 1e-10);
    }
}
