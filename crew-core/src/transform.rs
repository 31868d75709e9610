//! Employee record transformer
//!
//! Pure functions deriving the filtered/sorted table view and the chart
//! aggregates from the in-memory collections. Stateless; the coordinators
//! recompute on demand rather than maintaining anything incrementally.

use std::collections::{BTreeMap, HashSet};

use chrono::Datelike;
use serde::Serialize;
use shared::{Department, Employee, EmployeeStatus};

use crate::selection::{DepartmentFilter, SelectionState, SortDirection, SortField, StatusFilter};

/// One slice of the department distribution chart
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DistributionSlice {
    pub department: String,
    pub count: usize,
}

/// Per-department totals for the all-departments summary list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DepartmentSummary {
    pub name: String,
    pub total: usize,
    pub active: usize,
}

/// One point of the growth-by-month line
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GrowthPoint {
    pub month: String,
    pub count: usize,
}

/// Stat-card numbers for the dashboard header
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkforceStats {
    pub total_employees: usize,
    pub departments: usize,
    pub active_employees: usize,
    pub distinct_positions: usize,
}

fn sort_key<'a>(employee: &'a Employee, field: SortField) -> &'a str {
    match field {
        SortField::Name => &employee.name,
        SortField::Email => &employee.email,
        SortField::Position => &employee.position,
        SortField::Status => employee.status.as_str(),
    }
}

fn matches_search(employee: &Employee, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    employee.name.to_lowercase().contains(&term)
        || employee.email.to_lowercase().contains(&term)
        || employee.position.to_lowercase().contains(&term)
}

fn matches_department(employee: &Employee, filter: &DepartmentFilter) -> bool {
    match filter {
        DepartmentFilter::All => true,
        DepartmentFilter::Only(id) => employee.department == *id,
    }
}

fn matches_status(employee: &Employee, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => employee.status == status,
    }
}

/// The filtered, sorted table view.
///
/// Every element satisfies the search, department, and status predicates
/// simultaneously. Ordering is case-insensitive lexicographic on the
/// selected field; descending is the exact reverse of ascending.
pub fn visible_employees<'a>(
    employees: &'a [Employee],
    selection: &SelectionState,
) -> Vec<&'a Employee> {
    let mut rows: Vec<&Employee> = employees
        .iter()
        .filter(|e| {
            matches_search(e, &selection.search)
                && matches_department(e, &selection.department)
                && matches_status(e, selection.status)
        })
        .collect();

    rows.sort_by(|a, b| {
        let ord = sort_key(a, selection.sort_field)
            .to_lowercase()
            .cmp(&sort_key(b, selection.sort_field).to_lowercase());
        match selection.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    rows
}

/// Chart slices: one per department with at least one employee.
///
/// Employees with dangling department references contribute to no slice.
pub fn department_distribution(
    employees: &[Employee],
    departments: &[Department],
) -> Vec<DistributionSlice> {
    departments
        .iter()
        .map(|dept| DistributionSlice {
            department: dept.name.clone(),
            count: employees.iter().filter(|e| e.department == dept.id).count(),
        })
        .filter(|slice| slice.count > 0)
        .collect()
}

/// The all-departments summary list, zero counts included.
pub fn department_summary(
    employees: &[Employee],
    departments: &[Department],
) -> Vec<DepartmentSummary> {
    departments
        .iter()
        .map(|dept| {
            let total = employees.iter().filter(|e| e.department == dept.id).count();
            let active = employees
                .iter()
                .filter(|e| e.department == dept.id && e.status == EmployeeStatus::Active)
                .count();
            DepartmentSummary {
                name: dept.name.clone(),
                total,
                active,
            }
        })
        .collect()
}

/// Employees whose status is exactly `Active`.
pub fn active_employee_count(employees: &[Employee]) -> usize {
    employees
        .iter()
        .filter(|e| e.status == EmployeeStatus::Active)
        .count()
}

/// Cardinality of the position set (case-sensitive).
pub fn distinct_position_count(employees: &[Employee]) -> usize {
    employees
        .iter()
        .map(|e| e.position.as_str())
        .collect::<HashSet<_>>()
        .len()
}

fn month_label(year: i32, month: u32) -> String {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    format!("{}-{}", MONTHS[(month - 1) as usize], year)
}

/// Hires grouped by joining month, in true chronological order.
///
/// Grouping keys on (year, month) so Nov-2023 precedes Jan-2024 even
/// though the labels would sort the other way round.
pub fn growth_by_month(employees: &[Employee]) -> Vec<GrowthPoint> {
    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for employee in employees {
        let date = employee.joining_date;
        *buckets.entry((date.year(), date.month())).or_insert(0) += 1;
    }
    buckets
        .into_iter()
        .map(|((year, month), count)| GrowthPoint {
            month: month_label(year, month),
            count,
        })
        .collect()
}

/// Stat-card numbers for the header row.
pub fn workforce_stats(employees: &[Employee], departments: &[Department]) -> WorkforceStats {
    WorkforceStats {
        total_employees: employees.len(),
        departments: departments.len(),
        active_employees: active_employee_count(employees),
        distinct_positions: distinct_position_count(employees),
    }
}
