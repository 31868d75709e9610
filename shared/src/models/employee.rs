//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employment status
///
/// The canonical three-value set, used by the form and by every filter
/// surface. The wire form matches the display form ("On Leave", not
/// ON_LEAVE).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EmployeeStatus {
    #[default]
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Terminated,
}

impl EmployeeStatus {
    /// All statuses, in form-option order.
    pub const ALL: [EmployeeStatus; 3] = [
        EmployeeStatus::Active,
        EmployeeStatus::OnLeave,
        EmployeeStatus::Terminated,
    ];

    /// Display label, identical to the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On Leave",
            EmployeeStatus::Terminated => "Terminated",
        }
    }
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Server-assigned identifier
    pub id: String,
    pub name: String,
    pub email: String,
    /// Department reference (String ID); may be absent or dangling
    #[serde(default)]
    pub department: String,
    pub position: String,
    pub status: EmployeeStatus,
    /// Absent on some records
    #[serde(default)]
    pub salary: Option<f64>,
    pub joining_date: NaiveDate,
}

/// Employee submission payload (create and update)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub name: String,
    pub email: String,
    /// Department reference (String ID)
    pub department: String,
    pub position: String,
    pub status: EmployeeStatus,
    pub salary: f64,
}
