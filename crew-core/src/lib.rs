//! Crew Core - application core for the employee management dashboard
//!
//! Everything behind the UI surface: the record transformer (filtering,
//! sorting, chart aggregation), the form state controller, the two view
//! coordinators, and the activity poller. Presentation, routing, and the
//! session subsystem live elsewhere; this crate is headless and drives
//! the remote gateway through the [`Gateway`] seam.

pub mod dashboard;
pub mod form;
pub mod gateway;
pub mod overview;
pub mod poller;
pub mod selection;
pub mod session;
pub mod timer;
pub mod transform;

pub use dashboard::DashboardView;
pub use form::{EmployeeDraft, EmployeeForm, FormError, FormMode, NOTICE_DURATION};
pub use gateway::Gateway;
pub use overview::OverviewView;
pub use poller::{ACTIVITY_POLL_INTERVAL, ActivityFeed, ActivityPoller};
pub use selection::{DepartmentFilter, SelectionState, SortDirection, SortField, StatusFilter};
pub use session::Session;
pub use timer::ScopedTimer;
pub use transform::{
    DepartmentSummary, DistributionSlice, GrowthPoint, WorkforceStats, active_employee_count,
    department_distribution, department_summary, distinct_position_count, growth_by_month,
    visible_employees, workforce_stats,
};
