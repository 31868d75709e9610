//! Form state controller
//!
//! One editable employee draft at a time, in create or edit mode. Field
//! edits are unvalidated; everything is checked on submit, which produces
//! the submission payload the owning view forwards to the gateway. The
//! controller itself never talks to the gateway, and server-side
//! validation remains the final authority.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::RwLock;
use validator::Validate;

use shared::{Employee, EmployeePayload, EmployeeStatus};

use crate::timer::ScopedTimer;

/// How long the transient success notice stays up
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Form error type
#[derive(Debug, Error)]
pub enum FormError {
    /// A required field is missing or malformed
    #[error("Validation error: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    /// Salary did not parse as a non-negative number
    #[error("Salary must be a non-negative number")]
    InvalidSalary,
}

/// Which record the draft came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Blank draft for a new employee
    Create,
    /// Draft initialized from the employee with this id
    Edit(String),
}

/// The editable draft; text fields mirror the form inputs verbatim
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct EmployeeDraft {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "department is required"))]
    pub department: String,
    #[validate(length(min = 1, message = "position is required"))]
    pub position: String,
    #[validate(length(min = 1, message = "salary is required"))]
    pub salary: String,
    pub status: EmployeeStatus,
}

impl EmployeeDraft {
    fn blank() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            department: String::new(),
            position: String::new(),
            salary: String::new(),
            status: EmployeeStatus::Active,
        }
    }

    fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
            position: employee.position.clone(),
            salary: employee.salary.map(format_salary).unwrap_or_default(),
            status: employee.status,
        }
    }
}

/// Render a salary the way the input field shows it: integral values
/// without the trailing ".0".
fn format_salary(salary: f64) -> String {
    if salary.fract() == 0.0 {
        format!("{}", salary as i64)
    } else {
        format!("{}", salary)
    }
}

type NoticeSlot = Arc<RwLock<Option<String>>>;

/// Single-draft form controller
///
/// Re-initialization (a new `create()` or `edit()` replacing this one)
/// fully discards unsaved edits; there is never more than one live draft.
pub struct EmployeeForm {
    mode: FormMode,
    draft: EmployeeDraft,
    notice: NoticeSlot,
    notice_timer: Option<ScopedTimer>,
}

impl EmployeeForm {
    /// Blank create-mode form; status defaults to Active.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: EmployeeDraft::blank(),
            notice: Arc::new(RwLock::new(None)),
            notice_timer: None,
        }
    }

    /// Edit-mode form initialized from an existing record. Absent salary
    /// and department fields become empty strings.
    pub fn edit(employee: &Employee) -> Self {
        Self {
            mode: FormMode::Edit(employee.id.clone()),
            draft: EmployeeDraft::from_employee(employee),
            notice: Arc::new(RwLock::new(None)),
            notice_timer: None,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    /// Mutable access for field updates; nothing is validated here.
    pub fn draft_mut(&mut self) -> &mut EmployeeDraft {
        &mut self.draft
    }

    /// Validate the draft and build the submission payload.
    ///
    /// Also arms the transient success notice. The notice is optimistic
    /// UI feedback that clears itself after [`NOTICE_DURATION`]; it does
    /// not mean the write has been persisted.
    pub async fn submit(&mut self) -> Result<EmployeePayload, FormError> {
        self.draft.validate()?;

        let salary: f64 = self
            .draft
            .salary
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidSalary)?;
        if !salary.is_finite() || salary < 0.0 {
            return Err(FormError::InvalidSalary);
        }

        let message = match self.mode {
            FormMode::Create => "Employee added successfully!",
            FormMode::Edit(_) => "Employee updated successfully!",
        };
        self.show_notice(message).await;

        Ok(EmployeePayload {
            name: self.draft.name.trim().to_string(),
            email: self.draft.email.trim().to_string(),
            department: self.draft.department.clone(),
            position: self.draft.position.trim().to_string(),
            status: self.draft.status,
            salary,
        })
    }

    /// The live success notice, if it has not expired yet.
    pub async fn success_notice(&self) -> Option<String> {
        self.notice.read().await.clone()
    }

    async fn show_notice(&mut self, message: &str) {
        *self.notice.write().await = Some(message.to_string());
        let slot = self.notice.clone();
        // Replacing the timer cancels any pending clear from an earlier
        // submit.
        self.notice_timer = Some(ScopedTimer::once(NOTICE_DURATION, async move {
            *slot.write().await = None;
        }));
    }
}
