//! Dashboard view coordinator
//!
//! Owns the employee and department collections, the selection state, and
//! the employee form. Collections are mutated only here, in this view's
//! own command handlers, and only on gateway success; any failure leaves
//! them untouched and surfaces one dismissible error message.

use std::sync::Arc;

use crew_client::ClientError;
use shared::{Department, Employee};

use crate::form::{EmployeeForm, FormMode};
use crate::gateway::Gateway;
use crate::selection::SelectionState;
use crate::transform;

/// Dashboard state: collections, selection, form, and the error slot
pub struct DashboardView {
    gateway: Arc<dyn Gateway>,
    employees: Vec<Employee>,
    departments: Vec<Department>,
    selection: SelectionState,
    form: Option<EmployeeForm>,
    /// Employee awaiting the delete confirmation step
    pending_delete: Option<String>,
    loading: bool,
    error: Option<String>,
}

impl DashboardView {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            employees: Vec::new(),
            departments: Vec::new(),
            selection: SelectionState::new(),
            form: None,
            pending_delete: None,
            loading: true,
            error: None,
        }
    }

    // ============ Loading ============

    /// Fetch both collections concurrently. Both must succeed before the
    /// view renders; either failing surfaces one error. The loading state
    /// ends either way.
    pub async fn load(&mut self) {
        let result = tokio::try_join!(
            self.gateway.list_employees(),
            self.gateway.list_departments(),
        );
        match result {
            Ok((employees, departments)) => {
                self.employees = employees;
                self.departments = departments;
            }
            Err(err) => self.fail(&err, "Error fetching data"),
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // ============ Derived views ============

    /// The filtered, sorted table rows for the current selection.
    pub fn visible_employees(&self) -> Vec<&Employee> {
        transform::visible_employees(&self.employees, &self.selection)
    }

    /// Department name for a table row; "N/A" when the reference dangles.
    pub fn department_name(&self, employee: &Employee) -> &str {
        self.departments
            .iter()
            .find(|d| d.id == employee.department)
            .map(|d| d.name.as_str())
            .unwrap_or("N/A")
    }

    /// Chart slices for the department distribution.
    pub fn distribution(&self) -> Vec<transform::DistributionSlice> {
        transform::department_distribution(&self.employees, &self.departments)
    }

    /// Per-department totals, zero counts included.
    pub fn department_summary(&self) -> Vec<transform::DepartmentSummary> {
        transform::department_summary(&self.employees, &self.departments)
    }

    /// Header stat cards.
    pub fn stats(&self) -> transform::WorkforceStats {
        transform::workforce_stats(&self.employees, &self.departments)
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    // ============ Form lifecycle ============

    /// Open a blank create form, discarding any draft in progress.
    pub fn open_create_form(&mut self) {
        self.form = Some(EmployeeForm::create());
    }

    /// Open the edit form for `id`, discarding any draft in progress.
    /// Returns false when the id is unknown.
    pub fn open_edit_form(&mut self, id: &str) -> bool {
        match self.employees.iter().find(|e| e.id == id) {
            Some(employee) => {
                self.form = Some(EmployeeForm::edit(employee));
                true
            }
            None => false,
        }
    }

    /// Cancel: drop the draft without touching any collection.
    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub fn form(&self) -> Option<&EmployeeForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut EmployeeForm> {
        self.form.as_mut()
    }

    // ============ Mutation commands ============

    /// Submit the open form: create in create mode, update in edit mode.
    /// The collection is patched only on gateway success.
    pub async fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let payload = match form.submit().await {
            Ok(payload) => payload,
            Err(err) => {
                self.error = Some(err.to_string());
                return;
            }
        };
        let mode = form.mode().clone();

        match mode {
            FormMode::Create => match self.gateway.create_employee(&payload).await {
                Ok(created) => {
                    tracing::info!(id = %created.id, "employee created");
                    self.employees.push(created);
                    self.form = None;
                }
                Err(err) => self.fail(&err, "Error adding employee"),
            },
            FormMode::Edit(id) => match self.gateway.update_employee(&id, &payload).await {
                Ok(updated) => {
                    tracing::info!(id = %updated.id, "employee updated");
                    if let Some(slot) = self.employees.iter_mut().find(|e| e.id == id) {
                        *slot = updated;
                    }
                    // Closing the form clears the selected-employee
                    // reference held in its edit mode.
                    self.form = None;
                }
                Err(err) => self.fail(&err, "Error updating employee"),
            },
        }
    }

    /// First step of deletion: record the confirmation request. No
    /// gateway call happens until [`Self::confirm_delete`].
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    /// The employee id awaiting confirmation, if any.
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Abandon the pending deletion.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirmed deletion: issue the gateway call and remove the record
    /// on success.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        match self.gateway.delete_employee(&id).await {
            Ok(()) => {
                tracing::info!(id = %id, "employee deleted");
                self.employees.retain(|e| e.id != id);
            }
            Err(err) => self.fail(&err, "Error deleting employee"),
        }
    }

    // ============ Error slot ============

    /// The current dismissible error banner text.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dismiss the error banner.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn fail(&mut self, err: &ClientError, fallback: &str) {
        tracing::error!(error = %err, "dashboard command failed");
        self.error = Some(
            err.server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        );
    }
}
