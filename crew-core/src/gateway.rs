//! Gateway seam
//!
//! The remote API boundary as the coordinators see it. `HttpClient` is
//! the production implementation; tests substitute an in-memory fake.

use async_trait::async_trait;

use crew_client::{ClientResult, HttpClient};
use shared::{ActivityRecord, Department, Employee, EmployeePayload};

/// Remote data gateway for the employee, department, and activity
/// collections
#[async_trait]
pub trait Gateway: Send + Sync {
    /// List all employees
    async fn list_employees(&self) -> ClientResult<Vec<Employee>>;

    /// List all departments
    async fn list_departments(&self) -> ClientResult<Vec<Department>>;

    /// List recent activities, newest first
    async fn list_activities(&self) -> ClientResult<Vec<ActivityRecord>>;

    /// Create an employee, returning the canonical server record
    async fn create_employee(&self, payload: &EmployeePayload) -> ClientResult<Employee>;

    /// Update an employee, returning the canonical server record
    async fn update_employee(&self, id: &str, payload: &EmployeePayload)
    -> ClientResult<Employee>;

    /// Delete an employee
    async fn delete_employee(&self, id: &str) -> ClientResult<()>;
}

#[async_trait]
impl Gateway for HttpClient {
    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        HttpClient::list_employees(self).await
    }

    async fn list_departments(&self) -> ClientResult<Vec<Department>> {
        HttpClient::list_departments(self).await
    }

    async fn list_activities(&self) -> ClientResult<Vec<ActivityRecord>> {
        HttpClient::list_activities(self).await
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> ClientResult<Employee> {
        HttpClient::create_employee(self, payload).await
    }

    async fn update_employee(
        &self,
        id: &str,
        payload: &EmployeePayload,
    ) -> ClientResult<Employee> {
        HttpClient::update_employee(self, id, payload).await
    }

    async fn delete_employee(&self, id: &str) -> ClientResult<()> {
        HttpClient::delete_employee(self, id).await
    }
}
