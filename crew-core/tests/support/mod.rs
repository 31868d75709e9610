//! In-memory fakes shared by the coordinator tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use tokio::sync::RwLock;

use crew_client::{ClientError, ClientResult};
use crew_core::{Gateway, Session};
use shared::{
    ActivityAction, ActivityRecord, Actor, Department, Employee, EmployeePayload, EmployeeStatus,
};

/// Gateway fake over an in-memory roster.
///
/// The failure switches turn specific call classes into errors:
/// `fail_reads` breaks the list calls, `fail_commands` makes every
/// mutation a server-reported validation error, and
/// `fail_commands_silently` makes mutations fail without a server
/// message (the transport-ish case).
#[derive(Default)]
pub struct FakeGateway {
    pub employees: RwLock<Vec<Employee>>,
    pub activities: RwLock<Vec<ActivityRecord>>,
    pub last_payload: RwLock<Option<EmployeePayload>>,
    pub delete_calls: AtomicUsize,
    pub activity_fetches: AtomicUsize,
    pub fail_reads: AtomicBool,
    pub fail_commands: AtomicBool,
    pub fail_commands_silently: AtomicBool,
    pub fail_activities: AtomicBool,
    next_id: AtomicUsize,
}

impl FakeGateway {
    pub fn seeded() -> Arc<Self> {
        let gateway = Self::default();
        *gateway.employees.try_write().unwrap() = seed_roster();
        *gateway.activities.try_write().unwrap() = seed_activities();
        Arc::new(gateway)
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn command_failure(&self) -> Option<ClientError> {
        if self.fail_commands.load(Ordering::SeqCst) {
            return Some(ClientError::Validation("Email already exists".to_string()));
        }
        if self.fail_commands_silently.load(Ordering::SeqCst) {
            return Some(ClientError::InvalidResponse("connection reset".to_string()));
        }
        None
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ClientError::InvalidResponse("connection reset".to_string()));
        }
        Ok(self.employees.read().await.clone())
    }

    async fn list_departments(&self) -> ClientResult<Vec<Department>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ClientError::InvalidResponse("connection reset".to_string()));
        }
        Ok(Department::builtin())
    }

    async fn list_activities(&self) -> ClientResult<Vec<ActivityRecord>> {
        self.activity_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_activities.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("Feed unavailable".to_string()));
        }
        Ok(self.activities.read().await.clone())
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> ClientResult<Employee> {
        if let Some(err) = self.command_failure() {
            return Err(err);
        }
        *self.last_payload.write().await = Some(payload.clone());

        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let employee = Employee {
            id: format!("srv-{}", n + 1),
            name: payload.name.clone(),
            email: payload.email.clone(),
            department: payload.department.clone(),
            position: payload.position.clone(),
            status: payload.status,
            salary: Some(payload.salary),
            joining_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        self.employees.write().await.push(employee.clone());
        Ok(employee)
    }

    async fn update_employee(
        &self,
        id: &str,
        payload: &EmployeePayload,
    ) -> ClientResult<Employee> {
        if let Some(err) = self.command_failure() {
            return Err(err);
        }
        *self.last_payload.write().await = Some(payload.clone());

        let mut employees = self.employees.write().await;
        let existing = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ClientError::NotFound("Employee not found".to_string()))?;
        existing.name = payload.name.clone();
        existing.email = payload.email.clone();
        existing.department = payload.department.clone();
        existing.position = payload.position.clone();
        existing.status = payload.status;
        existing.salary = Some(payload.salary);
        Ok(existing.clone())
    }

    async fn delete_employee(&self, id: &str) -> ClientResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.command_failure() {
            return Err(err);
        }
        let mut employees = self.employees.write().await;
        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return Err(ClientError::NotFound("Employee not found".to_string()));
        }
        Ok(())
    }
}

/// Session fake with a recorded sign-out.
pub struct FakeSession {
    pub signed_in: AtomicBool,
    pub name: Option<String>,
}

impl FakeSession {
    pub fn signed_in_as(name: &str) -> Arc<Self> {
        Arc::new(Self {
            signed_in: AtomicBool::new(true),
            name: Some(name.to_string()),
        })
    }
}

impl Session for FakeSession {
    fn is_signed_in(&self) -> bool {
        self.signed_in.load(Ordering::SeqCst)
    }

    fn display_name(&self) -> Option<String> {
        if self.is_signed_in() {
            self.name.clone()
        } else {
            None
        }
    }

    fn sign_out(&self) {
        self.signed_in.store(false, Ordering::SeqCst);
    }
}

pub fn employee(
    id: &str,
    name: &str,
    department: &str,
    position: &str,
    status: EmployeeStatus,
    joined: (i32, u32, u32),
) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@x.com", id),
        department: department.to_string(),
        position: position.to_string(),
        status,
        salary: Some(50000.0),
        joining_date: NaiveDate::from_ymd_opt(joined.0, joined.1, joined.2).unwrap(),
    }
}

/// Ten employees, six of them Active.
pub fn seed_roster() -> Vec<Employee> {
    use EmployeeStatus::*;
    vec![
        employee("e1", "Ava Chen", "Development", "Engineer", Active, (2023, 3, 10)),
        employee("e2", "Ben Okafor", "Sales", "Account Manager", Active, (2023, 11, 2)),
        employee("e3", "Carla Diaz", "Development", "Engineer", OnLeave, (2024, 1, 15)),
        employee("e4", "Dan Wu", "Finance", "Analyst", Active, (2024, 1, 20)),
        employee("e5", "Elena Petrova", "HR", "Recruiter", Terminated, (2023, 3, 25)),
        employee("e6", "Farid Khan", "Development", "Tech Lead", Active, (2023, 11, 12)),
        employee("e7", "Grace Lee", "Marketing", "Designer", Active, (2024, 2, 1)),
        employee("e8", "Hugo Mora", "Operations", "Coordinator", OnLeave, (2024, 2, 14)),
        employee("e9", "Iris Novak", "Sales", "Account Manager", Active, (2024, 2, 20)),
        employee("e10", "Jon Park", "ghost-dept", "Engineer", Terminated, (2024, 3, 3)),
    ]
}

pub fn activity(id: &str, action: ActivityAction, hour: u32) -> ActivityRecord {
    let verb = match action {
        ActivityAction::Create => "Added",
        ActivityAction::Update => "Updated",
        ActivityAction::Delete => "Removed",
    };
    ActivityRecord {
        id: id.to_string(),
        action,
        description: format!("{} employee Ava Chen", verb),
        performed_by: Some(Actor {
            name: Some("Admin".to_string()),
            email: None,
        }),
        timestamp: Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap(),
    }
}

pub fn seed_activities() -> Vec<ActivityRecord> {
    vec![
        activity("a2", ActivityAction::Update, 10),
        activity("a1", ActivityAction::Create, 9),
    ]
}
