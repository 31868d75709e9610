//! Overview view coordinator
//!
//! The landing view: headline stats, growth and distribution series, and
//! the polled activity feed, plus the injected session capability behind
//! the greeting and sign-out affordances.

use std::sync::Arc;

use tokio::sync::RwLock;

use crew_client::ClientError;
use shared::{ActivityRecord, Department, Employee};

use crate::gateway::Gateway;
use crate::poller::{ActivityFeed, ActivityPoller};
use crate::session::Session;
use crate::transform;

/// Overview state: collections, polled feed, session capability
pub struct OverviewView {
    gateway: Arc<dyn Gateway>,
    session: Arc<dyn Session>,
    employees: Vec<Employee>,
    departments: Vec<Department>,
    feed: ActivityFeed,
    poller: Option<ActivityPoller>,
    loading: bool,
    error: Option<String>,
}

impl OverviewView {
    pub fn new(gateway: Arc<dyn Gateway>, session: Arc<dyn Session>) -> Self {
        Self {
            gateway,
            session,
            employees: Vec::new(),
            departments: Vec::new(),
            feed: Arc::new(RwLock::new(Vec::new())),
            poller: None,
            loading: true,
            error: None,
        }
    }

    // ============ Lifecycle ============

    /// Mount: fetch both collections concurrently (both must succeed
    /// before the stats render; either failing surfaces one error), and
    /// start the activity poller for as long as the view stays active.
    pub async fn activate(&mut self) {
        let result = tokio::try_join!(
            self.gateway.list_employees(),
            self.gateway.list_departments(),
        );
        match result {
            Ok((employees, departments)) => {
                self.employees = employees;
                self.departments = departments;
            }
            Err(err) => self.fail(&err, "Failed to fetch statistics"),
        }
        self.loading = false;
        self.poller = Some(ActivityPoller::start(
            self.gateway.clone(),
            self.feed.clone(),
        ));
    }

    /// Unmount: stop the poller; no further fetches happen.
    pub fn deactivate(&mut self) {
        self.poller = None;
    }

    pub fn is_active(&self) -> bool {
        self.poller.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // ============ Session ============

    /// Greeting line for the header.
    pub fn greeting(&self) -> String {
        match self.session.display_name() {
            Some(name) => format!("Hello, {}!", name),
            None => "Hello!".to_string(),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_signed_in()
    }

    /// Sign-out affordance; the session subsystem owns what happens next.
    pub fn sign_out(&self) {
        self.session.sign_out();
    }

    // ============ Derived views ============

    /// Header stat cards.
    pub fn stats(&self) -> transform::WorkforceStats {
        transform::workforce_stats(&self.employees, &self.departments)
    }

    /// Growth-by-month line, chronological.
    pub fn growth(&self) -> Vec<transform::GrowthPoint> {
        transform::growth_by_month(&self.employees)
    }

    /// Department distribution chart slices.
    pub fn distribution(&self) -> Vec<transform::DistributionSlice> {
        transform::department_distribution(&self.employees, &self.departments)
    }

    /// Per-department totals, zero counts included.
    pub fn department_summary(&self) -> Vec<transform::DepartmentSummary> {
        transform::department_summary(&self.employees, &self.departments)
    }

    /// Snapshot of the polled activity feed, newest first.
    pub async fn activities(&self) -> Vec<ActivityRecord> {
        self.feed.read().await.clone()
    }

    // ============ Error slot ============

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn fail(&mut self, err: &ClientError, fallback: &str) {
        tracing::error!(error = %err, "overview load failed");
        self.error = Some(
            err.server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        );
    }
}
