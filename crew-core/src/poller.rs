//! Activity feed polling
//!
//! One immediate fetch on activation, then a fixed 30-second refresh for
//! as long as the owning view stays active. A failed refresh keeps the
//! previous feed in place; a stale list beats an empty one.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use shared::ActivityRecord;

use crate::gateway::Gateway;
use crate::timer::ScopedTimer;

/// Refresh cadence for the activity feed
pub const ACTIVITY_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Shared slot the poller task writes into
pub type ActivityFeed = Arc<RwLock<Vec<ActivityRecord>>>;

/// Handle for the recurring feed refresh; dropping it stops the polling
pub struct ActivityPoller {
    _timer: ScopedTimer,
}

impl ActivityPoller {
    /// Start polling through `gateway`, writing results into `feed`.
    pub fn start(gateway: Arc<dyn Gateway>, feed: ActivityFeed) -> Self {
        let timer = ScopedTimer::repeating(ACTIVITY_POLL_INTERVAL, move || {
            let gateway = gateway.clone();
            let feed = feed.clone();
            async move {
                match gateway.list_activities().await {
                    Ok(records) => {
                        tracing::debug!(count = records.len(), "activity feed refreshed");
                        *feed.write().await = records;
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "activity feed refresh failed");
                    }
                }
            }
        });
        Self { _timer: timer }
    }
}
