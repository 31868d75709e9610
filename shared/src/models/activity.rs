//! Activity Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mutation kind recorded by the server
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityAction {
    Create,
    Update,
    Delete,
}

impl ActivityAction {
    /// Feed headline for this action.
    pub fn headline(&self) -> &'static str {
        match self {
            ActivityAction::Create => "New Employee Added",
            ActivityAction::Update => "Employee Updated",
            ActivityAction::Delete => "Employee Removed",
        }
    }
}

/// Who performed a mutation; parts may be absent
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Actor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Actor {
    /// Display label: name, else email, else a placeholder.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("unknown")
    }
}

/// Activity record
///
/// Immutable once created; produced by the server as a side effect of
/// employee mutations. This core only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: String,
    pub action: ActivityAction,
    pub description: String,
    #[serde(default)]
    pub performed_by: Option<Actor>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_form() {
        assert_eq!(
            serde_json::to_string(&ActivityAction::Create).unwrap(),
            "\"CREATE\""
        );
        let action: ActivityAction = serde_json::from_str("\"DELETE\"").unwrap();
        assert_eq!(action, ActivityAction::Delete);
    }

    #[test]
    fn test_action_headlines() {
        assert_eq!(ActivityAction::Create.headline(), "New Employee Added");
        assert_eq!(ActivityAction::Update.headline(), "Employee Updated");
        assert_eq!(ActivityAction::Delete.headline(), "Employee Removed");
    }

    #[test]
    fn test_actor_label_falls_back() {
        let named = Actor {
            name: Some("Ava".to_string()),
            email: Some("ava@x.com".to_string()),
        };
        assert_eq!(named.label(), "Ava");

        let email_only = Actor {
            name: None,
            email: Some("ava@x.com".to_string()),
        };
        assert_eq!(email_only.label(), "ava@x.com");

        assert_eq!(Actor::default().label(), "unknown");
    }

    #[test]
    fn test_record_tolerates_missing_actor() {
        let record: ActivityRecord = serde_json::from_str(
            r#"{
                "id": "a1",
                "action": "UPDATE",
                "description": "Updated employee record",
                "timestamp": "2024-06-01T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert!(record.performed_by.is_none());
    }
}
