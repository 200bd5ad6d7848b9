//! Audit entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What happened, from the audit log's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// The setup wizard finished and its plan was committed
    SetupCompleted,
    /// The setup wizard was cancelled before finalize
    SetupCancelled,
    /// A budget plan file was written
    PlanCommitted,
}

/// One audit log record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique entry identifier
    pub id: Uuid,
    /// When the event happened (UTC)
    pub timestamp: DateTime<Utc>,
    /// The recorded event
    pub action: AuditAction,
    /// Free-form context for the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AuditEntry {
    /// Create an entry stamped with the current time
    pub fn new(action: AuditAction, details: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            action,
            details,
        }
    }
}
