//! Activity feed entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ActivityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Borrow,
    Return,
    AddBook,
    AddMember,
}

/// A line of the dashboard's recent activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    /// Who performed the action (member name or librarian)
    pub user: String,
}

impl Activity {
    pub fn new(
        kind: ActivityType,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            id: ActivityId::generate(),
            kind,
            description: description.into(),
            timestamp,
            user: user.into(),
        }
    }
}
