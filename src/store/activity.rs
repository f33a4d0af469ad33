//! Activity log

use super::LibraryStore;
use crate::models::{Activity, ActivityType};

impl LibraryStore {
    pub(super) fn record_activity(
        &mut self,
        kind: ActivityType,
        description: String,
        user: String,
    ) {
        let activity = Activity::new(kind, description, self.now(), user);
        tracing::debug!("Activity {:?}: {}", activity.kind, activity.description);
        self.activities.push(activity);
    }

    /// The latest entries of the log, newest first
    pub fn recent_activities(&self) -> Vec<Activity> {
        self.activities
            .iter()
            .rev()
            .take(self.settings.recent_activity_limit)
            .cloned()
            .collect()
    }
}
