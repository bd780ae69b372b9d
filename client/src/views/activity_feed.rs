//! Dashboard activity feed.
//!
//! Shows the first [`FEED_LIMIT`] activities of a newest-first list. The feed
//! neither fetches nor sorts; callers pass activities already ordered.

use crate::domain::{Activity, ActivityType};

use super::Route;

/// Number of rows the dashboard shows.
pub const FEED_LIMIT: usize = 4;
/// Placeholder shown when there is nothing to list.
pub const EMPTY_FEED_MESSAGE: &str = "No activities found";
/// Badge label on verified rows.
pub const VERIFIED_LABEL: &str = "Verified on blockchain";

/// Whether an activity of this type carries the verified badge.
///
/// Only approved transfers and inventory updates are recorded on the ledger.
pub fn is_verified(kind: &ActivityType) -> bool {
    matches!(
        kind,
        ActivityType::TransferApproved | ActivityType::InventoryUpdated
    )
}

/// One feed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRow {
    /// Activity identifier, used as the row key.
    pub id: String,
    /// Heading (the activity description).
    pub title: String,
    /// Relative-time label.
    pub timestamp: String,
    /// Whether the verified badge is shown.
    pub verified: bool,
}

/// Feed contents: rows or the empty placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedBody {
    /// At least one activity.
    Rows(Vec<FeedRow>),
    /// No activity at all.
    Empty {
        /// Placeholder text.
        message: &'static str,
    },
}

/// Rendered activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityFeed {
    /// Rows or placeholder.
    pub body: FeedBody,
    /// Target of the "view all" affordance.
    pub view_all: Route,
}

impl ActivityFeed {
    /// Build the feed from a newest-first list.
    pub fn from_activities(activities: &[Activity]) -> Self {
        let body = if activities.is_empty() {
            FeedBody::Empty {
                message: EMPTY_FEED_MESSAGE,
            }
        } else {
            FeedBody::Rows(
                activities
                    .iter()
                    .take(FEED_LIMIT)
                    .map(|activity| FeedRow {
                        id: activity.id.clone(),
                        title: activity.description.clone(),
                        timestamp: activity.time_ago.clone(),
                        verified: is_verified(&activity.kind),
                    })
                    .collect(),
            )
        };
        Self {
            body,
            view_all: Route::AuditLog,
        }
    }

    /// Rows shown, empty when the placeholder is displayed.
    pub fn rows(&self) -> &[FeedRow] {
        match &self.body {
            FeedBody::Rows(rows) => rows,
            FeedBody::Empty { .. } => &[],
        }
    }

    /// Whether the placeholder is displayed.
    pub fn is_empty(&self) -> bool {
        matches!(self.body, FeedBody::Empty { .. })
    }
}
