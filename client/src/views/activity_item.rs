//! Icon styling and row text for a single activity.

use crate::domain::{Activity, ActivityType};

/// Icon circle shown beside an activity row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityIcon {
    /// Circle background class.
    pub background: &'static str,
    /// Icon colour class.
    pub color: &'static str,
    /// Icon glyph name.
    pub icon: &'static str,
}

/// Icon for an activity type; anything unmapped gets the gray `info` icon.
pub fn activity_icon(kind: &ActivityType) -> ActivityIcon {
    match kind {
        ActivityType::TransferApproved => ActivityIcon {
            background: "bg-green-100",
            color: "text-[#28A745]",
            icon: "check",
        },
        ActivityType::TransferRejected => ActivityIcon {
            background: "bg-red-100",
            color: "text-[#DC3545]",
            icon: "times",
        },
        ActivityType::InventoryUpdated => ActivityIcon {
            background: "bg-blue-100",
            color: "text-blue-600",
            icon: "sync",
        },
        ActivityType::Other | ActivityType::Unrecognised(_) => ActivityIcon {
            background: "bg-gray-100",
            color: "text-gray-500",
            icon: "info",
        },
    }
}

/// Rendered activity row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    /// Row heading (the description).
    pub description: String,
    /// `"{actor} • {time}"` line.
    pub byline: String,
    /// Icon styling.
    pub icon: ActivityIcon,
}

impl From<&Activity> for ActivityItem {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description.clone(),
            byline: format!("{} • {}", activity.actor, activity.time_ago),
            icon: activity_icon(&activity.kind),
        }
    }
}
