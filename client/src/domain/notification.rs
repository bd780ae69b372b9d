//! Notification records shown in the notification panel.

use serde::{Deserialize, Serialize};

use super::wire_enum::wire_enum;

wire_enum! {
    /// Category of a notification.
    pub enum NotificationType {
        /// Someone asks to transfer an item to the holder.
        TransferRequest => "transfer-request",
        /// A transfer the holder requested was approved.
        TransferApproved => "transfer-approved",
        /// Scheduled maintenance or other system notice.
        SystemAlert => "system-alert",
        /// Anything else.
        Other => "other",
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Notification identifier.
    pub id: String,
    /// Category.
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Precomputed relative-time label.
    pub time_ago: String,
    /// Whether the holder has seen it.
    pub read: bool,
}
