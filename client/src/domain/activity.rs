//! Activity log records.
//!
//! Activities are read from an external audit log and never created or
//! mutated by the client. The relative-time label arrives precomputed.

use serde::{Deserialize, Serialize};

use super::wire_enum::wire_enum;

wire_enum! {
    /// Kind of event recorded in the activity log.
    pub enum ActivityType {
        /// A transfer request was approved.
        TransferApproved => "transfer-approved",
        /// A transfer request was rejected.
        TransferRejected => "transfer-rejected",
        /// Inventory counts or assignments changed.
        InventoryUpdated => "inventory-updated",
        /// Any other recorded event.
        Other => "other",
    }
}

/// One entry of the activity log.
///
/// Wire names follow the log export: the actor is `user` and the label is
/// `timeAgo`.
///
/// # Examples
/// ```
/// use handreceipt::domain::{Activity, ActivityType};
///
/// let activity: Activity = serde_json::from_str(r#"{
///     "id": "act-1",
///     "type": "transfer-approved",
///     "description": "Transfer approved: IOTV",
///     "user": "From: 1SG Johnson",
///     "timeAgo": "2 hours ago"
/// }"#).unwrap();
/// assert_eq!(activity.kind, ActivityType::TransferApproved);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Log entry identifier.
    pub id: String,
    /// Event kind.
    #[serde(rename = "type")]
    pub kind: ActivityType,
    /// Free-text description, used as the row title.
    pub description: String,
    /// Who performed or received the action.
    #[serde(rename = "user")]
    pub actor: String,
    /// Precomputed relative-time label such as `2 hours ago`.
    pub time_ago: String,
}

impl Activity {
    /// Convenience constructor used by fixtures and the harness.
    pub fn new(
        id: impl Into<String>,
        kind: ActivityType,
        description: impl Into<String>,
        actor: impl Into<String>,
        time_ago: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            description: description.into(),
            actor: actor.into(),
            time_ago: time_ago.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn unknown_type_decodes_into_fallback() {
        let activity: Activity = serde_json::from_value(json!({
            "id": "act-9",
            "type": "maintenance-scheduled",
            "description": "PMCS scheduled",
            "user": "By: SFC Martinez",
            "timeAgo": "1 week ago"
        }))
        .expect("unknown types still decode");

        assert_eq!(
            activity.kind,
            ActivityType::Unrecognised("maintenance-scheduled".to_owned())
        );
    }

    #[rstest]
    fn serialises_with_log_field_names() {
        let activity = Activity::new(
            "act-3",
            ActivityType::InventoryUpdated,
            "Inventory updated: +5 IFAK",
            "By: 1LT Parker",
            "Yesterday",
        );
        let value = serde_json::to_value(&activity).expect("serialise");
        assert_eq!(value["type"], "inventory-updated");
        assert_eq!(value["user"], "By: 1LT Parker");
        assert_eq!(value["timeAgo"], "Yesterday");
    }
}
