//! Transfer status badge.

use crate::domain::TransferStatus;

use super::class_names;

/// Classes shared by every badge.
pub const BADGE_BASE_CLASSES: &str = "inline-flex px-2 py-1 text-xs font-medium rounded-full";

/// Style and label for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusBadge {
    /// Background classes.
    pub background: &'static str,
    /// Foreground text class.
    pub text: &'static str,
    /// Visible label.
    pub label: &'static str,
}

impl StatusBadge {
    /// Full class list, with optional caller classes appended.
    pub fn class_name(&self, extra: Option<&str>) -> String {
        class_names([BADGE_BASE_CLASSES, self.background, self.text, extra.unwrap_or_default()])
    }
}

/// Badge for `status`. Unknown statuses get the neutral `Unknown` badge.
pub fn status_badge(status: &TransferStatus) -> StatusBadge {
    match status {
        TransferStatus::Pending => StatusBadge {
            background: "bg-[#FFC107] bg-opacity-20",
            text: "text-[#FFC107]",
            label: "Pending",
        },
        TransferStatus::Approved => StatusBadge {
            background: "bg-[#28A745] bg-opacity-20",
            text: "text-[#28A745]",
            label: "Approved",
        },
        TransferStatus::Rejected => StatusBadge {
            background: "bg-[#DC3545] bg-opacity-20",
            text: "text-[#DC3545]",
            label: "Rejected",
        },
        TransferStatus::Unrecognised(_) => StatusBadge {
            background: "bg-gray-200",
            text: "text-gray-800",
            label: "Unknown",
        },
    }
}
