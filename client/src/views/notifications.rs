//! Notification panel and dashboard preview.

use crate::domain::{Notification, NotificationType};

/// Notifications shown in the dashboard card.
pub const DASHBOARD_PREVIEW_LIMIT: usize = 3;

/// Heading and text of the empty state.
pub const EMPTY_NOTIFICATIONS: (&str, &str) = ("No notifications", "You're all caught up!");

/// Panel tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTab {
    /// Everything.
    All,
    /// Transfer requests only.
    Transfers,
    /// Everything that is not a transfer request.
    System,
}

impl NotificationTab {
    fn includes(self, kind: &NotificationType) -> bool {
        let is_request = *kind == NotificationType::TransferRequest;
        match self {
            Self::All => true,
            Self::Transfers => is_request,
            Self::System => !is_request,
        }
    }
}

/// Icon badge for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationIcon {
    /// Background class.
    pub background: &'static str,
    /// Foreground class.
    pub color: &'static str,
    /// Glyph shown inside the circle (`bell` names the bell icon).
    pub glyph: &'static str,
}

/// Icon for a notification type.
pub fn notification_icon(kind: &NotificationType) -> NotificationIcon {
    match kind {
        NotificationType::TransferRequest => NotificationIcon {
            background: "bg-blue-100",
            color: "text-blue-600",
            glyph: "↔",
        },
        NotificationType::TransferApproved => NotificationIcon {
            background: "bg-green-100",
            color: "text-green-600",
            glyph: "✓",
        },
        NotificationType::SystemAlert => NotificationIcon {
            background: "bg-yellow-100",
            color: "text-yellow-600",
            glyph: "!",
        },
        NotificationType::Other | NotificationType::Unrecognised(_) => NotificationIcon {
            background: "bg-gray-100",
            color: "text-gray-600",
            glyph: "bell",
        },
    }
}

/// Buttons rendered under a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationActions {
    /// Approve and reject buttons.
    Decide,
    /// A "View Details" link.
    ViewDetails,
    /// No buttons.
    None,
}

/// Buttons offered for a notification type.
pub fn notification_actions(kind: &NotificationType) -> NotificationActions {
    match kind {
        NotificationType::TransferRequest => NotificationActions::Decide,
        NotificationType::SystemAlert | NotificationType::Other => NotificationActions::ViewDetails,
        NotificationType::TransferApproved | NotificationType::Unrecognised(_) => {
            NotificationActions::None
        }
    }
}

/// State of the notification panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationPanel {
    notifications: Vec<Notification>,
}

impl NotificationPanel {
    /// Panel over newest-first notifications.
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    /// Notifications listed under `tab`, in input order.
    pub fn tab(&self, tab: NotificationTab) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|notification| tab.includes(&notification.kind))
            .collect()
    }

    /// Number of unread notifications.
    pub fn unread_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|notification| !notification.read)
            .count()
    }

    /// Mark every notification as read. Returns how many changed.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        changed
    }

    /// The first few notifications for the dashboard card.
    pub fn dashboard_preview(&self) -> &[Notification] {
        let end = self.notifications.len().min(DASHBOARD_PREVIEW_LIMIT);
        &self.notifications[..end]
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    fn notification(id: &str, kind: &str, read: bool) -> Notification {
        Notification {
            id: id.to_owned(),
            kind: NotificationType::from(kind),
            title: format!("title {id}"),
            message: format!("message {id}"),
            time_ago: "10 minutes ago".to_owned(),
            read,
        }
    }

    #[fixture]
    fn panel() -> NotificationPanel {
        NotificationPanel::new(vec![
            notification("1", "transfer-request", false),
            notification("2", "transfer-approved", false),
            notification("3", "system-alert", true),
            notification("4", "transfer-request", true),
            notification("5", "other", false),
        ])
    }

    #[rstest]
    #[case(NotificationTab::All, &["1", "2", "3", "4", "5"])]
    #[case(NotificationTab::Transfers, &["1", "4"])]
    #[case(NotificationTab::System, &["2", "3", "5"])]
    fn tabs_split_by_type(
        panel: NotificationPanel,
        #[case] tab: NotificationTab,
        #[case] expected: &[&str],
    ) {
        let ids: Vec<&str> = panel.tab(tab).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[rstest]
    fn mark_all_read_clears_unread_count(mut panel: NotificationPanel) {
        assert_eq!(panel.unread_count(), 3);
        assert_eq!(panel.mark_all_read(), 3);
        assert_eq!(panel.unread_count(), 0);
        assert_eq!(panel.mark_all_read(), 0);
    }

    #[rstest]
    fn dashboard_preview_takes_first_three(panel: NotificationPanel) {
        let ids: Vec<&str> = panel
            .dashboard_preview()
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert!(NotificationPanel::default().dashboard_preview().is_empty());
    }

    #[rstest]
    #[case("transfer-request", "↔", NotificationActions::Decide)]
    #[case("transfer-approved", "✓", NotificationActions::None)]
    #[case("system-alert", "!", NotificationActions::ViewDetails)]
    #[case("other", "bell", NotificationActions::ViewDetails)]
    #[case("maintenance-due", "bell", NotificationActions::None)]
    fn icons_and_actions(
        #[case] kind: &str,
        #[case] glyph: &str,
        #[case] actions: NotificationActions,
    ) {
        let kind = NotificationType::from(kind);
        assert_eq!(notification_icon(&kind).glyph, glyph);
        assert_eq!(notification_actions(&kind), actions);
    }
}
