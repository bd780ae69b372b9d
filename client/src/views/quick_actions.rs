//! Dashboard quick-action grid.

use super::Route;

/// What pressing a quick action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickActionTarget {
    /// Open the QR scanner modal.
    OpenScanner,
    /// Navigate to a route.
    Navigate(Route),
}

/// One button of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    /// Icon name.
    pub icon: &'static str,
    /// Button label.
    pub label: &'static str,
    /// Icon circle background class.
    pub background: &'static str,
    /// Press behaviour.
    pub target: QuickActionTarget,
}

/// The four dashboard actions, in display order.
pub static QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        icon: "qrcode",
        label: "Scan QR",
        background: "bg-blue-100",
        target: QuickActionTarget::OpenScanner,
    },
    QuickAction {
        icon: "exchange-alt",
        label: "Request Transfer",
        background: "bg-amber-100",
        target: QuickActionTarget::Navigate(Route::Transfers),
    },
    QuickAction {
        icon: "search",
        label: "Find Item",
        background: "bg-green-100",
        target: QuickActionTarget::Navigate(Route::Inventory),
    },
    QuickAction {
        icon: "file-export",
        label: "Export Report",
        background: "bg-red-100",
        target: QuickActionTarget::Navigate(Route::AuditLog),
    },
];

/// Look up an action by its label.
pub fn quick_action(label: &str) -> Option<&'static QuickAction> {
    QUICK_ACTIONS.iter().find(|action| action.label == label)
}
