//! View models consumed by a renderer.
//!
//! Every mapping here is a total function: unknown enum values degrade to a
//! neutral style instead of failing.

pub mod activity_feed;
pub mod activity_item;
pub mod layout;
pub mod my_inventory;
pub mod navigation;
pub mod notifications;
pub mod pending_transfers;
pub mod quick_actions;
pub mod stat_card;
pub mod status_badge;

pub use activity_feed::{ActivityFeed, FEED_LIMIT, FeedBody, FeedRow, is_verified};
pub use activity_item::{ActivityIcon, ActivityItem, activity_icon};
pub use layout::{ContainerDisplay, ContainerSize, PageLayout, PageWidth, ResponsiveContainer};
pub use my_inventory::{InventoryRow, InventoryView, MyInventory};
pub use navigation::Route;
pub use notifications::{
    NotificationActions, NotificationIcon, NotificationPanel, NotificationTab,
    notification_actions, notification_icon,
};
pub use pending_transfers::{PendingRow, PendingTransfersBoard, PendingView, Toast};
pub use quick_actions::{QUICK_ACTIONS, QuickAction, QuickActionTarget, quick_action};
pub use stat_card::{StatCard, StatChange, TrendDirection, TrendLine, trend_line};
pub use status_badge::{StatusBadge, status_badge};

/// Join class fragments with single spaces, skipping blank ones.
///
/// # Examples
/// ```
/// use handreceipt::views::class_names;
///
/// assert_eq!(class_names(["p-4", "", " mr-2 "]), "p-4 mr-2");
/// ```
pub fn class_names<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
