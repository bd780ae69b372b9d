//! Test utilities shared by unit and behaviour tests.
//!
//! Compiled for `cfg(test)` and when the `test-support` feature is enabled.

use std::sync::Arc;

use camino::Utf8PathBuf;
use tempfile::TempDir;

use crate::app_state::AppPorts;
use crate::domain::ports::{FixedColorScheme, FixtureCredentialVerifier};
use crate::domain::{
    Activity, ActivityType, InventoryItem, InventoryStatus, Notification, NotificationType,
    Transfer, TransferStatus,
};
use crate::outbound::document::DocumentClassList;
use crate::outbound::storage::FileKeyValueStore;

/// A file-backed store inside a temporary directory removed on drop.
pub struct TempStorage {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl TempStorage {
    /// Create a fresh temporary storage root.
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let root = Utf8PathBuf::from_path_buf(dir.path().join("storage")).map_err(|path| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("non UTF-8 temp path: {}", path.display()),
            )
        })?;
        Ok(Self { _dir: dir, root })
    }

    /// Storage directory path.
    pub fn root(&self) -> &Utf8PathBuf {
        &self.root
    }

    /// Open a store over the directory. Opening twice simulates a restart.
    pub fn open(&self) -> std::io::Result<FileKeyValueStore> {
        FileKeyValueStore::open(&self.root)
    }

    /// Fixture ports over a freshly opened store and the given document.
    pub fn ports(
        &self,
        document: Arc<DocumentClassList>,
        prefers_dark: bool,
    ) -> std::io::Result<AppPorts> {
        Ok(AppPorts {
            verifier: Arc::new(FixtureCredentialVerifier),
            storage: Arc::new(self.open()?),
            color_scheme: Arc::new(FixedColorScheme::new(prefers_dark)),
            theme_surface: document,
        })
    }
}

/// Sample newest-first activity log with one entry of each kind and a
/// trailing unrecognised one.
pub fn sample_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "1",
            ActivityType::TransferApproved,
            "Transfer approved: M4A1 Carbine",
            "From: SFC Martinez",
            "2 hours ago",
        ),
        Activity::new(
            "2",
            ActivityType::InventoryUpdated,
            "Inventory updated: +5 IFAK",
            "By: 1LT Parker",
            "Yesterday",
        ),
        Activity::new(
            "3",
            ActivityType::TransferRejected,
            "Transfer rejected: PVS-14",
            "By: CPT Rodriguez",
            "2 days ago",
        ),
        Activity::new(
            "4",
            ActivityType::Other,
            "Sensitive items inventory completed",
            "By: SSG Lee",
            "3 days ago",
        ),
        Activity::new(
            "5",
            ActivityType::from("maintenance-scheduled"),
            "PMCS scheduled: HMMWV",
            "By: SGT Kim",
            "1 week ago",
        ),
    ]
}

/// Two pending transfer requests and one already approved.
pub fn sample_transfers() -> Vec<Transfer> {
    let transfer = |id: &str, name: &str, serial: &str, status: TransferStatus| Transfer {
        id: id.to_owned(),
        name: name.to_owned(),
        serial_number: serial.to_owned(),
        from: "SFC Martinez".to_owned(),
        to: "CPT Rodriguez".to_owned(),
        date: "15JUN2023".to_owned(),
        status,
    };
    vec![
        transfer("TR-1001", "M4A1 Carbine", "W123456", TransferStatus::Pending),
        transfer("TR-1002", "AN/PVS-14", "PVS-98765", TransferStatus::Pending),
        transfer("TR-1003", "ACOG TA31RCO", "AC-44310", TransferStatus::Approved),
    ]
}

/// Four notifications, two of them unread.
pub fn sample_notifications() -> Vec<Notification> {
    let notification = |id: &str, kind: NotificationType, title: &str, read: bool| Notification {
        id: id.to_owned(),
        kind,
        title: title.to_owned(),
        message: format!("{title} details"),
        time_ago: "10 minutes ago".to_owned(),
        read,
    };
    vec![
        notification("1", NotificationType::TransferRequest, "Transfer Request", false),
        notification("2", NotificationType::TransferApproved, "Transfer Approved", false),
        notification("3", NotificationType::SystemAlert, "Maintenance Due", true),
        notification("4", NotificationType::TransferRequest, "Transfer Request", true),
    ]
}

/// Three items on the holder's hand receipt.
pub fn sample_inventory() -> Vec<InventoryItem> {
    let item = |id: &str, name: &str, serial: &str, status: InventoryStatus| InventoryItem {
        id: id.to_owned(),
        name: name.to_owned(),
        serial_number: serial.to_owned(),
        assigned_date: "01JAN2023".to_owned(),
        status,
    };
    vec![
        item("INV-1", "M4A1 Carbine", "W123456", InventoryStatus::Active),
        item("INV-2", "AN/PVS-14 Night Vision", "PVS-98765", InventoryStatus::Active),
        item("INV-3", "ACOG TA31RCO", "AC-44310", InventoryStatus::Pending),
    ]
}
