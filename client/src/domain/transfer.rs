//! Transfer requests and inventory records.
//!
//! Both are value records handed to the client by external collaborators.
//! Transfers additionally support the approve/reject transitions used by the
//! pending transfers board.

use serde::{Deserialize, Serialize};

use super::wire_enum::wire_enum;

wire_enum! {
    /// Lifecycle state of a transfer request.
    pub enum TransferStatus {
        /// Awaiting a decision.
        Pending => "pending",
        /// Accepted by the receiving hand receipt holder.
        Approved => "approved",
        /// Declined.
        Rejected => "rejected",
    }
}

wire_enum! {
    /// Accountability state of an inventory item.
    pub enum InventoryStatus {
        /// Assigned and on hand.
        Active => "active",
        /// Awaiting assignment or verification.
        Pending => "pending",
        /// Handed to another holder.
        Transferred => "transferred",
    }
}

/// A request to move an item between hand receipt holders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Transfer identifier.
    pub id: String,
    /// Item nomenclature.
    pub name: String,
    /// Item serial number.
    pub serial_number: String,
    /// Current holder.
    pub from: String,
    /// Receiving holder.
    pub to: String,
    /// Request date as displayed (e.g. `15JUN2023`).
    pub date: String,
    /// Current status.
    pub status: TransferStatus,
}

impl Transfer {
    /// Whether the transfer still awaits a decision.
    pub fn is_pending(&self) -> bool {
        self.status == TransferStatus::Pending
    }

    /// Copy of this transfer carrying `status`.
    pub fn with_status(&self, status: TransferStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// An item on the holder's hand receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Item identifier.
    pub id: String,
    /// Item nomenclature.
    pub name: String,
    /// Item serial number.
    pub serial_number: String,
    /// Date the item was signed for.
    pub assigned_date: String,
    /// Accountability status.
    pub status: InventoryStatus,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn transfer(status: TransferStatus) -> Transfer {
        Transfer {
            id: "tr-1".to_owned(),
            name: "M4A1 Carbine".to_owned(),
            serial_number: "W123456".to_owned(),
            from: "SFC Martinez".to_owned(),
            to: "CPT John Doe".to_owned(),
            date: "15JUN2023".to_owned(),
            status,
        }
    }

    #[rstest]
    fn with_status_keeps_every_other_field() {
        let original = transfer(TransferStatus::Pending);
        let approved = original.with_status(TransferStatus::Approved);

        assert!(original.is_pending());
        assert!(!approved.is_pending());
        assert_eq!(approved.serial_number, original.serial_number);
        assert_eq!(approved.to, original.to);
    }

    #[rstest]
    fn inventory_item_decodes_camel_case_fields() {
        let item: InventoryItem = serde_json::from_value(json!({
            "id": "1",
            "name": "ACH",
            "serialNumber": "ACH-45678123",
            "assignedDate": "15JAN2023",
            "status": "active"
        }))
        .expect("decode inventory item");

        assert_eq!(item.serial_number, "ACH-45678123");
        assert_eq!(item.status, InventoryStatus::Active);
    }
}
