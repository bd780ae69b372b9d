//! Pending transfer requests board.

use tracing::info;

use crate::domain::{Error, Transfer, TransferStatus};

use super::{StatusBadge, status_badge};

/// Placeholder shown when nothing awaits a decision.
pub const NO_PENDING_TRANSFERS: &str = "No pending transfer requests";

/// Confirmation shown after a dashboard action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Heading.
    pub title: &'static str,
    /// Body text.
    pub description: String,
}

/// A row on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRow {
    /// Transfer identifier; the approve/reject key.
    pub id: String,
    /// Item nomenclature.
    pub name: String,
    /// `SN: <serial>` line.
    pub serial_line: String,
    /// Status badge.
    pub badge: StatusBadge,
}

/// Board contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingView {
    /// Transfers awaiting a decision.
    Rows(Vec<PendingRow>),
    /// Placeholder.
    Empty(&'static str),
}

/// Board state: every known transfer, pending or decided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingTransfersBoard {
    transfers: Vec<Transfer>,
}

impl PendingTransfersBoard {
    /// Board over `transfers`.
    pub fn new(transfers: Vec<Transfer>) -> Self {
        Self { transfers }
    }

    /// Transfers still pending, in input order.
    pub fn pending(&self) -> impl Iterator<Item = &Transfer> {
        self.transfers.iter().filter(|transfer| transfer.is_pending())
    }

    /// Approve transfer `id`.
    pub fn approve(&mut self, id: &str) -> Result<Toast, Error> {
        self.decide(id, TransferStatus::Approved)?;
        Ok(Toast {
            title: "Transfer Approved",
            description: "The transfer request has been approved".to_owned(),
        })
    }

    /// Reject transfer `id`.
    pub fn reject(&mut self, id: &str) -> Result<Toast, Error> {
        self.decide(id, TransferStatus::Rejected)?;
        Ok(Toast {
            title: "Transfer Rejected",
            description: "The transfer request has been rejected".to_owned(),
        })
    }

    fn decide(&mut self, id: &str, status: TransferStatus) -> Result<(), Error> {
        let transfer = self
            .transfers
            .iter_mut()
            .find(|transfer| transfer.id == id)
            .ok_or_else(|| Error::invalid_request(format!("unknown transfer: {id}")))?;
        info!(transfer_id = id, status = %status, "transfer decided");
        transfer.status = status;
        Ok(())
    }

    /// Render the board.
    pub fn view(&self) -> PendingView {
        let rows: Vec<PendingRow> = self
            .pending()
            .map(|transfer| PendingRow {
                id: transfer.id.clone(),
                name: transfer.name.clone(),
                serial_line: format!("SN: {}", transfer.serial_number),
                badge: status_badge(&transfer.status),
            })
            .collect();
        if rows.is_empty() {
            PendingView::Empty(NO_PENDING_TRANSFERS)
        } else {
            PendingView::Rows(rows)
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::{fixture, rstest};

    fn transfer(id: &str, status: TransferStatus) -> Transfer {
        Transfer {
            id: id.to_owned(),
            name: format!("Item {id}"),
            serial_number: format!("SN-{id}"),
            from: "SFC Martinez".to_owned(),
            to: "CPT John Doe".to_owned(),
            date: "15JUN2023".to_owned(),
            status,
        }
    }

    #[fixture]
    fn board() -> PendingTransfersBoard {
        PendingTransfersBoard::new(vec![
            transfer("1", TransferStatus::Pending),
            transfer("2", TransferStatus::Approved),
            transfer("3", TransferStatus::Pending),
        ])
    }

    #[rstest]
    fn decisions_remove_rows_until_placeholder(mut board: PendingTransfersBoard) {
        let PendingView::Rows(rows) = board.view() else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].serial_line, "SN: SN-1");
        assert_eq!(rows[0].badge.label, "Pending");

        let toast = board.approve("1").expect("approve");
        assert_eq!(toast.title, "Transfer Approved");
        board.reject("3").expect("reject");

        assert_eq!(board.view(), PendingView::Empty(NO_PENDING_TRANSFERS));
    }

    #[rstest]
    fn unknown_id_is_an_invalid_request(mut board: PendingTransfersBoard) {
        let err = board.approve("99").expect_err("unknown id");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(board.pending().count(), 2);
    }
}
