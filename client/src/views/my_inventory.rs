//! "My Inventory" dashboard panel.
//!
//! Lists the holder's items, narrowed by a search term matched without regard
//! to case against the item name or serial number. Each row offers a transfer
//! request.

use tracing::info;

use crate::domain::{Error, InventoryItem};

use super::Toast;

/// Placeholder shown when no item matches.
pub const NO_ITEMS_FOUND: &str = "No items found";
/// Hint text of the search box.
pub const SEARCH_PLACEHOLDER: &str = "Search my inventory";

/// A row in the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    /// Item identifier; the transfer-request key.
    pub id: String,
    /// Item nomenclature.
    pub name: String,
    /// `SN: <serial>` line.
    pub serial_line: String,
}

/// Panel contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryView {
    /// Items matching the search.
    Rows(Vec<InventoryRow>),
    /// Placeholder.
    Empty(&'static str),
}

/// Panel state: the holder's items and the current search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MyInventory {
    items: Vec<InventoryItem>,
    search: String,
}

impl MyInventory {
    /// Panel over `items` with an empty search.
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self {
            items,
            search: String::new(),
        }
    }

    /// Replace the search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Current search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Items matching the search, in input order. An empty term matches all.
    pub fn matching(&self) -> impl Iterator<Item = &InventoryItem> {
        let needle = self.search.to_lowercase();
        self.items.iter().filter(move |item| {
            item.name.to_lowercase().contains(&needle)
                || item.serial_number.to_lowercase().contains(&needle)
        })
    }

    /// Render the panel.
    pub fn view(&self) -> InventoryView {
        let rows: Vec<InventoryRow> = self
            .matching()
            .map(|item| InventoryRow {
                id: item.id.clone(),
                name: item.name.clone(),
                serial_line: format!("SN: {}", item.serial_number),
            })
            .collect();
        if rows.is_empty() {
            InventoryView::Empty(NO_ITEMS_FOUND)
        } else {
            InventoryView::Rows(rows)
        }
    }

    /// Start a transfer request for item `id`.
    ///
    /// The item stays on the list; the request is only acknowledged.
    pub fn request_transfer(&self, id: &str) -> Result<Toast, Error> {
        let item = self
            .items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::invalid_request(format!("unknown inventory item: {id}")))?;
        info!(item_id = id, "transfer request initiated");
        Ok(Toast {
            title: "Transfer Initiated",
            description: format!("Transfer request initiated for {}", item.name),
        })
    }
}
