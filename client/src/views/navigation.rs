//! Application routes.

use std::fmt;

/// Top-level pages reachable from navigation and quick actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Dashboard summary.
    Dashboard,
    /// QR scanning page.
    Scan,
    /// Transfer requests.
    Transfers,
    /// Hand receipt inventory.
    Inventory,
    /// Full activity history.
    AuditLog,
    /// User settings.
    Settings,
}

impl Route {
    /// Every route, in sidebar order.
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Scan,
        Self::Transfers,
        Self::Inventory,
        Self::AuditLog,
        Self::Settings,
    ];

    /// URL path of the route.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Scan => "/scan",
            Self::Transfers => "/transfers",
            Self::Inventory => "/inventory",
            Self::AuditLog => "/audit-log",
            Self::Settings => "/settings",
        }
    }

    /// Route for an exact path. Unknown paths render the not-found page.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
