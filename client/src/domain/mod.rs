//! Domain primitives, stores and ports.
//!
//! Purpose: define the strongly typed records the dashboard shows and the two
//! stateful stores (session and preferences). Stores reach the outside world
//! only through the traits in [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure payload.
//! - User: the signed-in identity persisted under `handreceiptUser`.
//! - SessionStore / PreferenceStore: the stateful stores.

pub mod activity;
pub mod auth;
pub mod error;
pub mod notification;
pub mod ports;
pub mod preferences;
pub mod preferences_service;
pub mod session_service;
pub mod transfer;
pub mod user;
mod wire_enum;

pub use self::activity::{Activity, ActivityType};
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::notification::{Notification, NotificationType};
pub use self::preferences::{
    ParseThemeError, Preferences, Theme, parse_sidebar_flag, sidebar_flag_text,
};
pub use self::preferences_service::{PreferenceStore, SIDEBAR_STORAGE_KEY, THEME_STORAGE_KEY};
pub use self::session_service::{SessionStore, USER_STORAGE_KEY};
pub use self::transfer::{InventoryItem, InventoryStatus, Transfer, TransferStatus};
pub use self::user::{User, UserId, UserValidationError};

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use handreceipt::domain::{DomainResult, Error};
///
/// fn refuse() -> DomainResult<()> {
///     Err(Error::unauthorized("Invalid credentials"))
/// }
/// assert!(refuse().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
