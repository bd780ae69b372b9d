//! Port for the document-level surface that carries the theme marker.

use crate::domain::Theme;

/// The root element whose class list selects the active palette.
///
/// Applying a theme removes every theme class before adding the new one, so
/// at most one marker is present afterwards.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeSurface: Send + Sync {
    /// Replace the current theme marker with `theme`.
    fn apply(&self, theme: Theme);
}
