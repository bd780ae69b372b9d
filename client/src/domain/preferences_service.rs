//! Theme and sidebar preference store.
//!
//! Resolves the initial theme from storage, then the environment's colour
//! scheme, then light. Every change is persisted before it is reflected in
//! memory and on the document surface.

use std::sync::Arc;

use tracing::{debug, info};

use super::session_service::map_storage_error;
use crate::domain::ports::{ColorSchemeProbe, KeyValueStore, ThemeSurface};
use crate::domain::{Error, Preferences, Theme, parse_sidebar_flag, sidebar_flag_text};

/// Storage key for the colour theme (`light` or `dark`).
pub const THEME_STORAGE_KEY: &str = "theme";
/// Storage key for the sidebar flag (`true` or `false`).
pub const SIDEBAR_STORAGE_KEY: &str = "sidebarCollapsed";

/// Preference store backed by injected ports.
pub struct PreferenceStore<S: ?Sized, T: ?Sized> {
    storage: Arc<S>,
    surface: Arc<T>,
    current: Preferences,
}

impl<S, T> PreferenceStore<S, T>
where
    S: KeyValueStore + ?Sized,
    T: ThemeSurface + ?Sized,
{
    /// Resolve the initial preferences, apply the theme and write it back.
    ///
    /// A stored theme other than `light` or `dark` is ignored.
    pub fn load<P>(storage: Arc<S>, probe: &P, surface: Arc<T>) -> Result<Self, Error>
    where
        P: ColorSchemeProbe + ?Sized,
    {
        let stored_theme = storage.get(THEME_STORAGE_KEY).map_err(map_storage_error)?;
        let theme = resolve_theme(stored_theme.as_deref(), probe);
        let stored_sidebar = storage
            .get(SIDEBAR_STORAGE_KEY)
            .map_err(map_storage_error)?;
        let sidebar_collapsed = parse_sidebar_flag(stored_sidebar.as_deref());

        storage
            .set(THEME_STORAGE_KEY, theme.as_str())
            .map_err(map_storage_error)?;
        surface.apply(theme);
        debug!(%theme, sidebar_collapsed, "preferences loaded");

        Ok(Self {
            storage,
            surface,
            current: Preferences {
                theme,
                sidebar_collapsed,
            },
        })
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Result<Theme, Error> {
        let next = self.current.theme.toggled();
        self.storage
            .set(THEME_STORAGE_KEY, next.as_str())
            .map_err(map_storage_error)?;
        self.surface.apply(next);
        self.current.theme = next;
        info!(theme = %next, "theme toggled");
        Ok(next)
    }

    /// Flip the sidebar collapsed flag. Returns the new value.
    pub fn toggle_sidebar(&mut self) -> Result<bool, Error> {
        let next = !self.current.sidebar_collapsed;
        self.storage
            .set(SIDEBAR_STORAGE_KEY, sidebar_flag_text(next))
            .map_err(map_storage_error)?;
        self.current.sidebar_collapsed = next;
        info!(sidebar_collapsed = next, "sidebar toggled");
        Ok(next)
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.current.theme
    }

    /// Current sidebar flag.
    pub fn sidebar_collapsed(&self) -> bool {
        self.current.sidebar_collapsed
    }

    /// Snapshot of both preferences.
    pub fn preferences(&self) -> Preferences {
        self.current
    }
}

fn resolve_theme<P>(stored: Option<&str>, probe: &P) -> Theme
where
    P: ColorSchemeProbe + ?Sized,
{
    if let Some(theme) = stored.and_then(|raw| raw.parse::<Theme>().ok()) {
        return theme;
    }
    if probe.prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}
