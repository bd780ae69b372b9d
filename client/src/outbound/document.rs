//! In-memory document class list acting as the theme surface.

use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

use crate::domain::Theme;
use crate::domain::ports::ThemeSurface;

/// Class list of the document root element.
///
/// Unrelated classes are left alone; only the theme markers are swapped.
#[derive(Debug, Default)]
pub struct DocumentClassList {
    classes: RwLock<BTreeSet<String>>,
}

impl DocumentClassList {
    /// Empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary class.
    pub fn add(&self, class: impl Into<String>) {
        self.write().insert(class.into());
    }

    /// Whether `class` is present.
    pub fn contains(&self, class: &str) -> bool {
        self.read().contains(class)
    }

    /// Theme whose marker is currently present, if any.
    pub fn active_theme(&self) -> Option<Theme> {
        Theme::ALL
            .into_iter()
            .find(|theme| self.contains(theme.as_str()))
    }

    // Writers never panic mid-update, so a poisoned set is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, BTreeSet<String>> {
        self.classes.read().unwrap_or_else(|poisoned| {
            warn!("document class list lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeSet<String>> {
        self.classes.write().unwrap_or_else(|poisoned| {
            warn!("document class list lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl ThemeSurface for DocumentClassList {
    fn apply(&self, theme: Theme) {
        let mut classes = self.write();
        for marker in Theme::ALL {
            classes.remove(marker.as_str());
        }
        classes.insert(theme.as_str().to_owned());
    }
}
