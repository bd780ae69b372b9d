//! Port for the operating environment's colour-scheme preference.

/// Reports whether the environment asks for a dark colour scheme.
///
/// In a browser this is the `prefers-color-scheme: dark` media query; the
/// harness reads it from configuration.
#[cfg_attr(test, mockall::automock)]
pub trait ColorSchemeProbe: Send + Sync {
    /// `true` when a dark scheme is preferred.
    fn prefers_dark(&self) -> bool;
}

/// Probe returning a fixed answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedColorScheme {
    prefers_dark: bool,
}

impl FixedColorScheme {
    /// Build a probe that always answers `prefers_dark`.
    pub const fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark }
    }
}

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}
