//! UI preference values: colour theme and sidebar state.
//!
//! The persisted forms are plain strings under the `theme` and
//! `sidebarCollapsed` keys, so both types expose their storage text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Colour theme applied to the document surface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl Theme {
    /// Every theme, in the order their class markers are cleared.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Storage and class-marker text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored theme string is not `light` or `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Snapshot of the current UI preferences.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Active colour theme.
    pub theme: Theme,
    /// Whether the navigation sidebar is collapsed.
    pub sidebar_collapsed: bool,
}

/// Parse the persisted sidebar flag. Only the exact text `"true"` counts.
pub fn parse_sidebar_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Storage text for the sidebar flag.
pub const fn sidebar_flag_text(collapsed: bool) -> &'static str {
    if collapsed { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Theme::Light, Theme::Dark)]
    #[case(Theme::Dark, Theme::Light)]
    fn toggling_flips_and_round_trips(#[case] start: Theme, #[case] expected: Theme) {
        assert_eq!(start.toggled(), expected);
        assert_eq!(start.toggled().toggled(), start);
    }

    #[rstest]
    #[case("Dark")]
    #[case("")]
    #[case("solarized")]
    fn rejects_anything_but_exact_theme_names(#[case] raw: &str) {
        assert!(raw.parse::<Theme>().is_err());
    }

    #[rstest]
    #[case(Some("true"), true)]
    #[case(Some("false"), false)]
    #[case(Some("TRUE"), false)]
    #[case(Some("1"), false)]
    #[case(None, false)]
    fn sidebar_flag_is_true_only_for_exact_text(#[case] raw: Option<&str>, #[case] expected: bool) {
        assert_eq!(parse_sidebar_flag(raw), expected);
    }
}
