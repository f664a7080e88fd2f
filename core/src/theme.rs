//! Dark/light theme flag
//!
//! The only persisted preference on the site. Stored as a plain string in
//! browser local storage; anything unrecognized falls back to dark.

use serde::{Deserialize, Serialize};

/// Local-storage key for the persisted theme choice.
pub const STORAGE_KEY: &str = "folio-theme";

/// Body class applied in light mode. Dark is the unclassed default.
pub const LIGHT_CLASS: &str = "light-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// String form written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored value. `None` or anything unrecognized is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_light(&self) -> bool {
        matches!(self, Theme::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_storage_form() {
        assert_eq!(Theme::from_stored(Some(Theme::Light.as_str())), Theme::Light);
        assert_eq!(Theme::from_stored(Some(Theme::Dark.as_str())), Theme::Dark);
    }

    #[test]
    fn unknown_stored_values_fall_back_to_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
    }

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert!(Theme::Light.is_light());
        assert!(!Theme::Dark.is_light());
    }
}
