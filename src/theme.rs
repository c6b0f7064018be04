use std::fmt;

use log::{debug, warn};
use thiserror::Error;
use web_sys::window;

use crate::config::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ThemePreference::Dark),
            "light" => Some(ThemePreference::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("writing to local storage failed: {0}")]
    Write(String),
}

/// A stored preference wins; otherwise follow the system colour scheme.
pub fn resolve(stored: Option<&str>, system_dark: bool) -> ThemePreference {
    match stored.and_then(ThemePreference::parse) {
        Some(pref) => pref,
        None if system_dark => ThemePreference::Dark,
        None => ThemePreference::Light,
    }
}

/// Reads the startup theme. Call once before the first render.
pub fn init() -> ThemePreference {
    let stored = window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok())
        .flatten();
    let pref = resolve(stored.as_deref(), media_matches("(prefers-color-scheme: dark)"));
    debug!("initial theme {} (stored: {:?})", pref, stored);
    pref
}

/// Adds or removes the `dark` class on `<html>`.
pub fn apply(pref: ThemePreference) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let result = if pref.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if let Err(err) = result {
            warn!("could not switch theme class: {:?}", err);
        }
    }
}

pub fn persist(pref: ThemePreference) -> Result<(), StorageError> {
    let storage = window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .ok_or(StorageError::Unavailable)?;
    storage
        .set_item(THEME_STORAGE_KEY, pref.as_str())
        .map_err(|err| StorageError::Write(format!("{:?}", err)))
}

pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok())
        .flatten()
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_value_overrides_system() {
        assert_eq!(resolve(Some("light"), true), ThemePreference::Light);
        assert_eq!(resolve(Some("dark"), false), ThemePreference::Dark);
    }

    #[test]
    fn falls_back_to_system_preference() {
        assert_eq!(resolve(None, true), ThemePreference::Dark);
        assert_eq!(resolve(None, false), ThemePreference::Light);
    }

    #[test]
    fn garbage_in_storage_is_ignored() {
        assert_eq!(resolve(Some("Dark"), false), ThemePreference::Light);
        assert_eq!(resolve(Some(""), true), ThemePreference::Dark);
    }

    #[test]
    fn stored_literals_round_trip() {
        for pref in [ThemePreference::Dark, ThemePreference::Light] {
            assert_eq!(ThemePreference::parse(pref.as_str()), Some(pref));
            assert_ne!(pref.toggled(), pref);
        }
    }
}
