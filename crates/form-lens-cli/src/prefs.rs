// crates/form-lens-cli/src/prefs.rs
// ============================================================================
// Module: Locale Preference Store
// Description: Persistence of the selected display locale across sessions.
// Purpose: Load and store the locale file under the user config directory.
// Dependencies: form-lens-core, thiserror
// ============================================================================

//! ## Overview
//! The selected locale survives sessions as a one-line file named `locale`
//! under the config directory (`FORM_LENS_CONFIG_DIR`, defaulting to
//! `~/.config/form-lens`). An absent or unreadable file means "use the
//! startup resolution order", never an error; only explicit stores report
//! failures.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use form_lens_core::Locale;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "FORM_LENS_CONFIG_DIR";

/// File name carrying the persisted locale code.
const LOCALE_FILE: &str = "locale";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Faults raised while persisting the locale preference.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// No config directory could be resolved.
    #[error("no config directory available")]
    NoConfigDir,
    /// The preference file could not be written.
    #[error("failed to write {path}: {message}")]
    Write {
        /// Path of the preference file.
        path: String,
        /// Underlying I/O error text.
        message: String,
    },
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Resolves the config directory from the environment.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        let dir = dir.trim();
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    std::env::var("HOME").ok().filter(|home| !home.is_empty()).map(|home| {
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("form-lens");
        path
    })
}

/// Loads the persisted locale, if any.
#[must_use]
pub fn load_locale() -> Option<Locale> {
    config_dir().and_then(|dir| load_locale_from(&dir))
}

/// Loads the persisted locale from a specific config directory.
#[must_use]
pub fn load_locale_from(dir: &Path) -> Option<Locale> {
    let contents = fs::read_to_string(dir.join(LOCALE_FILE)).ok()?;
    Locale::parse(&contents)
}

/// Persists the locale choice for future sessions.
///
/// # Errors
///
/// Returns [`PrefsError::NoConfigDir`] when no config directory can be
/// resolved and [`PrefsError::Write`] on I/O failures.
pub fn store_locale(locale: Locale) -> Result<(), PrefsError> {
    let dir = config_dir().ok_or(PrefsError::NoConfigDir)?;
    store_locale_in(&dir, locale)
}

/// Persists the locale choice into a specific config directory.
///
/// # Errors
///
/// Returns [`PrefsError::Write`] on I/O failures.
pub fn store_locale_in(dir: &Path, locale: Locale) -> Result<(), PrefsError> {
    let path = dir.join(LOCALE_FILE);
    fs::create_dir_all(dir).map_err(|err| PrefsError::Write {
        path: dir.display().to_string(),
        message: err.to_string(),
    })?;
    fs::write(&path, format!("{}\n", locale.as_str())).map_err(|err| PrefsError::Write {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}
