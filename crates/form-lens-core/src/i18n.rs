// crates/form-lens-core/src/i18n.rs
// ============================================================================
// Module: Message Catalog and Locale Store
// Description: Localized display strings for logic rendering and errors.
// Purpose: Centralize user-facing vocabulary so renderers stay locale-blind.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! Form-Lens stores every user-facing string in per-locale catalogs keyed by
//! dotted paths (`logic.if`, `errors.formNotFound`, ...). Renderers and the
//! fetch layer receive an explicit [`LocaleStore`] and call [`LocaleStore::resolve`];
//! they never enumerate locales, so adding a locale touches only this module.
//!
//! ## Invariants
//! - Catalogs are static and read-only; only the active-locale selector mutates.
//! - Missing keys fall back to English and then to the key itself.
//! - [`Locale::En`] is the default and the parity baseline for other locales.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported display locales.
///
/// # Invariants
/// - Variants are stable for preference persistence and catalog lookup.
/// - [`Locale::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// French.
    Fr,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }
}

/// Ordered list of supported locales.
///
/// # Invariants
/// - Ordering is stable for deterministic presentation.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Fr];

/// A formatted message argument substituted into `{placeholder}` positions.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `status`).
/// - `value` is preformatted and should be safe for display.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"status"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Catalogs
// ============================================================================

/// Static English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("app.title", "Typeform Overview"),
    ("loader.title", "Load Typeform"),
    ("loader.urlLabel", "Typeform URL or ID"),
    ("loader.loading", "Loading..."),
    ("loader.apiTokenLabel", "Typeform Personal Access Token"),
    ("loader.or", "OR"),
    ("loader.uploadLabel", "Load JSON file"),
    ("logic.always", "Always"),
    ("logic.if", "If"),
    ("logic.and", "and"),
    ("logic.or", "or"),
    ("logic.this", "this"),
    ("logic.jumpTo", "Jump to"),
    ("logic.jumpToThankYou", "Jump to Thank you"),
    ("errors.urlRequired", "Please enter a Typeform URL or ID"),
    (
        "errors.invalidUrl",
        "Invalid Typeform URL. Please use format: https://xxx.typeform.com/to/FormID",
    ),
    ("errors.formNotFound", "Form not found. Please check the form ID or URL."),
    (
        "errors.authRequired",
        "This form requires authentication. Please provide your Typeform Personal Access Token.",
    ),
    (
        "errors.accessForbidden",
        "Access forbidden. This form may be private or you may need a valid API token.",
    ),
    ("errors.remoteError", "Failed to fetch form: {status}"),
    (
        "errors.networkError",
        "Network error. Please check your internet connection and try again.",
    ),
    ("errors.fileError", "Error loading file"),
    ("errors.unsupportedLocale", "Unsupported language: {value}"),
];

/// Static French catalog entries.
const CATALOG_FR: &[(&str, &str)] = &[
    ("app.title", "Aperçu Typeform"),
    ("loader.title", "Charger un Typeform"),
    ("loader.urlLabel", "URL ou ID Typeform"),
    ("loader.loading", "Chargement..."),
    ("loader.apiTokenLabel", "Token d'accès personnel Typeform"),
    ("loader.or", "OU"),
    ("loader.uploadLabel", "Charger un fichier JSON"),
    ("logic.always", "Toujours"),
    ("logic.if", "Si"),
    ("logic.and", "et"),
    ("logic.or", "ou"),
    ("logic.this", "ceci"),
    ("logic.jumpTo", "Aller à"),
    ("logic.jumpToThankYou", "Aller à la page de remerciement"),
    ("errors.urlRequired", "Veuillez entrer une URL ou un ID Typeform"),
    (
        "errors.invalidUrl",
        "URL Typeform invalide. Utilisez le format: https://xxx.typeform.com/to/FormID",
    ),
    ("errors.formNotFound", "Formulaire introuvable. Vérifiez l'ID ou l'URL du formulaire."),
    (
        "errors.authRequired",
        "Ce formulaire nécessite une authentification. Veuillez fournir votre token d'accès \
         personnel Typeform.",
    ),
    (
        "errors.accessForbidden",
        "Accès refusé. Ce formulaire est peut-être privé ou vous avez besoin d'un token API \
         valide.",
    ),
    ("errors.remoteError", "Échec du chargement du formulaire : {status}"),
    ("errors.networkError", "Erreur réseau. Vérifiez votre connexion Internet et réessayez."),
    ("errors.fileError", "Erreur lors du chargement du fichier"),
    ("errors.unsupportedLocale", "Langue non prise en charge : {value}"),
];

/// Returns the raw catalog entries for the requested locale.
#[must_use]
pub const fn catalog_entries_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => CATALOG_EN,
        Locale::Fr => CATALOG_FR,
    }
}

/// Returns the message catalog for the requested locale.
#[must_use]
pub fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_FR_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Fr => CATALOG_FR_MAP.get_or_init(|| CATALOG_FR.iter().copied().collect()),
    }
}

// ============================================================================
// SECTION: Locale Store
// ============================================================================

/// Explicit locale context handed to renderers and the fetch layer.
///
/// # Invariants
/// - Lookups never fail: missing keys degrade to English, then the key itself.
/// - Only [`LocaleStore::set_active`] mutates state; lookups are read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleStore {
    /// Currently selected display locale.
    active: Locale,
}

impl LocaleStore {
    /// Creates a store with the given active locale.
    #[must_use]
    pub const fn new(active: Locale) -> Self {
        Self {
            active,
        }
    }

    /// Returns the active locale.
    #[must_use]
    pub const fn active(&self) -> Locale {
        self.active
    }

    /// Switches the active locale.
    pub const fn set_active(&mut self, locale: Locale) {
        self.active = locale;
    }

    /// Resolves a dotted key to the localized string.
    ///
    /// Falls back to the English catalog and finally to the key itself, so
    /// missing translations degrade visibly instead of erroring.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        catalog_for(self.active)
            .get(key)
            .copied()
            .or_else(|| catalog_for(Locale::En).get(key).copied())
            .unwrap_or(key)
            .to_string()
    }

    /// Resolves a dotted key and substitutes `{name}` placeholders.
    #[must_use]
    pub fn resolve_with(&self, key: &str, args: &[MessageArg]) -> String {
        let mut result = self.resolve(key);
        for arg in args {
            let placeholder = format!("{{{}}}", arg.key);
            result = result.replace(&placeholder, &arg.value);
        }
        result
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new(Locale::En)
    }
}
