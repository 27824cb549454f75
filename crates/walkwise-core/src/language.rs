//! Language preference.
//!
//! A static catalogue of the supported UI languages plus `LanguagePrefs`,
//! which persists the selected code under the `language` state-store key.
//! Only the code is stored; everything else comes from the catalogue.

use anyhow::Result;
use tracing::warn;

use crate::storage::StateStore;

/// State-store key holding the selected language code
const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub flag: &'static str,
}

pub const LANGUAGES: [Language; 12] = [
    Language { code: "en", name: "English", native_name: "English", flag: "\u{1F1FA}\u{1F1F8}" },
    Language { code: "es", name: "Spanish", native_name: "Español", flag: "\u{1F1EA}\u{1F1F8}" },
    Language { code: "fr", name: "French", native_name: "Français", flag: "\u{1F1EB}\u{1F1F7}" },
    Language { code: "de", name: "German", native_name: "Deutsch", flag: "\u{1F1E9}\u{1F1EA}" },
    Language { code: "it", name: "Italian", native_name: "Italiano", flag: "\u{1F1EE}\u{1F1F9}" },
    Language { code: "pt", name: "Portuguese", native_name: "Português", flag: "\u{1F1F5}\u{1F1F9}" },
    Language { code: "ru", name: "Russian", native_name: "Русский", flag: "\u{1F1F7}\u{1F1FA}" },
    Language { code: "zh", name: "Chinese", native_name: "中文", flag: "\u{1F1E8}\u{1F1F3}" },
    Language { code: "ja", name: "Japanese", native_name: "日本語", flag: "\u{1F1EF}\u{1F1F5}" },
    Language { code: "ko", name: "Korean", native_name: "한국어", flag: "\u{1F1F0}\u{1F1F7}" },
    Language { code: "hi", name: "Hindi", native_name: "हिन्दी", flag: "\u{1F1EE}\u{1F1F3}" },
    Language { code: "ar", name: "Arabic", native_name: "العربية", flag: "\u{1F1F8}\u{1F1E6}" },
];

/// Look up a language by its code.
pub fn lookup(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code == code)
}

fn english() -> &'static Language {
    &LANGUAGES[0]
}

/// Persistent language selection.
#[derive(Debug, Clone)]
pub struct LanguagePrefs {
    state: StateStore,
}

impl LanguagePrefs {
    pub fn new(state: StateStore) -> Self {
        Self { state }
    }

    /// The selected language. Missing, unreadable, or unknown stored codes
    /// fall back to English.
    pub fn current(&self) -> &'static Language {
        let code = match self.state.load::<String>(LANGUAGE_KEY) {
            Ok(Some(code)) => code,
            Ok(None) => return english(),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable language preference");
                return english();
            }
        };

        lookup(&code).unwrap_or_else(|| {
            warn!(code, "Stored language code not in the catalogue");
            english()
        })
    }

    /// Persist a selection. Unknown codes are refused.
    pub fn select(&self, code: &str) -> Result<()> {
        let language =
            lookup(code).ok_or_else(|| anyhow::anyhow!("Unknown language code: {}", code))?;
        self.state.save(LANGUAGE_KEY, &language.code)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_prefs() -> (tempfile::TempDir, LanguagePrefs) {
        let dir = tempfile::tempdir().unwrap();
        let state = StateStore::new(dir.path().to_path_buf()).unwrap();
        (dir, LanguagePrefs::new(state))
    }

    #[test]
    fn test_defaults_to_english() {
        let (_dir, prefs) = temp_prefs();
        assert_eq!(prefs.current().code, "en");
    }

    #[test]
    fn test_selection_round_trips() {
        let (_dir, prefs) = temp_prefs();
        prefs.select("es").unwrap();
        assert_eq!(prefs.current().code, "es");
        assert_eq!(prefs.current().native_name, "Español");
    }

    #[test]
    fn test_unknown_selection_is_refused() {
        let (_dir, prefs) = temp_prefs();
        assert!(prefs.select("tlh").is_err());
        assert_eq!(prefs.current().code, "en");
    }

    #[test]
    fn test_unknown_stored_code_falls_back() {
        let (_dir, prefs) = temp_prefs();
        // Something else scribbled an unsupported code into the store.
        prefs.state.save(LANGUAGE_KEY, &"xx".to_string()).unwrap();
        assert_eq!(prefs.current().code, "en");
    }

    #[test]
    fn test_catalogue_has_twelve_unique_codes() {
        let mut codes: Vec<_> = LANGUAGES.iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 12);
    }
}
