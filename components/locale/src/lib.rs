use log::{debug, info, warn};
use thiserror::Error;

use storage::Storage;

mod language;
mod table;

pub use language::Locale;
pub use table::{Messages, TranslationTable};

/// Storage key for the chosen display language.
pub static LANGUAGE_KEY: &str = "nts-language";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported locale {0}")]
    Unsupported(String),
    #[error(transparent)]
    TomlDeser(#[from] toml::de::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// The active display language and message lookup for a page.
///
/// Lookups never fail, a key without a translation for the
/// active locale resolves to the key itself.
#[derive(Debug, Clone)]
pub struct Locales {
    active: Locale,
    table: &'static TranslationTable,
}

impl Default for Locales {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl Locales {
    pub fn new(active: Locale) -> Self {
        Self {
            active,
            table: TranslationTable::get(),
        }
    }

    /// Restore the persisted locale or use the default locale.
    pub fn init(storage: &dyn Storage) -> Self {
        Self::init_with_default(storage, Default::default())
    }

    /// Restore the persisted locale or use `fallback`.
    pub fn init_with_default(storage: &dyn Storage, fallback: Locale) -> Self {
        let active = match storage.get(LANGUAGE_KEY) {
            Some(code) => code.parse::<Locale>().unwrap_or_else(|_| {
                debug!("Ignoring persisted locale {:?}", code);
                fallback
            }),
            None => fallback,
        };
        Self::new(active)
    }

    pub fn locale(&self) -> Locale {
        self.active
    }

    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.get_in(self.active, key)
    }

    pub fn get_in<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.table.lookup(locale, key).unwrap_or(key)
    }

    /// Switch the active locale and persist the choice.
    ///
    /// Unsupported codes leave the active locale unchanged. Returns
    /// whether the code was accepted.
    pub fn set_locale(&mut self, storage: &mut dyn Storage, code: &str) -> bool {
        let locale = match code.parse::<Locale>() {
            Ok(locale) => locale,
            Err(e) => {
                debug!("{}", e);
                return false;
            }
        };

        self.active = locale;
        if let Err(e) = storage.set(LANGUAGE_KEY, locale.code(), None) {
            warn!("Unable to persist locale {}: {}", locale, e);
        }
        info!("Locale {} ({})", locale, locale.name());
        true
    }

    pub fn table(&self) -> &'static TranslationTable {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::MemoryStorage;

    #[test]
    fn default_is_english() {
        let store = MemoryStorage::new();
        let locales = Locales::init(&store);
        assert_eq!(Locale::En, locales.locale());
        assert_eq!("Home", locales.get("nav.home"));
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let locales = Locales::new(Locale::Ja);
        assert_eq!("nav.missing", locales.get("nav.missing"));
    }

    #[test]
    fn empty_message_falls_back_to_key() -> Result<()> {
        let mut table: TranslationTable = Default::default();
        table.insert(Locale::Ja, TranslationTable::parse(r#""nav.home" = """#)?);
        let locales = Locales {
            active: Locale::Ja,
            table: Box::leak(Box::new(table)),
        };
        assert_eq!("nav.home", locales.get("nav.home"));
        assert_eq!("nav.home", locales.get_in(Locale::Ja, "nav.home"));
        Ok(())
    }

    #[test]
    fn every_key_resolves_to_non_empty_text() {
        for locale in Locale::all() {
            let locales = Locales::new(*locale);
            for key in locales.table().keys() {
                assert!(!locales.get(key).is_empty(), "{} {}", locale, key);
            }
        }
    }

    #[test]
    fn set_locale_persists() {
        let mut store = MemoryStorage::new();
        let mut locales = Locales::init(&store);
        assert!(locales.set_locale(&mut store, "ja"));
        assert_eq!(Locale::Ja, locales.locale());
        assert_eq!("ホーム", locales.get("nav.home"));
        assert_eq!(Some("ja".to_string()), store.get(LANGUAGE_KEY));

        let restored = Locales::init(&store);
        assert_eq!(Locale::Ja, restored.locale());
    }

    #[test]
    fn unsupported_locale_is_ignored() {
        let mut store = MemoryStorage::new();
        let mut locales = Locales::new(Locale::Hi);
        assert!(!locales.set_locale(&mut store, "fr"));
        assert_eq!(Locale::Hi, locales.locale());
        assert_eq!(None, store.get(LANGUAGE_KEY));
    }

    #[test]
    fn invalid_persisted_locale_uses_fallback() -> std::result::Result<(), storage::Error> {
        let mut store = MemoryStorage::new();
        store.set(LANGUAGE_KEY, "klingon", None)?;
        let locales = Locales::init_with_default(&store, Locale::Hi);
        assert_eq!(Locale::Hi, locales.locale());
        Ok(())
    }
}
