use std::collections::HashMap;

use log::error;
use once_cell::sync::Lazy;

use crate::{Locale, Result};

static EN: &str = include_str!("../locales/en.toml");
static JA: &str = include_str!("../locales/ja.toml");
static HI: &str = include_str!("../locales/hi.toml");

pub type Messages = HashMap<String, String>;

static TRANSLATIONS: Lazy<TranslationTable> = Lazy::new(TranslationTable::embedded);

/// Translations for every supported locale keyed by dotted message id.
#[derive(Debug, Default)]
pub struct TranslationTable {
    map: HashMap<Locale, Messages>,
}

impl TranslationTable {
    /// The table compiled into the binary.
    pub fn get() -> &'static TranslationTable {
        &TRANSLATIONS
    }

    fn embedded() -> Self {
        let mut table: TranslationTable = Default::default();
        for (locale, source) in
            [(Locale::En, EN), (Locale::Ja, JA), (Locale::Hi, HI)].iter()
        {
            // A broken resource leaves the locale empty so lookups
            // fall back to the message keys.
            let messages = Self::parse(source).unwrap_or_else(|e| {
                error!("Translations for {} are invalid: {}", locale, e);
                Messages::new()
            });
            table.insert(*locale, messages);
        }
        table
    }

    /// Parse a TOML resource of quoted dotted keys to strings.
    pub fn parse(source: &str) -> Result<Messages> {
        Ok(toml::from_str(source)?)
    }

    pub fn insert(&mut self, locale: Locale, messages: Messages) {
        self.map.insert(locale, messages);
    }

    /// Message for `key`, an empty string counts as untranslated.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.map
            .get(&locale)
            .and_then(|m| m.get(key))
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }

    /// All keys known to the default locale, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .map
            .get(&Locale::default())
            .map(|m| m.keys().map(|k| k.as_str()).collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    /// Keys present in the default locale but absent from `locale`.
    pub fn missing_keys(&self, locale: Locale) -> Vec<&str> {
        self.keys()
            .into_iter()
            .filter(|k| self.lookup(locale, k).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_resources_parse() -> Result<()> {
        for source in [EN, JA, HI].iter() {
            let messages = TranslationTable::parse(source)?;
            assert!(messages.contains_key("nav.home"));
        }
        Ok(())
    }

    #[test]
    fn embedded_locales_are_complete() {
        let table = TranslationTable::get();
        assert!(!table.keys().is_empty());
        for locale in Locale::all() {
            assert!(
                table.missing_keys(*locale).is_empty(),
                "{} is missing {:?}",
                locale,
                table.missing_keys(*locale)
            );
        }
    }

    #[test]
    fn missing_keys_reports_gaps() -> Result<()> {
        let mut table: TranslationTable = Default::default();
        table.insert(
            Locale::En,
            TranslationTable::parse(
                r#""nav.home" = "Home"
"nav.blog" = "Blog""#,
            )?,
        );
        table.insert(
            Locale::Ja,
            TranslationTable::parse(r#""nav.home" = "ホーム""#)?,
        );
        assert_eq!(vec!["nav.blog"], table.missing_keys(Locale::Ja));
        assert_eq!(vec!["nav.blog", "nav.home"], table.missing_keys(Locale::Hi));
        Ok(())
    }

    #[test]
    fn empty_message_is_missing() -> Result<()> {
        let mut table: TranslationTable = Default::default();
        table.insert(Locale::En, TranslationTable::parse(r#""nav.home" = "Home""#)?);
        table.insert(Locale::Ja, TranslationTable::parse(r#""nav.home" = """#)?);
        assert_eq!(None, table.lookup(Locale::Ja, "nav.home"));
        assert_eq!(vec!["nav.home"], table.missing_keys(Locale::Ja));
        Ok(())
    }
}
