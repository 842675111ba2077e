use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::{langid, LanguageIdentifier};

use crate::Error;

/// Display languages supported by the site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ja,
    Hi,
}

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Ja, Locale::Hi]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
            Locale::Hi => "hi",
        }
    }

    /// Name of the language written in that language.
    pub fn name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ja => "日本語",
            Locale::Hi => "हिन्दी",
        }
    }

    pub fn lang_id(&self) -> LanguageIdentifier {
        match self {
            Locale::En => langid!("en"),
            Locale::Ja => langid!("ja"),
            Locale::Hi => langid!("hi"),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Only the exact codes are accepted, `en-US` or `EN` are not.
impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ja" => Ok(Locale::Ja),
            "hi" => Ok(Locale::Hi),
            _ => Err(Error::Unsupported(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_supported_codes() {
        for locale in Locale::all() {
            assert_eq!(Some(*locale), locale.code().parse::<Locale>().ok());
        }
    }

    #[test]
    fn reject_unsupported_codes() {
        assert!("fr".parse::<Locale>().is_err());
        assert!("en-US".parse::<Locale>().is_err());
        assert!("EN".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn language_identifier_matches_code() {
        assert_eq!("ja", Locale::Ja.lang_id().language.as_str());
    }
}
