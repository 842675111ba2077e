use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;
use unic_langid::LanguageIdentifier;
use url::Url;

use locale::Locale;

pub static NAME: &str = "NTS Nihon Global";
pub static BASE_URL: &str = "https://ntsnihonglobal.com";
pub const EXPIRES_DAYS: u32 = 365;

/// Longest consent expiry accepted in `[consent] expires-days`.
pub const MAX_EXPIRES_DAYS: u32 = 36_500;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration file {0} does not exist")]
    NotFound(PathBuf),

    #[error("Consent expiry must be at least one day")]
    ZeroExpiry,

    #[error("Consent expiry of {0} days exceeds {} days", MAX_EXPIRES_DAYS)]
    ExpiryOutOfRange(u32),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    TomlDeser(#[from] toml::de::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    LanguageIdentifier(#[from] unic_langid::LanguageIdentifierError),

    #[error(transparent)]
    Locale(#[from] locale::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub fn parse_language<S: AsRef<str>>(lang: S) -> Result<Locale> {
    let id: LanguageIdentifier = lang.as_ref().parse()?;
    Ok(id.language.to_string().parse()?)
}

pub fn parse_base_url<S: AsRef<str>>(base: S) -> Result<Url> {
    let src = base.as_ref().trim_end_matches('/');
    // Accept a bare host name
    if src.starts_with("http://") || src.starts_with("https://") {
        Ok(Url::parse(src)?)
    } else {
        Ok(Url::parse(&format!("https://{}", src))?)
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteConfig {
    pub name: String,
    pub base_url: String,
    pub lang: String,
    /// Directory for persisted visitor state.
    pub storage: Option<PathBuf>,
    pub consent: ConsentConfig,

    #[serde(skip)]
    pub file: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: String::from(NAME),
            base_url: String::from(BASE_URL),
            lang: Locale::default().code().to_string(),
            storage: None,
            consent: Default::default(),
            file: None,
        }
    }
}

impl SiteConfig {
    /// Load a configuration file, every field is optional.
    pub fn load<P: AsRef<Path>>(p: P) -> Result<Self> {
        let file = p.as_ref();
        debug!("load {}", file.display());
        if !file.is_file() {
            return Err(Error::NotFound(file.to_path_buf()));
        }
        let content = fs::read_to_string(file)?;
        let mut cfg = Self::parse(&content)?;
        cfg.file = Some(file.to_path_buf());
        Ok(cfg)
    }

    /// Load the given file, or `site.toml` in the working directory
    /// when it exists, otherwise the defaults.
    pub fn resolve(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(file) => Self::load(file),
            None => {
                let local = PathBuf::from(dirs::config_file_name());
                if local.is_file() {
                    Self::load(local)
                } else {
                    Ok(Default::default())
                }
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let cfg: SiteConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        parse_language(&self.lang)?;
        parse_base_url(&self.base_url)?;
        match self.consent.expires_days {
            0 => return Err(Error::ZeroExpiry),
            days if days > MAX_EXPIRES_DAYS => {
                return Err(Error::ExpiryOutOfRange(days))
            }
            _ => {}
        }
        Ok(())
    }

    pub fn locale(&self) -> Result<Locale> {
        parse_language(&self.lang)
    }

    pub fn base_url(&self) -> Result<Url> {
        parse_base_url(&self.base_url)
    }

    /// Absolute URL for a site path.
    pub fn page_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url()?.join(path)?)
    }

    /// Path to the storage document, under the configured directory
    /// or the user's root directory.
    pub fn storage_file(&self) -> Result<PathBuf> {
        match self.storage {
            Some(ref dir) => {
                if !dir.exists() {
                    fs::create_dir_all(dir)?;
                }
                Ok(dir.join(dirs::storage_file_name()))
            }
            None => Ok(dirs::storage_file()?),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConsentConfig {
    pub expires_days: u32,
}

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            expires_days: EXPIRES_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() -> Result<()> {
        let cfg = SiteConfig::parse("")?;
        assert_eq!(NAME, cfg.name);
        assert_eq!(Locale::En, cfg.locale()?);
        assert_eq!(365, cfg.consent.expires_days);
        assert_eq!(
            "https://ntsnihonglobal.com/careers",
            cfg.page_url("/careers")?.as_str()
        );
        Ok(())
    }

    #[test]
    fn kebab_case_fields() -> Result<()> {
        let cfg = SiteConfig::parse(
            r#"
name = "NTS Staging"
base-url = "staging.ntsnihonglobal.com"
lang = "ja-JP"

[consent]
expires-days = 30
"#,
        )?;
        assert_eq!("NTS Staging", cfg.name);
        assert_eq!(Locale::Ja, cfg.locale()?);
        assert_eq!(30, cfg.consent.expires_days);
        assert_eq!(
            Some("staging.ntsnihonglobal.com"),
            cfg.base_url()?.host_str()
        );
        Ok(())
    }

    #[test]
    fn unsupported_lang() {
        assert!(matches!(
            SiteConfig::parse(r#"lang = "fr""#),
            Err(Error::Locale(_))
        ));
        assert!(SiteConfig::parse(r#"lang = "!!""#).is_err());
    }

    #[test]
    fn zero_expiry() {
        assert!(matches!(
            SiteConfig::parse("[consent]\nexpires-days = 0"),
            Err(Error::ZeroExpiry)
        ));
    }

    #[test]
    fn expiry_out_of_range() -> Result<()> {
        assert!(matches!(
            SiteConfig::parse("[consent]\nexpires-days = 100000000"),
            Err(Error::ExpiryOutOfRange(100_000_000))
        ));
        let cfg = SiteConfig::parse("[consent]\nexpires-days = 36500")?;
        assert_eq!(MAX_EXPIRES_DAYS, cfg.consent.expires_days);
        Ok(())
    }

    #[test]
    fn load_file_and_storage_dir() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("site.toml");
        let state = dir.path().join("state");
        fs::write(
            &file,
            format!("storage = {:?}\n", state.to_string_lossy()),
        )?;
        let cfg = SiteConfig::load(&file)?;
        assert_eq!(Some(file), cfg.file);
        assert_eq!(state.join("storage.json"), cfg.storage_file()?);
        assert!(state.is_dir());

        assert!(matches!(
            SiteConfig::load(dir.path().join("missing.toml")),
            Err(Error::NotFound(_))
        ));
        Ok(())
    }
}
