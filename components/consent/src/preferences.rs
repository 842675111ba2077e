use std::str::FromStr;

use serde::{Deserialize, Serialize};

use analytics::{ConsentStatus, ConsentUpdate};

use crate::{Error, Result};

/// Cookie categories shown in the preferences dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CookieKind {
    Necessary,
    Analytics,
    Marketing,
    Functional,
}

impl CookieKind {
    pub fn all() -> &'static [CookieKind] {
        &[
            CookieKind::Necessary,
            CookieKind::Analytics,
            CookieKind::Marketing,
            CookieKind::Functional,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            CookieKind::Necessary => "Necessary Cookies",
            CookieKind::Analytics => "Analytics Cookies",
            CookieKind::Marketing => "Marketing Cookies",
            CookieKind::Functional => "Functional Cookies",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CookieKind::Necessary => {
                "Essential for the website to function properly. Cannot be disabled."
            }
            CookieKind::Analytics => {
                "Help us understand how visitors interact with our website."
            }
            CookieKind::Marketing => {
                "Used to track visitors across websites for advertising purposes."
            }
            CookieKind::Functional => {
                "Enable enhanced functionality and personalization."
            }
        }
    }

    /// Whether the visitor may switch this category off.
    pub fn can_disable(&self) -> bool {
        *self != CookieKind::Necessary
    }
}

impl FromStr for CookieKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "necessary" => Ok(CookieKind::Necessary),
            "analytics" => Ok(CookieKind::Analytics),
            "marketing" => Ok(CookieKind::Marketing),
            "functional" => Ok(CookieKind::Functional),
            _ => Err(Error::UnknownCookieKind(s.to_string())),
        }
    }
}

/// The visitor's cookie choices; `necessary` is always on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePreferences {
    pub necessary: bool,
    pub analytics: bool,
    pub marketing: bool,
    pub functional: bool,
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self::minimal()
    }
}

impl CookiePreferences {
    pub fn all() -> Self {
        Self {
            necessary: true,
            analytics: true,
            marketing: true,
            functional: true,
        }
    }

    pub fn minimal() -> Self {
        Self {
            necessary: true,
            analytics: false,
            marketing: false,
            functional: false,
        }
    }

    pub fn get(&self, kind: CookieKind) -> bool {
        match kind {
            CookieKind::Necessary => self.necessary,
            CookieKind::Analytics => self.analytics,
            CookieKind::Marketing => self.marketing,
            CookieKind::Functional => self.functional,
        }
    }

    /// Switch a category, requests to disable `necessary` are ignored.
    pub fn set(&mut self, kind: CookieKind, on: bool) {
        match kind {
            CookieKind::Necessary => self.necessary = true,
            CookieKind::Analytics => self.analytics = on,
            CookieKind::Marketing => self.marketing = on,
            CookieKind::Functional => self.functional = on,
        }
    }

    /// Copy with `necessary` switched on.
    pub fn sanitized(mut self) -> Self {
        self.necessary = true;
        self
    }

    /// Consent upgrade for the analytics collaborator, only when
    /// analytics cookies are allowed.
    pub fn consent_update(&self) -> Option<ConsentUpdate> {
        if !self.analytics {
            return None;
        }
        Some(ConsentUpdate {
            analytics_storage: ConsentStatus::Granted,
            ad_storage: self.marketing.into(),
            functionality_storage: self.functional.into(),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a stored value, all four flags must be present.
    pub fn from_json(value: &str) -> serde_json::Result<Self> {
        serde_json::from_str(value)
    }
}
