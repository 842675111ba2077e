use log::{debug, info, warn};

use analytics::Analytics;
use storage::{expires_in_days, Storage};

use crate::{CookieKind, CookiePreferences, CONSENT_KEY, EXPIRES_DAYS};

/// Where the visitor is in the consent flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConsentState {
    /// Nothing has been read from storage yet.
    Unset,
    /// No usable stored choice, the banner is visible.
    BannerShown,
    /// A choice is stored, terminal for the session.
    Resolved,
}

/// Visitor actions on the banner and the preferences dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AcceptAll,
    RejectAll,
    Customize,
    Toggle(CookieKind, bool),
    Save,
    Cancel,
}

/// Cookie consent banner and preferences dialog.
///
/// Every transition returns whether it applied; actions that make
/// no sense in the current state are ignored.
#[derive(Debug, Clone)]
pub struct ConsentFlow {
    state: ConsentState,
    preferences: CookiePreferences,
    /// Toggle values while the preferences dialog is open.
    draft: Option<CookiePreferences>,
    expires_days: u32,
}

impl Default for ConsentFlow {
    fn default() -> Self {
        Self::new(EXPIRES_DAYS)
    }
}

impl ConsentFlow {
    pub fn new(expires_days: u32) -> Self {
        Self {
            state: ConsentState::Unset,
            preferences: Default::default(),
            draft: None,
            expires_days,
        }
    }

    /// Create a flow and restore any stored choice.
    pub fn open(
        storage: &dyn Storage,
        analytics: &dyn Analytics,
        expires_days: u32,
    ) -> Self {
        let mut flow = Self::new(expires_days);
        flow.load(storage, analytics);
        flow
    }

    pub fn state(&self) -> ConsentState {
        self.state
    }

    pub fn preferences(&self) -> CookiePreferences {
        self.preferences
    }

    pub fn settings_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn banner_visible(&self) -> bool {
        self.state == ConsentState::BannerShown
    }

    /// Read the stored choice; a missing, expired or malformed
    /// value shows the banner. An object missing any of the four
    /// flags is malformed.
    pub fn load(&mut self, storage: &dyn Storage, analytics: &dyn Analytics) -> bool {
        if self.state != ConsentState::Unset {
            return false;
        }

        let stored = storage.get(CONSENT_KEY).and_then(|value| {
            CookiePreferences::from_json(&value)
                .map_err(|e| debug!("Ignoring stored consent {:?}: {}", value, e))
                .ok()
        });

        match stored {
            Some(prefs) => {
                self.preferences = prefs.sanitized();
                self.state = ConsentState::Resolved;
                self.signal(analytics);
            }
            None => {
                self.state = ConsentState::BannerShown;
            }
        }
        debug!("Consent state {}", self.state);
        true
    }

    pub fn apply(
        &mut self,
        action: Action,
        storage: &mut dyn Storage,
        analytics: &dyn Analytics,
    ) -> bool {
        match action {
            Action::AcceptAll => self.accept_all(storage, analytics),
            Action::RejectAll => self.reject_all(storage, analytics),
            Action::Customize => self.customize(),
            Action::Toggle(kind, on) => self.toggle(kind, on),
            Action::Save => self.save(storage, analytics),
            Action::Cancel => self.cancel(),
        }
    }

    pub fn accept_all(&mut self, storage: &mut dyn Storage, analytics: &dyn Analytics) -> bool {
        self.resolve(CookiePreferences::all(), storage, analytics)
    }

    pub fn reject_all(&mut self, storage: &mut dyn Storage, analytics: &dyn Analytics) -> bool {
        self.resolve(CookiePreferences::minimal(), storage, analytics)
    }

    /// Open the preferences dialog seeded with the current choices.
    pub fn customize(&mut self) -> bool {
        if !self.banner_visible() {
            debug!("Ignoring customize in state {}", self.state);
            return false;
        }
        self.draft = Some(self.preferences);
        true
    }

    pub fn toggle(&mut self, kind: CookieKind, on: bool) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.set(kind, on);
                true
            }
            None => {
                debug!("Ignoring toggle of {}, settings are closed", kind);
                false
            }
        }
    }

    /// Store the dialog choices.
    pub fn save(&mut self, storage: &mut dyn Storage, analytics: &dyn Analytics) -> bool {
        match self.draft {
            Some(draft) => self.resolve(draft, storage, analytics),
            None => {
                debug!("Ignoring save, settings are closed");
                false
            }
        }
    }

    /// Close the dialog, the banner stays visible.
    pub fn cancel(&mut self) -> bool {
        self.draft.take().is_some()
    }

    fn resolve(
        &mut self,
        prefs: CookiePreferences,
        storage: &mut dyn Storage,
        analytics: &dyn Analytics,
    ) -> bool {
        if !self.banner_visible() {
            debug!("Ignoring consent choice in state {}", self.state);
            return false;
        }

        let prefs = prefs.sanitized();
        self.preferences = prefs;
        self.draft = None;
        self.state = ConsentState::Resolved;

        match prefs.to_json() {
            Ok(value) => {
                let expires = expires_in_days(self.expires_days);
                if let Err(e) = storage.set(CONSENT_KEY, &value, expires) {
                    warn!("Unable to persist cookie consent: {}", e);
                }
            }
            Err(e) => warn!("Unable to encode cookie consent: {}", e),
        }

        info!(
            "Cookie consent analytics={} marketing={} functional={}",
            prefs.analytics, prefs.marketing, prefs.functional
        );
        self.signal(analytics);
        true
    }

    fn signal(&self, analytics: &dyn Analytics) {
        if let Some(update) = self.preferences.consent_update() {
            analytics.consent(&update);
        }
    }
}
