use chrono::{DateTime, Utc};
use log::{debug, info};
use url::Url;

use analytics::{Analytics, Event, LogAnalytics};
use collections::{Asset, BlogPost, Job};
use config::SiteConfig;
use consent::{Action, ConsentFlow, CookieKind, CONSENT_KEY};
use contact::{ContactDesk, ContactForm};
use filter::Criteria;
use locale::Locales;
use storage::{FileStorage, Storage};

use crate::{Error, Result};

/// Per process state for a visitor.
///
/// Owns the storage and analytics collaborators; locale and consent
/// are restored from storage when the context is created.
pub struct SiteContext<S: Storage = FileStorage, A: Analytics = LogAnalytics> {
    config: SiteConfig,
    base_url: Url,
    storage: S,
    analytics: A,
    locales: Locales,
    consent: ConsentFlow,
    contact: ContactDesk,
}

impl SiteContext<FileStorage, LogAnalytics> {
    /// Context backed by the storage file for the configuration.
    pub fn open(config: SiteConfig) -> Result<Self> {
        let storage = FileStorage::open(config.storage_file()?);
        debug!("Storage {}", storage.path().display());
        Self::new(config, storage, LogAnalytics)
    }
}

impl<S: Storage, A: Analytics> SiteContext<S, A> {
    pub fn new(config: SiteConfig, storage: S, analytics: A) -> Result<Self> {
        let base_url = config.base_url()?;
        let locales = Locales::init_with_default(&storage, config.locale()?);
        let consent =
            ConsentFlow::open(&storage, &analytics, config.consent.expires_days);
        Ok(Self {
            config,
            base_url,
            storage,
            analytics,
            locales,
            consent,
            contact: ContactDesk::new(),
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn analytics(&self) -> &A {
        &self.analytics
    }

    pub fn locales(&self) -> &Locales {
        &self.locales
    }

    pub fn consent(&self) -> &ConsentFlow {
        &self.consent
    }

    pub fn contact(&self) -> &ContactDesk {
        &self.contact
    }

    /// Translate a key under the active locale.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.locales.get(key)
    }

    pub fn set_locale(&mut self, code: &str) -> bool {
        self.locales.set_locale(&mut self.storage, code)
    }

    pub fn page_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    pub fn page_view(&self, path: &str) {
        self.analytics.page_view(path);
    }

    pub fn cta_click(&self, label: &str) {
        self.analytics.event(&Event::cta_click(label));
    }

    /// Hero text for the home page: title, subtitle and the call to
    /// action label.
    pub fn hero(&self) -> (&str, &str, &str) {
        (
            self.t("home.hero.title"),
            self.t("home.hero.subtitle"),
            self.t("home.hero.cta"),
        )
    }

    pub fn jobs(&self, criteria: &Criteria) -> Vec<&'static Job> {
        filter::filter(collections::jobs(), criteria)
    }

    pub fn posts(&self, criteria: &Criteria) -> Vec<&'static BlogPost> {
        filter::filter(collections::posts(), criteria)
    }

    /// Matching posts with the featured post moved to the front.
    pub fn posts_featured_first(&self, criteria: &Criteria) -> Vec<&'static BlogPost> {
        let mut posts = self.posts(criteria);
        if let Some(featured) = collections::featured_post() {
            if let Some(pos) = posts.iter().position(|p| p.id == featured.id) {
                let post = posts.remove(pos);
                posts.insert(0, post);
            }
        }
        posts
    }

    pub fn assets(&self, criteria: &Criteria) -> Vec<&'static Asset> {
        filter::filter(collections::assets(), criteria)
    }

    /// Track a download and resolve the absolute URL of the file.
    pub fn download(&self, id: &str) -> Result<(&'static Asset, Url)> {
        let asset =
            collections::asset(id).ok_or_else(|| Error::UnknownAsset(id.to_string()))?;
        let url = self.base_url.join(&asset.download_url)?;
        self.analytics.event(&Event::download(&asset.title));
        info!("Download {}", asset.file_name());
        Ok((asset, url))
    }

    pub fn consent_action(&mut self, action: Action) -> bool {
        self.consent.apply(action, &mut self.storage, &self.analytics)
    }

    /// Open the preferences dialog, set the optional categories and
    /// save. Stops at the first action that does not apply.
    pub fn customize_consent(
        &mut self,
        analytics: bool,
        marketing: bool,
        functional: bool,
    ) -> bool {
        self.consent_action(Action::Customize)
            && self.consent_action(Action::Toggle(CookieKind::Analytics, analytics))
            && self.consent_action(Action::Toggle(CookieKind::Marketing, marketing))
            && self.consent_action(Action::Toggle(CookieKind::Functional, functional))
            && self.consent_action(Action::Save)
    }

    /// Forget the stored consent choice so the banner is shown again.
    pub fn reset_consent(&mut self) -> Result<()> {
        self.storage.remove(CONSENT_KEY)?;
        self.consent = ConsentFlow::open(
            &self.storage,
            &self.analytics,
            self.config.consent.expires_days,
        );
        Ok(())
    }

    pub fn submit_contact(&mut self, form: ContactForm, now: DateTime<Utc>) -> Result<()> {
        self.contact.submit(form, &self.analytics, now)?;
        Ok(())
    }

    /// Run time based transitions, returns whether the contact form
    /// was reset.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        self.contact.tick(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::{ConsentStatus, Recorder, Signal};
    use consent::ConsentState;
    use filter::Facet;
    use storage::MemoryStorage;

    fn context() -> Result<SiteContext<MemoryStorage, Recorder>> {
        SiteContext::new(SiteConfig::default(), MemoryStorage::new(), Recorder::new())
    }

    #[test]
    fn featured_post_comes_first() -> Result<()> {
        let ctx = context()?;
        let posts = ctx.posts_featured_first(&Criteria::new());
        assert_eq!(collections::posts().len(), posts.len());
        assert!(posts[0].featured);
        assert!(posts[1..].iter().all(|p| !p.featured));
        let rest: Vec<u32> = posts[1..].iter().map(|p| p.id).collect();
        let mut sorted = rest.clone();
        sorted.sort();
        assert_eq!(sorted, rest);
        Ok(())
    }

    #[test]
    fn featured_post_follows_the_filter() -> Result<()> {
        let ctx = context()?;
        let tech = ctx.posts_featured_first(
            &Criteria::new().with_facet(Facet::Category, "technology"),
        );
        assert!(tech[0].featured);
        assert!(tech.iter().all(|p| p.category == "Technology"));

        let culture =
            ctx.posts_featured_first(&Criteria::new().with_facet(Facet::Category, "culture"));
        assert!(!culture.is_empty());
        assert!(culture.iter().all(|p| !p.featured));
        Ok(())
    }

    #[test]
    fn customize_consent_saves_choices() -> Result<()> {
        let mut ctx = context()?;
        assert!(ctx.customize_consent(true, false, true));
        assert_eq!(ConsentState::Resolved, ctx.consent().state());
        assert!(!ctx.consent().settings_open());

        let prefs = ctx.consent().preferences();
        assert!(prefs.necessary && prefs.analytics && prefs.functional);
        assert!(!prefs.marketing);

        let consents = ctx.analytics().consents();
        assert_eq!(1, consents.len());
        assert_eq!(ConsentStatus::Denied, consents[0].ad_storage);
        assert_eq!(ConsentStatus::Granted, consents[0].functionality_storage);

        assert!(ctx.storage().get(CONSENT_KEY).is_some());
        assert!(!ctx.customize_consent(false, false, false));
        assert!(ctx.consent().preferences().analytics);
        Ok(())
    }

    #[test]
    fn cta_click_is_tracked() -> Result<()> {
        let ctx = context()?;
        let (title, _, cta) = ctx.hero();
        assert_eq!("Bridging India & Japan Through Innovation", title);
        ctx.cta_click(cta);
        assert_eq!(
            vec![Signal::Event(Event::cta_click("Explore Our Verticals"))],
            ctx.analytics().signals()
        );
        Ok(())
    }
}
