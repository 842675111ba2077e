use log::{info, warn};

use analytics::Analytics;
use consent::{Action, CookieKind};
use storage::Storage;

use crate::{opts::Consent, page, Result, SiteContext};

pub fn run<S: Storage, A: Analytics>(
    ctx: &mut SiteContext<S, A>,
    action: Option<&Consent>,
) -> Result<()> {
    ctx.page_view(page::HOME);

    let applied = match action {
        None | Some(Consent::Status) => {
            status(ctx);
            return Ok(());
        }
        Some(Consent::Reset) => {
            ctx.reset_consent()?;
            info!("Cookie preferences cleared");
            return Ok(());
        }
        Some(Consent::AcceptAll) => ctx.consent_action(Action::AcceptAll),
        Some(Consent::RejectAll) => ctx.consent_action(Action::RejectAll),
        Some(Consent::Custom {
            analytics,
            marketing,
            functional,
        }) => ctx.customize_consent(*analytics, *marketing, *functional),
    };

    if applied {
        info!("{}", ctx.t("consent.saved"));
        status(ctx);
    } else {
        warn!("Cookie preferences are already saved, use `consent reset` to choose again");
    }
    Ok(())
}

fn status<S: Storage, A: Analytics>(ctx: &SiteContext<S, A>) {
    let flow = ctx.consent();
    if flow.banner_visible() {
        info!("{}", ctx.t("consent.banner.title"));
    }
    let prefs = flow.preferences();
    for kind in CookieKind::all() {
        let mark = if prefs.get(*kind) { "on " } else { "off" };
        info!("{} {}", mark, kind.title());
        info!("    {}", kind.description());
    }
}
