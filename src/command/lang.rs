use log::{info, warn};

use analytics::Analytics;
use locale::Locale;
use storage::Storage;

use crate::{opts::Lang, page, Result, SiteContext};

pub fn run<S: Storage, A: Analytics>(
    ctx: &mut SiteContext<S, A>,
    args: &Lang,
) -> Result<()> {
    ctx.page_view(page::HOME);

    if let Some(ref code) = args.code {
        if !ctx.set_locale(code) {
            return Err(locale::Error::Unsupported(code.to_string()).into());
        }
    }

    if args.list {
        list(ctx);
    }

    if args.audit {
        audit(ctx);
    }

    if !args.list && !args.audit {
        let locale = ctx.locales().locale();
        info!("{} ({})", locale.code(), locale.name());
    }
    Ok(())
}

fn list<S: Storage, A: Analytics>(ctx: &SiteContext<S, A>) {
    let active = ctx.locales().locale();
    for locale in Locale::all() {
        let marker = if *locale == active { "*" } else { " " };
        info!("{} {} {}", marker, locale.code(), locale.name());
    }
}

fn audit<S: Storage, A: Analytics>(ctx: &SiteContext<S, A>) {
    let table = ctx.locales().table();
    for locale in Locale::all() {
        let missing = table.missing_keys(*locale);
        if missing.is_empty() {
            info!("{} has every key", locale);
        }
        for key in missing {
            warn!("{} missing {}", locale, key);
        }
    }
}

/// Print the translation for a key.
pub fn translate<S: Storage, A: Analytics>(ctx: &SiteContext<S, A>, key: &str) {
    ctx.page_view(page::HOME);
    info!("{}", ctx.t(key));
}
