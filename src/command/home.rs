use log::info;

use analytics::Analytics;
use storage::Storage;

use crate::{page, Result, SiteContext};

pub fn run<S: Storage, A: Analytics>(ctx: &SiteContext<S, A>, cta: bool) -> Result<()> {
    ctx.page_view(page::HOME);
    let (title, subtitle, label) = ctx.hero();
    info!("{}", title);
    info!("  {}", subtitle);

    if cta {
        ctx.cta_click(label);
        info!("{}", ctx.page_url(page::VERTICALS)?);
    } else {
        info!("{}: nts home --cta", label);
    }
    Ok(())
}
