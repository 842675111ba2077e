use chrono::Utc;
use log::info;

use analytics::Analytics;
use contact::ContactForm;
use storage::Storage;

use crate::{page, Result, SiteContext};

pub fn submit<S: Storage, A: Analytics>(
    ctx: &mut SiteContext<S, A>,
    form: ContactForm,
) -> Result<()> {
    ctx.page_view(page::CONTACT);
    ctx.submit_contact(form, Utc::now())?;
    info!("{}", ctx.t("contact.form.success"));
    Ok(())
}
