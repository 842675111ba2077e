use log::info;

use analytics::Analytics;
use collections::{AssetCategory, BlogPost, Country};
use filter::{Criteria, Facet};
use storage::Storage;

use crate::{
    opts::{Assets, Blog, City, Jobs},
    page, Result, SiteContext,
};

fn no_results<S: Storage, A: Analytics>(ctx: &SiteContext<S, A>) {
    info!("{}", ctx.t("common.no_results"));
    info!("{}", ctx.t("common.reset_filters"));
}

pub fn jobs<S: Storage, A: Analytics>(ctx: &SiteContext<S, A>, args: &Jobs) {
    ctx.page_view(page::CAREERS);
    let criteria = Criteria::new()
        .with_query(&args.query)
        .with_facet(Facet::Location, &args.location)
        .with_facet(Facet::Department, &args.department);

    let jobs = ctx.jobs(&criteria);
    if jobs.is_empty() {
        return no_results(ctx);
    }
    for job in jobs {
        let urgent = if job.urgent { " (urgent)" } else { "" };
        info!("{} {}{}", job.id, job.title, urgent);
        info!(
            "  {} | {} | {} | {}",
            job.department, job.location, job.kind, job.experience
        );
        info!("  {}", job.skills.join(", "));
    }
}

fn post(post: &BlogPost) {
    let featured = if post.featured { " [featured]" } else { "" };
    info!("{} {}{}", post.id, post.title, featured);
    info!(
        "  {} | {} | {} | {}",
        post.category, post.author, post.date, post.read_time
    );
    info!("  {}", post.excerpt);
}

pub fn blog<S: Storage, A: Analytics>(ctx: &SiteContext<S, A>, args: &Blog) {
    ctx.page_view(page::BLOG);
    let criteria = Criteria::new()
        .with_query(&args.query)
        .with_facet(Facet::Category, &args.category);

    let posts = ctx.posts_featured_first(&criteria);
    if posts.is_empty() {
        return no_results(ctx);
    }
    posts.into_iter().for_each(post);
}

pub fn assets<S: Storage, A: Analytics>(
    ctx: &SiteContext<S, A>,
    args: &Assets,
) -> Result<()> {
    ctx.page_view(page::RESOURCES);

    if let Some(ref id) = args.download {
        let (asset, url) = ctx.download(id)?;
        info!("{} ({}, {})", asset.title, asset.kind, asset.size);
        info!("{}", url);
        return Ok(());
    }

    let counts = filter::facet_counts(collections::assets(), Facet::Category);
    for category in AssetCategory::all() {
        let count = counts
            .iter()
            .find(|(key, _)| key == category.key())
            .map(|(_, count)| *count)
            .unwrap_or(0);
        info!("{} ({}) {}", category.label(), count, category.key());
    }

    let criteria = Criteria::new().with_facet(Facet::Category, &args.category);
    let assets = ctx.assets(&criteria);
    if assets.is_empty() {
        no_results(ctx);
        return Ok(());
    }
    for asset in assets {
        info!("[{}] {} ({}, {})", asset.id, asset.title, asset.kind, asset.size);
        info!("  {}", asset.description);
    }
    info!("{}: nts assets --download <id>", ctx.t("resources.download"));
    Ok(())
}

pub fn offices<S: Storage, A: Analytics>(ctx: &SiteContext<S, A>) {
    ctx.page_view(page::CONTACT);
    for office in collections::offices() {
        info!("{}, {}", office.city, office.country);
        info!("  {}", office.address.replace('\n', ", "));
        info!("  {} | {} | {}", office.phone, office.email, office.hours);
    }
}

pub fn city<S: Storage, A: Analytics>(ctx: &SiteContext<S, A>, args: &City) -> Result<()> {
    let country: Country = args.country.parse()?;
    ctx.page_view(&format!("/{}/{}", country.slug(), args.slug));

    let profile = collections::city(country, &args.slug);
    info!("{}, {} ({})", profile.name, profile.region, country.name());
    info!("  Population {}", profile.population);
    info!("  {}", profile.description);
    info!("  Opportunities: {}", profile.opportunities.join(", "));
    info!("  Key industries: {}", profile.key_industries.join(", "));
    info!(
        "  {:.4}, {:.4}",
        profile.coordinates.lat, profile.coordinates.lng
    );
    Ok(())
}

pub fn verticals<S: Storage, A: Analytics>(ctx: &SiteContext<S, A>) {
    ctx.page_view(page::VERTICALS);
    for vertical in collections::verticals() {
        info!("{} - {}", vertical.title, ctx.t(&vertical.summary_key));
        info!("  {}", vertical.markets.join(", "));
    }
}
