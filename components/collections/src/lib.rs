use once_cell::sync::Lazy;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No collection with name {0}")]
    NoCollection(String),

    #[error("Unknown country {0}")]
    UnknownCountry(String),

    #[error(transparent)]
    TomlDeser(#[from] toml::de::Error),
}

type Result<T> = std::result::Result<T, Error>;

mod city;
pub mod provider;
mod types;

pub use city::{city, CityProfile, Country};
pub use types::*;

static JOBS: Lazy<Vec<Job>> = Lazy::new(|| provider::load(provider::JOBS, "job"));
static POSTS: Lazy<Vec<BlogPost>> =
    Lazy::new(|| provider::load(provider::POSTS, "post"));
static ASSETS: Lazy<Vec<Asset>> =
    Lazy::new(|| provider::load(provider::ASSETS, "asset"));
static OFFICES: Lazy<Vec<Office>> =
    Lazy::new(|| provider::load(provider::OFFICES, "office"));
static VERTICALS: Lazy<Vec<Vertical>> =
    Lazy::new(|| provider::load(provider::VERTICALS, "vertical"));
static CITIES: Lazy<Vec<CityProfile>> =
    Lazy::new(|| provider::load(provider::CITIES, "city"));

/// Open positions in listing order.
pub fn jobs() -> &'static [Job] {
    &JOBS
}

/// All blog posts including the featured post.
pub fn posts() -> &'static [BlogPost] {
    &POSTS
}

pub fn featured_post() -> Option<&'static BlogPost> {
    POSTS.iter().find(|p| p.featured)
}

pub fn assets() -> &'static [Asset] {
    &ASSETS
}

pub fn asset(id: &str) -> Option<&'static Asset> {
    ASSETS.iter().find(|a| a.id == id)
}

pub fn offices() -> &'static [Office] {
    &OFFICES
}

pub fn verticals() -> &'static [Vertical] {
    &VERTICALS
}

pub fn cities() -> &'static [CityProfile] {
    &CITIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_collections_deserialize() -> Result<()> {
        assert_eq!(6, provider::deserialize::<Job>(provider::JOBS, "job")?.len());
        assert_eq!(
            7,
            provider::deserialize::<BlogPost>(provider::POSTS, "post")?.len()
        );
        assert_eq!(
            8,
            provider::deserialize::<Asset>(provider::ASSETS, "asset")?.len()
        );
        assert_eq!(
            3,
            provider::deserialize::<Office>(provider::OFFICES, "office")?.len()
        );
        assert_eq!(
            11,
            provider::deserialize::<Vertical>(provider::VERTICALS, "vertical")?
                .len()
        );
        assert_eq!(
            8,
            provider::deserialize::<CityProfile>(provider::CITIES, "city")?.len()
        );
        Ok(())
    }

    #[test]
    fn missing_table_is_an_error() {
        let res = provider::deserialize::<Job>(provider::JOBS, "jobs");
        assert!(matches!(res, Err(Error::NoCollection(_))));
    }

    #[test]
    fn single_featured_post() {
        let featured: Vec<_> = posts().iter().filter(|p| p.featured).collect();
        assert_eq!(1, featured.len());
        assert_eq!(Some(1), featured_post().map(|p| p.id));
    }

    #[test]
    fn asset_lookup_and_file_name() {
        let logos = asset("7").unwrap();
        assert_eq!(AssetCategory::Media, logos.category);
        assert_eq!("nts-logo-pack.zip", logos.file_name());
        assert!(asset("99").is_none());
    }

    #[test]
    fn verticals_have_translated_summaries() {
        for vertical in verticals() {
            assert!(vertical.summary_key.starts_with("vertical."));
        }
    }
}
