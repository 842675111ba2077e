use serde::de::DeserializeOwned;

use log::error;

use crate::{Error, Result};

pub(crate) static JOBS: &str = include_str!("../data/jobs.toml");
pub(crate) static POSTS: &str = include_str!("../data/posts.toml");
pub(crate) static ASSETS: &str = include_str!("../data/assets.toml");
pub(crate) static OFFICES: &str = include_str!("../data/offices.toml");
pub(crate) static VERTICALS: &str = include_str!("../data/verticals.toml");
pub(crate) static CITIES: &str = include_str!("../data/cities.toml");

/// Deserialize the array of tables named `table` from a TOML source.
pub fn deserialize<T: DeserializeOwned>(source: &str, table: &str) -> Result<Vec<T>> {
    let mut doc: toml::value::Table = toml::from_str(source)?;
    let items = doc
        .remove(table)
        .ok_or_else(|| Error::NoCollection(table.to_string()))?;
    Ok(items.try_into()?)
}

/// Load one of the embedded collections; a broken source yields
/// an empty collection.
pub(crate) fn load<T: DeserializeOwned>(source: &str, table: &str) -> Vec<T> {
    deserialize(source, table).unwrap_or_else(|e| {
        error!("Collection {} is invalid: {}", table, e);
        Vec::new()
    })
}
