use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{cities, Coordinates, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    India,
    Japan,
}

impl Country {
    pub fn slug(&self) -> &'static str {
        match self {
            Country::India => "india",
            Country::Japan => "japan",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Country::India => "India",
            Country::Japan => "Japan",
        }
    }

    /// Profile for a city we hold no data for.
    fn generic(&self, slug: &str) -> CityProfile {
        let strings = |items: &[&str]| -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        };
        match self {
            Country::India => CityProfile {
                country: *self,
                slug: slug.to_string(),
                name: capitalize(slug),
                region: self.name().to_string(),
                population: "N/A".to_string(),
                description: "Emerging market with growing opportunities"
                    .to_string(),
                opportunities: strings(&[
                    "Technology",
                    "Business Services",
                    "Manufacturing",
                    "Trade",
                ]),
                key_industries: strings(&[
                    "Services",
                    "Manufacturing",
                    "Trade",
                    "Technology",
                ]),
                coordinates: Coordinates {
                    lat: 20.5937,
                    lng: 78.9629,
                },
            },
            Country::Japan => CityProfile {
                country: *self,
                slug: slug.to_string(),
                name: capitalize(slug),
                region: self.name().to_string(),
                population: "N/A".to_string(),
                description:
                    "Important Japanese city with business opportunities"
                        .to_string(),
                opportunities: strings(&[
                    "Technology",
                    "Manufacturing",
                    "Services",
                    "Innovation",
                ]),
                key_industries: strings(&[
                    "Manufacturing",
                    "Services",
                    "Technology",
                    "Trade",
                ]),
                coordinates: Coordinates {
                    lat: 36.2048,
                    lng: 138.2529,
                },
            },
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Country {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "india" => Ok(Country::India),
            "japan" => Ok(Country::Japan),
            _ => Err(Error::UnknownCountry(s.to_string())),
        }
    }
}

/// Market profile shown on a city location page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityProfile {
    pub country: Country,
    pub slug: String,
    pub name: String,
    /// State (India) or prefecture (Japan).
    pub region: String,
    pub population: String,
    pub description: String,
    pub opportunities: Vec<String>,
    pub key_industries: Vec<String>,
    pub coordinates: Coordinates,
}

/// Upper case the first character only, `new-delhi` becomes `New-delhi`.
fn capitalize(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Find the profile for a city, unknown cities get a generic profile.
pub fn city(country: Country, slug: &str) -> CityProfile {
    cities()
        .iter()
        .find(|c| c.country == country && c.slug == slug)
        .cloned()
        .unwrap_or_else(|| country.generic(slug))
}
