use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub department: String,
    pub location: String,
    /// Employment type, eg: `Full-time`.
    pub kind: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub urgent: bool,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub content: Option<String>,
    pub author: String,
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Pdf,
    Pptx,
    Docx,
    Jpg,
    Mp4,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::Pdf => "PDF",
            AssetKind::Pptx => "PPTX",
            AssetKind::Docx => "DOCX",
            AssetKind::Jpg => "JPG",
            AssetKind::Mp4 => "MP4",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetCategory {
    Brochure,
    CaseStudy,
    PitchDeck,
    Media,
}

impl AssetCategory {
    pub fn all() -> &'static [AssetCategory] {
        &[
            AssetCategory::Brochure,
            AssetCategory::CaseStudy,
            AssetCategory::PitchDeck,
            AssetCategory::Media,
        ]
    }

    /// Identifier used by the category selector.
    pub fn key(&self) -> &'static str {
        match self {
            AssetCategory::Brochure => "brochure",
            AssetCategory::CaseStudy => "case-study",
            AssetCategory::PitchDeck => "pitch-deck",
            AssetCategory::Media => "media",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetCategory::Brochure => "Brochures",
            AssetCategory::CaseStudy => "Case Studies",
            AssetCategory::PitchDeck => "Pitch Decks",
            AssetCategory::Media => "Media Assets",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: AssetKind,
    pub size: String,
    pub category: AssetCategory,
    pub download_url: String,
    pub preview_url: Option<String>,
}

impl Asset {
    /// File name of the download, falls back to the title.
    pub fn file_name(&self) -> &str {
        Path::new(&self.download_url)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.title)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Office {
    pub country: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertical {
    pub id: String,
    pub title: String,
    /// Name offered by the contact form.
    pub label: String,
    /// Translation key for the one line summary.
    pub summary_key: String,
    pub full_description: String,
    pub features: Vec<String>,
    pub technologies: Vec<String>,
    pub markets: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}
