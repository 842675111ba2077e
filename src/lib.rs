//! Localization, content listings and cookie consent for the NTS
//! corporate site.
mod error;

pub mod command;
pub mod context;
pub mod opts;

pub use context::SiteContext;
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Site page paths reported as page views.
pub mod page {
    pub static HOME: &str = "/";
    pub static CAREERS: &str = "/careers";
    pub static BLOG: &str = "/blog";
    pub static RESOURCES: &str = "/resources";
    pub static VERTICALS: &str = "/verticals";
    pub static CONTACT: &str = "/contact";
}
