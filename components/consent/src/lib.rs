//! Cookie consent banner and preferences.
//!
//! The visitor's choice is stored under `cookie-consent` as a JSON
//! object with the four category flags.
use thiserror::Error;

mod preferences;
mod state_machine;

pub use preferences::{CookieKind, CookiePreferences};
pub use state_machine::{Action, ConsentFlow, ConsentState};

/// Storage key for the stored consent choice.
pub static CONSENT_KEY: &str = "cookie-consent";

/// Days before a stored choice expires.
pub const EXPIRES_DAYS: u32 = 365;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown cookie category {0}, expected necessary, analytics, marketing or functional")]
    UnknownCookieKind(String),
}

type Result<T> = std::result::Result<T, Error>;
