use std::env;
use std::panic;

use log::error;

use crate::{Error, Result};

pub mod consent;
pub mod contact;
pub mod lang;
pub mod listing;

pub use self::consent::Consent;
pub use self::contact::Contact;
pub use self::lang::Lang;
pub use self::listing::{Assets, Blog, City, Jobs};

pub static LOG_ENV_NAME: &str = "NTS_LOG";

/// Configure the logger from a log level name.
pub fn log_level(level: &str) -> Result<()> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => {
            env::set_var(LOG_ENV_NAME, level)
        }
        _ => {
            // Still need a logger to report the error
            env::set_var(LOG_ENV_NAME, "error");
            pretty_env_logger::init_custom_env(LOG_ENV_NAME);
            return Err(Error::UnknownLogLevel(level.to_string()));
        }
    }
    pretty_env_logger::init_custom_env(LOG_ENV_NAME);
    Ok(())
}

pub fn print_error(e: Error) {
    match e {
        Error::Contact(ref e) => {
            error!("Contact form not sent");
            error!("{}", e);
        }
        _ => error!("{}", e),
    }
}

pub fn fatal(e: Error) -> Result<()> {
    print_error(e);
    std::process::exit(1);
}

pub fn panic_hook() {
    panic::set_hook(Box::new(|info| {
        let message = format!("{}", info);
        print_error(Error::Panic(message));
    }));
}
