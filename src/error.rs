use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown log level {0}")]
    UnknownLogLevel(String),

    #[error("No downloadable asset with id {0}")]
    UnknownAsset(String),

    #[error("Panic: {0}")]
    Panic(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    UrlParse(#[from] url::ParseError),

    #[error(transparent)]
    Config(#[from] config::Error),
    #[error(transparent)]
    Storage(#[from] storage::Error),
    #[error(transparent)]
    Locale(#[from] locale::Error),
    #[error(transparent)]
    Collections(#[from] collections::Error),
    #[error(transparent)]
    Consent(#[from] consent::Error),
    #[error(transparent)]
    Contact(#[from] contact::Error),
}
