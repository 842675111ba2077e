use std::io;
use std::path::PathBuf;

static ROOT_DIR: &str = ".nts";
static STORAGE_FILE: &str = "storage.json";
static CONFIG_FILE: &str = "site.toml";

/// Directory holding everything the site persists for the current user,
/// created on demand.
pub fn root_dir() -> io::Result<PathBuf> {
    if let Some(home) = home::home_dir() {
        let buf = home.join(ROOT_DIR);
        if !buf.exists() {
            std::fs::create_dir(&buf)?;
        }
        return Ok(buf);
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        "Could not determine home directory".to_string(),
    ))
}

pub fn storage_file() -> io::Result<PathBuf> {
    Ok(root_dir()?.join(STORAGE_FILE))
}

pub fn storage_file_name() -> &'static str {
    STORAGE_FILE
}

/// Name of the optional site configuration file.
pub fn config_file_name() -> &'static str {
    CONFIG_FILE
}
