use simplelog::{CombinedLogger, Config, LevelFilter, WriteLogger};
use std::fs::{self, File, OpenOptions};
use std::io::{Error, ErrorKind};
use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR: &str = "rendertransport";
const LOG_FILE: &str = "app.log";

static LOGGER_INSTALLED: OnceLock<bool> = OnceLock::new();

/// `$HOME/.local/share/rendertransport/logs`
pub fn log_dir() -> Result<PathBuf, Error> {
    let home = std::env::var_os("HOME")
        .ok_or_else(|| Error::new(ErrorKind::NotFound, "HOME is not set"))?;
    Ok(PathBuf::from(home)
        .join(".local/share")
        .join(APP_DIR)
        .join("logs"))
}

fn open_log_file() -> Result<File, Error> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
}

/// Installs the file logger. Only the first call installs it; later calls
/// report whether that first install succeeded.
pub fn init_logger() -> Result<(), Error> {
    let file = open_log_file()?;
    let installed = *LOGGER_INSTALLED.get_or_init(|| {
        CombinedLogger::init(vec![WriteLogger::new(
            LevelFilter::Debug,
            Config::default(),
            file,
        )])
        .is_ok()
    });

    if installed {
        Ok(())
    } else {
        Err(Error::new(
            ErrorKind::AlreadyExists,
            "another logger was installed first",
        ))
    }
}
