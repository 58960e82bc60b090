//! Platform directories for the prefs file and the log.

use crate::core::constants::{LOG_FILE, PREFS_FILE};
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;

fn project_dirs() -> io::Result<ProjectDirs> {
    ProjectDirs::from("", "", "flappy-skies").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })
}

/// Config directory, created if needed.
pub fn config_dir() -> io::Result<PathBuf> {
    let dir = project_dirs()?.config_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Data directory, created if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let dir = project_dirs()?.data_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn prefs_path() -> io::Result<PathBuf> {
    Ok(config_dir()?.join(PREFS_FILE))
}

pub fn log_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(LOG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefs_path_format() {
        let path = prefs_path().expect("prefs_path should succeed");
        assert!(path.ends_with(PREFS_FILE));
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    fn test_log_path_format() {
        let path = log_path().expect("log_path should succeed");
        assert!(path.to_string_lossy().ends_with("flappy-skies.log"));
    }
}
