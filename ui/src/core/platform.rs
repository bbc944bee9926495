//! Platform glue: per-user directories and host identification.

use std::path::PathBuf;

use super::storage::StorageError;

/// Environment override for where CSV logs land.
pub const LOG_DIR_ENV: &str = "ADHD_GAMES_LOG_DIR";

/// Directory that holds the append-only session logs.
pub fn log_dir() -> Result<PathBuf, StorageError> {
    if let Some(dir) = std::env::var_os(LOG_DIR_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let dirs = directories::ProjectDirs::from("com", "FocusGrid", "FocusGrid")
        .ok_or(StorageError::NoDataDir)?;
    Ok(dirs.data_dir().join("logs"))
}

/// `os-arch`, logged once at startup.
pub fn platform_string() -> String {
    format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_string_names_os_and_arch() {
        let value = platform_string();
        assert!(value.starts_with(std::env::consts::OS));
        assert!(value.ends_with(std::env::consts::ARCH));
    }
}
