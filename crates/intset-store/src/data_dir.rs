use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::store::Store;

pub const DATA_DIR_ENV: &str = "INTSET_DATA_DIR";
pub const DB_FILE: &str = "sets.db";

/// `~/.intset`, or `./.intset` when no home directory is known.
pub fn default_base_dir() -> PathBuf {
    dirs_home().join(".intset")
}

fn dirs_home() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Explicit override, then `INTSET_DATA_DIR`, then the default.
pub fn resolve_base_dir(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(PathBuf::from)
        .or_else(|| env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(default_base_dir)
}

/// Data directory layout:
///
/// ```text
/// <base>/
/// ├── config.toml   (optional)
/// └── sets.db
/// ```
pub struct DataDir {
    base: PathBuf,
    config: Config,
}

impl DataDir {
    /// Create the directory if needed and load its config.
    pub fn open(explicit: Option<&Path>) -> Result<Self> {
        let base = resolve_base_dir(explicit);
        fs::create_dir_all(&base)?;
        let config = Config::load(&base)?;
        Ok(Self { base, config })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn db_path(&self) -> PathBuf {
        self.base.join(DB_FILE)
    }

    pub fn open_store(&self) -> Result<Store> {
        Store::open(&self.db_path(), &self.config)
    }

    /// Size of the database file in bytes, 0 if it does not exist yet.
    pub fn db_size(&self) -> u64 {
        fs::metadata(self.db_path()).map(|m| m.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(resolve_base_dir(Some(dir.path())), dir.path());
    }

    #[test]
    fn test_default_ends_with_intset() {
        assert!(default_base_dir().ends_with(".intset"));
    }

    #[test]
    fn test_open_creates_dir_and_store() {
        let dir = tempfile::TempDir::new().unwrap();
        let base = dir.path().join("nested").join("data");
        let data = DataDir::open(Some(&base)).unwrap();
        assert!(base.is_dir());

        let store = data.open_store().unwrap();
        store.put("x", &intset_core::IntSet::parse("{1}").unwrap()).unwrap();
        assert!(data.db_path().exists());
    }

    #[test]
    fn test_uncreatable_dir_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("plain-file");
        fs::write(&file, "x").unwrap();
        let err = DataDir::open(Some(&file.join("sub"))).err().unwrap();
        assert!(matches!(err, crate::error::StoreError::Io(_)), "got {err:?}");
    }

    #[test]
    fn test_config_picked_up() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "[parse]\nmax_digits = 5\n").unwrap();
        let data = DataDir::open(Some(dir.path())).unwrap();
        assert_eq!(data.config().parse.max_digits, 5);
        let store = data.open_store().unwrap();
        assert!(store.parse("{12345}").is_err());
    }
}
