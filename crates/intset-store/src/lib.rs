//! SQLite persistence for named `IntSet` values, plus the data-directory
//! and `config.toml` handling shared by hosts.

pub mod config;
pub mod data_dir;
pub mod error;
pub mod schema;
pub mod store;

pub use config::{CONFIG_FILE, Config, StoreConfig};
pub use data_dir::{DATA_DIR_ENV, DataDir, default_base_dir, resolve_base_dir};
pub use error::{Result, StoreError};
pub use store::{Store, StoredSet, validate_name};
