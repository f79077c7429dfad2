//! Canonical ordered integer sets.
//!
//! A set is written `{a,b,c}` with strictly ascending, distinct `i32`
//! elements; `{}` is the empty set. Text is parsed once into a native
//! sorted vector, and the set-algebra operations merge-scan those vectors
//! to produce new values. Values are immutable after construction.
//!
//! Zero I/O. Persistence and the command line live in sibling crates.

pub mod algebra;
pub mod canonical;
pub mod config;
pub mod constants;
pub mod error;
pub mod serde_compat;
pub mod set;
pub mod tokenizer;

pub use algebra::{
    Cursor, Scan, cardinality, contains, difference, equals, intersect, is_subset_of,
    is_superset_of, not_equals, resumable_contains, symmetric_difference, union,
};
pub use canonical::{CanonicalBuffer, Insertion, canonicalize};
pub use config::ParseConfig;
pub use constants::{EMPTY_SET, MAX_DIGITS};
pub use error::{ErrorKind, IntSetError, Result};
pub use serde_compat::{CURRENT_VERSION, WireExport, WireSet, export_json, import_json};
pub use set::{IntSet, format, parse};
pub use tokenizer::tokenize;
