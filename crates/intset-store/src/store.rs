use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use intset_core::{IntSet, ParseConfig, export_json, import_json};

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::schema;

/// A stored row, value already re-validated.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredSet {
    pub id: Uuid,
    pub name: String,
    pub value: IntSet,
    pub cardinality: usize,
    pub updated_at: String,
}

/// Named, persistent `IntSet` values backed by one SQLite file.
pub struct Store {
    conn: Connection,
    parse: ParseConfig,
}

impl Store {
    pub fn open(path: &Path, config: &Config) -> Result<Self> {
        let conn = Connection::open(path)?;
        schema::initialize(&conn, config.store.busy_timeout_ms)?;
        tracing::info!("opened set store at {}", path.display());
        Ok(Self {
            conn,
            parse: config.parse,
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open_in_memory_with(&Config::default())
    }

    pub fn open_in_memory_with(config: &Config) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn, config.store.busy_timeout_ms)?;
        Ok(Self {
            conn,
            parse: config.parse,
        })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Parse text with this store's configured limits.
    pub fn parse(&self, text: &str) -> Result<IntSet> {
        Ok(IntSet::parse_with(text, &self.parse)?)
    }

    /// Values built elsewhere (default limits, JSON documents) must still
    /// fit this store's limits, or `decode` would reject them later.
    fn check_limits(&self, set: &IntSet) -> Result<()> {
        self.parse(&set.to_string()).map(|_| ())
    }

    pub fn schema_version(&self) -> Result<Option<i64>> {
        schema::get_schema_version(&self.conn)
    }

    // --- Metadata ---

    pub fn get_metadata(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM metadata WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set_metadata(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    // --- Sets ---

    /// Insert or replace the set stored under `name`. The row id survives
    /// replacement. Returns that id.
    pub fn put(&self, name: &str, set: &IntSet) -> Result<Uuid> {
        self.check_limits(set)?;
        put_on(&self.conn, name, set)
    }

    pub fn get(&self, name: &str) -> Result<Option<IntSet>> {
        let text: Option<String> = self
            .conn
            .query_row("SELECT value FROM sets WHERE name = ?1", [name], |row| {
                row.get(0)
            })
            .optional()?;
        text.map(|t| self.decode(name, &t)).transpose()
    }

    /// Like [`get`](Self::get) but a missing name is an error.
    pub fn require(&self, name: &str) -> Result<IntSet> {
        self.get(name)?
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    pub fn remove(&self, name: &str) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM sets WHERE name = ?1", [name])?;
        if rows > 0 {
            tracing::info!("removed set '{name}'");
        }
        Ok(rows > 0)
    }

    pub fn count(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM sets", [], |row| row.get(0))?;
        Ok(n as usize)
    }

    /// All stored sets, ordered by name.
    pub fn list(&self) -> Result<Vec<StoredSet>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, value, cardinality, updated_at FROM sets ORDER BY name",
        )?;
        let rows: Vec<(String, String, String, i64, String)> = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<std::result::Result<_, _>>()?;

        rows.into_iter()
            .map(|(id, name, text, cardinality, updated_at)| {
                let value = self.decode(&name, &text)?;
                if value.len() as i64 != cardinality {
                    return Err(StoreError::InvalidData(format!(
                        "set '{name}' records cardinality {cardinality} but holds {}",
                        value.len()
                    )));
                }
                Ok(StoredSet {
                    id: parse_uuid(&id)?,
                    name,
                    cardinality: value.len(),
                    value,
                    updated_at,
                })
            })
            .collect()
    }

    /// Stored text must re-parse and already be canonical.
    fn decode(&self, name: &str, text: &str) -> Result<IntSet> {
        let set = IntSet::parse_with(text, &self.parse)
            .map_err(|e| StoreError::InvalidData(format!("set '{name}': {e}")))?;
        if set.to_string() != text {
            return Err(StoreError::InvalidData(format!(
                "set '{name}' is not stored in canonical form: {text}"
            )));
        }
        Ok(set)
    }

    // --- JSON ---

    pub fn export_json(&self) -> Result<String> {
        let sets: Vec<(String, IntSet)> = self
            .list()?
            .into_iter()
            .map(|s| (s.name, s.value))
            .collect();
        Ok(export_json(&sets)?)
    }

    pub fn export_json_file(&self, path: &Path) -> Result<usize> {
        let json = self.export_json()?;
        std::fs::write(path, json)?;
        let n = self.count()?;
        tracing::info!("exported {n} sets to {}", path.display());
        Ok(n)
    }

    /// Import every set in a JSON document. All or nothing: one invalid
    /// name or over-limit value leaves the store untouched.
    pub fn import_json(&self, json: &str) -> Result<usize> {
        let sets = import_json(json)?;
        for (name, set) in &sets {
            validate_name(name)?;
            self.check_limits(set)?;
        }
        let tx = self.conn.unchecked_transaction()?;
        for (name, set) in &sets {
            put_on(&tx, name, set)?;
        }
        tx.commit()?;
        Ok(sets.len())
    }

    pub fn import_json_file(&self, path: &Path) -> Result<usize> {
        let json = std::fs::read_to_string(path)?;
        let n = self.import_json(&json)?;
        tracing::info!("imported {n} sets from {}", path.display());
        Ok(n)
    }
}

fn put_on(conn: &Connection, name: &str, set: &IntSet) -> Result<Uuid> {
    validate_name(name)?;
    conn.execute(
        "INSERT INTO sets (id, name, value, cardinality, updated_at)
         VALUES (?1, ?2, ?3, ?4, datetime('now'))
         ON CONFLICT(name) DO UPDATE SET
             value = excluded.value,
             cardinality = excluded.cardinality,
             updated_at = excluded.updated_at",
        params![
            Uuid::new_v4().to_string(),
            name,
            set.to_string(),
            set.len() as i64
        ],
    )?;
    let id: String = conn.query_row("SELECT id FROM sets WHERE name = ?1", [name], |row| {
        row.get(0)
    })?;
    tracing::debug!("stored set '{name}' ({} elements)", set.len());
    parse_uuid(&id)
}

/// Names are letters, digits, `-`, `_` and `.`.
pub fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidData(format!("invalid set name '{name}'")))
    }
}

fn parse_uuid(s: &str) -> Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| StoreError::InvalidData(format!("invalid UUID '{s}': {e}")))
}
