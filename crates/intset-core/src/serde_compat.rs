//! JSON wire format for collections of named sets.
//!
//! Sets travel as their canonical text, so a document stays readable and
//! every value is re-validated on import.

use serde::{Deserialize, Serialize};

use crate::set::IntSet;

pub const CURRENT_VERSION: &str = "1";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WireExport {
    pub version: String,
    #[serde(default)]
    pub sets: Vec<WireSet>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WireSet {
    pub name: String,
    pub value: IntSet,
}

impl WireExport {
    pub fn new(sets: Vec<WireSet>) -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            sets,
        }
    }
}

pub fn export_json(sets: &[(String, IntSet)]) -> serde_json::Result<String> {
    let wire = WireExport::new(
        sets.iter()
            .map(|(name, value)| WireSet {
                name: name.clone(),
                value: value.clone(),
            })
            .collect(),
    );
    serde_json::to_string_pretty(&wire)
}

/// Decode a document produced by [`export_json`]. Unknown versions are
/// accepted as long as the shape matches.
pub fn import_json(json: &str) -> serde_json::Result<Vec<(String, IntSet)>> {
    let wire: WireExport = serde_json::from_str(json)?;
    Ok(wire.sets.into_iter().map(|s| (s.name, s.value)).collect())
}
