//! The read-only country catalog.
//!
//! Built once at startup from hand-authored records and never mutated by
//! the state machine. Lookup is by unique country name; iteration keeps
//! the authored order so menus list countries as written.

use std::collections::BTreeMap;

use canopy_types::CountryRecord;

use crate::error::WorldError;

/// Static lookup table of country records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CountryRecord>,
    index: BTreeMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names.
    pub fn new(records: Vec<CountryRecord>) -> Result<Self, WorldError> {
        let mut index = BTreeMap::new();
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.name.clone(), position).is_some() {
                return Err(WorldError::DuplicateCountry(record.name.clone()));
            }
        }
        Ok(Self { records, index })
    }

    /// Look up a country by name.
    pub fn get(&self, name: &str) -> Option<&CountryRecord> {
        self.index
            .get(name)
            .and_then(|&position| self.records.get(position))
    }

    /// Look up a country, treating absence as a contract violation.
    pub fn require(&self, name: &str) -> Result<&CountryRecord, WorldError> {
        self.get(name)
            .ok_or_else(|| WorldError::UnknownCountry(name.to_owned()))
    }

    /// Whether a country is listed.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Country names in authored order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// All records in authored order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
