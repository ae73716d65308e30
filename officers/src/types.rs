//! Core types for key officer lookups

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Untyped document as stored in a source cache
pub type RawDocument = serde_json::Value;

/// Per-source list size when the caller does not ask for one
pub const DEFAULT_TOP_N: usize = 10;

/// Fixed liveness answer
pub const PING_MESSAGE: &str = "key_officers_agent ok";

/// The two upstream officer sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    WorldRegistry,
    Pds,
}

impl Source {
    /// Label used as the list key in responses
    pub fn label(&self) -> &'static str {
        match self {
            Source::WorldRegistry => "World Registry",
            Source::Pds => "PDS",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical officer map: person name -> set of titles
///
/// Names keep the order they were first inserted in, which is the order the
/// formatter truncates by. Two maps compare equal when they hold the same
/// names with the same titles, whatever the insertion order.
#[derive(Debug, Clone, Default)]
pub struct OfficerMap {
    entries: Vec<(String, BTreeSet<String>)>,
    index: HashMap<String, usize>,
}

impl OfficerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one title for a name, creating the entry if new
    pub fn insert(&mut self, name: impl Into<String>, title: impl Into<String>) {
        let name = name.into();
        self.titles_mut(name).insert(title.into());
    }

    /// Union a batch of titles into a name's set
    pub fn extend_titles<I>(&mut self, name: &str, titles: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.titles_mut(name.to_string()).extend(titles);
    }

    pub fn titles(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.index.get(name).map(|&idx| &self.entries[idx].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries
            .iter()
            .map(|(name, titles)| (name.as_str(), titles))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    fn titles_mut(&mut self, name: String) -> &mut BTreeSet<String> {
        let idx = match self.index.get(&name).copied() {
            Some(idx) => idx,
            None => {
                let idx = self.entries.len();
                self.index.insert(name.clone(), idx);
                self.entries.push((name, BTreeSet::new()));
                idx
            }
        };
        &mut self.entries[idx].1
    }
}

impl PartialEq for OfficerMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, titles)| other.titles(name) == Some(titles))
    }
}

impl Eq for OfficerMap {}

impl<N, T> FromIterator<(N, T)> for OfficerMap
where
    N: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut map = OfficerMap::new();
        for (name, title) in iter {
            map.insert(name, title);
        }
        map
    }
}

/// One rendered officer row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficerRecord {
    pub name: String,
    pub title: String,
}

/// Rendered lists, keyed by source label
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyOfficers {
    #[serde(rename = "World Registry")]
    pub world_registry: Vec<OfficerRecord>,
    #[serde(rename = "PDS")]
    pub pds: Vec<OfficerRecord>,
    pub combined: Vec<OfficerRecord>,
}

/// Full canonical map sizes, before truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OfficerCounts {
    pub wr: usize,
    pub pds: usize,
    pub combined: usize,
}

/// Phase timings in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LookupTiming {
    pub load_caches: f64,
}

/// Response payload returned to every transport verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyOfficersResponse {
    pub company: String,
    pub key_officers: KeyOfficers,
    pub counts: OfficerCounts,
    pub timing_ms: LookupTiming,
}
