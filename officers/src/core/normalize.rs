//! Source normalizers
//!
//! Each source nests its officers differently; both are reduced to the same
//! canonical `OfficerMap`. Missing structure at any level means "no
//! officers", never an error.

use serde_json::Value;

use crate::core::document::{array_field, field, nested_text, text_field};
use crate::types::{OfficerMap, RawDocument};

/// Title used when a World Registry person carries none
pub const DEFAULT_OFFICER_TITLE: &str = "Officer";

/// Title used when a PDS director carries no relationship type
pub const DEFAULT_DIRECTOR_TITLE: &str = "Director";

/// Record kind that holds the PDS director list
const PDS_COMPANY_KIND: &str = "Company";

/// Normalize a World Registry document
///
/// Shape: `{"result": [.., {"people": [{"primaryName": {"fullName": ..}, "title": ..}]}]}`.
/// World Registry puts the authoritative record second whenever it returns
/// more than one, so index 1 wins over index 0.
/// A blank or whitespace-only title is treated as absent and becomes `Officer`.
pub fn normalize_world_registry(doc: &RawDocument) -> OfficerMap {
    let mut officers = OfficerMap::new();

    let record = match array_field(doc, "result") {
        [] => return officers,
        [only] => only,
        [_, authoritative, ..] => authoritative,
    };

    for person in array_field(record, "people") {
        let Some(name) = nested_text(person, "primaryName", "fullName") else {
            continue;
        };
        let title = text_field(person, "title").unwrap_or(DEFAULT_OFFICER_TITLE);
        officers.insert(name, title);
    }

    officers
}

/// Normalize a PDS document
///
/// Shape: `{"result": [{"kind": "Company", "directors": [{"primaryName": {"fullName": ..}, "relType": ..}]}]}`.
/// Only the first `Company` record is read.
/// A blank `relType` falls through to `title`, then to `Director`.
pub fn normalize_pds(doc: &RawDocument) -> OfficerMap {
    let mut officers = OfficerMap::new();

    let Some(record) = array_field(doc, "result").iter().find(|r| is_company(r)) else {
        return officers;
    };

    for director in array_field(record, "directors") {
        let name = nested_text(director, "primaryName", "fullName")
            .or_else(|| text_field(director, "name"));
        let Some(name) = name else {
            continue;
        };

        let raw_title = text_field(director, "relType")
            .or_else(|| text_field(director, "title"))
            .unwrap_or(DEFAULT_DIRECTOR_TITLE);
        let title = canonicalize_title(raw_title);
        if title.is_empty() {
            officers.insert(name, DEFAULT_DIRECTOR_TITLE);
        } else {
            officers.insert(name, title);
        }
    }

    officers
}

fn is_company(record: &Value) -> bool {
    field(record, "kind").and_then(Value::as_str) == Some(PDS_COMPANY_KIND)
}

/// `executive_director` -> `Executive Director`
///
/// Underscores become spaces, then every run of letters is capitalised with
/// the rest of the run lower-cased. Any non-letter starts a new run.
pub fn canonicalize_title(raw: &str) -> String {
    let mut title = String::with_capacity(raw.len());
    let mut in_word = false;

    for ch in raw.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if in_word {
                title.extend(ch.to_lowercase());
            } else {
                title.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(ch);
            in_word = false;
        }
    }

    title.trim().to_string()
}
