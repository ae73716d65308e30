//! Presentation of officer maps and assembly of the response payload

use std::collections::BTreeSet;

use crate::types::{
    KeyOfficers, KeyOfficersResponse, LookupTiming, OfficerCounts, OfficerMap, OfficerRecord,
};

/// Render the first `cap` officers in insertion order
///
/// This is a truncation, not a ranking.
pub fn format_officers(officers: &OfficerMap, cap: usize) -> Vec<OfficerRecord> {
    officers
        .iter()
        .take(cap)
        .map(|(name, titles)| OfficerRecord {
            name: name.to_string(),
            title: join_titles(titles),
        })
        .collect()
}

/// Titles sorted ordinally and joined with `", "`
pub fn join_titles(titles: &BTreeSet<String>) -> String {
    titles
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The combined list pools both sources, so it gets twice the room
pub fn combined_cap(top_n: usize) -> usize {
    top_n.saturating_mul(2)
}

/// Build the payload from the three canonical maps
pub fn assemble_response(
    company: &str,
    world_registry: &OfficerMap,
    pds: &OfficerMap,
    combined: &OfficerMap,
    top_n: usize,
    load_caches_ms: f64,
) -> KeyOfficersResponse {
    KeyOfficersResponse {
        company: company.to_string(),
        key_officers: KeyOfficers {
            world_registry: format_officers(world_registry, top_n),
            pds: format_officers(pds, top_n),
            combined: format_officers(combined, combined_cap(top_n)),
        },
        counts: OfficerCounts {
            wr: world_registry.len(),
            pds: pds.len(),
            combined: combined.len(),
        },
        timing_ms: LookupTiming {
            load_caches: load_caches_ms,
        },
    }
}
