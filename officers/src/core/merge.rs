//! Merging canonical officer maps

use crate::types::OfficerMap;

/// Union any number of officer maps by exact name
///
/// Names appear in the order they are first seen across the inputs; titles
/// of a name shared between inputs are unioned. Inputs are left untouched.
pub fn merge_officers(sources: &[&OfficerMap]) -> OfficerMap {
    let mut combined = OfficerMap::new();
    for source in sources {
        for (name, titles) in source.iter() {
            combined.extend_titles(name, titles.iter().cloned());
        }
    }
    combined
}
