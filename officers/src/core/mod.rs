//! Pure officer transforms: defensive document access, per-source
//! normalization, merge and presentation

pub mod document;
pub mod format;
pub mod merge;
pub mod normalize;

pub use document::{array_field, document_len, empty_document, field, nested_text, text_field};
pub use format::{assemble_response, combined_cap, format_officers, join_titles};
pub use merge::merge_officers;
pub use normalize::{canonicalize_title, normalize_pds, normalize_world_registry};
