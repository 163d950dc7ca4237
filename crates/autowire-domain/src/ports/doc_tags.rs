//! Doc Comment Tag Port
//!
//! Extracting per-parameter types from free-text documentation is delegated
//! to a pluggable parser returning structured records.

use crate::value_objects::ParamTag;

/// Parser turning doc comment text into tag records
pub trait DocTagParser: Send + Sync {
    /// Every `@<tag>` entry carrying a type and a variable name
    fn tags_named(&self, doc_comment: &str, tag: &str) -> Vec<ParamTag>;
}
