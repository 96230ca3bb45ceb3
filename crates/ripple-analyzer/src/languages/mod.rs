//! Import and export extraction for the recognized lexical families
//!
//! This is deliberate best-effort text matching, not parsing: a construct the
//! patterns miss is an acceptable false negative, and malformed source never
//! produces an error. False positives are what the patterns are tuned
//! against.

pub mod ecmascript;
pub mod python;

use ripple_core::model::{ExportRecord, Family, ImportRecord, Language};

/// Trait for family-specific import extractors.
pub trait ImportExtractor {
    /// Extract import declarations from source text, in document order.
    fn extract_imports(&self, content: &str) -> Vec<ImportRecord>;

    /// Extract export declarations. Only the brace family emits any.
    fn extract_exports(&self, _content: &str) -> Vec<ExportRecord> {
        Vec::new()
    }
}

/// Get the extractor for a language, if its family is recognized.
pub fn extractor_for(language: Language) -> Option<Box<dyn ImportExtractor>> {
    match language.family()? {
        Family::Brace => Some(Box::new(ecmascript::BraceExtractor::new())),
        Family::Indent => Some(Box::new(python::IndentExtractor::new())),
    }
}
