//! Core data model for modulift, a converter that migrates packages from
//! HTML-import-style inclusion to standard JS modules.
//!
//! This crate provides the vocabulary the conversion stages exchange:
//! - Analyzed documents and their structural features
//! - URL mapping between the legacy layout and the converted module layout
//! - Conversion configuration read from a manifest
//! - Classification results and export bookkeeping
//! - The per-document failure taxonomy

mod document;
mod error;
mod results;
mod settings;
mod urls;

// Re-export public API
pub use document::{Document, Feature, FeatureGraph};
pub use error::{RewriteError, ScanError};
pub use results::{ExportMigrationRecord, ScanResult};
pub use settings::ConversionSettings;
pub use urls::{ConvertedDocumentUrl, OriginalDocumentUrl, PackageUrlMapper, UrlMapper};
