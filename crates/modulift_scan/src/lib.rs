//! Document classification for modulift, a converter that migrates packages
//! from HTML-import-style inclusion to standard JS modules.
//!
//! For every document in a package, the scanner decides one of three fates:
//! - `delete-file`: the document is a pure forwarding wrapper around the
//!   script that will occupy its own converted URL, and must not be emitted
//! - `js-module`: the document becomes a module; namespace assignments are
//!   rewritten into exports, and the migration records travel with the result
//! - `html-document`: the document stays a top-level entry document with a
//!   remapped path and no exports
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use modulift_core::{ConversionSettings, Document, Feature, FeatureGraph, PackageUrlMapper};
//! use modulift_scan::{DocumentRole, NullRewriter, classify_package};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut graph = FeatureGraph::new();
//! let mut wrapper = Document::standalone("app.html");
//! wrapper.features.push(Feature::ScriptImport { imported: "app.js".into() });
//! graph.insert(wrapper);
//! graph.insert(Document::standalone("app.js"));
//!
//! let mut roles = BTreeMap::new();
//! roles.insert("app.html".into(), DocumentRole::JsModule);
//! roles.insert("app.js".into(), DocumentRole::JsModule);
//!
//! let outcome = classify_package(
//!     &graph,
//!     &roles,
//!     &ConversionSettings::default(),
//!     &PackageUrlMapper::new(),
//!     &NullRewriter,
//! )?;
//!
//! // app.html only forwards to app.js, which takes over its converted URL,
//! // so it is classified for deletion; app.js becomes a module.
//! assert_eq!(outcome.results.len(), 2);
//! # Ok(())
//! # }
//! ```

mod pipeline;
mod rewrite;
mod scanner;

// Re-export public API
pub use pipeline::{ClassifyOutcome, DocumentRole, ScanFailure, classify_package};
pub use rewrite::{NamespaceRewriter, NullRewriter, RewriteOutcome};
pub use scanner::DocumentScanner;
