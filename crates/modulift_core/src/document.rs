use log::trace;
use std::collections::BTreeMap;

use crate::urls::OriginalDocumentUrl;

/// A structural fact about a document, extracted by the upstream analysis
/// stage.
///
/// The analyzer tags features with free-form kind labels; the kinds the
/// scanner cares about form a closed set, so they are variants here and
/// matching on them is exhaustive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature {
    /// An embedded or owned document node. Every standalone document carries
    /// a non-inline reference to itself; inline references point at fragments
    /// embedded in the document body.
    DocumentReference { inline: bool },
    /// A reference to an external script. The payload document is looked up
    /// in the [`FeatureGraph`] by its original URL.
    ScriptImport { imported: OriginalDocumentUrl },
    /// Any other structural fact. The label is kept for diagnostics only.
    Other { kind: String },
}

/// A parsed source unit, identified by its original URL.
#[derive(Debug, Clone)]
pub struct Document {
    pub url: OriginalDocumentUrl,
    /// True if this document is embedded in another document rather than
    /// being a standalone file.
    pub is_inline: bool,
    pub features: Vec<Feature>,
}

impl Document {
    pub fn new(url: impl Into<OriginalDocumentUrl>, is_inline: bool) -> Self {
        Self { url: url.into(), is_inline, features: Vec::new() }
    }

    /// A standalone document, pre-seeded with the non-inline reference to
    /// itself that the analyzer attaches to every top-level document.
    pub fn standalone(url: impl Into<OriginalDocumentUrl>) -> Self {
        let mut document = Self::new(url, false);
        document.features.push(Feature::DocumentReference { inline: false });
        document
    }
}

/// All analyzed documents of a package, keyed by original URL.
///
/// Populated by the upstream analysis stage and read-only from the scanner's
/// perspective.
#[derive(Debug, Default)]
pub struct FeatureGraph {
    documents: BTreeMap<OriginalDocumentUrl, Document>,
}

impl FeatureGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document, replacing any previous document with the same URL.
    pub fn insert(&mut self, document: Document) -> Option<Document> {
        trace!("Adding {} to the feature graph", document.url);
        self.documents.insert(document.url.clone(), document)
    }

    pub fn document(&self, url: &OriginalDocumentUrl) -> Option<&Document> {
        self.documents.get(url)
    }

    /// Documents in URL order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
