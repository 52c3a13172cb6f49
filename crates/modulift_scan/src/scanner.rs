use log::{debug, trace};

use modulift_core::{
    ConversionSettings, ConvertedDocumentUrl, Document, Feature, FeatureGraph,
    OriginalDocumentUrl, ScanError, ScanResult, UrlMapper,
};

use crate::rewrite::NamespaceRewriter;

/// Classifies a single document into a [`ScanResult`].
///
/// A scanner is bound to one document plus everything the surrounding
/// pipeline already resolved for it: the package feature graph, the
/// document's original and converted URLs, the conversion settings, the URL
/// mapper and the namespace rewriter. It holds no mutable state, so
/// classifying is idempotent for a given document.
pub struct DocumentScanner<'a, U, R> {
    graph: &'a FeatureGraph,
    document: &'a Document,
    original_url: OriginalDocumentUrl,
    converted_url: ConvertedDocumentUrl,
    settings: &'a ConversionSettings,
    urls: &'a U,
    rewriter: &'a R,
}

impl<'a, U, R> DocumentScanner<'a, U, R>
where
    U: UrlMapper,
    R: NamespaceRewriter,
{
    pub fn new(
        graph: &'a FeatureGraph,
        document: &'a Document,
        original_url: OriginalDocumentUrl,
        converted_url: ConvertedDocumentUrl,
        settings: &'a ConversionSettings,
        urls: &'a U,
        rewriter: &'a R,
    ) -> Self {
        Self { graph, document, original_url, converted_url, settings, urls, rewriter }
    }

    /// Scan a document's new interface as a JS module.
    ///
    /// A wrapper document is redundant once the script it forwards to is
    /// promoted to be the module, so it classifies as `DeleteFile`; any other
    /// document has its namespace assignments rewritten and classifies as
    /// `JsModule` carrying the export migration records.
    pub fn scan_js_module(&self) -> Result<ScanResult, ScanError> {
        if self.is_wrapper_html_document()? {
            debug!(
                "{} only wraps its own converted script, marking for deletion",
                self.original_url
            );
            return Ok(ScanResult::DeleteFile { original_url: self.original_url.clone() });
        }

        let outcome = self
            .rewriter
            .rewrite_namespaces_as_exports(self.document, &self.settings.namespaces)?;
        trace!(
            "{} exports {} migrated bindings",
            self.original_url,
            outcome.export_migration_records.len()
        );

        Ok(ScanResult::JsModule {
            original_url: self.original_url.clone(),
            converted_url: self.converted_url.clone(),
            converted_file_path: self.urls.converted_module_path(&self.original_url),
            export_migration_records: outcome.export_migration_records,
        })
    }

    /// Scan a document as a top-level HTML document. Top-level documents have
    /// no exports to scan, so this only carries the URL mapping information
    /// through. Never invokes the rewriter.
    pub fn scan_top_level_html_document(&self) -> ScanResult {
        ScanResult::HtmlDocument {
            original_url: self.original_url.clone(),
            converted_url: self.converted_url.clone(),
            converted_file_path: self.urls.converted_document_path(&self.original_url),
        }
    }

    /// Determines if the document is just a wrapper around a script tag
    /// pointing to an external script that converts to the same URL this
    /// document itself will occupy. Anything with more than one substantive
    /// feature, or whose sole feature is not a script import, is never a
    /// wrapper.
    fn is_wrapper_html_document(&self) -> Result<bool, ScanError> {
        // Every standalone document appears in its own feature set as a
        // non-inline document reference. That self-reference says nothing
        // about the document's content, so drop it before counting. Inline
        // document references are kept.
        let substantive: Vec<&Feature> = self
            .document
            .features
            .iter()
            .filter(|f| !matches!(f, Feature::DocumentReference { inline: false }))
            .collect();

        // Exactly one remaining feature, not "at least one".
        let [only] = substantive.as_slice() else {
            trace!(
                "{} has {} substantive features, not a wrapper",
                self.original_url,
                substantive.len()
            );
            return Ok(false);
        };

        match only {
            Feature::ScriptImport { imported } => {
                let imported_document = self.graph.document(imported).ok_or_else(|| {
                    ScanError::InvalidFeatureGraph {
                        reason: format!(
                            "script import in `{}` points at `{imported}`, which was never analyzed",
                            self.original_url
                        ),
                    }
                })?;
                let old_script_url = self.urls.resolved_url(imported_document)?;
                let new_script_url = self.urls.convert_script_url(&old_script_url);
                trace!(
                    "Sole script import of {} converts to '{}', the document itself to '{}'",
                    self.original_url,
                    new_script_url,
                    self.converted_url
                );
                Ok(new_script_url == self.converted_url)
            }
            Feature::DocumentReference { .. } | Feature::Other { .. } => Ok(false),
        }
    }
}
