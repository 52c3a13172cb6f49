use anyhow::{Result, anyhow};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::collections::BTreeMap;

use modulift_core::{
    ConversionSettings, FeatureGraph, OriginalDocumentUrl, ScanError, ScanResult, UrlMapper,
};

use crate::{rewrite::NamespaceRewriter, scanner::DocumentScanner};

/// How the dependency-graph stage decided a document should be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    /// The document is imported by others and becomes a JS module.
    JsModule,
    /// The document is an entry point; it stays a top-level HTML document
    /// with no export surface.
    TopLevelHtmlDocument,
}

/// A document whose classification was aborted. The rest of the package is
/// unaffected.
#[derive(Debug)]
pub struct ScanFailure {
    pub url: OriginalDocumentUrl,
    pub error: ScanError,
}

#[derive(Debug)]
pub struct ClassifyOutcome {
    /// Successful classifications, in URL order.
    pub results: Vec<ScanResult>,
    /// Documents whose conversion was aborted, in URL order.
    pub failures: Vec<ScanFailure>,
    pub documents_scanned: usize,
}

/// Classify every document that has a role assignment.
///
/// Classification of one document never observes another beyond the
/// read-only feature graph, so the role map is processed in parallel. A
/// failing document is reported in the outcome and does not stop the run.
pub fn classify_package<U, R>(
    graph: &FeatureGraph,
    roles: &BTreeMap<OriginalDocumentUrl, DocumentRole>,
    settings: &ConversionSettings,
    urls: &U,
    rewriter: &R,
) -> Result<ClassifyOutcome>
where
    U: UrlMapper + Sync,
    R: NamespaceRewriter + Sync,
{
    info!("Classifying {} of {} analyzed documents", roles.len(), graph.len());
    if roles.is_empty() {
        return Err(anyhow!("No documents to classify"));
    }

    let scanned: Vec<std::result::Result<ScanResult, ScanFailure>> = roles
        .par_iter()
        .map(|(url, role)| {
            debug!("Classifying {} as {:?}", url, role);
            classify_document(graph, url, *role, settings, urls, rewriter).map_err(|error| {
                warn!("Aborting conversion of {}: {}", url, error);
                ScanFailure { url: url.clone(), error }
            })
        })
        .collect();

    let mut results = Vec::new();
    let mut failures = Vec::new();
    for entry in scanned {
        match entry {
            Ok(result) => results.push(result),
            Err(failure) => failures.push(failure),
        }
    }

    info!("Classification complete: {} results, {} failures", results.len(), failures.len());
    Ok(ClassifyOutcome { results, failures, documents_scanned: roles.len() })
}

fn classify_document<U, R>(
    graph: &FeatureGraph,
    url: &OriginalDocumentUrl,
    role: DocumentRole,
    settings: &ConversionSettings,
    urls: &U,
    rewriter: &R,
) -> std::result::Result<ScanResult, ScanError>
where
    U: UrlMapper,
    R: NamespaceRewriter,
{
    let Some(document) = graph.document(url) else {
        return Err(ScanError::InvalidFeatureGraph {
            reason: format!("`{url}` has a role assignment but no analyzed document"),
        });
    };
    let original_url = urls.resolved_url(document)?;

    match role {
        DocumentRole::JsModule => {
            let converted_url = urls.convert_script_url(&original_url);
            DocumentScanner::new(
                graph,
                document,
                original_url,
                converted_url,
                settings,
                urls,
                rewriter,
            )
            .scan_js_module()
        }
        DocumentRole::TopLevelHtmlDocument => {
            let converted_url = urls.convert_document_url(&original_url);
            Ok(DocumentScanner::new(
                graph,
                document,
                original_url,
                converted_url,
                settings,
                urls,
                rewriter,
            )
            .scan_top_level_html_document())
        }
    }
}
