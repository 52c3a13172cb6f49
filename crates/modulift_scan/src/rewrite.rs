use log::trace;
use std::collections::BTreeSet;

use modulift_core::{Document, ExportMigrationRecord, RewriteError};

/// What a rewrite pass did to a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// One entry per rewritten binding, in rewrite order. Empty if nothing
    /// in the document referenced a configured namespace.
    pub export_migration_records: Vec<ExportMigrationRecord>,
}

/// Rewrites qualified namespace member assignments (`MyApp.Util.format = ...`)
/// into export declarations and reports what was exported.
///
/// The scanner treats the rewrite as a black-box synchronous call: it invokes
/// it once per module candidate and forwards the records unchanged. An
/// implementation that cannot safely rewrite a member reports a
/// [`RewriteError`] instead of applying a partial rewrite.
pub trait NamespaceRewriter {
    fn rewrite_namespaces_as_exports(
        &self,
        document: &Document,
        namespaces: &BTreeSet<String>,
    ) -> Result<RewriteOutcome, RewriteError>;
}

/// Rewriter that applies nothing. Useful for dry-run scans where only the
/// classification is of interest.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRewriter;

impl NamespaceRewriter for NullRewriter {
    fn rewrite_namespaces_as_exports(
        &self,
        document: &Document,
        namespaces: &BTreeSet<String>,
    ) -> Result<RewriteOutcome, RewriteError> {
        trace!(
            "Dry-run rewrite of {} ({} namespaces configured)",
            document.url,
            namespaces.len()
        );
        Ok(RewriteOutcome::default())
    }
}
