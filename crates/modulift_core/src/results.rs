use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::urls::{ConvertedDocumentUrl, OriginalDocumentUrl};

/// Bookkeeping for one namespace member that became an export, produced by
/// the namespace rewriter. The scanner never looks inside; it only forwards
/// the collection in rewrite order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMigrationRecord {
    pub old_namespaced_name: String,
    pub es6_export_name: String,
}

impl ExportMigrationRecord {
    pub fn new(
        old_namespaced_name: impl Into<String>,
        es6_export_name: impl Into<String>,
    ) -> Self {
        Self {
            old_namespaced_name: old_namespaced_name.into(),
            es6_export_name: es6_export_name.into(),
        }
    }
}

/// How a single document gets emitted under the new module layout.
///
/// `DeleteFile` carries no converted fields at all: a wrapper document must
/// not be emitted, and the variant shape keeps that invariant by
/// construction. The other two variants always carry both the converted URL
/// and the converted file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScanResult {
    #[serde(rename_all = "camelCase")]
    DeleteFile { original_url: OriginalDocumentUrl },
    #[serde(rename_all = "camelCase")]
    JsModule {
        original_url: OriginalDocumentUrl,
        converted_url: ConvertedDocumentUrl,
        converted_file_path: PathBuf,
        export_migration_records: Vec<ExportMigrationRecord>,
    },
    #[serde(rename_all = "camelCase")]
    HtmlDocument {
        original_url: OriginalDocumentUrl,
        converted_url: ConvertedDocumentUrl,
        converted_file_path: PathBuf,
    },
}

impl ScanResult {
    /// Every result carries the document it was produced for.
    pub fn original_url(&self) -> &OriginalDocumentUrl {
        match self {
            ScanResult::DeleteFile { original_url }
            | ScanResult::JsModule { original_url, .. }
            | ScanResult::HtmlDocument { original_url, .. } => original_url,
        }
    }
}
