use dashmap::DashMap;
use log::trace;
use path_clean::clean;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    path::{Component, Path, PathBuf},
};

use crate::{document::Document, error::ScanError};

/// Package-relative URL of a source document, before conversion.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OriginalDocumentUrl(String);

impl OriginalDocumentUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OriginalDocumentUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OriginalDocumentUrl {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

impl From<String> for OriginalDocumentUrl {
    fn from(url: String) -> Self {
        Self(url)
    }
}

/// URL of a document under the converted module layout.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConvertedDocumentUrl(String);

impl ConvertedDocumentUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConvertedDocumentUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConvertedDocumentUrl {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

/// URL mapping between the legacy package layout and the converted module
/// layout. The scanner consumes this as an already-resolved collaborator.
pub trait UrlMapper {
    /// The logical package-relative URL of an analyzed document.
    fn resolved_url(&self, document: &Document) -> Result<OriginalDocumentUrl, ScanError>;

    /// Converted URL of an external script reference.
    fn convert_script_url(&self, url: &OriginalDocumentUrl) -> ConvertedDocumentUrl;

    /// Converted URL of a document kept as a top-level document.
    fn convert_document_url(&self, url: &OriginalDocumentUrl) -> ConvertedDocumentUrl;

    /// Output file path for a document converted to a JS module.
    fn converted_module_path(&self, url: &OriginalDocumentUrl) -> PathBuf;

    /// Output file path for a document kept as a top-level document.
    fn converted_document_path(&self, url: &OriginalDocumentUrl) -> PathBuf;
}

/// The mapping applied within a single package: URLs stay package-relative,
/// `.html` becomes `.js` for anything promoted to a module, and converted
/// URLs get the explicit `./` prefix module specifiers need.
#[derive(Debug, Default)]
pub struct PackageUrlMapper {
    script_url_cache: DashMap<OriginalDocumentUrl, ConvertedDocumentUrl>,
}

impl PackageUrlMapper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UrlMapper for PackageUrlMapper {
    fn resolved_url(&self, document: &Document) -> Result<OriginalDocumentUrl, ScanError> {
        let raw = document.url.as_str();
        if raw.is_empty() {
            return Err(ScanError::UnresolvedReference { url: document.url.clone() });
        }

        let cleaned = clean(raw);
        if escapes_package_root(&cleaned) {
            trace!("'{}' escapes the package root", raw);
            return Err(ScanError::UnresolvedReference { url: document.url.clone() });
        }

        Ok(OriginalDocumentUrl::new(cleaned.to_string_lossy().into_owned()))
    }

    fn convert_script_url(&self, url: &OriginalDocumentUrl) -> ConvertedDocumentUrl {
        if let Some(hit) = self.script_url_cache.get(url) {
            trace!("Cache hit for script url conversion: '{}'", url);
            return hit.clone();
        }

        let cleaned = clean(url.as_str());
        let converted =
            ConvertedDocumentUrl::new(format!("./{}", html_to_js(&cleaned.to_string_lossy())));
        trace!("Converted script url '{}' to '{}'", url, converted);
        self.script_url_cache.insert(url.clone(), converted.clone());
        converted
    }

    fn convert_document_url(&self, url: &OriginalDocumentUrl) -> ConvertedDocumentUrl {
        // Top-level documents keep their extension; only the prefix changes.
        ConvertedDocumentUrl::new(format!("./{}", clean(url.as_str()).to_string_lossy()))
    }

    fn converted_module_path(&self, url: &OriginalDocumentUrl) -> PathBuf {
        PathBuf::from(html_to_js(url.as_str()))
    }

    fn converted_document_path(&self, url: &OriginalDocumentUrl) -> PathBuf {
        PathBuf::from(url.as_str())
    }
}

fn html_to_js(url: &str) -> String {
    match url.strip_suffix(".html") {
        Some(stem) => format!("{stem}.js"),
        None => url.to_string(),
    }
}

fn escapes_package_root(path: &Path) -> bool {
    matches!(path.components().next(), Some(Component::ParentDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_url_normalizes_dot_segments() {
        let mapper = PackageUrlMapper::new();
        let document = Document::standalone("./ui/../app.html");
        let resolved = mapper.resolved_url(&document).unwrap();
        assert_eq!(resolved.as_str(), "app.html");
    }

    #[test]
    fn test_resolved_url_rejects_empty_url() {
        let mapper = PackageUrlMapper::new();
        let document = Document::standalone("");
        let err = mapper.resolved_url(&document).unwrap_err();
        assert!(matches!(err, ScanError::UnresolvedReference { .. }));
    }

    #[test]
    fn test_resolved_url_rejects_escape_from_package_root() {
        let mapper = PackageUrlMapper::new();
        let document = Document::standalone("../sibling/app.html");
        let err = mapper.resolved_url(&document).unwrap_err();
        assert!(matches!(err, ScanError::UnresolvedReference { .. }));
    }

    #[test]
    fn test_resolved_url_allows_dot_dot_in_file_names() {
        // "..rc.html" starts with two dots but never leaves the package.
        let mapper = PackageUrlMapper::new();
        let document = Document::standalone("..rc.html");
        assert!(mapper.resolved_url(&document).is_ok());
    }

    #[test]
    fn test_convert_script_url_swaps_html_for_js() {
        let mapper = PackageUrlMapper::new();
        let converted = mapper.convert_script_url(&"ui/app.html".into());
        assert_eq!(converted.as_str(), "./ui/app.js");
    }

    #[test]
    fn test_convert_script_url_keeps_js_suffix() {
        let mapper = PackageUrlMapper::new();
        let converted = mapper.convert_script_url(&"ui/app.js".into());
        assert_eq!(converted.as_str(), "./ui/app.js");
    }

    #[test]
    fn test_convert_script_url_caches_conversions() {
        let mapper = PackageUrlMapper::new();
        let first = mapper.convert_script_url(&"app.js".into());
        let second = mapper.convert_script_url(&"app.js".into());
        assert_eq!(first, second);
        assert_eq!(mapper.script_url_cache.len(), 1);
    }

    #[test]
    fn test_convert_document_url_keeps_extension() {
        let mapper = PackageUrlMapper::new();
        let converted = mapper.convert_document_url(&"index.html".into());
        assert_eq!(converted.as_str(), "./index.html");
    }

    #[test]
    fn test_converted_paths() {
        let mapper = PackageUrlMapper::new();
        assert_eq!(mapper.converted_module_path(&"ui/app.html".into()), PathBuf::from("ui/app.js"));
        assert_eq!(
            mapper.converted_document_path(&"index.html".into()),
            PathBuf::from("index.html")
        );
    }
}
