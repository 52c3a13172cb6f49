use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Configuration for a package conversion.
///
/// The scanner consumes only the namespace name set; the remaining manifest
/// fields belong to other conversion stages and are ignored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSettings {
    /// Global namespace objects whose members are eligible to become export
    /// bindings.
    #[serde(default)]
    pub namespaces: BTreeSet<String>,
}

impl ConversionSettings {
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { namespaces: namespaces.into_iter().map(Into::into).collect() }
    }

    /// Parse settings from conversion manifest text. Hand-maintained
    /// manifests tend to carry `//` comments, so those are accepted.
    pub fn from_json_str(text: &str) -> Result<Self> {
        // Strip comments (simple approach - removes // comments)
        let text_no_comments: String = text
            .lines()
            .map(|line| if let Some(idx) = line.find("//") { &line[..idx] } else { line })
            .collect::<Vec<_>>()
            .join("\n");

        let settings: Self = serde_json::from_str(&text_no_comments)
            .context("Failed to parse conversion settings manifest")?;
        debug!("Loaded {} namespaces from manifest", settings.namespaces.len());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str_reads_namespaces() {
        let manifest = r#"
{
  "namespaces": ["Polymer", "MyApp"]
}
"#;
        let settings = ConversionSettings::from_json_str(manifest).unwrap();
        assert_eq!(settings, ConversionSettings::new(["MyApp", "Polymer"]));
    }

    #[test]
    fn test_from_json_str_accepts_comments() {
        let manifest = r#"
{
  // Namespaces being migrated to exports
  "namespaces": ["MyApp"] // legacy global
}
"#;
        let settings = ConversionSettings::from_json_str(manifest).unwrap();
        assert!(settings.namespaces.contains("MyApp"));
    }

    #[test]
    fn test_from_json_str_ignores_unrelated_fields() {
        // The manifest is a bag shared by all conversion stages.
        let manifest = r#"{"namespaces": ["MyApp"], "excludes": ["demo/"]}"#;
        let settings = ConversionSettings::from_json_str(manifest).unwrap();
        assert_eq!(settings.namespaces.len(), 1);
    }

    #[test]
    fn test_from_json_str_defaults_to_no_namespaces() {
        let settings = ConversionSettings::from_json_str("{}").unwrap();
        assert!(settings.namespaces.is_empty());
    }

    #[test]
    fn test_from_json_str_rejects_malformed_manifest() {
        assert!(ConversionSettings::from_json_str("not json").is_err());
    }
}
