//! Compiler Configuration
//!
//! JSON settings for a compilation session:
//!
//! ```json
//! { "languageVersion": "3.0", "fileKind": "component", "catalogPath": "tag-helpers.json" }
//! ```

use crate::descriptors::TagHelperCatalog;
use crate::file_kinds::FileKind;
use crate::language_version::LanguageVersion;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerConfig {
    pub language_version: LanguageVersion,
    pub file_kind: FileKind,
    /// Relative paths are resolved against the directory of the config file.
    pub catalog_path: Option<PathBuf>,
}

impl CompilerConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: CompilerConfig =
            serde_json::from_str(json).context("invalid compiler configuration")?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config = CompilerConfig::from_json_str(&content)
            .with_context(|| format!("failed to load config {}", path.display()))?;

        if let (Some(catalog_path), Some(base)) = (config.catalog_path.as_ref(), path.parent()) {
            if catalog_path.is_relative() {
                config.catalog_path = Some(base.join(catalog_path));
            }
        }
        Ok(config)
    }

    /// Loads the configured catalog, or an empty one when none is configured.
    pub fn load_catalog(&self) -> anyhow::Result<TagHelperCatalog> {
        match &self.catalog_path {
            Some(path) => TagHelperCatalog::load(path),
            None => Ok(TagHelperCatalog::default()),
        }
    }
}
