//! File-backed template sources
//!
//! This module provides the [`TemplateSource`] adapters the CLI picks from:
//!
//! - [`JsonBundleSource`] - a single JSON bundle (`{"categories": [...]}`)
//! - [`DirectoryTemplateSource`] - one `.json`, `.toml` or `.yaml` file per category
//! - [`BundledTemplateSource`] - the category set compiled into the binary
//!
//! [`source_for`] chooses between them from an optional path.

use super::error::TemplateStoreError;
use super::schema::{RawCategory, categories_from_value};
use dorkforge_application::{TemplateSource, TemplateSourceError};
use dorkforge_domain::Category;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace, warn};

const BUNDLED_TEMPLATES: &str = include_str!("../../data/templates.json");

fn normalize_all(
    raw: Vec<RawCategory>,
    location: &str,
    fallback_id: Option<&str>,
) -> Result<Vec<Category>, TemplateStoreError> {
    raw.into_iter()
        .map(|category| category.normalize(location, fallback_id))
        .collect()
}

fn parse_json_document(content: &str, location: &str) -> Result<Vec<RawCategory>, TemplateStoreError> {
    let value = serde_json::from_str(content).map_err(|source| TemplateStoreError::Json {
        location: location.to_string(),
        source,
    })?;
    categories_from_value(value, location)
}

fn parse_toml_document(content: &str, location: &str) -> Result<Vec<RawCategory>, TemplateStoreError> {
    let value: serde_json::Value =
        toml::from_str(content).map_err(|source| TemplateStoreError::Toml {
            location: location.to_string(),
            source,
        })?;
    categories_from_value(value, location)
}

fn parse_yaml_document(content: &str, location: &str) -> Result<Vec<RawCategory>, TemplateStoreError> {
    let value: serde_json::Value =
        serde_yaml::from_str(content).map_err(|source| TemplateStoreError::Yaml {
            location: location.to_string(),
            source,
        })?;
    categories_from_value(value, location)
}

fn read(path: &Path) -> Result<String, TemplateStoreError> {
    fs::read_to_string(path).map_err(|source| TemplateStoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Categories from a single JSON bundle file
#[derive(Debug, Clone)]
pub struct JsonBundleSource {
    path: PathBuf,
}

impl JsonBundleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<Category>, TemplateStoreError> {
        if !self.path.exists() {
            return Err(TemplateStoreError::NotFound(self.path.clone()));
        }
        let location = self.path.display().to_string();
        let content = read(&self.path)?;
        let raw = parse_json_document(&content, &location)?;
        normalize_all(raw, &location, None)
    }
}

impl TemplateSource for JsonBundleSource {
    fn load_categories(&self) -> Result<Vec<Category>, TemplateSourceError> {
        debug!("Loading template bundle {}", self.path.display());
        Ok(self.load()?)
    }

    fn describe(&self) -> String {
        format!("bundle {}", self.path.display())
    }
}

/// Categories from a directory of per-category files.
///
/// Files are read in file-name order. Each file may hold one category, a
/// list, or a bundle; a category without an identity field takes the file
/// stem. Files with other extensions are skipped.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateSource {
    dir: PathBuf,
}

impl DirectoryTemplateSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn template_files(&self) -> Result<Vec<PathBuf>, TemplateStoreError> {
        let entries = fs::read_dir(&self.dir).map_err(|source| TemplateStoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .filter(|path| {
                let keep = matches!(
                    path.extension().and_then(|e| e.to_str()),
                    Some("json") | Some("toml") | Some("yaml") | Some("yml")
                );
                if !keep {
                    trace!("Skipping non-template file {}", path.display());
                }
                keep
            })
            .collect();
        files.sort();
        Ok(files)
    }

    fn load_file(path: &Path) -> Result<Vec<Category>, TemplateStoreError> {
        let location = path.display().to_string();
        let content = read(path)?;
        let raw = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => parse_toml_document(&content, &location)?,
            Some("yaml") | Some("yml") => parse_yaml_document(&content, &location)?,
            _ => parse_json_document(&content, &location)?,
        };
        let stem = path.file_stem().and_then(|s| s.to_str());
        normalize_all(raw, &location, stem)
    }

    fn load(&self) -> Result<Vec<Category>, TemplateStoreError> {
        if !self.dir.is_dir() {
            return Err(TemplateStoreError::NotFound(self.dir.clone()));
        }

        let files = self.template_files()?;
        if files.is_empty() {
            warn!("No template files in {}", self.dir.display());
        }

        let mut categories = Vec::new();
        for path in files {
            let loaded = Self::load_file(&path)?;
            debug!("Loaded {} categories from {}", loaded.len(), path.display());
            categories.extend(loaded);
        }
        Ok(categories)
    }
}

impl TemplateSource for DirectoryTemplateSource {
    fn load_categories(&self) -> Result<Vec<Category>, TemplateSourceError> {
        debug!("Loading template directory {}", self.dir.display());
        Ok(self.load()?)
    }

    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }
}

/// The category set shipped inside the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledTemplateSource;

impl TemplateSource for BundledTemplateSource {
    fn load_categories(&self) -> Result<Vec<Category>, TemplateSourceError> {
        let raw = parse_json_document(BUNDLED_TEMPLATES, "bundled templates")?;
        Ok(normalize_all(raw, "bundled templates", None)?)
    }

    fn describe(&self) -> String {
        "bundled templates".to_string()
    }
}

/// Pick a source for an optional path: a directory, a bundle file, or the
/// bundled set when no path is given.
pub fn source_for(path: Option<&Path>) -> Arc<dyn TemplateSource> {
    match path {
        Some(p) if p.is_dir() => Arc::new(DirectoryTemplateSource::new(p)),
        Some(p) => Arc::new(JsonBundleSource::new(p)),
        None => Arc::new(BundledTemplateSource),
    }
}
