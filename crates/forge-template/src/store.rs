//! Template store
//!
//! Read-only after construction; shared across requests behind an `Arc`
//! without locking.

use crate::builtin::builtin_templates;
use crate::error::TemplateError;
use crate::record::TemplateRecord;
use indexmap::IndexMap;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Catalog of template records keyed by identity
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    records: IndexMap<String, Arc<TemplateRecord>>,
}

impl TemplateStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the compiled-in catalog
    ///
    /// # Errors
    /// Returns an error if an embedded definition fails to decode.
    pub fn builtin() -> Result<Self, TemplateError> {
        let mut store = Self::new();
        for record in builtin_templates()? {
            store.insert(record);
        }
        Ok(store)
    }

    /// Load every `*.toml` / `*.json` definition in `dir`
    ///
    /// The file stem is the template identity. Files are visited in name
    /// order so duplicate stems resolve the same way on every platform
    /// (the later extension wins).
    ///
    /// # Errors
    /// Returns [`TemplateError::Io`] when the directory or a file cannot be
    /// read, and [`TemplateError::InvalidDefinition`] for undecodable files.
    pub fn load_dir(dir: &Path) -> Result<Self, TemplateError> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| TemplateError::io(dir, e))? {
            let path = entry.map_err(|e| TemplateError::io(dir, e))?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut store = Self::new();
        for path in paths {
            let ext = path.extension().and_then(|e| e.to_str());
            if !matches!(ext, Some("toml" | "json")) {
                continue;
            }
            let id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| TemplateError::InvalidFileName(path.clone()))?
                .to_string();
            let text = std::fs::read_to_string(&path).map_err(|e| TemplateError::io(&path, e))?;

            let record = match ext {
                Some("json") => TemplateRecord::from_json(&id, &text)?,
                _ => TemplateRecord::from_toml(&id, &text)?,
            };
            debug!(template = %id, path = %path.display(), "Loaded template definition");
            store.insert(record);
        }
        Ok(store)
    }

    /// Add or replace records with those of `other`
    #[must_use]
    pub fn overlay(mut self, other: TemplateStore) -> Self {
        for (id, record) in other.records {
            self.records.insert(id, record);
        }
        self
    }

    /// Insert a record, replacing any record with the same identity
    pub fn insert(&mut self, record: TemplateRecord) {
        self.records
            .insert(record.id().to_string(), Arc::new(record));
    }

    /// Look up a record; `None` is a normal outcome
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<TemplateRecord>> {
        self.records.get(id).cloned()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identities in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}
