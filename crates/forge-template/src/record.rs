//! Template records
//!
//! A record is created once when the store is built and never mutated.

use crate::error::TemplateError;
use serde::{Deserialize, Serialize};

/// Literal token replaced by the resolved app name during assembly
pub const APP_NAME_PLACEHOLDER: &str = "{APP_NAME}";

/// Persisted shape of a template definition (identity comes from its key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    /// Frontend source, usually sentinel-delimited files
    pub frontend: String,
    /// Backend source
    pub backend: String,
    /// Database schema
    pub database: String,
    /// Deploy instructions
    pub deploy: String,
}

/// Immutable application skeleton
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateRecord {
    id: String,
    #[serde(flatten)]
    definition: TemplateDefinition,
}

impl TemplateRecord {
    /// Create record from identity and definition
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, definition: TemplateDefinition) -> Self {
        Self {
            id: id.into(),
            definition,
        }
    }

    /// Decode a TOML definition
    ///
    /// # Errors
    /// Returns [`TemplateError::InvalidDefinition`] when the text is not a
    /// table with the four string fields.
    pub fn from_toml(id: &str, text: &str) -> Result<Self, TemplateError> {
        let definition: TemplateDefinition =
            toml::from_str(text).map_err(|e| TemplateError::invalid(id, e.to_string()))?;
        Ok(Self::new(id, definition))
    }

    /// Decode a JSON definition
    ///
    /// # Errors
    /// Returns [`TemplateError::InvalidDefinition`] when the text is not an
    /// object with the four string fields.
    pub fn from_json(id: &str, text: &str) -> Result<Self, TemplateError> {
        let definition: TemplateDefinition =
            serde_json::from_str(text).map_err(|e| TemplateError::invalid(id, e.to_string()))?;
        Ok(Self::new(id, definition))
    }

    /// Template identity
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn frontend(&self) -> &str {
        &self.definition.frontend
    }

    #[inline]
    #[must_use]
    pub fn backend(&self) -> &str {
        &self.definition.backend
    }

    #[inline]
    #[must_use]
    pub fn database(&self) -> &str {
        &self.definition.database
    }

    #[inline]
    #[must_use]
    pub fn deploy(&self) -> &str {
        &self.definition.deploy
    }

    /// Whether every field carries the app-name placeholder
    #[must_use]
    pub fn has_placeholders(&self) -> bool {
        [self.frontend(), self.backend(), self.database(), self.deploy()]
            .iter()
            .all(|field| field.contains(APP_NAME_PLACEHOLDER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TOML_DEF: &str = r#"
frontend = "===== src/App.jsx =====\nfunction App() { return <h1>{APP_NAME}</h1>; }"
backend = "app = FastAPI(title='{APP_NAME}')"
database = "-- {APP_NAME} schema"
deploy = "Deploy {APP_NAME}"
"#;

    #[test]
    fn record_from_toml() {
        let record = TemplateRecord::from_toml("demo", TOML_DEF).unwrap();
        assert_eq!(record.id(), "demo");
        assert!(record.frontend().starts_with("===== src/App.jsx ====="));
        assert!(record.has_placeholders());
    }

    #[test]
    fn record_from_json() {
        let json = r#"{"frontend":"a {APP_NAME}","backend":"b","database":"c","deploy":"d"}"#;
        let record = TemplateRecord::from_json("demo", json).unwrap();
        assert_eq!(record.backend(), "b");
        assert!(!record.has_placeholders());
    }

    #[test]
    fn record_missing_field_is_invalid() {
        let result = TemplateRecord::from_json("broken", r#"{"frontend":"x"}"#);
        assert!(matches!(
            result,
            Err(TemplateError::InvalidDefinition { ref id, .. }) if id == "broken"
        ));
    }
}
