//! Built-in templates embedded at compile time.
//!
//! Every `.toml` definition under `crates/forge-template/templates/` is
//! compiled into the binary via [`include_str!`], so the catalog is available
//! regardless of the runtime filesystem layout. Keep [`BUILTIN_TEMPLATES`] in
//! sync with that directory.

use crate::error::TemplateError;
use crate::record::TemplateRecord;

/// Embedded (identity, TOML definition) pairs.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("youtube", include_str!("../templates/youtube.toml")),
    ("invoice", include_str!("../templates/invoice.toml")),
    ("scraper", include_str!("../templates/scraper.toml")),
    ("todo", include_str!("../templates/todo.toml")),
    ("url_shortener", include_str!("../templates/url_shortener.toml")),
    ("recipe", include_str!("../templates/recipe.toml")),
    ("expense", include_str!("../templates/expense.toml")),
    ("notes", include_str!("../templates/notes.toml")),
    ("weather", include_str!("../templates/weather.toml")),
    ("quiz", include_str!("../templates/quiz.toml")),
];

/// Decode all built-in templates.
///
/// # Errors
/// Returns the first definition that fails to decode.
pub fn builtin_templates() -> Result<Vec<TemplateRecord>, TemplateError> {
    BUILTIN_TEMPLATES
        .iter()
        .map(|(id, text)| TemplateRecord::from_toml(id, text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::KeywordIndex;

    #[test]
    fn every_builtin_decodes() {
        let records = builtin_templates().unwrap();
        assert_eq!(records.len(), BUILTIN_TEMPLATES.len());
    }

    #[test]
    fn every_builtin_carries_placeholder_in_all_fields() {
        for record in builtin_templates().unwrap() {
            assert!(record.has_placeholders(), "{} lacks {{APP_NAME}}", record.id());
        }
    }

    #[test]
    fn every_builtin_frontend_has_component_sentinel() {
        for record in builtin_templates().unwrap() {
            assert!(
                record.frontend().contains("===== src/App.jsx ====="),
                "{} has no App.jsx section",
                record.id()
            );
        }
    }

    #[test]
    fn builtin_order_matches_keyword_index() {
        let index = KeywordIndex::default();
        let index_ids: Vec<_> = index.iter().map(|(id, _)| id).collect();
        let builtin_ids: Vec<_> = BUILTIN_TEMPLATES.iter().map(|(id, _)| *id).collect();
        assert_eq!(index_ids, builtin_ids);
    }
}
