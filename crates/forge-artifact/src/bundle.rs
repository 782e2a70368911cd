//! Bundles: the common shape produced by template lookup or generation

use forge_template::TemplateRecord;
use serde::{Deserialize, Serialize};

/// Where a bundle came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BundleOrigin {
    /// Copied from a catalog template
    Template { id: String },
    /// Produced by the generative backend
    Generated,
    /// Substituted for an unusable generative reply
    Fallback,
    /// Compiled-in default used when the catalog lacks one
    HardDefault,
}

impl BundleOrigin {
    /// Identity reported to the caller
    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        match self {
            Self::Template { id } => Some(id),
            Self::Generated => None,
            Self::Fallback => Some("fallback"),
            Self::HardDefault => Some("default"),
        }
    }

    /// Whether the generative path produced this bundle
    #[inline]
    #[must_use]
    pub fn is_generative(&self) -> bool {
        matches!(self, Self::Generated | Self::Fallback)
    }
}

/// App name plus the four source fields
///
/// Generated bundles are untrusted: any field may be empty and the frontend
/// may lack sentinel markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub origin: BundleOrigin,
    pub app_name: String,
    pub frontend_code: String,
    pub backend_code: String,
    pub database_schema: String,
    pub deploy_instructions: String,
}

impl Bundle {
    /// Bundle carrying a template's fields (placeholders not yet substituted)
    #[must_use]
    pub fn from_template(record: &TemplateRecord, app_name: impl Into<String>) -> Self {
        Self {
            origin: BundleOrigin::Template {
                id: record.id().to_string(),
            },
            app_name: app_name.into(),
            frontend_code: record.frontend().to_string(),
            backend_code: record.backend().to_string(),
            database_schema: record.database().to_string(),
            deploy_instructions: record.deploy().to_string(),
        }
    }

    /// Compiled-in minimal bundle; never depends on the catalog
    #[must_use]
    pub fn hard_default(app_name: impl Into<String>) -> Self {
        Self {
            origin: BundleOrigin::HardDefault,
            app_name: app_name.into(),
            frontend_code: HARD_DEFAULT_FRONTEND.to_string(),
            backend_code: HARD_DEFAULT_BACKEND.to_string(),
            database_schema: HARD_DEFAULT_SCHEMA.to_string(),
            deploy_instructions: HARD_DEFAULT_DEPLOY.to_string(),
        }
    }

    /// Replace the origin tag
    #[inline]
    #[must_use]
    pub fn with_origin(mut self, origin: BundleOrigin) -> Self {
        self.origin = origin;
        self
    }
}

/// App name used when nothing better can be derived
pub const FALLBACK_APP_NAME: &str = "CustomApp";

/// Derive an app name from the idea
///
/// First three words, each capitalized, when the idea has at least two
/// words; else the template identity capitalized plus `App`; else
/// [`FALLBACK_APP_NAME`].
#[must_use]
pub fn derive_app_name(idea: &str, template_id: Option<&str>) -> String {
    let words: Vec<&str> = idea.split_whitespace().take(3).collect();
    if words.len() >= 2 {
        return words.iter().map(|w| capitalize(w)).collect();
    }
    match template_id {
        Some(id) if !id.is_empty() => format!("{}App", capitalize(id)),
        _ => FALLBACK_APP_NAME.to_string(),
    }
}

/// Upper-case the first character, lower-case the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

const HARD_DEFAULT_FRONTEND: &str = "===== src/App.jsx =====
function App() {
  const [items, setItems] = useState([]);
  const [draft, setDraft] = useState('');
  const add = () => {
    if (!draft.trim()) return;
    setItems([...items, draft.trim()]);
    setDraft('');
  };
  return (
    <div className=\"main-content\">
      <h1>{APP_NAME}</h1>
      <input type=\"text\" value={draft} onChange={e => setDraft(e.target.value)} />
      <button onClick={add}>Add</button>
      <ul>{items.map((item, i) => <li key={i}>{item}</li>)}</ul>
    </div>
  );
}
===== src/index.css =====
h1 { margin-bottom: 16px; }
ul { margin-top: 16px; list-style: none; }
";

const HARD_DEFAULT_BACKEND: &str = "# {APP_NAME} API
from fastapi import FastAPI

app = FastAPI(title=\"{APP_NAME}\")
items: list[str] = []

@app.get(\"/items\")
def list_items():
    return items
";

const HARD_DEFAULT_SCHEMA: &str = "-- {APP_NAME} schema
create table if not exists items (
  id bigserial primary key,
  text text not null
);
";

const HARD_DEFAULT_DEPLOY: &str = "# Deploying {APP_NAME}
Deploy the API to Render and the frontend to Netlify.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_from_first_three_words() {
        assert_eq!(derive_app_name("I want a todo list app", Some("todo")), "IWantA");
        assert_eq!(derive_app_name("track my expenses", Some("expense")), "TrackMyExpenses");
    }

    #[test]
    fn app_name_lowercases_tail_of_words() {
        assert_eq!(derive_app_name("BUILD an APP", None), "BuildAnApp");
    }

    #[test]
    fn app_name_from_template_for_single_word() {
        assert_eq!(derive_app_name("weatherstation", Some("weather")), "WeatherApp");
        assert_eq!(derive_app_name("shortener", Some("url_shortener")), "Url_shortenerApp");
    }

    #[test]
    fn app_name_fallback() {
        assert_eq!(derive_app_name("something", None), FALLBACK_APP_NAME);
        assert_eq!(derive_app_name("", Some("")), FALLBACK_APP_NAME);
    }

    #[test]
    fn origin_identity() {
        assert_eq!(
            BundleOrigin::Template { id: "quiz".into() }.identity(),
            Some("quiz")
        );
        assert_eq!(BundleOrigin::Generated.identity(), None);
        assert_eq!(BundleOrigin::Fallback.identity(), Some("fallback"));
        assert!(BundleOrigin::Fallback.is_generative());
        assert!(!BundleOrigin::HardDefault.is_generative());
    }

    #[test]
    fn hard_default_has_placeholders_and_sections() {
        let bundle = Bundle::hard_default("X");
        assert!(bundle.frontend_code.contains("===== src/App.jsx ====="));
        assert!(bundle.backend_code.contains("{APP_NAME}"));
        assert_eq!(bundle.origin.identity(), Some("default"));
    }
}
