//! Forge Template - catalog and matching
//!
//! Resolves a free-text product idea to one of the pre-authored application
//! templates:
//! - [`TemplateRecord`]: immutable four-field skeleton with an `{APP_NAME}` token
//! - [`TemplateStore`]: catalog keyed by identity (built-in and on-disk)
//! - [`KeywordIndex`]: ordered identity → trigger phrases
//! - [`TemplateMatcher`]: exact trigger scan, then fuzzy similarity
//!
//! # Example
//!
//! ```rust,ignore
//! use forge_template::{KeywordIndex, TemplateMatcher, TemplateStore};
//! use std::sync::Arc;
//!
//! let store = Arc::new(TemplateStore::builtin()?);
//! let matcher = TemplateMatcher::new(Arc::new(KeywordIndex::default()), store);
//!
//! let result = matcher.match_idea("I want a todo list app");
//! assert_eq!(result.template_id(), Some("todo"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod builtin;
pub mod error;
pub mod index;
pub mod matcher;
pub mod record;
pub mod store;

pub use error::TemplateError;
pub use index::KeywordIndex;
pub use matcher::{similarity, MatchKind, MatchResult, TemplateMatcher, FUZZY_THRESHOLD};
pub use record::{TemplateRecord, APP_NAME_PLACEHOLDER};
pub use store::TemplateStore;

/// Identity of the template used when nothing matches and no generative
/// backend is configured.
pub const DEFAULT_TEMPLATE_ID: &str = "todo";

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
