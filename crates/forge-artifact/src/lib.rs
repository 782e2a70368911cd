//! Forge Artifact - bundle assembly
//!
//! Turns a [`Bundle`] (template-derived or generated) into one
//! self-contained HTML document:
//! - [`substitute_bundle`]: literal `{APP_NAME}` replacement in all fields
//! - [`extract_sections`]: sentinel-marker scan for component and stylesheet
//! - [`sanitize_component`]: drop runtime imports and the default export
//! - [`render_document`]: CDN-loaded runtime plus inline Babel script
//! - [`ArtifactDigest`]: Blake3 digest of the rendered document
//!
//! # Example
//!
//! ```rust,ignore
//! use forge_artifact::{assemble, derive_app_name, Bundle};
//!
//! let record = store.get("todo").unwrap();
//! let name = derive_app_name("I want a todo list app", Some("todo"));
//! let assembly = assemble(Bundle::from_template(&record, &name), &name);
//!
//! println!("{} ({})", name, assembly.artifact.digest().short());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod assembler;
pub mod bundle;
pub mod digest;
pub mod document;
pub mod sanitize;
pub mod sections;
pub mod substitute;

pub use assembler::{assemble, Artifact, Assembly, Extraction};
pub use bundle::{derive_app_name, Bundle, BundleOrigin, FALLBACK_APP_NAME};
pub use digest::{ArtifactDigest, DigestError};
pub use document::{render_document, RUNTIME_SCRIPTS};
pub use sanitize::sanitize_component;
pub use sections::{extract_sections, Sections};
pub use substitute::{substitute, substitute_bundle};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
