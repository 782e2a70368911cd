//! Bundle assembly
//!
//! Substitution, section extraction, sanitization and document synthesis,
//! in that order. Assembly cannot fail: a frontend without a component
//! section is embedded verbatim.

use crate::bundle::Bundle;
use crate::digest::ArtifactDigest;
use crate::document::render_document;
use crate::sanitize::sanitize_component;
use crate::sections::extract_sections;
use crate::substitute::substitute_bundle;
use serde::Serialize;
use tracing::debug;

/// How the component source was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Extraction {
    /// Taken from the component section and sanitized
    Sections,
    /// No component section; the whole frontend embedded unmodified
    Verbatim,
}

/// The self-contained deployable document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    html: String,
    component: String,
    style: String,
    extraction: Extraction,
    digest: ArtifactDigest,
}

impl Artifact {
    #[inline]
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Component source as embedded in the document
    #[inline]
    #[must_use]
    pub fn component(&self) -> &str {
        &self.component
    }

    #[inline]
    #[must_use]
    pub fn style(&self) -> &str {
        &self.style
    }

    #[inline]
    #[must_use]
    pub fn extraction(&self) -> Extraction {
        self.extraction
    }

    #[inline]
    #[must_use]
    pub fn digest(&self) -> ArtifactDigest {
        self.digest
    }

    #[inline]
    #[must_use]
    pub fn into_html(self) -> String {
        self.html
    }
}

/// Substituted bundle plus the document built from it
#[derive(Debug, Clone)]
pub struct Assembly {
    pub bundle: Bundle,
    pub artifact: Artifact,
}

/// Assemble `bundle` under `app_name`
#[must_use]
pub fn assemble(bundle: Bundle, app_name: &str) -> Assembly {
    let bundle = substitute_bundle(bundle, app_name);
    let sections = extract_sections(&bundle.frontend_code);

    let (component, extraction) = if sections.has_component() {
        (sanitize_component(&sections.component), Extraction::Sections)
    } else {
        (bundle.frontend_code.clone(), Extraction::Verbatim)
    };

    let html = render_document(app_name, &component, &sections.style);
    let digest = ArtifactDigest::compute(html.as_bytes());

    debug!(
        app = app_name,
        extraction = ?extraction,
        digest = %digest.short(),
        bytes = html.len(),
        "Assembled artifact"
    );

    Assembly {
        bundle,
        artifact: Artifact {
            html,
            component,
            style: sections.style,
            extraction,
            digest,
        },
    }
}
