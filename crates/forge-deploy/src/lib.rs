//! Forge Deploy - one-shot static publishing
//!
//! - [`package_site`]: `index.html` plus a catch-all `_redirects` in a ZIP
//! - [`DeployClient`]: create-site then upload-deploy against a
//!   Netlify-compatible API
//! - [`DeployOutcome`]: `deployed`, `skipped` or `error`; deploys never fail
//!   the caller
//!
//! # Example
//!
//! ```rust,ignore
//! use forge_deploy::{DeployClient, HostingConfig};
//!
//! let client = DeployClient::new(&HostingConfig::default().with_token(token))?;
//! match client.deploy("IWantA", &artifact).await {
//!     DeployOutcome::Deployed { url, .. } => println!("live at {url}"),
//!     other => println!("not deployed: {:?}", other.message()),
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod outcome;
pub mod package;

pub use client::{excerpt, site_name, DeployClient, EXCERPT_CHARS};
pub use config::HostingConfig;
pub use error::{DeployError, DeployStage};
pub use outcome::{DeployOutcome, SkipReason};
pub use package::{package_site, INDEX_ENTRY, REDIRECTS_ENTRY, REDIRECTS_RULE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
