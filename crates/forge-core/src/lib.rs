//! Forge Core - PromptForge pipeline
//!
//! Resolves a free-text idea into a deployable artifact:
//! - Matches the idea against the template catalog
//! - Falls back to the generative backend, or to the default template
//! - Assembles one self-contained HTML document
//! - Publishes it and reports a live URL or a typed status
//!
//! # Example
//!
//! ```rust,ignore
//! use forge_core::{ForgeConfig, Pipeline};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ForgeConfig::load(None)?;
//! let pipeline = Pipeline::new(config)?;
//!
//! let response = pipeline.run("I want a todo list app").await?;
//! println!("{} -> {:?}", response.app_name, response.deployment_status);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

pub use config::{ForgeConfig, DEFAULT_MIN_IDEA_CHARS};
pub use error::ForgeError;
pub use pipeline::{Pipeline, Stage};
pub use types::{DeploymentStatus, GenerateRequest, GenerateResponse, GenerationSource};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building and driving a pipeline
    pub use crate::{
        DeploymentStatus, ForgeConfig, ForgeError, GenerateRequest, GenerateResponse,
        GenerationSource, Pipeline,
    };
    pub use forge_deploy::HostingConfig;
    pub use forge_generate::{GenerativeBackend, GenerativeConfig};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
