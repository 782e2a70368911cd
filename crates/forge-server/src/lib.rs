//! Forge Server - HTTP surface for the PromptForge pipeline
//!
//! # Example
//!
//! ```rust,ignore
//! use forge_core::{ForgeConfig, Pipeline};
//! use std::sync::Arc;
//!
//! let pipeline = Arc::new(Pipeline::new(ForgeConfig::load(None)?)?);
//! warp::serve(forge_server::routes(pipeline))
//!     .run(([0, 0, 0, 0], 8000))
//!     .await;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cli;
pub mod routes;
pub mod telemetry;

pub use cli::{command, ServerArgs};
pub use routes::routes;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
