//! Forge Generate - generative fallback
//!
//! Used when no template matches an idea:
//! - [`build_prompt`]: fixed instructions naming the five reply fields and
//!   the sentinel lines the frontend must use
//! - [`GenerativeBackend`]: one chat-completion call; [`OpenAiClient`] is the
//!   reqwest implementation
//! - [`parse_reply`]: fence stripping plus payload repair
//! - [`Generator`]: ties them together and substitutes the default template
//!   for any unusable reply
//!
//! # Example
//!
//! ```rust,ignore
//! use forge_generate::{GenerativeConfig, Generator};
//!
//! let config = GenerativeConfig::default().with_api_key(key);
//! let generator = Generator::from_config(&config, store)?;
//! let bundle = generator.generate("a plant watering tracker").await?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod reply;

pub use client::{GenerativeBackend, OpenAiClient};
pub use config::GenerativeConfig;
pub use error::GenerateError;
pub use generator::Generator;
pub use prompt::{build_prompt, SYSTEM_PROMPT};
pub use reply::{extract_json_payload, parse_reply};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
