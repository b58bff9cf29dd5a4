//! azchat - Minimal async chat agent for Azure OpenAI
//!
//! This library wraps a chat-completion transport behind a small agent
//! facade: configure once, initialize once, then send independent
//! single-turn messages.
//!
//! # Example
//! ```no_run
//! use azchat::{AgentConfig, ChatAgent};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AgentConfig::from_env()?;
//!     let mut agent = ChatAgent::new(config)?;
//!     agent.initialize()?;
//!
//!     let response = agent.get_response("Write a haiku about Rust.").await?;
//!     println!("{}", response);
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod cli;
mod config;
pub mod core;
pub mod error;
pub mod platform;
pub mod utils;

pub use agent::{AgentHandle, ChatAgent};
pub use config::AgentConfig;
pub use core::transport::{ChatMessage, ChatTransport};
pub use error::AgentError;
