//! Core of the SmartCollege campus assistant.
//!
//! - [`knowledge`]: static Topic → answer mapping
//! - [`intent`]: ordered keyword rules mapping text to a Topic
//! - [`chat`]: the chat session engine (message log + Idle/AwaitingReply)
//! - [`portal`]: role gate and the admin roster
//! - [`config`]: TOML configuration
//!
//! ```no_run
//! use campus_core::{ChatSession, IntentResolver, KnowledgeBase, SessionOptions};
//! use std::sync::Arc;
//!
//! # async fn demo() {
//! let session = ChatSession::new(
//!     Arc::new(KnowledgeBase::builtin()),
//!     Arc::new(IntentResolver::default()),
//!     SessionOptions::default(),
//! );
//! let reply = session.submit("What's my current attendance?").unwrap();
//! reply.finished().await;
//! println!("{}", session.snapshot().last().unwrap().text);
//! # }
//! ```

pub mod chat;
pub mod config;
pub mod error;
pub mod intent;
pub mod knowledge;
pub mod portal;

pub use chat::{ChatSession, SessionOptions, SessionSnapshot, SessionStatus};
pub use config::AssistantConfig;
pub use error::{CampusError, Result};
pub use intent::IntentResolver;
pub use knowledge::{KnowledgeBase, Topic};
