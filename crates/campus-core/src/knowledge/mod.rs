//! Knowledge domain module.
//!
//! Static, immutable answers keyed by [`Topic`].
//!
//! # Module Structure
//!
//! - `topic`: The closed topic enumeration (`Topic`)
//! - `base`: Validated Topic → answer mapping (`KnowledgeBase`, `KnowledgeEntry`)
//! - `builtin`: The shipped answer set and suggested prompts

mod base;
mod builtin;
mod topic;

pub use base::{KnowledgeBase, KnowledgeEntry};
pub use builtin::QUICK_QUESTIONS;
pub use topic::Topic;
