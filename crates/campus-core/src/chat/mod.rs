//! Chat session domain module.
//!
//! # Module Structure
//!
//! - `message`: Log entries (`Message`, `Author`)
//! - `status`: State machine states and the read-only projection
//!   (`SessionStatus`, `SessionSnapshot`)
//! - `session`: The engine (`ChatSession`) and its scheduled replies
//!   (`ReplyHandle`, `ReplyOutcome`)

mod message;
mod session;
mod status;

pub use message::{Author, Message};
pub use session::{ChatSession, ReplyHandle, ReplyOutcome, SessionOptions};
pub use status::{SessionSnapshot, SessionStatus};
