//! Portal sections and their role gate.
//!
//! Views are mounted through [`mount_student_view`] and [`mount_admin_view`],
//! which consult an [`AuthGate`] first. The chat engine itself never
//! authenticates.
//!
//! # Module Structure
//!
//! - `auth`: Roles and gates (`Role`, `AuthGate`, `DemoAuthGate`, `AllowAll`)
//! - `roster`: Admin student records (`Roster`, `StudentRecord`, `NewStudent`)

mod auth;
mod roster;

pub use auth::{AllowAll, AuthGate, DemoAuthGate, Role, require};
pub use roster::{NewStudent, Roster, RosterStats, StudentRecord};

use crate::chat::{ChatSession, SessionOptions};
use crate::error::Result;
use crate::intent::IntentResolver;
use crate::knowledge::KnowledgeBase;
use std::sync::Arc;

/// Mounts the student assistant: a fresh chat session seeded with the greeting.
pub fn mount_student_view(
    gate: &dyn AuthGate,
    knowledge: Arc<KnowledgeBase>,
    resolver: Arc<IntentResolver>,
    options: SessionOptions,
) -> Result<ChatSession> {
    require(gate, Role::Student)?;
    Ok(ChatSession::new(knowledge, resolver, options))
}

/// Mounts the admin section with the demo roster.
pub fn mount_admin_view(gate: &dyn AuthGate) -> Result<Roster> {
    require(gate, Role::Admin)?;
    Ok(Roster::with_demo_students())
}
