//! Role gate consulted before a portal view is mounted.
//!
//! The portal has no real authentication. The demo gate accepts any
//! non-empty email and password and remembers which roles signed in.

use crate::error::{CampusError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::RwLock;
use strum::{Display, EnumString};

/// Portal section a user can sign into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    Student,
    Admin,
}

/// Decides whether a role may view its section.
pub trait AuthGate: Send + Sync {
    fn is_authorized(&self, role: Role) -> bool;
}

/// Gate that lets every role through.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AuthGate for AllowAll {
    fn is_authorized(&self, _role: Role) -> bool {
        true
    }
}

/// Demo sign-in: any non-empty credentials are accepted.
#[derive(Debug, Default)]
pub struct DemoAuthGate {
    signed_in: RwLock<HashSet<Role>>,
}

impl DemoAuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs `role` in.
    ///
    /// # Errors
    ///
    /// `CampusError::Validation` if email or password is blank.
    pub fn sign_in(&self, role: Role, email: &str, password: &str) -> Result<()> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(CampusError::validation("email and password are required"));
        }
        self.signed_in
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(role);
        tracing::info!("[Auth] {} signed in as {}", email.trim(), role);
        Ok(())
    }

    pub fn sign_out(&self, role: Role) {
        self.signed_in
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&role);
    }
}

impl AuthGate for DemoAuthGate {
    fn is_authorized(&self, role: Role) -> bool {
        self.signed_in
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&role)
    }
}

/// Fails with `Unauthorized` unless `gate` admits `role`.
pub fn require(gate: &dyn AuthGate, role: Role) -> Result<()> {
    if gate.is_authorized(role) {
        Ok(())
    } else {
        tracing::warn!("[Auth] {} view requested without sign-in", role);
        Err(CampusError::Unauthorized { role })
    }
}
