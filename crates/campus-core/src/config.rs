//! Assistant configuration.
//!
//! Loaded from a TOML file; every field has a default so an empty file (or
//! no file at all) yields the reference behaviour.
//!
//! ```toml
//! assistant_name = "SmartCollege Assistant"
//! reply_latency_ms = 1000
//! knowledge_file = "answers.toml"
//! ```

use crate::error::{CampusError, Result};
use crate::knowledge::KnowledgeBase;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming a config file when none is passed explicitly.
pub const CONFIG_ENV_VAR: &str = "CAMPUS_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub assistant_name: String,
    pub greeting: String,
    pub reply_latency_ms: u64,
    /// Optional TOML knowledge set replacing the builtin answers.
    /// Relative paths are resolved against the config file's directory.
    pub knowledge_file: Option<PathBuf>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            assistant_name: "SmartCollege Assistant".to_string(),
            greeting: "Hello! 👋 I'm your SmartCollege Assistant. How can I help you today?"
                .to_string(),
            reply_latency_ms: 1000,
            knowledge_file: None,
        }
    }
}

impl AssistantConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads a config file. Relative `knowledge_file` paths are anchored to
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CampusError::config(format!("failed to read config {}: {}", path.display(), e))
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if let (Some(file), Some(dir)) = (config.knowledge_file.as_mut(), path.parent()) {
            if file.is_relative() {
                *file = dir.join(&*file);
            }
        }

        tracing::debug!("[Config] Loaded {}", path.display());
        Ok(config)
    }

    /// Loads from `explicit`, else from `$CAMPUS_CONFIG`, else defaults.
    ///
    /// An explicit or env-named path that cannot be read is an error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn reply_latency(&self) -> Duration {
        Duration::from_millis(self.reply_latency_ms)
    }

    /// The configured knowledge set, or the builtin one.
    pub fn knowledge_base(&self) -> Result<KnowledgeBase> {
        match &self.knowledge_file {
            Some(path) => KnowledgeBase::load(path),
            None => Ok(KnowledgeBase::builtin()),
        }
    }
}
