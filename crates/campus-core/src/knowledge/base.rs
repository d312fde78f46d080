use super::Topic;
use super::builtin::builtin_entries;
use crate::error::{CampusError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::{EnumCount, IntoEnumIterator};

/// One canned answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub topic: Topic,
    pub body: String,
}

impl KnowledgeEntry {
    pub fn new(topic: Topic, body: impl Into<String>) -> Self {
        Self {
            topic,
            body: body.into(),
        }
    }
}

/// On-disk shape of a knowledge file.
///
/// ```toml
/// [[entry]]
/// topic = "exam"
/// body = "..."
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KnowledgeFile {
    #[serde(rename = "entry", default)]
    entries: Vec<KnowledgeEntry>,
}

/// Immutable Topic → answer mapping.
///
/// Construction checks that every topic has exactly one entry, so `lookup`
/// is total for the lifetime of the value. Share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    // Indexed by `Topic::index`.
    entries: Box<[KnowledgeEntry]>,
}

impl KnowledgeBase {
    /// Builds a knowledge base from exactly one entry per topic.
    ///
    /// # Errors
    ///
    /// Returns `CampusError::Config` if a topic is missing or appears twice.
    pub fn new(entries: impl IntoIterator<Item = KnowledgeEntry>) -> Result<Self> {
        let mut slots: Vec<Option<KnowledgeEntry>> = vec![None; Topic::COUNT];

        for entry in entries {
            let slot = &mut slots[entry.topic.index()];
            if slot.is_some() {
                return Err(CampusError::config(format!(
                    "duplicate knowledge entry for topic '{}'",
                    entry.topic
                )));
            }
            *slot = Some(entry);
        }

        let missing: Vec<String> = Topic::iter()
            .filter(|t| slots[t.index()].is_none())
            .map(|t| t.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CampusError::config(format!(
                "knowledge base has no entry for: {}",
                missing.join(", ")
            )));
        }

        let entries = slots.into_iter().flatten().collect::<Vec<_>>();
        tracing::debug!("[Knowledge] Loaded {} entries", entries.len());
        Ok(Self {
            entries: entries.into_boxed_slice(),
        })
    }

    /// The knowledge set shipped with the assistant.
    ///
    /// # Panics
    ///
    /// If the builtin table misses a topic, which is a startup configuration
    /// defect.
    pub fn builtin() -> Self {
        let entries = builtin_entries()
            .into_iter()
            .map(|(topic, body)| KnowledgeEntry::new(topic, body));
        Self::new(entries).expect("builtin knowledge set covers every topic")
    }

    /// Parses a TOML knowledge file.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: KnowledgeFile = toml::from_str(content)?;
        Self::new(file.entries)
    }

    /// Reads and validates a TOML knowledge file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CampusError::config(format!(
                "failed to read knowledge file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Returns the entry for `topic`. Never fails.
    pub fn lookup(&self, topic: Topic) -> &KnowledgeEntry {
        &self.entries[topic.index()]
    }

    /// All entries in topic order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
