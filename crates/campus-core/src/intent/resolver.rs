//! Ordered keyword-containment classification.
//!
//! Rules are evaluated in declaration order and the first rule with a
//! trigger contained in the lower-cased input wins. Nothing matching yields
//! [`Topic::Default`]. There is no scoring: precedence is the rule order.

use crate::error::{CampusError, Result};
use crate::knowledge::Topic;
use serde::Serialize;

/// A topic together with the substrings that route to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRule {
    pub topic: Topic,
    pub triggers: Vec<String>,
}

impl IntentRule {
    pub fn new<I, S>(topic: Topic, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            topic,
            triggers: triggers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of [`IntentResolver::explain`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification<'a> {
    pub topic: Topic,
    /// The trigger that fired, `None` when the fallback was used.
    pub trigger: Option<&'a str>,
}

/// Maps free text to a [`Topic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentResolver {
    rules: Vec<IntentRule>,
}

impl IntentResolver {
    /// Builds a resolver from a custom rule table.
    ///
    /// Triggers are lower-cased here so classification only normalises the
    /// input.
    ///
    /// # Errors
    ///
    /// `CampusError::Config` if a rule targets `Topic::Default` (the
    /// fallback is implicit) or has no non-empty trigger.
    pub fn new(rules: Vec<IntentRule>) -> Result<Self> {
        let mut normalized = Vec::with_capacity(rules.len());

        for rule in rules {
            if rule.topic == Topic::Default {
                return Err(CampusError::config(
                    "intent rules must not target the default topic",
                ));
            }
            let triggers: Vec<String> = rule
                .triggers
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();
            if triggers.is_empty() {
                return Err(CampusError::config(format!(
                    "intent rule for '{}' has no triggers",
                    rule.topic
                )));
            }
            normalized.push(IntentRule {
                topic: rule.topic,
                triggers,
            });
        }

        Ok(Self { rules: normalized })
    }

    /// The rule table in priority order.
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Classifies `input`. Total: every string maps to some topic.
    pub fn classify(&self, input: &str) -> Topic {
        self.explain(input).topic
    }

    /// Like [`classify`](Self::classify) but also reports the matching trigger.
    pub fn explain(&self, input: &str) -> Classification<'_> {
        let normalized = input.to_lowercase();

        for rule in &self.rules {
            if let Some(trigger) = rule
                .triggers
                .iter()
                .find(|t| normalized.contains(t.as_str()))
            {
                return Classification {
                    topic: rule.topic,
                    trigger: Some(trigger.as_str()),
                };
            }
        }

        Classification {
            topic: Topic::Default,
            trigger: None,
        }
    }
}

impl Default for IntentResolver {
    /// Timetable, Exam, Attendance, Placement, in that priority.
    fn default() -> Self {
        Self {
            rules: vec![
                IntentRule::new(Topic::Timetable, ["timetable", "schedule", "today"]),
                IntentRule::new(Topic::Exam, ["exam", "test"]),
                IntentRule::new(Topic::Attendance, ["attendance", "present"]),
                IntentRule::new(Topic::Placement, ["placement", "job", "drive"]),
            ],
        }
    }
}
