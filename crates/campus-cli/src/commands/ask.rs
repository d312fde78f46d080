use anyhow::{Context, Result};
use campus_core::portal::{AuthGate, DemoAuthGate, Role, require};
use campus_core::{AssistantConfig, IntentResolver, KnowledgeBase, Topic};
use colored::Colorize;

use crate::Credentials;

/// Prints the knowledge entry `text` resolves to, without the typing delay.
///
/// Answers come from the student view, so the student sign-in applies here
/// just as it does for `chat`.
pub fn run(config: &AssistantConfig, text: &str, credentials: &Credentials) -> Result<()> {
    let gate = DemoAuthGate::new();
    gate.sign_in(Role::Student, &credentials.email, &credentials.password)
        .context("Student sign-in failed")?;
    let knowledge = config
        .knowledge_base()
        .context("Failed to load knowledge base")?;

    let (topic, body) = answer(&gate, &knowledge, text)?;
    println!("{}", format!("[{}]", topic).bright_black());
    for line in body.lines() {
        println!("{}", line.bright_blue());
    }
    Ok(())
}

fn answer<'a>(
    gate: &dyn AuthGate,
    knowledge: &'a KnowledgeBase,
    text: &str,
) -> Result<(Topic, &'a str)> {
    require(gate, Role::Student)?;
    let topic = IntentResolver::default().classify(text);
    Ok((topic, knowledge.lookup(topic).body.as_str()))
}
