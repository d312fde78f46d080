use anyhow::{Context, Result};
use campus_core::Topic;
use campus_core::intent::IntentResolver;
use colored::Colorize;
use serde::Serialize;
use std::io::BufRead;

#[derive(Serialize)]
struct ClassifyLine<'a> {
    input: &'a str,
    topic: Topic,
    trigger: Option<&'a str>,
}

/// Classifies each text, or each stdin line when `texts` is empty.
pub fn run(texts: &[String], json: bool) -> Result<()> {
    let resolver = IntentResolver::default();

    if texts.is_empty() {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("Failed to read stdin")?;
            println!("{}", render(&resolver, &line, json)?);
        }
    } else {
        for text in texts {
            println!("{}", render(&resolver, text, json)?);
        }
    }

    Ok(())
}

fn render(resolver: &IntentResolver, text: &str, json: bool) -> Result<String> {
    let classification = resolver.explain(text);

    if json {
        let line = ClassifyLine {
            input: text,
            topic: classification.topic,
            trigger: classification.trigger,
        };
        return Ok(serde_json::to_string(&line)?);
    }

    let topic = format!("{:<10}", classification.topic);
    let topic = if classification.topic == Topic::Default {
        topic.bright_black()
    } else {
        topic.bright_cyan()
    };
    Ok(format!("{} {}", topic, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json() {
        let resolver = IntentResolver::default();
        let line = render(&resolver, "exam today", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["topic"], "timetable");
        assert_eq!(value["trigger"], "today");
        assert_eq!(value["input"], "exam today");
    }

    #[test]
    fn test_render_json_fallback() {
        let resolver = IntentResolver::default();
        let line = render(&resolver, "xyzzy", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["topic"], "default");
        assert!(value["trigger"].is_null());
    }

    #[test]
    fn test_render_plain_mentions_topic() {
        colored::control::set_override(false);
        let resolver = IntentResolver::default();
        let line = render(&resolver, "any job openings", false).unwrap();
        assert!(line.starts_with("placement"));
        assert!(line.ends_with("any job openings"));
    }
}
