use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use campus_core::chat::{Author, ChatSession, Message, ReplyOutcome, SessionOptions};
use campus_core::knowledge::QUICK_QUESTIONS;
use campus_core::portal::{DemoAuthGate, Role, mount_student_view};
use campus_core::{AssistantConfig, IntentResolver};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::Credentials;

const COMMANDS: [&str; 3] = ["/quick", "/history", "/quit"];

/// What a line typed at the prompt asks for.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand<'a> {
    Quit,
    ShowQuick,
    ShowHistory,
    Send(&'a str),
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Option<ReplCommand<'_>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let command = match trimmed {
        "quit" | "exit" | "/quit" => ReplCommand::Quit,
        "/quick" => ReplCommand::ShowQuick,
        "/history" => ReplCommand::ShowHistory,
        other if other.starts_with('/') => other[1..]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| QUICK_QUESTIONS.get(i).copied())
            .map(ReplCommand::Send)
            .unwrap_or(ReplCommand::Unknown(other)),
        text => ReplCommand::Send(text),
    };
    Some(command)
}

/// Completion and hints for `/` commands and quick questions.
#[derive(Clone)]
struct CliHelper {
    candidates: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        let candidates = COMMANDS
            .iter()
            .map(|c| c.to_string())
            .chain(QUICK_QUESTIONS.iter().map(|q| q.to_string()))
            .collect();
        Self { candidates }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.is_empty() {
            return Ok((0, vec![]));
        }

        let lower = line.to_lowercase();
        let candidates = self
            .candidates
            .iter()
            .filter(|c| c.to_lowercase().starts_with(&lower))
            .map(|c| Pair {
                display: c.clone(),
                replacement: c.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() {
            return None;
        }
        self.candidates
            .iter()
            .find(|c| c.starts_with(line) && c.len() > line.len())
            .map(|c| c[line.len()..].bright_black().to_string())
    }
}

impl Validator for CliHelper {}

fn print_message(message: &Message, assistant_name: &str) {
    match message.origin {
        Author::Assistant => {
            println!("{}", format!("[{}]", assistant_name).bright_magenta());
            for line in message.text.lines() {
                println!("{}", line.bright_blue());
            }
            println!();
        }
        Author::User => {
            println!("{}", format!("> {}", message.text).green());
        }
    }
}

/// Messages appended after `last_shown`, in log order.
fn unseen(messages: &[Message], last_shown: u64) -> impl Iterator<Item = &Message> {
    messages.iter().filter(move |m| m.id > last_shown)
}

fn print_quick_questions() {
    println!("{}", "Quick questions:".bright_yellow());
    for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
        println!("  {}", format!("/{} {}", i + 1, question).yellow());
    }
}

/// Runs the interactive student assistant.
///
/// The prompt is not shown again until the pending reply has landed, which
/// is how the terminal disables input while the session awaits a reply.
pub async fn run(config: &AssistantConfig, credentials: &Credentials) -> Result<()> {
    let gate = DemoAuthGate::new();
    gate.sign_in(Role::Student, &credentials.email, &credentials.password)
        .context("Student sign-in failed")?;

    let knowledge = Arc::new(
        config
            .knowledge_base()
            .context("Failed to load knowledge base")?,
    );
    let session: ChatSession = mount_student_view(
        &gate,
        knowledge,
        Arc::new(IntentResolver::default()),
        SessionOptions::from(config),
    )?;

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!(
        "{}",
        format!("=== {} ===", config.assistant_name)
            .bright_magenta()
            .bold()
    );
    println!(
        "{}",
        "Ask about timetable, exams, attendance, placements. '/quick' lists suggestions, 'quit' exits."
            .bright_black()
    );
    println!();

    let mut last_shown = 0;
    for message in session.snapshot().messages {
        print_message(&message, &config.assistant_name);
        last_shown = message.id;
    }

    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        let Some(command) = parse_line(&line) else {
            continue;
        };
        let _ = rl.add_history_entry(line.trim());

        let text = match command {
            ReplCommand::Quit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            ReplCommand::ShowQuick => {
                print_quick_questions();
                continue;
            }
            ReplCommand::ShowHistory => {
                for message in session.snapshot().messages {
                    print_message(&message, &config.assistant_name);
                }
                continue;
            }
            ReplCommand::Unknown(cmd) => {
                println!("{}", format!("Unknown command: {}", cmd).bright_black());
                continue;
            }
            ReplCommand::Send(text) => text,
        };

        let handle = match session.submit(text) {
            Ok(handle) => handle,
            Err(e) if e.is_rejected_submit() => {
                tracing::debug!("[REPL] Input ignored: {}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        println!(
            "{}",
            format!("{} is typing…", config.assistant_name).bright_black()
        );
        if handle.finished().await == ReplyOutcome::Cancelled {
            break;
        }

        let snapshot = session.snapshot();
        for message in unseen(&snapshot.messages, last_shown) {
            print_message(message, &config.assistant_name);
        }
        if let Some(last) = snapshot.last() {
            last_shown = last.id;
        }
    }

    session.dispose();
    Ok(())
}
