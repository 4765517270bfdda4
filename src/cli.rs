//! Línea de comandos: servidor, consulta de cursos y edición interactiva.

use std::io::{self, BufRead, Write};

use crate::edit::MeetsPrompt;
use crate::models::Term;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Serve,
    Check { term: Option<String>, selected: Vec<String> },
    Move { course_id: String },
    Help,
}

pub fn print_help(binary_name: &str) {
    println!("coursepick v{} - course schedule browser", env!("CARGO_PKG_VERSION"));
    println!();
    println!("USAGE:");
    println!("    {}                                   Run the HTTP server", binary_name);
    println!("    {} serve                             Run the HTTP server", binary_name);
    println!("    {} check [--term T] [--select IDS]   Show courses for a term", binary_name);
    println!("    {} move <ID>                         Edit a course's meeting time", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("ENVIRONMENT:");
    println!("    COURSEPICK_BIND                Server address (default 127.0.0.1:8080)");
    println!("    COURSEPICK_SCHEDULE            Schedule document JSON (default: built-in sample)");
    println!("    COURSEPICK_MAX_EDIT_ATTEMPTS   Re-prompts before giving up an edit (default 3)");
    println!("    COURSEPICK_LOG                 trace, debug, info, warn or error (default info)");
    println!("    COURSEPICK_USER                Display name used to sign in for `move`");
}

/// Interpreta los argumentos (sin el nombre del binario).
pub fn parse_args<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let mut it = args.iter();
    let cmd = match it.next() {
        None => return Ok(Command::Serve),
        Some(c) => c.as_str(),
    };

    match cmd {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "serve" => Ok(Command::Serve),
        "check" => {
            let mut term = None;
            let mut selected = Vec::new();
            while let Some(arg) = it.next() {
                match arg.as_str() {
                    "--term" | "-t" => {
                        term = Some(it.next().ok_or("--term requires a value")?.clone());
                    }
                    "--select" | "-s" => {
                        let raw = it.next().ok_or("--select requires a value")?;
                        selected.extend(crate::api_json::split_ids(Some(raw)));
                    }
                    other => return Err(format!("unknown option for check: {}", other)),
                }
            }
            if let Some(t) = &term {
                if Term::parse(t).is_none() {
                    return Err(format!("unknown term '{}'", t));
                }
            }
            Ok(Command::Check { term, selected })
        }
        "move" => {
            let course_id = it.next().ok_or("move requires a course id")?.clone();
            if let Some(extra) = it.next() {
                return Err(format!("unexpected argument: {}", extra));
            }
            Ok(Command::Move { course_id })
        }
        other => Err(format!("unknown command: {}", other)),
    }
}

/// Pregunta por stdin. EOF o una línea vacía cancelan.
pub struct StdinPrompt;

impl MeetsPrompt for StdinPrompt {
    fn ask(&mut self, message: &str, default: &str) -> Option<String> {
        eprint!("{} [{}] ", message, default);
        io::stderr().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}
