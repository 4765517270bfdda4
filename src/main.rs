// --- coursepick - Navegador de cursos (API + CLI) ---

use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use coursepick::algorithm::{course_views, enrich_course, enrich_schedule, SelectionSet};
use coursepick::api_json::{document_to_value, load_schedule_document, sample_schedule};
use coursepick::cli::{parse_args, print_help, Command, StdinPrompt};
use coursepick::config::AppConfig;
use coursepick::edit::{move_course, EditOutcome};
use coursepick::models::{Identity, ScheduleDocument, Term};
use coursepick::server::{run_server, AppState};
use coursepick::store::{MemoryStore, ScheduleStore};
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    let binary_name = args.next().unwrap_or_else(|| "coursepick".to_string());
    let command = match parse_args(args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            print_help(&binary_name);
            return ExitCode::FAILURE;
        }
    };

    match run(command, &cfg, &binary_name).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_document(cfg: &AppConfig) -> Result<ScheduleDocument, Box<dyn Error>> {
    match &cfg.schedule_path {
        Some(path) => {
            info!("loading schedule from {}", path.display());
            Ok(load_schedule_document(path)?)
        }
        None => Ok(sample_schedule()),
    }
}

async fn run(command: Command, cfg: &AppConfig, binary_name: &str) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Help => {
            print_help(binary_name);
            Ok(())
        }
        Command::Serve => {
            let store = Arc::new(MemoryStore::with_document(load_document(cfg)?));
            let state = AppState::new(store, cfg.max_edit_attempts);
            run_server(&cfg.bind_addr, state).await?;
            Ok(())
        }
        Command::Check { term, selected } => {
            let schedule = enrich_schedule(&load_document(cfg)?);
            let term = term.as_deref().and_then(Term::parse).unwrap_or(Term::DEFAULT);
            let (selection, unknown) = SelectionSet::from_ids(&schedule, &selected);
            if !unknown.is_empty() {
                return Err(format!("unknown course ids: {}", unknown.join(", ")).into());
            }

            println!("{} - {}", schedule.title, term);
            for view in course_views(&schedule, term, &selection, false) {
                let mark = if view.selected { "[x]" } else if view.disabled { "[-]" } else { "[ ]" };
                let meets = view.meets.as_deref().unwrap_or("(no meeting time)");
                println!("{} {}  {}", mark, view.label, meets);
            }
            Ok(())
        }
        Command::Move { course_id } => {
            let identity = cfg.user_name.clone().map(|display_name| Identity { display_name });
            let store = MemoryStore::with_document(load_document(cfg)?);
            let doc = store.snapshot().ok_or("schedule document is empty")?;
            let record = doc.course(&course_id).ok_or_else(|| format!("unknown course id: {}", course_id))?;
            let course = enrich_course(record);

            match move_course(&store, identity.as_ref(), &course, &mut StdinPrompt, cfg.max_edit_attempts)? {
                EditOutcome::Saved { .. } => {
                    let updated = store.snapshot().ok_or("schedule document is empty")?;
                    println!("{}", serde_json::to_string_pretty(&document_to_value(&updated))?);
                }
                EditOutcome::Cancelled => eprintln!("Edit cancelled."),
                EditOutcome::GaveUp { attempts } => {
                    return Err(format!("no valid meeting time after {} attempts", attempts).into());
                }
            }
            Ok(())
        }
    }
}
