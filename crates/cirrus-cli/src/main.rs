use std::env;
use std::process::ExitCode;

use cirrus_core::settings::{self, AiSettings};
use cirrus_core::store::DiagramStore;
use tracing_subscriber::EnvFilter;

const DEFAULT_OWNER: &str = "local";

fn usage() -> ExitCode {
    eprintln!(
        "Usage:
  cirrus generate <prompt...>          generate a diagram and save it
  cirrus list [owner]                  list saved diagrams, newest first
  cirrus show <id> [owner]             print a saved diagram as JSON
  cirrus delete <id> [owner]           delete a saved diagram
  cirrus configure <provider> <model> [api-key]
                                       set the AI backend (ollama needs no key)"
    );
    ExitCode::FAILURE
}

fn fail(err: impl std::fmt::Display) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::FAILURE
}

fn print_json(value: &impl serde::Serialize) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

async fn generate(prompt: &str) -> ExitCode {
    let settings = settings::read_settings();
    let store = DiagramStore::default_location();
    match cirrus_gen::generate_and_save(prompt, DEFAULT_OWNER, &settings, &store).await {
        Ok(record) => print_json(&record),
        Err(e) => fail(e),
    }
}

fn list(owner: &str) -> ExitCode {
    let store = DiagramStore::default_location();
    match store.list(owner) {
        Ok(records) => {
            for r in &records {
                println!("{}  {}  {}", r.id, r.created_at, r.prompt);
            }
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

fn show(id: &str, owner: &str) -> ExitCode {
    let store = DiagramStore::default_location();
    match store.load(owner, id) {
        Ok(record) => print_json(&record.diagram),
        Err(e) => fail(e),
    }
}

fn delete(id: &str, owner: &str) -> ExitCode {
    let store = DiagramStore::default_location();
    match store.delete(owner, id) {
        Ok(()) => {
            println!("deleted {id}");
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

fn configure(provider: &str, model: &str, api_key: Option<&str>) -> ExitCode {
    let settings = AiSettings {
        provider: provider.to_string(),
        api_key: api_key.unwrap_or("").to_string(),
        model: model.to_string(),
    };
    if !settings::ai_configured(&settings) {
        return fail(format!("provider {provider} requires an api-key"));
    }
    match settings::write_settings(&settings) {
        Ok(()) => {
            println!("configured {provider} / {model}");
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let owner_or = |i: usize| args.get(i).map(String::as_str).unwrap_or(DEFAULT_OWNER);

    match args.first().map(String::as_str) {
        Some("generate") if args.len() > 1 => generate(&args[1..].join(" ")).await,
        Some("list") => list(owner_or(1)),
        Some("show") if args.len() > 1 => show(&args[1], owner_or(2)),
        Some("delete") if args.len() > 1 => delete(&args[1], owner_or(2)),
        Some("configure") if args.len() > 2 => {
            configure(&args[1], &args[2], args.get(3).map(String::as_str))
        }
        _ => usage(),
    }
}
