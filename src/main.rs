//! # Engster Main Entry Point
//!
//! Command-line front end for the line search store.

use anyhow::{Context, Result};
use engster::cmd_args::{CommandLineArgs, SearchCommand};
use engster::output::{format_context_page, format_english_page, format_korean_page};
use engster::profile::{resolve_profile, IniProfileStore};
use engster::{config, DispatchOutcome, Language, LinesStore, SearchGateway};
use engster::{EnglishLine, HttpClient, KoreanLine};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing(cmd_args.verbose());

    let store = build_store(&cmd_args)?;

    match cmd_args.command().clone() {
        SearchCommand::English { keyword, page } => {
            let outcome = store.fetch_line::<EnglishLine>(&keyword, page).await?;
            print!("{}", format_english_page(outcome.page()));
        }
        SearchCommand::Korean { keyword, page } => {
            let outcome = store.fetch_line::<KoreanLine>(&keyword, page).await?;
            print!("{}", format_korean_page(outcome.page()));
        }
        SearchCommand::Context {
            content_id,
            line_id,
        } => {
            if let Some(page) = store.fetch_context(content_id, line_id).await? {
                print!("{}", format_context_page(&page));
            }
        }
        SearchCommand::Interactive => run_interactive(store).await?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "warn,engster=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(config::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}

fn build_store(cmd_args: &CommandLineArgs) -> Result<LinesStore> {
    let profile_path = config::get_profile_path();
    let store = IniProfileStore::new(&profile_path);
    let profile = resolve_profile(&store, cmd_args.profile(), config::get_base_url_override())
        .with_context(|| format!("failed to load profile '{}'", cmd_args.profile()))?;

    let client = HttpClient::new(&profile).context("failed to create HTTP client")?;
    Ok(LinesStore::new(SearchGateway::new(client)))
}

/// Each input line starts its own search; results that arrive after a newer
/// search for the same language are dropped.
async fn run_interactive(store: LinesStore) -> Result<()> {
    println!("Enter 'en <keyword>' or 'ko <keyword>', Ctrl+D to quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tasks = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        let Some((language, keyword)) = parse_interactive_line(&line) else {
            if !line.trim().is_empty() {
                eprintln!("Unrecognized input: {}", line.trim());
            }
            continue;
        };

        let store = store.clone();
        tasks.spawn(async move {
            let printed = match language {
                Language::English => store
                    .fetch_line_english(&keyword)
                    .await
                    .map(|outcome| committed_text(outcome, format_english_page)),
                Language::Korean => store
                    .fetch_line_korean(&keyword)
                    .await
                    .map(|outcome| committed_text(outcome, format_korean_page)),
            };
            match printed {
                Ok(Some(text)) => print!("{text}"),
                Ok(None) => {}
                Err(e) => eprintln!("Search for '{keyword}' failed: {e}"),
            }
        });
    }

    while let Some(joined) = tasks.join_next().await {
        joined.context("search task panicked")?;
    }
    Ok(())
}

fn committed_text<T>(
    outcome: DispatchOutcome<T>,
    format: fn(&engster::SearchPage<T>) -> String,
) -> Option<String> {
    match outcome {
        DispatchOutcome::Committed(page) => Some(format(&page)),
        DispatchOutcome::Stale(_) => None,
    }
}

fn parse_interactive_line(line: &str) -> Option<(Language, String)> {
    let (language, keyword) = line.trim().split_once(char::is_whitespace)?;
    let language = language.parse::<Language>().ok()?;
    Some((language, keyword.trim().to_string()))
}
