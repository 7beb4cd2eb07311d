//! yql-suggest - Ranked YQL editor completions
//!
//! Command-line entry point: reads a parser context, asks the viewer (or a
//! catalog snapshot) for entities and prints the completion items as JSON.
//! The actual logic is in the library modules for better testability.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use yql_suggest::catalog::{CatalogProvider, CatalogSnapshot, MemoryCatalog, ViewerClient};
use yql_suggest::config::{Settings, ViewerEndpoint, load_settings, load_settings_from};
use yql_suggest::context::ParsedContext;
use yql_suggest::suggest::cursor::replace_range;
use yql_suggest::suggest::{CompletionItem, EditorRange, SuggestRequest, Suggester};

/// Print ranked YQL completions for a parser context
#[derive(Debug, Parser)]
#[command(name = "yql-suggest", version, about)]
struct Cli {
    /// Parser context JSON (`-` reads stdin)
    #[arg(long, short = 'c')]
    context: PathBuf,

    /// Query text; the caret position is taken from --line/--column
    #[arg(long, short = 'q')]
    query: Option<PathBuf>,

    /// 1-based caret line
    #[arg(long)]
    line: Option<u32>,

    /// 1-based caret column
    #[arg(long)]
    column: Option<u32>,

    /// Entity path typed before the caret (overrides the one found in --query)
    #[arg(long)]
    prefix: Option<String>,

    /// Database path, e.g. /Root/db
    #[arg(long, short = 'd')]
    database: Option<String>,

    /// Viewer base URL, e.g. http://localhost:8765
    #[arg(long, short = 'e')]
    endpoint: Option<String>,

    /// Authorization header value sent to the viewer
    #[arg(long)]
    token: Option<String>,

    /// Settings file (defaults to ~/.yql-suggest/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Answer lookups from a catalog snapshot JSON instead of the viewer
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn settings_for(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => load_settings_from(path)?,
        None => load_settings()?,
    };
    if let Some(url) = &cli.endpoint {
        settings.endpoint = ViewerEndpoint::from_url(url)?;
    }
    if let Some(database) = &cli.database {
        settings.database = database.clone();
    }
    if let Some(token) = &cli.token {
        settings.token = Some(token.clone());
    }
    Ok(settings)
}

fn request_for(cli: &Cli, settings: &Settings) -> Result<SuggestRequest> {
    let line = cli.line.unwrap_or(1);
    let column = cli.column.unwrap_or(1);

    let (range, typed) = match &cli.query {
        Some(path) => {
            let text = read_input(path)?;
            replace_range(&text, line, column).with_context(|| {
                format!("Caret {}:{} is outside {}", line, column, path.display())
            })?
        }
        None => (EditorRange::on_line(line, column, column), String::new()),
    };

    let mut request = SuggestRequest::new(range, settings.database.clone());
    match &cli.prefix {
        Some(prefix) => request = request.with_prefix(prefix.clone()),
        None if !typed.is_empty() => request = request.with_prefix(typed),
        None => {}
    }
    Ok(request)
}

async fn run<C: CatalogProvider>(
    catalog: C,
    settings: &Settings,
    context: &ParsedContext,
    request: &SuggestRequest,
) -> Vec<CompletionItem> {
    Suggester::with_settings(catalog, settings)
        .suggest(context, request)
        .await
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let settings = settings_for(&cli)?;
    let context = ParsedContext::from_json(&read_input(&cli.context)?)
        .context("Failed to parse the parser context")?;
    let request = request_for(&cli, &settings)?;
    tracing::debug!(?request, "suggesting");

    let items = match &cli.catalog {
        Some(path) => {
            let snapshot: CatalogSnapshot = serde_json::from_str(&read_input(path)?)
                .with_context(|| format!("Invalid catalog snapshot {}", path.display()))?;
            run(MemoryCatalog::from_snapshot(snapshot), &settings, &context, &request).await
        }
        None => {
            let client = ViewerClient::new(&settings)
                .with_context(|| format!("Cannot reach viewer at {}", settings.endpoint))?;
            run(client, &settings, &context, &request).await
        }
    };

    let out = if cli.pretty {
        serde_json::to_string_pretty(&items)?
    } else {
        serde_json::to_string(&items)?
    };
    println!("{}", out);
    Ok(())
}
