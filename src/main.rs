// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use dr_assistant::{
    CatalogLoader, ChatSession, Config, FaqCatalog, FaqMatcher, TranscriptExporter, Validator,
    builtin_catalog,
    utils::logging::{format_bot, format_info},
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "dr_assistant")]
#[command(version = "0.1.0")]
#[command(about = "Deterministic FAQ assistant for diabetic retinopathy screening support", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single query against the FAQ catalog and print the reply
    Ask {
        /// Query text
        query: String,

        /// Print the full per-entry score table
        #[arg(long)]
        scores: bool,
    },

    /// Start an interactive chat session on stdin
    Chat {
        /// Export the transcript as JSON to this path on exit
        #[arg(long, value_name = "FILE")]
        transcript: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// List the loaded FAQ catalog entries
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dr_assistant::utils::logging::init_logger(cli.color, cli.verbose);

    info!("DR Assistant");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Ask { query, scores } => {
            cmd_ask(&config, &query, scores)?;
        }
        Commands::Chat { transcript, pretty } => {
            cmd_chat(&config, transcript, pretty).await?;
        }
        Commands::Catalog => {
            cmd_catalog(&config)?;
        }
    }

    Ok(())
}

fn load_catalog(config: &Config) -> Result<FaqCatalog> {
    let catalog = match &config.catalog.path {
        Some(path) => CatalogLoader::load(path).context("Failed to load FAQ catalog")?,
        None => builtin_catalog(),
    };

    Validator::validate_catalog(&catalog)?;
    Ok(catalog)
}

fn cmd_ask(config: &Config, query: &str, scores: bool) -> Result<()> {
    let catalog = load_catalog(config)?;
    let matcher = FaqMatcher::new(catalog, config.matcher.clone());

    if scores {
        println!("\nScores for: \"{}\"\n", query);
        println!("{}", "=".repeat(80));
        for scored in matcher.score_catalog(query) {
            println!("{:>3}. {}", scored.index + 1, scored.format_summary(70));
        }
        println!("{}", "=".repeat(80));
    }

    let reply = matcher.find_best_answer(query);
    println!("\n{}\n", format_bot(&reply));

    Ok(())
}

async fn cmd_chat(config: &Config, transcript: Option<PathBuf>, pretty: bool) -> Result<()> {
    let catalog = load_catalog(config)?;
    let matcher = FaqMatcher::new(catalog, config.matcher.clone());
    let mut session = ChatSession::new(matcher, config.chat.clone());

    info!("Chat session {} started", session.id());
    println!("{}", format_info("Type a question, or 'exit' to quit."));
    println!("{}", format_bot(&session.messages()[0].text));

    let stdin = std::io::stdin();
    loop {
        print!("you: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        if let Some(reply) = session.submit(input).await {
            println!("{}", format_bot(&reply.text));
        }
    }

    if let Some(path) = transcript {
        let count = TranscriptExporter::export(&session, &path, pretty)
            .context("Failed to export transcript")?;
        info!("Wrote {} messages to {}", count, path.display());
    }

    info!("Chat session {} ended", session.id());
    Ok(())
}

fn cmd_catalog(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;

    println!("\nFAQ catalog ({} entries)\n", catalog.len());
    println!("{}", "=".repeat(80));

    for (index, entry) in catalog.iter().enumerate() {
        println!("\n{}. {}", index + 1, entry.question);
        println!("   {}", Validator::truncate_text(&entry.answer, 100));
    }

    println!("\n{}", "=".repeat(80));
    Ok(())
}
