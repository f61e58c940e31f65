use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod pipeline;

#[derive(Parser)]
#[command(name = "mietwerk", version, about = "Mietvertrag generation pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a Facts/Decisions submission pair and print the report.
    Validate {
        /// Mask A submission (client facts), JSON.
        #[arg(long)]
        facts: PathBuf,
        /// Mask B submission (attorney decisions), JSON.
        #[arg(long)]
        decisions: PathBuf,
    },
    /// Run the full pipeline: validate, render, merge, store.
    Generate {
        #[arg(long)]
        facts: PathBuf,
        #[arg(long)]
        decisions: PathBuf,
        /// Contract template (.docx).
        #[arg(long)]
        template: PathBuf,
        /// Also write the finished document to this path.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Fetch a stored contract by id.
    Download {
        #[arg(long)]
        id: String,
        /// Target path; defaults to the id as a file name.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    tracing::info!("mietwerk v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            2
        }
    };
    if code != 0 {
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Command::Validate { facts, decisions } => pipeline::validate(&facts, &decisions),
        Command::Generate {
            facts,
            decisions,
            template,
            out,
        } => pipeline::generate(&facts, &decisions, &template, out.as_deref()).await,
        Command::Download { id, out } => pipeline::download(&id, out.as_deref()).await,
    }
}
