//! medquiz CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "medquiz",
    version,
    about = "Chapter-by-chapter multiple-choice quiz runner"
)]
struct Cli {
    /// Question bank JSON file (overrides config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Image directory (overrides config)
    #[arg(long, global = true)]
    images: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a quiz
    Play {
        /// Subject to quiz on
        #[arg(long)]
        subject: String,

        /// Chapter topic (default: the subject's first chapter)
        #[arg(long, conflicts_with = "all")]
        chapter: Option<String>,

        /// Quiz on every chapter of the subject in order
        #[arg(long)]
        all: bool,
    },

    /// Answer a single question by id
    Show {
        /// Question id, e.g. "Pharmacology_Ch1_3"
        #[arg(long)]
        id: String,
    },

    /// List subjects
    Subjects {
        /// Case-insensitive name filter
        #[arg(long)]
        search: Option<String>,
    },

    /// List the chapters of a subject
    Chapters {
        /// Subject name
        #[arg(long)]
        subject: String,
    },

    /// Check the question bank for data problems
    Validate {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create starter config and sample question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let overrides = commands::Overrides {
        data: cli.data,
        images: cli.images,
        config: cli.config,
    };

    let result = match cli.command {
        Commands::Play {
            subject,
            chapter,
            all,
        } => commands::play::execute(&overrides, subject, chapter, all),
        Commands::Show { id } => commands::show::execute(&overrides, id),
        Commands::Subjects { search } => commands::subjects::execute(&overrides, search),
        Commands::Chapters { subject } => commands::chapters::execute(&overrides, subject),
        Commands::Validate { format } => commands::validate::execute(&overrides, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
