use std::path::PathBuf;

use clap::{Parser, Subcommand};

use scribe_cli::commands;

#[derive(Parser)]
#[command(name = "scribetool", about = "Cantonese annotation pipeline tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Annotate text with Jyutping, applying the correction table
    Annotate {
        /// Path to the correction table TOML (required; no silent fallback)
        #[arg(long)]
        corrections: PathBuf,
        /// Path to a Jyutping dictionary TSV (embedded table otherwise)
        #[arg(long)]
        dict: Option<PathBuf>,
        /// Text to annotate
        text: Option<String>,
        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output as JSON instead of inline text
        #[arg(long)]
        json: bool,
    },

    /// Split mixed text into characters and romanization
    Separate {
        /// Text to separate
        text: Option<String>,
        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Vocabulary list operations
    Vocab {
        #[command(subcommand)]
        command: VocabCommand,
    },

    /// Lesson bundle operations
    Lesson {
        #[command(subcommand)]
        command: LessonCommand,
    },

    /// Correction table operations
    Corrections {
        #[command(subcommand)]
        command: CorrectionsCommand,
    },
}

#[derive(Subcommand)]
enum VocabCommand {
    /// Export a term<TAB>definition file as CSV
    Export {
        /// Input vocab file (term<TAB>definition per line)
        input: PathBuf,
        /// Output CSV path
        output: PathBuf,
    },
}

#[derive(Subcommand)]
enum LessonCommand {
    /// Bundle a text file (and optional vocab file) into lesson JSON
    Export {
        /// Input text file
        text_file: PathBuf,
        /// Vocab file (term<TAB>definition per line)
        #[arg(long)]
        vocab: Option<PathBuf>,
        /// Output lesson JSON path
        output: PathBuf,
    },
    /// Unpack a lesson JSON document to stdout
    Import {
        /// Lesson JSON path
        input: PathBuf,
    },
}

#[derive(Subcommand)]
enum CorrectionsCommand {
    /// Load the table and report its entry count
    Check {
        /// Correction table TOML path
        path: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Annotate {
            corrections,
            dict,
            text,
            file,
            json,
        } => commands::annotate(&corrections, dict.as_deref(), text, file.as_deref(), json),
        Command::Separate { text, file } => commands::separate(text, file.as_deref()),
        Command::Vocab { command } => match command {
            VocabCommand::Export { input, output } => commands::vocab_export(&input, &output),
        },
        Command::Lesson { command } => match command {
            LessonCommand::Export {
                text_file,
                vocab,
                output,
            } => commands::lesson_export(&text_file, vocab.as_deref(), &output),
            LessonCommand::Import { input } => commands::lesson_import(&input),
        },
        Command::Corrections { command } => match command {
            CorrectionsCommand::Check { path } => commands::corrections_check(&path),
        },
    }
}
