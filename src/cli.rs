//! Command-line interface for medscribe
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Clinical voice dictation
#[derive(Parser, Debug)]
#[command(name = "medscribe", version, about = "Clinical voice dictation")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress status output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: info, -vv: debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transcribe recorded WAV clips
    Process {
        /// WAV files to process ("-" reads one clip from stdin)
        #[arg(required = true, value_name = "AUDIO")]
        inputs: Vec<PathBuf>,

        /// Whisper model size: tiny, base, small (default: small)
        #[arg(long, value_name = "SIZE")]
        model: Option<String>,

        /// Input language: auto, en, ta (default: auto-detect)
        #[arg(long, value_name = "LANG")]
        language: Option<String>,

        /// Output mode: transcribe, translate, translate-enhanced
        #[arg(long, value_name = "MODE")]
        mode: Option<String>,

        /// Translation backend for enhanced mode: lexicon, neural
        #[arg(long, value_name = "BACKEND")]
        translation_backend: Option<String>,

        /// Disable the medical phrase corrector
        #[arg(long)]
        no_autocorrect: bool,

        /// Extra keywords to highlight (comma separated)
        #[arg(long, value_name = "TERMS")]
        keywords: Option<String>,

        /// Patient name for the export document
        #[arg(long, value_name = "NAME")]
        patient_name: Option<String>,

        /// Patient age for the export document
        #[arg(long, value_name = "AGE")]
        patient_age: Option<String>,

        /// Write the export document (default file: doctor_transcript.txt)
        #[arg(
            long,
            value_name = "PATH",
            num_args = 0..=1,
            default_missing_value = crate::defaults::EXPORT_FILE_NAME
        )]
        export: Option<PathBuf>,

        /// Print the highlighted transcript as well
        #[arg(long)]
        highlight: bool,

        /// Prevent automatic model download if the model is missing
        #[arg(long)]
        no_download: bool,
    },

    /// Manage Whisper models
    Models {
        /// Action to perform
        #[command(subcommand)]
        action: ModelsAction,
    },

    /// Print the keyword list highlighted by default
    Keywords,
}

/// Model management actions
#[derive(Subcommand, Debug)]
pub enum ModelsAction {
    /// List supported models and their install state
    List,

    /// Download a model by name
    Download {
        /// Model name (tiny, base, small)
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Print the on-disk path for a model
    Path {
        /// Model name (tiny, base, small)
        #[arg(value_name = "NAME")]
        name: String,
    },
}
