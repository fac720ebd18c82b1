//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the myai assistant.
///
/// With no subcommand the interactive shell starts on the Home screen.
#[derive(Parser)]
#[command(name = "myai")]
#[command(about = "Chat with, show images to, and hear speech from a hosted AI model")]
#[command(version)]
pub struct Cli {
    /// API key for the hosted model (overrides GEMINI_API_KEY / API_KEY)
    #[arg(long = "api-key", global = true)]
    pub api_key: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
