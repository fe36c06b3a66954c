use clap::{Parser, Subcommand};

/// Command-line arguments for the tok CLI.
#[derive(Debug, Parser)]
#[command(
    name = "tok",
    version,
    about = "Vocabulary building with Rust.",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// The registered command set. One variant per command; clap resolves the
/// first positional token against these names and rejects anything else.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Say hello, tok
    Greet,
}
