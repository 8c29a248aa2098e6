//! Command-line interface for the melting snowman server.

use clap::Parser;

/// Melting Snowman - multi-session word-guessing game server
#[derive(Parser, Debug)]
#[command(name = "melting_snowman")]
#[command(about = "Word-guessing game server with a REST API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "3000")]
    pub port: u16,
}
