//! OpenSearch MCP Server binary
//!
//! Thin CLI wrapper around [`osmcp_server::run`]. Exits non-zero only
//! when startup fails; a running server survives individual request
//! failures.

use clap::Parser;
use osmcp_server::run;

/// Command line interface for the OpenSearch MCP server
#[derive(Parser, Debug)]
#[command(name = "osmcp")]
#[command(about = "OpenSearch MCP Server - expose cluster operations as MCP tools")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Host to bind to [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on [default: 8000]
    #[arg(long)]
    pub port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.host, cli.port).await
}
