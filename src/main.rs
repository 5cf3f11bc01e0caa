use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;

use ballerina_lsp::Backend;

/// Language server for Ballerina-style integration code, speaking LSP
/// over stdio.
#[derive(Parser)]
#[command(name = "ballerina-lsp", version, about)]
struct Cli {
    /// Log filter directive (e.g. "info", "ballerina_lsp=debug").
    /// RUST_LOG takes precedence when set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the LSP stream.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(tokio::io::stdin(), tokio::io::stdout(), socket)
        .serve(service)
        .await;
}
