//! Chatter TUI entry point.

use chatter_client::SendPolicy;
use chatter_tui::{Runtime, TerminalDriver};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Chatter terminal chat client
#[derive(Parser, Debug)]
#[command(name = "chatter")]
#[command(about = "Terminal client for a plain-text WebSocket chat")]
#[command(version)]
struct Args {
    /// WebSocket URL of the chat server
    #[arg(short, long, env = "CHATTER_URL", default_value = "ws://127.0.0.1:3000/ws")]
    url: String,

    /// Send the draft even when it is empty
    #[arg(long)]
    allow_empty: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let policy = if args.allow_empty { SendPolicy::AllowEmpty } else { SendPolicy::RejectEmpty };

    let driver = TerminalDriver::new()?;
    let runtime = Runtime::new(driver, policy, args.url);

    Ok(runtime.run().await?)
}
