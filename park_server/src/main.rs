//! Standalone file server binary.
//!
//! Usage:
//!   cargo run -p park_server -- [--addr 127.0.0.1:8000] [--root .] [--config cfg.json]
//!
//! Serves files from the root directory until interrupted.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use park_server::FileServer;
use park_shared::config::GameConfig;
use tracing::info;

struct Options {
    cfg: GameConfig,
    root: PathBuf,
}

fn parse_args() -> anyhow::Result<Options> {
    let mut opts = Options {
        cfg: GameConfig::default(),
        root: PathBuf::from("."),
    };
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                let raw = std::fs::read_to_string(&args[i + 1])
                    .with_context(|| format!("read config {}", args[i + 1]))?;
                opts.cfg = GameConfig::from_json_str(&raw).context("parse config")?;
                i += 2;
            }
            "--addr" if i + 1 < args.len() => {
                opts.cfg.listen_addr = args[i + 1].clone();
                i += 2;
            }
            "--root" if i + 1 < args.len() => {
                opts.root = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            _ => i += 1,
        }
    }
    Ok(opts)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let opts = parse_args()?;
    let addr: SocketAddr = opts.cfg.listen_addr.parse().context("parse listen addr")?;

    let server = FileServer::bind(addr, opts.root.clone()).await?;
    let local = server.local_addr()?;
    info!(%local, root = %opts.root.display(), "File server listening");

    server.run().await
}
