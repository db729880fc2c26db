use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "kb")]
#[command(about = "Kanban board CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (defaults to the configured server address)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Bearer JWT for servers with auth enabled
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// User ID to act as when auth is disabled (defaults to the desktop user)
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl Cli {
    /// Explicit `--server`, else the address the local server is configured with
    pub fn server_url(&self) -> String {
        if let Some(ref url) = self.server {
            return url.clone();
        }

        match kb_config::Config::load() {
            Ok(config) => server_url_for(&config.server),
            Err(e) => {
                log::warn!("Could not read server config, using defaults: {}", e);
                server_url_for(&kb_config::ServerConfig::default())
            }
        }
    }
}

/// Wildcard bind addresses are reached through loopback
pub(crate) fn server_url_for(server: &kb_config::ServerConfig) -> String {
    let host = match server.host.as_str() {
        "0.0.0.0" | "::" | "[::]" => "127.0.0.1",
        host => host,
    };
    format!("http://{}:{}", host, server.port)
}
