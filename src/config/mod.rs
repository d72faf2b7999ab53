use crate::config::cli::Args;
use crate::error::Result;
use crate::services::sitemap;
use clap::Parser;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(sitemap::USER_AGENT)
            .build()?;

        Ok(Self { args, http_client })
    }

    /// Creates the directories a mutating command writes into. Dry runs
    /// and read-only commands never call this.
    pub fn ensure_directories(&self) -> Result<()> {
        if let Some(parent) = self.args.config_path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        if !self.args.public_dir.exists() {
            std::fs::create_dir_all(&self.args.public_dir)?;
        }

        info!("Config and public dirs exist");
        Ok(())
    }
}
