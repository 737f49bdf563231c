use crate::config::toml_config::{TomlConfig, DEFAULT_LISTEN_ADDR};
use crate::config::RelayConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "journal-relay")]
#[command(about = "Relays journal submissions to a Notion database")]
pub struct CliArgs {
    /// TOML config file; values override NOTION_API_KEY / DATABASE_ID
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Override the Notion API base URL
    #[arg(long, global = true)]
    pub notion_base_url: Option<String>,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the relay over HTTP
    Serve {
        #[arg(long)]
        listen: Option<String>,
    },
    /// Send one submission JSON file through the relay and print the response
    Submit {
        #[arg(long, short)]
        file: PathBuf,
    },
    /// Check configuration without calling Notion
    Check,
}

impl CliArgs {
    fn toml_config(&self) -> Result<Option<TomlConfig>> {
        self.config
            .as_ref()
            .map(TomlConfig::from_file)
            .transpose()
    }

    /// Environment first, then the config file, then flags.
    pub fn relay_config(&self) -> Result<RelayConfig> {
        let mut config = RelayConfig::from_env();

        if let Some(file) = self.toml_config()? {
            config = file.apply_to(config);
        }
        if let Some(base_url) = &self.notion_base_url {
            config.base_url = base_url.clone();
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> Result<String> {
        if let Command::Serve {
            listen: Some(listen),
        } = &self.command
        {
            return Ok(listen.clone());
        }

        Ok(self
            .toml_config()?
            .map(|file| file.listen_addr().to_string())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()))
    }
}
