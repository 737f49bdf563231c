use clap::Parser;
use journal_relay::config::cli::Command;
use journal_relay::server;
use journal_relay::utils::{logger, validation::Validate};
use journal_relay::{CliArgs, EntryTranslator, InboundRequest};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 로그 초기화
    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    let config = args.relay_config()?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match &args.command {
        Command::Check => {
            if config.is_complete() {
                println!("✅ Configuration complete (Notion API: {})", config.base_url);
            } else {
                println!("❌ {}", journal_relay::utils::error::MISSING_CONFIG_MESSAGE);
                std::process::exit(1);
            }
        }
        Command::Serve { .. } => {
            let addr = args.listen_addr()?;
            let translator = Arc::new(EntryTranslator::from_config(config));
            server::serve(&addr, translator).await?;
        }
        Command::Submit { file } => {
            let body = tokio::fs::read_to_string(file).await?;
            let translator = EntryTranslator::from_config(config);

            let response = translator
                .handle(&InboundRequest::new("POST", Some(body)))
                .await;
            println!("{}", response.body);

            if !response.is_success() {
                std::process::exit(2);
            }
        }
    }

    Ok(())
}
