use clap::Parser;
use scalingo_konnector::utils::{logger, validation::Validate};
use scalingo_konnector::{CliConfig, FolderPersistence, KonnectorEngine, ScalingoConnector};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting scalingo-konnector");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let token = config.token.clone();
    let connector = ScalingoConnector::new(FolderPersistence::new(), config)?;
    let engine = KonnectorEngine::new(connector);

    match engine.run(&token).await {
        Ok(saved) => {
            tracing::info!("Konnector run completed");
            println!("✅ Saved {} documents", saved);
        }
        Err(e) => {
            tracing::error!("Konnector run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
