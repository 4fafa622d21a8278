use anyhow::Result;
use clap::Parser;
use crm_access_cli::cli::{Cli, Commands};
use crm_access_cli::{commands, logging};
use crm_access_config::AccessConfig;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AccessConfig::load(cli.config.as_deref())?;
    if let Some(base_url) = &cli.base_url {
        config.endpoint.base_url = base_url.clone();
        config.validate()?;
    }

    logging::init(cli.requested_level(), &config.logging.level);
    debug!("Permissions endpoint: {}", config.endpoint.permissions_url());

    match cli.command {
        Commands::Matrix { format } => commands::matrix::execute(config, format).await?,
        Commands::Check { object, action } => {
            if !commands::check::execute(config, object, action).await? {
                std::process::exit(1);
            }
        }
        Commands::Level { format } => commands::level::execute(config, format).await?,
        Commands::Config { format } => commands::config::execute(&config, format)?,
    }

    Ok(())
}
