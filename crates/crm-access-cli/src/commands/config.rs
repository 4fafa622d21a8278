use crate::cli::ConfigFormat;
use anyhow::Result;
use crm_access_config::AccessConfig;

pub fn execute(config: &AccessConfig, format: ConfigFormat) -> Result<()> {
    println!("{}", render(config, format)?);
    Ok(())
}

pub fn render(config: &AccessConfig, format: ConfigFormat) -> Result<String> {
    let mut shown = config.clone();
    if shown.endpoint.auth_token.is_some() {
        shown.endpoint.auth_token = Some("<redacted>".to_string());
    }
    let output = match format {
        ConfigFormat::Toml => shown.display_as_toml()?,
        ConfigFormat::Json => shown.display_as_json()?,
    };
    Ok(output)
}
