use contracts::shared::GatewayError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub gateway: GatewayConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GatewayConfig {
    /// Deployment URL of the spreadsheet web app
    pub base_url: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[gateway]
base_url = "https://script.google.com/macros/s/YOUR_DEPLOYMENT_ID/exec"
"#;

/// Load the embedded configuration.
///
/// The gateway URL can be replaced at build time by setting
/// `ORDER_GATEWAY_URL` when compiling the bundle.
pub fn load_config() -> Result<Config, GatewayError> {
    parse_config(DEFAULT_CONFIG, option_env!("ORDER_GATEWAY_URL"))
}

fn parse_config(contents: &str, url_override: Option<&str>) -> Result<Config, GatewayError> {
    let mut config: Config =
        toml::from_str(contents).map_err(|e| GatewayError::Config(e.to_string()))?;

    if let Some(url) = url_override.map(str::trim).filter(|u| !u.is_empty()) {
        log::info!("Using gateway URL from ORDER_GATEWAY_URL");
        config.gateway.base_url = url.to_string();
    }

    let url = &config.gateway.base_url;
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(GatewayError::Config(format!(
            "gateway.base_url must be an http(s) URL, got {:?}",
            url
        )));
    }

    Ok(config)
}
