use anyhow::{Context, Result};
use config::{Config, Environment};
use log::debug;
use url::Url;

/// Base URL used when no environment override is present.
const DEFAULT_API_URL: &str = "http://localhost:3000/api";

const ENV_PREFIX: &str = "CONTACTS";

/// Resolved client configuration.
///
/// The request timeout (10 s) and default headers are fixed by the
/// transport layer and deliberately not configurable.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
}

/// Resolves the client configuration from the environment.
///
/// `CONTACTS_API_URL` overrides the base URL; otherwise the local
/// development endpoint is used.
pub fn load_configuration() -> Result<ClientConfig> {
    let cfg = Config::builder()
        .set_default("api_url", DEFAULT_API_URL)
        .context("Could not set default API URL")?
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_"))
        .build()
        .context("Could not build configuration")?;

    let raw = cfg.get_string("api_url").context("Could not read API URL")?;
    let base_url = Url::parse(&raw).with_context(|| format!("Invalid API base URL: {raw}"))?;
    debug!(base_url:% = base_url; "Resolved client configuration");

    Ok(ClientConfig { base_url })
}
