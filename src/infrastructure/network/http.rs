// HTTP client utilities
use crate::domain::error::TranslateError;
use crate::infrastructure::config::Config;
use reqwest::{Client, Proxy};
use std::time::Duration;

/// Create the shared HTTP client from configuration
///
/// No request timeout is set unless `timeout_secs` is configured.
pub fn create_client(config: &Config) -> Result<Client, TranslateError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .user_agent(concat!("libretrans/", env!("CARGO_PKG_VERSION")));

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        let proxy = Proxy::all(proxy)
            .map_err(|e| TranslateError::Config(format!("Invalid http_proxy '{}': {}", proxy, e)))?;
        builder = builder.proxy(proxy);
    }

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}
