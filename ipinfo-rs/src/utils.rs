use crate::errors::IpInfoError;
use crate::types::Config;
use reqwest::Client;
use serde_json::Value;

#[cfg(feature = "tracing")]
use tracing::{debug, error, info, instrument};

/// Builds the lookup URL for `ip`. The address is used verbatim as a path segment.
pub fn lookup_url(config: &Config, ip: &str) -> String {
    format!("{}://{}/{}/json", config.protocol, config.host, ip)
}

#[cfg_attr(feature = "tracing", instrument(skip(config)))]
pub async fn send_request(config: &Config, ip: &str) -> Result<Value, IpInfoError> {
    let client = Client::new();
    let url = lookup_url(config, ip);
    #[cfg(feature = "tracing")]
    debug!(host = %config.host, "Sending request to ipinfo");

    let mut request = client.get(&url).header("Accept", "application/json");
    if let Some(token) = &config.token {
        request = request.query(&[("token", token)]);
    }
    let res = request.send().await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        #[cfg(feature = "tracing")]
        error!(status = ?status, body = %body, "ipinfo API returned error");
        return Err(IpInfoError::ApiError { status, body });
    }

    let location: Value = serde_json::from_str(&body)?;
    #[cfg(feature = "tracing")]
    info!(status = ?status, location = %location, "ipinfo request successful");
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_url_uses_ip_as_path_segment() {
        let config = Config::default();
        assert_eq!(lookup_url(&config, "1.2.3.4"), "http://ipinfo.io/1.2.3.4/json");
    }

    #[test]
    fn lookup_url_leaves_token_to_the_query() {
        let config = Config {
            token: Some("abc123".to_string()),
            ..Config::default()
        };
        assert_eq!(lookup_url(&config, "::1"), "http://ipinfo.io/::1/json");
    }

    #[test]
    fn lookup_url_does_not_validate_ip() {
        let config = Config {
            host: "localhost:8080".to_string(),
            protocol: "https".to_string(),
            token: None,
        };
        assert_eq!(
            lookup_url(&config, "not-an-ip"),
            "https://localhost:8080/not-an-ip/json"
        );
    }
}
