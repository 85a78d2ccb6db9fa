use crate::errors::IpInfoError;
use crate::types::Config;
use crate::utils::send_request;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct IpInfo {
    pub config: Arc<Config>,
}

impl IpInfo {
    pub fn init(config: Option<Config>) -> Self {
        Self {
            config: Arc::new(config.unwrap_or_default()),
        }
    }

    /// Looks up `ip` and returns the provider's JSON document untouched.
    ///
    /// Every call performs a fresh request; nothing is cached.
    pub async fn lookup(&self, ip: &str) -> Result<Value, IpInfoError> {
        send_request(&self.config, ip).await
    }
}
