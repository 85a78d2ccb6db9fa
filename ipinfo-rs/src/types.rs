#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub protocol: String,
    /// Optional API token; anonymous lookups are rate limited by the provider.
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "ipinfo.io".to_string(),
            protocol: "http".to_string(),
            token: None,
        }
    }
}
