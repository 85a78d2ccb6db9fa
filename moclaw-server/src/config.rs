use std::fmt;

use ::config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

const DEFAULT_SERVER_PORT: u16 = 5000;

const DEFAULT_SMTP_HOST: &str = "smtp.mail.yahoo.com";

const DEFAULT_SMTP_PORT: u16 = 587;

const DEFAULT_MAIL_SUBJECT: &str = "Who clicked on your link?";

#[derive(Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub ipinfo_protocol: String,
    pub ipinfo_host: String,
    pub ipinfo_token: Option<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub mail_from: String,
    pub mail_to: String,
    pub mail_subject: String,
}

impl Config {
    /// Loads `.env`, then layers defaults, an optional `config.toml` and the
    /// process environment.
    pub fn load() -> Result<Config, ConfigError> {
        dotenv::dotenv().ok();

        Self::layered(Environment::default())
    }

    /// Environment values stay strings until deserialization.
    fn layered(environment: Environment) -> Result<Config, ConfigError> {
        defaults()?
            .add_source(File::with_name("config.toml").required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn ipinfo(&self) -> ipinfo_rs::types::Config {
        ipinfo_rs::types::Config {
            host: self.ipinfo_host.clone(),
            protocol: self.ipinfo_protocol.clone(),
            token: self.ipinfo_token.clone(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("ipinfo_protocol", &self.ipinfo_protocol)
            .field("ipinfo_host", &self.ipinfo_host)
            .field("ipinfo_token", &self.ipinfo_token.as_ref().map(|_| "<redacted>"))
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"<redacted>")
            .field("mail_from", &self.mail_from)
            .field("mail_to", &self.mail_to)
            .field("mail_subject", &self.mail_subject)
            .finish()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let ipinfo = ipinfo_rs::types::Config::default();

    ::config::Config::builder()
        .set_default("server_host", DEFAULT_SERVER_HOST)?
        .set_default("server_port", i64::from(DEFAULT_SERVER_PORT))?
        .set_default("ipinfo_protocol", ipinfo.protocol)?
        .set_default("ipinfo_host", ipinfo.host)?
        .set_default("smtp_host", DEFAULT_SMTP_HOST)?
        .set_default("smtp_port", i64::from(DEFAULT_SMTP_PORT))?
        .set_default("mail_subject", DEFAULT_MAIL_SUBJECT)
}
