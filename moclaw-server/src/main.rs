use anyhow::Context;
use moclaw_server::{
    adapters::{
        app_state::AppState,
        http::{self, HttpServer, HttpServerConfig},
    },
    application::services::visit_service::VisitService,
    config::Config,
    infrastructure::repository::{
        ipinfo_repository::IpInfoRepository, smtp_repository::SmtpRepository,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::load().context("Failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let geolocation = IpInfoRepository::new(config.ipinfo());
    let notifier = SmtpRepository::new(&config).context("Invalid mail settings")?;
    let state = AppState::new(VisitService::new(geolocation, notifier));

    let server_config = HttpServerConfig {
        host: &config.server_host,
        port: config.server_port,
    };
    let http_server = HttpServer::new(server_config, http::router(state))
        .await
        .context("Failed to create HTTP server")?;
    http_server.run().await.context("Failed to run HTTP server")
}
