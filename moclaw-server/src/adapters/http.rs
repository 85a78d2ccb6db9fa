use std::net::SocketAddr;

use anyhow::Context;
use axum::{routing::*, Router};
use tokio::net;
use tower_http::trace::TraceLayer;

use crate::domain::ports::{
    geolocation::GeolocationRepository, notification::NotificationRepository,
};

use super::{app_state::AppState, visit::visit_route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig<'a> {
    pub host: &'a str,
    pub port: u16,
}

pub struct HttpServer {
    router: Router,
    listener: net::TcpListener,
}

impl HttpServer {
    pub async fn new(config: HttpServerConfig<'_>, router: Router) -> anyhow::Result<Self> {
        let listener = net::TcpListener::bind((config.host, config.port))
            .await
            .with_context(|| format!("failed to listen on {}:{}", config.host, config.port))?;

        Ok(Self { router, listener })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("failed to read listener address")
    }

    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!("listening on {}", self.local_addr()?);
        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .context("received error from running server")?;
        Ok(())
    }
}

/// Builds the single-route application: `GET /moclaw`.
pub fn router<G: GeolocationRepository, N: NotificationRepository>(state: AppState<G, N>) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request<_>| {
            let uri = request.uri().to_string();
            tracing::info_span!("http_request", method = ?request.method(), uri)
        });

    Router::new()
        .route("/moclaw", get(visit_route::<G, N>))
        .layer(trace_layer)
        .with_state(state)
}
