use axum::{extract::State, Json};

use crate::domain::{
    errors::AppError,
    models::Visit,
    ports::{geolocation::GeolocationRepository, notification::NotificationRepository},
};

use super::{
    app_state::AppState,
    client_info::{ClientIp, Device},
};

pub async fn visit_route<G: GeolocationRepository, N: NotificationRepository>(
    State(state): State<AppState<G, N>>,
    ClientIp(ip): ClientIp,
    Device(device): Device,
) -> Result<Json<Visit>, AppError> {
    let visit = state
        .visit_service
        .record(ip, device)
        .await
        .inspect_err(|e| tracing::error!("Failed to record visit: {}", e))?;

    Ok(Json(visit))
}
