use crate::domain::{
    errors::AppError,
    models::Visit,
    ports::{geolocation::GeolocationRepository, notification::NotificationRepository},
};

pub struct VisitService<G: GeolocationRepository, N: NotificationRepository> {
    geolocation: G,
    notifier: N,
}

impl<G: GeolocationRepository, N: NotificationRepository> VisitService<G, N> {
    pub fn new(geolocation: G, notifier: N) -> Self {
        Self {
            geolocation,
            notifier,
        }
    }

    /// Resolves the caller's location and mails the visit to the operator.
    ///
    /// The lookup runs first; if it fails no email is sent.
    pub async fn record(&self, ip: String, device: Option<String>) -> Result<Visit, AppError> {
        let location = self.geolocation.locate(&ip).await?;
        let visit = Visit {
            ip,
            location,
            device,
        };
        tracing::info!(ip = %visit.ip, device = ?visit.device, "visit recorded");

        self.notifier.notify(&visit).await?;
        Ok(visit)
    }
}
