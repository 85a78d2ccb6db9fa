use std::sync::Arc;

use crate::{
    application::services::visit_service::VisitService,
    domain::ports::{geolocation::GeolocationRepository, notification::NotificationRepository},
};

pub struct AppState<G: GeolocationRepository, N: NotificationRepository> {
    pub visit_service: Arc<VisitService<G, N>>,
}

impl<G: GeolocationRepository, N: NotificationRepository> AppState<G, N> {
    pub fn new(visit_service: VisitService<G, N>) -> Self {
        Self {
            visit_service: Arc::new(visit_service),
        }
    }
}

// Derived Clone would require G: Clone and N: Clone.
impl<G: GeolocationRepository, N: NotificationRepository> Clone for AppState<G, N> {
    fn clone(&self) -> Self {
        Self {
            visit_service: self.visit_service.clone(),
        }
    }
}
