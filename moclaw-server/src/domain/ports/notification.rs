use crate::domain::{errors::AppError, models::Visit};
use std::future::Future;

pub trait NotificationRepository: Send + Sync + 'static {
    fn notify(&self, visit: &Visit) -> impl Future<Output = Result<(), AppError>> + Send;
}
