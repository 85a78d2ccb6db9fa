use crate::domain::errors::AppError;
use serde_json::Value;
use std::future::Future;

pub trait GeolocationRepository: Send + Sync + 'static {
    fn locate(&self, ip: &str) -> impl Future<Output = Result<Value, AppError>> + Send;
}
