use axum::{http::StatusCode, response::IntoResponse};
use ipinfo_rs::errors::IpInfoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Geolocation lookup failed: {0}")]
    Geolocation(#[from] IpInfoError),
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error("Failed to build email: {0}")]
    Email(#[from] lettre::error::Error),
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Could not determine client IP")]
    MissingClientIp,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Geolocation(_) | AppError::Smtp(_) => StatusCode::BAD_GATEWAY,
            AppError::Email(_) | AppError::Address(_) | AppError::MissingClientIp => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_are_bad_gateway() {
        let err = AppError::Geolocation(IpInfoError::InvalidJson(
            serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
        ));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert!(err.into_response().status().is_server_error());
    }

    #[test]
    fn local_failures_are_internal() {
        let err: AppError = "not an address"
            .parse::<lettre::Address>()
            .unwrap_err()
            .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::MissingClientIp.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
