use std::{convert::Infallible, net::SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{header, request::Parts},
};

use crate::domain::errors::AppError;

const REAL_IP_HEADER: &str = "x-real-ip";

/// The caller's address: `X-Real-Ip` when a proxy set it, else the peer address.
///
/// The header value is taken verbatim, without checking that it parses as an IP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get(REAL_IP_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::to_owned);

        if let Some(ip) = forwarded {
            return Ok(ClientIp(ip));
        }

        parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| ClientIp(addr.ip().to_string()))
            .ok_or(AppError::MissingClientIp)
    }
}

/// The `User-Agent` the client declared, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device(pub Option<String>);

impl<S> FromRequestParts<S> for Device
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let device = parts
            .headers
            .get(header::USER_AGENT)
            .and_then(|h| h.to_str().ok())
            .map(str::to_owned);
        Ok(Device(device))
    }
}
