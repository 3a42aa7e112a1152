// src/presentation/http/extractors.rs
use crate::application::{dto::CallerOrigin, error::ApplicationError};
use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};
use std::net::SocketAddr;

use super::error::HttpError;

/// The transport-level peer address of the request.
///
/// Read from the connection, never from a header such as `X-Forwarded-For`,
/// so a client cannot claim another origin. Requires the router to be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
#[derive(Debug, Clone)]
pub struct PeerOrigin(pub CallerOrigin);

impl<S> FromRequestParts<S> for PeerOrigin
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ConnectInfo(address) = ConnectInfo::<SocketAddr>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "peer address unavailable",
                ))
            })?;

        // IPv4 peers on a dual-stack listener arrive as ::ffff:a.b.c.d.
        Ok(Self(CallerOrigin::from(address.ip().to_canonical())))
    }
}
