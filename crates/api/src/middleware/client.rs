//! Requester metadata extractor.

use std::convert::Infallible;
use std::net::SocketAddr;

use atelier_core::contact::{client_ip, normalize_user_agent};
use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::header::USER_AGENT;
use axum::http::request::Parts;

/// Address and user-agent of the caller, as far as they can be told.
///
/// Never rejects: every field is optional. The socket peer is only known
/// when the server is started with connect info.
#[derive(Debug, Clone, Default)]
pub struct ClientMeta {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl<S> FromRequestParts<S> for ClientMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| parts.headers.get(name).and_then(|v| v.to_str().ok());

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        Ok(ClientMeta {
            ip: client_ip(header("x-forwarded-for"), header("x-real-ip"), peer),
            user_agent: normalize_user_agent(
                parts.headers.get(USER_AGENT).and_then(|v| v.to_str().ok()),
            ),
        })
    }
}
