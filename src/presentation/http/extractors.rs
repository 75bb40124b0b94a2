// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError,
    domain::account::AdminSession,
    presentation::http::state::{HttpState, SESSION_COOKIE},
};
use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{HeaderMap, request::Parts},
};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Signed session token from the session cookie or a bearer header.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

/// Any signed-in account.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub AdminSession);

/// A signed-in administrator.
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub AdminSession);

pub(crate) fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(cookie) = headers.typed_get::<Cookie>() {
        if let Some(value) = cookie.get(SESSION_COOKIE).filter(|v| !v.is_empty()) {
            return Some(value.to_owned());
        }
    }
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_owned())
}

fn app_state(parts: &Parts) -> Result<HttpState, HttpError> {
    parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
    })
}

impl<S: Send + Sync> FromRequestParts<S> for SessionToken {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        token_from_headers(&parts.headers).map(Self).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized("missing session"))
        })
    }
}

impl<S: Send + Sync> OptionalFromRequestParts<S> for SessionToken {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(token_from_headers(&parts.headers).map(Self))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CurrentSession {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts)?;
        let SessionToken(token) =
            <SessionToken as FromRequestParts<S>>::from_request_parts(parts, state).await?;
        let session = app_state
            .services
            .auth
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;
        Ok(Self(session))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CurrentAdmin {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Set by the admin route guard.
        if let Some(session) = parts.extensions.get::<AdminSession>() {
            return Ok(Self(session.clone()));
        }

        let app_state = app_state(parts)?;
        let SessionToken(token) =
            <SessionToken as FromRequestParts<S>>::from_request_parts(parts, state).await?;
        let session = app_state
            .services
            .authorize_admin(&token)
            .await
            .map_err(HttpError::from_error)?;
        Ok(Self(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use axum::http::header::{AUTHORIZATION, COOKIE};

    #[test]
    fn cookie_wins_over_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; storefront_session=from-cookie"),
        );
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        assert_eq!(token_from_headers(&headers).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn bearer_is_used_without_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        assert_eq!(token_from_headers(&headers).as_deref(), Some("from-header"));
    }

    #[test]
    fn no_credentials_yields_none() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(token_from_headers(&headers), None);
    }
}
