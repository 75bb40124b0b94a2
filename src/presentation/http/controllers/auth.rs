// src/presentation/http/controllers/auth.rs
use crate::application::{commands::auth::LoginCommand, dto::SessionDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{CurrentSession, SessionToken};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{StatusCode, header::SET_COOKIE},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Same value as the session cookie, for bearer-token clients.
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub session: SessionDto,
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in; the session cookie is set.", body = LoginResponse),
        (status = 401, description = "Invalid credentials.", body = ErrorResponse),
        (status = 403, description = "Account disabled.", body = ErrorResponse),
        (status = 429, description = "Too many attempts.")
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<impl IntoResponse> {
    let signed = state
        .services
        .auth
        .login(LoginCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()?;

    let cookie = state.session_cookie.issue(&signed.token);
    let body = LoginResponse {
        token: signed.token,
        expires_at: signed.expires_at,
        session: signed.session.into(),
    };

    Ok(([(SET_COOKIE, cookie)], Json(body)))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/logout",
    responses((status = 204, description = "Session ended and cookie cleared.")),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    token: Option<SessionToken>,
) -> HttpResult<impl IntoResponse> {
    if let Some(SessionToken(token)) = token {
        state.services.auth.logout(&token).await.into_http()?;
    }

    Ok((
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, state.session_cookie.clear())],
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/me",
    responses(
        (status = 200, description = "Current session.", body = SessionDto),
        (status = 401, description = "Not signed in.", body = ErrorResponse)
    ),
    security(("sessionCookie" = []), ("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn me(CurrentSession(session): CurrentSession) -> Json<SessionDto> {
    Json(session.into())
}
