// src/presentation/http/middleware/require_admin.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::extractors::token_from_headers;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Route guard for the admin panel: a valid session with the admin role.
///
/// The resolved `AdminSession` is stored in the request extensions for
/// `CurrentAdmin`.
pub async fn require_admin(mut req: Request<Body>, next: Next) -> Response {
    let Some(token) = token_from_headers(req.headers()) else {
        return HttpError::from_error(ApplicationError::unauthorized("missing session"))
            .into_response();
    };

    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    match state.services.authorize_admin(&token).await {
        Ok(session) => {
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}
