// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;
use std::time::Duration;

pub const SESSION_COOKIE: &str = "storefront_session";

/// Attributes of the session cookie issued on login.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookieSettings {
    pub secure: bool,
    pub max_age: Duration,
}

impl SessionCookieSettings {
    pub fn issue(&self, token: &str) -> String {
        self.render(token, self.max_age.as_secs())
    }

    pub fn clear(&self) -> String {
        self.render("", 0)
    }

    fn render(&self, value: &str, max_age: u64) -> String {
        let mut cookie =
            format!("{SESSION_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub session_cookie: SessionCookieSettings,
}
