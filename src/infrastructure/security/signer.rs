// src/infrastructure/security/signer.rs
use crate::application::ports::security::SessionTokenSigner;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac, digest::InvalidLength};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Issues `<session id>.<base64url(HMAC-SHA256(session id))>` tokens.
#[derive(Clone)]
pub struct HmacSessionSigner {
    keyed: HmacSha256,
}

impl HmacSessionSigner {
    pub fn new(secret: &[u8]) -> Result<Self, InvalidLength> {
        Ok(Self {
            keyed: <HmacSha256 as Mac>::new_from_slice(secret)?,
        })
    }

    fn mac(&self) -> HmacSha256 {
        self.keyed.clone()
    }
}

impl SessionTokenSigner for HmacSessionSigner {
    fn sign(&self, session_id: &str) -> String {
        let mut mac = self.mac();
        mac.update(session_id.as_bytes());
        let tag = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        format!("{session_id}.{tag}")
    }

    fn verify(&self, token: &str) -> Option<String> {
        let (session_id, tag) = token.rsplit_once('.')?;
        if session_id.is_empty() {
            return None;
        }
        let tag = URL_SAFE_NO_PAD.decode(tag).ok()?;
        let mut mac = self.mac();
        mac.update(session_id.as_bytes());
        mac.verify_slice(&tag).ok()?;
        Some(session_id.to_owned())
    }
}
