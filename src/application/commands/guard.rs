// src/application/commands/guard.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::account::AdminSession;

pub(crate) fn ensure_admin(actor: &AdminSession) -> ApplicationResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "role {} cannot manage the catalog",
            actor.role
        )))
    }
}

/// Blank descriptions are stored as absent.
pub(super) fn tidy_description(description: Option<String>) -> Option<String> {
    description
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_description_becomes_none() {
        assert_eq!(tidy_description(Some("   ".into())), None);
        assert_eq!(tidy_description(Some(" Len ".into())), Some("Len".into()));
        assert_eq!(tidy_description(None), None);
    }
}
