//! The admin PIN gate.
//!
//! A single shared secret, compared by plain string equality.

use crate::error::CoreError;

/// Check a submitted PIN against the configured one.
///
/// | Situation                     | Result                      |
/// |-------------------------------|-----------------------------|
/// | no PIN configured (or blank)  | `CoreError::Internal`       |
/// | submitted PIN blank or spaces | `CoreError::Validation`     |
/// | PINs differ                   | `CoreError::Unauthorized`   |
/// | PINs equal                    | `Ok(())`                    |
pub fn check_pin(configured: Option<&str>, submitted: &str) -> Result<(), CoreError> {
    let expected = configured
        .filter(|p| !p.is_empty())
        .ok_or_else(|| CoreError::Internal("ADMIN_PIN is not configured".into()))?;

    if submitted.trim().is_empty() {
        return Err(CoreError::Validation("PIN is required".into()));
    }

    if submitted != expected {
        return Err(CoreError::Unauthorized("Invalid PIN".into()));
    }

    Ok(())
}
