//! Contact form submissions: input rules and requester metadata.

use std::net::IpAddr;

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// Maximum stored user-agent length, in characters.
pub const MAX_USER_AGENT_LEN: usize = 512;

/// A contact form payload as posted by the public site.
///
/// Missing fields deserialize as empty strings so they are reported by
/// [`normalize_contact`] rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactInput {
    #[serde(default)]
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(
        email(message = "email must be a valid email address"),
        length(max = 254, message = "email must be at most 254 characters")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 5000, message = "message must be at most 5000 characters"))]
    pub message: String,
}

/// Trim every field, then check required fields and field rules.
pub fn normalize_contact(input: ContactInput) -> Result<ContactInput, CoreError> {
    let trimmed = ContactInput {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        message: input.message.trim().to_string(),
    };

    let missing: Vec<&str> = [
        ("name", &trimmed.name),
        ("email", &trimmed.email),
        ("message", &trimmed.message),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    trimmed
        .validate()
        .map_err(|errors| CoreError::Validation(describe_errors(&errors)))?;

    Ok(trimmed)
}

/// Flatten validator errors into one message, sorted by field name.
fn describe_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                (field.clone(), msg)
            })
        })
        .collect();
    messages.sort();
    messages
        .into_iter()
        .map(|(_, msg)| msg)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Pick the requester address for a submission.
///
/// Prefers the first hop of `X-Forwarded-For`, then `X-Real-IP`, then the
/// socket peer. Header values that do not parse as an IP are skipped.
pub fn client_ip(
    forwarded_for: Option<&str>,
    real_ip: Option<&str>,
    peer: Option<IpAddr>,
) -> Option<String> {
    let from_forwarded = forwarded_for
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .and_then(|v| v.parse::<IpAddr>().ok());

    let from_real_ip = || real_ip.map(str::trim).and_then(|v| v.parse::<IpAddr>().ok());

    from_forwarded
        .or_else(from_real_ip)
        .or(peer)
        .map(|ip| ip.to_string())
}

/// Trim a user-agent header and cap its length. Blank becomes `None`.
pub fn normalize_user_agent(user_agent: Option<&str>) -> Option<String> {
    user_agent
        .map(str::trim)
        .filter(|ua| !ua.is_empty())
        .map(|ua| ua.chars().take(MAX_USER_AGENT_LEN).collect())
}
