use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::ModelCard;

/// Contact form submission. Required strings are optional at the serde level so that a
/// missing field is reported by name through validation instead of as a parse failure.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ContactForm {
    #[validate(required(message = "Name is required"))]
    #[schema(value_type = String, example = "Test User")]
    pub name: Option<String>,
    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email address"),
        custom(function = "validate_email_domain")
    )]
    #[schema(value_type = String, example = "test@example.com")]
    pub email: Option<String>,
    #[schema(example = "Test Company")]
    pub company: Option<String>,
    #[validate(required(message = "Message is required"))]
    #[schema(value_type = String)]
    pub message: Option<String>,
}

/// Top-level domains reserved for special use; mail to them is never deliverable.
const SPECIAL_USE_TLDS: &[&str] = &["localhost", "local", "test", "invalid"];

/// Requires a dotted domain outside the special-use TLDs. Addresses without `@` are left to the
/// `email` check.
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Ok(());
    };
    let domain = domain.trim_end_matches('.').to_ascii_lowercase();

    let tld = match domain.rsplit_once('.') {
        Some((_, tld)) => tld,
        None => return Err(domain_error("The email domain must contain a dot")),
    };
    if SPECIAL_USE_TLDS.contains(&tld) {
        return Err(domain_error("The email domain is a special-use name"));
    }

    Ok(())
}

fn domain_error(message: &'static str) -> ValidationError {
    let mut err = ValidationError::new("email_domain");
    err.message = Some(message.into());
    err
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactAck {
    #[schema(example = "success")]
    pub status: String,
    pub message: String,
}

impl ContactAck {
    pub fn received(card: &ModelCard) -> Self {
        Self {
            status: "success".to_string(),
            message: format!(
                "Thank you for your interest in {}! We'll get back to you soon.",
                card.name
            ),
        }
    }
}
