//! Contact form validation
//!
//! Validation runs locally before the form may be submitted; there is no
//! server round-trip.

use serde::{Deserialize, Serialize};

/// Shortest accepted message, in characters, after trimming
///
/// Counts Unicode scalar values, so an emoji is one character rather than
/// two UTF-16 units.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Fields of the contact form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// One rejected field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

/// Every field that failed validation, in form order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{}", join_messages(.errors))]
pub struct ContactErrors {
    pub errors: Vec<FieldError>,
}

impl ContactErrors {
    /// Message for a field, if that field failed
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join("; ")
}

/// User input from the contact window
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Create a form from raw field values
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check every field, collecting all failures
    pub fn validate(&self) -> Result<(), ContactErrors> {
        let errors: Vec<FieldError> = [
            (ContactField::Name, check_name(&self.name)),
            (ContactField::Email, check_email(&self.email)),
            (ContactField::Message, check_message(&self.message)),
        ]
        .into_iter()
        .filter_map(|(field, outcome)| outcome.err().map(|message| FieldError { field, message }))
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ContactErrors { errors })
        }
    }
}

fn check_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name is required");
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        return Err("Email is required");
    }
    if !is_plausible_email(email) {
        return Err("Please enter a valid email address");
    }
    Ok(())
}

fn check_message(message: &str) -> Result<(), &'static str> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err("Message is required");
    }
    if trimmed.chars().count() < MIN_MESSAGE_LEN {
        return Err("Message must be at least 10 characters long");
    }
    Ok(())
}

/// `local@domain.tld`: no whitespace, a single `@`, and a dot in the domain
/// with at least one character on each side.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
