use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::email_address::EmailAddress;

/// Raw contact form payload as it crosses the wire.
///
/// Fields default to empty strings, so an absent field and an empty field are
/// rejected by the same rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// A fully validated contact form submission.
///
/// Instances only exist as the `Ok` output of [`ContactSubmission::from_form`]
/// and are dropped once the request completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: SubmissionName,
    pub email: EmailAddress,
    pub subject: SubmissionSubject,
    pub message: SubmissionMessage,
}

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionName(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionSubject(String);

#[nutype(
    validate(len_char_min = 10),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionMessage(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionField {
    Name,
    Email,
    Subject,
    Message,
}

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: SubmissionField,
    pub message: &'static str,
}

impl FieldViolation {
    const NAME_REQUIRED: Self = Self {
        field: SubmissionField::Name,
        message: "Name is required",
    };
    const EMAIL_INVALID: Self = Self {
        field: SubmissionField::Email,
        message: "Valid email is required",
    };
    const SUBJECT_REQUIRED: Self = Self {
        field: SubmissionField::Subject,
        message: "Subject is required",
    };
    const MESSAGE_TOO_SHORT: Self = Self {
        field: SubmissionField::Message,
        message: "Message must be at least 10 characters",
    };
}

impl ContactSubmission {
    /// Validates the four raw fields in one pass.
    ///
    /// Returns either a fully validated submission or the complete list of
    /// violations in field order. There is no partial acceptance.
    pub fn from_form(form: ContactForm) -> Result<Self, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let name = check(
            SubmissionName::try_new(form.name),
            FieldViolation::NAME_REQUIRED,
            &mut violations,
        );
        let email = check(
            form.email.parse::<EmailAddress>(),
            FieldViolation::EMAIL_INVALID,
            &mut violations,
        );
        let subject = check(
            SubmissionSubject::try_new(form.subject),
            FieldViolation::SUBJECT_REQUIRED,
            &mut violations,
        );
        let message = check(
            SubmissionMessage::try_new(form.message),
            FieldViolation::MESSAGE_TOO_SHORT,
            &mut violations,
        );

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(Self {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(violations),
        }
    }
}

fn check<T, E>(
    result: Result<T, E>,
    violation: FieldViolation,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(_) => {
            violations.push(violation);
            None
        }
    }
}
