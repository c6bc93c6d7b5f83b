use std::fmt::Formatter;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use tracing;

use crate::domain::contact_submission::ContactSubmission;
use crate::domain::message_content::{MessageBody, MessageSubject};
use crate::domain::submitter_email::SubmitterEmail;
use crate::domain::submitter_name::SubmitterName;
use crate::mail::send_email::EmailClient;
use crate::mail::template::{notification_subject, render_notification};

/// Wire-level rejection message, shared by every validation branch so a
/// missing field and an empty field are indistinguishable to the caller.
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Failed to send email")]
    DispatchError(#[source] reqwest::Error),

    #[error("Failed to send email")]
    DispatchTimeout(#[source] reqwest::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            // The caller cannot distinguish a slow relay from a broken one;
            // both are one failed submission.
            ContactError::DispatchError(_) | ContactError::DispatchTimeout(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ContactError::ValidationError(message) => HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": message })),
            ContactError::DispatchError(source) | ContactError::DispatchTimeout(source) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": self.to_string(),
                    "details": source.to_string(),
                }))
            }
        }
    }
}

/// Raw request body. Absent keys default to empty strings so that missing
/// and empty fields take the same rejection path.
#[derive(serde::Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    message: String,
}

impl TryFrom<ContactPayload> for ContactSubmission {
    type Error = String;

    fn try_from(payload: ContactPayload) -> Result<Self, Self::Error> {
        let name = SubmitterName::parse(payload.name);
        let email = SubmitterEmail::parse(payload.email);
        let subject = MessageSubject::parse(payload.subject);
        let message = MessageBody::parse(payload.message);

        match (name, email, subject, message) {
            (Ok(name), Ok(email), Ok(subject), Ok(message)) => Ok(Self {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(ALL_FIELDS_REQUIRED.into()),
        }
    }
}

#[tracing::instrument(
name = "Handling a contact form submission",
skip(payload, email_client),
fields(
submitter_email = % payload.email,
submitter_name = % payload.name,
)
)]
pub async fn send_contact_email(
    payload: web::Json<ContactPayload>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, ContactError> {
    let submission: ContactSubmission = payload
        .into_inner()
        .try_into()
        .map_err(ContactError::ValidationError)?;

    let message_id = dispatch_notification(&email_client, &submission)
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ContactError::DispatchTimeout(e)
            } else {
                ContactError::DispatchError(e)
            }
        })?;

    tracing::info!("Notification dispatched, delivery id: {}", message_id);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "messageId": message_id,
    })))
}

#[tracing::instrument(
    name = "Dispatching a notification to the mail relay",
    skip(email_client, submission)
)]
pub async fn dispatch_notification(
    email_client: &EmailClient,
    submission: &ContactSubmission,
) -> Result<String, reqwest::Error> {
    let subject = notification_subject(&submission.subject);
    let html_body = render_notification(submission);

    email_client
        .send_email(&submission.name, &submission.email, &subject, &html_body)
        .await
}
