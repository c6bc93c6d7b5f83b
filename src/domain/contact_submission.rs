//! src/domain/contact_submission.rs

use crate::domain::message_content::{MessageBody, MessageSubject};
use crate::domain::submitter_email::SubmitterEmail;
use crate::domain::submitter_name::SubmitterName;

/// One validated contact-form submission.
///
/// Built per request, consumed to render a single notification email,
/// then dropped. Never stored.
#[derive(Debug)]
pub struct ContactSubmission {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub subject: MessageSubject,
    pub message: MessageBody,
}
