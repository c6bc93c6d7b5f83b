//! src/client.rs
//!
//! Headless counterpart of the contact form: owns the four field values and
//! drives one POST per user-initiated submit, exposing the
//! `Idle -> Submitting -> {Success | Error}` state machine the page renders.

use reqwest::Client;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

/// Current field values. Serialized as the request body on submit.
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub struct SubmissionClient {
    http_client: Client,
    endpoint: String,
    form: ContactForm,
    status: SubmitStatus,
}

impl SubmissionClient {
    /// `endpoint` is the full submission URL, e.g.
    /// `http://127.0.0.1:8000/api/send-email`.
    pub fn new(endpoint: String) -> Self {
        Self {
            http_client: Client::new(),
            endpoint,
            form: ContactForm::default(),
            status: SubmitStatus::Idle,
        }
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Whether the submit control should be rendered disabled.
    pub fn is_submit_disabled(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Issues one submission and returns the terminal status.
    ///
    /// Single-flight per form instance: while a submission is in flight the
    /// control is disabled and a re-entrant call is a no-op. A success
    /// response clears the fields; any failure, transport-level or status-
    /// level, keeps them so the visitor can resubmit by hand. No automatic
    /// retry, no cancellation.
    pub async fn submit(&mut self) -> SubmitStatus {
        if self.status == SubmitStatus::Submitting {
            return self.status;
        }

        self.status = SubmitStatus::Submitting;

        let outcome = self
            .http_client
            .post(&self.endpoint)
            .json(&self.form)
            .send()
            .await;

        self.status = match outcome {
            Ok(response) if response.status().is_success() => {
                self.form = ContactForm::default();
                SubmitStatus::Success
            }
            Ok(_) | Err(_) => SubmitStatus::Error,
        };

        self.status
    }
}
