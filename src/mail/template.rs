//! src/mail/template.rs
//!
//! Renders a validated submission into the fixed notification layout.
//! User-supplied text is escaped before it is embedded; the newline-to-break
//! substitution happens after escaping so it survives intact.

use htmlescape::{encode_attribute, encode_minimal};

use crate::domain::contact_submission::ContactSubmission;
use crate::domain::message_content::MessageSubject;

const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

/// Derived subject line: fixed prefix plus the visitor's subject, verbatim.
pub fn notification_subject(subject: &MessageSubject) -> String {
    format!("{}{}", SUBJECT_PREFIX, subject.as_ref())
}

/// HTML body presenting name, email (as a mailto link), subject and message.
pub fn render_notification(submission: &ContactSubmission) -> String {
    let name = encode_minimal(submission.name.as_ref());
    let email = encode_minimal(submission.email.as_ref());
    let email_href = encode_attribute(&format!("mailto:{}", submission.email.as_ref()));
    let subject = encode_minimal(submission.subject.as_ref());
    let message = encode_minimal(submission.message.as_ref()).replace('\n', "<br/>");

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <style>
      body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
      .container {{ max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f9f9f9; }}
      .header {{ background-color: #4F46E5; color: white; padding: 20px; text-align: center; border-radius: 5px 5px 0 0; }}
      .content {{ background-color: white; padding: 30px; border-radius: 0 0 5px 5px; }}
      .info-row {{ margin-bottom: 15px; padding-bottom: 15px; border-bottom: 1px solid #eee; }}
      .label {{ font-weight: bold; color: #4F46E5; }}
      .message-box {{ background-color: #f5f5f5; padding: 15px; border-left: 4px solid #4F46E5; margin-top: 20px; }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header">
        <h2>New Contact Form Submission</h2>
      </div>
      <div class="content">
        <div class="info-row">
          <span class="label">Name:</span><br/>
          {name}
        </div>
        <div class="info-row">
          <span class="label">Email:</span><br/>
          <a href="{email_href}">{email}</a>
        </div>
        <div class="info-row">
          <span class="label">Subject:</span><br/>
          {subject}
        </div>
        <div class="message-box">
          <span class="label">Message:</span><br/><br/>
          {message}
        </div>
      </div>
    </div>
  </body>
</html>"#,
        name = name,
        email_href = email_href,
        email = email,
        subject = subject,
        message = message,
    )
}
