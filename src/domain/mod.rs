pub mod contact_submission;
pub mod message_content;
pub mod submitter_email;
pub mod submitter_name;
