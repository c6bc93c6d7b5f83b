//! src/domain/submitter_email.rs

/// Reply address supplied by the visitor.
///
/// Presence is the only check. The address is never delivered to, only set
/// as the reply-to header on the notification, so a malformed one costs the
/// visitor their reply rather than breaking dispatch.
#[derive(Debug, Clone)]
pub struct SubmitterEmail(String);

impl SubmitterEmail {
    pub fn parse(s: String) -> Result<SubmitterEmail, String> {
        if s.trim().is_empty() {
            return Err("email must not be empty".into());
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmitterEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
