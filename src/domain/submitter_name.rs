//! src/domain/submitter_name.rs

/// Display name the visitor typed into the contact form.
///
/// The only constraint is presence: the form accepts any name the visitor
/// cares to give, but a blank one leaves the notification unattributable.
#[derive(Debug)]
pub struct SubmitterName(String);

impl SubmitterName {
    pub fn parse(s: String) -> Result<SubmitterName, String> {
        if s.trim().is_empty() {
            return Err("name must not be empty".into());
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
