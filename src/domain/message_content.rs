//! src/domain/message_content.rs

/// Subject line supplied by the visitor; prefixed before dispatch.
#[derive(Debug)]
pub struct MessageSubject(String);

impl MessageSubject {
    pub fn parse(s: String) -> Result<MessageSubject, String> {
        if s.trim().is_empty() {
            return Err("subject must not be empty".into());
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for MessageSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Free-text message body. May span multiple lines; no length limit.
#[derive(Debug)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn parse(s: String) -> Result<MessageBody, String> {
        if s.trim().is_empty() {
            return Err("message must not be empty".into());
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
