//! src/mail/send_email.rs

use reqwest::Client;
use secrecy::ExposeSecret;

use crate::config::EmailClientSettings;
use crate::domain::submitter_email::SubmitterEmail;
use crate::domain::submitter_name::SubmitterName;

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: &'a str,
    html_body: &'a str,
}

#[derive(serde::Deserialize)]
struct SendEmailResponse {
    #[serde(rename = "MessageID")]
    message_id: String,
}

/// Client for the outbound mail relay.
///
/// Notifications are addressed to the relay account's own inbox; the visitor
/// appears in the from-display and the reply-to header.
pub struct EmailClient {
    http_client: Client,
    sender: SubmitterEmail,
    email_settings: EmailClientSettings,
}

impl EmailClient {
    pub fn new(email_settings: EmailClientSettings, sender: SubmitterEmail) -> Self {
        Self {
            // A hung relay must not hang the request: bound every call.
            http_client: Client::builder()
                .timeout(std::time::Duration::from_millis(
                    email_settings.send_timeout_ms,
                ))
                .build()
                .unwrap(),
            email_settings,
            sender,
        }
    }

    /// Dispatches one notification and returns the relay's delivery id.
    pub async fn send_email(
        &self,
        from_name: &SubmitterName,
        reply_to: &SubmitterEmail,
        subject: &str,
        html_content: &str,
    ) -> Result<String, reqwest::Error> {
        let url = format!("{}/email", self.email_settings.base_url);
        let from = format!("\"{}\" <{}>", from_name.as_ref(), self.sender.as_ref());
        let request_body = SendEmailRequest {
            from: &from,
            to: self.sender.as_ref(),
            reply_to: reply_to.as_ref(),
            subject,
            html_body: html_content,
        };

        let response: SendEmailResponse = self
            .http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.email_settings.authorization.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.message_id)
    }
}

#[cfg(test)]
mod tests {
    use claims::{assert_err, assert_ok_eq};
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::lorem::en::{Paragraph, Sentence};
    use fake::faker::name::en::Name;
    use fake::{Fake, Faker};
    use secrecy::Secret;
    use wiremock::matchers::{any, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    use crate::config::EmailClientSettings;
    use crate::domain::submitter_email::SubmitterEmail;
    use crate::domain::submitter_name::SubmitterName;

    use super::EmailClient;

    struct SendEmailBodyMatcher;

    impl wiremock::Match for SendEmailBodyMatcher {
        fn matches(&self, request: &Request) -> bool {
            let result: Result<serde_json::Value, _> = serde_json::from_slice(&request.body);
            if let Ok(body) = result {
                return body.get("From").is_some()
                    && body.get("To").is_some()
                    && body.get("ReplyTo").is_some()
                    && body.get("Subject").is_some()
                    && body.get("HtmlBody").is_some();
            }
            false
        }
    }

    fn subject() -> String {
        Sentence(1..2).fake()
    }

    fn content() -> String {
        Paragraph(1..10).fake()
    }

    fn submitter_name() -> SubmitterName {
        SubmitterName::parse(Name().fake()).unwrap()
    }

    fn email() -> SubmitterEmail {
        SubmitterEmail::parse(SafeEmail().fake()).unwrap()
    }

    fn email_client(server_uri: String) -> EmailClient {
        let email_settings = EmailClientSettings {
            base_url: server_uri,
            send_timeout_ms: 150,
            sender_email: SafeEmail().fake(),
            authorization: Secret::new(Faker.fake()),
        };
        let sender = SubmitterEmail::parse(email_settings.sender_email.clone()).unwrap();

        EmailClient::new(email_settings, sender)
    }

    fn delivery_receipt(message_id: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "MessageID": message_id }))
    }

    #[tokio::test]
    async fn send_email_times_out_if_the_relay_takes_too_long() {
        let mock_server = MockServer::start().await;

        let email_client = email_client(mock_server.uri());
        let response =
            delivery_receipt("late").set_delay(std::time::Duration::from_secs(180));

        Mock::given(any())
            .respond_with(response)
            .expect(1)
            .mount(&mock_server)
            .await;

        // Act
        let outcome = email_client
            .send_email(&submitter_name(), &email(), &subject(), &content())
            .await;

        // Assert
        assert_err!(outcome);
    }

    #[tokio::test]
    async fn send_email_fails_if_relay_returns_500() {
        let mock_server = MockServer::start().await;

        let email_client = email_client(mock_server.uri());

        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        // Act
        let outcome = email_client
            .send_email(&submitter_name(), &email(), &subject(), &content())
            .await;

        // Assert
        assert_err!(outcome);
    }

    #[tokio::test]
    async fn send_email_sends_the_expected_request_and_returns_the_delivery_id() {
        let mock_server = MockServer::start().await;

        let email_client = email_client(mock_server.uri());

        Mock::given(header_exists("X-Postmark-Server-Token"))
            .and(header("Content-Type", "application/json"))
            .and(path("/email"))
            .and(method("POST"))
            .and(SendEmailBodyMatcher)
            .respond_with(delivery_receipt("receipt-1"))
            .expect(1)
            .mount(&mock_server)
            .await;

        // Act
        let outcome = email_client
            .send_email(&submitter_name(), &email(), &subject(), &content())
            .await;

        // Assert
        assert_ok_eq!(outcome, "receipt-1".to_string());
    }

    #[tokio::test]
    async fn send_email_addresses_the_notification_to_the_configured_inbox() {
        let mock_server = MockServer::start().await;

        let email_client = email_client(mock_server.uri());
        let sender_address = email_client.sender.as_ref().to_string();
        let visitor = email();

        Mock::given(any())
            .respond_with(delivery_receipt("receipt-2"))
            .expect(1)
            .mount(&mock_server)
            .await;

        email_client
            .send_email(&submitter_name(), &visitor, &subject(), &content())
            .await
            .unwrap();

        let request = &mock_server.received_requests().await.unwrap()[0];
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();

        assert_eq!(body["To"], sender_address.as_str());
        assert_eq!(body["ReplyTo"], visitor.as_ref());
        assert!(body["From"]
            .as_str()
            .unwrap()
            .ends_with(&format!("<{}>", sender_address)));
    }
}
