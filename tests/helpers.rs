use std::net::TcpListener;

use once_cell::sync::Lazy;
use wiremock::{MockServer, ResponseTemplate};

use contact_relay::config::get_configuration;
use contact_relay::mail::send_email::EmailClient;
use contact_relay::telemetry::{get_subscriber, init_subscriber};

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            "test".into(),
            "debug".into(),
            std::io::stdout,
        ));
    } else {
        init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::sink));
    }
});

pub struct TestApp {
    pub addr: String,
    pub email_server: MockServer,
}

impl TestApp {
    pub fn contact_endpoint(&self) -> String {
        format!("{}/api/send-email", self.addr)
    }

    pub async fn post_contact(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(self.contact_endpoint())
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Relay success response carrying a delivery identifier.
pub fn delivery_receipt(message_id: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "MessageID": message_id }))
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let mut configuration = get_configuration().expect("should load configuration");
    configuration.email_client.base_url = email_server.uri();
    // Short deadline so the hung-relay test finishes quickly.
    configuration.email_client.send_timeout_ms = 500;

    let listener = TcpListener::bind(format!("{}:0", configuration.app.host.clone()))
        .expect("failed to bind to random port");
    let port = listener.local_addr().unwrap().port();

    let sender = configuration
        .email_client
        .sender()
        .expect("invalid outbound sender address");
    let email_client = EmailClient::new(configuration.email_client.clone(), sender);

    let server =
        contact_relay::run::run(listener, email_client).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    let hostname = configuration.app.host.clone();
    TestApp {
        addr: format!("http://{}:{}", hostname, port),
        email_server,
    }
}
