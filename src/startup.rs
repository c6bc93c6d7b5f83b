use std::net::TcpListener;

use actix_web::dev::Server;

use crate::config::Configuration;
use crate::mail::send_email::EmailClient;
use crate::run::run;

pub struct AppServer {
    port: u16,
    address: String,
    server: Server,
}

impl AppServer {
    pub async fn build(configuration: Configuration) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.app.host, configuration.app.port
        ))?;

        tracing::info!(
            "Starting service on address: {}",
            listener.local_addr().unwrap()
        );

        let sender = configuration
            .email_client
            .sender()
            .expect("invalid outbound sender address.");
        let email_client = EmailClient::new(configuration.email_client.clone(), sender);

        let address = configuration.app.host.clone();
        let port = listener.local_addr().unwrap().port();
        let server = run(listener, email_client)?;

        Ok(Self {
            port,
            address,
            server,
        })
    }

    pub fn to_server_address(&self) -> String {
        format!("{}:{}", self.address.clone(), self.port.clone())
    }

    pub fn address(&self) -> String {
        self.address.clone()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
