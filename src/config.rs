use secrecy::Secret;
use serde_aux::prelude::deserialize_number_from_string;

use crate::domain::submitter_email::SubmitterEmail;

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other,
            )),
        }
    }
}

/// Settings for the outbound mail relay.
///
/// The relay account identifier (`sender_email`) doubles as the notification
/// inbox: contact messages are sent from and to the portfolio owner's own
/// address, with the submitter reachable through the reply-to header.
#[derive(Clone, serde::Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub authorization: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub send_timeout_ms: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<SubmitterEmail, String> {
        SubmitterEmail::parse(self.sender_email.clone())
    }
}

#[derive(Clone, serde::Deserialize)]
pub struct AppConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Clone, serde::Deserialize)]
pub struct Configuration {
    pub app: AppConfig,
    pub email_client: EmailClientSettings,
}

pub fn get_configuration() -> Result<Configuration, config::ConfigError> {
    // initialize our configuration reader
    let mut settings = config::Config::default();

    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Read in default configuration
    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT");

    // Read in layer environment specific file.
    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    // `APP_EMAIL_CLIENT__AUTHORIZATION` injects the relay credential without
    // putting it in a checked-in file.
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    // try converting settings into `Configuration` object.
    return settings.try_into();
}
