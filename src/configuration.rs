use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::ticket_client::TicketClient;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub ticket_client: TicketClientSettings,
    pub cors: CorsSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{host}:{port}", host = self.host, port = self.port)
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct TicketClientSettings {
    pub base_url: String,
    pub api_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl TicketClientSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    /// The ticketing API rejects anonymous calls, so a blank token is a startup error.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.api_token.expose_secret().trim().is_empty() {
            return Err(config::ConfigError::Message(
                "The ticketing API token must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn client(self) -> Result<TicketClient, reqwest::Error> {
        let timeout = self.timeout();
        TicketClient::new(self.base_url, self.api_token, timeout)
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct CorsSettings {
    /// Comma separated list of origins, `*` allows any origin.
    pub allowed_origins: String,
}

impl CorsSettings {
    pub fn allowed_origins(&self) -> Vec<&str> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect()
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins().contains(&"*")
    }
}

#[derive(Debug)]
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

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut settings = config::Config::default();
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    // Shared defaults
    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    // e.g. `APP_TICKET_CLIENT__API_TOKEN=...` sets `Settings.ticket_client.api_token`
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    let settings: Settings = settings.try_into()?;
    settings.ticket_client.validate()?;
    Ok(settings)
}
