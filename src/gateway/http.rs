//! HttpGateway - posts SQL commands to the store's REST endpoint.

use std::time::Duration;

use reqwest::blocking::Client;

use super::{sql, Criteria, Gateway, GatewayConfig, GatewayError, PropertyMap};
use crate::response::Envelope;

/// Blocking REST gateway. Status and body are handed back untouched.
pub struct HttpGateway {
    config: GatewayConfig,
    http: Client,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        Ok(Self { config, http })
    }

    pub fn from_env() -> Result<Self, GatewayError> {
        Self::new(GatewayConfig::from_env())
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn command(&self, command: String) -> Result<Envelope, GatewayError> {
        tracing::debug!(database = %self.config.database, %command, "sending command");

        let response = self
            .http
            .post(self.config.command_url())
            .basic_auth(&self.config.username, Some(&self.config.password))
            .body(command)
            .send()?;

        let status = response.status().as_u16().to_string();
        let body = response.text()?;
        tracing::trace!(%status, bytes = body.len(), "command answered");
        Ok(Envelope::new(status, body))
    }
}

impl Gateway for HttpGateway {
    fn get_all(&self, class_name: &str) -> Result<Envelope, GatewayError> {
        self.command(sql::select_all(class_name))
    }

    fn filter(&self, class_name: &str, criteria: &Criteria) -> Result<Envelope, GatewayError> {
        self.command(sql::select_where(class_name, criteria))
    }

    fn add_to_class(
        &self,
        class_name: &str,
        properties: &PropertyMap,
    ) -> Result<Envelope, GatewayError> {
        self.command(sql::create_vertex(class_name, properties))
    }

    fn add_edge(
        &self,
        class_name: &str,
        from_id: &str,
        to_id: &str,
        properties: &PropertyMap,
    ) -> Result<Envelope, GatewayError> {
        self.command(sql::create_edge(class_name, from_id, to_id, properties)?)
    }
}
