use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config::{self, RelayConfig};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("could not build relay request: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("relay answered {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactFields,
}

fn payload<'a>(config: &'a RelayConfig, fields: &'a ContactFields) -> SendRequest<'a> {
    SendRequest {
        service_id: config.service_id,
        template_id: config.template_id,
        user_id: config.public_key,
        template_params: fields,
    }
}

/// Forwards the form to the email relay. Any non-2xx answer is a failure.
pub async fn send_form(config: &RelayConfig, fields: &ContactFields) -> Result<(), RelayError> {
    let request = Request::post(config::relay_endpoint())
        .json(&payload(config, fields))
        .map_err(|e| RelayError::Build(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| RelayError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(RelayError::Status { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_nests_fields_under_template_params() {
        let fields = ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };
        let value = serde_json::to_value(payload(&RelayConfig::default(), &fields)).unwrap();
        assert_eq!(value["service_id"], "service_5vlo606");
        assert_eq!(value["template_id"], "template_ejrvnbf");
        assert_eq!(value["template_params"]["email"], "ada@example.com");
        assert_eq!(value["template_params"]["message"], "Hello");
    }

    #[test]
    fn status_error_reads_well_in_logs() {
        let err = RelayError::Status { status: 400, body: "The user ID is invalid".to_string() };
        assert_eq!(err.to_string(), "relay answered 400: The user ID is invalid");
    }
}
