use gloo_net::http::Request;
use log::error;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config;
use crate::models::{BusList, BusStatus, BusSummary};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(gloo_net::Error),
    #[error("backend answered with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(gloo_net::Error),
}

/// Any non-2xx answer counts as a failed request.
fn check_status(ok: bool, status: u16) -> Result<(), ApiError> {
    if ok {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&config::api_url(path))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(ApiError::Network)?;

    check_status(response.ok(), response.status())?;

    response.json::<T>().await.map_err(ApiError::Decode)
}

pub async fn get_bus_info() -> Result<BusStatus, ApiError> {
    get_json::<BusStatus>("/bus")
        .await
        .inspect_err(|e| error!("Error fetching bus info: {}", e))
}

pub async fn get_all_buses() -> Result<Vec<BusSummary>, ApiError> {
    get_json::<BusList>("/buses")
        .await
        .map(|list| list.buses)
        .inspect_err(|e| error!("Error fetching all buses: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Connection;

    #[test]
    fn success_status_passes() {
        assert!(check_status(true, 200).is_ok());
        assert!(check_status(true, 204).is_ok());
    }

    #[test]
    fn error_status_is_rejected() {
        assert!(matches!(check_status(false, 500), Err(ApiError::Status(500))));
        assert!(matches!(check_status(false, 404), Err(ApiError::Status(404))));
    }

    #[test]
    fn error_status_marks_backend_offline() {
        let result = Err::<BusStatus, _>(check_status(false, 503).unwrap_err());
        let connection = Connection::from_probe(result);

        assert_eq!(connection, Connection::Disconnected);
        assert_eq!(connection.label(), "Backend Offline");
        assert!(connection.backend_data().is_none());
    }

    #[test]
    fn undecodable_body_marks_backend_offline() {
        let result = serde_json::from_str::<BusStatus>(r#"{"route":"forty-two"}"#);
        assert!(result.is_err());

        let connection = Connection::from_probe(result);
        assert_eq!(connection, Connection::Disconnected);
        assert!(connection.backend_data().is_none());
    }

    #[test]
    fn status_error_message_names_the_code() {
        assert_eq!(ApiError::Status(502).to_string(), "backend answered with status 502");
    }
}
