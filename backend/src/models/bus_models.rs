use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Live status of the single showcased bus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusStatus {
    pub eta: String,
    pub route: u32,
    pub next_stop: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<Coordinates>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusSummary {
    pub id: u32,
    pub route: u32,
    pub eta: String,
    pub destination: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BusList {
    pub buses: Vec<BusSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeMessage {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}
