use axum::response::Json as AxumJson;
use tracing::debug;

use crate::models::bus_models::{BusList, BusStatus, BusSummary, Coordinates, WelcomeMessage};

pub async fn welcome() -> AxumJson<WelcomeMessage> {
    AxumJson(WelcomeMessage {
        message: "RideForYou API is running".to_string(),
    })
}

// GET /api/bus
pub async fn get_bus() -> AxumJson<BusStatus> {
    debug!("Serving bus status for route 42");
    AxumJson(BusStatus {
        eta: "4 mins".to_string(),
        route: 42,
        next_stop: "Downtown Station".to_string(),
        current_location: Some(Coordinates {
            lat: 40.7128,
            lng: -74.0060,
        }),
    })
}

// GET /api/buses
pub async fn get_buses() -> AxumJson<BusList> {
    let buses = [
        (1, 42, "4 mins", "Downtown"),
        (2, 15, "7 mins", "Airport"),
        (3, 8, "12 mins", "Central Park"),
    ]
    .into_iter()
    .map(|(id, route, eta, destination)| BusSummary {
        id,
        route,
        eta: eta.to_string(),
        destination: destination.to_string(),
    })
    .collect();

    AxumJson(BusList { buses })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{build_app, AppState};

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = build_app(Arc::new(AppState { db_pool: None }));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn root_returns_welcome_message() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "RideForYou API is running" }));
    }

    #[tokio::test]
    async fn bus_status_is_route_42_with_eta() {
        let (status, body) = get_json("/api/bus").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["route"], 42);
        assert!(!body["eta"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn bus_status_matches_literal_payload() {
        let (_, body) = get_json("/api/bus").await;
        assert_eq!(body["eta"], "4 mins");
        assert_eq!(body["nextStop"], "Downtown Station");
        assert_eq!(body["currentLocation"]["lat"].as_f64(), Some(40.7128));
        assert_eq!(body["currentLocation"]["lng"].as_f64(), Some(-74.0060));
    }

    #[tokio::test]
    async fn bus_status_is_identical_across_requests() {
        let (_, first) = get_json("/api/bus").await;
        let (_, second) = get_json("/api/bus").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn bus_list_has_three_distinct_buses() {
        let (status, body) = get_json("/api/buses").await;
        assert_eq!(status, StatusCode::OK);

        let buses = body["buses"].as_array().unwrap();
        assert_eq!(buses.len(), 3);

        let ids: HashSet<u64> = buses.iter().map(|b| b["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, HashSet::from([1, 2, 3]));
    }

    #[tokio::test]
    async fn bus_list_matches_literal_routes_and_destinations() {
        let (_, body) = get_json("/api/buses").await;
        assert_eq!(
            body,
            json!({
                "buses": [
                    { "id": 1, "route": 42, "eta": "4 mins", "destination": "Downtown" },
                    { "id": 2, "route": 15, "eta": "7 mins", "destination": "Airport" },
                    { "id": 3, "route": 8, "eta": "12 mins", "destination": "Central Park" },
                ]
            })
        );
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let (status, body) = get_json("/api/trains").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found: /api/trains");
    }
}
