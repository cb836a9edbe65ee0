use serde::Deserialize;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

// The minimal backend only sends `eta` and `route`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusStatus {
    pub route: u32,
    pub eta: String,
    #[serde(default)]
    pub next_stop: String,
    #[serde(default)]
    pub current_location: Option<Coordinates>,
}

impl BusStatus {
    pub fn route_line(&self) -> String {
        format!("Route {} • ETA: {}", self.route, self.eta)
    }

    pub fn next_stop_line(&self) -> String {
        format!("Next: {}", self.next_stop)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BusSummary {
    pub id: u32,
    pub route: u32,
    pub eta: String,
    pub destination: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BusList {
    pub buses: Vec<BusSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_bus_payload() {
        let status: BusStatus = serde_json::from_str(
            r#"{"eta":"4 mins","route":42,"nextStop":"Downtown Station","currentLocation":{"lat":40.7128,"lng":-74.006}}"#,
        )
        .unwrap();
        assert_eq!(status.route, 42);
        assert_eq!(status.next_stop, "Downtown Station");
        assert_eq!(
            status.current_location,
            Some(Coordinates { lat: 40.7128, lng: -74.006 })
        );
    }

    #[test]
    fn decodes_minimal_bus_payload() {
        let status: BusStatus = serde_json::from_str(r#"{"eta":"4 mins","route":42}"#).unwrap();
        assert_eq!(status.eta, "4 mins");
        assert!(status.next_stop.is_empty());
        assert!(status.current_location.is_none());
    }

    #[test]
    fn display_lines_are_verbatim() {
        let status = BusStatus {
            route: 42,
            eta: "4 mins".to_string(),
            next_stop: "Downtown Station".to_string(),
            current_location: None,
        };
        assert_eq!(status.route_line(), "Route 42 • ETA: 4 mins");
        assert_eq!(status.next_stop_line(), "Next: Downtown Station");
    }
}
