use std::fmt::Display;

use log::{error, info};

use crate::models::BusStatus;

/// Outcome of the one-off backend probe made when the page mounts.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Connection {
    #[default]
    Pending,
    Connected(BusStatus),
    Disconnected,
}

impl Connection {
    pub fn from_probe<E: Display>(result: Result<BusStatus, E>) -> Self {
        match result {
            Ok(status) => {
                info!("Backend connected: {:?}", status);
                Connection::Connected(status)
            }
            Err(e) => {
                error!("Backend connection failed: {}", e);
                Connection::Disconnected
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Connection::Connected(_))
    }

    /// Data for the "Live from Backend" block, only present once connected.
    pub fn backend_data(&self) -> Option<&BusStatus> {
        match self {
            Connection::Connected(status) => Some(status),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.is_connected() {
            "Backend Connected"
        } else {
            "Backend Offline"
        }
    }

    pub fn pill_class(&self) -> &'static str {
        if self.is_connected() {
            "status-pill online"
        } else {
            "status-pill offline"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_status() -> BusStatus {
        BusStatus {
            route: 42,
            eta: "4 mins".to_string(),
            next_stop: "Downtown Station".to_string(),
            current_location: None,
        }
    }

    #[test]
    fn resolved_probe_is_connected_with_data() {
        let connection = Connection::from_probe::<String>(Ok(sample_status()));

        assert!(connection.is_connected());
        assert_eq!(connection.label(), "Backend Connected");
        assert_eq!(connection.pill_class(), "status-pill online");

        let data = connection.backend_data().unwrap();
        assert!(data.route_line().contains("42"));
        assert!(data.route_line().contains("4 mins"));
        assert!(data.next_stop_line().contains("Downtown Station"));
    }

    #[test]
    fn rejected_probe_is_offline_without_data() {
        let connection = Connection::from_probe(Err("connection refused"));

        assert!(!connection.is_connected());
        assert_eq!(connection.label(), "Backend Offline");
        assert_eq!(connection.pill_class(), "status-pill offline");
        assert!(connection.backend_data().is_none());
    }

    #[test]
    fn pending_reads_as_offline() {
        let connection = Connection::default();
        assert_eq!(connection, Connection::Pending);
        assert_eq!(connection.label(), "Backend Offline");
        assert!(connection.backend_data().is_none());
    }
}
