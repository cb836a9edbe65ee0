// Set RIDEFORYOU_API_URL at build time (trunk build) to point at another backend.
#[cfg(debug_assertions)]
const DEFAULT_API_URL: &str = "http://localhost:5000/api"; // Development URL when running locally

#[cfg(not(debug_assertions))]
const DEFAULT_API_URL: &str = "/api"; // Served behind the same origin in production

pub fn api_base_url() -> &'static str {
    match option_env!("RIDEFORYOU_API_URL") {
        Some(url) if !url.is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_API_URL,
    }
}

pub fn api_url(path: &str) -> String {
    format!("{}/{}", api_base_url(), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_with_single_slash() {
        let base = api_base_url();
        assert_eq!(api_url("/bus"), format!("{}/bus", base));
        assert_eq!(api_url("buses"), format!("{}/buses", base));
    }
}
