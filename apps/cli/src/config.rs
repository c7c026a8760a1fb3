use std::time::Duration;

use condodash_reports::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_RANGE_MONTHS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use condodash_reports::ReportsConfig;

/// Reads `.env` and the process environment. Unset or unusable values fall
/// back to the library defaults.
pub fn from_env() -> ReportsConfig {
    dotenvy::dotenv().ok();
    from_lookup(|key| std::env::var(key).ok())
}

fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ReportsConfig {
    let api_base_url = lookup("CONDODASH_API_URL")
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let timeout_ms: u64 = lookup("CONDODASH_TIMEOUT_MS")
        .and_then(|s| s.trim().parse().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS * 1000);
    let default_range_months: u32 = lookup("CONDODASH_DEFAULT_RANGE_MONTHS")
        .and_then(|s| s.trim().parse().ok())
        .filter(|months| *months > 0)
        .unwrap_or(DEFAULT_RANGE_MONTHS);
    ReportsConfig {
        api_base_url,
        request_timeout: Duration::from_millis(timeout_ms),
        default_range_months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ReportsConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]), ReportsConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CONDODASH_API_URL", "https://api.example.com/"),
            ("CONDODASH_TIMEOUT_MS", "2500"),
            ("CONDODASH_DEFAULT_RANGE_MONTHS", "12"),
        ]);
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.request_timeout, Duration::from_millis(2500));
        assert_eq!(config.default_range_months, 12);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_from(&[
            ("CONDODASH_TIMEOUT_MS", "soon"),
            ("CONDODASH_DEFAULT_RANGE_MONTHS", "0"),
        ]);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.default_range_months, 6);
    }
}
