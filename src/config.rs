use crate::log::LogLevel;

const DEFAULT_CONTACT_ENDPOINT: &str = "/contact";
const DEFAULT_HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;
const DEFAULT_FILTER_FADE_MS: u32 = 400;
const DEFAULT_FILTER_SETTLE_MS: u32 = 20;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_STATS_THRESHOLD: f64 = 0.5;
const DEFAULT_COUNTER_STEPS: u32 = 100;
const DEFAULT_CAROUSEL_INTERVAL_MS: u32 = 5_000;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const HEADER_SCROLL_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const FILTER_FADE_MS_BOUNDS: (u32, u32) = (0, 10_000);
const FILTER_SETTLE_MS_BOUNDS: (u32, u32) = (0, 1_000);
const VISIBILITY_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const COUNTER_STEPS_BOUNDS: (u32, u32) = (1, 10_000);
const CAROUSEL_INTERVAL_MS_BOUNDS: (u32, u32) = (500, 600_000);

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub contact_endpoint: String,
    pub header_scroll_threshold_px: f64,
    pub filter_fade_ms: u32,
    pub filter_settle_ms: u32,
    pub reveal_threshold: f64,
    pub stats_threshold: f64,
    pub counter_steps: u32,
    pub carousel_interval_ms: u32,
    pub log_level: LogLevel,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
            header_scroll_threshold_px: DEFAULT_HEADER_SCROLL_THRESHOLD_PX,
            filter_fade_ms: DEFAULT_FILTER_FADE_MS,
            filter_settle_ms: DEFAULT_FILTER_SETTLE_MS,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            stats_threshold: DEFAULT_STATS_THRESHOLD,
            counter_steps: DEFAULT_COUNTER_STEPS,
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl WidgetConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let contact_endpoint = parse_same_origin_path(&lookup, "data-contact-endpoint")
            .unwrap_or_else(|| DEFAULT_CONTACT_ENDPOINT.to_string());
        let header_scroll_threshold_px = parse_f64_with_bounds(
            &lookup,
            "data-header-threshold",
            DEFAULT_HEADER_SCROLL_THRESHOLD_PX,
            HEADER_SCROLL_THRESHOLD_PX_BOUNDS,
        );
        let filter_fade_ms = parse_u32_with_bounds(
            &lookup,
            "data-filter-fade-ms",
            DEFAULT_FILTER_FADE_MS,
            FILTER_FADE_MS_BOUNDS,
        );
        let filter_settle_ms = parse_u32_with_bounds(
            &lookup,
            "data-filter-settle-ms",
            DEFAULT_FILTER_SETTLE_MS,
            FILTER_SETTLE_MS_BOUNDS,
        );
        let reveal_threshold = parse_f64_with_bounds(
            &lookup,
            "data-reveal-threshold",
            DEFAULT_REVEAL_THRESHOLD,
            VISIBILITY_THRESHOLD_BOUNDS,
        );
        let stats_threshold = parse_f64_with_bounds(
            &lookup,
            "data-stats-threshold",
            DEFAULT_STATS_THRESHOLD,
            VISIBILITY_THRESHOLD_BOUNDS,
        );
        let counter_steps = parse_u32_with_bounds(
            &lookup,
            "data-counter-steps",
            DEFAULT_COUNTER_STEPS,
            COUNTER_STEPS_BOUNDS,
        );
        let carousel_interval_ms = parse_u32_with_bounds(
            &lookup,
            "data-carousel-interval-ms",
            DEFAULT_CAROUSEL_INTERVAL_MS,
            CAROUSEL_INTERVAL_MS_BOUNDS,
        );
        let log_level = parse_non_empty_string(&lookup, "data-log-level")
            .and_then(|value| LogLevel::from_str(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            contact_endpoint,
            header_scroll_threshold_px,
            filter_fade_ms,
            filter_settle_ms,
            reveal_threshold,
            stats_threshold,
            counter_steps,
            carousel_interval_ms,
            log_level,
        }
    }
}

fn parse_non_empty_string(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u32_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u32,
    bounds: (u32, u32),
) -> u32 {
    parse_non_empty_string(lookup, name)
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_f64_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: f64,
    bounds: (f64, f64),
) -> f64 {
    parse_non_empty_string(lookup, name)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_same_origin_path(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    parse_non_empty_string(lookup, name)
        .filter(|value| value.starts_with('/') && !value.starts_with("//"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn empty_lookup_yields_defaults() {
        let config = WidgetConfig::from_lookup(|_| None);
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.contact_endpoint, "/contact");
        assert_eq!(config.carousel_interval_ms, 5_000);
        assert_eq!(config.counter_steps, 100);
    }

    #[test]
    fn in_bounds_values_override_defaults() {
        let config = WidgetConfig::from_lookup(lookup_from(&[
            ("data-carousel-interval-ms", " 8000 "),
            ("data-header-threshold", "120"),
            ("data-reveal-threshold", "0.25"),
            ("data-log-level", "DEBUG"),
            ("data-contact-endpoint", "/api/contact"),
        ]));

        assert_eq!(config.carousel_interval_ms, 8_000);
        assert_eq!(config.header_scroll_threshold_px, 120.0);
        assert_eq!(config.reveal_threshold, 0.25);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.contact_endpoint, "/api/contact");
    }

    #[test]
    fn out_of_bounds_and_garbage_fall_back() {
        let config = WidgetConfig::from_lookup(lookup_from(&[
            ("data-carousel-interval-ms", "10"),
            ("data-counter-steps", "0"),
            ("data-stats-threshold", "1.5"),
            ("data-filter-fade-ms", "soon"),
            ("data-reveal-threshold", "NaN"),
            ("data-log-level", "verbose"),
        ]));

        assert_eq!(config.carousel_interval_ms, DEFAULT_CAROUSEL_INTERVAL_MS);
        assert_eq!(config.counter_steps, DEFAULT_COUNTER_STEPS);
        assert_eq!(config.stats_threshold, DEFAULT_STATS_THRESHOLD);
        assert_eq!(config.filter_fade_ms, DEFAULT_FILTER_FADE_MS);
        assert_eq!(config.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn cross_origin_endpoint_is_rejected() {
        for endpoint in ["https://evil.example/contact", "//evil.example/contact", "contact"] {
            let config = WidgetConfig::from_lookup(lookup_from(&[("data-contact-endpoint", endpoint)]));
            assert_eq!(config.contact_endpoint, DEFAULT_CONTACT_ENDPOINT);
        }
    }
}
