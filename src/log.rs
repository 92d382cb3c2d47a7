use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Error => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error => "error",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Logger {
    min_level: LogLevel,
}

impl Logger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn event(&self, level: LogLevel, event: &str, fields: serde_json::Value) {
        if !self.enabled(level) {
            return;
        }

        let payload = format_event(now_unix_millis(), level, event, fields);
        write_line(level, &payload.to_string());
    }

    pub fn debug(&self, event: &str, fields: serde_json::Value) {
        self.event(LogLevel::Debug, event, fields);
    }

    pub fn info(&self, event: &str, fields: serde_json::Value) {
        self.event(LogLevel::Info, event, fields);
    }

    pub fn error(&self, event: &str, fields: serde_json::Value) {
        self.event(LogLevel::Error, event, fields);
    }
}

fn format_event(ts: u64, level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert("ts".to_string(), serde_json::Value::from(ts));
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: LogLevel, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Error => web_sys::console::error_1(&value),
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(level: LogLevel, line: &str) {
    match level {
        LogLevel::Error => eprintln!("{line}"),
        LogLevel::Debug | LogLevel::Info => println!("{line}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Error);

        let logger = Logger::new(LogLevel::Info);
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Error));
    }

    #[test]
    fn event_payload_merges_extra_fields() {
        let payload = format_event(
            1_700_000_000_000,
            LogLevel::Error,
            "contact_submit_failed",
            json!({ "reason": "transport" }),
        );

        assert_eq!(payload["ts"], json!(1_700_000_000_000u64));
        assert_eq!(payload["level"], json!("error"));
        assert_eq!(payload["event"], json!("contact_submit_failed"));
        assert_eq!(payload["reason"], json!("transport"));
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let payload = format_event(1, LogLevel::Info, "widgets_mounted", json!("stray"));
        let object = payload.as_object().expect("payload is an object");
        assert_eq!(object.len(), 3);
    }

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(LogLevel::from_str(" Error "), Some(LogLevel::Error));
        assert_eq!(LogLevel::from_str("trace"), None);
    }
}
