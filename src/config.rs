//! Backend origins baked in at build time.
//!
//! `PULSE_API_BASE` and `PULSE_REALTIME_ORIGIN` are read with `option_env!`
//! when the WASM bundle is compiled; unset or blank values fall back to the
//! local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
pub const DEFAULT_REALTIME_ORIGIN: &str = "http://localhost:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub realtime_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PULSE_API_BASE"), option_env!("PULSE_REALTIME_ORIGIN"))
    }

    fn from_values(api_base: Option<&str>, realtime_origin: Option<&str>) -> Self {
        Self {
            api_base: origin_or(api_base, DEFAULT_API_BASE),
            realtime_origin: origin_or(realtime_origin, DEFAULT_REALTIME_ORIGIN),
        }
    }

    /// WebSocket URL of the chat channel, or `None` if the origin is not http(s)/ws(s).
    pub fn socket_url(&self) -> Option<String> {
        api::realtime::socket_endpoint(&self.realtime_origin)
    }
}

fn origin_or(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_owned()
}
