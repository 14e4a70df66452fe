//! Build-time configuration for the exam API with an optional runtime override.
//! The runtime config is read from `window.EXAM_PORTAL_CONFIG` (if present) so
//! static deployments can point at another API host without rebuilding.
//! Configuration values are public; do not store secrets here.

use tracing::Level;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
    /// `None` means requests are never aborted client-side.
    pub request_timeout_ms: Option<u32>,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("EXAM_PORTAL_API_BASE_URL").unwrap_or("");
        let log_level = option_env!("EXAM_PORTAL_LOG_LEVEL").unwrap_or(DEFAULT_LOG_LEVEL);
        let request_timeout_ms =
            option_env!("EXAM_PORTAL_REQUEST_TIMEOUT_MS").and_then(parse_timeout);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            log_level: log_level.to_string(),
            request_timeout_ms,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Maps the configured level name onto a tracing level, falling back to `INFO`.
    pub fn tracing_level(&self) -> Level {
        match self.log_level.trim().to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
    request_timeout_ms: Option<u32>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
    if let Some(value) = runtime.request_timeout_ms {
        config.request_timeout_ms = Some(value);
    }
}

/// Zero and unparsable values disable the timeout.
fn parse_timeout(value: &str) -> Option<u32> {
    normalize_runtime_value(value)?
        .parse::<u32>()
        .ok()
        .filter(|millis| *millis > 0)
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("EXAM_PORTAL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        log_level: read_runtime_value(&object, "log_level"),
        request_timeout_ms: read_runtime_value(&object, "request_timeout_ms")
            .as_deref()
            .and_then(parse_timeout),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    // Numbers are accepted for the timeout key.
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| format!("{number:.0}")))?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value, parse_timeout,
    };
    use tracing::Level;

    fn base_config() -> AppConfig {
        AppConfig {
            api_base_url: "https://exam.default".to_string(),
            log_level: "info".to_string(),
            request_timeout_ms: None,
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://exam.example.org "),
            Some("https://exam.example.org".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            log_level: normalize_runtime_value("  "),
            request_timeout_ms: parse_timeout(" "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, base_config());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://exam.override"),
            log_level: normalize_runtime_value("debug"),
            request_timeout_ms: parse_timeout("15000"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://exam.override");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.request_timeout_ms, Some(15_000));
    }

    #[test]
    fn zero_or_garbage_timeout_disables_it() {
        assert_eq!(parse_timeout("0"), None);
        assert_eq!(parse_timeout("soon"), None);
        assert_eq!(parse_timeout("-5"), None);
        assert_eq!(parse_timeout(" 250 "), Some(250));
    }

    #[test]
    fn tracing_level_falls_back_to_info() {
        let mut config = base_config();
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.tracing_level(), Level::DEBUG);

        config.log_level = "verbose".to_string();
        assert_eq!(config.tracing_level(), Level::INFO);
    }

    #[test]
    fn load_without_runtime_config_has_no_timeout_by_default() {
        let config = AppConfig::load();
        if option_env!("EXAM_PORTAL_REQUEST_TIMEOUT_MS").is_none() {
            assert_eq!(config.request_timeout_ms, None);
        }
    }
}
