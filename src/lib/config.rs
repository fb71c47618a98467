//! Console configuration: API base URL and log level.
//!
//! Values come from three layers, highest priority first:
//! 1. `window.USER_ADMIN_CONFIG` set by the hosting page (runtime),
//! 2. `USER_ADMIN_API_BASE_URL` / `USER_ADMIN_LOG_LEVEL` at compile time,
//! 3. built-in defaults.
//!
//! Blank values never win. Everything here ends up in the public bundle, so
//! secrets do not belong in any layer.

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
}

/// One configuration source; `None` defers to the next layer.
#[derive(Clone, Debug, Default)]
struct Layer {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

impl Layer {
    fn compile_time() -> Self {
        Self {
            api_base_url: option_env!("USER_ADMIN_API_BASE_URL").and_then(non_blank),
            log_level: option_env!("USER_ADMIN_LOG_LEVEL").and_then(non_blank),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn runtime() -> Self {
        use js_sys::Reflect;
        use wasm_bindgen::JsValue;

        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let object = match Reflect::get(&window, &JsValue::from_str("USER_ADMIN_CONFIG")) {
            Ok(value) if value.is_object() => value,
            _ => return Self::default(),
        };
        let read = |key: &str| {
            Reflect::get(&object, &JsValue::from_str(key))
                .ok()
                .and_then(|value| value.as_string())
                .and_then(|value| non_blank(&value))
        };

        Self {
            api_base_url: read("api_base_url"),
            log_level: read("log_level"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn runtime() -> Self {
        Self::default()
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::resolve(&[Layer::runtime(), Layer::compile_time()])
    }

    /// Takes each field from the first layer that sets it.
    fn resolve(layers: &[Layer]) -> Self {
        Self {
            api_base_url: layers
                .iter()
                .find_map(|layer| layer.api_base_url.clone())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            log_level: layers
                .iter()
                .find_map(|layer| layer.log_level.clone())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
