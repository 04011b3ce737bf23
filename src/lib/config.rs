//! Build-time configuration for the auth API and the payment provider with an
//! optional runtime override. The runtime config is read from
//! `window.TINYNINZA_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not store
//! secrets here. The paystation access token is a publishable checkout
//! parameter, not a credential.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub checkout_base_url: String,
    pub checkout_access_token: String,
    /// Domain that cross-window payment messages must originate from.
    pub provider_origin: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url =
            option_env!("TINYNINZA_API_BASE_URL").unwrap_or("https://api.happyadda.com/api");
        let checkout_base_url = option_env!("TINYNINZA_CHECKOUT_BASE_URL")
            .unwrap_or("https://sandbox-secure.xsolla.com/paystation2/");
        let checkout_access_token = option_env!("TINYNINZA_CHECKOUT_ACCESS_TOKEN")
            .unwrap_or("gauckJuWleHPThgMwCLCLVOVd9J738AM_lc_en_bg_FFFFFF_tb_3D46F5");
        let provider_origin = option_env!("TINYNINZA_PROVIDER_ORIGIN").unwrap_or("xsolla.com");

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            checkout_base_url: checkout_base_url.to_string(),
            checkout_access_token: checkout_access_token.to_string(),
            provider_origin: provider_origin.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    checkout_base_url: Option<String>,
    checkout_access_token: Option<String>,
    provider_origin: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.checkout_base_url {
        config.checkout_base_url = value;
    }
    if let Some(value) = runtime.checkout_access_token {
        config.checkout_access_token = value;
    }
    if let Some(value) = runtime.provider_origin {
        config.provider_origin = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("TINYNINZA_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        checkout_base_url: read_runtime_value(&object, "checkout_base_url"),
        checkout_access_token: read_runtime_value(&object, "checkout_access_token"),
        provider_origin: read_runtime_value(&object, "provider_origin"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
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
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    fn base_config() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default".to_string(),
            checkout_base_url: "https://checkout.default/".to_string(),
            checkout_access_token: "default-token".to_string(),
            provider_origin: "provider.default".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.tinyninja.com "),
            Some("https://api.tinyninja.com".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            checkout_base_url: normalize_runtime_value("  "),
            checkout_access_token: normalize_runtime_value(""),
            provider_origin: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.checkout_base_url, "https://checkout.default/");
        assert_eq!(config.checkout_access_token, "default-token");
        assert_eq!(config.provider_origin, "provider.default");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            checkout_base_url: normalize_runtime_value("https://checkout.override/"),
            checkout_access_token: normalize_runtime_value("override-token"),
            provider_origin: normalize_runtime_value("provider.override"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.checkout_base_url, "https://checkout.override/");
        assert_eq!(config.checkout_access_token, "override-token");
        assert_eq!(config.provider_origin, "provider.override");
    }
}
