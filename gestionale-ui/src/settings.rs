//! Settings
//!
//! Loads the client configuration from local storage, falling back to
//! defaults for anything missing or unreadable.

use gestionale_fibra::Config;

/// TOML configuration document
pub const CONFIG_KEY: &str = "fibra_config";

/// Override for `api.base`
pub const API_BASE_KEY: &str = "fibra_api_base";

fn stored(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
}

/// Load the configuration
pub fn load() -> Config {
    let config = match stored(CONFIG_KEY) {
        Some(document) => Config::from_toml_str(&document).unwrap_or_else(|e| {
            // Logging is not up yet
            web_sys::console::warn_1(&format!("{}; using defaults", e).into());
            Config::default()
        }),
        None => Config::default(),
    };

    match stored(API_BASE_KEY) {
        Some(base) => config.with_api_base(&base),
        None => config,
    }
}

/// Persist an API base override
pub fn set_api_base(base: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_KEY, base);
        }
    }
}

/// Map the configured level name onto a `log` level
pub fn log_level(config: &Config) -> log::Level {
    match config.logging.level.to_ascii_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn storage() -> web_sys::Storage {
        web_sys::window().unwrap().local_storage().unwrap().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_stored_config_and_override() {
        let storage = storage();
        storage
            .set_item(CONFIG_KEY, "[dashboard]\nrecent_works_size = 5\n[logging]\nlevel = \"debug\"")
            .unwrap();
        set_api_base("https://fibra.example.it/api/");

        let config = load();
        assert_eq!(config.recent_works_endpoint(), "/works?size=5");
        assert_eq!(config.api.base, "https://fibra.example.it/api");
        assert_eq!(log_level(&config), log::Level::Debug);

        storage.remove_item(CONFIG_KEY).unwrap();
        storage.remove_item(API_BASE_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_unreadable_config_falls_back() {
        let storage = storage();
        storage.set_item(CONFIG_KEY, "not = [valid").unwrap();

        assert_eq!(load(), Config::default());

        storage.remove_item(CONFIG_KEY).unwrap();
    }
}
