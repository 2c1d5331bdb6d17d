use validator::{Validate, ValidationErrors};

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5001";
const DEFAULT_STORE_PATH: &str = "blog-frontend.json";

/// Process settings, read from the environment (and `.env`).
#[derive(Debug, Clone, Validate)]
pub struct Settings {
    /// <address>:<port> to serve the UI on
    #[validate(length(min = 1, message = "LISTEN_ADDR must not be empty"))]
    pub listen_addr: String,

    /// File the API base URL is persisted to
    #[validate(length(min = 1, message = "STORE_PATH must not be empty"))]
    pub store_path: String,

    /// Seeds the store on first start, when nothing has been saved yet
    pub default_api_base_url: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ValidationErrors> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationErrors> {
        let settings = Self {
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into()),
            store_path: lookup("STORE_PATH").unwrap_or_else(|| DEFAULT_STORE_PATH.into()),
            default_api_base_url: lookup("DEFAULT_API_BASE_URL").filter(|url| !url.is_empty()),
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(settings.store_path, DEFAULT_STORE_PATH);
        assert_eq!(settings.default_api_base_url, None);
    }

    #[test]
    fn env_values_override_defaults() {
        let settings = Settings::from_lookup(lookup(&[
            ("LISTEN_ADDR", "0.0.0.0:8080"),
            ("STORE_PATH", "/tmp/store.json"),
            ("DEFAULT_API_BASE_URL", "http://localhost:5002/api"),
        ]))
        .unwrap();
        assert_eq!(settings.listen_addr, "0.0.0.0:8080");
        assert_eq!(settings.store_path, "/tmp/store.json");
        assert_eq!(
            settings.default_api_base_url.as_deref(),
            Some("http://localhost:5002/api")
        );
    }

    #[test]
    fn empty_store_path_is_rejected() {
        let err = Settings::from_lookup(lookup(&[("STORE_PATH", "")])).unwrap_err();
        assert!(err.field_errors().contains_key("store_path"));
    }
}
