use std::sync::{Arc, OnceLock};

use super::StaticConfig;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to defaults when `init_config` was never called, so library
/// users and tests can skip initialisation.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| Arc::new(StaticConfig::default()))
        .clone()
}

/// Initialize the global configuration
///
/// Loads `path` (or `config.toml` in the current directory) plus `QL__*`
/// environment overrides. Later calls keep the first configuration.
///
/// # Examples
/// ```no_run
/// use quicklink::config::init_config;
/// init_config(None);
/// ```
pub fn init_config(path: Option<&str>) -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| Arc::new(StaticConfig::load(path)))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_is_shared() {
        let a = get_config();
        let b = init_config(Some("does-not-exist.toml"));
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.shortener.max_batch_size >= 1);
    }
}
