use serde::{Deserialize, Serialize};

use crate::errors::{QuicklinkError, Result};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，例如 QL__SERVER__PORT=9000
pub const ENV_PREFIX: &str = "QL";

/// 静态配置（从 TOML 与环境变量加载，启动时使用）
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub shortener: ShortenerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值。
    /// 加载失败时打印错误并使用默认值（此时日志系统尚未初始化）。
    pub fn load(path: Option<&str>) -> Self {
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);
        match Self::load_from(path) {
            Ok(config) => {
                if std::path::Path::new(path).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] {}", e.format_simple());
                Self::default()
            }
        }
    }

    /// Load `path` (optional on disk) and apply `QL__*` environment overrides.
    pub fn load_from(path: &str) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StaticConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document without consulting the environment.
    pub fn from_toml(content: &str) -> Result<Self> {
        use config::{Config, File, FileFormat};

        let config: StaticConfig = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the services cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.shortener.code_length == 0 {
            return Err(QuicklinkError::config("shortener.code_length must be at least 1"));
        }
        if self.shortener.default_validity_minutes == 0 {
            return Err(QuicklinkError::config(
                "shortener.default_validity_minutes must be at least 1",
            ));
        }
        if self.shortener.max_batch_size == 0 {
            return Err(QuicklinkError::config("shortener.max_batch_size must be at least 1"));
        }
        if !crate::utils::is_valid_url(&self.shortener.base_url) {
            return Err(QuicklinkError::config(format!(
                "shortener.base_url is not an absolute URL: {}",
                self.shortener.base_url
            )));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn sample_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| QuicklinkError::config(format!("Failed to render sample config: {}", e)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_storage_backend")]
    pub backend: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortenerConfig {
    /// Origin prepended to every short code
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    #[serde(default = "default_validity_minutes")]
    pub default_validity_minutes: u32,
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub enable_rotation: bool,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
}

// ============================================================
// Default value functions
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    3000
}

fn default_workers() -> usize {
    num_cpus::get().min(32)
}

fn default_storage_backend() -> String {
    "file".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_code_length() -> usize {
    6
}

fn default_validity_minutes() -> u32 {
    30
}

fn default_max_batch_size() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            workers: default_workers(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            data_dir: default_data_dir(),
        }
    }
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            code_length: default_code_length(),
            default_validity_minutes: default_validity_minutes(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            enable_rotation: false,
            max_backups: default_max_backups(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StaticConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.backend, "file");
        assert_eq!(config.storage.data_dir, "data");
        assert_eq!(config.shortener.base_url, "http://localhost:3000");
        assert_eq!(config.shortener.code_length, 6);
        assert_eq!(config.shortener.default_validity_minutes, 30);
        assert_eq!(config.shortener.max_batch_size, 5);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StaticConfig::from_toml(
            r#"
            [shortener]
            base_url = "https://sho.rt"
            default_validity_minutes = 90

            [storage]
            backend = "memory"
            "#,
        )
        .unwrap();

        assert_eq!(config.shortener.base_url, "https://sho.rt");
        assert_eq!(config.shortener.default_validity_minutes, 90);
        assert_eq!(config.shortener.code_length, 6);
        assert_eq!(config.storage.backend, "memory");
        assert_eq!(config.storage.data_dir, "data");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_rejects_zero_batch_size() {
        let err = StaticConfig::from_toml("[shortener]\nmax_batch_size = 0\n").unwrap_err();
        assert_eq!(err.code(), "E004");
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let err = StaticConfig::from_toml("[shortener]\nbase_url = \"localhost\"\n").unwrap_err();
        assert!(err.message().contains("base_url"));
    }

    #[test]
    fn test_sample_toml_parses_back() {
        let sample = StaticConfig::sample_toml().unwrap();
        assert!(sample.contains("[shortener]"));
        let parsed = StaticConfig::from_toml(&sample).unwrap();
        assert_eq!(parsed, StaticConfig::default());
    }
}
