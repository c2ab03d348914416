use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub static_config: StaticConfig,
    pub templates: TemplatesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    pub enabled: bool,
    pub web_root: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    pub dir: String,
}

impl Config {
    /// Load configuration with environment variable override support
    ///
    /// Loading order:
    /// 1. Load from the explicit path, or probe the default locations
    /// 2. Override with environment variables (prefixed with APP_)
    /// 3. Validate the final configuration
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file just means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, anyhow::Error> {
        let mut config = match path {
            Some(path) => Self::from_toml(path)?,
            None => {
                if let Some(config_path) = Self::find_config_file() {
                    Self::from_toml(&config_path)?
                } else {
                    tracing::warn!("Configuration file not found, using defaults");
                    Config::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - APP_SERVER_HOST: Server host (default: 0.0.0.0)
    /// - APP_SERVER_PORT: Server port (default: 3000)
    /// - APP_LOG_LEVEL: Logging level (e.g., "info,clinic_site=debug")
    /// - APP_WEB_ROOT: Directory served under /static
    /// - APP_TEMPLATES_DIR: Directory holding Tera templates
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("APP_SERVER_HOST") {
            self.server.host = host;
            tracing::info!("Override server.host from env: {}", self.server.host);
        }

        if let Ok(port) = std::env::var("APP_SERVER_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
                tracing::info!("Override server.port from env: {}", self.server.port);
            }
        }

        if let Ok(level) = std::env::var("APP_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }

        if let Ok(web_root) = std::env::var("APP_WEB_ROOT") {
            self.static_config.web_root = web_root;
            tracing::info!("Override static.web_root from env: {}", self.static_config.web_root);
        }

        if let Ok(dir) = std::env::var("APP_TEMPLATES_DIR") {
            self.templates.dir = dir;
            tracing::info!("Override templates.dir from env: {}", self.templates.dir);
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        if self.templates.dir.is_empty() {
            anyhow::bail!("Template directory cannot be empty");
        }

        if self.static_config.enabled && self.static_config.web_root.is_empty() {
            anyhow::bail!("static.web_root cannot be empty when static serving is enabled");
        }

        Ok(())
    }

    fn find_config_file() -> Option<PathBuf> {
        let possible_paths =
            ["conf/config.toml", "config.toml", "./conf/config.toml", "./config.toml"];

        possible_paths.iter().map(Path::new).find(|p| p.exists()).map(Path::to_path_buf)
    }

    fn from_toml(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config file {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 3000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info,clinic_site=debug".to_string(), file: None }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self { enabled: true, web_root: "static".to_string() }
    }
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self { dir: "templates".to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_explicit_path() {
        let dir = std::env::temp_dir().join("clinic-site-config-test");
        fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("custom.toml");
        fs::write(&path, "[server]\nhost = \"127.0.0.1\"\nport = 8080\n").expect("write config");

        let config = Config::load(Some(&path)).expect("load config");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        // Sections absent from the file keep their defaults
        assert_eq!(config.templates.dir, "templates");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = Config::load(Some(Path::new("/no/such/dir/config.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }
}
