use crate::error::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        if host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        let port = match port {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn explicit_values_win() {
        let config =
            Config::from_vars(Some("127.0.0.1".to_string()), Some("3000".to_string())).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_vars(None, Some("eighty".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
        assert!(err.to_string().contains("eighty"));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let err = Config::from_vars(None, Some("70000".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn blank_host_is_rejected() {
        let err = Config::from_vars(Some("  ".to_string()), None).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyHost));
    }
}
