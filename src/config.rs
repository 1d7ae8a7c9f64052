use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // HTTP
    pub bind_address: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Only applies when the variables are unset, as in CI
        if std::env::var("PORT").is_err() && std::env::var("BIND_ADDRESS").is_err() {
            let config = Config::from_env().expect("Should succeed");
            assert_eq!(config.bind_address, "0.0.0.0");
            assert_eq!(config.port, 8080);
        }
    }
}
