use std::env;

/// Runtime settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    pub templates_glob: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "app.db".to_string(),
            address: "127.0.0.1".to_string(),
            port: 8080,
            templates_glob: "templates/**/*".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load settings from `DATABASE_URL`, `ADDRESS`, `PORT` and `TEMPLATES_DIR`,
    /// falling back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                log::warn!("Invalid PORT value `{raw}`, using {}", defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            address: lookup("ADDRESS").unwrap_or(defaults.address),
            port,
            templates_glob: lookup("TEMPLATES_DIR").unwrap_or(defaults.templates_glob),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        assert_eq!(ServerConfig::from_lookup(lookup_from(&[])), ServerConfig::default());
    }

    #[test]
    fn reads_overrides_and_ignores_bad_port() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "catalog.db"),
            ("ADDRESS", "0.0.0.0"),
            ("PORT", "not-a-port"),
        ]));

        assert_eq!(config.database_url, "catalog.db");
        assert_eq!(config.address, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }
}
