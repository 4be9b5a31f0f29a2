use std::path::PathBuf;

use tracing::info;

/// Application configuration
/// In debug builds: loads .env first, then reads the environment
/// In release builds: reads the environment only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// SQLite file holding customers and invoices
    pub database_path: PathBuf,
    /// Whether to insert demo invoices into an empty database
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            // Try to load .env file
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            } else {
                info!("No .env file found, using environment only");
            }
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok());
        info!("Database path: {}", config.database_path.display());
        if config.seed_demo_data {
            info!("Demo data seeding enabled");
        }
        config
    }

    /// Build configuration from a key lookup (the process environment in
    /// production, a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_path = lookup("INVOICES_DATABASE_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        let seed_demo_data = lookup("INVOICES_SEED_DEMO_DATA")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(cfg!(debug_assertions));

        Self {
            database_path,
            seed_demo_data,
        }
    }
}

/// `~/.invoices/invoices.db`, or a relative path when there is no home
/// directory
fn default_database_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".invoices"))
        .unwrap_or_else(|| PathBuf::from(".invoices"))
        .join("invoices.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_explicit_values() {
        let config = config_from(&[
            ("INVOICES_DATABASE_PATH", "/tmp/dashboard.db"),
            ("INVOICES_SEED_DEMO_DATA", "TRUE"),
        ]);
        assert_eq!(config.database_path, PathBuf::from("/tmp/dashboard.db"));
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("INVOICES_DATABASE_PATH", "  ")]);
        assert!(config.database_path.ends_with(".invoices/invoices.db"));
        assert_eq!(config.seed_demo_data, cfg!(debug_assertions));
    }

    #[test]
    fn test_seed_flag_false() {
        let config = config_from(&[("INVOICES_SEED_DEMO_DATA", "no")]);
        assert!(!config.seed_demo_data);
    }
}
