use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Set to "true" or "1" to insert the demo notes on boot
    /// (only when the notes table is empty).
    pub const SEED_DEMO_NOTES: &str = "SEED_DEMO_NOTES";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const DATABASE_URL: &str = "./.db/notes.db";
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub seed_demo_notes: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var(env_vars::PORT)
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults::PORT);

        let database_url = env::var(env_vars::DATABASE_URL)
            .unwrap_or_else(|_| defaults::DATABASE_URL.to_string());

        let seed_demo_notes = env::var(env_vars::SEED_DEMO_NOTES)
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            port,
            database_url,
            seed_demo_notes,
        }
    }
}
