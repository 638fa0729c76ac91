use dotenv::dotenv;
use std::env;

/// Process configuration, read once at startup. The token secret is carried
/// here explicitly instead of being read from the environment at verify time.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://database.sqlite".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let secret = env::var("SECRET").unwrap_or_else(|_| {
            tracing::warn!("SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        Config {
            database_url,
            port,
            secret,
        }
    }
}
