pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment (with `.env` support),
    /// falling back to a local SQLite file on 127.0.0.1:8080.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let database_url = dotenvy::var("DATABASE_URL").unwrap_or_else(|_| "todos.db".to_string());
        let host = dotenvy::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = dotenvy::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);
        Self {
            database_url,
            host,
            port,
        }
    }
}
