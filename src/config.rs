use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    /// Answer 200 on Movie/Credit POST failures and on Credit DELETE of a
    /// missing id.
    pub legacy_status_codes: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "5555".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("DB_URI"))
            .unwrap_or_else(|_| "sqlite://app.db?mode=rwc".to_string());

        let legacy_status_codes = std::env::var("LEGACY_STATUS_CODES")
            .ok()
            .map(|s| parse_flag(&s))
            .unwrap_or(false);

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            legacy_status_codes,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
