use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub partner: PartnerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PartnerConfig {
    pub search_base_url: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("server.port", 8001_i64)?
            .set_default(
                "partner.search_base_url",
                yyz_core::search::SEARCH_BASE_URL,
            )?
            // Optional config files layered under the defaults
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `APP_SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("app").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
