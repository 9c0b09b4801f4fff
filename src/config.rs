#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Self {
        let api_base = std::env::var("VOOS_API_BASE")
            .unwrap_or_else(|_| "http://localhost:5003/api".to_string());

        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }
}
