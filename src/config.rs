use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Supabase (remote content store + auth)
    pub supabase_url: String,
    pub supabase_anon_key: String,

    // OpenAI (color suggestions)
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_api_base: String,

    // Color suggestion fallback
    pub fallback_color: String,

    // Routing
    pub login_route: String,

    // Language preference persistence
    pub language_file: String,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Supabase - project URL and public (anon) API key
            supabase_url: std::env::var("SUPABASE_URL")
                .context("SUPABASE_URL not set")?
                .trim_end_matches('/')
                .to_string(),
            supabase_anon_key: std::env::var("SUPABASE_ANON_KEY")
                .context("SUPABASE_ANON_KEY not set")?,

            // OpenAI
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY not set")?,
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            openai_api_base: std::env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com".to_string())
                .trim_end_matches('/')
                .to_string(),

            fallback_color: std::env::var("FALLBACK_COLOR")
                .unwrap_or_else(|_| "#666666".to_string()),

            login_route: std::env::var("LOGIN_ROUTE").unwrap_or_else(|_| "/login".to_string()),

            language_file: std::env::var("LANGUAGE_FILE")
                .unwrap_or_else(|_| "data/language".to_string()),

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}
