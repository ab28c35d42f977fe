use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub placeholder_word: String,
    pub word_list_path: Option<String>,
    pub match_time_limit_seconds: i32,
}

impl Config {
    pub fn new() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("Invalid PORT"),
            placeholder_word: env::var("PLACEHOLDER_WORD")
                .unwrap_or_else(|_| "FLUTTER".to_string()),
            word_list_path: env::var("WORD_LIST_PATH").ok(),
            match_time_limit_seconds: env::var("MATCH_TIME_LIMIT_SECONDS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .expect("Invalid MATCH_TIME_LIMIT_SECONDS"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
