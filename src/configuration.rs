use std::env;

#[derive(Debug, Clone)]
pub struct Configuration {
    results_path: String,
}

fn var(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Configuration {
    pub fn new() -> Self {
        Self {
            results_path: var("RESULTS_PATH", "s7_results"),
        }
    }

    pub fn results_path(&self) -> &str {
        &self.results_path
    }
}
