use std::{
    collections::HashMap,
    env,
    fs,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use directories::BaseDirs;

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let mut map = default_map();
        let config_path = default_config_path();

        // Read .synthgenrc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().flatten() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, config_path }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        // ENV first
        if let Ok(v) = env::var(key) {
            return Some(v);
        }
        self.inner.get(key).cloned()
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.parse::<u64>().ok())
    }

    pub fn python_bin(&self) -> String {
        self.get("PYTHON_BIN").unwrap_or_else(|| "python3".into())
    }

    pub fn dataset_path(&self) -> PathBuf {
        PathBuf::from(self.get("DATASET_PATH").unwrap_or_else(|| "generated_dataset.csv".into()))
    }
}

fn is_config_key(k: &str) -> bool {
    // Accept known keys or SYNTHGEN_*/OPENAI_* for forward-compat
    const KEYS: &[&str] = &[
        "OPENAI_API_KEY",
        "API_BASE_URL",
        "REQUEST_TIMEOUT",
        "SCRIPT_TIMEOUT",
        "DEFAULT_MODEL",
        "PYTHON_BIN",
        "DATASET_PATH",
    ];

    KEYS.contains(&k) || k.starts_with("SYNTHGEN_") || k.starts_with("OPENAI_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("synthgen").join(".synthgenrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();

    // Numbers (seconds)
    m.insert("REQUEST_TIMEOUT".into(), "60".into());
    m.insert("SCRIPT_TIMEOUT".into(), "60".into());

    // Strings
    m.insert("DEFAULT_MODEL".into(), "gpt-4o".into());
    m.insert("API_BASE_URL".into(), "default".into());
    m.insert("PYTHON_BIN".into(), "python3".into());
    m.insert("DATASET_PATH".into(), "generated_dataset.csv".into());

    m
}
