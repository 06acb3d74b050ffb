use std::{collections::HashMap, fs, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub data_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:3000".into(),
            data_file: None,
        }
    }
}

pub fn load_settings() -> Settings {
    let file_cfg = fs::read_to_string("server.toml")
        .ok()
        .and_then(|raw| parse_file_settings(&raw));
    let env = std::env::vars().collect::<HashMap<_, _>>();
    resolve_settings(file_cfg.as_ref(), &env)
}

fn parse_file_settings(raw: &str) -> Option<HashMap<String, String>> {
    match toml::from_str::<HashMap<String, String>>(raw) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring malformed server.toml");
            None
        }
    }
}

/// Defaults, then `server.toml` keys, then environment variables.
fn resolve_settings(
    file_cfg: Option<&HashMap<String, String>>,
    env: &HashMap<String, String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(file_cfg) = file_cfg {
        if let Some(v) = file_cfg.get("bind_addr") {
            settings.server_bind = v.clone();
        }
        if let Some(v) = file_cfg.get("data_file") {
            settings.data_file = non_empty_path(v);
        }
    }

    if let Some(v) = env.get("SERVER_BIND") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = env.get("APP__BIND_ADDR") {
        settings.server_bind = v.clone();
    }

    if let Some(v) = env.get("APP__DATA_FILE") {
        settings.data_file = non_empty_path(v);
    }

    settings
}

fn non_empty_path(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| PathBuf::from(raw))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
