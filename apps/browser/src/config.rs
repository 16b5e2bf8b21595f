use std::{collections::HashMap, fs};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub source_url: String,
    pub page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: "https://fakestoreapi.com".into(),
            page_size: 5,
        }
    }
}

/// Loads settings from `browser.toml` next to the binary, then applies
/// environment overrides (`CATALOG_SOURCE_URL`, `CATALOG_PAGE_SIZE`).
/// Missing or malformed entries fall back to the defaults.
pub fn load_settings() -> Settings {
    let file_cfg = fs::read_to_string("browser.toml")
        .ok()
        .and_then(|raw| toml::from_str::<HashMap<String, String>>(&raw).ok())
        .unwrap_or_default();
    settings_from(&file_cfg, |key| std::env::var(key).ok())
}

fn settings_from(
    file_cfg: &HashMap<String, String>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(v) = file_cfg.get("source_url") {
        settings.source_url = v.clone();
    }
    if let Some(v) = file_cfg.get("page_size").and_then(|v| v.parse().ok()) {
        settings.page_size = v;
    }

    if let Some(v) = env("CATALOG_SOURCE_URL") {
        settings.source_url = v;
    }
    if let Some(v) = env("CATALOG_PAGE_SIZE").and_then(|v| v.parse().ok()) {
        settings.page_size = v;
    }

    if settings.page_size == 0 {
        settings.page_size = Settings::default().page_size;
    }

    settings
}
