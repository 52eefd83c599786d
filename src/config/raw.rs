use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("luxestay.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub gemini: Option<Gemini>,
    pub storage: Option<Storage>,
    pub location: Option<Location>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gemini {
    pub api_url: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

impl Default for Gemini {
    fn default() -> Self {
        Config::default().gemini.expect("Gemini configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Storage {
    pub dir: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Config::default().storage.expect("Storage configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Location {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}
