use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use luxestay_core::entities::Coordinates;
use luxestay_gateways::gemini::{DEFAULT_API_URL, DEFAULT_MODEL};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "luxestay.toml";

const ENV_NAME_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
const ENV_NAME_STORAGE_DIR: &str = "LUXESTAY_STORAGE_DIR";

#[derive(Debug)]
pub struct Config {
    pub gemini: Gemini,
    pub storage: Storage,
    /// The simulated device location.
    pub location: Option<Coordinates>,
}

#[derive(Debug)]
pub struct Gemini {
    pub api_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

#[derive(Debug)]
pub struct Storage {
    /// File system directory for the session records.
    pub dir: PathBuf,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.override_from(|name| env::var(name).ok());
        Ok(cfg)
    }

    fn override_from<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = var(ENV_NAME_GEMINI_API_KEY).filter(|key| !key.trim().is_empty()) {
            self.gemini.api_key = Some(api_key);
        }
        if let Some(dir) = var(ENV_NAME_STORAGE_DIR) {
            self.storage.dir = dir.into();
        }
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            gemini,
            storage,
            location,
        } = from;

        let raw::Gemini {
            api_url,
            model,
            api_key,
        } = gemini.unwrap_or_default();
        let gemini = Gemini {
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        };

        let raw::Storage { dir } = storage.unwrap_or_default();
        let storage = Storage { dir };

        let raw::Location { lat, lng } = location.unwrap_or_default();
        let location = match (lat, lng) {
            (Some(lat), Some(lng)) => {
                let coordinates = Coordinates::new(lat, lng);
                if !coordinates.is_valid() {
                    return Err(anyhow!("Invalid location: {lat}, {lng}"));
                }
                Some(coordinates)
            }
            (None, None) => None,
            _ => return Err(anyhow!("The location needs both 'lat' and 'lng'")),
        };

        Ok(Self {
            gemini,
            storage,
            location,
        })
    }
}
