use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Result;
use time::Duration;

mod raw {
    use duration_str::deserialize_option_duration;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "kebab-case", deny_unknown_fields)]
    pub struct Config {
        pub annotations: Option<Annotations>,
        pub cache: Option<Cache>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "kebab-case", deny_unknown_fields)]
    pub struct Annotations {
        pub records: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "kebab-case", deny_unknown_fields)]
    pub struct Cache {
        #[serde(default, deserialize_with = "deserialize_option_duration")]
        pub max_age: Option<std::time::Duration>,
    }
}

const DEFAULT_CONFIG_FILE_NAME: &str = "usermap.toml";
const DEFAULT_RECORDS_FILE: &str = "annotations.json";

const ENV_NAME_RECORDS_FILE: &str = "USERMAP_ANNOTATIONS";

#[derive(Debug)]
pub struct Config {
    pub annotations: Annotations,
    pub cache: Cache,
}

#[derive(Debug)]
pub struct Annotations {
    /// JSON file with the user pin records.
    pub records: PathBuf,
}

#[derive(Debug)]
pub struct Cache {
    pub max_age: Option<Duration>,
}

impl Config {
    pub fn try_load_from_file_or_default(file_path: Option<&Path>) -> Result<Self> {
        let file_path = file_path.unwrap_or_else(|| {
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
        if let Ok(records) = env::var(ENV_NAME_RECORDS_FILE) {
            cfg.annotations.records = records.into();
        }
        Ok(cfg)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;

    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { annotations, cache } = from;
        let records = annotations
            .and_then(|a| a.records)
            .map(PathBuf::from)
            .unwrap_or_else(|| DEFAULT_RECORDS_FILE.into());
        let max_age = cache
            .and_then(|c| c.max_age)
            .map(Duration::try_from)
            .transpose()?;
        Ok(Self {
            annotations: Annotations { records },
            cache: Cache { max_age },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(cfg.annotations.records, PathBuf::from(DEFAULT_RECORDS_FILE));
        assert_eq!(cfg.cache.max_age, None);
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
            [annotations]
            records = "/var/lib/usermap/pins.json"

            [cache]
            max-age = "5m"
        "#;
        let raw: raw::Config = toml::from_str(toml_str).unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert_eq!(
            cfg.annotations.records,
            PathBuf::from("/var/lib/usermap/pins.json")
        );
        assert_eq!(cfg.cache.max_age, Some(Duration::minutes(5)));
    }
}
