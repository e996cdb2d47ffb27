use crate::domain::{GeoPoint, SpeedUnit};
use config::{Config, ConfigError};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    logging: Logging,
    tracks: Tracks,
    #[serde(default)]
    stats: Stats,
    map: Map,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn logging(&self) -> &Logging {
        &self.logging
    }

    pub fn tracks(&self) -> &Tracks {
        &self.tracks
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn map(&self) -> &Map {
        &self.map
    }
}

#[derive(Debug, Deserialize)]
pub struct Logging {
    #[serde(deserialize_with = "deserialize_level")]
    level: Level,
}

impl Logging {
    pub fn level(&self) -> Level {
        self.level
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value
        .parse()
        .map_err(|_| D::Error::custom(format!("invalid log level '{}', expected one of trace, debug, info, warn or error", value)))
}

#[derive(Debug, Deserialize)]
pub struct Tracks {
    directory: String,
    #[serde(default = "default_extension")]
    extension: String,
}

fn default_extension() -> String {
    "json".to_string()
}

impl Tracks {
    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Stats {
    #[serde(default)]
    speed_unit: SpeedUnit,
}

impl Stats {
    pub fn speed_unit(&self) -> SpeedUnit {
        self.speed_unit
    }
}

#[derive(Debug, Deserialize)]
pub struct Map {
    default_location: GeoPoint,
}

impl Map {
    pub fn default_location(&self) -> &GeoPoint {
        &self.default_location
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                logging: Logging { level: Level::INFO },
                tracks: Tracks {
                    directory: "tracks".to_string(),
                    extension: default_extension(),
                },
                stats: Stats::default(),
                map: Map {
                    default_location: GeoPoint::new(37.4219983, -122.084),
                },
            },
        }
    }

    pub fn tracks_directory(mut self, directory: String) -> Self {
        self.config.tracks.directory = directory;
        self
    }

    pub fn speed_unit(mut self, speed_unit: SpeedUnit) -> Self {
        self.config.stats.speed_unit = speed_unit;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
