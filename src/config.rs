use chrono::Weekday;
use log;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};
use crate::geometry::Size;
use crate::label::{FormatLabeler, DEFAULT_ADJACENT_FORMAT, DEFAULT_IN_MONTH_FORMAT};

const CONFIG_PATH_ENV_VAR: &str = "MONTHGRID_CONFIG_FILE";

/// Room for the today/focus column, the marker column and two digits.
const MIN_TILE_WIDTH: u32 = 4;
const MAX_TILE_EXTENT: u32 = u16::MAX as u32;

pub(crate) fn find_configfile_locations() -> io::Result<Vec<PathBuf>> {
    let home = dirs::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::Other, "Unable to find home directory")
    })?;

    let config_xdg = dirs::config_dir()
        .unwrap_or_else(|| home.join(".config"))
        .join("monthgrid")
        .join("config.toml");

    let home_config = home.join(".monthgrid.toml");

    let mut locations = vec![config_xdg, home_config];

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.insert(0, PathBuf::from(path));
    }

    Ok(locations)
}

pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::from_file(path);
    }

    let locations = match find_configfile_locations() {
        Ok(locations) => locations,
        Err(e) => {
            log::warn!("{}", e);
            Vec::new()
        }
    };

    match locations.iter().find(|path| path.is_file()) {
        Some(path) => {
            log::info!("Using config file {}", path.display());
            Config::from_file(path)
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Monday,
    Sunday,
}

impl Default for WeekStart {
    fn default() -> Self {
        WeekStart::Monday
    }
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Weekday {
        match start {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelSpec {
    pub in_month: String,
    pub adjacent: String,
}

impl Default for LabelSpec {
    fn default() -> Self {
        LabelSpec {
            in_month: DEFAULT_IN_MONTH_FORMAT.to_owned(),
            adjacent: DEFAULT_ADJACENT_FORMAT.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeSpec {
    pub today_char: Option<char>,
    pub focus_char: Option<char>,
    pub marked_char: char,
    pub special_char: char,
}

impl Default for ThemeSpec {
    fn default() -> Self {
        ThemeSpec {
            today_char: Some('*'),
            focus_char: None,
            marked_char: '.',
            special_char: '!',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub week_start: WeekStart,
    pub tile_width: u32,
    pub tile_height: u32,
    pub tick_rate_ms: u64,
    pub labels: LabelSpec,
    pub theme: ThemeSpec,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            week_start: WeekStart::default(),
            tile_width: 4,
            tile_height: 1,
            tick_rate_ms: 500,
            labels: LabelSpec::default(),
            theme: ThemeSpec::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::from(e).with_msg(&format!("Could not read {}", path.display()))
        })?;

        content.parse()
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start.into()
    }

    pub fn tile_size(&self) -> Size {
        Size::new(self.tile_width, self.tile_height)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn labeler(&self) -> Result<FormatLabeler> {
        FormatLabeler::new(&self.labels.in_month, &self.labels.adjacent)
    }

    fn validate(self) -> Result<Self> {
        if self.tile_width < MIN_TILE_WIDTH || self.tile_width > MAX_TILE_EXTENT {
            return Err(Error::new(
                ErrorKind::ConfigError,
                &format!(
                    "tile_width must be between {} and {}",
                    MIN_TILE_WIDTH, MAX_TILE_EXTENT
                ),
            ));
        }

        if self.tile_height == 0 || self.tile_height > MAX_TILE_EXTENT {
            return Err(Error::new(
                ErrorKind::ConfigError,
                &format!("tile_height must be between 1 and {}", MAX_TILE_EXTENT),
            ));
        }

        self.labeler()?;

        Ok(self)
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str::<Config>(s)?.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.week_start(), Weekday::Mon);
        assert_eq!(config.tile_size(), Size::new(4, 1));
        assert_eq!(config.tick_rate(), Duration::from_millis(500));
    }

    #[test]
    fn partial_config() {
        let config: Config = r#"
            week_start = "sunday"
            tile_width = 5

            [labels]
            in_month = "%d.%m.%Y"

            [theme]
            marked_char = "+"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.week_start(), Weekday::Sun);
        assert_eq!(config.tile_size(), Size::new(5, 1));
        assert_eq!(config.labels.in_month, "%d.%m.%Y");
        assert_eq!(config.labels.adjacent, DEFAULT_ADJACENT_FORMAT);
        assert_eq!(config.theme.marked_char, '+');
        assert_eq!(config.theme.today_char, Some('*'));
    }

    #[test]
    fn invalid_configs() {
        let err = "week_start = \"friday\"".parse::<Config>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigError));

        let err = "tile_height = 0".parse::<Config>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigError));

        let err = "[labels]\nadjacent = \"%Q\"".parse::<Config>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigError));
    }

    #[test]
    fn tile_size_limits() {
        for input in &[
            "tile_width = 3",
            "tile_width = 1000000000",
            "tile_height = 1000000000",
            "tile_width = 65536",
        ] {
            let err = input.parse::<Config>().unwrap_err();
            assert!(matches!(err.kind, ErrorKind::ConfigError), "{}", input);
        }

        let config: Config = "tile_width = 65535\ntile_height = 65535".parse().unwrap();
        assert_eq!(config.tile_size(), Size::new(65535, 65535));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_suitable_config(Some(Path::new("/nonexistent/monthgrid.toml")))
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::IOError(_)));
    }
}
