// SPDX-License-Identifier: GPL-3.0-only

use eox_client::{Credentials, Endpoints};
use ini::{Ini, ParseOption};
use std::{fmt, path::Path};

pub const DEFAULT_CONFIG_PATH: &str = "package_config.ini";
const SECTION: &str = "application";

#[derive(Debug)]
pub enum ConfigError {
    Read(ini::Error),
    Parse(ini::ParseError),
    MissingSection,
    MissingKey(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "{}", err),
            Self::Parse(err) => write!(f, "{}", err),
            Self::MissingSection => write!(f, "missing section `[{}]`", SECTION),
            Self::MissingKey(key) => {
                write!(f, "missing key `{}` in section `[{}]`", key, SECTION)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoints: Endpoints,
}

// Values are plain strings: secrets may contain `\` or `"`.
fn parse_option() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file_opt(path, parse_option()).map_err(ConfigError::Read)?;
        Self::from_ini(&ini)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str_opt(text, parse_option()).map_err(ConfigError::Parse)?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let section = ini
            .section(Some(SECTION))
            .ok_or(ConfigError::MissingSection)?;
        let required = |key: &'static str| {
            section
                .get(key)
                .map(str::to_string)
                .ok_or(ConfigError::MissingKey(key))
        };
        let optional = |key: &str| {
            section
                .get(key)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Ok(Self {
            credentials: Credentials::new(required("client_id")?, required("client_secret")?),
            endpoints: Endpoints {
                token_url: optional("token_url"),
                api_url: optional("api_url"),
            },
        })
    }
}
