/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::registry::DEFAULT_VERSION;
use crate::registry::entry::EntryLayout;
use crate::source::Source;

/// Emojis that are left out by default: the ones introduced in Emoji 12.0, which many
/// platforms couldn't display for quite some time.
pub const DEFAULT_IGNORE: &[&str] = &[
    "yawning face", "brown heart", "white heart", "pinching hand", "mechanical arm",
    "mechanical leg", "ear with hearing aid", "deaf person", "deaf man", "deaf woman",
    "person standing", "man standing", "woman standing", "person kneeling", "man kneeling",
    "woman kneeling", "man with probing cane", "woman with probing cane",
    "man in motorized wheelchair", "woman in motorized wheelchair", "man in manual wheelchair",
    "woman in manual wheelchair", "orangutan", "guide dog", "service dog", "sloth", "otter",
    "skunk", "flamingo", "garlic", "onion", "waffle", "falafel", "butter", "oyster",
    "beverage box", "mate", "ice cube", "hindu temple", "manual wheelchair",
    "motorized wheelchair", "auto rickshaw", "parachute", "ringed planet", "diving mask", "yo-yo",
    "kite", "safety vest", "sari", "one-piece swimsuit", "swim brief", "shorts", "ballet shoes",
    "banjo", "diya lamp", "axe", "probing cane", "drop of blood", "adhesive bandage",
    "stethoscope", "chair", "razor", "orange circle", "yellow circle", "green circle",
    "purple circle", "brown circle", "red square", "orange square", "yellow square",
    "green square", "blue square", "purple square", "brown square"
];

pub const DEFAULT_CONFIG_EXTENSION: &str = "json";

/// Everything that controls an extraction, its input and its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Where to get `emoji-test.txt` from
    pub source: Source,
    /// Whether skin tone variants are included
    pub tones: bool,
    /// Whether to only keep the icons (see [crate::dataset::compact])
    pub minimal: bool,
    /// Regular expressions for emojis to leave out
    pub ignore: Vec<String>,
    pub format: OutputFormat,
    /// Indent the output
    pub pretty: bool,
    /// Where to find icon and name in data lines; derived from the source if missing
    pub layout: Option<EntryLayout>,
    pub output: Option<PathBuf>
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            source: Source::Version(DEFAULT_VERSION),
            tones: true,
            minimal: false,
            ignore: DEFAULT_IGNORE.iter().map(|name| name.to_string()).collect(),
            format: OutputFormat::Json,
            pretty: true,
            layout: None,
            output: None
        }
    }
}

impl ExtractorConfig {
    /// Reads a configuration from a JSON or YAML file (depending on its extension)
    pub fn from_file(file: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::for_file(file).unwrap_or_else(|| {
            warn!("No appropriate Deserializer found for {:?}. Assuming {}",
                  file,
                  DEFAULT_CONFIG_EXTENSION
            );
            ConfigFormat::Json
        });
        let reader = BufReader::new(File::open(file)?);
        format.deserialize(reader)
    }

    pub fn entry_layout(&self) -> EntryLayout {
        self.layout.unwrap_or_else(|| self.source.entry_layout())
    }

    /// The format to write; a known extension of the output file wins over [ExtractorConfig::format]
    pub fn output_format(&self) -> OutputFormat {
        self.output.as_ref()
            .and_then(|output| OutputFormat::for_file(output))
            .unwrap_or(self.format)
    }

    /// The file to write to, e.g. `emoji-v12.json` if none is given
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(
            self.output_format().default_file_name(self.source.version())
        ))
    }
}

/// The file formats a configuration can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml
}

impl ConfigFormat {
    pub fn for_file(file: &Path) -> Option<Self> {
        file.extension()
            .and_then(|extension| Self::for_extension(extension.to_string_lossy().as_ref()))
    }

    pub fn for_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None
        }
    }

    pub fn deserialize<R: Read>(&self, reader: R) -> Result<ExtractorConfig, ConfigError> {
        match self {
            ConfigFormat::Json => Ok(serde_json::from_reader(reader)?),
            ConfigFormat::Yaml => Ok(serde_yaml::from_reader(reader)?)
        }
    }
}

/// Errors that occur while loading a configuration or preparing an extraction from it
#[derive(Debug)]
pub enum ConfigError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// Wrapper for [serde_json::Error]
    Json(serde_json::Error),
    /// Wrapper for [serde_yaml::Error]
    Yaml(serde_yaml::Error),
    /// One of the ignore patterns is not a valid regular expression
    InvalidPattern(regex::Error)
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(error) => write!(f, "Couldn't read the configuration: {}", error),
            ConfigError::Json(error) => write!(f, "Invalid JSON configuration: {}", error),
            ConfigError::Yaml(error) => write!(f, "Invalid YAML configuration: {}", error),
            ConfigError::InvalidPattern(error) => write!(f, "Invalid ignore pattern: {}", error)
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(error) => Some(error),
            ConfigError::Json(error) => Some(error),
            ConfigError::Yaml(error) => Some(error),
            ConfigError::InvalidPattern(error) => Some(error)
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}

impl From<regex::Error> for ConfigError {
    fn from(err: regex::Error) -> Self {
        ConfigError::InvalidPattern(err)
    }
}
