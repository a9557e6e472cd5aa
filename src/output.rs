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
//! Writing a dataset as JSON or as a script that defines it as `data`.

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain JSON
    Json,
    /// A script declaring `let data = ...`
    Js,
    /// An ES module with `data` as its default export
    Mjs
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Js => "js",
            OutputFormat::Mjs => "mjs"
        }
    }

    pub fn for_file(file: &Path) -> Option<Self> {
        file.extension()
            .and_then(|extension| extension.to_string_lossy().parse().ok())
    }

    /// `emoji-v<major>.<extension>` if the emoji version is known, `emoji.<extension>` otherwise
    /// # Examples
    /// ```
    /// use emoji_extractor::output::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Mjs.default_file_name(Some((12, 0))), "emoji-v12.mjs");
    /// assert_eq!(OutputFormat::Json.default_file_name(None), "emoji.json");
    /// ```
    pub fn default_file_name(&self, version: Option<(u32, u32)>) -> String {
        match version {
            Some((major, _)) => format!("emoji-v{}.{}", major, self.extension()),
            None => format!("emoji.{}", self.extension())
        }
    }

    /// Serializes the data in this format
    pub fn write<T, W>(&self, mut writer: W, data: &T, pretty: bool) -> Result<(), OutputError>
        where T: Serialize + ?Sized, W: Write {
        let prefix: &[u8] = if pretty { b"let data = " } else { b"let data=" };
        match self {
            OutputFormat::Json => write_json(&mut writer, data, pretty)?,
            OutputFormat::Js => {
                writer.write_all(prefix)?;
                write_json(&mut writer, data, pretty)?;
            }
            OutputFormat::Mjs => {
                writer.write_all(prefix)?;
                write_json(&mut writer, data, pretty)?;
                let suffix: &[u8] = if pretty { b";\nexport default data" } else { b";export default data" };
                writer.write_all(suffix)?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    /// Serializes the data into a byte vector
    pub fn render<T>(&self, data: &T, pretty: bool) -> Result<Vec<u8>, OutputError>
        where T: Serialize + ?Sized {
        let mut buffer = Vec::new();
        self.write(&mut buffer, data, pretty)?;
        Ok(buffer)
    }

    /// Serializes the data into a (new or truncated) file
    pub fn save<T>(&self, path: &Path, data: &T, pretty: bool) -> Result<(), OutputError>
        where T: Serialize + ?Sized {
        let writer = BufWriter::new(File::create(path)?);
        self.write(writer, data, pretty)?;
        info!("Saved emojis to {}", path.display());
        Ok(())
    }
}

fn write_json<T, W>(writer: W, data: &T, pretty: bool) -> Result<(), serde_json::Error>
    where T: Serialize + ?Sized, W: Write {
    if pretty {
        let mut serializer = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
        data.serialize(&mut serializer)
    } else {
        serde_json::to_writer(writer, data)
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.extension().fmt(f)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "js" | "commonjs" => Ok(OutputFormat::Js),
            "mjs" | "esm" | "module" => Ok(OutputFormat::Mjs),
            other => Err(other.to_string())
        }
    }
}

#[derive(Debug)]
/// An error that occurs while writing a dataset
pub enum OutputError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// Wrapper for [serde_json::Error]
    Json(serde_json::Error)
}

impl Display for OutputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(error) => write!(f, "Couldn't write the emojis: {}", error),
            OutputError::Json(error) => write!(f, "Couldn't serialize the emojis: {}", error)
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(error) => Some(error),
            OutputError::Json(error) => Some(error)
        }
    }
}

impl From<std::io::Error> for OutputError {
    fn from(err: std::io::Error) -> Self {
        OutputError::Io(err)
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(err: serde_json::Error) -> Self {
        OutputError::Json(err)
    }
}
