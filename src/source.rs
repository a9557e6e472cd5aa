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
//! Getting hold of the text of an `emoji-test.txt` file.

#[cfg(feature = "online")]
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
#[cfg(feature = "online")]
use std::sync::RwLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::registry::build_url;
use crate::registry::entry::EntryLayout;

/// Where the text comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// The official file of an emoji version, e.g. `(12, 0)`
    Version((u32, u32)),
    Url(String),
    File(PathBuf)
}

impl Source {
    /// Parses versions like `12.0` or `13`
    /// # Examples
    /// ```
    /// use emoji_extractor::source::Source;
    ///
    /// assert_eq!(Source::parse_version("12.1"), Some((12, 1)));
    /// assert_eq!(Source::parse_version("13"), Some((13, 0)));
    /// assert_eq!(Source::parse_version("twelve"), None);
    /// ```
    pub fn parse_version(version: &str) -> Option<(u32, u32)> {
        let mut parts = version.trim().splitn(2, '.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(minor) => minor.parse().ok()?,
            None => 0
        };
        Some((major, minor))
    }

    /// The emoji version, if it is known from the source alone
    pub fn version(&self) -> Option<(u32, u32)> {
        lazy_static! {
            static ref URL_VERSION: Regex = Regex::new(r"/emoji/(?P<major>\d+)\.(?P<minor>\d+)/").unwrap();
        }
        match self {
            Source::Version(version) => Some(*version),
            Source::Url(url) => URL_VERSION.captures(url).and_then(|captures| {
                let major = captures.name("major")?.as_str().parse().ok()?;
                let minor = captures.name("minor")?.as_str().parse().ok()?;
                Some((major, minor))
            }),
            Source::File(_) => None
        }
    }

    /// The layout of data lines that files from this source are expected to have
    pub fn entry_layout(&self) -> EntryLayout {
        self.version()
            .map(EntryLayout::for_version)
            .unwrap_or_default()
    }

    /// A URL or path for log messages
    pub fn location(&self) -> String {
        match self {
            Source::Version(version) => build_url(*version),
            Source::Url(url) => url.clone(),
            Source::File(path) => path.display().to_string()
        }
    }

    /// Reads the complete text
    pub fn acquire(&self) -> Result<String, AcquireError> {
        info!("Reading emoji-test.txt from {}", self.location());
        match self {
            Source::File(path) => Ok(std::fs::read_to_string(path)?),
            Source::Version(_) | Source::Url(_) => self.acquire_online()
        }
    }

    #[cfg(feature = "online")]
    fn acquire_online(&self) -> Result<String, AcquireError> {
        let client = reqwest::blocking::Client::builder().build()?;
        let bytes = get_text_online(&client, &self.location())?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    #[cfg(not(feature = "online"))]
    fn acquire_online(&self) -> Result<String, AcquireError> {
        Err(AcquireError::OnlineDisabled(self.location()))
    }
}

/// Downloads a file, or returns it from the cache if it has been downloaded before
#[cfg(feature = "online")]
pub fn get_text_online(client: &reqwest::blocking::Client, url: &str) -> Result<bytes::Bytes, reqwest::Error> {
    // Check if we can return the file from the cache already
    if let Ok(cache) = TEXT_CACHE.read() {
        if let Some(cached) = cache.get(url) {
            return Ok(cached.clone());
        }
    }
    let bytes = client.get(url).send()?
        .error_for_status()?
        .bytes()?;

    if let Ok(mut cache) = TEXT_CACHE.write() {
        // We need to check again here, since we didn't hold the Lock for some time
        cache.entry(url.to_string()).or_insert_with(|| bytes.clone());
    }

    Ok(bytes)
}

#[cfg(feature = "online")]
type TextCache = RwLock<HashMap<String, bytes::Bytes>>;

#[cfg(feature = "online")]
lazy_static! {
    static ref TEXT_CACHE: TextCache = RwLock::new(HashMap::new());
}

#[derive(Debug)]
/// An error that occurs while reading the text of a [Source]
pub enum AcquireError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// The downloaded file is not UTF-8
    Utf8(std::string::FromUtf8Error),
    /// The crate has been built without the `online` feature
    OnlineDisabled(String),
    #[cfg(feature = "online")]
    /// Wrapper for [reqwest::Error]
    Reqwest(reqwest::Error)
}

impl Display for AcquireError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AcquireError::Io(error) => write!(f, "Couldn't read emoji-test.txt: {}", error),
            AcquireError::Utf8(error) => write!(f, "emoji-test.txt is not valid UTF-8: {}", error),
            AcquireError::OnlineDisabled(url) =>
                write!(f, "Can't download {} as the online feature is disabled", url),
            #[cfg(feature = "online")]
            AcquireError::Reqwest(error) => write!(f, "Couldn't download emoji-test.txt: {}", error)
        }
    }
}

impl std::error::Error for AcquireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AcquireError::Io(error) => Some(error),
            AcquireError::Utf8(error) => Some(error),
            AcquireError::OnlineDisabled(_) => None,
            #[cfg(feature = "online")]
            AcquireError::Reqwest(error) => Some(error)
        }
    }
}

impl From<std::io::Error> for AcquireError {
    fn from(err: std::io::Error) -> Self {
        AcquireError::Io(err)
    }
}

impl From<std::string::FromUtf8Error> for AcquireError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AcquireError::Utf8(err)
    }
}

#[cfg(feature = "online")]
impl From<reqwest::Error> for AcquireError {
    fn from(err: reqwest::Error) -> Self {
        AcquireError::Reqwest(err)
    }
}
