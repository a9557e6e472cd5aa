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
//! Decoding of the `icon name` payload of a data line in `emoji-test.txt`.
//!
//! The syntax of these lines is:
//! `Codepoints ; Status # Emoji ["E"Version] Emoji name`

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The column at which the payload starts in Emoji 11.0 and 12.x files:
/// 43 characters of codepoints, `; `, 20 characters of status and `# `.
pub const DEFAULT_PAYLOAD_COLUMN: usize = 67;

/// Prefix that Emoji 12.0 and later put in front of the names of flags
const FLAG_PREFIX: &str = "flag: ";

/// Where to find the payload of a data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryLayout {
    /// The payload starts at a fixed byte column which is preceded by `# `
    Fixed(usize),
    /// The payload follows the first `# ` and might start with an `E<version>` token
    /// (Emoji 13.0 and later)
    Delimited
}

impl Default for EntryLayout {
    fn default() -> Self {
        EntryLayout::Fixed(DEFAULT_PAYLOAD_COLUMN)
    }
}

impl EntryLayout {
    /// The layout used by the files of a given emoji version
    pub fn for_version(version: (u32, u32)) -> Self {
        if version.0 >= 13 {
            EntryLayout::Delimited
        } else {
            EntryLayout::default()
        }
    }
}

/// Ways in which a data line can fail to match its [EntryLayout]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The line ends before (or right at) the payload column
    TooShort { column: usize, length: usize },
    /// The payload column is not preceded by `# ` or would split a character
    MisalignedColumn { column: usize },
    /// There is no `# ` in the line at all
    MissingDelimiter,
    /// The payload lacks an icon or a name
    EmptyPayload
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::TooShort { column, length } =>
                write!(f, "line has {} bytes, but the payload should start at column {}", length, column),
            LayoutError::MisalignedColumn { column } =>
                write!(f, "column {} is not the start of the payload", column),
            LayoutError::MissingDelimiter => write!(f, "no '# ' in front of the payload"),
            LayoutError::EmptyPayload => write!(f, "the payload has no icon or no name")
        }
    }
}

impl std::error::Error for LayoutError {}

/// The icon and name of a single data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEntry {
    pub icon: String,
    /// The name with the redundant `flag: ` prefix removed
    pub name: String,
    /// Icon and name as written in the file; this is what ignore patterns are tested against
    pub payload: String
}

impl DecodedEntry {
    /// Decodes the payload of a line that has already been classified as a data line.
    /// # Examples
    /// ```
    /// use emoji_extractor::registry::entry::{DecodedEntry, EntryLayout};
    ///
    /// let line = "1F1E9 1F1EA                                ; fully-qualified     # 🇩🇪 flag: Germany";
    /// let entry = DecodedEntry::decode(line, EntryLayout::default()).unwrap();
    /// assert_eq!(entry.icon, "🇩🇪");
    /// assert_eq!(entry.name, "Germany");
    /// assert_eq!(entry.payload, "🇩🇪 flag: Germany");
    ///
    /// let line = "1F600                                                  ; fully-qualified     # 😀 E1.0 grinning face";
    /// let entry = DecodedEntry::decode(line, EntryLayout::Delimited).unwrap();
    /// assert_eq!(entry.name, "grinning face");
    /// ```
    pub fn decode(line: &str, layout: EntryLayout) -> Result<Self, LayoutError> {
        let payload = match layout {
            EntryLayout::Fixed(column) => Self::payload_at(line, column)?,
            EntryLayout::Delimited => Self::payload_after_delimiter(line)?
        };

        let mut tokens = payload.split_whitespace().peekable();
        let icon = tokens.next().ok_or(LayoutError::EmptyPayload)?;
        if layout == EntryLayout::Delimited {
            lazy_static! {
                static ref VERSION_TOKEN: Regex = Regex::new(r"^E\d+\.\d+$").unwrap();
            }
            if tokens.peek().map_or(false, |token| VERSION_TOKEN.is_match(token)) {
                tokens.next();
            }
        }
        let raw_name = tokens.join(" ");
        if raw_name.is_empty() {
            return Err(LayoutError::EmptyPayload);
        }

        Ok(Self {
            icon: icon.to_owned(),
            name: raw_name.replacen(FLAG_PREFIX, "", 1),
            payload: format!("{} {}", icon, raw_name)
        })
    }

    fn payload_at(line: &str, column: usize) -> Result<&str, LayoutError> {
        let bytes = line.as_bytes();
        if bytes.len() <= column {
            return Err(LayoutError::TooShort { column, length: bytes.len() });
        }
        if column < 2 || &bytes[column - 2..column] != b"# " {
            return Err(LayoutError::MisalignedColumn { column });
        }
        line.get(column..).ok_or(LayoutError::MisalignedColumn { column })
    }

    fn payload_after_delimiter(line: &str) -> Result<&str, LayoutError> {
        line.find("# ")
            .map(|start| &line[start + 2..])
            .ok_or(LayoutError::MissingDelimiter)
    }
}
