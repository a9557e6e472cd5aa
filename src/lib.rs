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
 */
//! The main crate for emoji_extractor: turns the Unicode® `emoji-test.txt` into categorized
//! emoji lists for emoji pickers and the like.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// The configuration of an extraction and how to load it
pub mod config;
/// Emoji records grouped by category
pub mod dataset;
pub mod error;
/// The parsing of `emoji-test.txt` into a dataset
pub mod extractor;
/// JSON and script output
pub mod output;
/// Line-level structure of `emoji-test.txt`
pub mod registry;
/// Local and online sources for `emoji-test.txt`
pub mod source;

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::extractor::{Extraction, Extractor};

/// Reads the configured source and extracts the emojis from it.
/// Nothing is written; see [output::OutputFormat::save] for that.
pub fn extract(config: &ExtractorConfig) -> Result<Extraction, ExtractorError> {
    let extractor = Extractor::from_config(config)?;
    let text = config.source.acquire()?;
    Ok(extractor.extract(&text))
}

#[cfg(test)]
mod tests;
