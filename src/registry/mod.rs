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
//! The line-level view on [Unicode® emoji test files][unicode]: what a line is and what it contains.
//!
//! [unicode]: https://unicode.org/Public/emoji/12.0/emoji-test.txt

/// Decoding of icon and name from data lines
pub mod entry;
/// Classification of single lines
pub mod line_kind;
pub mod status;
#[cfg(test)]
mod tests;

pub const EMOJI_TEST: &str = "emoji-test.txt";

/// The emoji version whose test file is used if nothing else is specified
pub const DEFAULT_VERSION: (u32, u32) = (12, 0);

/// Builds the URL of `emoji-test.txt` for a given emoji version.
/// # Examples
/// ```
/// use emoji_extractor::registry::build_url;
///
/// assert_eq!(build_url((12, 0)), "https://unicode.org/Public/emoji/12.0/emoji-test.txt");
/// ```
#[inline]
pub fn build_url(version: (u32, u32)) -> String {
    format!("https://unicode.org/Public/emoji/{}.{}/{}", version.0, version.1, EMOJI_TEST)
}
