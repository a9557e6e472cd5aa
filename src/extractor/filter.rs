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

use regex::RegexSet;

use crate::registry::entry::DecodedEntry;

/// Names with a colon are tone variants, except for these
const COLON_EXCEPTIONS: [&str; 2] = ["keycap:", "flag:"];

/// Checks whether a name uses the `base: modifier` syntax of tone variants.
/// Keycaps and flags use a colon as well, but for other reasons.
/// # Examples
/// ```
/// use emoji_extractor::extractor::filter::is_toned;
///
/// assert!(is_toned("waving hand: light skin tone"));
/// assert!(!is_toned("waving hand"));
/// assert!(!is_toned("keycap: 1"));
/// ```
pub fn is_toned(name: &str) -> bool {
    name.contains(':') && !COLON_EXCEPTIONS.iter().any(|exception| name.contains(exception))
}

/// The part of a name in front of the first colon, i.e. the name of the base emoji
pub fn family_of(name: &str) -> &str {
    name.split(':').next().unwrap_or(name)
}

/// What the [FilterPolicy] decided for an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    /// One of the ignore patterns matched
    Ignored,
    /// It's a tone variant and tones are disabled
    ToneSuppressed
}

/// Decides which decoded entries are dropped before they reach the dataset.
/// The ignore patterns are compiled once and then used for every entry.
#[derive(Debug, Clone)]
pub struct FilterPolicy {
    ignore: RegexSet,
    include_tones: bool
}

impl FilterPolicy {
    /// Compiles the ignore patterns; they are regular expressions that are searched for in the
    /// icon and name of an entry, so a plain name matches itself and all its tone variants.
    /// Every pattern is also matched literally, as names like `A button (blood type)` aren't
    /// regular expressions matching themselves.
    pub fn new<I, S>(ignore: I, include_tones: bool) -> Result<Self, regex::Error>
        where I: IntoIterator<Item = S>, S: AsRef<str> {
        let mut patterns = Vec::new();
        for pattern in ignore {
            let pattern = pattern.as_ref();
            let literal = regex::escape(pattern);
            if literal != pattern {
                patterns.push(literal);
            }
            patterns.push(pattern.to_string());
        }
        Ok(Self {
            ignore: RegexSet::new(&patterns)?,
            include_tones
        })
    }

    pub fn include_tones(&self) -> bool {
        self.include_tones
    }

    pub fn verdict(&self, entry: &DecodedEntry) -> Verdict {
        if self.ignore.is_match(&entry.payload) {
            Verdict::Ignored
        // The payload still has the `flag: ` prefix that the name has lost
        } else if !self.include_tones && is_toned(&entry.payload) {
            Verdict::ToneSuppressed
        } else {
            Verdict::Keep
        }
    }
}

impl Default for FilterPolicy {
    /// Keeps everything
    fn default() -> Self {
        Self {
            ignore: RegexSet::empty(),
            include_tones: true
        }
    }
}
