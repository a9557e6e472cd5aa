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

use std::str::FromStr;

use regex::Regex;

use crate::registry::status::EmojiStatus;

/// The title prefix of the auxiliary group holding skin tone and hair style modifiers
const COMPONENT_GROUP: &str = "Component";
/// The subgroup that lists the skin tone modifiers on their own
const SKIN_TONE_SUBGROUP: &str = "skin-tone";

/// What a single line of an `emoji-test.txt`-like file means for the extraction.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LineKind<'a> {
    /// A line that only defines a skin tone modifier (Emoji 11.0 lists them as
    /// `1F3FB ; fully-qualified # 🏻 light skin tone`) or the subgroup header announcing them.
    /// These carry no usable emoji.
    ToneDefinition,
    /// `# group: <title>`
    GroupHeader {
        title: &'a str,
        /// Whether this is the group of components, i.e. no real emojis
        component: bool
    },
    /// `# subgroup: <name>`
    SubgroupHeader(&'a str),
    /// A data line with the status `fully-qualified`
    QualifiedEntry,
    /// A data line with any other status; it won't make it into the dataset
    SkippedEntry(EmojiStatus),
    /// Comments, empty lines and everything else
    Other
}

impl<'a> LineKind<'a> {
    /// Classifies a line. The first rule that matches wins:
    /// 1. Skin tone definitions
    /// 2. Group headers
    /// 3. Subgroup headers
    /// 4. Data lines (by their status)
    /// 5. Anything else
    ///
    /// This never fails; lines that can't be recognized are [LineKind::Other].
    /// # Examples
    /// ```
    /// use emoji_extractor::registry::line_kind::LineKind;
    ///
    /// assert_eq!(LineKind::classify("# subgroup: face-smiling"), LineKind::SubgroupHeader("face-smiling"));
    /// assert_eq!(LineKind::classify("# subgroup: skin-tone"), LineKind::ToneDefinition);
    /// assert_eq!(LineKind::classify("# Smileys & Emotion subtotal:\t\t149"), LineKind::Other);
    /// ```
    pub fn classify(line: &'a str) -> Self {
        lazy_static! {
            static ref TONE_DEFINITION: Regex = Regex::new(r"^1F3F[B-F]\s+;").unwrap();
            static ref GROUP: Regex = Regex::new(r"^#\s*group:\s*(?P<title>.*?)\s*$").unwrap();
            static ref SUBGROUP: Regex = Regex::new(r"^#\s*subgroup:\s*(?P<name>.*?)\s*$").unwrap();
            static ref ENTRY: Regex = Regex::new(&format!(
                r"^[0-9A-Fa-f]{{1,8}}(\s+[0-9A-Fa-f]{{1,8}})*\s*;\s*(?P<status>{})\s*#",
                EmojiStatus::regex()
            )).unwrap();
        }

        if TONE_DEFINITION.is_match(line) {
            return LineKind::ToneDefinition;
        }

        if let Some(captures) = GROUP.captures(line) {
            let title = captures.name("title").map_or("", |title| title.as_str());
            return LineKind::GroupHeader {
                title,
                component: title.starts_with(COMPONENT_GROUP)
            };
        }

        if let Some(captures) = SUBGROUP.captures(line) {
            let name = captures.name("name").map_or("", |name| name.as_str());
            return if name == SKIN_TONE_SUBGROUP {
                LineKind::ToneDefinition
            } else {
                LineKind::SubgroupHeader(name)
            };
        }

        if let Some(captures) = ENTRY.captures(line) {
            // The regex only admits known statuses
            let status = captures.name("status")
                .and_then(|status| EmojiStatus::from_str(status.as_str()).ok())
                .unwrap_or_default();
            return if status.is_fully_qualified() {
                LineKind::QualifiedEntry
            } else {
                LineKind::SkippedEntry(status)
            };
        }

        LineKind::Other
    }
}
