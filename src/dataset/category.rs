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
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The categories an emoji dataset is divided into.
///
/// The order of the variants is the order in which the groups appear in `emoji-test.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Smiles,
    People,
    Nature,
    Food,
    Travel,
    Activity,
    Objects,
    Symbols,
    Flags
}

/// The generation of group titles that an alias belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSchema {
    /// Emoji 11.0 and earlier, where smileys and people share a group
    Emoji11,
    /// Emoji 12.0 and later
    Emoji12,
    /// Titles that haven't changed. As the schema of a file, it admits every title.
    Any
}

impl TitleSchema {
    /// The titles used by the files of an emoji version
    pub fn for_version(version: (u32, u32)) -> Self {
        if version.0 >= 12 {
            TitleSchema::Emoji12
        } else {
            TitleSchema::Emoji11
        }
    }

    /// Whether a file of this schema may use an alias of the given schema
    pub fn admits(&self, alias: TitleSchema) -> bool {
        *self == TitleSchema::Any || alias == TitleSchema::Any || *self == alias
    }
}

impl Default for TitleSchema {
    fn default() -> Self {
        TitleSchema::Any
    }
}

/// Maps the title of a `# group:` line to its category.
/// New titles only need to be added here.
pub const GROUP_ALIASES: &[(&str, Category, TitleSchema)] = &[
    ("Smileys & People", Category::People, TitleSchema::Emoji11),
    ("Smileys & Emotion", Category::Smiles, TitleSchema::Emoji12),
    ("People & Body", Category::People, TitleSchema::Emoji12),
    ("Animals & Nature", Category::Nature, TitleSchema::Any),
    ("Food & Drink", Category::Food, TitleSchema::Any),
    ("Travel & Places", Category::Travel, TitleSchema::Any),
    ("Activities", Category::Activity, TitleSchema::Any),
    ("Objects", Category::Objects, TitleSchema::Any),
    ("Symbols", Category::Symbols, TitleSchema::Any),
    ("Flags", Category::Flags, TitleSchema::Any),
];

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Smiles,
        Category::People,
        Category::Nature,
        Category::Food,
        Category::Travel,
        Category::Activity,
        Category::Objects,
        Category::Symbols,
        Category::Flags
    ];

    /// Looks up the category for a group title.
    /// Titles that are not in [GROUP_ALIASES] (like `Component`) don't have one.
    /// # Examples
    /// ```
    /// use emoji_extractor::dataset::category::Category;
    ///
    /// assert_eq!(Category::from_group_title("Smileys & People"), Some(Category::People));
    /// assert_eq!(Category::from_group_title("Smileys & Emotion"), Some(Category::Smiles));
    /// assert_eq!(Category::from_group_title("Component"), None);
    /// ```
    pub fn from_group_title(title: &str) -> Option<Category> {
        Self::from_group_title_in(title, TitleSchema::Any)
    }

    /// Like [Category::from_group_title], but only considers the aliases a file of the given
    /// schema can contain.
    /// # Examples
    /// ```
    /// use emoji_extractor::dataset::category::{Category, TitleSchema};
    ///
    /// assert_eq!(Category::from_group_title_in("Smileys & People", TitleSchema::Emoji11), Some(Category::People));
    /// assert_eq!(Category::from_group_title_in("Smileys & People", TitleSchema::Emoji12), None);
    /// assert_eq!(Category::from_group_title_in("Flags", TitleSchema::Emoji12), Some(Category::Flags));
    /// ```
    pub fn from_group_title_in(title: &str, schema: TitleSchema) -> Option<Category> {
        let title = title.trim();
        GROUP_ALIASES.iter()
            .find(|(alias, _, alias_schema)| *alias == title && schema.admits(*alias_schema))
            .map(|(_, category, _)| *category)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::Smiles => "smiles",
            Category::People => "people",
            Category::Nature => "nature",
            Category::Food => "food",
            Category::Travel => "travel",
            Category::Activity => "activity",
            Category::Objects => "objects",
            Category::Symbols => "symbols",
            Category::Flags => "flags"
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.key().fmt(f)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Category::ALL.iter()
            .find(|category| category.key() == key)
            .copied()
            .ok_or(key)
    }
}
