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
//! The categorized emoji dataset that an extraction produces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dataset::category::Category;

pub mod category;
/// Reduction of a dataset to icons only
pub mod compact;
#[cfg(test)]
mod tests;

/// A single emoji together with its skin tone variants.
///
/// Within a category, the name identifies the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// The emoji without any skin tone
    pub icon: String,
    pub name: String,
    /// The icons of the tone variants in the order of the file
    #[serde(rename = "tones", default, skip_serializing_if = "Vec::is_empty")]
    pub tone_variants: Vec<String>
}

impl EmojiRecord {
    pub fn new(icon: String, name: String) -> Self {
        Self {
            icon,
            name,
            tone_variants: Vec::new()
        }
    }

    pub fn has_tones(&self) -> bool {
        !self.tone_variants.is_empty()
    }
}

/// Records grouped by their category, each group in the order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiDataset {
    categories: BTreeMap<Category, Vec<EmojiRecord>>
}

impl EmojiDataset {
    /// Creates a new, empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sure the category exists in the dataset, even if it never gets any records.
    /// Existing records are kept.
    pub fn open(&mut self, category: Category) -> &mut Vec<EmojiRecord> {
        self.categories.entry(category).or_default()
    }

    /// Returns the records of a category (empty if it doesn't exist)
    pub fn records(&self, category: Category) -> &[EmojiRecord] {
        self.categories.get(&category)
            .map(|records| records.as_slice())
            .unwrap_or_default()
    }

    /// Finds a record by its name
    pub fn get(&self, category: Category, name: &str) -> Option<&EmojiRecord> {
        self.records(category).iter()
            .find(|record| record.name == name)
    }

    pub fn contains_category(&self, category: Category) -> bool {
        self.categories.contains_key(&category)
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[EmojiRecord])> {
        self.categories.iter()
            .map(|(category, records)| (*category, records.as_slice()))
    }

    /// The number of records over all categories (tone variants not included)
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of tone variants over all records
    pub fn tone_count(&self) -> usize {
        self.categories.values()
            .flatten()
            .map(|record| record.tone_variants.len())
            .sum()
    }
}

impl From<EmojiDataset> for BTreeMap<Category, Vec<EmojiRecord>> {
    fn from(dataset: EmojiDataset) -> Self {
        dataset.categories
    }
}

impl AsRef<BTreeMap<Category, Vec<EmojiRecord>>> for EmojiDataset {
    fn as_ref(&self) -> &BTreeMap<Category, Vec<EmojiRecord>> {
        &self.categories
    }
}
