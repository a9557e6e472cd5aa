use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dataset::{EmojiDataset, EmojiRecord};
use crate::dataset::category::Category;

/// A record without its name: either just the icon or the icon with its tone variants.
/// Serializes to `"😀"` or `["✋", ["✋🏻", "✋🏿"]]` respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompactRecord {
    Icon(String),
    Toned(String, Vec<String>)
}

pub type CompactDataset = BTreeMap<Category, Vec<CompactRecord>>;

impl CompactRecord {
    pub fn icon(&self) -> &str {
        match self {
            CompactRecord::Icon(icon) => icon,
            CompactRecord::Toned(icon, _) => icon
        }
    }

    pub fn tone_variants(&self) -> &[String] {
        match self {
            CompactRecord::Icon(_) => &[],
            CompactRecord::Toned(_, tones) => tones.as_slice()
        }
    }
}

impl From<&EmojiRecord> for CompactRecord {
    fn from(record: &EmojiRecord) -> Self {
        if record.has_tones() {
            CompactRecord::Toned(record.icon.clone(), record.tone_variants.clone())
        } else {
            CompactRecord::Icon(record.icon.clone())
        }
    }
}

/// Drops the names of all records, keeping categories, icons and tone groupings.
/// # Examples
/// ```
/// use emoji_extractor::dataset::compact::{compact, CompactRecord};
/// use emoji_extractor::dataset::category::Category;
/// use emoji_extractor::dataset::{EmojiDataset, EmojiRecord};
///
/// let mut dataset = EmojiDataset::new();
/// dataset.open(Category::Smiles).push(EmojiRecord::new("😀".to_string(), "grinning face".to_string()));
///
/// let compacted = compact(&dataset);
/// assert_eq!(compacted[&Category::Smiles], vec![CompactRecord::Icon("😀".to_string())]);
/// ```
pub fn compact(dataset: &EmojiDataset) -> CompactDataset {
    dataset.iter()
        .map(|(category, records)| (category, records.iter().map(CompactRecord::from).collect::<Vec<_>>()))
        .collect()
}
