use std::str::FromStr;

use crate::dataset::{EmojiDataset, EmojiRecord};
use crate::dataset::category::{Category, GROUP_ALIASES, TitleSchema};
use crate::dataset::compact::{compact, CompactRecord};

fn record(icon: &str, name: &str, tones: &[&str]) -> EmojiRecord {
    let mut record = EmojiRecord::new(icon.to_string(), name.to_string());
    record.tone_variants = tones.iter().map(|tone| tone.to_string()).collect();
    record
}

fn sample_dataset() -> EmojiDataset {
    let mut dataset = EmojiDataset::new();
    dataset.open(Category::Smiles).push(record("😀", "grinning face", &[]));
    dataset.open(Category::People).push(record("✋", "raised hand", &["✋🏻", "✋🏿"]));
    dataset.open(Category::People).push(record("🤝", "handshake", &[]));
    dataset
}

#[test]
fn test_aliases() {
    for (title, category, _) in GROUP_ALIASES {
        assert_eq!(Category::from_group_title(title), Some(*category));
    }
    // Both generations route smileys somewhere
    assert!(GROUP_ALIASES.iter().any(|(_, _, schema)| *schema == TitleSchema::Emoji11));
    assert!(GROUP_ALIASES.iter().any(|(_, _, schema)| *schema == TitleSchema::Emoji12));
    assert_eq!(Category::from_group_title("People & Body"), Some(Category::People));
    assert_eq!(Category::from_group_title("Animals & Nature "), Some(Category::Nature));
    assert_eq!(Category::from_group_title("Extras"), None);
}

#[test]
fn test_category_keys() {
    for category in Category::ALL.iter() {
        assert_eq!(Category::from_str(category.key()), Ok(*category));
        assert_eq!(serde_json::to_string(category).unwrap(), format!("\"{}\"", category));
    }
    assert!(Category::from_str("component").is_err());
}

#[test]
fn test_dataset_queries() {
    let dataset = sample_dataset();
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.tone_count(), 2);
    assert_eq!(dataset.records(Category::People).len(), 2);
    assert!(dataset.records(Category::Flags).is_empty());
    assert!(!dataset.contains_category(Category::Flags));
    assert_eq!(dataset.get(Category::People, "raised hand").unwrap().icon, "✋");
    assert!(dataset.get(Category::Smiles, "raised hand").is_none());
    assert_eq!(dataset.categories().collect::<Vec<_>>(), vec![Category::Smiles, Category::People]);
}

#[test]
fn test_record_serialization() {
    let dataset = sample_dataset();
    let json = serde_json::to_value(&dataset).unwrap();
    assert_eq!(json["smiles"][0], serde_json::json!({"icon": "😀", "name": "grinning face"}));
    assert_eq!(
        json["people"][0],
        serde_json::json!({"icon": "✋", "name": "raised hand", "tones": ["✋🏻", "✋🏿"]})
    );

    let parsed: EmojiDataset = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, dataset);
}

#[test]
fn test_compact() {
    let dataset = sample_dataset();
    let compacted = compact(&dataset);

    assert_eq!(compacted[&Category::Smiles], vec![CompactRecord::Icon("😀".to_string())]);
    assert_eq!(
        compacted[&Category::People][0],
        CompactRecord::Toned("✋".to_string(), vec!["✋🏻".to_string(), "✋🏿".to_string()])
    );

    let json = serde_json::to_string(&compacted[&Category::People]).unwrap();
    assert_eq!(json, r#"[["✋",["✋🏻","✋🏿"]],"🤝"]"#);
}

#[test]
fn test_compact_keeps_icons() {
    let dataset = sample_dataset();
    let compacted = compact(&dataset);
    for (category, records) in dataset.iter() {
        let compact_records = &compacted[&category];
        assert_eq!(records.len(), compact_records.len());
        for (record, compact_record) in records.iter().zip(compact_records) {
            assert_eq!(record.icon, compact_record.icon());
            assert_eq!(record.tone_variants.as_slice(), compact_record.tone_variants());
        }
    }
}
