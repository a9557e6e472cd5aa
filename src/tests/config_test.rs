use std::path::{Path, PathBuf};

use crate::config::{ConfigError, ConfigFormat, DEFAULT_IGNORE, ExtractorConfig};
use crate::dataset::category::Category;
use crate::dataset::{EmojiDataset, EmojiRecord};
use crate::extract;
use crate::extractor::{ExtractedData, Extractor};
use crate::output::OutputFormat;
use crate::registry::entry::EntryLayout;
use crate::source::Source;
use crate::tests::init_logger;

const JSON_CONFIG: &str = "test_files/config.json";
const YAML_CONFIG: &str = "test_files/config.yaml";
const TXT_CONFIG: &str = "test_files/config.txt";

fn small_dataset() -> EmojiDataset {
    let mut dataset = EmojiDataset::new();
    let mut waving = EmojiRecord::new("👋".to_string(), "waving hand".to_string());
    waving.tone_variants.push("👋🏻".to_string());
    dataset.open(Category::People).push(waving);
    dataset
}

#[test]
fn test_defaults() {
    let config = ExtractorConfig::default();
    assert_eq!(config.source, Source::Version((12, 0)));
    assert!(config.tones);
    assert!(!config.minimal);
    assert!(config.pretty);
    assert_eq!(config.ignore.len(), DEFAULT_IGNORE.len());
    assert_eq!(config.entry_layout(), EntryLayout::Fixed(67));
    assert_eq!(config.output_path(), PathBuf::from("emoji-v12.json"));
}

#[test]
fn test_json_config() {
    init_logger();
    let config = ExtractorConfig::from_file(Path::new(JSON_CONFIG)).unwrap();
    assert_eq!(config.source, Source::File(PathBuf::from("test_files/emoji-test-13.0.txt")));
    assert_eq!(config.entry_layout(), EntryLayout::Delimited);
    assert!(!config.tones);
    // Missing fields keep their defaults
    assert!(config.pretty);
    assert!(!config.minimal);
    // The extension of the output file wins
    assert_eq!(config.format, OutputFormat::Mjs);
    assert_eq!(config.output_format(), OutputFormat::Js);
    assert_eq!(config.output_path(), PathBuf::from("emoji-v13.js"));

    let extraction = extract(&config).unwrap();
    let dataset = extraction.dataset().unwrap();
    assert_eq!(dataset.records(Category::Smiles).len(), 1);
    assert!(!dataset.get(Category::People, "waving hand").unwrap().has_tones());
    assert_eq!(extraction.stats.ignored, 1);
    assert_eq!(extraction.stats.tone_suppressed, 1);
}

#[test]
fn test_yaml_config() {
    init_logger();
    let config = ExtractorConfig::from_file(Path::new(YAML_CONFIG)).unwrap();
    assert!(config.minimal);
    assert!(!config.pretty);
    assert_eq!(config.ignore, vec!["dog", "^🔴"]);

    let extraction = extract(&config).unwrap();
    let compacted = match extraction.data {
        ExtractedData::Minimal(compacted) => compacted,
        ExtractedData::Full(_) => panic!("The dataset hasn't been compacted")
    };
    // All dogs are gone, but the category is still there
    assert!(compacted[&Category::Nature].is_empty());
    assert_eq!(compacted[&Category::Smiles].len(), 6);
    let symbols: Vec<&str> = compacted[&Category::Symbols].iter()
        .map(|record| record.icon())
        .collect();
    assert_eq!(symbols, vec!["#️⃣", "*️⃣", "🟠"]);
}

#[test]
fn test_unknown_extension() {
    init_logger();
    assert_eq!(ConfigFormat::for_file(Path::new(TXT_CONFIG)), None);
    assert_eq!(ConfigFormat::for_extension("YML"), Some(ConfigFormat::Yaml));
    // Falls back to JSON
    let config = ExtractorConfig::from_file(Path::new(TXT_CONFIG)).unwrap();
    assert_eq!(config.source.version(), Some((12, 1)));
    assert_eq!(config.entry_layout(), EntryLayout::Fixed(67));
    assert_eq!(config.output_path(), PathBuf::from("emoji-v12.json"));
}

#[test]
fn test_invalid_pattern() {
    let config = ExtractorConfig {
        ignore: vec!["(unclosed".to_string()],
        ..ExtractorConfig::default()
    };
    match Extractor::from_config(&config) {
        Err(ConfigError::InvalidPattern(_)) => {}
        other => panic!("Expected an invalid pattern, got {:?}", other.map(|_| ()))
    }
}

#[test]
fn test_source_layout() {
    assert_eq!(Source::Version((13, 1)).entry_layout(), EntryLayout::Delimited);
    assert_eq!(Source::Version((11, 0)).entry_layout(), EntryLayout::Fixed(67));
    let url = Source::Url("https://unicode.org/Public/emoji/13.0/emoji-test.txt".to_string());
    assert_eq!(url.version(), Some((13, 0)));
    assert_eq!(url.entry_layout(), EntryLayout::Delimited);
    assert_eq!(Source::Url("https://example.com/emoji-test.txt".to_string()).version(), None);
    assert_eq!(Source::File(PathBuf::from("emoji-test.txt")).entry_layout(), EntryLayout::Fixed(67));
    assert_eq!(Source::Version((12, 0)).location(), "https://unicode.org/Public/emoji/12.0/emoji-test.txt");
}

#[test]
fn test_output_formats() {
    let dataset = small_dataset();

    let json = OutputFormat::Json.render(&dataset, false).unwrap();
    assert_eq!(String::from_utf8(json).unwrap(),
               r#"{"people":[{"icon":"👋","name":"waving hand","tones":["👋🏻"]}]}"#);

    let js = OutputFormat::Js.render(&dataset, false).unwrap();
    assert!(String::from_utf8(js).unwrap().starts_with("let data={\"people\""));

    let mjs = String::from_utf8(OutputFormat::Mjs.render(&dataset, true).unwrap()).unwrap();
    assert!(mjs.starts_with("let data = {\n    \"people\": [\n        {\n"));
    assert!(mjs.ends_with("}\n    ]\n};\nexport default data"));

    assert_eq!("esm".parse::<OutputFormat>(), Ok(OutputFormat::Mjs));
    assert_eq!(OutputFormat::for_file(Path::new("emoji.JS")), Some(OutputFormat::Js));
    assert_eq!(OutputFormat::for_file(Path::new("emoji.txt")), None);
}

#[test]
fn test_save() {
    init_logger();
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("emoji-v12.json");
    let dataset = small_dataset();
    OutputFormat::Json.save(&path, &dataset, true).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let parsed: EmojiDataset = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, dataset);

    // Saving again replaces the file
    OutputFormat::Json.save(&path, &EmojiDataset::new(), false).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
}
