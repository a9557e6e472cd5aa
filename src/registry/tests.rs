use crate::registry::entry::{DecodedEntry, EntryLayout, LayoutError};
use crate::registry::line_kind::LineKind;
use crate::registry::status::EmojiStatus;

const GRINNING: &str = "1F600                                      ; fully-qualified     # 😀 grinning face";
const KEYCAP: &str = "0023 FE0F 20E3                             ; fully-qualified     # #️⃣ keycap: #";
const WAVING_TONE: &str = "1F44B 1F3FB                                ; fully-qualified     # 👋🏻 waving hand: light skin tone";
const UNQUALIFIED: &str = "263A                                       ; unqualified         # ☺ smiling face";
const V13_ENTRY: &str = "1F44B 1F3FB                                            ; fully-qualified     # 👋🏻 E1.0 waving hand: light skin tone";

#[test]
fn test_classify_headers() {
    assert_eq!(
        LineKind::classify("# group: Smileys & Emotion"),
        LineKind::GroupHeader { title: "Smileys & Emotion", component: false }
    );
    assert_eq!(
        LineKind::classify("# group: Component"),
        LineKind::GroupHeader { title: "Component", component: true }
    );
    assert_eq!(LineKind::classify("# subgroup: hand-fingers-open"), LineKind::SubgroupHeader("hand-fingers-open"));
    assert_eq!(LineKind::classify("# subgroup: skin-tone"), LineKind::ToneDefinition);
}

#[test]
fn test_classify_entries() {
    assert_eq!(LineKind::classify(GRINNING), LineKind::QualifiedEntry);
    assert_eq!(LineKind::classify(V13_ENTRY), LineKind::QualifiedEntry);
    assert_eq!(LineKind::classify(UNQUALIFIED), LineKind::SkippedEntry(EmojiStatus::Unqualified));
    assert_eq!(
        LineKind::classify("1F636 200D 1F32B                           ; minimally-qualified # 😶‍🌫 face in clouds"),
        LineKind::SkippedEntry(EmojiStatus::MinimallyQualified)
    );
    // Emoji 11.0 lists the modifiers as fully-qualified emojis of their own
    assert_eq!(
        LineKind::classify("1F3FB                                      ; fully-qualified     # 🏻 light skin tone"),
        LineKind::ToneDefinition
    );
}

#[test]
fn test_classify_other() {
    assert_eq!(LineKind::classify(""), LineKind::Other);
    assert_eq!(LineKind::classify("# Version: 12.0"), LineKind::Other);
    assert_eq!(LineKind::classify("# fully-qualified : 3010"), LineKind::Other);
    assert_eq!(LineKind::classify("#EOF"), LineKind::Other);
}

#[test]
fn test_decode_fixed() {
    let entry = DecodedEntry::decode(GRINNING, EntryLayout::default()).unwrap();
    assert_eq!(entry.icon, "😀");
    assert_eq!(entry.name, "grinning face");

    let entry = DecodedEntry::decode(WAVING_TONE, EntryLayout::default()).unwrap();
    assert_eq!(entry.icon, "👋🏻");
    assert_eq!(entry.name, "waving hand: light skin tone");

    let entry = DecodedEntry::decode(KEYCAP, EntryLayout::default()).unwrap();
    assert_eq!(entry.name, "keycap: #");
}

#[test]
fn test_decode_layout_drift() {
    // An Emoji 13.0 line has a wider codepoint field, so column 67 lies in the middle of nowhere
    assert_eq!(
        DecodedEntry::decode(V13_ENTRY, EntryLayout::default()),
        Err(LayoutError::MisalignedColumn { column: 67 })
    );
    assert_eq!(
        DecodedEntry::decode("1F600 ; fully-qualified # 😀 grinning face", EntryLayout::default()),
        Err(LayoutError::TooShort { column: 67, length: 44 })
    );
    assert_eq!(
        DecodedEntry::decode("1F600 ; fully-qualified", EntryLayout::Delimited),
        Err(LayoutError::MissingDelimiter)
    );
}

#[test]
fn test_decode_delimited() {
    let entry = DecodedEntry::decode(V13_ENTRY, EntryLayout::Delimited).unwrap();
    assert_eq!(entry.icon, "👋🏻");
    assert_eq!(entry.name, "waving hand: light skin tone");
    assert_eq!(entry.payload, "👋🏻 waving hand: light skin tone");

    assert_eq!(EntryLayout::for_version((13, 1)), EntryLayout::Delimited);
    assert_eq!(EntryLayout::for_version((12, 1)), EntryLayout::Fixed(67));
}

#[test]
fn test_decode_empty_payload() {
    let line = format!("{:<43}; {:<20}# 😀", "1F600", "fully-qualified");
    assert_eq!(DecodedEntry::decode(&line, EntryLayout::default()), Err(LayoutError::EmptyPayload));
}
