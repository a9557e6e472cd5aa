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
//! Turns the text of an `emoji-test.txt` file into an [EmojiDataset].
//!
//! Every line is looked at exactly once: it is classified, data lines are decoded and filtered
//! and what remains is either added as a new record or as a tone variant of the previous one.

use serde::Serialize;

use crate::config::{ConfigError, ExtractorConfig};
use crate::dataset::category::TitleSchema;
use crate::dataset::compact::{compact, CompactDataset};
use crate::dataset::EmojiDataset;
use crate::extractor::errors::{LineDiagnostic, LineErrorKind};
use crate::extractor::filter::{FilterPolicy, Verdict};
use crate::extractor::router::CategoryRouter;
use crate::extractor::tones::{ToneAction, ToneAggregator};
use crate::registry::entry::{DecodedEntry, EntryLayout};
use crate::registry::line_kind::LineKind;

pub mod errors;
pub mod filter;
pub mod router;
pub mod tones;

/// Everything a single extraction needs to remember between lines.
/// A new one is created for every extraction.
#[derive(Debug, Clone, Default)]
pub struct ParserState {
    pub router: CategoryRouter,
    pub tones: ToneAggregator
}

/// The dataset, either complete or reduced to icons
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExtractedData {
    Full(EmojiDataset),
    Minimal(CompactDataset)
}

/// Counters for what happened to the lines of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ExtractionStats {
    /// Records in the dataset
    pub records: usize,
    /// Tone variants in the dataset
    pub tone_variants: usize,
    /// Entries matched by an ignore pattern
    pub ignored: usize,
    /// Tone variants dropped as tones are disabled
    pub tone_suppressed: usize,
    /// Entries that aren't fully-qualified
    pub not_fully_qualified: usize,
    /// Entries whose name already exists in their category
    pub duplicates: usize,
    /// Entries in front of the first known group
    pub uncategorized: usize,
    /// Lines whose payload couldn't be decoded
    pub malformed: usize
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub data: ExtractedData,
    pub diagnostics: Vec<LineDiagnostic>,
    pub stats: ExtractionStats
}

impl Extraction {
    /// The full dataset, if it hasn't been compacted
    pub fn dataset(&self) -> Option<&EmojiDataset> {
        match &self.data {
            ExtractedData::Full(dataset) => Some(dataset),
            ExtractedData::Minimal(_) => None
        }
    }
}

/// A reusable extraction setup. Extractions don't share any state, so one `Extractor` may
/// be used for many files, also from multiple threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    filter: FilterPolicy,
    layout: EntryLayout,
    schema: TitleSchema,
    minimal: bool
}

impl Extractor {
    pub fn new(filter: FilterPolicy, layout: EntryLayout) -> Self {
        Self {
            filter,
            layout,
            schema: TitleSchema::Any,
            minimal: false
        }
    }

    /// Compiles the filter of a configuration
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ConfigError> {
        let filter = FilterPolicy::new(&config.ignore, config.tones)?;
        let schema = config.source.version()
            .map(TitleSchema::for_version)
            .unwrap_or_default();
        Ok(Self::new(filter, config.entry_layout())
            .schema(schema)
            .minimal(config.minimal))
    }

    /// Restricts the group titles to those of one schema
    pub fn schema(mut self, schema: TitleSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Whether [Extractor::extract] should only keep the icons
    pub fn minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    pub fn layout(&self) -> EntryLayout {
        self.layout
    }

    /// Parses the text into a dataset and compacts it if requested.
    pub fn extract(&self, text: &str) -> Extraction {
        let (dataset, diagnostics, stats) = self.parse(text);
        let data = if self.minimal {
            ExtractedData::Minimal(compact(&dataset))
        } else {
            ExtractedData::Full(dataset)
        };
        Extraction {
            data,
            diagnostics,
            stats
        }
    }

    /// Parses the text into the full dataset, never compacting it.
    pub fn parse(&self, text: &str) -> (EmojiDataset, Vec<LineDiagnostic>, ExtractionStats) {
        let mut pass = Pass {
            extractor: self,
            state: ParserState {
                router: CategoryRouter::for_schema(self.schema),
                tones: ToneAggregator::new()
            },
            dataset: EmojiDataset::new(),
            diagnostics: Vec::new(),
            stats: ExtractionStats::default()
        };
        for (index, line) in text.lines().enumerate() {
            pass.line(index + 1, line);
        }

        let Pass { dataset, diagnostics, mut stats, .. } = pass;
        stats.records = dataset.len();
        stats.tone_variants = dataset.tone_count();
        info!("Extracted {} emojis with {} tone variants in {} categories ({} malformed lines)",
              stats.records,
              stats.tone_variants,
              dataset.categories().count(),
              stats.malformed);
        (dataset, diagnostics, stats)
    }
}

/// A single run over a file
struct Pass<'a> {
    extractor: &'a Extractor,
    state: ParserState,
    dataset: EmojiDataset,
    diagnostics: Vec<LineDiagnostic>,
    stats: ExtractionStats
}

impl<'a> Pass<'a> {
    fn line(&mut self, number: usize, line: &str) {
        match LineKind::classify(line) {
            LineKind::ToneDefinition | LineKind::Other => {}
            LineKind::GroupHeader { title, component: true } => debug!("Skipping group \"{}\"", title),
            LineKind::GroupHeader { title, component: false } => {
                if let Some(category) = self.state.router.open_group(title) {
                    self.dataset.open(category);
                }
                self.state.tones.reset();
            }
            LineKind::SubgroupHeader(_) => {
                if self.state.router.open_subgroup() {
                    self.state.tones.mark_boundary();
                }
            }
            LineKind::SkippedEntry(_) => self.stats.not_fully_qualified += 1,
            LineKind::QualifiedEntry => self.entry(number, line)
        }
    }

    fn entry(&mut self, number: usize, line: &str) {
        let entry = match DecodedEntry::decode(line, self.extractor.layout) {
            Ok(entry) => entry,
            Err(error) => {
                let diagnostic = LineDiagnostic {
                    line: number,
                    content: line.to_owned(),
                    kind: LineErrorKind::MalformedLineLayout(error)
                };
                warn!("{}", diagnostic);
                self.diagnostics.push(diagnostic);
                self.stats.malformed += 1;
                return;
            }
        };

        match self.extractor.filter.verdict(&entry) {
            Verdict::Keep => {}
            Verdict::Ignored => {
                debug!("Ignoring {}", entry.payload);
                self.stats.ignored += 1;
                return;
            }
            Verdict::ToneSuppressed => {
                self.stats.tone_suppressed += 1;
                return;
            }
        }

        let category = match self.state.router.current() {
            Some(category) => category,
            None => {
                if self.state.router.group_opened() {
                    debug!("No known group for {} in line {}", entry.payload, number);
                } else {
                    debug!("{} in line {} comes before the first group", entry.payload, number);
                }
                self.stats.uncategorized += 1;
                return;
            }
        };

        let records = self.dataset.open(category);
        if self.state.tones.accept(records, entry.icon, entry.name) == ToneAction::Duplicate {
            debug!("Duplicate emoji in line {}: {}", number, entry.payload);
            self.stats.duplicates += 1;
        }
    }
}
