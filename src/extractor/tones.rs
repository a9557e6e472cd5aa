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
//! Grouping of skin tone variants under their base emoji.
//!
//! `emoji-test.txt` lists a base emoji directly followed by its tone variants, which use the base
//! name as a prefix (`waving hand`, `waving hand: light skin tone`, ...).
//! An emoji without tones is followed by an unrelated one without any marker, so a family only
//! ends when the _next_ entry doesn't share its prefix anymore.

use crate::dataset::EmojiRecord;
use crate::extractor::filter::{family_of, is_toned};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneState {
    /// There's no record that the next entry could belong to
    Idle,
    /// A record has just been added; the next entry might be its first tone variant
    PossibleToneStart,
    /// Entries of the same family are added as tone variants to the last record
    InToneSet
}

/// What [ToneAggregator::accept] did with an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneAction {
    /// Added as a new record
    Pushed,
    /// Added as the first tone variant of the last record
    OpenedToneSet,
    /// Added as another tone variant of the last record
    AppendedTone,
    /// Dropped, as there's already a record with this name
    Duplicate
}

#[derive(Debug, Clone)]
pub struct ToneAggregator {
    state: ToneState,
    boundary_pending: bool,
    last_name: String
}

impl ToneAggregator {
    pub fn new() -> Self {
        Self {
            state: ToneState::Idle,
            boundary_pending: false,
            last_name: String::new()
        }
    }

    pub fn state(&self) -> ToneState {
        self.state
    }

    /// The name of the last accepted entry
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// A new subgroup has begun. The next entry will not continue a tone family.
    pub fn mark_boundary(&mut self) {
        self.boundary_pending = true;
    }

    /// Forgets everything, e.g. because entries will go to another category
    pub fn reset(&mut self) {
        self.state = ToneState::Idle;
        self.boundary_pending = false;
        self.last_name.clear();
    }

    /// Adds an entry to the records of the current category, either as a new record or as a tone
    /// variant of the last one.
    /// # Examples
    /// ```
    /// use emoji_extractor::extractor::tones::{ToneAggregator, ToneAction};
    ///
    /// let mut records = Vec::new();
    /// let mut aggregator = ToneAggregator::new();
    /// assert_eq!(aggregator.accept(&mut records, "👋".into(), "waving hand".into()), ToneAction::Pushed);
    /// assert_eq!(aggregator.accept(&mut records, "👋🏻".into(), "waving hand: light skin tone".into()), ToneAction::OpenedToneSet);
    /// assert_eq!(aggregator.accept(&mut records, "👋🏼".into(), "waving hand: medium-light skin tone".into()), ToneAction::AppendedTone);
    /// assert_eq!(aggregator.accept(&mut records, "🤚".into(), "raised back of hand".into()), ToneAction::Pushed);
    ///
    /// assert_eq!(records.len(), 2);
    /// assert_eq!(records[0].tone_variants, vec!["👋🏻", "👋🏼"]);
    /// ```
    pub fn accept(&mut self, records: &mut Vec<EmojiRecord>, icon: String, name: String) -> ToneAction {
        if self.boundary_pending {
            self.boundary_pending = false;
            self.state = ToneState::Idle;
        }

        let same_family = family_of(&name) == family_of(&self.last_name);
        let joins_last = match self.state {
            ToneState::Idle => false,
            ToneState::PossibleToneStart => same_family && is_toned(&name),
            ToneState::InToneSet => same_family
        };

        if joins_last {
            if let Some(base) = records.last_mut() {
                base.tone_variants.push(icon);
                let action = if self.state == ToneState::InToneSet {
                    ToneAction::AppendedTone
                } else {
                    ToneAction::OpenedToneSet
                };
                self.state = ToneState::InToneSet;
                self.last_name = name;
                return action;
            }
        }

        let action = if records.iter().any(|record| record.name == name) {
            self.state = ToneState::Idle;
            ToneAction::Duplicate
        } else {
            records.push(EmojiRecord::new(icon, name.clone()));
            self.state = ToneState::PossibleToneStart;
            ToneAction::Pushed
        };
        self.last_name = name;
        action
    }
}

impl Default for ToneAggregator {
    fn default() -> Self {
        Self::new()
    }
}
