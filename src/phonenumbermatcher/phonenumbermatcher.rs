// Copyright (C) 2011 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::trace;

use super::{Leniency, PhoneNumberMatch, matcher_regexps::MATCHER_REG_EXPS};
use crate::{phonenumberutil::PhoneNumberUtil, regex_util::RegexConsume};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NotReady,
    Ready,
    Done,
}

/// Finds phone numbers in free text, in order of appearance.
///
/// Numbers without a country calling code are read as written in the
/// preferred region. Every candidate must pass the [`Leniency`] given at
/// construction. `max_tries` bounds the number of candidates parsed, which
/// caps the work done on text containing many digit runs.
///
/// ```ignore
/// for found in PhoneNumberMatcher::new(&util, text, "US", Leniency::Valid, 100) {
///     println!("{} at {}", found.raw_string(), found.start());
/// }
/// ```
pub struct PhoneNumberMatcher<'a> {
    util: &'a PhoneNumberUtil,
    text: &'a str,
    preferred_region: String,
    leniency: Leniency,
    max_tries: u64,
    state: State,
    /// The last match found, taken by `next`.
    last_match: Option<PhoneNumberMatch>,
    /// Byte offset in `text` to resume searching from.
    search_index: usize,
}

impl<'a> PhoneNumberMatcher<'a> {
    pub fn new(
        util: &'a PhoneNumberUtil,
        text: &'a str,
        preferred_region: &str,
        leniency: Leniency,
        max_tries: u64,
    ) -> Self {
        Self {
            util,
            text,
            preferred_region: preferred_region.to_owned(),
            leniency,
            max_tries,
            state: State::NotReady,
            last_match: None,
            search_index: 0,
        }
    }

    /// Returns whether another match is available, searching for it if
    /// needed.
    pub fn has_next(&mut self) -> bool {
        if self.state == State::NotReady {
            self.last_match = self.find(self.search_index);
            match &self.last_match {
                Some(found) => {
                    self.search_index = found.end();
                    self.state = State::Ready;
                }
                None => self.state = State::Done,
            }
        }
        self.state == State::Ready
    }

    /// Attempts to find the next subsequence in the searched sequence on or
    /// after `index` that represents a phone number.
    fn find(&mut self, mut index: usize) -> Option<PhoneNumberMatch> {
        while self.max_tries > 0 {
            let Some(found) = MATCHER_REG_EXPS.pattern.find_at(self.text, index) else {
                break;
            };
            let start = found.start();
            // Check for extra numbers at the end.
            let candidate = trim_after_first_match(
                &self.util.reg_exps.second_number_start_pattern,
                found.as_str(),
            );
            if let Some(phone_number_match) = self.extract_match(candidate, start) {
                return Some(phone_number_match);
            }
            index = start + candidate.len();
            self.max_tries -= 1;
        }
        None
    }

    /// Attempts to extract a match from a `candidate` found at `offset`.
    fn extract_match(&mut self, candidate: &str, offset: usize) -> Option<PhoneNumberMatch> {
        // Skip a match that is more likely to be a date.
        if MATCHER_REG_EXPS.slash_separated_dates.is_match(candidate) {
            trace!("Skipping date-like candidate '{}'", candidate);
            return None;
        }
        // Skip potential time-stamps.
        if MATCHER_REG_EXPS.time_stamps.is_match(candidate) {
            let following_text = &self.text[offset + candidate.len()..];
            if MATCHER_REG_EXPS.time_stamps_suffix.is_match(following_text) {
                trace!("Skipping time stamp candidate '{}'", candidate);
                return None;
            }
        }
        // Try to come up with a valid match given the entire candidate.
        self.parse_and_verify(candidate, offset)
            .or_else(|| self.extract_inner_match(candidate, offset))
    }

    /// Attempts to extract a match from `candidate` if the whole candidate
    /// does not qualify as a match.
    fn extract_inner_match(&mut self, candidate: &str, offset: usize) -> Option<PhoneNumberMatch> {
        let util = self.util;
        let unwanted_end_char_pattern = &util.reg_exps.unwanted_end_char_pattern;
        for possible_inner_match in &MATCHER_REG_EXPS.inner_matches {
            let mut is_first_match = true;
            for captures in possible_inner_match.captures_iter(candidate) {
                if self.max_tries == 0 {
                    break;
                }
                let Some(group) = captures.get(1) else {
                    continue;
                };
                if is_first_match {
                    // We should handle any group before this one too.
                    let whole = captures.get(0).map_or(0, |m| m.start());
                    let before = trim_after_first_match(unwanted_end_char_pattern, &candidate[..whole]);
                    if let Some(found) = self.parse_and_verify(before, offset) {
                        return Some(found);
                    }
                    self.max_tries -= 1;
                    is_first_match = false;
                    if self.max_tries == 0 {
                        break;
                    }
                }
                let inner = trim_after_first_match(unwanted_end_char_pattern, group.as_str());
                if let Some(found) = self.parse_and_verify(inner, offset + group.start()) {
                    return Some(found);
                }
                self.max_tries -= 1;
            }
        }
        None
    }

    /// Parses a phone number from the `candidate` using the util and verifies
    /// it matches the requested leniency. If parsing and verification succeed,
    /// a corresponding [`PhoneNumberMatch`] is returned, otherwise None.
    fn parse_and_verify(&self, candidate: &str, offset: usize) -> Option<PhoneNumberMatch> {
        // Check the candidate doesn't contain any formatting which would
        // indicate that it really isn't a phone number.
        if candidate.is_empty()
            || !MATCHER_REG_EXPS.matching_brackets.is_match(candidate)
            || MATCHER_REG_EXPS.pub_pages.is_match(candidate)
        {
            return None;
        }

        // If leniency is set to Valid or stricter, we also want to skip
        // numbers that are surrounded by Latin alphabetic characters, to skip
        // cases like abc8005001234 or 8005001234def.
        if self.leniency >= Leniency::Valid {
            // If the candidate is not at the start of the text, and does not
            // start with phone-number punctuation, check the previous
            // character.
            if offset > 0 && !MATCHER_REG_EXPS.lead_class.matches_start(candidate) {
                let previous_char = self.text[..offset].chars().next_back();
                if previous_char.is_some_and(is_rejected_neighbour) {
                    return None;
                }
            }
            let next_char = self.text[offset + candidate.len()..].chars().next();
            if next_char.is_some_and(is_rejected_neighbour) {
                return None;
            }
        }

        let mut number = self
            .util
            .parse_and_keep_raw_input(candidate, &self.preferred_region)
            .ok()?;
        if !self.leniency.verify(&number, candidate, self.util) {
            return None;
        }
        // We used parse_and_keep_raw_input to create this number, but for now
        // we don't return the extra values parsed.
        number.clear_country_code_source();
        number.clear_raw_input();
        number.clear_preferred_domestic_carrier_code();
        Some(PhoneNumberMatch::new(offset, candidate, number))
    }
}

impl Iterator for PhoneNumberMatcher<'_> {
    type Item = PhoneNumberMatch;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        // Remove from memory after use.
        self.state = State::NotReady;
        self.last_match.take()
    }
}

/// Cuts `candidate` where `pattern` first matches.
fn trim_after_first_match<'b>(pattern: &regex::Regex, candidate: &'b str) -> &'b str {
    match pattern.find(candidate) {
        Some(found) => &candidate[..found.start()],
        None => candidate,
    }
}

/// Letters of Latin script, '%' and currency symbols glued to a candidate
/// mean it is part of a word, an amount or a percentage.
fn is_rejected_neighbour(c: char) -> bool {
    is_invalid_punctuation_symbol(c) || is_latin_letter(c)
}

fn is_invalid_punctuation_symbol(c: char) -> bool {
    c == '%' || MATCHER_REG_EXPS.currency_symbol.is_match(c.encode_utf8(&mut [0; 4]))
}

/// Whether `letter` is a letter or combining mark of the Latin script
/// blocks. Letters of other scripts may be written next to numbers without
/// a space.
pub(super) fn is_latin_letter(letter: char) -> bool {
    let is_combining_mark = ('\u{0300}'..='\u{036F}').contains(&letter);
    if !letter.is_alphabetic() && !is_combining_mark {
        return false;
    }
    matches!(letter,
        '\u{0000}'..='\u{024F}'   // Basic Latin to Latin Extended-B
        | '\u{0300}'..='\u{036F}' // Combining Diacritical Marks
        | '\u{1E00}'..='\u{1EFF}' // Latin Extended Additional
    )
}
