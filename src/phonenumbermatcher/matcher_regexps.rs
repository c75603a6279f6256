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

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    phonenumberutil::{
        helper_constants::{MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, PLUS_CHARS, VALID_PUNCTUATION},
        helper_functions::create_extn_pattern,
        phone_number_regexps_and_mappings::{constant_large_regex, constant_regex},
    },
    regex_util::{anchor_full_match, anchor_start},
};

pub(super) static MATCHER_REG_EXPS: LazyLock<MatcherRegExps> = LazyLock::new(MatcherRegExps::new);

const OPENING_PARENS: &str = "(\\[\u{FF08}\u{FF3B}";
const CLOSING_PARENS: &str = ")\\]\u{FF09}\u{FF3D}";

fn limit(lower: usize, upper: usize) -> String {
    format!("{{{},{}}}", lower, upper)
}

/// Patterns used to find phone number candidates in free text and to
/// discard candidates that are something else.
pub(super) struct MatcherRegExps {
    /// Finds phone number candidates: up to two lead characters, digit blocks
    /// separated by punctuation and an optional extension. Case-insensitive
    /// for the extension labels.
    pub pattern: Regex,

    /// Characters that may open a number, brackets and plus signs.
    pub lead_class: Regex,

    /// Accepts a candidate only when its brackets are balanced and not
    /// nested, with at most three bracketed groups after the first one.
    pub matching_brackets: Regex,

    /// Page references of publications, e.g. "211-227 (2003)".
    pub pub_pages: Regex,

    /// Dates such as "08/31/95".
    pub slash_separated_dates: Regex,

    /// Time stamps such as "2012-01-02 08". A following ":00" confirms it.
    pub time_stamps: Regex,
    pub time_stamps_suffix: Regex,

    /// Splits a candidate into smaller candidates, tried in order when the
    /// whole candidate is not a number. Group 1 holds the part after the
    /// break.
    pub inner_matches: [Regex; 6],

    pub non_digits: Regex,

    pub currency_symbol: Regex,
}

impl MatcherRegExps {
    fn new() -> Self {
        let non_parens = format!("[^{}{}]", OPENING_PARENS, CLOSING_PARENS);
        let matching_brackets = format!(
            "(?:[{open}])?(?:{non_parens}+[{close}])?{non_parens}+(?:[{open}]{non_parens}+[{close}]){pair_limit}{non_parens}*",
            open = OPENING_PARENS,
            close = CLOSING_PARENS,
            non_parens = non_parens,
            pair_limit = limit(0, 3),
        );

        // Limit on the number of leading (plus) characters.
        let lead_limit = limit(0, 2);
        // Limit on the number of consecutive punctuation characters.
        let punctuation_limit = limit(0, 4);
        // The maximum number of digits allowed in a digit-separated block. As we
        // allow all digits in a single block, set high enough to accommodate the
        // entire national number and the international country code.
        let digit_block_limit = MAX_LENGTH_FOR_NSN + MAX_LENGTH_COUNTRY_CODE;
        // Limit on the number of blocks separated by punctuation. Uses
        // digit_block_limit since some formats use spaces to separate each
        // digit.
        let block_limit = limit(0, digit_block_limit);
        let punctuation = format!("[{}]{}", VALID_PUNCTUATION, punctuation_limit);
        let digit_sequence = format!("\\p{{Nd}}{}", limit(1, digit_block_limit));
        let lead_class = format!("[{}{}]", OPENING_PARENS, PLUS_CHARS);

        let pattern = format!(
            "(?i)(?:{lead_class}{punctuation}){lead_limit}{digit_sequence}(?:{punctuation}{digit_sequence}){block_limit}(?:{extn})?",
            extn = create_extn_pattern(false),
        );

        Self {
            pattern: constant_large_regex(&pattern),
            lead_class: constant_regex(&anchor_start(&lead_class)),
            matching_brackets: constant_regex(&anchor_full_match(&matching_brackets)),
            pub_pages: constant_regex("\\d{1,5}-+\\d{1,5}\\s{0,4}\\(\\d{1,4}"),
            slash_separated_dates: constant_regex(
                "(?:(?:[0-3]?\\d/[01]?\\d)|(?:[01]?\\d/[0-3]?\\d))/(?:[12]\\d)?\\d{2}",
            ),
            time_stamps: constant_regex("[12]\\d{3}[-/]?[01]\\d[-/]?[0-3]\\d +[0-2]\\d$"),
            time_stamps_suffix: constant_regex("^:[0-5]\\d"),
            inner_matches: [
                // Breaks on the slash, e.g. "651-234-2345/332-445-1234".
                constant_regex("/+(.*)"),
                // The bracket is inside the capturing group since it is part
                // of the number, e.g. "(650) 223 3345 (754) 223 3321".
                constant_regex("(\\([^(]*)"),
                // Breaks on a hyphen with a space on either side, e.g.
                // "12345 - 332-445-1234 is my number."
                constant_regex("(?:\\p{Z}-|-\\p{Z})\\p{Z}*(.+)"),
                // Various types of wide hyphens, no space required.
                constant_regex("[\u{2012}-\u{2015}\u{FF0D}]\\p{Z}*(.+)"),
                // Breaks on a full stop, e.g. "12345. 332-445-1234 is my number."
                constant_regex("\\.+\\p{Z}*([^.]+)"),
                // Breaks on space, e.g. "3324451234 8002341234".
                constant_regex("\\p{Z}+(\\P{Z}+)"),
            ],
            non_digits: constant_regex("\\D+"),
            currency_symbol: constant_regex("\\p{Sc}"),
        }
    }
}
