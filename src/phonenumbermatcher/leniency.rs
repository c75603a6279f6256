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

use super::matcher_regexps::MATCHER_REG_EXPS;
use crate::{
    phonenumber::{CountryCodeSource, PhoneNumber},
    phonenumberutil::{MatchType, PhoneNumberFormat, PhoneNumberUtil},
};

/// Leniency when finding potential phone numbers in text segments. The
/// levels are ordered, each one accepts a subset of what the previous one
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Leniency {
    /// Phone numbers accepted are possible, but not necessarily valid.
    Possible,
    /// Phone numbers accepted are possible and valid. Numbers written in
    /// national format must have their national prefix present if it is
    /// usually written for a number of this type.
    Valid,
    /// Phone numbers accepted are valid and are grouped in a possible way for
    /// this locale. For example, a US number written as "65 02 53 00 00" is
    /// not accepted at this leniency level, whereas "650 253 0000",
    /// "650 2530000" or "6502530000" are. Numbers with more than one '/'
    /// symbol in the national significant number are also dropped.
    StrictGrouping,
    /// Phone numbers accepted are valid and are grouped in the same way that
    /// we would have formatted it, or as a single block. For example, a US
    /// number written as "650 2530000" is not accepted at this leniency
    /// level, whereas "650 253 0000" or "6502530000" are.
    ExactGrouping,
}

impl Leniency {
    /// Returns true if `number` is a verified number according to this
    /// leniency. `candidate` is the text the number was parsed from.
    pub(super) fn verify(self, number: &PhoneNumber, candidate: &str, util: &PhoneNumberUtil) -> bool {
        match self {
            Leniency::Possible => util.is_possible_number(number),
            Leniency::Valid => {
                util.is_valid_number(number)
                    && contains_only_valid_x_chars(number, candidate, util)
                    && is_national_prefix_present_if_required(number, util)
            }
            Leniency::StrictGrouping => {
                is_valid_grouping_candidate(number, candidate, util)
                    && check_number_grouping_is_valid(
                        number,
                        candidate,
                        util,
                        all_number_groups_remain_grouped,
                    )
            }
            Leniency::ExactGrouping => {
                is_valid_grouping_candidate(number, candidate, util)
                    && check_number_grouping_is_valid(
                        number,
                        candidate,
                        util,
                        all_number_groups_are_exactly_present,
                    )
            }
        }
    }
}

fn is_valid_grouping_candidate(number: &PhoneNumber, candidate: &str, util: &PhoneNumberUtil) -> bool {
    util.is_valid_number(number)
        && contains_only_valid_x_chars(number, candidate, util)
        && !contains_more_than_one_slash_in_national_number(number, candidate)
        && is_national_prefix_present_if_required(number, util)
}

/// An 'x' is only accepted as a carrier code marker ("xx" followed by the
/// number) or as an extension label followed by the extension digits.
fn contains_only_valid_x_chars(number: &PhoneNumber, candidate: &str, util: &PhoneNumberUtil) -> bool {
    let mut chars = candidate.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        if !matches!(c, 'x' | 'X') {
            continue;
        }
        let Some(&(next_index, next_char)) = chars.peek() else {
            break;
        };
        if matches!(next_char, 'x' | 'X') {
            // This is the carrier code case, in which the 'X's always precede
            // the national significant number.
            chars.next();
            if util.is_number_match_with_one_string(number, &candidate[next_index..]) != MatchType::NsnMatch {
                return false;
            }
        } else if PhoneNumberUtil::normalize_digits_only(&candidate[index..]) != number.extension() {
            // This is the extension sign case, in which the 'x' or 'X' should
            // always precede the extension number.
            return false;
        }
    }
    true
}

fn is_national_prefix_present_if_required(number: &PhoneNumber, util: &PhoneNumberUtil) -> bool {
    // First, check how we deduced the country code. If it was written in
    // international format, then the national prefix is not required.
    if number.country_code_source() != Some(CountryCodeSource::FromDefaultCountry) {
        return true;
    }
    let phone_number_region = util.get_region_code_for_country_code(number.country_code());
    let Some(metadata) = util.get_metadata_for_region(phone_number_region) else {
        return true;
    };
    // Check if a national prefix should be present when formatting this
    // number.
    let national_number = PhoneNumberUtil::get_national_significant_number(number);
    let Some(format_rule) =
        util.choose_formatting_pattern_for_number(&metadata.number_format, &national_number)
    else {
        return true;
    };
    // To do this, we check that a national prefix formatting rule was present
    // and that it wasn't just the first-group symbol ($1) with punctuation.
    let national_prefix_formatting_rule = format_rule.national_prefix_formatting_rule();
    if national_prefix_formatting_rule.is_empty()
        || format_rule.national_prefix_optional_when_formatting
        || util.formatting_rule_has_first_group_only(national_prefix_formatting_rule)
    {
        return true;
    }
    // Normalize the remainder.
    let raw_input = PhoneNumberUtil::normalize_digits_only(number.raw_input());
    // Check if we found a national prefix and/or carrier code at the start of
    // the raw input, and return the result.
    util.maybe_strip_national_prefix_and_carrier_code(&raw_input, metadata)
        .is_some()
}

fn contains_more_than_one_slash_in_national_number(number: &PhoneNumber, candidate: &str) -> bool {
    let Some(first_slash_in_body_index) = candidate.find('/') else {
        // No slashes, this is okay.
        return false;
    };
    let after_first_slash = &candidate[first_slash_in_body_index + 1..];
    let Some(second_slash_in_body_index) = after_first_slash.find('/') else {
        // Only one slash, this is okay.
        return false;
    };

    // If the first slash is after the country calling code, this is permitted.
    let candidate_has_country_code = matches!(
        number.country_code_source(),
        Some(CountryCodeSource::FromNumberWithPlusSign | CountryCodeSource::FromNumberWithoutPlusSign)
    );
    let mut buf = itoa::Buffer::new();
    if candidate_has_country_code
        && PhoneNumberUtil::normalize_digits_only(&candidate[..first_slash_in_body_index])
            == buf.format(number.country_code())
    {
        // Any more slashes and this is illegal.
        return after_first_slash[second_slash_in_body_index + 1..].contains('/');
    }
    true
}

type NumberGroupingChecker = fn(&PhoneNumberUtil, &PhoneNumber, &str, &[&str]) -> bool;

fn check_number_grouping_is_valid(
    number: &PhoneNumber,
    candidate: &str,
    util: &PhoneNumberUtil,
    checker: NumberGroupingChecker,
) -> bool {
    let normalized_candidate = PhoneNumberUtil::normalize_digits(candidate, true);
    let rfc3966_format = util.format(number, PhoneNumberFormat::RFC3966);
    let formatted_number_groups = get_national_number_groups(&rfc3966_format);
    checker(util, number, &normalized_candidate, &formatted_number_groups)
}

/// Splits the national part of an RFC3966 formatted number into its groups,
/// e.g. "tel:+1-650-253-0000;ext=12" gives ["650", "253", "0000"].
fn get_national_number_groups(rfc3966_format: &str) -> Vec<&str> {
    // We remove the extension part from the formatted string before splitting
    // it into different groups.
    let end_index = rfc3966_format.find(';').unwrap_or(rfc3966_format.len());
    // The country-code will have a '-' following it.
    let start_index = rfc3966_format.find('-').map_or(0, |index| index + 1);
    rfc3966_format
        .get(start_index..end_index)
        .map(|national| national.split('-').collect())
        .unwrap_or_default()
}

fn all_number_groups_remain_grouped(
    util: &PhoneNumberUtil,
    number: &PhoneNumber,
    normalized_candidate: &str,
    formatted_number_groups: &[&str],
) -> bool {
    let mut from_index = 0;
    if number.country_code_source() != Some(CountryCodeSource::FromDefaultCountry) {
        // First skip the country code if the normalized candidate contained it.
        let mut buf = itoa::Buffer::new();
        let country_code = buf.format(number.country_code());
        from_index = normalized_candidate
            .find(country_code)
            .map_or(0, |index| index + country_code.len());
    }
    // Check each group of consecutive digits are not broken into separate
    // groupings in the normalized candidate.
    for (i, group) in formatted_number_groups.iter().enumerate() {
        // Fails if the substring of normalized_candidate starting from
        // from_index doesn't contain the consecutive digits in group.
        let Some(found) = normalized_candidate
            .get(from_index..)
            .and_then(|rest| rest.find(group))
        else {
            return false;
        };
        // Moves from_index forward.
        from_index += found + group.len();
        if i == 0 && from_index < normalized_candidate.len() {
            // We are at the position right after the NDC. We get the region
            // used for formatting information based on the country code in the
            // phone number, rather than the number itself, as we do not need to
            // distinguish between different countries with the same country
            // calling code and this is faster.
            let region = util.get_region_code_for_country_code(number.country_code());
            if util.get_ndd_prefix_for_region(region, true).is_some()
                && normalized_candidate[from_index..].starts_with(|c: char| c.is_ascii_digit())
            {
                // This means there is no formatting symbol after the NDC. In
                // this case, we only accept the number if there is no formatting
                // symbol at all in the number, except for extensions. This is
                // only important for countries with national prefixes.
                let national_significant_number = PhoneNumberUtil::get_national_significant_number(number);
                return normalized_candidate[from_index - group.len()..]
                    .starts_with(&national_significant_number);
            }
        }
    }
    // The check here makes sure that we haven't mistakenly already used the
    // extension to match the last group of the subscriber number. Note the
    // extension cannot have formatting in-between digits.
    normalized_candidate[from_index..].contains(number.extension())
}

fn all_number_groups_are_exactly_present(
    _util: &PhoneNumberUtil,
    number: &PhoneNumber,
    normalized_candidate: &str,
    formatted_number_groups: &[&str],
) -> bool {
    let mut candidate_groups: Vec<&str> = MATCHER_REG_EXPS.non_digits.split(normalized_candidate).collect();
    while candidate_groups.last().is_some_and(|group| group.is_empty()) {
        candidate_groups.pop();
    }
    if candidate_groups.is_empty() {
        return false;
    }
    // Set this to the last group, skipping it if the number has an extension.
    let mut candidate_number_group_index = candidate_groups.len() as isize - 1;
    if number.has_extension() {
        candidate_number_group_index -= 1;
    }
    // First we check if the national significant number is formatted as a
    // block. We use contains and not equals, since the national significant
    // number may be present with a prefix such as a national number prefix, or
    // the country code itself.
    let national_significant_number = PhoneNumberUtil::get_national_significant_number(number);
    if candidate_groups.len() == 1
        || group_at(&candidate_groups, candidate_number_group_index)
            .is_some_and(|group| group.contains(&national_significant_number))
    {
        return true;
    }
    // Starting from the end, go through in reverse, excluding the first group,
    // and check the candidate and number groups are the same.
    let mut formatted_number_group_index = formatted_number_groups.len() as isize - 1;
    while formatted_number_group_index > 0 && candidate_number_group_index >= 0 {
        if group_at(&candidate_groups, candidate_number_group_index)
            != group_at(formatted_number_groups, formatted_number_group_index)
        {
            return false;
        }
        formatted_number_group_index -= 1;
        candidate_number_group_index -= 1;
    }
    // Now check the first group. There may be a national prefix at the start,
    // so we only check that the candidate group ends with the formatted number
    // group.
    match (
        group_at(&candidate_groups, candidate_number_group_index),
        formatted_number_groups.first(),
    ) {
        (Some(candidate_group), Some(first_group)) => candidate_group.ends_with(first_group),
        _ => false,
    }
}

fn group_at<'a>(groups: &[&'a str], index: isize) -> Option<&'a str> {
    usize::try_from(index)
        .ok()
        .and_then(|index| groups.get(index).copied())
}
