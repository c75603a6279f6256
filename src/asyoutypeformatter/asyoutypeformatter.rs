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

use log::{debug, error};
use regex::Regex;

use crate::{
    metadata::{NumberFormat, PhoneMetadata},
    phonenumberutil::{
        PhoneNumberUtil,
        helper_constants::{DIGIT_PLACEHOLDER, NANPA_COUNTRY_CODE, REGION_CODE_FOR_NON_GEO_ENTITY},
    },
    regex_util::{RegexConsume, anchor_start, to_regex_replacement},
    string_util::to_ascii_digit,
};

/// Metadata used for regions the formatter knows nothing about. The
/// international prefix "NA" never matches digits, so only a leading plus
/// sign starts an international number.
static EMPTY_METADATA: LazyLock<PhoneMetadata> = LazyLock::new(|| PhoneMetadata {
    international_prefix: Some("NA".to_owned()),
    ..Default::default()
});

/// Normalized characters seen before the IDD, country calling code and
/// national prefix are extracted.
const MIN_LENGTH_FOR_EXTRACTION: usize = 6;
/// National number digits needed before a format is chosen.
const MIN_LEADING_DIGITS_LENGTH: usize = 4;
/// Longest national number a formatting template is built for.
const DIGIT_PATTERN_MATCHING_STRING: &str = "999999999999999";
const SEPARATOR_BEFORE_NATIONAL_NUMBER: char = ' ';

/// Formats phone numbers digit by digit as they are entered.
///
/// Obtain an instance through
/// [`PhoneNumberUtil::get_as_you_type_formatter`] and feed it one character
/// at a time with [`input_digit`](Self::input_digit); every call returns the
/// text to display. Call [`clear`](Self::clear) before starting a new number.
///
/// Digits and a leading plus sign drive the formatting, other punctuation is
/// echoed while fewer than six digits were seen and dropped afterwards.
/// Characters such as `*`, `#` or letters make the rest of the session a
/// verbatim passthrough.
pub struct AsYouTypeFormatter<'a> {
    util: &'a PhoneNumberUtil,
    default_metadata: &'a PhoneMetadata,
    current_metadata: &'a PhoneMetadata,

    current_output: String,
    formatting_template: String,
    /// Pattern of the format the template was built from.
    current_formatting_pattern: String,
    accrued_input: String,
    accrued_input_without_formatting: String,
    /// Cleared for good once the input cannot be formatted.
    able_to_format: bool,
    /// Set once the IDD, country calling code and national prefix have been
    /// looked for.
    prefix_extracted: bool,
    /// Whether the number carries an IDD, a plus sign or a national prefix.
    is_complete_number: bool,
    should_add_space_after_national_prefix: bool,
    extracted_national_prefix: String,
    prefix_before_national_number: String,
    national_number: String,
    possible_formats: Vec<&'a NumberFormat>,
    /// Byte offset in the template of the last filled placeholder.
    last_match_position: usize,
    /// Raw input length when the position was remembered.
    original_position: usize,
    /// Normalized input length when the position was remembered.
    position_to_remember: usize,
}

impl<'a> AsYouTypeFormatter<'a> {
    pub(crate) fn new(util: &'a PhoneNumberUtil, region_code: &str) -> Self {
        let default_metadata = Self::metadata_for_main_region(util, region_code);
        Self {
            util,
            default_metadata,
            current_metadata: default_metadata,
            current_output: String::new(),
            formatting_template: String::new(),
            current_formatting_pattern: String::new(),
            accrued_input: String::new(),
            accrued_input_without_formatting: String::new(),
            able_to_format: true,
            prefix_extracted: false,
            is_complete_number: false,
            should_add_space_after_national_prefix: false,
            extracted_national_prefix: String::new(),
            prefix_before_national_number: String::new(),
            national_number: String::new(),
            possible_formats: Vec::new(),
            last_match_position: 0,
            original_position: 0,
            position_to_remember: 0,
        }
    }

    /// The metadata of the main region of the calling code, formats of
    /// regions sharing a calling code live there.
    fn metadata_for_main_region(util: &'a PhoneNumberUtil, region_code: &str) -> &'a PhoneMetadata {
        let country_calling_code = util.get_country_code_for_region(region_code);
        let main_country = util.get_region_code_for_country_code(country_calling_code);
        util.get_metadata_for_region(main_country)
            .unwrap_or(&*EMPTY_METADATA)
    }

    /// Clears the internal state of the formatter, so it can be reused.
    pub fn clear(&mut self) {
        self.current_output.clear();
        self.accrued_input.clear();
        self.accrued_input_without_formatting.clear();
        self.formatting_template.clear();
        self.last_match_position = 0;
        self.current_formatting_pattern.clear();
        self.prefix_before_national_number.clear();
        self.extracted_national_prefix.clear();
        self.national_number.clear();
        self.able_to_format = true;
        self.prefix_extracted = false;
        self.is_complete_number = false;
        self.should_add_space_after_national_prefix = false;
        self.position_to_remember = 0;
        self.original_position = 0;
        self.possible_formats.clear();
        self.current_metadata = self.default_metadata;
    }

    /// Formats a phone number on-the-fly as each digit is entered.
    ///
    /// Returns the partially formatted phone number.
    pub fn input_digit(&mut self, next_char: char) -> &str {
        self.current_output = self.input_digit_with_option_to_remember_position(next_char, false);
        &self.current_output
    }

    /// Same as [`input_digit`](Self::input_digit), but remembers the position
    /// where `next_char` is inserted, so that it can be retrieved later by
    /// using [`get_remembered_position`](Self::get_remembered_position). The
    /// remembered position will be automatically adjusted if additional
    /// formatting characters are later inserted/removed in front of
    /// `next_char`.
    pub fn input_digit_and_remember_position(&mut self, next_char: char) -> &str {
        self.current_output = self.input_digit_with_option_to_remember_position(next_char, true);
        &self.current_output
    }

    /// Returns the current position in the partially formatted phone number
    /// of the character which was previously passed in as the parameter of
    /// [`input_digit_and_remember_position`](Self::input_digit_and_remember_position).
    /// Positions count characters, not bytes.
    pub fn get_remembered_position(&self) -> usize {
        if !self.able_to_format {
            return self.original_position;
        }
        let accrued_input_without_formatting: Vec<char> =
            self.accrued_input_without_formatting.chars().collect();
        let mut accrued_input_index = 0;
        let mut current_output_index = 0;
        for output_char in self.current_output.chars() {
            if accrued_input_index >= self.position_to_remember {
                break;
            }
            if accrued_input_without_formatting.get(accrued_input_index) == Some(&output_char) {
                accrued_input_index += 1;
            }
            current_output_index += 1;
        }
        current_output_index
    }

    fn input_digit_with_option_to_remember_position(
        &mut self,
        next_char: char,
        remember_position: bool,
    ) -> String {
        self.accrued_input.push(next_char);
        if remember_position {
            self.original_position = self.accrued_input.chars().count();
        }
        let normalized_char = match self.normalize_digit_or_leading_plus_sign(next_char) {
            Some(normalized_char) => normalized_char,
            None => {
                if Self::is_unsupported_character(next_char) {
                    debug!("Character '{}' cannot be formatted, echoing input", next_char);
                    self.able_to_format = false;
                }
                // Punctuation typed by the user is echoed until the formatter
                // takes over the layout.
                return if !self.able_to_format || !self.prefix_extracted {
                    self.accrued_input.clone()
                } else {
                    self.current_output.clone()
                };
            }
        };
        self.accrued_input_without_formatting.push(normalized_char);
        if remember_position {
            self.position_to_remember = self.accrued_input_without_formatting.len();
        }
        if !self.able_to_format {
            return self.accrued_input.clone();
        }

        if !self.prefix_extracted {
            if self.accrued_input_without_formatting.len() < MIN_LENGTH_FOR_EXTRACTION {
                return self.accrued_input.clone();
            }
            self.prefix_extracted = true;
            if !self.extract_prefix() {
                debug!(
                    "No country calling code in '{}', echoing input",
                    self.accrued_input_without_formatting
                );
                self.able_to_format = false;
                return self.accrued_input.clone();
            }
            return self.attempt_to_choose_formatting_pattern();
        }

        self.national_number.push(normalized_char);
        if self.possible_formats.is_empty() {
            return self.attempt_to_choose_formatting_pattern();
        }
        // The formatting patterns are already chosen.
        let temp_national_number = self.input_digit_helper(normalized_char);
        if !self.able_to_format {
            return self.accrued_input.clone();
        }
        self.narrow_down_possible_formats();
        if self.maybe_create_new_template() {
            return self.input_accrued_national_number();
        }
        match temp_national_number {
            Some(temp_national_number) if self.able_to_format => {
                self.append_national_number(&temp_national_number)
            }
            _ => self.accrued_input.clone(),
        }
    }

    /// Returns the ASCII form of a digit, or '+' when it is the first
    /// character typed.
    fn normalize_digit_or_leading_plus_sign(&self, next_char: char) -> Option<char> {
        if matches!(next_char, '+' | '\u{FF0B}') {
            return (self.accrued_input.chars().count() == 1).then_some('+');
        }
        to_ascii_digit(next_char)
    }

    fn is_unsupported_character(c: char) -> bool {
        matches!(c, '*' | '#' | ';' | ',' | '+' | '\u{FF0B}') || c.is_alphabetic()
    }

    /// Strips the IDD or plus sign and the country calling code, or the
    /// national prefix, off the digits accrued so far. Returns false when an
    /// international number has no known country calling code.
    fn extract_prefix(&mut self) -> bool {
        let normalized = self.accrued_input_without_formatting.clone();
        let Some(start_of_country_calling_code) = self.find_idd_end(&normalized) else {
            self.national_number = normalized;
            self.remove_national_prefix_from_national_number();
            debug!(
                "Extracted national prefix '{}' before '{}'",
                self.extracted_national_prefix, self.national_number
            );
            return true;
        };
        self.is_complete_number = true;
        self.prefix_before_national_number
            .push_str(&normalized[..start_of_country_calling_code]);
        if !normalized.starts_with('+') {
            self.prefix_before_national_number
                .push(SEPARATOR_BEFORE_NATIONAL_NUMBER);
        }

        let Some((country_code, national_number)) = self
            .util
            .extract_country_code(&normalized[start_of_country_calling_code..])
        else {
            return false;
        };
        self.national_number = national_number.to_owned();
        let mut buf = itoa::Buffer::new();
        self.prefix_before_national_number
            .push_str(buf.format(country_code));
        self.prefix_before_national_number
            .push(SEPARATOR_BEFORE_NATIONAL_NUMBER);

        let new_region_code = self.util.get_region_code_for_country_code(country_code);
        if new_region_code == REGION_CODE_FOR_NON_GEO_ENTITY {
            if let Some(metadata) = self
                .util
                .get_metadata_for_non_geographical_region(country_code)
            {
                self.current_metadata = metadata;
            }
        } else if new_region_code != self.default_metadata.id() {
            self.current_metadata = Self::metadata_for_main_region(self.util, new_region_code);
        }
        debug!(
            "Extracted country calling code {} before '{}'",
            country_code, self.national_number
        );
        true
    }

    /// Returns the end of a leading plus sign or international prefix.
    fn find_idd_end(&self, normalized: &str) -> Option<usize> {
        let international_prefix = self.current_metadata.international_prefix();
        let pattern = if international_prefix.is_empty() {
            anchor_start("\\+")
        } else {
            anchor_start(&format!("\\+|{}", international_prefix))
        };
        let regex = self.get_regex(&pattern)?;
        regex.find_start(normalized).map(|idd| idd.end())
    }

    fn is_nanpa_number_with_national_prefix(&self) -> bool {
        // For NANPA numbers beginning with 1[2-9], treat the 1 as the national
        // prefix. The reason is that national significant numbers in NANPA always
        // start with [2-9] after the national prefix. Numbers beginning with 1[01]
        // can only be short/emergency numbers, which don't need the national
        // prefix.
        let mut digits = self.national_number.chars();
        self.current_metadata.country_code == NANPA_COUNTRY_CODE
            && digits.next() == Some('1')
            && digits.next().is_some_and(|second| second != '0' && second != '1')
    }

    fn remove_national_prefix_from_national_number(&mut self) {
        let start_of_national_number = if self.is_nanpa_number_with_national_prefix() {
            self.prefix_before_national_number.push('1');
            self.prefix_before_national_number
                .push(SEPARATOR_BEFORE_NATIONAL_NUMBER);
            self.is_complete_number = true;
            1
        } else {
            let national_prefix_for_parsing = self.current_metadata.national_prefix_for_parsing();
            let prefix_end = if national_prefix_for_parsing.is_empty() {
                None
            } else {
                self.get_regex(&anchor_start(national_prefix_for_parsing))
                    .and_then(|regex| regex.find_start(&self.national_number).map(|m| m.end()))
            };
            // Since some national prefix patterns are entirely optional, check
            // that a national prefix could actually be extracted.
            match prefix_end.filter(|end| *end > 0) {
                Some(end) => {
                    self.is_complete_number = true;
                    self.prefix_before_national_number
                        .push_str(&self.national_number[..end]);
                    end
                }
                None => 0,
            }
        };
        self.extracted_national_prefix = self.national_number[..start_of_national_number].to_owned();
        self.national_number.drain(..start_of_national_number);
    }

    fn attempt_to_choose_formatting_pattern(&mut self) -> String {
        // We start to attempt to format only when at least MIN_LEADING_DIGITS_LENGTH
        // digits of national number (excluding national prefix) have been
        // entered.
        if self.national_number.len() < MIN_LEADING_DIGITS_LENGTH {
            return self.append_national_number(&self.national_number);
        }
        self.get_available_formats();
        if self.maybe_create_new_template() {
            self.input_accrued_national_number()
        } else {
            debug!("No format fits '{}', echoing input", self.national_number);
            self.accrued_input.clone()
        }
    }

    fn get_available_formats(&mut self) {
        let metadata = self.current_metadata;
        let is_international_number =
            self.is_complete_number && self.extracted_national_prefix.is_empty();
        let format_list =
            if is_international_number && !metadata.intl_number_format.is_empty() {
                &metadata.intl_number_format
            } else {
                &metadata.number_format
            };
        let possible_formats = format_list
            .iter()
            .filter(|format| self.is_format_applicable(format))
            .collect::<Vec<_>>();
        self.possible_formats = possible_formats;
        self.narrow_down_possible_formats();
    }

    /// Discards formats that are not relevant given the presence or absence
    /// of the national prefix, and formats that would drop digits.
    fn is_format_applicable(&self, format: &NumberFormat) -> bool {
        let rule_has_first_group_only = self
            .util
            .formatting_rule_has_first_group_only(format.national_prefix_formatting_rule());
        if !self.extracted_national_prefix.is_empty()
            && rule_has_first_group_only
            && !format.national_prefix_optional_when_formatting
            && format.domestic_carrier_code_formatting_rule.is_none()
        {
            // A number that had a national prefix cannot use a rule without one.
            // A rule with a carrier code formatting rule is kept since the national
            // prefix might actually be an extracted carrier code.
            return false;
        }
        if self.extracted_national_prefix.is_empty()
            && !self.is_complete_number
            && !rule_has_first_group_only
            && !format.national_prefix_optional_when_formatting
        {
            // This number was entered without a national prefix, and this
            // formatting rule requires one.
            return false;
        }
        self.util
            .is_format_eligible_for_as_you_type_formatter(&format.format)
    }

    fn narrow_down_possible_formats(&mut self) {
        let index_of_leading_digits_pattern = self
            .national_number
            .len()
            .saturating_sub(MIN_LEADING_DIGITS_LENGTH);
        let util = self.util;
        let leading_digits = &self.national_number;
        self.possible_formats.retain(|format| {
            if format.leading_digits_pattern.is_empty() {
                // Keep everything that isn't restricted by leading digits.
                return true;
            }
            let last_leading_digits_pattern =
                index_of_leading_digits_pattern.min(format.leading_digits_pattern.len() - 1);
            util.matches_start(
                &format.leading_digits_pattern[last_leading_digits_pattern],
                leading_digits,
            )
        });
    }

    fn maybe_create_new_template(&mut self) -> bool {
        // When there are multiple available formats, the formatter uses the first
        // format where a formatting template could be created.
        while let Some(&number_format) = self.possible_formats.first() {
            if self.current_formatting_pattern == number_format.pattern {
                return false;
            }
            if let Some(template) = self.create_formatting_template(number_format) {
                self.formatting_template = template;
                self.current_formatting_pattern = number_format.pattern.clone();
                self.should_add_space_after_national_prefix = number_format
                    .national_prefix_formatting_rule()
                    .contains(['-', ' ']);
                // With a new formatting template, the matched position using the
                // old template needs to be reset.
                self.last_match_position = 0;
                debug!("Formatting '{}' with template '{}'", self.national_number, self.formatting_template);
                return true;
            }
            self.possible_formats.remove(0);
        }
        self.able_to_format = false;
        false
    }

    /// Builds a template holding one placeholder per digit the format can
    /// take, None when the format cannot hold the digits entered so far.
    fn create_formatting_template(&self, format: &NumberFormat) -> Option<String> {
        let number_pattern = &format.pattern;
        // Formatting patterns with alternations can't be used for as-you-type
        // formatting.
        if number_pattern.contains('|') {
            return None;
        }
        // Replace anything in the form of [..] with \d, then any standalone
        // digit (not the one in d{}) with \d.
        let number_pattern = self
            .util
            .reg_exps
            .character_class_pattern
            .replace_all(number_pattern, "\\d");
        let number_pattern = generalize_standalone_digits(&number_pattern);

        // Creates a phone number consisting only of the digit 9 that matches the
        // number_pattern by applying the pattern to the longest phone number
        // string.
        let regex = self.get_regex(&number_pattern)?;
        let a_phone_number = regex.find(DIGIT_PATTERN_MATCHING_STRING)?.as_str();
        // No formatting template can be created if the number of digits entered
        // so far is longer than the maximum the current formatting rule can
        // accommodate.
        if a_phone_number.len() < self.national_number.len() {
            return None;
        }
        // Formats the number according to the format, then replaces each digit
        // with the placeholder.
        let template = regex.replace_all(a_phone_number, to_regex_replacement(&format.format));
        Some(template.replace('9', &DIGIT_PLACEHOLDER.to_string()))
    }

    /// Feeds every national number digit through the current template.
    fn input_accrued_national_number(&mut self) -> String {
        if self.national_number.is_empty() {
            return self.prefix_before_national_number.clone();
        }
        let national_number = self.national_number.clone();
        let mut temp_national_number = None;
        for digit in national_number.chars() {
            temp_national_number = self.input_digit_helper(digit);
        }
        match temp_national_number {
            Some(temp_national_number) if self.able_to_format => {
                self.append_national_number(&temp_national_number)
            }
            _ => self.accrued_input.clone(),
        }
    }

    /// Fills the next placeholder of the template. Returns the template up to
    /// and including that digit, None when no placeholder is left.
    fn input_digit_helper(&mut self, next_char: char) -> Option<String> {
        let Some(offset) = self.formatting_template[self.last_match_position..].find(DIGIT_PLACEHOLDER)
        else {
            // More digits are entered than we could handle, and there are no
            // other valid patterns to try.
            if self.possible_formats.len() == 1 {
                self.able_to_format = false;
            }
            self.current_formatting_pattern.clear();
            return None;
        };
        let position = self.last_match_position + offset;
        self.formatting_template.replace_range(
            position..position + DIGIT_PLACEHOLDER.len_utf8(),
            next_char.encode_utf8(&mut [0; 4]),
        );
        self.last_match_position = position;
        Some(self.formatting_template[..position + next_char.len_utf8()].to_owned())
    }

    /// Combines the national number with any prefix (IDD/+ and country code
    /// or national prefix) that was collected.
    fn append_national_number(&self, national_number: &str) -> String {
        let mut output = String::with_capacity(
            self.prefix_before_national_number.len() + national_number.len() + 1,
        );
        output.push_str(&self.prefix_before_national_number);
        if self.should_add_space_after_national_prefix
            && !self.prefix_before_national_number.is_empty()
            && !self
                .prefix_before_national_number
                .ends_with(SEPARATOR_BEFORE_NATIONAL_NUMBER)
        {
            // We want to add a space after the national prefix if the national
            // prefix formatting rule indicates that this would normally be done,
            // with the exception of the case where we already appended a space
            // because the NDD was surprisingly long.
            output.push(SEPARATOR_BEFORE_NATIONAL_NUMBER);
        }
        output.push_str(national_number);
        output
    }

    fn get_regex(&self, pattern: &str) -> Option<std::sync::Arc<Regex>> {
        match self.util.reg_exps.regexp_cache.get_regex(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                error!("Invalid regex! {}: {}", pattern, err);
                None
            }
        }
    }
}

/// Replaces every digit that is not part of a `{n,m}` quantifier with `\d`.
/// A digit counts as standalone when the two characters after it exist and
/// neither is ',' or '}'.
fn generalize_standalone_digits(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut generalized = String::with_capacity(pattern.len() + 8);
    for (index, c) in chars.iter().enumerate() {
        let is_standalone = c.is_ascii_digit()
            && chars
                .get(index + 1..index + 3)
                .is_some_and(|next| next.iter().all(|n| !matches!(n, ',' | '}')));
        if is_standalone {
            generalized.push_str("\\d");
        } else {
            generalized.push(*c);
        }
    }
    generalized
}

#[cfg(test)]
mod tests {
    use super::generalize_standalone_digits;

    #[test]
    fn standalone_digits_become_digit_classes() {
        assert_eq!("(\\d\\d)(\\d{4})", generalize_standalone_digits("(20)(\\d{4})"));
        assert_eq!("(\\d{1,3})", generalize_standalone_digits("(\\d{1,3})"));
        assert_eq!("(\\d{3})0", generalize_standalone_digits("(\\d{3})0"));
    }
}
