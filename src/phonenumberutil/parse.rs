// Copyright (C) 2009 The Libphonenumber Authors
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

use log::{error, trace};

use super::{
    NumberLengthType, PhoneNumberType, PhoneNumberUtil,
    errors::{ExtractNumberError, NotANumberError, ParseError, ValidationError},
    helper_constants::{
        MAX_INPUT_STRING_LENGTH, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN,
        PLUS_SIGN, RFC3966_ISDN_SUBADDRESS, RFC3966_PHONE_CONTEXT, RFC3966_PREFIX,
    },
    helper_functions::normalize_helper,
    helper_types::{PhoneNumberWithCountryCodeSource, StrippedNationalPrefix},
};
use crate::{
    metadata::PhoneMetadata,
    phonenumber::{CountryCodeSource, PhoneNumber},
    regex_util::{RegexConsume, anchor_start, to_regex_replacement},
    string_util::{is_decimal_digit, to_ascii_digit},
};

/// Placeholder IDD used when there is no default region, never matches
/// normalized digits.
const NON_MATCHING_IDD: &str = "NonMatch";

impl PhoneNumberUtil {
    /// Parses a string and returns it as a phone number.
    ///
    /// `default_region` is only used if the number being parsed is not written
    /// in international format, the country calling code is then set to that
    /// of the region. Use "ZZ" (or any unknown code) when the number is
    /// guaranteed to start with a plus sign.
    ///
    /// The input may contain formatting, an extension, alpha characters or
    /// be an RFC3966 `tel:` URI.
    pub fn parse(&self, number_to_parse: &str, default_region: &str) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, false, true)
    }

    /// Same as [`Self::parse`] but also records the raw input, where the
    /// country calling code came from and the domestic carrier code found.
    pub fn parse_and_keep_raw_input(
        &self,
        number_to_parse: &str,
        default_region: &str,
    ) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, true, true)
    }

    /// Parses a string and fills up the phone number. This method is the same
    /// as the public parse() method, with the exception that it allows the
    /// default region to be unknown, for use by is_number_match(). When
    /// `check_region` is false the number may omit the plus sign even without
    /// a valid default region.
    pub(crate) fn parse_helper(
        &self,
        number_to_parse: &str,
        default_region: &str,
        keep_raw_input: bool,
        check_region: bool,
    ) -> Result<PhoneNumber, ParseError> {
        if number_to_parse.len() > MAX_INPUT_STRING_LENGTH {
            trace!("Input of {} bytes is too long to be a phone number", number_to_parse.len());
            return Err(ParseError::TooLongNsn);
        }
        let mut national_number = self.build_national_number_for_parsing(number_to_parse)?;

        if !self.is_viable_phone_number(&national_number) {
            trace!("The string supplied did not seem to be a phone number '{}'", national_number);
            if !national_number.is_empty() && national_number.chars().all(is_decimal_digit) {
                return Err(ParseError::TooShortNsn);
            }
            return Err(NotANumberError::NotMatchedValidNumberPattern.into());
        }

        // Check the region supplied is valid, or that the extracted number starts
        // with some sort of + sign so the number's region can be determined.
        if check_region && !self.check_region_for_parsing(&national_number, default_region) {
            trace!("Missing or invalid default country.");
            return Err(ParseError::InvalidCountryCode);
        }

        let mut phone_number = PhoneNumber::new();
        if keep_raw_input {
            phone_number.set_raw_input(number_to_parse);
        }
        // Attempt to parse extension first, since it doesn't require
        // region-specific data and we want to have the non-normalised number here.
        if let Some(extension) = self.maybe_strip_extension(&mut national_number) {
            phone_number.set_extension(extension);
        }

        let mut region_metadata = self.get_metadata_for_region(default_region);
        // Check to see if the number is given in international format so we know
        // whether this number is from the default region or not.
        let (mut country_code, extracted_national_number) = match self.maybe_extract_country_code(
            &national_number,
            region_metadata,
            keep_raw_input,
            &mut phone_number,
        ) {
            Ok(extracted) => extracted,
            Err(ParseError::InvalidCountryCode) => {
                let Some(plus_chars) = self.reg_exps.plus_chars_pattern.find(&national_number)
                else {
                    return Err(ParseError::InvalidCountryCode);
                };
                // Strip the plus-char, and try again.
                let extracted = self.maybe_extract_country_code(
                    &national_number[plus_chars.end()..],
                    region_metadata,
                    keep_raw_input,
                    &mut phone_number,
                )?;
                if extracted.0 == 0 {
                    trace!("Could not interpret numbers after plus-sign.");
                    return Err(ParseError::InvalidCountryCode);
                }
                extracted
            }
            Err(err) => return Err(err),
        };

        let mut normalized_national_number = if country_code != 0 {
            let phone_number_region = self.get_region_code_for_country_code(country_code);
            if phone_number_region != default_region {
                // Metadata cannot be missing because the country calling code is valid.
                region_metadata =
                    self.get_metadata_for_region_or_calling_code(country_code, phone_number_region);
            }
            extracted_national_number
        } else {
            // If no extracted country calling code, use the region supplied instead.
            // The national number is just the normalized version of the number we
            // were given to parse.
            if let Some(metadata) = region_metadata {
                country_code = metadata.country_code;
            } else if keep_raw_input {
                phone_number.clear_country_code_source();
            }
            self.normalize(&national_number)
        };
        phone_number.set_country_code(country_code);

        if normalized_national_number.len() < MIN_LENGTH_FOR_NSN {
            trace!("The string supplied is too short to be a phone number.");
            return Err(ParseError::TooShortNsn);
        }

        if let Some(metadata) = region_metadata {
            if let Some(stripped) =
                self.maybe_strip_national_prefix_and_carrier_code(&normalized_national_number, metadata)
            {
                // We require that the NSN remaining after stripping the national
                // prefix and carrier code be long enough to be a possible length for
                // the region. Otherwise, we don't do the stripping, since the original
                // number could be a valid short number.
                let validation_result = self.test_number_length(
                    &stripped.national_number,
                    metadata,
                    PhoneNumberType::Unknown,
                );
                if !matches!(
                    validation_result,
                    Err(ValidationError::TooShort)
                        | Ok(NumberLengthType::IsPossibleLocalOnly)
                        | Err(ValidationError::InvalidLength)
                ) {
                    normalized_national_number = stripped.national_number;
                    if keep_raw_input {
                        if let Some(carrier_code) = stripped.carrier_code.filter(|c| !c.is_empty()) {
                            phone_number.set_preferred_domestic_carrier_code(carrier_code);
                        }
                    }
                }
            }
        }

        let length_of_national_number = normalized_national_number.len();
        if length_of_national_number < MIN_LENGTH_FOR_NSN {
            trace!("The string supplied is too short to be a phone number.");
            return Err(ParseError::TooShortNsn);
        }
        if length_of_national_number > MAX_LENGTH_FOR_NSN {
            trace!("The string supplied is too long to be a phone number.");
            return Err(ParseError::TooLongNsn);
        }
        Self::set_italian_leading_zeros(&normalized_national_number, &mut phone_number);
        let national_number = normalized_national_number
            .parse::<u64>()
            .map_err(NotANumberError::FailedToParseNumberAsInt)?;
        phone_number.set_national_number(national_number);
        Ok(phone_number)
    }

    /// Converts a number to a form that we can parse and writes it to
    /// `national_number` if it were written in the RFC3966; otherwise extracts
    /// a possible number out of it.
    fn build_national_number_for_parsing(&self, number_to_parse: &str) -> Result<String, ParseError> {
        let mut national_number = String::with_capacity(number_to_parse.len());
        if let Some(index_of_phone_context) = number_to_parse.find(RFC3966_PHONE_CONTEXT) {
            let phone_context = Self::extract_phone_context(number_to_parse, index_of_phone_context);
            if !self.is_phone_context_valid(phone_context) {
                trace!("The phone-context value '{}' is invalid.", phone_context);
                return Err(NotANumberError::InvalidPhoneContext.into());
            }
            // If the phone context contains a phone number prefix, we need to
            // capture it, whereas domains will be ignored.
            if phone_context.starts_with(PLUS_SIGN) {
                // Additional parameters might follow the phone context. If so, we
                // will remove them here because the parameters after phone context
                // are not important for parsing the phone number.
                national_number.push_str(phone_context);
            }

            // Now append everything between the "tel:" prefix and the
            // phone-context. This should include the national number, an optional
            // extension or isdn-subaddress component. Note we also handle the case
            // when "tel:" is missing, as we have seen in some of the phone number
            // inputs. In that case, we append everything from the beginning.
            let index_of_national_number = number_to_parse
                .find(RFC3966_PREFIX)
                .map(|index| index + RFC3966_PREFIX.len())
                .unwrap_or(0);
            if index_of_national_number < index_of_phone_context {
                national_number
                    .push_str(&number_to_parse[index_of_national_number..index_of_phone_context]);
            }
        } else {
            // Extract a possible number from the string passed in (this strips
            // leading characters that could not be the start of a phone number.)
            national_number.push_str(self.extract_possible_number_checked(number_to_parse)?);
        }

        // Delete the isdn-subaddress and everything after it if it is present.
        // Note extension won't appear at the same time with isdn-subaddress
        // according to paragraph 5.3 of the RFC3966 spec.
        if let Some(index_of_isdn) = national_number.find(RFC3966_ISDN_SUBADDRESS) {
            if index_of_isdn > 0 {
                national_number.truncate(index_of_isdn);
            }
        }
        // If both phone context and isdn-subaddress are absent but other
        // parameters are present, the parameters are left in national_number. This
        // is because we are concerned about deleting content from a potential
        // number string when there is no strong evidence that the number is
        // actually written in RFC3966.
        Ok(national_number)
    }

    /// Extracts the value of the phone-context parameter, ending at the next
    /// ';' or the end of input.
    fn extract_phone_context(number_to_extract_from: &str, index_of_phone_context: usize) -> &str {
        let phone_context_start = index_of_phone_context + RFC3966_PHONE_CONTEXT.len();
        let rest = &number_to_extract_from[phone_context_start..];
        match rest.find(';') {
            Some(end) => &rest[..end],
            None => rest,
        }
    }

    /// Returns whether the value of phone-context follows the syntax defined
    /// in RFC3966.
    fn is_phone_context_valid(&self, phone_context: &str) -> bool {
        if phone_context.is_empty() {
            return false;
        }
        // Does phone-context value match pattern of global-number-digits or
        // domainname
        self.reg_exps
            .rfc3966_global_number_digits_pattern
            .is_match(phone_context)
            || self.reg_exps.rfc3966_domainname_pattern.is_match(phone_context)
    }

    /// Checks to see that the region code used is valid, or if it is not valid,
    /// that the number to parse starts with a + symbol so that we can attempt
    /// to infer the region from the number.
    fn check_region_for_parsing(&self, number_to_parse: &str, default_region: &str) -> bool {
        self.is_valid_region_code(default_region)
            || (!number_to_parse.is_empty()
                && self.reg_exps.plus_chars_pattern.is_match(number_to_parse))
    }

    /// Attempts to extract a possible number from the string passed in. This
    /// currently strips all leading characters that cannot be used to start a
    /// phone number. Characters that can be used to start a phone number are
    /// defined in the valid_start_char_pattern. If none of these characters are
    /// found in the number passed in, an empty string is returned. This function
    /// also attempts to strip off any alternative extensions or endings if two or
    /// more are present, such as in the case of: (530) 583-6985 x302/x2303. The
    /// second extension here makes this actually two phone numbers, (530)
    /// 583-6985 x302 and (530) 583-6985 x2303. We remove the second extension so
    /// that the first number is parsed correctly.
    pub fn extract_possible_number<'a>(&self, phone_number: &'a str) -> &'a str {
        self.extract_possible_number_checked(phone_number)
            .unwrap_or("")
    }

    pub(crate) fn extract_possible_number_checked<'a>(
        &self,
        phone_number: &'a str,
    ) -> Result<&'a str, ExtractNumberError> {
        let Some(start) = self.reg_exps.valid_start_char_pattern.find(phone_number) else {
            return Err(ExtractNumberError::NoValidStartCharacter);
        };
        let mut number = &phone_number[start.start()..];
        // Remove trailing non-alpha non-numerical characters.
        if let Some(trailing) = self.reg_exps.unwanted_end_char_pattern.find(number) {
            number = &number[..trailing.start()];
        }
        // Check for extra numbers at the end.
        if let Some(second_number) = self.reg_exps.second_number_start_pattern.find(number) {
            number = &number[..second_number.start()];
        }
        if number.is_empty() {
            return Err(ExtractNumberError::NotANumber);
        }
        Ok(number)
    }

    /// Checks to see if the string of characters could possibly be a phone
    /// number at all. At the moment, checks to see that the string begins with
    /// at least 3 digits, ignoring any punctuation commonly found in phone
    /// numbers. This method does not require the number to be normalized in
    /// advance - but does assume that leading non-number symbols have been
    /// removed, such as by the method extract_possible_number.
    pub fn is_viable_phone_number(&self, number: &str) -> bool {
        number.chars().count() >= MIN_LENGTH_FOR_NSN
            && self.reg_exps.valid_phone_number_pattern.is_match(number)
    }

    /// Strips any extension (as in, the part of the number dialled after the
    /// call is connected, usually indicated with extn, ext, x or similar) from
    /// the end of the number, and returns it.
    pub(crate) fn maybe_strip_extension(&self, number: &mut String) -> Option<String> {
        let captures = self.reg_exps.extn_pattern.captures(number)?;
        let full_match = captures.get(0)?;
        // If we find a potential extension, and the number preceding this is a
        // viable number, we assume it is an extension.
        if !self.is_viable_phone_number(&number[..full_match.start()]) {
            return None;
        }
        // The numbers are captured into groups in the regular expression.
        let extension = captures
            .iter()
            .skip(1)
            .flatten()
            .next()
            .map(|group| group.as_str().to_owned())?;
        let start = full_match.start();
        number.truncate(start);
        Some(extension)
    }

    /// Tries to extract a country calling code from a number. Country calling
    /// codes are extracted in the following ways:
    ///  - by stripping the international dialing prefix of the region the
    ///    person is dialing from, if this is present in the number, and looking
    ///    at the next digits
    ///  - by stripping the '+' sign if present and then looking at the next
    ///    digits
    ///  - by comparing the start of the number and the country calling code of
    ///    the default region. If the number is not considered possible for the
    ///    numbering plan of the default region initially, but starts with the
    ///    country calling code of this region, validation will be reattempted
    ///    after stripping this country calling code. If this number is
    ///    considered a possible number, then the first digits will be considered
    ///    the country calling code and removed as such.
    ///
    /// Returns the country calling code, 0 when none was found, along with the
    /// national number that follows it (empty in that case).
    pub(crate) fn maybe_extract_country_code(
        &self,
        number: &str,
        default_region_metadata: Option<&PhoneMetadata>,
        keep_raw_input: bool,
        phone_number: &mut PhoneNumber,
    ) -> Result<(i32, String), ParseError> {
        if number.is_empty() {
            return Ok((0, String::new()));
        }
        // Set the default prefix to be something that will never match.
        let possible_country_idd_prefix = default_region_metadata
            .map(|metadata| metadata.international_prefix())
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or(NON_MATCHING_IDD);

        let PhoneNumberWithCountryCodeSource {
            phone_number: full_number,
            country_code_source,
        } = self.maybe_strip_international_prefix_and_normalize(number, possible_country_idd_prefix);
        if keep_raw_input {
            phone_number.set_country_code_source(country_code_source);
        }

        if country_code_source != CountryCodeSource::FromDefaultCountry {
            if full_number.len() < MIN_LENGTH_FOR_NSN {
                trace!("Phone number had an IDD, but after this was not long enough to be a viable phone number.");
                return Err(ParseError::TooShortAfterIdd);
            }
            return match self.extract_country_code(&full_number) {
                Some((country_code, national_number)) => Ok((country_code, national_number.to_owned())),
                // If this fails, they must be using a strange country calling code
                // that we don't recognize, or that doesn't exist.
                None => Err(ParseError::InvalidCountryCode),
            };
        }

        if let Some(metadata) = default_region_metadata {
            // Check to see if the number starts with the country calling code for
            // the default region. If so, we remove the country calling code, and
            // do some checks on the validity of the number before and after.
            let default_country_code = metadata.country_code;
            let mut buf = itoa::Buffer::new();
            let default_country_code_string = buf.format(default_country_code);
            if let Some(potential_national_number) =
                full_number.strip_prefix(default_country_code_string)
            {
                let general_desc = &metadata.general_desc;
                let potential_national_number = self
                    .maybe_strip_national_prefix_and_carrier_code(potential_national_number, metadata)
                    .map(|stripped| stripped.national_number)
                    .unwrap_or_else(|| potential_national_number.to_owned());
                // If the number was not valid before but is valid now, or if it was
                // too long before, we consider the number with the country calling
                // code stripped to be a better result and keep that instead.
                if (!self
                    .matcher_api
                    .match_national_number(&full_number, general_desc, false)
                    && self.matcher_api.match_national_number(
                        &potential_national_number,
                        general_desc,
                        false,
                    ))
                    || self.test_number_length(&full_number, metadata, PhoneNumberType::Unknown)
                        == Err(ValidationError::TooLong)
                {
                    if keep_raw_input {
                        phone_number
                            .set_country_code_source(CountryCodeSource::FromNumberWithoutPlusSign);
                    }
                    return Ok((default_country_code, potential_national_number));
                }
            }
        }
        // No country calling code present.
        Ok((0, String::new()))
    }

    /// Strips any international prefix (such as +, 00, 011) present in the
    /// number provided, normalizes the resulting number, and indicates if an
    /// international prefix was present.
    pub(crate) fn maybe_strip_international_prefix_and_normalize(
        &self,
        phone_number: &str,
        possible_idd_prefix: &str,
    ) -> PhoneNumberWithCountryCodeSource {
        if phone_number.is_empty() {
            return PhoneNumberWithCountryCodeSource::new(
                String::new(),
                CountryCodeSource::FromDefaultCountry,
            );
        }
        // Check to see if the number begins with one or more plus signs.
        if let Some(plus_chars) = self.reg_exps.plus_chars_pattern.find(phone_number) {
            // Can now normalize the rest of the number since we've consumed the "+"
            // sign at the start.
            return PhoneNumberWithCountryCodeSource::new(
                self.normalize(&phone_number[plus_chars.end()..]),
                CountryCodeSource::FromNumberWithPlusSign,
            );
        }
        // Attempt to parse the first digits as an international prefix.
        let normalized = self.normalize(phone_number);
        match self.parse_prefix_as_idd(possible_idd_prefix, &normalized) {
            Some(rest) => PhoneNumberWithCountryCodeSource::new(
                rest.to_owned(),
                CountryCodeSource::FromNumberWithIdd,
            ),
            None => PhoneNumberWithCountryCodeSource::new(
                normalized,
                CountryCodeSource::FromDefaultCountry,
            ),
        }
    }

    /// Strips the IDD from the start of the number if present. Returns the
    /// rest of the number, None if no IDD was stripped.
    fn parse_prefix_as_idd<'a>(&self, idd_pattern: &str, number: &'a str) -> Option<&'a str> {
        let regex = match self.reg_exps.regexp_cache.get_regex(&anchor_start(idd_pattern)) {
            Ok(regex) => regex,
            Err(err) => {
                error!("Invalid international prefix pattern! {}: {}", idd_pattern, err);
                return None;
            }
        };
        let idd = regex.find_start(number)?;
        let rest = &number[idd.end()..];
        // Only strip this if the first digit after the match is not a 0, since
        // country calling codes cannot begin with 0.
        if rest.chars().find_map(to_ascii_digit) == Some('0') {
            return None;
        }
        Some(rest)
    }

    /// Extracts country calling code from full_number, returns it and the
    /// remaining national number. It assumes that the leading plus sign or
    /// IDD has already been removed. Returns None if full_number doesn't start
    /// with a valid country calling code.
    pub(crate) fn extract_country_code<'a>(&self, full_number: &'a str) -> Option<(i32, &'a str)> {
        if full_number.is_empty() || full_number.starts_with('0') {
            // Country codes do not begin with a '0'.
            return None;
        }
        for i in 1..=MAX_LENGTH_COUNTRY_CODE.min(full_number.len()) {
            let Some(Ok(potential_country_code)) =
                full_number.get(..i).map(str::parse::<i32>)
            else {
                return None;
            };
            if self.has_valid_country_calling_code(potential_country_code) {
                return Some((potential_country_code, &full_number[i..]));
            }
        }
        None
    }

    /// Strips any national prefix (such as 0, 1) present in the number
    /// provided. Returns None when nothing was stripped, otherwise the
    /// remaining number and the carrier code captured by the prefix pattern,
    /// if any.
    pub(crate) fn maybe_strip_national_prefix_and_carrier_code(
        &self,
        number: &str,
        metadata: &PhoneMetadata,
    ) -> Option<StrippedNationalPrefix> {
        let possible_national_prefix = metadata.national_prefix_for_parsing();
        if number.is_empty() || possible_national_prefix.is_empty() {
            // Early return for numbers of zero length.
            return None;
        }
        // Attempt to parse the first digits as a national prefix.
        let prefix_pattern = match self
            .reg_exps
            .regexp_cache
            .get_regex(&anchor_start(possible_national_prefix))
        {
            Ok(regex) => regex,
            Err(err) => {
                error!("Invalid national prefix pattern! {}: {}", possible_national_prefix, err);
                return None;
            }
        };
        let captures = prefix_pattern.captures_start(number)?;
        let prefix_match = captures.get(0)?;
        let general_desc = &metadata.general_desc;
        // Check if the original number is viable.
        let is_viable_original_number =
            self.matcher_api.match_national_number(number, general_desc, false);
        // prefix_pattern.captures_len() includes the whole match as group 0.
        let num_of_groups = prefix_pattern.captures_len() - 1;
        let transform_rule = metadata.national_prefix_transform_rule();
        let last_group_matched = captures.get(num_of_groups).is_some();

        if transform_rule.is_empty() || !last_group_matched {
            let stripped = &number[prefix_match.end()..];
            // If the original number was viable, and the resultant number is not,
            // we return.
            if is_viable_original_number
                && !self.matcher_api.match_national_number(stripped, general_desc, false)
            {
                return None;
            }
            let carrier_code = (num_of_groups > 0 && last_group_matched)
                .then(|| captures.get(1).map(|group| group.as_str().to_owned()))
                .flatten();
            Some(StrippedNationalPrefix {
                national_number: stripped.to_owned(),
                carrier_code,
            })
        } else {
            // Check that the resultant number is still viable. If not, return.
            // Check this by seeing if the resultant number matches the pattern for
            // the general number.
            let transformed_number = prefix_pattern
                .replacen(number, 1, to_regex_replacement(transform_rule))
                .into_owned();
            if is_viable_original_number
                && !self
                    .matcher_api
                    .match_national_number(&transformed_number, general_desc, false)
            {
                return None;
            }
            let carrier_code = (num_of_groups > 1)
                .then(|| captures.get(1).map(|group| group.as_str().to_owned()))
                .flatten();
            Some(StrippedNationalPrefix {
                national_number: transformed_number,
                carrier_code,
            })
        }
    }

    /// A helper function to set the values related to leading zeros in a
    /// PhoneNumber. Any leading zero sets the flag, whatever the region.
    fn set_italian_leading_zeros(national_number: &str, phone_number: &mut PhoneNumber) {
        if national_number.len() > 1 && national_number.starts_with('0') {
            phone_number.set_italian_leading_zero(true);
            // Note that if the national number is all "0"s, the last "0" is not
            // counted as a leading zero.
            let number_of_leading_zeros = national_number
                .bytes()
                .take(national_number.len() - 1)
                .take_while(|b| *b == b'0')
                .count();
            if number_of_leading_zeros != 1 {
                phone_number.set_number_of_leading_zeros(number_of_leading_zeros as i32);
            }
        }
    }

    /// Normalizes a string of characters representing a phone number. This
    /// performs the following conversions:
    ///  - Punctuation is stripped.
    ///  - For ALPHA/VANITY numbers:
    ///    - Letters are converted to their numeric representation on a telephone
    ///      keypad. The keypad used here is the one defined in ITU Recommendation
    ///      E.161. This is only done if there are 3 or more letters in the
    ///      number, to lessen the risk that such letters are typos.
    ///  - For other numbers:
    ///    - Wide-ascii digits are converted to normal ASCII (European) digits.
    ///    - Arabic-Indic numerals are converted to European numerals.
    ///    - Spurious alpha characters are stripped.
    pub fn normalize(&self, phone_number: &str) -> String {
        if !self.reg_exps.valid_alpha_phone_pattern.is_match(phone_number) {
            return Self::normalize_digits_only(phone_number);
        }
        phone_number
            .chars()
            .filter_map(|c| {
                to_ascii_digit(c)
                    .or_else(|| self.reg_exps.alpha_mappings.get(&c.to_ascii_uppercase()).copied())
            })
            .collect()
    }

    /// Normalizes a string of characters representing a phone number. This
    /// converts wide-ascii and arabic-indic numerals to European numerals, and
    /// strips punctuation and alpha-numeric characters.
    pub fn normalize_digits_only(phone_number: &str) -> String {
        Self::normalize_digits(phone_number, false)
    }

    /// Converts every decimal digit to ASCII, other characters are kept when
    /// `keep_non_digits` is set and dropped otherwise.
    pub(crate) fn normalize_digits(phone_number: &str, keep_non_digits: bool) -> String {
        let mut normalized = String::with_capacity(phone_number.len());
        for c in phone_number.chars() {
            if let Some(digit) = to_ascii_digit(c) {
                normalized.push(digit);
            } else if keep_non_digits {
                normalized.push(c);
            }
        }
        normalized
    }

    /// Normalizes a string of characters representing a phone number. This
    /// strips all characters which are not diallable on a mobile phone keypad
    /// (including all non-ASCII digits).
    pub fn normalize_diallable_chars_only(&self, phone_number: &str) -> String {
        normalize_helper(&self.reg_exps.diallable_char_mappings, true, phone_number)
    }

    /// Converts all alpha characters in a number to their respective digits on
    /// a keypad, but retains existing formatting.
    pub fn convert_alpha_characters_in_number(&self, phone_number: &str) -> String {
        normalize_helper(&self.reg_exps.alpha_phone_mappings, false, phone_number)
    }

    /// Returns true if the number is a valid vanity (alpha) number such as 800
    /// MICROSOFT. A valid vanity number will start with at least 3 digits and
    /// will have three or more alpha characters. This does not do
    /// region-specific checks - to work out if this number is actually valid
    /// for a region, it should be parsed and methods such as
    /// is_possible_number_with_reason and is_valid_number should be used.
    pub fn is_alpha_number(&self, number: &str) -> bool {
        if !self.is_viable_phone_number(number) {
            // Number is too short, or doesn't match the basic phone number pattern.
            return false;
        }
        let mut stripped_number = number.to_owned();
        self.maybe_strip_extension(&mut stripped_number);
        self.reg_exps
            .valid_alpha_phone_pattern
            .is_match(&stripped_number)
    }
}
