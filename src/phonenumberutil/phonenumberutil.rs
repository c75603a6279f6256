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

use std::{
    collections::{HashMap, HashSet, VecDeque},
    sync::Arc,
};

use log::{error, trace, warn};

use super::phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings;
use crate::{
    asyoutypeformatter::AsYouTypeFormatter,
    i18n,
    interfaces::{MatcherApi, MetadataSource},
    metadata::{PhoneMetadata, PhoneNumberDesc},
    phonenumber::PhoneNumber,
    phonenumbermatcher::{Leniency, PhoneNumberMatcher},
    phonenumberutil::{
        NumberLengthType, PhoneNumberFormat, PhoneNumberType,
        errors::{GetExampleNumberError, ValidationError},
        helper_constants::{MIN_LENGTH_FOR_NSN, NANPA_COUNTRY_CODE, REGION_CODE_FOR_NON_GEO_ENTITY},
        helper_functions::{
            desc_has_possible_number_data, get_number_desc_by_type,
            get_supported_types_for_metadata,
        },
    },
    regex_based_matcher::RegexBasedMatcher,
    regex_util::RegexConsume,
    regexp_cache::RegexCache,
};

/// The phone number engine: parsing, validation, classification, formatting
/// and comparison over a set of region metadata supplied at construction.
///
/// Instances are immutable after construction and can be shared between
/// threads, the only shared mutable state is the regex cache.
pub struct PhoneNumberUtil {
    /// An API for validation checking.
    pub(super) matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions and character mappings.
    pub(crate) reg_exps: PhoneNumberRegExpsAndMappings,

    /// A mapping from a country calling code to the region codes which denote
    /// the regions represented by that country calling code. Note regions under
    /// NANPA share the country calling code 1 and Russia and Kazakhstan share the
    /// country calling code 7. The main region of a code always comes first.
    /// This is implemented as a sorted vector to achieve better performance.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,

    /// The set of regions that share country calling code 1.
    nanpa_regions: HashSet<String>,

    /// A mapping from a region code to a PhoneMetadata for that region.
    region_to_metadata_map: HashMap<String, PhoneMetadata>,

    /// A mapping from a country calling code for a non-geographical entity to the
    /// PhoneMetadata for that country calling code. Examples of the country
    /// calling codes include 800 (International Toll Free Service) and 808
    /// (International Shared Cost Service).
    country_code_to_non_geographical_metadata_map: HashMap<i32, PhoneMetadata>,
}

impl PhoneNumberUtil {
    /// Builds an engine over `metadata` with its own regex cache of default
    /// capacity.
    pub fn new_for_metadata<S: MetadataSource>(metadata: S) -> Self {
        Self::new_with_regex_cache(metadata, Arc::new(RegexCache::new()))
    }

    /// Builds an engine over `metadata` sharing `regex_cache` with whoever
    /// else holds it.
    pub fn new_with_regex_cache<S: MetadataSource>(
        metadata: S,
        regex_cache: Arc<RegexCache>,
    ) -> Self {
        let mut instance = Self {
            matcher_api: Box::new(RegexBasedMatcher::new(regex_cache.clone())),
            reg_exps: PhoneNumberRegExpsAndMappings::new(regex_cache),
            country_calling_code_to_region_code_map: Default::default(),
            nanpa_regions: Default::default(),
            region_to_metadata_map: Default::default(),
            country_code_to_non_geographical_metadata_map: Default::default(),
        };
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<i32, VecDeque<String>>::new();
        for metadata in metadata.into_metadata() {
            let region_code = metadata.id().to_owned();
            if i18n::RegionCode::get_unknown() == region_code {
                continue;
            }
            let main_country_for_code = metadata.main_country_for_code;
            let country_calling_code = metadata.country_code;
            if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
                instance
                    .country_code_to_non_geographical_metadata_map
                    .insert(country_calling_code, metadata);
            } else {
                instance
                    .region_to_metadata_map
                    .insert(region_code.clone(), metadata);
            }

            let regions = country_calling_code_to_region_map
                .entry(country_calling_code)
                .or_default();
            if main_country_for_code {
                regions.push_front(region_code.clone());
            } else {
                regions.push_back(region_code.clone());
            }
            if country_calling_code == NANPA_COUNTRY_CODE {
                instance.nanpa_regions.insert(region_code);
            }
        }

        instance.country_calling_code_to_region_code_map.extend(
            country_calling_code_to_region_map
                .into_iter()
                .map(|(k, v)| (k, Vec::from(v))),
        );
        // Sort all the pairs in ascending order according to country calling code.
        instance
            .country_calling_code_to_region_code_map
            .sort_by_key(|(a, _)| *a);
        trace!(
            "Loaded metadata for {} regions and {} non-geographical entities",
            instance.region_to_metadata_map.len(),
            instance.country_code_to_non_geographical_metadata_map.len()
        );
        instance
    }

    pub fn get_supported_regions(&self) -> Vec<&str> {
        self.region_to_metadata_map.keys().map(String::as_str).collect()
    }

    pub fn get_supported_global_network_calling_codes(&self) -> HashSet<i32> {
        self.country_code_to_non_geographical_metadata_map
            .keys()
            .copied()
            .collect()
    }

    pub fn get_supported_calling_codes(&self) -> HashSet<i32> {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
            .collect()
    }

    pub fn get_supported_types_for_region(
        &self,
        region_code: &str,
    ) -> Option<HashSet<PhoneNumberType>> {
        self.region_to_metadata_map
            .get(region_code)
            .map(get_supported_types_for_metadata)
            .or_else(|| {
                warn!("Invalid or unknown region code provided: {}", region_code);
                None
            })
    }

    pub fn get_supported_types_for_non_geo_entity(
        &self,
        country_calling_code: i32,
    ) -> Option<HashSet<PhoneNumberType>> {
        self.country_code_to_non_geographical_metadata_map
            .get(&country_calling_code)
            .map(get_supported_types_for_metadata)
            .or_else(|| {
                warn!(
                    "Unknown country calling code for a non-geographical entity provided: {}",
                    country_calling_code
                );
                None
            })
    }

    /// Returns a formatter for numbers typed one character at a time,
    /// assuming `region_code` when no country calling code is entered.
    pub fn get_as_you_type_formatter(&self, region_code: &str) -> AsYouTypeFormatter<'_> {
        AsYouTypeFormatter::new(self, region_code)
    }

    /// Finds every valid number in `text`, numbers without a country calling
    /// code are read as written in `default_region`.
    pub fn find_numbers<'a>(&'a self, text: &'a str, default_region: &str) -> PhoneNumberMatcher<'a> {
        PhoneNumberMatcher::new(self, text, default_region, Leniency::Valid, u64::MAX)
    }

    pub(crate) fn is_valid_region_code(&self, region_code: &str) -> bool {
        self.region_to_metadata_map.contains_key(region_code)
    }

    pub(crate) fn has_valid_country_calling_code(&self, country_calling_code: i32) -> bool {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(k, _)| *k)
            .is_ok()
    }

    pub(crate) fn get_metadata_for_region(&self, region_code: &str) -> Option<&PhoneMetadata> {
        self.region_to_metadata_map.get(region_code)
    }

    pub(crate) fn get_metadata_for_non_geographical_region(
        &self,
        country_calling_code: i32,
    ) -> Option<&PhoneMetadata> {
        self.country_code_to_non_geographical_metadata_map
            .get(&country_calling_code)
    }

    pub(crate) fn get_metadata_for_region_or_calling_code(
        &self,
        country_calling_code: i32,
        region_code: &str,
    ) -> Option<&PhoneMetadata> {
        if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
            self.get_metadata_for_non_geographical_region(country_calling_code)
        } else {
            self.get_metadata_for_region(region_code)
        }
    }

    /// Returns whether `pattern` matches at the start of `value`. A pattern
    /// that fails to compile never matches.
    pub(crate) fn matches_start(&self, pattern: &str, value: &str) -> bool {
        match self.reg_exps.regexp_cache.get_regex(pattern) {
            Ok(regex) => regex.matches_start(value),
            Err(err) => {
                error!("Invalid regex! {}: {}", pattern, err);
                false
            }
        }
    }

    /// Returns whether `pattern` matches the whole of `value`. A pattern that
    /// fails to compile never matches.
    pub(crate) fn matches_entirely(&self, pattern: &str, value: &str) -> bool {
        match self.reg_exps.regexp_cache.get_full_match_regex(pattern) {
            Ok(regex) => regex.is_match(value),
            Err(err) => {
                error!("Invalid regex! {}: {}", pattern, err);
                false
            }
        }
    }

    pub(crate) fn formatting_rule_has_first_group_only(
        &self,
        national_prefix_formatting_rule: &str,
    ) -> bool {
        national_prefix_formatting_rule.is_empty()
            || self
                .reg_exps
                .formatting_rule_has_first_group_only_regex
                .is_match(national_prefix_formatting_rule)
    }

    pub(crate) fn is_format_eligible_for_as_you_type_formatter(&self, format: &str) -> bool {
        // We require that the first group is present in the output pattern to
        // ensure no data is lost while formatting; when we format as you type,
        // this should always be the case.
        self.reg_exps
            .is_format_eligible_as_you_type_formatting_regex
            .is_match(format)
    }

    /// Returns the national dialling prefix of a region, e.g. "0" for GB.
    /// With `strip_non_digits` the "~" marking a wait for dial tone is
    /// removed. Regions without a national prefix give `None`.
    pub fn get_ndd_prefix_for_region(
        &self,
        region_code: &str,
        strip_non_digits: bool,
    ) -> Option<String> {
        let Some(metadata) = self.region_to_metadata_map.get(region_code) else {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return None;
        };
        let mut prefix = metadata.national_prefix().to_owned();
        if prefix.is_empty() {
            return None;
        }
        if strip_non_digits {
            prefix = prefix.replace('~', "");
        }
        Some(prefix)
    }

    /// Checks if this is a region under the North American Numbering Plan
    /// Administration (NANPA).
    pub fn is_nanpa_country(&self, region_code: &str) -> bool {
        self.nanpa_regions.contains(region_code)
    }

    /// Returns the country calling code of a region, or 0 for an unknown
    /// region.
    pub fn get_country_code_for_region(&self, region_code: &str) -> i32 {
        match self.region_to_metadata_map.get(region_code) {
            Some(metadata) => metadata.country_code,
            None => {
                warn!("Invalid or missing region code ({}) provided.", region_code);
                0
            }
        }
    }

    /// Returns the national significant number, leading zeros included.
    pub fn get_national_significant_number(phone_number: &PhoneNumber) -> String {
        let mut buf = itoa::Buffer::new();
        let national_number = buf.format(phone_number.national_number());
        // If leading zero(s) have been set, we prefix this now. Note this is not a
        // national prefix. Ensure the number of leading zeros is at least 0 so we
        // don't crash in the case of malicious input.
        let zeros = if phone_number.italian_leading_zero() {
            phone_number.number_of_leading_zeros().max(0) as usize
        } else {
            0
        };
        let mut nsn = String::with_capacity(zeros + national_number.len());
        nsn.extend(std::iter::repeat_n('0', zeros));
        nsn.push_str(national_number);
        nsn
    }

    /// Returns the region code that matches the specific country calling code. In
    /// the case of no region code being found, the unknown region code will be
    /// returned.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        self.get_region_codes_for_country_calling_code(country_calling_code)
            .first()
            .copied()
            .unwrap_or(i18n::RegionCode::get_unknown())
    }

    /// Returns the region codes that match the specific country calling code,
    /// main region first. Empty for an unknown code.
    pub fn get_region_codes_for_country_calling_code(&self, country_calling_code: i32) -> Vec<&str> {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| {
                self.country_calling_code_to_region_code_map[index]
                    .1
                    .iter()
                    .map(String::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the region where a phone number is from. This could be used for
    /// geocoding at the region level. Only guarantees correct results for valid,
    /// full numbers (not short-codes, or invalid numbers).
    pub fn get_region_code_for_number(&self, phone_number: &PhoneNumber) -> &str {
        let country_calling_code = phone_number.country_code();
        let region_codes = self.get_region_codes_for_country_calling_code(country_calling_code);
        match region_codes.as_slice() {
            [] => {
                trace!("Missing/invalid country calling code ({})", country_calling_code);
                i18n::RegionCode::get_unknown()
            }
            [region_code] => *region_code,
            _ => self.get_region_code_for_number_from_region_list(phone_number, &region_codes),
        }
    }

    fn get_region_code_for_number_from_region_list<'b>(
        &self,
        phone_number: &PhoneNumber,
        region_codes: &[&'b str],
    ) -> &'b str {
        let national_number = Self::get_national_significant_number(phone_number);
        for code in region_codes {
            // Metadata cannot be missing because the region codes come from the
            // country calling code map.
            let Some(metadata) = self.region_to_metadata_map.get(*code) else {
                continue;
            };
            if let Some(leading_digits) = metadata.leading_digits() {
                if self.matches_start(leading_digits, &national_number) {
                    return *code;
                }
            } else if self.get_number_type_helper(&national_number, metadata)
                != PhoneNumberType::Unknown
            {
                return *code;
            }
        }
        i18n::RegionCode::get_unknown()
    }

    /// Gets the type of a valid phone number.
    pub fn get_number_type(&self, phone_number: &PhoneNumber) -> PhoneNumberType {
        let region_code = self.get_region_code_for_number(phone_number);
        let Some(metadata) = self
            .get_metadata_for_region_or_calling_code(phone_number.country_code(), region_code)
        else {
            return PhoneNumberType::Unknown;
        };
        let national_significant_number = Self::get_national_significant_number(phone_number);
        self.get_number_type_helper(&national_significant_number, metadata)
    }

    pub(crate) fn get_number_type_helper(
        &self,
        national_number: &str,
        metadata: &PhoneMetadata,
    ) -> PhoneNumberType {
        if !self.is_number_matching_desc(national_number, &metadata.general_desc) {
            trace!(
                "Number '{national_number}' type unknown - doesn't match general national number pattern"
            );
            return PhoneNumberType::Unknown;
        }
        if self.is_number_matching_desc(national_number, &metadata.premium_rate) {
            trace!("Number '{national_number}' is a premium number.");
            return PhoneNumberType::PremiumRate;
        }
        if self.is_number_matching_desc(national_number, &metadata.toll_free) {
            trace!("Number '{national_number}' is a toll-free number.");
            return PhoneNumberType::TollFree;
        }
        if self.is_number_matching_desc(national_number, &metadata.shared_cost) {
            trace!("Number '{national_number}' is a shared cost number.");
            return PhoneNumberType::SharedCost;
        }
        if self.is_number_matching_desc(national_number, &metadata.voip) {
            trace!("Number '{national_number}' is a VOIP (Voice over IP) number.");
            return PhoneNumberType::VoIP;
        }
        if self.is_number_matching_desc(national_number, &metadata.personal_number) {
            trace!("Number '{national_number}' is a personal number.");
            return PhoneNumberType::PersonalNumber;
        }
        if self.is_number_matching_desc(national_number, &metadata.pager) {
            trace!("Number '{national_number}' is a pager number.");
            return PhoneNumberType::Pager;
        }
        if self.is_number_matching_desc(national_number, &metadata.uan) {
            trace!("Number '{national_number}' is a UAN.");
            return PhoneNumberType::UAN;
        }
        if self.is_number_matching_desc(national_number, &metadata.voicemail) {
            trace!("Number '{national_number}' is a voicemail number.");
            return PhoneNumberType::VoiceMail;
        }

        let is_fixed_line = self.is_number_matching_desc(national_number, &metadata.fixed_line);
        if is_fixed_line {
            if metadata.same_mobile_and_fixed_line_pattern {
                trace!(
                    "Number '{national_number}': fixed-line and mobile patterns equal, \
                     number is fixed-line or mobile"
                );
                return PhoneNumberType::FixedLineOrMobile;
            } else if self.is_number_matching_desc(national_number, &metadata.mobile) {
                trace!(
                    "Number '{national_number}': Fixed-line and mobile patterns differ, but number is \
                     still fixed-line or mobile"
                );
                return PhoneNumberType::FixedLineOrMobile;
            }
            trace!("Number '{national_number}' is a fixed line number.");
            return PhoneNumberType::FixedLine;
        }
        // Otherwise, test to see if the number is mobile. Only do this if certain
        // that the patterns for mobile and fixed line aren't the same.
        if !metadata.same_mobile_and_fixed_line_pattern
            && self.is_number_matching_desc(national_number, &metadata.mobile)
        {
            trace!("Number '{national_number}' is a mobile number.");
            return PhoneNumberType::Mobile;
        }
        trace!(
            "Number '{national_number}' type unknown - doesn't match any specific number type pattern."
        );
        PhoneNumberType::Unknown
    }

    pub(crate) fn is_number_matching_desc(
        &self,
        national_number: &str,
        number_desc: &PhoneNumberDesc,
    ) -> bool {
        // Check if any possible number lengths are present; if so, we use them to
        // avoid checking the validation pattern if they don't match. If they are
        // absent, this means they match the general description, which we have
        // already checked before checking a specific number type.
        let actual_length = national_number.len() as i32;
        if !number_desc.possible_length.is_empty()
            && !number_desc.possible_length.contains(&actual_length)
        {
            return false;
        }
        self.matcher_api
            .match_national_number(national_number, number_desc, false)
            && self.matcher_api.match_possible_number(national_number, number_desc)
    }

    /// Tests whether a phone number matches a valid pattern. Note this doesn't
    /// verify the number is actually in use, which is impossible to tell by just
    /// looking at a number itself.
    pub fn is_valid_number(&self, phone_number: &PhoneNumber) -> bool {
        let region_code = self.get_region_code_for_number(phone_number);
        self.is_valid_number_for_region(phone_number, region_code)
    }

    /// Tests whether a phone number is valid for a certain region. Note this
    /// doesn't verify the number is actually in use. A number valid for one
    /// region of a shared calling code is not valid for the others.
    pub fn is_valid_number_for_region(&self, phone_number: &PhoneNumber, region_code: &str) -> bool {
        let country_code = phone_number.country_code();
        let Some(metadata) = self.get_metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return false;
        };
        if REGION_CODE_FOR_NON_GEO_ENTITY != region_code && country_code != metadata.country_code {
            // Either the region code was invalid, or the country calling code for
            // this number does not match that of the region code.
            return false;
        }
        let national_significant_number = Self::get_national_significant_number(phone_number);
        self.get_number_type_helper(&national_significant_number, metadata)
            != PhoneNumberType::Unknown
    }

    /// Convenience wrapper around [`Self::is_possible_number_with_reason`].
    pub fn is_possible_number(&self, phone_number: &PhoneNumber) -> bool {
        self.is_possible_number_with_reason(phone_number).is_ok()
    }

    pub fn is_possible_number_for_type(
        &self,
        phone_number: &PhoneNumber,
        phone_number_type: PhoneNumberType,
    ) -> bool {
        self.is_possible_number_for_type_with_reason(phone_number, phone_number_type)
            .is_ok()
    }

    /// Checks whether a phone number is a possible number by its length only.
    /// This is much faster and more lenient than full validation.
    pub fn is_possible_number_with_reason(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<NumberLengthType, ValidationError> {
        self.is_possible_number_for_type_with_reason(phone_number, PhoneNumberType::Unknown)
    }

    pub fn is_possible_number_for_type_with_reason(
        &self,
        phone_number: &PhoneNumber,
        phone_number_type: PhoneNumberType,
    ) -> Result<NumberLengthType, ValidationError> {
        let national_number = Self::get_national_significant_number(phone_number);
        let country_code = phone_number.country_code();
        // Note: for regions that share a country calling code, like NANPA numbers,
        // we just use the rules from the default region (US in this case) since the
        // region code lookup is expensive and all the regions sharing a code have
        // the same possible lengths.
        if !self.has_valid_country_calling_code(country_code) {
            return Err(ValidationError::InvalidCountryCode);
        }
        let region_code = self.get_region_code_for_country_code(country_code);
        let Some(metadata) = self.get_metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return Err(ValidationError::InvalidCountryCode);
        };
        self.test_number_length(&national_number, metadata, phone_number_type)
    }

    /// Parses `number` read as dialled from `region_dialing_from` and checks
    /// it is possible. Unparseable input is not possible.
    pub fn is_possible_number_for_string(&self, number: &str, region_dialing_from: &str) -> bool {
        self.parse(number, region_dialing_from)
            .is_ok_and(|phone_number| self.is_possible_number(&phone_number))
    }

    /// Helper method to check a number against possible lengths for this number
    /// type, and determine whether it matches, or is too short or too long.
    pub(crate) fn test_number_length(
        &self,
        phone_number: &str,
        phone_metadata: &PhoneMetadata,
        phone_number_type: PhoneNumberType,
    ) -> Result<NumberLengthType, ValidationError> {
        let desc_for_type = get_number_desc_by_type(phone_metadata, phone_number_type);
        // There should always be "possible_length" set for every element. For size
        // efficiency, where a sub-description (e.g. fixed-line) has the same
        // possible_length as the parent, this is missing, so we fall back to the
        // general desc (where no numbers of the type exist at all, there is one
        // possible length (-1) which is guaranteed not to match the length of any
        // real phone number).
        let mut possible_lengths = if desc_for_type.possible_length.is_empty() {
            phone_metadata.general_desc.possible_length.clone()
        } else {
            desc_for_type.possible_length.clone()
        };

        let mut local_lengths = desc_for_type.possible_length_local_only.clone();
        if phone_number_type == PhoneNumberType::FixedLineOrMobile {
            let fixed_line_desc = get_number_desc_by_type(phone_metadata, PhoneNumberType::FixedLine);
            if !desc_has_possible_number_data(fixed_line_desc) {
                // The rare case has been encountered where no fixedLine data is available
                // (true for some non-geographical entities), so we just check mobile.
                return self.test_number_length(phone_number, phone_metadata, PhoneNumberType::Mobile);
            }
            let mobile_desc = get_number_desc_by_type(phone_metadata, PhoneNumberType::Mobile);
            if desc_has_possible_number_data(mobile_desc) {
                // Merge the mobile data in if there was any. Note that when adding the
                // possible lengths from mobile, we have to again check they aren't
                // empty since if they are this indicates they are the same as the
                // general desc and should be obtained from there.
                let len_to_append = if mobile_desc.possible_length.is_empty() {
                    &phone_metadata.general_desc.possible_length
                } else {
                    &mobile_desc.possible_length
                };
                possible_lengths.extend_from_slice(len_to_append);
                possible_lengths.sort_unstable();
                possible_lengths.dedup();

                local_lengths.extend_from_slice(&mobile_desc.possible_length_local_only);
                local_lengths.sort_unstable();
            }
        }

        if possible_lengths.is_empty() {
            return self.test_number_length_against_pattern(phone_number, desc_for_type, phone_metadata);
        }

        // If the type is not suported at all (indicated by the possible lengths
        // containing -1 at this point) we return invalid length.
        if possible_lengths[0] == -1 {
            return Err(ValidationError::InvalidLength);
        }

        let actual_length = phone_number.len() as i32;
        // This is safe because there is never an overlap beween the possible lengths
        // and the local-only lengths.
        if local_lengths.contains(&actual_length) {
            return Ok(NumberLengthType::IsPossibleLocalOnly);
        }

        let minimum_length = possible_lengths[0];
        if minimum_length == actual_length {
            Ok(NumberLengthType::IsPossible)
        } else if minimum_length > actual_length {
            Err(ValidationError::TooShort)
        } else if possible_lengths[possible_lengths.len() - 1] < actual_length {
            Err(ValidationError::TooLong)
        } else if possible_lengths[1..].contains(&actual_length) {
            // We skip the first element; we've already checked it.
            Ok(NumberLengthType::IsPossible)
        } else {
            Err(ValidationError::InvalidLength)
        }
    }

    /// Length check for descriptors that only carry a possible number
    /// pattern.
    fn test_number_length_against_pattern(
        &self,
        phone_number: &str,
        desc_for_type: &PhoneNumberDesc,
        phone_metadata: &PhoneMetadata,
    ) -> Result<NumberLengthType, ValidationError> {
        let Some(pattern) = desc_for_type
            .possible_number_pattern
            .as_deref()
            .or(phone_metadata.general_desc.possible_number_pattern.as_deref())
        else {
            return Err(ValidationError::InvalidLength);
        };
        if self.matches_entirely(pattern, phone_number) {
            Ok(NumberLengthType::IsPossible)
        } else if self.matches_start(pattern, phone_number) {
            Err(ValidationError::TooLong)
        } else {
            Err(ValidationError::TooShort)
        }
    }

    /// Returns true if the number can be dialled from outside the region, or
    /// unknown. If the number can only be dialled from within the region,
    /// returns false.
    pub fn can_be_internationally_dialled(&self, phone_number: &PhoneNumber) -> bool {
        let region_code = self.get_region_code_for_number(phone_number);
        let Some(metadata) = self.region_to_metadata_map.get(region_code) else {
            // Note numbers belonging to non-geographical entities (e.g. +800 numbers)
            // are always internationally diallable, and will be caught here.
            return true;
        };
        let national_significant_number = Self::get_national_significant_number(phone_number);
        !self.is_number_matching_desc(
            &national_significant_number,
            &metadata.no_international_dialling,
        )
    }

    /// Tests whether a phone number has a geographical association. It checks if
    /// the number is associated with a certain region in the country to which it
    /// belongs. Note that this doesn't verify if the number is actually in use.
    pub fn is_number_geographical(&self, phone_number: &PhoneNumber) -> bool {
        self.is_number_type_geographical(
            self.get_number_type(phone_number),
            phone_number.country_code(),
        )
    }

    /// Overload of [`Self::is_number_geographical`] for a known type and
    /// calling code.
    pub fn is_number_type_geographical(
        &self,
        phone_number_type: PhoneNumberType,
        country_calling_code: i32,
    ) -> bool {
        matches!(
            phone_number_type,
            PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile
        ) || (self.reg_exps.geo_mobile_countries.contains(&country_calling_code)
            && phone_number_type == PhoneNumberType::Mobile)
    }

    /// Attempts to extract a valid number from a phone number that is too long
    /// to be valid, and resets the PhoneNumber object passed in to that valid
    /// version. If no valid number could be extracted, the PhoneNumber object
    /// passed in will not be modified. Returns true if a valid phone number can
    /// be successfully extracted.
    pub fn truncate_too_long_number(&self, phone_number: &mut PhoneNumber) -> bool {
        if self.is_valid_number(phone_number) {
            return true;
        }
        let mut number_copy = phone_number.clone();
        let mut national_number = phone_number.national_number();
        loop {
            national_number /= 10;
            number_copy.set_national_number(national_number);
            if national_number == 0
                || self.is_possible_number_with_reason(&number_copy)
                    == Err(ValidationError::TooShort)
            {
                return false;
            }
            if self.is_valid_number(&number_copy) {
                break;
            }
        }
        phone_number.set_national_number(national_number);
        true
    }

    /// Returns the mobile token for the provided country calling code if it
    /// has one, e.g. "9" for Argentina.
    pub fn get_country_mobile_token(&self, country_calling_code: i32) -> Option<&str> {
        self.reg_exps
            .mobile_token_mappings
            .get(&country_calling_code)
            .copied()
    }

    /// Gets the length of the geographical area code from the national
    /// significant number, 0 when the number has no area code or its type
    /// carries none.
    pub fn get_length_of_geographical_area_code(&self, phone_number: &PhoneNumber) -> usize {
        let region_code = self.get_region_code_for_number(phone_number);
        let Some(metadata) = self.region_to_metadata_map.get(region_code) else {
            return 0;
        };
        let phone_number_type = self.get_number_type(phone_number);
        let country_calling_code = phone_number.country_code();
        if phone_number_type == PhoneNumberType::Mobile
            // Note this is a rough heuristic; it doesn't cover Indonesia well, for
            // example, where area codes are present for some mobile phones but not
            // for others. We have no better way of representing this in the
            // metadata at this point.
            && self
                .reg_exps
                .geo_mobile_countries_without_mobile_area_codes
                .contains(&country_calling_code)
        {
            return 0;
        }
        // If a country doesn't use a national prefix, and this number doesn't have
        // an Italian leading zero, we assume it is a closed dialling plan with no
        // area codes.
        if metadata.national_prefix.is_none()
            && !phone_number.italian_leading_zero()
            && !self
                .reg_exps
                .countries_without_national_prefix_with_area_codes
                .contains(&country_calling_code)
        {
            return 0;
        }
        if !self.is_number_type_geographical(phone_number_type, country_calling_code) {
            return 0;
        }
        self.get_length_of_national_destination_code(phone_number)
    }

    /// Gets the length of the national destination code (NDC) from the
    /// number. Mobile numbers of countries with a mobile token include it.
    pub fn get_length_of_national_destination_code(&self, phone_number: &PhoneNumber) -> usize {
        let mut copied_proto = phone_number.clone();
        // We don't want to draw attention to the extension, so we remove it
        // before formatting.
        copied_proto.clear_extension();
        let formatted_number = self
            .format(&copied_proto, PhoneNumberFormat::International)
            .into_owned();
        // The international format always starts with a plus sign, the first
        // group is kept empty to stay aligned with the calling code at index 1.
        let number_groups: Vec<&str> = std::iter::once("")
            .chain(
                formatted_number
                    .split(|c: char| !c.is_ascii_digit())
                    .filter(|group| !group.is_empty()),
            )
            .collect();
        // The pattern will start with "+COUNTRY_CODE " so the first group will
        // always be the empty string (before the + symbol) and the second group
        // will be the country calling code. The third group will be area code if
        // it is not the last group.
        if number_groups.len() <= 3 {
            return 0;
        }
        if self.get_number_type(phone_number) == PhoneNumberType::Mobile {
            // For example Argentinian mobile numbers, when formatted in the
            // international format, are in the form of +54 9 NDC XXXX.... As a
            // result, we take the length of the third group (NDC) and add the
            // length of the mobile token, which also forms part of the national
            // significant number. This assumes that the mobile token is always
            // formatted separately from the rest of the phone number.
            if self
                .get_country_mobile_token(phone_number.country_code())
                .is_some()
            {
                return number_groups[2].len() + number_groups[3].len();
            }
        }
        number_groups[2].len()
    }

    /// Gets a valid fixed-line number for the specified region.
    pub fn get_example_number(&self, region_code: &str) -> Result<PhoneNumber, GetExampleNumberError> {
        self.get_example_number_for_type(region_code, PhoneNumberType::FixedLine)
    }

    /// Gets a valid number for the specified region and number type.
    pub fn get_example_number_for_type(
        &self,
        region_code: &str,
        phone_number_type: PhoneNumberType,
    ) -> Result<PhoneNumber, GetExampleNumberError> {
        let Some(metadata) = self.region_to_metadata_map.get(region_code) else {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return Err(GetExampleNumberError::InvalidRegionCode);
        };
        let desc = get_number_desc_by_type(metadata, phone_number_type);
        let Some(example_number) = desc.example_number.as_deref() else {
            return Err(GetExampleNumberError::NoExampleNumber);
        };
        Ok(self.parse(example_number, region_code)?)
    }

    /// Gets a valid number for the specified non-geographical country calling
    /// code, trying the number types in a fixed order.
    pub fn get_example_number_for_non_geo_entity(
        &self,
        country_calling_code: i32,
    ) -> Result<PhoneNumber, GetExampleNumberError> {
        let Some(metadata) = self.get_metadata_for_non_geographical_region(country_calling_code)
        else {
            warn!(
                "Invalid or unknown country calling code provided: {}",
                country_calling_code
            );
            return Err(GetExampleNumberError::InvalidRegionCode);
        };
        // For geographical entities, fixed-line data is always present. However,
        // for non-geographical entities, this is not the case, so we have to go
        // through different types to find the example number. We don't check
        // fixed-line or personal number since they aren't used by non-geographical
        // entities (if this changes, a unit-test will catch this.)
        let descs = [
            &metadata.mobile,
            &metadata.toll_free,
            &metadata.shared_cost,
            &metadata.voip,
            &metadata.voicemail,
            &metadata.uan,
            &metadata.premium_rate,
        ];
        let Some(example_number) = descs.iter().find_map(|desc| desc.example_number.as_deref())
        else {
            return Err(GetExampleNumberError::NoExampleNumber);
        };
        let number = format!("+{}{}", country_calling_code, example_number);
        Ok(self.parse(&number, i18n::RegionCode::get_unknown())?)
    }

    /// Gets an invalid number for the specified region. This is useful for
    /// unit-testing purposes, where you want to test what will happen with an
    /// invalid number. Note that the number that is returned will always be
    /// able to be parsed and will have the correct country code. It may also be
    /// a valid *short* number/code for this region.
    pub fn get_invalid_example_number(
        &self,
        region_code: &str,
    ) -> Result<PhoneNumber, GetExampleNumberError> {
        let Some(metadata) = self.region_to_metadata_map.get(region_code) else {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return Err(GetExampleNumberError::InvalidRegionCode);
        };
        // We start off with a valid fixed-line number since every country supports
        // this. Alternatively we could start with a different number type, since
        // fixed-line numbers typically have a wide breadth of valid number ranges.
        let Some(example_number) = metadata.fixed_line.example_number.as_deref() else {
            // This shouldn't happen; we have a test for this.
            return Err(GetExampleNumberError::NoExampleNumber);
        };
        // Try and make the number invalid. We do this by changing the length. We
        // try reducing the length of the number, since currently no region has a
        // number that is the same length as MIN_LENGTH_FOR_NSN. This is probably
        // quicker than making the number longer, which is another alternative. We
        // could also use the possible number pattern to extract the possible
        // lengths of the number to make this faster, but this method is only for
        // unit-testing so simplicity is preferred to performance.  We don't want to
        // return a number that can't be parsed, so we check the number is long
        // enough. We try all possible lengths because phone number plans often have
        // overlapping prefixes so the number 123456 might be valid as a fixed-line
        // number, and 12345 as a mobile number. It would be faster to loop in a
        // different order, but we prefer numbers that look closer to real numbers
        // (and it gives us a variety of different lengths for the resulting phone
        // numbers - otherwise they would all be MIN_LENGTH_FOR_NSN digits long.)
        for phone_number_length in (MIN_LENGTH_FOR_NSN..example_number.len()).rev() {
            let number_to_try = &example_number[..phone_number_length];
            let Ok(possibly_valid_number) = self.parse(number_to_try, region_code) else {
                continue;
            };
            if !self.is_valid_number(&possibly_valid_number) {
                return Ok(possibly_valid_number);
            }
        }
        // We have a test to check that this doesn't happen for any of our supported
        // regions.
        Err(GetExampleNumberError::CouldNotGetNumber)
    }
}
