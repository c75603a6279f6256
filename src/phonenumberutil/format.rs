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

use std::borrow::Cow;

use log::{error, warn};
use regex::NoExpand;

use super::{
    PhoneNumberFormat, PhoneNumberType, PhoneNumberUtil,
    errors::ValidationError,
    helper_constants::{
        DEFAULT_EXTN_PREFIX, NANPA_COUNTRY_CODE, REGION_CODE_FOR_NON_GEO_ENTITY,
        RFC3966_EXTN_PREFIX,
    },
    helper_functions::{normalize_helper, prefix_number_with_country_calling_code},
};
use crate::{
    macros::owned_from_cow_or,
    metadata::{NumberFormat, PhoneMetadata},
    phonenumber::{CountryCodeSource, PhoneNumber},
    regex_util::{RegexConsume, to_regex_replacement},
};

const NATIONAL_PREFIX_TOKEN: &str = "$NP";
const FIRST_GROUP_TOKEN: &str = "$FG";

impl PhoneNumberUtil {
    /// Formats a phone number in the specified format using default rules. Note
    /// that this does not promise to produce a phone number that the user can
    /// dial from where they are - although we do format in either NATIONAL or
    /// INTERNATIONAL format depending on what the client asks for, we do not
    /// currently support a more abbreviated format, such as for users in the
    /// same area who could potentially dial the number without area code.
    pub fn format<'a>(&self, phone_number: &'a PhoneNumber, number_format: PhoneNumberFormat) -> Cow<'a, str> {
        if phone_number.national_number() == 0 && !phone_number.raw_input().is_empty() {
            // Unparseable numbers that kept their raw input just use that. This is
            // the only case where a number can be formatted as E164 without a
            // leading '+' symbol (but the original number wasn't parseable anyway).
            return Cow::Borrowed(phone_number.raw_input());
        }
        let country_calling_code = phone_number.country_code();
        let national_significant_number = Self::get_national_significant_number(phone_number);
        if number_format == PhoneNumberFormat::E164 {
            // Early exit for E164 case (even if the country calling code is invalid)
            // since no formatting of the national number needs to be applied.
            // Extensions are not formatted.
            let mut formatted_number = national_significant_number;
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::E164,
                &mut formatted_number,
            );
            return Cow::Owned(formatted_number);
        }
        if !self.has_valid_country_calling_code(country_calling_code) {
            return Cow::Owned(national_significant_number);
        }
        // Note here that all NANPA formatting rules are contained by US, so we use
        // that to format NANPA numbers. The same applies to Russian Fed regions -
        // rules are contained by Russia.
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return Cow::Owned(national_significant_number);
        };
        let mut formatted_number = owned_from_cow_or!(
            self.format_nsn(&national_significant_number, metadata, number_format),
            national_significant_number.clone()
        );
        Self::maybe_append_formatted_extension(
            phone_number,
            metadata,
            number_format,
            &mut formatted_number,
        );
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        Cow::Owned(formatted_number)
    }

    /// Formats a phone number in the specified format using client-defined
    /// formatting rules. In those rules `$NP` stands for the national prefix
    /// and `$FG` for the first group of the national number.
    pub fn format_by_pattern(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
        user_defined_formats: &[NumberFormat],
    ) -> String {
        let country_calling_code = phone_number.country_code();
        let national_significant_number = Self::get_national_significant_number(phone_number);
        if !self.has_valid_country_calling_code(country_calling_code) {
            return national_significant_number;
        }
        // Note get_region_code_for_country_code() is used because formatting
        // information for regions which share a country calling code is contained
        // by only one region for performance reasons. For example, for NANPA
        // regions it will be contained in the metadata for US.
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return national_significant_number;
        };

        let mut formatted_number = match self
            .choose_formatting_pattern_for_number(user_defined_formats, &national_significant_number)
        {
            Some(formatting_pattern) => {
                // Before we do a replacement of the national prefix pattern $NP with
                // the national prefix, we need to copy the rule so that subsequent
                // replacements for different numbers have the appropriate national
                // prefix.
                let mut num_format_copy = formatting_pattern.clone();
                let national_prefix_formatting_rule =
                    formatting_pattern.national_prefix_formatting_rule();
                if !national_prefix_formatting_rule.is_empty() {
                    let national_prefix = metadata.national_prefix();
                    // Without a national prefix there is no rule for formatting it.
                    num_format_copy.national_prefix_formatting_rule =
                        (!national_prefix.is_empty()).then(|| {
                            national_prefix_formatting_rule
                                .replace(NATIONAL_PREFIX_TOKEN, national_prefix)
                                .replace(FIRST_GROUP_TOKEN, "$1")
                        });
                }
                self.format_nsn_using_pattern(
                    &national_significant_number,
                    &num_format_copy,
                    number_format,
                )
            }
            None => national_significant_number,
        };
        Self::maybe_append_formatted_extension(
            phone_number,
            metadata,
            number_format,
            &mut formatted_number,
        );
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        formatted_number
    }

    /// Formats a phone number in national format for dialing using the carrier
    /// as specified in the `carrier_code`. The `carrier_code` will always be
    /// used regardless of whether the phone number already has a preferred
    /// domestic carrier code stored. If `carrier_code` contains an empty
    /// string, returns the number in national format without any carrier code.
    pub fn format_national_number_with_carrier_code(
        &self,
        phone_number: &PhoneNumber,
        carrier_code: &str,
    ) -> String {
        let country_calling_code = phone_number.country_code();
        let national_significant_number = Self::get_national_significant_number(phone_number);
        if !self.has_valid_country_calling_code(country_calling_code) {
            return national_significant_number;
        }
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return national_significant_number;
        };

        let mut formatted_number = owned_from_cow_or!(
            self.format_nsn_with_carrier(
                &national_significant_number,
                metadata,
                PhoneNumberFormat::National,
                carrier_code,
            ),
            national_significant_number.clone()
        );
        Self::maybe_append_formatted_extension(
            phone_number,
            metadata,
            PhoneNumberFormat::National,
            &mut formatted_number,
        );
        prefix_number_with_country_calling_code(
            country_calling_code,
            PhoneNumberFormat::National,
            &mut formatted_number,
        );
        formatted_number
    }

    /// Formats a phone number in national format for dialing using the carrier
    /// as specified in the preferred_domestic_carrier_code field of the
    /// PhoneNumber object passed in. If that is missing, use the
    /// `fallback_carrier_code` passed in instead. If there is no
    /// preferred_domestic_carrier_code, and the `fallback_carrier_code`
    /// contains an empty string, return the number in national format without
    /// any carrier code.
    pub fn format_national_number_with_preferred_carrier_code(
        &self,
        phone_number: &PhoneNumber,
        fallback_carrier_code: &str,
    ) -> String {
        // Historically, we set this to an empty string when parsing with raw input
        // if none was found in the input string. However, this doesn't result in a
        // number we can dial. For this reason, we treat the empty string the same
        // as if it isn't set at all.
        let carrier_code = if !phone_number.preferred_domestic_carrier_code().is_empty() {
            phone_number.preferred_domestic_carrier_code()
        } else {
            fallback_carrier_code
        };
        self.format_national_number_with_carrier_code(phone_number, carrier_code)
    }

    /// Returns a number formatted in such a way that it can be dialed from a
    /// mobile phone in a specific region. If the number cannot be reached from
    /// the region (e.g. some countries block toll-free numbers from being
    /// called outside of the country), the method returns an empty string.
    pub fn format_number_for_mobile_dialing(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
        with_formatting: bool,
    ) -> String {
        let country_calling_code = phone_number.country_code();
        if !self.has_valid_country_calling_code(country_calling_code) {
            return phone_number.raw_input().to_owned();
        }

        // Clear the extension, as that part cannot normally be dialed together
        // with the main number.
        let mut number_no_extension = phone_number.clone();
        number_no_extension.clear_extension();
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let number_type = self.get_number_type(&number_no_extension);
        let is_valid_number = number_type != PhoneNumberType::Unknown;

        let formatted_number = if region_calling_from == region_code {
            let is_fixed_line_or_mobile = matches!(
                number_type,
                PhoneNumberType::FixedLine
                    | PhoneNumberType::FixedLineOrMobile
                    | PhoneNumberType::Mobile
            );
            // Carrier codes may be needed in some countries. We handle this here.
            if region_code == "BR" && is_fixed_line_or_mobile {
                // Brazilian fixed line and mobile numbers need to be dialed with a
                // carrier code when called within Brazil. Without that, most of the
                // carriers won't connect the call. Because of that, we return an
                // empty string here.
                if number_no_extension.preferred_domestic_carrier_code().is_empty() {
                    String::new()
                } else {
                    self.format_national_number_with_preferred_carrier_code(&number_no_extension, "")
                }
            } else if country_calling_code == NANPA_COUNTRY_CODE {
                // For NANPA countries, we output international format for numbers
                // that can be dialed internationally, since that always works,
                // except for numbers which might potentially be short numbers,
                // which are always dialled in national format.
                let possibly_short = self
                    .get_metadata_for_region(region_calling_from)
                    .map(|metadata| {
                        self.test_number_length(
                            &Self::get_national_significant_number(&number_no_extension),
                            metadata,
                            PhoneNumberType::Unknown,
                        ) == Err(ValidationError::TooShort)
                    })
                    .unwrap_or(true);
                let number_format =
                    if self.can_be_internationally_dialled(&number_no_extension) && !possibly_short {
                        PhoneNumberFormat::International
                    } else {
                        PhoneNumberFormat::National
                    };
                self.format(&number_no_extension, number_format).into_owned()
            } else {
                // For non-geographical countries, and Mexican, Chilean and Uzbek
                // fixed line and mobile numbers, we output international format for
                // numbers that can be dialed internationally as that always works.
                // MX and CL need a carrier or prefix that depends on the caller
                // otherwise. UZ needs special codes in front of fixed-line and
                // mobile numbers when dialled from mobile devices.
                let number_format = if (region_code == REGION_CODE_FOR_NON_GEO_ENTITY
                    || (matches!(region_code, "MX" | "CL" | "UZ") && is_fixed_line_or_mobile))
                    && self.can_be_internationally_dialled(&number_no_extension)
                {
                    PhoneNumberFormat::International
                } else {
                    PhoneNumberFormat::National
                };
                self.format(&number_no_extension, number_format).into_owned()
            }
        } else if is_valid_number && self.can_be_internationally_dialled(&number_no_extension) {
            // We assume that short numbers are not diallable from outside their
            // region, so if a number is not a valid regular length phone number, we
            // treat it as if it cannot be internationally dialled.
            let number_format = if with_formatting {
                PhoneNumberFormat::International
            } else {
                PhoneNumberFormat::E164
            };
            return self.format(&number_no_extension, number_format).into_owned();
        } else {
            String::new()
        };

        if with_formatting {
            formatted_number
        } else {
            self.normalize_diallable_chars_only(&formatted_number)
        }
    }

    /// Formats a phone number for out-of-country dialing purposes.
    ///
    /// Note that in this version, if the number was entered originally using
    /// alpha characters and this version of the number is stored in raw_input,
    /// this representation of the number will be used rather than the digit
    /// representation. Grouping information, as specified by characters such
    /// as "-" and " ", will be retained.
    ///
    /// Caveats:
    ///  - This will not produce good results if the country calling code is
    ///    both present in the raw input _and_ is the start of the national
    ///    number. This is not a problem in the regions which typically use
    ///    alpha numbers.
    ///  - This will also not produce good results if the raw input has any
    ///    grouping information within the first three digits of the national
    ///    number, and if the function needs to strip preceding digits/words in
    ///    the raw input before these digits. Normally people group the first
    ///    three digits together so this is not a huge problem.
    pub fn format_out_of_country_calling_number(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
    ) -> String {
        let Some(metadata_calling_from) = self.get_metadata_for_region(region_calling_from) else {
            warn!(
                "Trying to format number from invalid region {}. International formatting applied.",
                region_calling_from
            );
            return self
                .format(phone_number, PhoneNumberFormat::International)
                .into_owned();
        };
        let country_code = phone_number.country_code();
        let national_significant_number = Self::get_national_significant_number(phone_number);
        if !self.has_valid_country_calling_code(country_code) {
            return national_significant_number;
        }
        if country_code == NANPA_COUNTRY_CODE {
            if self.is_nanpa_country(region_calling_from) {
                // For NANPA regions, return the national format for these regions
                // but prefix it with the country calling code.
                return format!(
                    "{} {}",
                    country_code,
                    self.format(phone_number, PhoneNumberFormat::National)
                );
            }
        } else if country_code == metadata_calling_from.country_code {
            // If regions share a country calling code, the country calling code
            // need not be dialled. This also applies when dialling within a
            // region, so this if clause covers both these cases. Technically this
            // is the case for dialling from La Reunion to other overseas
            // departments of France (French Guiana, Martinique, Guadeloupe), but
            // not vice versa - so we don't cover this edge case for now and for
            // those cases return the version including country calling code.
            return self
                .format(phone_number, PhoneNumberFormat::National)
                .into_owned();
        }
        // Metadata cannot be missing because we checked the country code is valid.
        let international_prefix = metadata_calling_from.international_prefix();
        // For regions that have multiple international prefixes, the
        // international format of the number is returned, unless there is a
        // preferred international prefix.
        let international_prefix_for_formatting =
            if !metadata_calling_from.preferred_international_prefix().is_empty() {
                metadata_calling_from.preferred_international_prefix()
            } else if self
                .reg_exps
                .single_international_prefix
                .is_match(international_prefix)
            {
                international_prefix
            } else {
                ""
            };

        let region_code = self.get_region_code_for_country_code(country_code);
        // Metadata cannot be missing because the country calling code is valid.
        let Some(metadata_for_region) =
            self.get_metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return national_significant_number;
        };
        let mut formatted_number = owned_from_cow_or!(
            self.format_nsn(
                &national_significant_number,
                metadata_for_region,
                PhoneNumberFormat::International,
            ),
            national_significant_number.clone()
        );
        Self::maybe_append_formatted_extension(
            phone_number,
            metadata_for_region,
            PhoneNumberFormat::International,
            &mut formatted_number,
        );
        Self::prefix_with_international_prefix(
            international_prefix_for_formatting,
            country_code,
            formatted_number,
        )
    }

    /// Formats a phone number using the original phone number format (e.g.
    /// INTERNATIONAL or NATIONAL) that the number is parsed from, provided
    /// that the number has been parsed with parse_and_keep_raw_input.
    /// Otherwise the number will be formatted in NATIONAL format. The
    /// original format is embedded in the country_code_source field of the
    /// PhoneNumber object passed in, which is only set when parsing keeps the
    /// raw input. When we don't have a formatting pattern for the number, the
    /// method falls back to returning the raw input.
    ///
    /// Note this method guarantees no digit will be inserted, removed or
    /// modified as a result of formatting.
    pub fn format_in_original_format(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
    ) -> String {
        if phone_number.has_raw_input() && !self.has_formatting_pattern_for_number(phone_number) {
            // We check if we have the formatting pattern because without that, we
            // might format the number as a group without national prefix.
            return phone_number.raw_input().to_owned();
        }
        let Some(country_code_source) = phone_number.country_code_source() else {
            return self
                .format(phone_number, PhoneNumberFormat::National)
                .into_owned();
        };
        let formatted_number = match country_code_source {
            CountryCodeSource::FromNumberWithPlusSign => self
                .format(phone_number, PhoneNumberFormat::International)
                .into_owned(),
            CountryCodeSource::FromNumberWithIdd => {
                self.format_out_of_country_calling_number(phone_number, region_calling_from)
            }
            CountryCodeSource::FromNumberWithoutPlusSign => {
                let international = self.format(phone_number, PhoneNumberFormat::International);
                international
                    .strip_prefix('+')
                    .unwrap_or(&*international)
                    .to_owned()
            }
            CountryCodeSource::FromDefaultCountry => {
                self.format_from_default_country_keeping_prefix(phone_number)
            }
        };
        // If no digit is inserted/removed/modified as a result of our
        // formatting, we return the formatted phone number; otherwise we return
        // the raw input the user entered.
        let raw_input = phone_number.raw_input();
        if !raw_input.is_empty()
            && self.normalize_diallable_chars_only(&formatted_number)
                != self.normalize_diallable_chars_only(raw_input)
        {
            return raw_input.to_owned();
        }
        formatted_number
    }

    /// National format that only carries a national prefix when the user
    /// typed one.
    fn format_from_default_country_keeping_prefix(&self, phone_number: &PhoneNumber) -> String {
        let country_code = phone_number.country_code();
        let region_code = self.get_region_code_for_country_code(country_code);
        let national_format = self
            .format(phone_number, PhoneNumberFormat::National)
            .into_owned();
        // We check if there is a national prefix in the original number, if so
        // we format the number in national format.
        let national_prefix = self
            .get_ndd_prefix_for_region(region_code, true)
            .unwrap_or_default();
        if national_prefix.is_empty()
            || self.raw_input_contains_national_prefix(
                phone_number.raw_input(),
                &national_prefix,
                region_code,
            )
        {
            return national_format;
        }
        let Some(metadata) = self.get_metadata_for_region(region_code) else {
            return national_format;
        };
        let national_number = Self::get_national_significant_number(phone_number);
        let Some(format_rule) =
            self.choose_formatting_pattern_for_number(&metadata.number_format, &national_number)
        else {
            return national_format;
        };
        // When the format we apply to this number doesn't contain national
        // prefix, we can just return the national format.
        let candidate_national_prefix_rule = format_rule.national_prefix_formatting_rule();
        // We assume that the first-group symbol will never be _before_ the
        // national prefix.
        let Some(index_of_first_group) = candidate_national_prefix_rule
            .find("$1")
            .filter(|index| *index > 0)
        else {
            return national_format;
        };
        if Self::normalize_digits_only(&candidate_national_prefix_rule[..index_of_first_group])
            .is_empty()
        {
            return national_format;
        }
        // Otherwise, we need to remove the national prefix from our output.
        let mut num_format_copy = format_rule.clone();
        num_format_copy.national_prefix_formatting_rule = None;
        self.format_by_pattern(
            phone_number,
            PhoneNumberFormat::National,
            std::slice::from_ref(&num_format_copy),
        )
    }

    /// Check if raw_input, which is assumed to be in the national format, has
    /// a national prefix. The national prefix is assumed to be in digits-only
    /// form.
    fn raw_input_contains_national_prefix(
        &self,
        raw_input: &str,
        national_prefix: &str,
        region_code: &str,
    ) -> bool {
        let normalized_national_number = Self::normalize_digits_only(raw_input);
        let Some(without_prefix) = normalized_national_number.strip_prefix(national_prefix) else {
            return false;
        };
        // Some Japanese numbers (e.g. 00777123) might be mistaken to contain
        // the national prefix when written without it (e.g. 0777123) if we just
        // do prefix matching. To tackle that, we check the validity of the
        // number if the assumed national prefix is removed (777123 won't be
        // valid in Japan).
        self.parse(without_prefix, region_code)
            .is_ok_and(|number| self.is_valid_number(&number))
    }

    fn has_formatting_pattern_for_number(&self, phone_number: &PhoneNumber) -> bool {
        let country_calling_code = phone_number.country_code();
        let phone_number_region = self.get_region_code_for_country_code(country_calling_code);
        let Some(metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, phone_number_region)
        else {
            return false;
        };
        let national_number = Self::get_national_significant_number(phone_number);
        self.choose_formatting_pattern_for_number(&metadata.number_format, &national_number)
            .is_some()
    }

    /// Formats a phone number for out-of-country dialing purposes.
    ///
    /// Note that in this version, if the number was entered originally using
    /// alpha characters and this version of the number is stored in
    /// raw_input, this representation of the number will be used rather than
    /// the digit representation. Grouping information, as specified by
    /// characters such as "-" and " ", will be retained.
    pub fn format_out_of_country_keeping_alpha_chars(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
    ) -> String {
        // If there is no raw input, then we can't keep alpha characters because
        // there aren't any. In this case, we return
        // format_out_of_country_calling_number.
        if phone_number.raw_input().is_empty() {
            return self.format_out_of_country_calling_number(phone_number, region_calling_from);
        }
        let country_code = phone_number.country_code();
        if !self.has_valid_country_calling_code(country_code) {
            return phone_number.raw_input().to_owned();
        }
        // Strip any prefix such as country calling code, IDD, that was present.
        // We do this by comparing the number in raw_input with the parsed number.
        // Normalize punctuation. We retain number grouping symbols such as " "
        // only.
        let mut raw_input = normalize_helper(
            &self.reg_exps.all_plus_number_grouping_symbols,
            true,
            phone_number.raw_input(),
        );
        // Now we trim everything before the first three digits in the parsed
        // number. We choose three because all valid alpha numbers have 3 digits
        // at the start - if it does not, then we don't trim anything at all.
        // Similarly, if the national number was less than three digits, we don't
        // trim anything at all.
        let national_number = Self::get_national_significant_number(phone_number);
        if national_number.len() > 3 {
            if let Some(first_national_number_digit) = raw_input.find(&national_number[..3]) {
                raw_input.drain(..first_national_number_digit);
            }
        }

        let metadata_calling_from = self.get_metadata_for_region(region_calling_from);
        if country_code == NANPA_COUNTRY_CODE {
            if self.is_nanpa_country(region_calling_from) {
                return format!("{} {}", country_code, raw_input);
            }
        } else if let Some(metadata) =
            metadata_calling_from.filter(|metadata| metadata.country_code == country_code)
        {
            let Some(formatting_pattern) =
                self.choose_formatting_pattern_for_number(&metadata.number_format, &national_number)
            else {
                // If no pattern above is matched, we format the original input.
                return raw_input;
            };
            let mut new_format = formatting_pattern.clone();
            // The first group is the first group of digits that the user wrote
            // together.
            new_format.pattern = "(\\d+)(.*)".to_owned();
            // Here we just concatenate them back together after the national
            // prefix has been fixed.
            new_format.format = "$1$2".to_owned();
            // Now we format using this pattern instead of the default pattern,
            // but with the national prefix prefixed if necessary. This will not
            // work in the cases where the pattern (and not the leading digits)
            // decide whether a national prefix needs to be used, since we have
            // overridden the pattern to match anything, but that is not the case
            // in the metadata to date.
            return self.format_nsn_using_pattern(&raw_input, &new_format, PhoneNumberFormat::National);
        }

        let international_prefix_for_formatting = metadata_calling_from
            .map(|metadata| {
                let international_prefix = metadata.international_prefix();
                // For regions that have multiple international prefixes, the
                // international format of the number is returned, unless there is
                // a preferred international prefix.
                if self
                    .reg_exps
                    .single_international_prefix
                    .is_match(international_prefix)
                {
                    international_prefix
                } else {
                    metadata.preferred_international_prefix()
                }
            })
            .unwrap_or("");
        if international_prefix_for_formatting.is_empty()
            && !self.is_valid_region_code(region_calling_from)
        {
            warn!(
                "Trying to format number from invalid region {}. International formatting applied.",
                region_calling_from
            );
        }

        let mut formatted_number = raw_input;
        let region_code = self.get_region_code_for_country_code(country_code);
        // Metadata cannot be missing because the country calling code is valid.
        if let Some(metadata_for_region) =
            self.get_metadata_for_region_or_calling_code(country_code, region_code)
        {
            Self::maybe_append_formatted_extension(
                phone_number,
                metadata_for_region,
                PhoneNumberFormat::International,
                &mut formatted_number,
            );
        }
        Self::prefix_with_international_prefix(
            international_prefix_for_formatting,
            country_code,
            formatted_number,
        )
    }

    /// Prefixes `formatted_number` with "IDD cc " when an IDD is known,
    /// falling back to the "+cc " of INTERNATIONAL format.
    fn prefix_with_international_prefix(
        international_prefix_for_formatting: &str,
        country_code: i32,
        mut formatted_number: String,
    ) -> String {
        if international_prefix_for_formatting.is_empty() {
            prefix_number_with_country_calling_code(
                country_code,
                PhoneNumberFormat::International,
                &mut formatted_number,
            );
            return formatted_number;
        }
        format!(
            "{} {} {}",
            international_prefix_for_formatting, country_code, formatted_number
        )
    }

    /// Formats the national significant number with the first rule of
    /// `metadata` that fits.
    fn format_nsn<'b>(
        &self,
        phone_number: &'b str,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> Cow<'b, str> {
        self.format_nsn_with_carrier(phone_number, metadata, number_format, "")
    }

    fn format_nsn_with_carrier<'b>(
        &self,
        number: &'b str,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
        carrier_code: &str,
    ) -> Cow<'b, str> {
        // When the intl_number_formats exists, we use that to format national
        // number for the INTERNATIONAL format instead of using the
        // number_desc.number_formats.
        let available_formats = if metadata.intl_number_format.is_empty()
            || number_format == PhoneNumberFormat::National
        {
            &metadata.number_format
        } else {
            &metadata.intl_number_format
        };
        match self.choose_formatting_pattern_for_number(available_formats, number) {
            Some(formatting_pattern) => Cow::Owned(self.format_nsn_using_pattern_with_carrier(
                number,
                formatting_pattern,
                number_format,
                carrier_code,
            )),
            None => Cow::Borrowed(number),
        }
    }

    /// Returns the first rule whose most detailed leading digits pattern
    /// matches the start of `national_number` and whose pattern matches all
    /// of it.
    pub(crate) fn choose_formatting_pattern_for_number<'b>(
        &self,
        available_formats: &'b [NumberFormat],
        national_number: &str,
    ) -> Option<&'b NumberFormat> {
        available_formats.iter().find(|format| {
            // We always use the last leading_digits_pattern, as it is the most
            // detailed.
            let leading_digits_match = format
                .leading_digits_pattern
                .last()
                .is_none_or(|leading_digits| self.matches_start(leading_digits, national_number));
            leading_digits_match && self.matches_entirely(&format.pattern, national_number)
        })
    }

    /// Simple wrapper of format_nsn_using_pattern_with_carrier for the common
    /// case of no carrier code.
    pub(crate) fn format_nsn_using_pattern(
        &self,
        national_number: &str,
        formatting_pattern: &NumberFormat,
        number_format: PhoneNumberFormat,
    ) -> String {
        self.format_nsn_using_pattern_with_carrier(
            national_number,
            formatting_pattern,
            number_format,
            "",
        )
    }

    // Note that carrier_code is optional - if an empty string, no carrier code
    // replacement will take place.
    fn format_nsn_using_pattern_with_carrier(
        &self,
        national_number: &str,
        formatting_pattern: &NumberFormat,
        number_format: PhoneNumberFormat,
        carrier_code: &str,
    ) -> String {
        let mut number_format_rule = Cow::Borrowed(formatting_pattern.format.as_str());
        let carrier_code_formatting_rule = formatting_pattern.domestic_carrier_code_formatting_rule();
        let national_prefix_formatting_rule = formatting_pattern.national_prefix_formatting_rule();
        if number_format == PhoneNumberFormat::National {
            if !carrier_code.is_empty() && !carrier_code_formatting_rule.is_empty() {
                // Replace the $CC in the formatting rule with the desired carrier
                // code.
                let carrier_code_formatting_rule = self
                    .reg_exps
                    .carrier_code_pattern
                    .replace(carrier_code_formatting_rule, NoExpand(carrier_code));
                number_format_rule = Cow::Owned(
                    self.reg_exps
                        .first_group_capturing_pattern
                        .replace(
                            &number_format_rule,
                            to_regex_replacement(&carrier_code_formatting_rule),
                        )
                        .into_owned(),
                );
            } else if !national_prefix_formatting_rule.is_empty() {
                // Use the national prefix formatting rule instead. It is applied to
                // the first group only as the formatting pattern contains only
                // information on how the national significant number should be
                // formatted at this point.
                number_format_rule = Cow::Owned(
                    self.reg_exps
                        .first_group_capturing_pattern
                        .replace(
                            &number_format_rule,
                            to_regex_replacement(national_prefix_formatting_rule),
                        )
                        .into_owned(),
                );
            }
        }

        let pattern_to_match = match self
            .reg_exps
            .regexp_cache
            .get_full_match_regex(&formatting_pattern.pattern)
        {
            Ok(regex) => regex,
            Err(err) => {
                error!("Invalid format pattern! {}: {}", formatting_pattern.pattern, err);
                return national_number.to_owned();
            }
        };
        let formatted_number = pattern_to_match
            .replace(national_number, to_regex_replacement(&number_format_rule))
            .into_owned();

        if number_format != PhoneNumberFormat::RFC3966 {
            return formatted_number;
        }
        // First consume any leading punctuation, if any was present.
        let without_leading_separator = match self.reg_exps.separator_pattern.find_start(&formatted_number) {
            Some(leading) => &formatted_number[leading.end()..],
            None => &formatted_number,
        };
        // Then replace all separators with a "-".
        self.reg_exps
            .separator_pattern
            .replace_all(without_leading_separator, "-")
            .into_owned()
    }

    /// Appends the formatted extension of a phone number to formatted_number,
    /// if the phone number had an extension specified.
    fn maybe_append_formatted_extension(
        phone_number: &PhoneNumber,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
        formatted_number: &mut String,
    ) {
        if phone_number.extension().is_empty() {
            return;
        }
        let prefix = if number_format == PhoneNumberFormat::RFC3966 {
            RFC3966_EXTN_PREFIX
        } else {
            metadata.preferred_extn_prefix().unwrap_or(DEFAULT_EXTN_PREFIX)
        };
        formatted_number.push_str(prefix);
        formatted_number.push_str(phone_number.extension());
    }
}
