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

/// A single formatting rule for national significant numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberFormat {
    /// Pattern the whole national significant number must match.
    pub pattern: String,
    /// Replacement template, e.g. `$1 $2-$3`.
    pub format: String,
    /// Patterns probing the leading digits, least specific first. Only the
    /// last (most detailed) entry is consulted when choosing a rule.
    pub leading_digits_pattern: Vec<String>,
    /// How the first group is rendered in NATIONAL format, e.g. `0$1`.
    pub national_prefix_formatting_rule: Option<String>,
    pub national_prefix_optional_when_formatting: bool,
    /// How the first group is rendered when a carrier code is supplied, e.g.
    /// `0 $CC ($1)`.
    pub domestic_carrier_code_formatting_rule: Option<String>,
}

impl NumberFormat {
    pub fn new(pattern: &str, format: &str) -> Self {
        Self {
            pattern: pattern.to_owned(),
            format: format.to_owned(),
            ..Default::default()
        }
    }

    pub fn with_leading_digits(mut self, leading_digits: &str) -> Self {
        self.leading_digits_pattern.push(leading_digits.to_owned());
        self
    }

    pub fn with_national_prefix_formatting_rule(mut self, rule: &str) -> Self {
        self.national_prefix_formatting_rule = Some(rule.to_owned());
        self
    }

    pub fn with_national_prefix_optional_when_formatting(mut self, optional: bool) -> Self {
        self.national_prefix_optional_when_formatting = optional;
        self
    }

    pub fn with_domestic_carrier_code_formatting_rule(mut self, rule: &str) -> Self {
        self.domestic_carrier_code_formatting_rule = Some(rule.to_owned());
        self
    }

    pub fn national_prefix_formatting_rule(&self) -> &str {
        self.national_prefix_formatting_rule.as_deref().unwrap_or("")
    }

    pub fn domestic_carrier_code_formatting_rule(&self) -> &str {
        self.domestic_carrier_code_formatting_rule.as_deref().unwrap_or("")
    }
}

/// Describes one category of numbers of a region.
///
/// An empty `possible_length` list means the lengths are inherited from the
/// general descriptor. A single `-1` entry means the region has no numbers of
/// this type at all, which is also what [`Default`] produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumberDesc {
    pub national_number_pattern: Option<String>,
    /// Looser pattern a number must match to be considered possible. Used
    /// when no possible lengths are known.
    pub possible_number_pattern: Option<String>,
    pub possible_length: Vec<i32>,
    pub possible_length_local_only: Vec<i32>,
    pub example_number: Option<String>,
}

impl Default for PhoneNumberDesc {
    fn default() -> Self {
        Self {
            national_number_pattern: None,
            possible_number_pattern: None,
            possible_length: vec![-1],
            possible_length_local_only: Vec::new(),
            example_number: None,
        }
    }
}

impl PhoneNumberDesc {
    pub fn new(national_number_pattern: &str, possible_length: &[i32]) -> Self {
        Self {
            national_number_pattern: Some(national_number_pattern.to_owned()),
            possible_length: possible_length.to_vec(),
            ..Default::default()
        }
    }

    pub fn with_possible_length_local_only(mut self, lengths: &[i32]) -> Self {
        self.possible_length_local_only = lengths.to_vec();
        self
    }

    pub fn with_possible_number_pattern(mut self, pattern: &str) -> Self {
        self.possible_number_pattern = Some(pattern.to_owned());
        self
    }

    pub fn with_example_number(mut self, example_number: &str) -> Self {
        self.example_number = Some(example_number.to_owned());
        self
    }

    pub fn national_number_pattern(&self) -> &str {
        self.national_number_pattern.as_deref().unwrap_or("")
    }

    pub fn has_national_number_pattern(&self) -> bool {
        self.national_number_pattern.is_some()
    }

    pub fn example_number(&self) -> &str {
        self.example_number.as_deref().unwrap_or("")
    }

    pub fn has_example_number(&self) -> bool {
        self.example_number.is_some()
    }
}

/// Numbering plan of one region, or of one non-geographical calling code
/// (id `001`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneMetadata {
    pub id: String,
    pub country_code: i32,
    /// Pattern of the international dialing prefix, e.g. `011` for US.
    pub international_prefix: Option<String>,
    /// Used for formatting when `international_prefix` has several options.
    pub preferred_international_prefix: Option<String>,
    pub national_prefix: Option<String>,
    pub preferred_extn_prefix: Option<String>,
    /// Falls back to `national_prefix` when absent.
    pub national_prefix_for_parsing: Option<String>,
    /// Rewrite template applied when `national_prefix_for_parsing` captured
    /// groups, e.g. `9$1` for Argentina.
    pub national_prefix_transform_rule: Option<String>,
    pub same_mobile_and_fixed_line_pattern: bool,
    /// Marks the region holding the formatting rules for a shared calling
    /// code.
    pub main_country_for_code: bool,
    /// Disambiguates regions sharing a calling code.
    pub leading_digits: Option<String>,

    pub general_desc: PhoneNumberDesc,
    pub fixed_line: PhoneNumberDesc,
    pub mobile: PhoneNumberDesc,
    pub toll_free: PhoneNumberDesc,
    pub premium_rate: PhoneNumberDesc,
    pub shared_cost: PhoneNumberDesc,
    pub personal_number: PhoneNumberDesc,
    pub voip: PhoneNumberDesc,
    pub pager: PhoneNumberDesc,
    pub uan: PhoneNumberDesc,
    pub voicemail: PhoneNumberDesc,
    pub no_international_dialling: PhoneNumberDesc,

    pub number_format: Vec<NumberFormat>,
    /// International-only rules. When empty `number_format` is used for
    /// every style.
    pub intl_number_format: Vec<NumberFormat>,
}

impl PhoneMetadata {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn international_prefix(&self) -> &str {
        self.international_prefix.as_deref().unwrap_or("")
    }

    pub fn preferred_international_prefix(&self) -> &str {
        self.preferred_international_prefix.as_deref().unwrap_or("")
    }

    pub fn national_prefix(&self) -> &str {
        self.national_prefix.as_deref().unwrap_or("")
    }

    pub fn preferred_extn_prefix(&self) -> Option<&str> {
        self.preferred_extn_prefix.as_deref()
    }

    pub fn national_prefix_for_parsing(&self) -> &str {
        self.national_prefix_for_parsing
            .as_deref()
            .unwrap_or_else(|| self.national_prefix())
    }

    pub fn national_prefix_transform_rule(&self) -> &str {
        self.national_prefix_transform_rule.as_deref().unwrap_or("")
    }

    pub fn leading_digits(&self) -> Option<&str> {
        self.leading_digits.as_deref()
    }
}

/// Everything a loader hands to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneMetadataCollection {
    pub metadata: Vec<PhoneMetadata>,
}

impl From<Vec<PhoneMetadata>> for PhoneMetadataCollection {
    fn from(metadata: Vec<PhoneMetadata>) -> Self {
        Self { metadata }
    }
}
