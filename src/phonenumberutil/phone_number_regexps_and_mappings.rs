// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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
    collections::{HashMap, HashSet},
    sync::Arc,
};

use regex::{Regex, RegexBuilder};

use crate::{
    phonenumberutil::{
        helper_constants::{
            COUNTRIES_WITHOUT_NATIONAL_PREFIX_WITH_AREA_CODES, DIGITS, GEO_MOBILE_COUNTRIES,
            GEO_MOBILE_COUNTRIES_WITHOUT_MOBILE_AREA_CODES, MOBILE_TOKEN_MAPPINGS, PLUS_CHARS,
            PLUS_SIGN, RFC3966_VISUAL_SEPARATOR, SECOND_NUMBER_START, STAR_SIGN, VALID_ALPHA,
            VALID_ALPHA_INCL_UPPERCASE, VALID_PUNCTUATION,
        },
        helper_functions::create_extn_pattern,
    },
    regexp_cache::RegexCache,
};

// All patterns below are built from constants, a failure to compile is a
// programming error caught by `check_regexps_are_compiling`.
pub(crate) fn constant_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("constant pattern must compile")
}

/// Same as [`constant_regex`] for patterns whose bounded repetitions compile
/// to more states than the default limit allows.
pub(crate) fn constant_large_regex(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .size_limit(1 << 26)
        .build()
        .expect("constant pattern must compile")
}

pub(crate) struct PhoneNumberRegExpsAndMappings {
    /// Shared with the matcher api and every other component needing a
    /// region-specific pattern.
    pub regexp_cache: Arc<RegexCache>,

    /// A map that contains characters that are essential when dialling. That means
    /// any of the characters in this map must not be removed from a number when
    /// dialing, otherwise the call will not reach the intended destination.
    pub diallable_char_mappings: HashMap<char, char>,
    /// These mappings map a character (key) to a specific digit that should
    /// replace it for normalization purposes.
    pub alpha_mappings: HashMap<char, char>,
    /// For performance reasons, store a map of combining alpha_mappings with ASCII
    /// digits.
    pub alpha_phone_mappings: HashMap<char, char>,

    /// Separate map of all symbols that we wish to retain when formatting alpha
    /// numbers. This includes digits, ascii letters and number grouping symbols
    /// such as "-" and " ".
    pub all_plus_number_grouping_symbols: HashMap<char, char>,

    /// Map of country calling codes that use a mobile token before the area code.
    /// One example of when this is relevant is when determining the length of the
    /// national destination code, which should be the length of the area code plus
    /// the length of the mobile token.
    pub mobile_token_mappings: HashMap<i32, &'static str>,

    /// Set of country codes that doesn't have national prefix, but it has area
    /// codes.
    pub countries_without_national_prefix_with_area_codes: HashSet<i32>,

    /// Set of country codes that have geographically assigned mobile numbers (see
    /// geo_mobile_countries below) which are not based on *area codes*. For
    /// example, in China mobile numbers start with a carrier indicator, and beyond
    /// that are geographically assigned: this carrier indicator is not considered
    /// to be an area code.
    pub geo_mobile_countries_without_mobile_area_codes: HashSet<i32>,

    /// Set of country calling codes that have geographically assigned mobile
    /// numbers. This may not be complete; we add calling codes case by case, as we
    /// find geographical mobile numbers or hear from user reports.
    pub geo_mobile_countries: HashSet<i32>,

    /// Pattern that makes it easy to distinguish whether a region has a single
    /// international dialing prefix or not. If a region has a single international
    /// prefix (e.g. 011 in USA), it will be represented as a string that contains
    /// a sequence of ASCII digits, and possibly a tilde, which signals waiting for
    /// the tone. If there are multiple available international prefixes in a
    /// region, they will be represented as a regex string that always contains one
    /// or more characters that are not ASCII digits or a tilde. Anchored.
    pub single_international_prefix: Regex,

    /// Regular expression of acceptable characters that may start a phone number
    /// for the purposes of parsing. This allows us to strip away meaningless
    /// prefixes to phone numbers that may be mistakenly given to us. This consists
    /// of digits and the plus symbol. This does not contain alpha characters,
    /// although they may be used later in the number. It also does not include
    /// other punctuation, as this will be stripped later during parsing and is of
    /// no information value when parsing a number.
    pub valid_start_char_pattern: Regex,

    /// Regular expression of characters typically used to start a second phone
    /// number for the purposes of parsing.
    pub second_number_start_pattern: Regex,

    /// Regular expression of trailing characters that we want to remove. We remove
    /// all characters that are not alpha or numerical characters. The hash
    /// character is retained here, as it may signify the previous block was an
    /// extension.
    pub unwanted_end_char_pattern: Regex,

    /// Regular expression of groups of valid punctuation characters.
    pub separator_pattern: Regex,

    /// Regexp of all known extension prefixes used by different regions followed
    /// by 1 or more valid digits, for use when parsing. Anchored at the end.
    pub extn_pattern: Regex,

    /// Regular expression of viable phone numbers. This is location independent.
    /// Checks we have at least three leading digits, and only valid punctuation,
    /// alpha characters and digits in the phone number. The symbol 'x' is allowed
    /// here as valid punctuation since it is often used as a placeholder for
    /// carrier codes, for example in Brazilian phone numbers. We also allow
    /// multiple plus-signs at the start. An extension may be appended.
    pub valid_phone_number_pattern: Regex,

    /// We use this pattern to check if the phone number has at least three letters
    /// in it - if so, then we treat it as a number where some phone-number digits
    /// are represented by letters.
    pub valid_alpha_phone_pattern: Regex,

    /// The first_group_capturing_pattern was originally set to $1 but there
    /// are some countries for which the first group is not used in the
    /// national pattern (e.g. Argentina) so the $1 group does not match
    /// correctly. Therefore, we use \d, so that the first group actually
    /// used in the pattern will be matched.
    pub first_group_capturing_pattern: Regex,

    pub carrier_code_pattern: Regex,

    /// One or more plus signs at the start of the input.
    pub plus_chars_pattern: Regex,

    /// Regular expression of valid global-number-digits for the phone-context
    /// parameter, following the syntax defined in RFC3966.
    pub rfc3966_global_number_digits_pattern: Regex,

    /// Regular expression of valid domainname for the phone-context parameter,
    /// following the syntax defined in RFC3966.
    pub rfc3966_domainname_pattern: Regex,

    /// A pattern that is used to determine if a numberFormat under
    /// availableFormats is eligible to be used by the AYTF. It is eligible when
    /// the format element under numberFormat contains groups of the dollar sign
    /// followed by a single digit, separated by valid phone number punctuation.
    /// This prevents invalid punctuation (such as the star sign in Israeli star
    /// numbers) getting into the output of the AYTF.
    pub is_format_eligible_as_you_type_formatting_regex: Regex,

    /// A pattern that is used to determine if the national prefix formatting rule
    /// has the first group only, i.e., does not start with the national prefix.
    /// Note that the pattern explicitly allows for unbalanced parentheses.
    pub formatting_rule_has_first_group_only_regex: Regex,

    /// A character class such as `[2-9]` inside a formatting pattern, the as
    /// you type formatter widens these to any digit.
    pub character_class_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    fn initialize_regexp_mappings(&mut self) {
        self.mobile_token_mappings.extend(MOBILE_TOKEN_MAPPINGS.iter().copied());
        self.geo_mobile_countries_without_mobile_area_codes
            .extend(GEO_MOBILE_COUNTRIES_WITHOUT_MOBILE_AREA_CODES);
        self.countries_without_national_prefix_with_area_codes
            .extend(COUNTRIES_WITHOUT_NATIONAL_PREFIX_WITH_AREA_CODES);
        self.geo_mobile_countries.extend(GEO_MOBILE_COUNTRIES);
        self.geo_mobile_countries
            .extend(&self.geo_mobile_countries_without_mobile_area_codes);

        // Simple ASCII digits map used to populate ALPHA_PHONE_MAPPINGS and
        // ALL_PLUS_NUMBER_GROUPING_SYMBOLS.
        let ascii_digit_mappings: HashMap<char, char> = ('0'..='9').map(|d| (d, d)).collect();

        // IMPORTANT: only uppercase letters, lookups upper-case the key
        const KEYPAD: [(&str, char); 8] = [
            ("ABC", '2'),
            ("DEF", '3'),
            ("GHI", '4'),
            ("JKL", '5'),
            ("MNO", '6'),
            ("PQRS", '7'),
            ("TUV", '8'),
            ("WXYZ", '9'),
        ];
        self.alpha_mappings = KEYPAD
            .iter()
            .flat_map(|(letters, digit)| letters.chars().map(move |c| (c, *digit)))
            .collect();

        let mut combined_map = HashMap::with_capacity(36);
        combined_map.extend(self.alpha_mappings.iter());
        combined_map.extend(ascii_digit_mappings.iter());
        self.alpha_phone_mappings = combined_map;

        let mut diallable_char_map = HashMap::with_capacity(13);
        diallable_char_map.extend(ascii_digit_mappings.iter());
        diallable_char_map.insert(PLUS_SIGN, PLUS_SIGN);
        diallable_char_map.insert('*', '*');
        diallable_char_map.insert('#', '#');
        self.diallable_char_mappings = diallable_char_map;

        let mut all_plus_number_groupings = HashMap::new();
        // insert (lower letter -> upper letter) and (upper letter -> upper letter) mappings.
        for c in self.alpha_mappings.keys() {
            all_plus_number_groupings.insert(c.to_ascii_lowercase(), *c);
            all_plus_number_groupings.insert(*c, *c);
        }
        all_plus_number_groupings.extend(ascii_digit_mappings.iter());
        // insert grouping symbols.
        for dash in [
            '-', '\u{FF0D}', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}',
            '\u{2015}', '\u{2212}',
        ] {
            all_plus_number_groupings.insert(dash, '-');
        }
        all_plus_number_groupings.insert('/', '/');
        all_plus_number_groupings.insert('\u{FF0F}', '/');
        all_plus_number_groupings.insert(' ', ' ');
        all_plus_number_groupings.insert('\u{3000}', ' ');
        all_plus_number_groupings.insert('\u{2060}', ' ');
        all_plus_number_groupings.insert('.', '.');
        all_plus_number_groupings.insert('\u{FF0E}', '.');
        self.all_plus_number_grouping_symbols = all_plus_number_groupings;
    }

    pub fn new(regexp_cache: Arc<RegexCache>) -> Self {
        let alphanum = format!("{}{}", VALID_ALPHA_INCL_UPPERCASE, DIGITS);
        let extn_patterns_for_parsing = create_extn_pattern(true);
        let valid_phone_number = format!(
            "[{plus}]*(?:[{punct}{star}]*{digits}){{3,}}[{punct}{star}{digits}{alpha}]*",
            plus = PLUS_CHARS,
            punct = VALID_PUNCTUATION,
            star = STAR_SIGN,
            digits = DIGITS,
            alpha = VALID_ALPHA,
        );

        let rfc3966_phone_digit = format!("(?:{}|{})", DIGITS, RFC3966_VISUAL_SEPARATOR);
        let rfc3966_domainlabel = format!("[{}]+(?:-*[{}])*", alphanum, alphanum);
        let rfc3966_toplabel = format!("[{}]+(?:-*[{}])*", VALID_ALPHA_INCL_UPPERCASE, alphanum);

        let mut instance = Self {
            regexp_cache,
            diallable_char_mappings: Default::default(),
            alpha_mappings: Default::default(),
            alpha_phone_mappings: Default::default(),
            all_plus_number_grouping_symbols: Default::default(),
            mobile_token_mappings: Default::default(),
            countries_without_national_prefix_with_area_codes: Default::default(),
            geo_mobile_countries: Default::default(),
            geo_mobile_countries_without_mobile_area_codes: Default::default(),
            single_international_prefix: constant_regex(
                "^(?:[\\d]+(?:[~\u{2053}\u{223C}\u{FF5E}][\\d]+)?)$",
            ),
            valid_start_char_pattern: constant_regex(&format!("[{}{}]", PLUS_CHARS, DIGITS)),
            second_number_start_pattern: constant_regex(SECOND_NUMBER_START),
            unwanted_end_char_pattern: constant_regex("[^\\p{N}\\p{L}#]+$"),
            separator_pattern: constant_regex(&format!("[{}]+", VALID_PUNCTUATION)),
            extn_pattern: constant_regex(&format!("(?i)(?:{})$", extn_patterns_for_parsing)),
            valid_phone_number_pattern: constant_regex(&format!(
                "(?i)^(?:{})(?:{})?$",
                valid_phone_number, extn_patterns_for_parsing
            )),
            valid_alpha_phone_pattern: constant_regex("(?:.*?[A-Za-z]){3}"),
            first_group_capturing_pattern: constant_regex("(\\$\\d)"),
            carrier_code_pattern: constant_regex("\\$CC"),
            plus_chars_pattern: constant_regex(&format!("^[{}]+", PLUS_CHARS)),
            rfc3966_global_number_digits_pattern: constant_regex(&format!(
                "^\\{}{}*{}{}*$",
                PLUS_SIGN, rfc3966_phone_digit, DIGITS, rfc3966_phone_digit
            )),
            rfc3966_domainname_pattern: constant_regex(&format!(
                "^(?:{}\\.)*{}\\.?$",
                rfc3966_domainlabel, rfc3966_toplabel
            )),
            is_format_eligible_as_you_type_formatting_regex: constant_regex(&format!(
                "^[{p}]*\\$1[{p}]*(?:\\$\\d[{p}]*)*$",
                p = VALID_PUNCTUATION
            )),
            formatting_rule_has_first_group_only_regex: constant_regex("^\\(?\\$1\\)?$"),
            character_class_pattern: constant_regex("\\[([^\\[\\]])*\\]"),
        };
        instance.initialize_regexp_mappings();
        instance
    }
}
