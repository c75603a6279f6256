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

/// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 3;
pub const MAX_LENGTH_FOR_NSN: usize = 15;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
/// Longer input is rejected before any regex runs on it.
pub const MAX_INPUT_STRING_LENGTH: usize = 250;

pub const PLUS_CHARS: &str = "+\u{FF0B}";
// Regular expression of acceptable punctuation found in phone numbers. This
// excludes punctuation found as a leading character only. This consists of
// dash characters, white space characters, full stops, slashes, square
// brackets, parentheses and tildes. It also includes the letter 'x' as that
// is found as a placeholder for carrier information in some phone numbers.
// Full-width variants are also present.
// The leading dash and the square brackets are escaped, the string is always
// placed inside a character class.
pub const VALID_PUNCTUATION: &str = "\\-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}\u{FF5E}";

// Regular expression of characters typically used to start a second phone
// number for the purposes of parsing. This allows us to strip off parts of
// the number that are actually the start of another number, such as for:
// (530) 583-6985 x302/x2303 -> the second extension here makes this actually
// two phone numbers, (530) 583-6985 x302 and (530) 583-6985 x2303. We remove
// the second extension so that the first number is parsed correctly.
pub const SECOND_NUMBER_START: &str = r"[\\/] *x";

pub const REGION_CODE_FOR_NON_GEO_ENTITY: &str = "001";

pub const PLUS_SIGN: char = '+';
pub const STAR_SIGN: &str = "*";
pub const RFC3966_EXTN_PREFIX: &str = ";ext=";
pub const RFC3966_PREFIX: &str = "tel:";
pub const RFC3966_PHONE_CONTEXT: &str = ";phone-context=";
pub const RFC3966_ISDN_SUBADDRESS: &str = ";isub=";
pub const RFC3966_VISUAL_SEPARATOR: &str = r"[\-\.\(\)]?";

pub const DIGITS: &str = r"\p{Nd}";

pub const VALID_ALPHA: &str = "a-z";
pub const VALID_ALPHA_INCL_UPPERCASE: &str = "A-Za-z";

// Default extension prefix to use when formatting. This will be put in front of
// any extension component of the number, after the main national number is
// formatted. For example, if you wish the default extension formatting to be "
// extn: 3456", then you should specify " extn: " here as the default extension
// prefix. This can be overridden by region-specific preferences.
pub const DEFAULT_EXTN_PREFIX: &str = " ext. ";

pub const POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL: &str = "[ \u{00A0}\\t,]*";

// Optional full stop (.) or colon, followed by zero or more
// spaces/tabs/commas.
pub const POSSIBLE_CHARS_AFTER_EXT_LABEL: &str = "[:\\.\u{FF0E}]?[ \u{00A0}\\t,\\-]*";
pub const OPTIONAL_EXT_SUFFIX: &str = "#?";

pub const NANPA_COUNTRY_CODE: i32 = 1;

/// Country calling codes of regions whose mobile numbers carry a token
/// before the area code, with that token.
pub const MOBILE_TOKEN_MAPPINGS: &[(i32, &str)] = &[(54, "9")];

// Set of country codes that don't have a national prefix, but have area codes.
pub const COUNTRIES_WITHOUT_NATIONAL_PREFIX_WITH_AREA_CODES: &[i32] = &[52];

// Countries with geographically assigned mobile numbers that are not based on
// area codes, e.g. China where mobile numbers start with a carrier indicator.
pub const GEO_MOBILE_COUNTRIES_WITHOUT_MOBILE_AREA_CODES: &[i32] = &[86];

/// Country calling codes that have geographically assigned mobile numbers.
pub const GEO_MOBILE_COUNTRIES: &[i32] = &[
    52, // Mexico
    54, // Argentina
    55, // Brazil
    62, // Indonesia: some prefixes only (fixed CMDA wireless)
    86, // China
];

/// Placeholder written into as-you-type templates for each digit position.
pub const DIGIT_PLACEHOLDER: char = '\u{2008}';
