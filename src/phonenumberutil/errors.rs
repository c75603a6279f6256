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

use std::num::ParseIntError;

use thiserror::Error;

/// Reasons a string could not be parsed into a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No usable default region and no leading plus sign, or the digits
    /// after a plus sign or IDD are not a known country calling code.
    #[error("Invalid country code")]
    InvalidCountryCode,
    #[error("Not a number: {0}")]
    NotANumber(#[from] NotANumberError),
    /// Three digits or fewer follow the plus sign or IDD.
    #[error("Too short after idd")]
    TooShortAfterIdd,
    #[error("Too short nsn")]
    TooShortNsn,
    /// The national significant number or the whole input is too long.
    #[error("Too long nsn")]
    TooLongNsn,
}

/// Why an input was rejected as [`ParseError::NotANumber`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotANumberError {
    #[error("Input does not look like a phone number")]
    NotMatchedValidNumberPattern,
    #[error("Invalid phone-context parameter")]
    InvalidPhoneContext,
    #[error("{0}")]
    FailedToParseNumberAsInt(#[from] ParseIntError),
    #[error("{0}")]
    FailedToExtractNumber(#[from] ExtractNumberError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractNumberError {
    #[error("No character that can start a phone number")]
    NoValidStartCharacter,
    #[error("Nothing left after trimming")]
    NotANumber,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetExampleNumberError {
    #[error("Example number does not parse: {0}")]
    FailedToParse(#[from] ParseError),
    #[error("No example number for this type")]
    NoExampleNumber,
    /// No shortened example number was invalid and still parseable.
    #[error("Could not build an invalid number")]
    CouldNotGetNumber,
    #[error("Unknown region code")]
    InvalidRegionCode,
}

/// Failed outcomes of a length check, see
/// [`is_possible_number_with_reason`](super::PhoneNumberUtil::is_possible_number_with_reason).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("Unknown country calling code")]
    InvalidCountryCode,
    /// Shorter than every length the region allows.
    #[error("Shorter than every valid number of the region")]
    TooShort,
    /// Between the shortest and longest lengths of the region without
    /// matching any of them. Also returned when the region has no numbers
    /// of the requested type at all.
    #[error("Length matches no valid number of the region")]
    InvalidLength,
    /// Longer than every length the region allows.
    #[error("Longer than every valid number of the region")]
    TooLong,
}

impl From<ExtractNumberError> for ParseError {
    fn from(value: ExtractNumberError) -> Self {
        NotANumberError::FailedToExtractNumber(value).into()
    }
}
