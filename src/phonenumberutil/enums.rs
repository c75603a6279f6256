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

use strum::EnumIter;

/// Output layouts understood by [`format`](super::PhoneNumberUtil::format).
///
/// For the London number `+44 20 7946 0958`:
/// - `E164`: `+442079460958`
/// - `International`: `+44 20 7946 0958`
/// - `National`: `020 7946 0958`
/// - `RFC3966`: `tel:+44-20-7946-0958`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// Plus sign, calling code and national significant number, no
    /// separators and no extension.
    E164,
    International,
    /// As dialled inside the region, national prefix included where the
    /// region writes one.
    National,
    /// A `tel:` URI with dashes between groups and `;ext=` for extensions.
    RFC3966,
}

/// What a number is used for, as far as its region's metadata can tell.
///
/// Every type except `FixedLineOrMobile` and `Unknown` has its own
/// description in [`PhoneMetadata`](crate::metadata::PhoneMetadata).
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    FixedLine,
    Mobile,
    /// Returned where fixed-line and mobile ranges overlap, as they do in
    /// NANPA regions.
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    /// Cost split between caller and callee.
    SharedCost,
    VoIP,
    /// A number routed to wherever its owner chooses.
    PersonalNumber,
    Pager,
    /// Universal access number, one number for a whole organisation.
    UAN,
    VoiceMail,
    /// Matches none of the ranges of the number's region.
    Unknown,
}

/// How closely two numbers agree, from
/// [`is_number_match`](super::PhoneNumberUtil::is_number_match) and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// One of the inputs could not be parsed.
    NotANumber,
    NoMatch,
    /// Same calling code, and one national number is a suffix of the other,
    /// or only one side carries an extension.
    ShortNsnMatch,
    /// Same national number while at least one side lacks a calling code,
    /// e.g. `650 253 0000` against `+1 650 253 0000`.
    NsnMatch,
    /// Calling code, national number, leading zeros and extension all agree.
    ExactMatch,
}

/// Successful outcome of a length check. Failures are reported as
/// [`ValidationError`](super::errors::ValidationError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberLengthType {
    /// Long enough to be dialled from anywhere in the region.
    IsPossible,
    /// Only long enough to be dialled within a local area, e.g. `253 0000`
    /// in the US.
    IsPossibleLocalOnly,
}
