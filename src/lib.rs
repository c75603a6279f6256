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

//! Parsing, formatting, validation, as-you-type formatting and free-text
//! matching of international phone numbers, driven by region metadata
//! supplied by the caller.

mod asyoutypeformatter;
mod interfaces;
pub mod metadata;
mod phonenumber;
mod phonenumbermatcher;
mod phonenumberutil;
mod regex_based_matcher;
mod regexp_cache;
pub mod i18n;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// Boilerplate that reads better as a named macro than as a few lines of
/// code at every call site.
mod macros;

#[cfg(test)]
mod tests;

pub use asyoutypeformatter::AsYouTypeFormatter;
pub use interfaces::MetadataSource;
pub use phonenumber::{CountryCodeSource, PhoneNumber};
pub use phonenumbermatcher::{Leniency, PhoneNumberMatch, PhoneNumberMatcher};
pub use phonenumberutil::{
    MatchType, NumberLengthType, PhoneNumberFormat, PhoneNumberType, PhoneNumberUtil, errors,
};
pub use regexp_cache::{InvalidRegexError, RegexCache};
