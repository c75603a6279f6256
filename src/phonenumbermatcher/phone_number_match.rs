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

use std::fmt;

use crate::phonenumber::PhoneNumber;

/// A phone number found in text: where it was found, the text that was
/// matched and the number it was parsed into.
///
/// Offsets are byte offsets into the searched text, so
/// `&text[m.start()..m.end()] == m.raw_string()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumberMatch {
    start: usize,
    raw_string: String,
    number: PhoneNumber,
}

impl PhoneNumberMatch {
    pub(super) fn new(start: usize, raw_string: impl Into<String>, number: PhoneNumber) -> Self {
        Self {
            start,
            raw_string: raw_string.into(),
            number,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.start + self.raw_string.len()
    }

    pub fn raw_string(&self) -> &str {
        &self.raw_string
    }

    /// The parsed number. Raw input, country code source and preferred
    /// domestic carrier code are cleared.
    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    pub fn into_number(self) -> PhoneNumber {
        self.number
    }
}

impl fmt::Display for PhoneNumberMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhoneNumberMatch [{},{}) {}", self.start(), self.end(), self.raw_string)
    }
}
