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

use std::fmt;

/// Where the country calling code of a parsed number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    /// The number started with a plus sign, e.g. `+44 20 7946 0958`.
    FromNumberWithPlusSign,
    /// The number started with the default region's IDD, e.g. `011 44 ...`
    /// parsed for US.
    FromNumberWithIdd,
    /// The number started with the country calling code but without a plus
    /// sign, e.g. `44 20 7946 0958` parsed for GB.
    FromNumberWithoutPlusSign,
    /// No country calling code was found, the default region supplied it.
    FromDefaultCountry,
}

/// Canonical phone number produced by parsing.
///
/// Leading zeros of the national number are not part of `national_number`,
/// they are carried by `italian_leading_zero` and `number_of_leading_zeros`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country_code: i32,
    national_number: u64,
    extension: Option<String>,
    italian_leading_zero: bool,
    number_of_leading_zeros: Option<i32>,
    raw_input: Option<String>,
    country_code_source: Option<CountryCodeSource>,
    preferred_domestic_carrier_code: Option<String>,
}

impl PhoneNumber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn set_country_code(&mut self, value: i32) {
        self.country_code = value;
    }

    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn set_national_number(&mut self, value: u64) {
        self.national_number = value;
    }

    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or("")
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    pub fn set_extension(&mut self, value: impl Into<String>) {
        self.extension = Some(value.into());
    }

    pub fn clear_extension(&mut self) {
        self.extension = None;
    }

    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero
    }

    pub fn set_italian_leading_zero(&mut self, value: bool) {
        self.italian_leading_zero = value;
    }

    /// Defaults to one, only meaningful when `italian_leading_zero` is set.
    pub fn number_of_leading_zeros(&self) -> i32 {
        self.number_of_leading_zeros.unwrap_or(1)
    }

    pub fn has_number_of_leading_zeros(&self) -> bool {
        self.number_of_leading_zeros.is_some()
    }

    pub fn set_number_of_leading_zeros(&mut self, value: i32) {
        self.number_of_leading_zeros = Some(value);
    }

    pub fn raw_input(&self) -> &str {
        self.raw_input.as_deref().unwrap_or("")
    }

    pub fn has_raw_input(&self) -> bool {
        self.raw_input.is_some()
    }

    pub fn set_raw_input(&mut self, value: impl Into<String>) {
        self.raw_input = Some(value.into());
    }

    pub fn clear_raw_input(&mut self) {
        self.raw_input = None;
    }

    pub fn country_code_source(&self) -> Option<CountryCodeSource> {
        self.country_code_source
    }

    pub fn set_country_code_source(&mut self, value: CountryCodeSource) {
        self.country_code_source = Some(value);
    }

    pub fn clear_country_code_source(&mut self) {
        self.country_code_source = None;
    }

    pub fn preferred_domestic_carrier_code(&self) -> &str {
        self.preferred_domestic_carrier_code.as_deref().unwrap_or("")
    }

    pub fn has_preferred_domestic_carrier_code(&self) -> bool {
        self.preferred_domestic_carrier_code.is_some()
    }

    pub fn set_preferred_domestic_carrier_code(&mut self, value: impl Into<String>) {
        self.preferred_domestic_carrier_code = Some(value.into());
    }

    pub fn clear_preferred_domestic_carrier_code(&mut self) {
        self.preferred_domestic_carrier_code = None;
    }

    /// Copy holding only the fields that identify the number, dropping those
    /// describing how it was written.
    pub fn core_fields_only(&self) -> PhoneNumber {
        let mut number = PhoneNumber::new();
        number.set_country_code(self.country_code);
        number.set_national_number(self.national_number);
        if let Some(extension) = &self.extension {
            if !extension.is_empty() {
                number.set_extension(extension.clone());
            }
        }
        if self.italian_leading_zero {
            number.set_italian_leading_zero(true);
            // only relevant when there are leading zeros at all
            number.set_number_of_leading_zeros(self.number_of_leading_zeros());
        }
        number
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Country Code: {} National Number: ", self.country_code)?;
        if self.italian_leading_zero {
            for _ in 0..self.number_of_leading_zeros().max(0) {
                f.write_str("0")?;
            }
        }
        write!(f, "{}", self.national_number)?;
        if let Some(extension) = &self.extension {
            write!(f, " Extension: {}", extension)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CountryCodeSource, PhoneNumber};

    #[test]
    fn core_fields_drop_context() {
        let mut number = PhoneNumber::new();
        number.set_country_code(39);
        number.set_national_number(236618300);
        number.set_italian_leading_zero(true);
        number.set_raw_input("+39 02 3661 8300");
        number.set_country_code_source(CountryCodeSource::FromNumberWithPlusSign);
        number.set_preferred_domestic_carrier_code("");
        number.set_extension("");

        let core = number.core_fields_only();
        assert!(!core.has_raw_input());
        assert!(!core.has_extension());
        assert!(!core.has_preferred_domestic_carrier_code());
        assert_eq!(None, core.country_code_source());
        assert!(core.italian_leading_zero());
        assert_eq!(1, core.number_of_leading_zeros());
        assert_eq!("Country Code: 39 National Number: 0236618300", core.to_string());
    }
}
