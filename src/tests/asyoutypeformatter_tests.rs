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

use super::{get_phone_util, region_code::RegionCode};
use crate::AsYouTypeFormatter;

/// Feeds `input` one char at a time and checks every intermediate result.
fn assert_typing(formatter: &mut AsYouTypeFormatter<'_>, input: &str, expected: &[&str]) {
    assert_eq!(input.chars().count(), expected.len());
    for (next_char, expected) in input.chars().zip(expected) {
        assert_eq!(*expected, formatter.input_digit(next_char), "after typing '{}'", next_char);
    }
}

#[test]
fn invalid_region() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter(RegionCode::zz());
    // A calling code picks the formats of its region.
    assert_typing(
        &mut formatter,
        "+442079460958",
        &[
            "+",
            "+4",
            "+44",
            "+442",
            "+4420",
            "+44 207",
            "+44 20 79",
            "+44 20 794",
            "+44 20 7946",
            "+44 20 7946 0",
            "+44 20 7946 09",
            "+44 20 7946 095",
            "+44 20 7946 0958",
        ],
    );
    formatter.clear();
    // Without a region nothing can be formatted nationally.
    assert_typing(&mut formatter, "650253", &["6", "65", "650", "6502", "65025", "650253"]);
}

#[test]
fn us_national_number() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter(RegionCode::us());
    assert_typing(
        &mut formatter,
        "6502530000",
        &[
            "6",
            "65",
            "650",
            "6502",
            "65025",
            "650-253",
            "650-2530",
            "(650) 253-00",
            "(650) 253-000",
            "(650) 253-0000",
        ],
    );
    // No format fits an eleventh digit.
    assert_eq!("65025300000", formatter.input_digit('0'));
}

#[test]
fn us_international_number() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter(RegionCode::us());
    assert_typing(
        &mut formatter,
        "+16502530000",
        &[
            "+",
            "+1",
            "+16",
            "+165",
            "+1650",
            "+1 650-2",
            "+1 650-25",
            "+1 650-253",
            "+1 650-2530",
            "+1 650-253-00",
            "+1 650-253-000",
            "+1 650-253-0000",
        ],
    );
}

#[test]
fn us_dialling_out_with_idd() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter(RegionCode::us());
    let mut last = String::new();
    for (index, next_char) in "011442079460958".chars().enumerate() {
        last = formatter.input_digit(next_char).to_owned();
        if index == 8 {
            assert_eq!("011 44 20 79", last);
        }
    }
    assert_eq!("011 44 20 7946 0958", last);
}

#[test]
fn gb_national_number() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter(RegionCode::gb());
    assert_typing(
        &mut formatter,
        "02079460958",
        &[
            "0",
            "02",
            "020",
            "0207",
            "02079",
            "020 794",
            "020 7946",
            "020 7946 0",
            "020 7946 09",
            "020 7946 095",
            "020 7946 0958",
        ],
    );
}

#[test]
fn ru_national_prefix_with_optional_formatting() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter(RegionCode::ru());
    let mut last = String::new();
    for (index, next_char) in "89123456789".chars().enumerate() {
        last = formatter.input_digit(next_char).to_owned();
        if index == 5 {
            assert_eq!("8 912 34", last);
        }
    }
    assert_eq!("8 912 345-67-89", last);
}

#[test]
fn non_geographical_number() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter(RegionCode::zz());
    assert_typing(
        &mut formatter,
        "+80012345678",
        &[
            "+",
            "+8",
            "+80",
            "+800",
            "+8001",
            "+800 12",
            "+800 123",
            "+800 1234",
            "+800 1234 5",
            "+800 1234 56",
            "+800 1234 567",
            "+800 1234 5678",
        ],
    );
}

#[test]
fn user_punctuation_is_dropped_once_formatting() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter(RegionCode::us());
    assert_typing(
        &mut formatter,
        "650-2530000",
        &[
            "6",
            "65",
            "650",
            "650-",
            "650-2",
            "650-25",
            "650-253",
            "650-2530",
            "(650) 253-00",
            "(650) 253-000",
            "(650) 253-0000",
        ],
    );
}

#[test]
fn unsupported_char_stops_formatting() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter(RegionCode::us());
    assert_typing(&mut formatter, "650*2", &["6", "65", "650", "650*", "650*2"]);

    // Clearing starts over.
    formatter.clear();
    assert_typing(&mut formatter, "6502", &["6", "65", "650", "6502"]);
}

#[test]
fn remembers_position() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter(RegionCode::us());
    for next_char in "650253".chars() {
        formatter.input_digit(next_char);
    }
    assert_eq!("650-2530", formatter.input_digit_and_remember_position('0'));
    assert_eq!(8, formatter.get_remembered_position());
    assert_eq!("(650) 253-00", formatter.input_digit('0'));
    // The position follows the remembered digit after reformatting.
    assert_eq!(11, formatter.get_remembered_position());

    formatter.clear();
    assert_eq!(0, formatter.get_remembered_position());
}

#[test]
fn same_input_after_clear_gives_same_output() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter(RegionCode::us());
    let mut outputs = Vec::new();
    for _ in 0..2 {
        let run: Vec<String> = "+442079460958"
            .chars()
            .map(|next_char| formatter.input_digit(next_char).to_owned())
            .collect();
        outputs.push(run);
        formatter.clear();
    }
    assert_eq!(outputs[0], outputs[1]);
    // The GB formats picked up mid-session are dropped by clear().
    assert_typing(
        &mut formatter,
        "6502530000",
        &[
            "6",
            "65",
            "650",
            "6502",
            "65025",
            "650-253",
            "650-2530",
            "(650) 253-00",
            "(650) 253-000",
            "(650) 253-0000",
        ],
    );
}

#[test]
fn final_output_equals_national_format() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter(RegionCode::gb());
    let mut last = String::new();
    for next_char in "02079460958".chars() {
        last = formatter.input_digit(next_char).to_owned();
    }
    let parsed = phone_util.parse("02079460958", RegionCode::gb()).unwrap();
    assert_eq!(phone_util.format(&parsed, crate::PhoneNumberFormat::National), last);
}
