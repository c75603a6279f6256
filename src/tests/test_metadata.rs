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

//! A small, hand-written numbering plan used by the test suites and the
//! benches. The patterns are simplified versions of the real plans of the
//! regions involved and only cover the numbers the tests use.

use super::{NumberFormat, PhoneMetadata, PhoneNumberDesc};

fn desc(pattern: &str, lengths: &[i32]) -> PhoneNumberDesc {
    PhoneNumberDesc::new(pattern, lengths)
}

fn us() -> PhoneMetadata {
    let fixed_line_or_mobile = desc("(?:2[0-35-9]|[3-7]\\d)\\d{8}", &[10])
        .with_possible_length_local_only(&[7])
        .with_example_number("6502530000");
    PhoneMetadata {
        id: "US".to_owned(),
        country_code: 1,
        international_prefix: Some("011".to_owned()),
        national_prefix: Some("1".to_owned()),
        main_country_for_code: true,
        same_mobile_and_fixed_line_pattern: true,
        general_desc: desc("[2-9]\\d{9}", &[10]).with_possible_length_local_only(&[7]),
        fixed_line: fixed_line_or_mobile.clone(),
        mobile: fixed_line_or_mobile,
        toll_free: desc("8(?:00|66|77|88)\\d{7}", &[10]).with_example_number("8002530000"),
        premium_rate: desc("900\\d{7}", &[10]).with_example_number("9002530000"),
        no_international_dialling: desc("800\\d{7}", &[10]),
        number_format: vec![
            NumberFormat::new("(\\d{3})(\\d{4})", "$1-$2"),
            NumberFormat::new("(\\d{3})(\\d{3})(\\d{4})", "($1) $2-$3")
                .with_national_prefix_optional_when_formatting(true),
        ],
        intl_number_format: vec![
            NumberFormat::new("(\\d{3})(\\d{4})", "$1-$2"),
            NumberFormat::new("(\\d{3})(\\d{3})(\\d{4})", "$1-$2-$3"),
        ],
        ..Default::default()
    }
}

fn bs() -> PhoneMetadata {
    PhoneMetadata {
        id: "BS".to_owned(),
        country_code: 1,
        international_prefix: Some("011".to_owned()),
        national_prefix: Some("1".to_owned()),
        general_desc: desc("(?:242|8(?:00|66|77|88)|900)\\d{7}", &[10])
            .with_possible_length_local_only(&[7]),
        fixed_line: desc("242[23]\\d{6}", &[10])
            .with_possible_length_local_only(&[7])
            .with_example_number("2423651234"),
        mobile: desc("242[45]\\d{6}", &[10]).with_example_number("2424226000"),
        toll_free: desc("8(?:00|66|77|88)\\d{7}", &[10]),
        ..Default::default()
    }
}

fn gb() -> PhoneMetadata {
    PhoneMetadata {
        id: "GB".to_owned(),
        country_code: 44,
        international_prefix: Some("00".to_owned()),
        national_prefix: Some("0".to_owned()),
        preferred_extn_prefix: Some(" x".to_owned()),
        general_desc: desc("\\d{10}", &[10]),
        fixed_line: desc("[1-6]\\d{9}", &[10]).with_example_number("2070313000"),
        mobile: desc("7[1-57-9]\\d{8}", &[10]).with_example_number("7912345678"),
        toll_free: desc("80\\d{8}", &[10]),
        premium_rate: desc("9[018]\\d{8}", &[10]),
        number_format: vec![
            NumberFormat::new("(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3")
                .with_leading_digits("[1-59]")
                .with_national_prefix_formatting_rule("0$1"),
            NumberFormat::new("(\\d{4})(\\d{6})", "$1 $2")
                .with_leading_digits("7")
                .with_national_prefix_formatting_rule("0$1"),
            NumberFormat::new("(\\d{3})(\\d{3})(\\d{4})", "$1 $2 $3")
                .with_leading_digits("8")
                .with_national_prefix_formatting_rule("0$1"),
        ],
        ..Default::default()
    }
}

fn it() -> PhoneMetadata {
    PhoneMetadata {
        id: "IT".to_owned(),
        country_code: 39,
        international_prefix: Some("00".to_owned()),
        general_desc: desc("[0389]\\d{5,10}", &[6, 7, 8, 9, 10, 11]),
        fixed_line: desc("0\\d{5,10}", &[6, 7, 8, 9, 10, 11]).with_example_number("0236618300"),
        mobile: desc("3\\d{8,9}", &[9, 10]).with_example_number("345678901"),
        toll_free: desc("80(?:0\\d{6}|3\\d{3})", &[6, 9]),
        premium_rate: desc("89(?:2\\d{3}|9\\d{6})", &[6, 9]),
        number_format: vec![
            NumberFormat::new("(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3").with_leading_digits("0[26]"),
            NumberFormat::new("(\\d{3})(\\d{4})(\\d{4})", "$1 $2 $3")
                .with_leading_digits("0[13-57-9][0159]"),
            NumberFormat::new("(\\d{3})(\\d{3})(\\d{3,4})", "$1 $2 $3").with_leading_digits("3"),
        ],
        ..Default::default()
    }
}

fn ar() -> PhoneMetadata {
    PhoneMetadata {
        id: "AR".to_owned(),
        country_code: 54,
        international_prefix: Some("00".to_owned()),
        national_prefix: Some("0".to_owned()),
        national_prefix_for_parsing: Some("0(?:(11|343|3715)15)?".to_owned()),
        national_prefix_transform_rule: Some("9$1".to_owned()),
        general_desc: desc("[1-368]\\d{9}|9\\d{10}", &[10, 11]),
        fixed_line: desc("[1-367]\\d{9}", &[10]).with_example_number("1187654321"),
        mobile: desc("9\\d{10}", &[11]).with_example_number("91187654321"),
        toll_free: desc("80\\d{8}", &[10]),
        number_format: vec![
            NumberFormat::new("(\\d{2})(\\d{4})(\\d{4})", "$1 $2-$3")
                .with_leading_digits("11")
                .with_national_prefix_formatting_rule("0$1"),
            NumberFormat::new("(\\d{4})(\\d{2})(\\d{4})", "$1 $2-$3")
                .with_leading_digits("1[02-9]|[23]")
                .with_national_prefix_formatting_rule("0$1"),
            NumberFormat::new("(9)(11)(\\d{4})(\\d{4})", "$2 15 $3-$4")
                .with_leading_digits("911")
                .with_national_prefix_formatting_rule("0$1"),
            NumberFormat::new("(\\d{3})(\\d{3})(\\d{4})", "$1-$2-$3")
                .with_leading_digits("8")
                .with_national_prefix_formatting_rule("0$1"),
        ],
        intl_number_format: vec![
            NumberFormat::new("(\\d{2})(\\d{4})(\\d{4})", "$1 $2-$3").with_leading_digits("11"),
            NumberFormat::new("(\\d{4})(\\d{2})(\\d{4})", "$1 $2-$3")
                .with_leading_digits("1[02-9]|[23]"),
            NumberFormat::new("(9)(11)(\\d{4})(\\d{4})", "$1 $2 $3 $4").with_leading_digits("911"),
            NumberFormat::new("(\\d{3})(\\d{3})(\\d{4})", "$1-$2-$3").with_leading_digits("8"),
        ],
        ..Default::default()
    }
}

fn br() -> PhoneMetadata {
    let carrier_rule = "0 $CC ($1)";
    PhoneMetadata {
        id: "BR".to_owned(),
        country_code: 55,
        international_prefix: Some("00(?:1[245]|2[1-35]|31|4[13]|[56]5|99)".to_owned()),
        national_prefix: Some("0".to_owned()),
        national_prefix_for_parsing: Some(
            "0(?:(1[245]|2[1-35]|31|4[13]|[56]5|99)(\\d{10,11}))?".to_owned(),
        ),
        national_prefix_transform_rule: Some("$2".to_owned()),
        general_desc: desc("[1-9]\\d{9,10}", &[10, 11]),
        fixed_line: desc("[1-9][1-9][2-5]\\d{7}", &[10]).with_example_number("1123456789"),
        mobile: desc("[1-9][1-9]9\\d{8}", &[11]).with_example_number("11961234567"),
        number_format: vec![
            NumberFormat::new("(\\d{2})(\\d{4})(\\d{4})", "$1 $2-$3")
                .with_leading_digits("[1-9][1-9][2-5]")
                .with_national_prefix_formatting_rule("($1)")
                .with_domestic_carrier_code_formatting_rule(carrier_rule),
            NumberFormat::new("(\\d{2})(\\d{5})(\\d{4})", "$1 $2-$3")
                .with_leading_digits("[1-9][1-9]9")
                .with_national_prefix_formatting_rule("($1)")
                .with_domestic_carrier_code_formatting_rule(carrier_rule),
        ],
        ..Default::default()
    }
}

fn au() -> PhoneMetadata {
    PhoneMetadata {
        id: "AU".to_owned(),
        country_code: 61,
        international_prefix: Some("001[12]".to_owned()),
        preferred_international_prefix: Some("0011".to_owned()),
        national_prefix: Some("0".to_owned()),
        general_desc: desc("[1-578]\\d{8,9}", &[9, 10]),
        fixed_line: desc("[2378]\\d{8}", &[9]).with_example_number("212345678"),
        mobile: desc("4\\d{8}", &[9]).with_example_number("412345678"),
        toll_free: desc("1800\\d{6}", &[10]),
        number_format: vec![
            NumberFormat::new("(\\d)(\\d{4})(\\d{4})", "$1 $2 $3")
                .with_leading_digits("[2378]")
                .with_national_prefix_formatting_rule("0$1"),
            NumberFormat::new("(\\d{3})(\\d{3})(\\d{3})", "$1 $2 $3")
                .with_leading_digits("4")
                .with_national_prefix_formatting_rule("0$1"),
            NumberFormat::new("(\\d{4})(\\d{3})(\\d{3})", "$1 $2 $3").with_leading_digits("1"),
        ],
        ..Default::default()
    }
}

fn ru() -> PhoneMetadata {
    PhoneMetadata {
        id: "RU".to_owned(),
        country_code: 7,
        international_prefix: Some("810".to_owned()),
        national_prefix: Some("8".to_owned()),
        main_country_for_code: true,
        general_desc: desc("[3-589]\\d{9}", &[10]),
        fixed_line: desc("[348]\\d{9}", &[10]).with_example_number("3011234567"),
        mobile: desc("9\\d{9}", &[10]).with_example_number("9123456789"),
        number_format: vec![
            NumberFormat::new("(\\d{3})(\\d{3})(\\d{2})(\\d{2})", "$1 $2-$3-$4")
                .with_leading_digits("[3489]")
                .with_national_prefix_formatting_rule("8 ($1)")
                .with_national_prefix_optional_when_formatting(true),
        ],
        ..Default::default()
    }
}

fn kz() -> PhoneMetadata {
    PhoneMetadata {
        id: "KZ".to_owned(),
        country_code: 7,
        international_prefix: Some("810".to_owned()),
        national_prefix: Some("8".to_owned()),
        leading_digits: Some("33|7".to_owned()),
        general_desc: desc("(?:33\\d|7\\d{2})\\d{7}", &[10]),
        fixed_line: desc("7[12]\\d{8}", &[10]).with_example_number("7123456789"),
        mobile: desc("7[05-8]\\d{8}", &[10]).with_example_number("7710009998"),
        ..Default::default()
    }
}

/// International freephone, +800.
fn non_geo_800() -> PhoneMetadata {
    PhoneMetadata {
        id: "001".to_owned(),
        country_code: 800,
        general_desc: desc("\\d{8}", &[8]),
        toll_free: desc("\\d{8}", &[8]).with_example_number("12345678"),
        number_format: vec![NumberFormat::new("(\\d{4})(\\d{4})", "$1 $2")],
        ..Default::default()
    }
}

/// International premium rate, +979.
fn non_geo_979() -> PhoneMetadata {
    PhoneMetadata {
        id: "001".to_owned(),
        country_code: 979,
        general_desc: desc("\\d{9}", &[9]),
        premium_rate: desc("\\d{9}", &[9]).with_example_number("123456789"),
        number_format: vec![NumberFormat::new("(\\d)(\\d{4})(\\d{4})", "$1 $2 $3")],
        ..Default::default()
    }
}

pub fn test_metadata() -> Vec<PhoneMetadata> {
    vec![
        us(),
        bs(),
        gb(),
        it(),
        ar(),
        br(),
        au(),
        ru(),
        kz(),
        non_geo_800(),
        non_geo_979(),
    ]
}
