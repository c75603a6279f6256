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

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phonelib::{
    PhoneNumberUtil,
    metadata::{NumberFormat, PhoneMetadata, PhoneNumberDesc},
};

#[path = "../src/tests/test_metadata.rs"]
mod test_metadata;

/// Inputs covering national, international, IDD, carrier, alpha and
/// extension handling.
fn setup_parsing_data() -> Vec<(&'static str, &'static str)> {
    vec![
        ("0011 54 9 11 8765 4321 ext. 1234", "AU"),
        ("(650) 253-0000", "US"),
        ("+44 20 7946 0958", "GB"),
        ("020 7946 0958", "GB"),
        ("011 15 8765-4321", "AR"),
        ("0 12 19 3123-1234", "BR"),
        ("02 3661 8300", "IT"),
        ("1-800-FLOWERS", "US"),
        ("tel:253-0000;phone-context=+1-650", "ZZ"),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let phone_util = PhoneNumberUtil::new_for_metadata(test_metadata::test_metadata());
    let numbers_to_parse = setup_parsing_data();

    let mut group = c.benchmark_group("Parsing");

    group.bench_function("parse()", |b| {
        b.iter(|| {
            for (number_str, region) in &numbers_to_parse {
                let _ = phone_util.parse(black_box(number_str), black_box(region));
            }
        })
    });

    group.bench_function("parse_and_keep_raw_input()", |b| {
        b.iter(|| {
            for (number_str, region) in &numbers_to_parse {
                let _ = phone_util.parse_and_keep_raw_input(black_box(number_str), black_box(region));
            }
        })
    });

    let text = "Call 650-253-0000 or +44 20 7946 0958, ask for ext. 1234. \
        Fax (650) 253-0001 before 08/31/95.";
    group.bench_function("find_numbers()", |b| {
        b.iter(|| phone_util.find_numbers(black_box(text), black_box("US")).count())
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
