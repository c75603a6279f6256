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
    PhoneNumber, PhoneNumberFormat, PhoneNumberUtil,
    metadata::{NumberFormat, PhoneMetadata, PhoneNumberDesc},
};

#[path = "../src/tests/test_metadata.rs"]
mod test_metadata;

fn setup_numbers(phone_util: &PhoneNumberUtil) -> Vec<PhoneNumber> {
    [
        ("0011 54 9 11 8765 4321 ext. 1234", "AU"),
        ("(650) 253-0000", "US"),
        ("+44 20 7946 0958", "GB"),
        ("020 7946 0958", "GB"),
        ("011 15 8765-4321", "AR"),
        ("02 3661 8300", "IT"),
        ("1-800-FLOWERS", "US"),
        ("+800 1234 5678", "ZZ"),
    ]
    .into_iter()
    .filter_map(|(number, region)| phone_util.parse(number, region).ok())
    .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let phone_util = PhoneNumberUtil::new_for_metadata(test_metadata::test_metadata());
    let numbers = setup_numbers(&phone_util);

    let mut group = c.benchmark_group("Formatting");

    for format in [
        PhoneNumberFormat::E164,
        PhoneNumberFormat::International,
        PhoneNumberFormat::National,
        PhoneNumberFormat::RFC3966,
    ] {
        group.bench_function(format!("format({:?})", format), |b| {
            b.iter(|| {
                for number in &numbers {
                    black_box(phone_util.format(black_box(number), black_box(format)));
                }
            })
        });
    }

    group.bench_function("format_out_of_country_calling_number(\"US\")", |b| {
        b.iter(|| {
            for number in &numbers {
                black_box(phone_util.format_out_of_country_calling_number(black_box(number), "US"));
            }
        })
    });

    group.bench_function("as_you_type(\"US\")", |b| {
        b.iter(|| {
            let mut formatter = phone_util.get_as_you_type_formatter("US");
            for digit in "+16502530000".chars() {
                black_box(formatter.input_digit(black_box(digit)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
