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

use dec_from_char::{DecimalExtended, normalize_decimals};

/// Maps a decimal digit of any script to its ASCII counterpart.
pub fn to_ascii_digit(c: char) -> Option<char> {
    if !c.is_decimal_utf8() {
        return None;
    }
    let mut buf = [0; 4];
    normalize_decimals(c.encode_utf8(&mut buf))
        .chars()
        .next()
        .filter(char::is_ascii_digit)
}

pub fn is_decimal_digit(c: char) -> bool {
    c.is_decimal_utf8()
}

#[cfg(test)]
mod tests {
    use super::{is_decimal_digit, to_ascii_digit};

    #[test]
    fn folds_digits_of_other_scripts() {
        assert_eq!(Some('5'), to_ascii_digit('5'));
        // fullwidth
        assert_eq!(Some('6'), to_ascii_digit('\u{FF16}'));
        // arabic-indic
        assert_eq!(Some('3'), to_ascii_digit('\u{0663}'));
        // eastern arabic-indic
        assert_eq!(Some('9'), to_ascii_digit('\u{06F9}'));
        assert_eq!(None, to_ascii_digit('a'));
        assert_eq!(None, to_ascii_digit('-'));
        assert!(is_decimal_digit('\u{0966}'));
        assert!(!is_decimal_digit('x'));
    }
}
