// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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

use std::borrow::Cow;

use regex::{Captures, Match, Regex};

/// Wraps `pattern` so the compiled regex only accepts the whole input.
///
/// Finding a match and comparing its bounds is not enough for alternations:
/// `12|123` finds `12` in `123` and would wrongly reject it.
pub fn anchor_full_match(pattern: &str) -> String {
    let mut anchored = String::with_capacity(pattern.len() + 6);
    anchored.push_str("^(?:");
    anchored.push_str(pattern);
    anchored.push_str(")$");
    anchored
}

/// Wraps `pattern` so the compiled regex only matches at the start of input.
pub fn anchor_start(pattern: &str) -> String {
    let mut anchored = String::with_capacity(pattern.len() + 5);
    anchored.push_str("^(?:");
    anchored.push_str(pattern);
    anchored.push(')');
    anchored
}

/// Converts `$1`-style group references into the `${1}` form understood by
/// [`Regex::replace`]. Without braces `$1 $2` works but `$1$2` or `$10` would
/// not refer to the intended group.
pub fn to_regex_replacement(template: &str) -> Cow<'_, str> {
    if !template.contains('$') {
        return Cow::Borrowed(template);
    }
    let mut result = String::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                chars.next();
                result.push_str("${");
                result.push(d);
                result.push('}');
                continue;
            }
            result.push_str("$$");
            continue;
        }
        result.push(c);
    }
    Cow::Owned(result)
}

pub trait RegexConsume {
    fn matches_start(&self, s: &str) -> bool {
        self.find_start(s).is_some()
    }

    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>>;
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;
}

impl RegexConsume for Regex {
    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        let captures = self.captures(s)?;
        let full_capture = captures.get(0)?;
        if full_capture.start() != 0 {
            return None;
        }

        Some(captures)
    }

    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let found = self.find(s)?;
        if found.start() != 0 {
            return None;
        }
        Some(found)
    }
}
