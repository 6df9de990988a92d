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

use fast_cat::concat_str;
use regex::{Match, Regex};

/// Wraps `pattern` so that it only matches the whole input.
///
/// Searching with an unanchored pattern and checking the bounds of the
/// match is not enough: with leftmost-first semantics `\d{8}|\d{10}`
/// finds the first eight digits of a ten digit string and stops there.
pub fn anchor_full(pattern: &str) -> String {
    concat_str!("^(?:", pattern, ")$")
}

/// Wraps `pattern` so that it only matches at the start of the input.
pub fn anchor_start(pattern: &str) -> String {
    concat_str!("^(?:", pattern, ")")
}

/// Matching at the start of the input. The leftmost match of a regex
/// starts at 0 whenever any match does, so unanchored patterns can be
/// used as is.
pub trait RegexConsume {
    fn matches_start(&self, s: &str) -> bool {
        self.find_start(s).is_some()
    }

    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;
}

impl RegexConsume for Regex {
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let found = self.find(s)?;
        if found.start() != 0 {
            return None
        }
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{anchor_full, anchor_start, RegexConsume};

    #[test]
    fn full_anchor_tries_every_alternative() {
        let unanchored = Regex::new("\\d{8}|\\d{10,11}").unwrap();
        let found = unanchored.find("1234567890").unwrap();
        assert_eq!(8, found.end());

        let anchored = Regex::new(&anchor_full("\\d{8}|\\d{10,11}")).unwrap();
        assert!(anchored.is_match("1234567890"));
        assert!(!anchored.is_match("123456789"));
    }

    #[test]
    fn start_matching() {
        let regex = Regex::new("0(8[1-46-8])?").unwrap();
        assert!(regex.matches_start("08122123456"));
        assert!(!regex.matches_start("108"));
        assert_eq!(Some("081"), regex.find_start("08122123456").map(|m| m.as_str()));

        let anchored = Regex::new(&anchor_start("1|2")).unwrap();
        assert!(!anchored.is_match("31"));
        assert!(anchored.is_match("21"));
    }
}
