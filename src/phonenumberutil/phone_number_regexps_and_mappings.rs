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


use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::{phonenumberutil::{helper_constants::{
    CAPTURE_UP_TO_SECOND_NUMBER_START, DIGITS, MIN_LENGTH_FOR_NSN, PLUS_CHARS,
    PLUS_SIGN, RFC3966_VISUAL_SEPARATOR, STAR_SIGN, VALID_ALPHA, VALID_ALPHA_INCL_UPPERCASE,
    VALID_PUNCTUATION
}, helper_functions::create_extn_pattern}, regexp_cache::RegexCache};

/// Precompiled location independent patterns and the character tables used
/// by the normalizer. Metadata patterns are not stored here, they go through
/// `regexp_cache`.
pub(super) struct PhoneNumberRegExpsAndMappings {
    pub regexp_cache: RegexCache,

    /// A map that contains characters that are essential when dialling. That means
    /// any of the characters in this map must not be removed from a number when
    /// dialing, otherwise the call will not reach the intended destination.
    pub diallable_char_mappings: HashMap<char, char>,
    /// Keypad digit of every upper case ASCII letter. Lookups upper case the
    /// key first.
    pub alpha_mappings: HashMap<char, char>,
    /// For performance reasons, store a map of combining alpha_mappings with ASCII
    /// digits.
    pub alpha_phone_mappings: HashMap<char, char>,

    /// Map of country calling codes that use a mobile token before the area code.
    /// One example of when this is relevant is when determining the length of the
    /// national destination code, which should be the length of the area code plus
    /// the length of the mobile token.
    pub mobile_token_mappings: HashMap<i32, char>,

    /// Set of country codes that doesn't have national prefix, but it has area
    /// codes.
    pub countries_without_national_prefix_with_area_codes: HashSet<i32>,

    /// Set of country codes that have geographically assigned mobile numbers (see
    /// geo_mobile_countries below) which are not based on *area codes*. For
    /// example, in China mobile numbers start with a carrier indicator, and beyond
    /// that are geographically assigned: this carrier indicator is not considered
    /// to be an area code.
    pub geo_mobile_countries_without_mobile_area_codes: HashSet<i32>,

    /// Set of country calling codes that have geographically assigned mobile
    /// numbers. This may not be complete; we add calling codes case by case, as we
    /// find geographical mobile numbers or hear from user reports.
    pub geo_mobile_countries: HashSet<i32>,

    /// Full-match pattern that tells whether a region has a single
    /// international dialing prefix. A single prefix (e.g. 011 in USA) is a
    /// sequence of ASCII digits, possibly with a tilde which signals waiting
    /// for the tone. Several prefixes are written as a regex that always
    /// contains characters other than digits and the tilde.
    pub single_international_prefix: Regex,

    /// Regular expression of acceptable characters that may start a phone number
    /// for the purposes of parsing. This allows us to strip away meaningless
    /// prefixes to phone numbers that may be mistakenly given to us. This consists
    /// of digits and the plus symbol. This does not contain alpha characters,
    /// although they may be used later in the number. It also does not include
    /// other punctuation, as this will be stripped later during parsing and is of
    /// no information value when parsing a number.
    pub valid_start_char_pattern: Regex,

    /// Regular expression of valid characters before a marker that might indicate
    /// a second number.
    pub capture_up_to_second_number_start_pattern: Regex,

    /// Trailing characters that we want to remove: everything that is not a
    /// letter or a digit. The hash character is retained here, as it may
    /// signify the previous block was an extension.
    pub unwanted_end_char_pattern: Regex,

    /// Regular expression of groups of valid punctuation characters.
    pub separator_pattern: Regex,

    /// Regexp of all known extension prefixes used by different regions followed
    /// by 1 or more valid digits, anchored at the end of the input and matched
    /// case-insensitively.
    pub extn_pattern: Regex,

    /// Viable phone numbers, location independent. Checks we have at least
    /// three leading digits, and only valid punctuation, alpha characters and
    /// digits in the phone number, optionally followed by an extension. The
    /// symbol 'x' is allowed here as valid punctuation since it is often used
    /// as a placeholder for carrier codes, for example in Brazilian phone
    /// numbers. We also allow multiple plus-signs at the start.
    ///
    /// Corresponds to the following:
    /// `plus_sign*(([punctuation]|[star])*[digits]){3,}
    /// ([punctuation]|[star]|[digits]|[alpha])*|[digits]{minLengthNsn}`
    ///
    /// The last alternative allows short numbers (two digits long) to be parsed
    /// if they are entered as "15" etc, but only if there is no punctuation in
    /// them.
    pub valid_phone_number_pattern: Regex,

    /// We use this pattern to check if the phone number has at least three letters
    /// in it - if so, then we treat it as a number where some phone-number digits
    /// are represented by letters.
    pub valid_alpha_phone_pattern: Regex,

    /// The first group placeholder of a format. `\d` is used instead of `1`
    /// because some formats (e.g. Argentina) do not use the first group of the
    /// pattern.
    pub first_group_capturing_pattern: Regex,

    pub carrier_code_pattern: Regex,

    pub plus_chars_pattern: Regex,

    /// Regular expression of valid global-number-digits for the phone-context
    /// parameter, following the syntax defined in RFC3966.
    pub rfc3966_global_number_digits_pattern: Regex,

    /// Regular expression of valid domainname for the phone-context parameter,
    /// following the syntax defined in RFC3966.
    pub rfc3966_domainname_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    fn initialize_regexp_mappings(&mut self) {
        self.mobile_token_mappings.insert(54, '9');

        self.geo_mobile_countries_without_mobile_area_codes.insert(86);  // China

        self.countries_without_national_prefix_with_area_codes.insert(52);  // Mexico

        self.geo_mobile_countries.insert(52);  // Mexico
        self.geo_mobile_countries.insert(54);  // Argentina
        self.geo_mobile_countries.insert(55);  // Brazil
        self.geo_mobile_countries.insert(62);  // Indonesia: some prefixes only (fixed CMDA wireless)
        self.geo_mobile_countries.extend(&self.geo_mobile_countries_without_mobile_area_codes);

        let keypad = [
            ("ABC", '2'), ("DEF", '3'), ("GHI", '4'), ("JKL", '5'),
            ("MNO", '6'), ("PQRS", '7'), ("TUV", '8'), ("WXYZ", '9'),
        ];
        let mut alpha_map = HashMap::with_capacity(26);
        for (letters, digit) in keypad {
            for letter in letters.chars() {
                alpha_map.insert(letter, digit);
            }
        }
        self.alpha_mappings = alpha_map;

        let mut combined_map = HashMap::with_capacity(36);
        combined_map.extend(self.alpha_mappings.iter());
        combined_map.extend(('0'..='9').map(|d| (d, d)));
        self.alpha_phone_mappings = combined_map;

        let mut diallable_char_map = HashMap::with_capacity(13);
        diallable_char_map.extend(('0'..='9').map(|d| (d, d)));
        diallable_char_map.insert('+', '+');
        diallable_char_map.insert('*', '*');
        diallable_char_map.insert('#', '#');
        self.diallable_char_mappings = diallable_char_map;
    }

    pub fn new() -> Self {
        let alphanum = fast_cat::concat_str!(VALID_ALPHA_INCL_UPPERCASE, DIGITS);
        let extn_patterns_for_parsing = create_extn_pattern();
        let valid_phone_number = format!(
                // 2-digits pattern goes last to match the full number first
                "[{}]*(?:[{}{}]*{}){{3,}}[{}{}{}{}]*|{}{{{}}}",
                PLUS_CHARS,
                VALID_PUNCTUATION, STAR_SIGN, DIGITS,
                VALID_PUNCTUATION, STAR_SIGN, DIGITS, VALID_ALPHA,
                DIGITS, MIN_LENGTH_FOR_NSN,
            );

        let rfc3966_phone_digit = format!("({}|{})", DIGITS, RFC3966_VISUAL_SEPARATOR);
        let rfc3966_domainlabel = format!("[{}]+((\\-)*[{}])*", alphanum, alphanum);
        let rfc3966_toplabel = format!("[{}]+((\\-)*[{}])*", VALID_ALPHA_INCL_UPPERCASE, alphanum);

        // All patterns below are constant, a failure here is a programming
        // error caught by the test at the end of this file.
        let mut instance = Self {
            regexp_cache: RegexCache::with_capacity(256),
            diallable_char_mappings: Default::default(),
            alpha_mappings: Default::default(),
            alpha_phone_mappings: Default::default(),
            mobile_token_mappings: Default::default(),
            countries_without_national_prefix_with_area_codes: Default::default(),
            geo_mobile_countries: Default::default(),
            geo_mobile_countries_without_mobile_area_codes: Default::default(),
            single_international_prefix: Regex::new("^[\\d]+(?:[~\u{2053}\u{223C}\u{FF5E}][\\d]+)?$").unwrap(),
            valid_start_char_pattern: Regex::new(&format!("[{}{}]", PLUS_CHARS, DIGITS)).unwrap(),
            capture_up_to_second_number_start_pattern: Regex::new(CAPTURE_UP_TO_SECOND_NUMBER_START).unwrap(),
            unwanted_end_char_pattern: Regex::new("[^\\p{N}\\p{L}#]").unwrap(),
            separator_pattern: Regex::new(&format!("[{}]+", VALID_PUNCTUATION)).unwrap(),
            extn_pattern: Regex::new(&format!("(?i)(?:{})$", &extn_patterns_for_parsing)).unwrap(),
            valid_phone_number_pattern: Regex::new(&format!("(?i)^(?:{})(?:{})?$",
                &valid_phone_number,
                &extn_patterns_for_parsing
            )).unwrap(),
            valid_alpha_phone_pattern: Regex::new("(?:.*?[A-Za-z]){3}.*").unwrap(),
            first_group_capturing_pattern: Regex::new("(\\$\\d)").unwrap(),
            carrier_code_pattern: Regex::new("\\$CC").unwrap(),
            plus_chars_pattern: Regex::new(&format!("^[{}]+", &PLUS_CHARS)).unwrap(),
            rfc3966_global_number_digits_pattern: Regex::new(
                &format!("^\\{}{}*{}{}*$", PLUS_SIGN, &rfc3966_phone_digit, DIGITS, rfc3966_phone_digit)
            ).unwrap(),
            rfc3966_domainname_pattern: Regex::new(
                &format!("^({}\\.)*{}\\.?$", rfc3966_domainlabel, rfc3966_toplabel)
            ).unwrap(),
        };
        instance.initialize_regexp_mappings();
        instance
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneNumberRegExpsAndMappings;

    #[test]
    fn check_regexps_are_compiling() {
        PhoneNumberRegExpsAndMappings::new();
    }

    #[test]
    fn single_international_prefix() {
        let regexps = PhoneNumberRegExpsAndMappings::new();
        assert!(regexps.single_international_prefix.is_match("011"));
        assert!(regexps.single_international_prefix.is_match("8~10"));
        assert!(!regexps.single_international_prefix.is_match("001[12]"));
        assert!(!regexps.single_international_prefix.is_match("0[0-3][0-9]"));
    }

    #[test]
    fn keypad_mappings() {
        let regexps = PhoneNumberRegExpsAndMappings::new();
        assert_eq!(Some(&'7'), regexps.alpha_mappings.get(&'S'));
        assert_eq!(Some(&'9'), regexps.alpha_phone_mappings.get(&'Z'));
        assert_eq!(Some(&'0'), regexps.alpha_phone_mappings.get(&'0'));
        assert_eq!(None, regexps.alpha_mappings.get(&'s'));
        assert_eq!(26, regexps.alpha_mappings.len());
    }

    #[test]
    fn extension_pattern_matches_at_end() {
        let regexps = PhoneNumberRegExpsAndMappings::new();
        let captures = regexps.extn_pattern.captures("1234 ext. 5678").unwrap();
        let extension = (1..captures.len())
            .find_map(|i| captures.get(i))
            .map(|m| m.as_str());
        assert_eq!(Some("5678"), extension);
        assert!(regexps.extn_pattern.is_match("2087654321 EXTN 1234"));
        assert!(regexps.extn_pattern.is_match("650 253 0000 ;ext=1234"));
        assert!(regexps.extn_pattern.is_match("650 253 0000 - 503#"));
        assert!(!regexps.extn_pattern.is_match("650 253 0000 ext. 12345678"));
    }
}
