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

use log::trace;

use super::{
    errors::{ParseError, ParseErrorInternal},
    helper_functions::{copy_core_fields_only, is_national_number_suffix_of_the_other},
    phonenumberutil::PhoneNumberUtil,
    MatchType,
};
use crate::{i18n::RegionCode, phonenumber::PhoneNumber};

impl PhoneNumberUtil {
    /// Compares two numbers by their country calling codes, national
    /// numbers, Italian leading zeros and extensions. Raw input, carrier codes
    /// and the source of the country calling code are ignored.
    pub fn is_number_match(
        &self,
        first_number_in: &PhoneNumber,
        second_number_in: &PhoneNumber,
    ) -> MatchType {
        // We only care about the fields that uniquely define a number, so we
        // copy these across explicitly.
        let mut first_number = copy_core_fields_only(first_number_in);
        let second_number = copy_core_fields_only(second_number_in);
        // Early exit if both had extensions and these are different.
        if first_number.has_extension()
            && second_number.has_extension()
            && first_number.extension() != second_number.extension()
        {
            return MatchType::NoMatch;
        }

        let first_number_country_code = first_number.country_code();
        let second_number_country_code = second_number.country_code();
        // Both had country calling code specified.
        if first_number_country_code != 0 && second_number_country_code != 0 {
            if first_number == second_number {
                return MatchType::ExactMatch;
            } else if first_number_country_code == second_number_country_code
                && is_national_number_suffix_of_the_other(&first_number, &second_number)
            {
                // A SHORT_NSN_MATCH occurs if there is a difference because of
                // the presence or absence of an 'Italian leading zero', the
                // presence or absence of an extension, or one NSN being a
                // shorter variant of the other.
                return MatchType::ShortNsnMatch;
            }
            // This is not a match.
            return MatchType::NoMatch;
        }
        // Checks cases where one or both country calling codes were not
        // specified. To make equality checks easier, we first set the
        // country codes to be equal.
        first_number.set_country_code(second_number_country_code);
        // If all else was the same, then this is an NSN_MATCH.
        if first_number == second_number {
            return MatchType::NsnMatch;
        }
        if is_national_number_suffix_of_the_other(&first_number, &second_number) {
            return MatchType::ShortNsnMatch;
        }
        MatchType::NoMatch
    }

    /// Compares a number with a string. The string is parsed without a
    /// region first. If it has no country calling code it is parsed in the
    /// region of the number, an exact match then only counts as an NSN match.
    pub fn is_number_match_with_one_string(
        &self,
        first_number: &PhoneNumber,
        second_number: &str,
    ) -> MatchType {
        // First see if the second number has an implicit country calling code,
        // by attempting to parse it.
        match self.parse(second_number, RegionCode::get_unknown()) {
            Ok(second_number_as_proto) => {
                return self.is_number_match(first_number, &second_number_as_proto);
            }
            Err(ParseError::InvalidCountryCode) => {}
            Err(err) => {
                trace!("Could not parse '{}' for matching: {}", second_number, err);
                return MatchType::NotANumber;
            }
        }
        // The second number has no country calling code. EXACT_MATCH is no
        // longer possible. We parse it as if the region was the same as that
        // for the first number, and if EXACT_MATCH is returned, we replace
        // this with NSN_MATCH.
        let first_number_region = self.get_region_code_for_country_code(first_number.country_code());
        if first_number_region != RegionCode::get_unknown() {
            let Ok(second_number_with_first_number_region) =
                self.parse(second_number, first_number_region)
            else {
                return MatchType::NotANumber;
            };
            let match_type =
                self.is_number_match(first_number, &second_number_with_first_number_region);
            if match_type == MatchType::ExactMatch {
                return MatchType::NsnMatch;
            }
            return match_type;
        }
        // If the first number didn't have a valid country calling code, then
        // we parse the second number without one as well.
        match self.parse_without_region_check(second_number) {
            Ok(second_number_as_proto) => self.is_number_match(first_number, &second_number_as_proto),
            Err(_) => MatchType::NotANumber,
        }
    }

    /// Compares two strings as phone numbers. Strings without a country
    /// calling code are compared by their national numbers only.
    pub fn is_number_match_with_two_strings(&self, first_number: &str, second_number: &str) -> MatchType {
        match self.parse(first_number, RegionCode::get_unknown()) {
            Ok(first_number_as_proto) => {
                return self.is_number_match_with_one_string(&first_number_as_proto, second_number);
            }
            Err(ParseError::InvalidCountryCode) => {}
            Err(_) => return MatchType::NotANumber,
        }
        match self.parse(second_number, RegionCode::get_unknown()) {
            Ok(second_number_as_proto) => {
                return self.is_number_match_with_one_string(&second_number_as_proto, first_number);
            }
            Err(ParseError::InvalidCountryCode) => {}
            Err(_) => return MatchType::NotANumber,
        }
        // Neither number has a country calling code, both are parsed without
        // one.
        let (Ok(first_number_as_proto), Ok(second_number_as_proto)) = (
            self.parse_without_region_check(first_number),
            self.parse_without_region_check(second_number),
        ) else {
            return MatchType::NotANumber;
        };
        self.is_number_match(&first_number_as_proto, &second_number_as_proto)
    }

    /// Parses a number that may lack a country calling code while no region
    /// is known. The country calling code is left 0 then.
    fn parse_without_region_check(&self, number_to_parse: &str) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, "", false, false)
            .map_err(ParseErrorInternal::into_public)
    }
}

#[cfg(test)]
mod tests {
    use crate::{phonenumber::PhoneNumber, MatchType, PhoneNumberUtil};

    // Calling codes and national numbers only, no region needs to be
    // resolved for these comparisons.
    fn util() -> PhoneNumberUtil {
        PhoneNumberUtil::from_metadata_text("").unwrap()
    }

    fn number(country_code: i32, national_number: u64) -> PhoneNumber {
        let mut number = PhoneNumber::new();
        number.set_country_code(country_code);
        number.set_national_number(national_number);
        number
    }

    #[test]
    fn different_extensions_never_match() {
        let util = util();
        let mut first = number(64, 33316005);
        let mut second = first.clone();
        first.set_extension("3456");
        second.set_extension("1234");
        assert_eq!(MatchType::NoMatch, util.is_number_match(&first, &second));
    }

    #[test]
    fn empty_extension_is_no_extension() {
        let util = util();
        let first = number(64, 33316005);
        let mut second = first.clone();
        second.set_extension("");
        assert_eq!(MatchType::ExactMatch, util.is_number_match(&first, &second));
    }

    #[test]
    fn unknown_calling_code_matches_national_number() {
        let util = util();
        let first = number(64, 33316005);
        let second = number(0, 33316005);
        assert_eq!(MatchType::NsnMatch, util.is_number_match(&first, &second));
        assert_eq!(MatchType::NsnMatch, util.is_number_match(&second, &first));

        let short = number(0, 3316005);
        assert_eq!(MatchType::ShortNsnMatch, util.is_number_match(&first, &short));
        assert_eq!(MatchType::ShortNsnMatch, util.is_number_match(&short, &first));
    }

    #[test]
    fn different_calling_codes_do_not_match() {
        let util = util();
        assert_eq!(MatchType::NoMatch, util.is_number_match(&number(64, 33316005), &number(1, 33316005)));
    }
}
