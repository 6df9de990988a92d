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

use std::borrow::Cow;

use log::trace;

use super::{
    errors::{ExtractNumberError, NotANumberError, ParseError, ParseErrorInternal, ValidationError},
    helper_constants::{
        MAX_INPUT_STRING_LENGTH, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN,
        RFC3966_ISDN_SUBADDRESS, RFC3966_PHONE_CONTEXT, RFC3966_PREFIX,
    },
    helper_functions::test_number_length_against_pattern,
    helper_types::PhoneNumberWithCountryCodeSource,
    phonenumberutil::PhoneNumberUtil,
};
use crate::{
    i18n::RegionCode,
    phonenumber::{CountryCodeSource, PhoneNumber},
    proto_gen::phonemetadata::PhoneMetadata,
    regex_util::{anchor_start, RegexConsume},
    regexp_cache::InvalidRegexError,
    string_util::{cut_cow_start, truncate_cow},
};

/// Country calling code found at the start of a number and the digits
/// following it.
struct ExtractedCountryCode<'a> {
    country_code: i32,
    number: PhoneNumberWithCountryCodeSource<'a>,
}

impl PhoneNumberUtil {
    /// Parses a string into a phone number.
    ///
    /// `default_region` is used when the number is not written in
    /// international format, i.e. does not start with a plus sign or the
    /// international dialling prefix of the region. It may be "ZZ" or empty
    /// for numbers that do start with a plus sign. Punctuation, letters of
    /// vanity numbers, extensions and RFC3966 `tel:` URIs are understood.
    pub fn parse(&self, number_to_parse: &str, default_region: &str) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, false, true)
            .map_err(ParseErrorInternal::into_public)
    }

    /// Like [`PhoneNumberUtil::parse`], and also records the raw input, the
    /// source of the country calling code and the carrier code found in the
    /// national prefix.
    pub fn parse_and_keep_raw_input(
        &self,
        number_to_parse: &str,
        default_region: &str,
    ) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, true, true)
            .map_err(ParseErrorInternal::into_public)
    }

    /// Parses a string and fills a phone number. If `check_region` is true,
    /// the number must start with a plus sign when the default region is
    /// unknown.
    pub(super) fn parse_helper(
        &self,
        number_to_parse: &str,
        default_region: &str,
        keep_raw_input: bool,
        check_region: bool,
    ) -> Result<PhoneNumber, ParseErrorInternal> {
        if number_to_parse.len() > MAX_INPUT_STRING_LENGTH {
            return Err(NotANumberError::InputTooLong.into());
        }
        let default_region = RegionCode::normalize(default_region);

        let national_number = self.build_national_number_for_parsing(number_to_parse)?;

        if !self.is_viable_phone_number(&national_number) {
            trace!("The string supplied did not seem to be a phone number '{}'.", national_number);
            return Err(NotANumberError::NotMatchedValidNumberPattern.into());
        }

        if check_region && !self.check_region_for_parsing(&national_number, &default_region) {
            trace!("Missing or invalid default country.");
            return Err(ParseError::InvalidCountryCode.into());
        }

        let mut phone_number = PhoneNumber::new();
        if keep_raw_input {
            phone_number.set_raw_input(number_to_parse);
        }

        // Attempt to parse extension first, since it doesn't require
        // region-specific data and we want to have the non-normalised number
        // here.
        let (national_number, extension) = self.maybe_strip_extension(national_number);
        if let Some(extension) = extension {
            phone_number.set_extension(extension);
        }

        let mut region_metadata = self.get_metadata_for_region(&default_region);

        let extracted = match self.maybe_extract_country_code(&national_number, region_metadata) {
            Ok(extracted) => extracted,
            Err(ParseErrorInternal::FailedToParse(ParseError::InvalidCountryCode)) => {
                // Strip the plus signs and try again, the number may have been
                // written with the international prefix after a plus sign.
                let Some(plus_match) = self.reg_exps.plus_chars_pattern.find(&national_number) else {
                    return Err(ParseError::InvalidCountryCode.into());
                };
                let retried = self.maybe_extract_country_code(
                    &national_number[plus_match.end()..],
                    region_metadata,
                )?;
                if retried.country_code == 0 {
                    return Err(ParseError::InvalidCountryCode.into());
                }
                retried
            }
            Err(err) => return Err(err),
        };

        let ExtractedCountryCode {
            mut country_code,
            number: PhoneNumberWithCountryCodeSource { phone_number: national_digits, country_code_source },
        } = extracted;
        if keep_raw_input {
            phone_number.set_country_code_source(country_code_source);
        }

        // Without an extracted country calling code the digits are the
        // normalized version of the number we were given to parse, and the
        // region supplied is used instead.
        let mut normalized_national_number = national_digits.into_owned();
        if country_code != 0 {
            let number_region = self.get_region_code_for_country_code(country_code);
            if number_region != default_region {
                region_metadata =
                    self.get_metadata_for_region_or_calling_code(country_code, number_region);
            }
        } else if let Some(metadata) = region_metadata {
            country_code = metadata.country_code();
        } else if keep_raw_input {
            phone_number.clear_country_code_source();
        }
        phone_number.set_country_code(country_code);

        if normalized_national_number.len() < MIN_LENGTH_FOR_NSN {
            trace!("The string supplied is too short to be a phone number.");
            return Err(ParseError::TooShortNsn.into());
        }

        if let Some(metadata) = region_metadata {
            let (potential_national_number, carrier_code) =
                self.maybe_strip_national_prefix_and_carrier_code(metadata, &normalized_national_number)?;
            // We require that the NSN remaining after stripping the national
            // prefix and carrier code be of a possible length for the region.
            // Otherwise, we don't do the stripping, since the original number
            // could be a valid short number.
            if !self.is_shorter_than_possible_normal_number(metadata, &potential_national_number)? {
                if keep_raw_input {
                    phone_number.set_preferred_domestic_carrier_code(carrier_code.unwrap_or_default());
                }
                normalized_national_number = potential_national_number.into_owned();
            }
        }

        let length_of_national_number = normalized_national_number.len();
        if length_of_national_number < MIN_LENGTH_FOR_NSN {
            trace!("The string supplied is too short to be a phone number.");
            return Err(ParseError::TooShortNsn.into());
        }
        if length_of_national_number > MAX_LENGTH_FOR_NSN {
            trace!("The string supplied is too long to be a phone number.");
            return Err(ParseError::TooLongNsn.into());
        }

        if normalized_national_number.starts_with('0')
            && region_metadata.is_some_and(|metadata| metadata.leading_zero_possible())
        {
            phone_number.set_italian_leading_zero(true);
            let number_of_leading_zeros = normalized_national_number
                .bytes()
                .take(length_of_national_number - 1)
                .take_while(|b| *b == b'0')
                .count();
            if number_of_leading_zeros != 1 {
                phone_number.set_number_of_leading_zeros(number_of_leading_zeros as i32);
            }
        }

        let national_number = normalized_national_number
            .parse::<u64>()
            .map_err(NotANumberError::FailedToParseNumberAsInt)?;
        phone_number.set_national_number(national_number);
        Ok(phone_number)
    }

    /// Converts the input into the string the pipeline works on: the number
    /// part of an RFC3966 URI with its phone context applied, or the
    /// possible number found in free text.
    fn build_national_number_for_parsing<'a>(
        &self,
        number_to_parse: &'a str,
    ) -> Result<Cow<'a, str>, ParseErrorInternal> {
        let national_number = if let Some(index_of_phone_context) =
            number_to_parse.find(RFC3966_PHONE_CONTEXT)
        {
            let phone_context =
                Self::extract_phone_context(number_to_parse, index_of_phone_context);
            if !self.is_phone_context_valid(phone_context) {
                trace!("The phone-context value '{}' is invalid.", phone_context);
                return Err(NotANumberError::InvalidPhoneContext.into());
            }

            let mut national_number = String::with_capacity(number_to_parse.len());
            // If the phone context contains a phone number prefix, we need to
            // capture it, whereas domains will be ignored.
            if phone_context.starts_with('+') {
                national_number.push_str(phone_context);
            }

            // Now append everything between the "tel:" prefix and the
            // phone-context. This should include the national number, an
            // optional extension or isdn-subaddress component.
            let index_of_national_number = number_to_parse
                .find(RFC3966_PREFIX)
                .map(|index| index + RFC3966_PREFIX.len())
                .filter(|index| *index <= index_of_phone_context)
                .unwrap_or(0);
            national_number.push_str(&number_to_parse[index_of_national_number..index_of_phone_context]);
            Cow::Owned(national_number)
        } else {
            // Extract a possible number from the string passed in (this
            // strips leading characters that could not be the start of a
            // phone number.)
            Cow::Borrowed(self.extract_possible_number(number_to_parse)?)
        };

        // Delete the isdn-subaddress and everything after it if it is present.
        // Note extension won't appear at the same time with isdn-subaddress
        // according to paragraph 5.3 of the RFC3966 spec.
        Ok(match national_number.find(RFC3966_ISDN_SUBADDRESS) {
            Some(index) => truncate_cow(national_number, index),
            None => national_number,
        })
    }

    /// Value of the phone-context parameter, up to the next parameter.
    fn extract_phone_context(number_to_parse: &str, index_of_phone_context: usize) -> &str {
        let phone_context_start = index_of_phone_context + RFC3966_PHONE_CONTEXT.len();
        let phone_context = &number_to_parse[phone_context_start..];
        match phone_context.find(';') {
            Some(phone_context_end) => &phone_context[..phone_context_end],
            None => phone_context,
        }
    }

    /// A phone context is either a global number prefix such as "+64-3" or
    /// a domain name.
    fn is_phone_context_valid(&self, phone_context: &str) -> bool {
        if phone_context.is_empty() {
            return false;
        }
        self.reg_exps
            .rfc3966_global_number_digits_pattern
            .is_match(phone_context)
            || self.reg_exps.rfc3966_domainname_pattern.is_match(phone_context)
    }

    /// Attempts to extract a possible number from the string passed in. This
    /// currently strips all leading characters that cannot be used to start
    /// a phone number, trailing characters that are neither letters, digits
    /// nor the hash sign, and everything from a marker of a second number
    /// on.
    pub fn extract_possible_number<'a>(&self, phone_number: &'a str) -> Result<&'a str, ExtractNumberError> {
        let Some(start) = self.reg_exps.valid_start_char_pattern.find(phone_number) else {
            trace!("Number '{}' has no valid start character", phone_number);
            return Err(ExtractNumberError::NoValidStartCharacter);
        };
        let extracted = self.trim_unwanted_end_chars(&phone_number[start.start()..]);
        if extracted.is_empty() {
            return Err(ExtractNumberError::NotANumber);
        }

        // Check for extra numbers at the end.
        let extracted = self
            .reg_exps
            .capture_up_to_second_number_start_pattern
            .captures(extracted)
            .and_then(|captures| captures.get(1))
            .map(|first_number| first_number.as_str())
            .unwrap_or(extracted);
        Ok(extracted)
    }

    fn trim_unwanted_end_chars<'a>(&self, phone_number: &'a str) -> &'a str {
        let mut end = phone_number.len();
        let mut buf = [0u8; 4];
        for (index, c) in phone_number.char_indices().rev() {
            if !self.reg_exps.unwanted_end_char_pattern.is_match(c.encode_utf8(&mut buf)) {
                break;
            }
            end = index;
        }
        &phone_number[..end]
    }

    /// Checks to see that the region code used is valid, or if it is not
    /// valid, that the number to parse starts with a + symbol so that we can
    /// attempt to infer the country from the number.
    fn check_region_for_parsing(&self, number_to_parse: &str, default_region: &str) -> bool {
        if self.is_valid_region_code(default_region) {
            return true;
        }
        !number_to_parse.is_empty() && self.reg_exps.plus_chars_pattern.is_match(number_to_parse)
    }

    /// Strips any extension (as in, the part of the number dialled after the
    /// call is connected, usually indicated with extn, ext, x or similar) from
    /// the end of the number, and returns it. The number left must still be
    /// viable.
    pub(super) fn maybe_strip_extension<'a>(&self, number: Cow<'a, str>) -> (Cow<'a, str>, Option<String>) {
        let Some(captures) = self.reg_exps.extn_pattern.captures(&number) else {
            return (number, None);
        };
        let Some(full_match) = captures.get(0) else {
            return (number, None);
        };
        let extension_start = full_match.start();
        // If we find a potential extension, and the number preceding this is a
        // viable number, we assume it is an extension.
        if !self.is_viable_phone_number(&number[..extension_start]) {
            return (number, None);
        }
        // The numbers are captured into groups in the regular expression.
        let Some(extension) = (1..captures.len())
            .filter_map(|i| captures.get(i))
            .find(|group| !group.as_str().is_empty())
            .map(|group| group.as_str().to_owned())
        else {
            return (number, None);
        };
        (truncate_cow(number, extension_start), Some(extension))
    }

    /// Whether the number contains at least three letters after the
    /// extension is removed, e.g. "1800 six-flags".
    pub fn is_alpha_number(&self, number: &str) -> bool {
        if !self.is_viable_phone_number(number) {
            // Number is too short, or doesn't match the basic phone number
            // pattern.
            return false;
        }
        let (stripped_number, _) = self.maybe_strip_extension(Cow::Borrowed(number));
        self.reg_exps.valid_alpha_phone_pattern.is_match(&stripped_number)
    }

    /// Tries to extract a country calling code from a number. The number may
    /// start with a plus sign, the international dialling prefix of the
    /// default region, or the country calling code of the default region
    /// itself. A country calling code of 0 means none was found, the number
    /// is then returned as is.
    fn maybe_extract_country_code<'a>(
        &self,
        number: &'a str,
        default_region_metadata: Option<&PhoneMetadata>,
    ) -> Result<ExtractedCountryCode<'a>, ParseErrorInternal> {
        // Set the default prefix to be something that will never match if
        // there is no default region.
        let possible_country_idd_prefix =
            default_region_metadata.map(|metadata| metadata.international_prefix());
        let full_number =
            self.maybe_strip_international_prefix_and_normalize(number, possible_country_idd_prefix)?;

        if full_number.country_code_source != CountryCodeSource::FromDefaultCountry {
            if full_number.phone_number.len() <= MIN_LENGTH_FOR_NSN {
                trace!("Phone number had an IDD, but after this was not long enough to be a viable phone number.");
                return Err(ParseError::TooShortAfterIdd.into());
            }
            let Some((country_code, national_number)) =
                self.extract_country_code(full_number.phone_number)
            else {
                // If this fails, they must be using a strange country calling
                // code that we don't recognize, or that doesn't exist.
                return Err(ParseError::InvalidCountryCode.into());
            };
            return Ok(ExtractedCountryCode {
                country_code,
                number: PhoneNumberWithCountryCodeSource::new(
                    national_number,
                    full_number.country_code_source,
                ),
            });
        }

        if let Some(metadata) = default_region_metadata {
            // Check to see if the number starts with the country calling code
            // for the default region. If so, we remove the country calling
            // code, and do some checks on the validity of the number before
            // and after.
            let mut buf = itoa::Buffer::new();
            let default_country_code = metadata.country_code();
            let default_country_code_str = buf.format(default_country_code);
            let normalized_number = full_number.phone_number.as_ref();
            if let Some(potential_national_number) =
                normalized_number.strip_prefix(default_country_code_str)
            {
                let general_desc = &metadata.general_desc;
                let (stripped_national_number, _) = self
                    .maybe_strip_national_prefix_and_carrier_code(metadata, potential_national_number)?;
                // If the number was not valid before but is valid now, or if
                // it was too long before, we consider the number with the
                // country calling code stripped to be a better result and keep
                // that instead.
                let valid_now = !self.matcher_api.match_national_number(normalized_number, general_desc, false)
                    && self.matcher_api.match_national_number(&stripped_national_number, general_desc, false);
                let possible_number_pattern = general_desc.possible_number_pattern();
                let too_long_before = !possible_number_pattern.is_empty()
                    && test_number_length_against_pattern(
                        &self.reg_exps.regexp_cache,
                        possible_number_pattern,
                        normalized_number,
                    )? == Err(ValidationError::TooLong);
                if valid_now || too_long_before {
                    let national_number = stripped_national_number.into_owned();
                    return Ok(ExtractedCountryCode {
                        country_code: default_country_code,
                        number: PhoneNumberWithCountryCodeSource::new(
                            Cow::Owned(national_number),
                            CountryCodeSource::FromNumberWithoutPlusSign,
                        ),
                    });
                }
            }
        }

        // No country calling code present.
        Ok(ExtractedCountryCode {
            country_code: 0,
            number: PhoneNumberWithCountryCodeSource::new(
                full_number.phone_number,
                CountryCodeSource::FromDefaultCountry,
            ),
        })
    }

    /// Reads the country calling code from the start of a normalized number.
    /// Country calling codes are at most three digits long and never start
    /// with 0.
    fn extract_country_code<'a>(&self, full_number: Cow<'a, str>) -> Option<(i32, Cow<'a, str>)> {
        if full_number.is_empty() || full_number.starts_with('0') {
            // Country codes do not begin with a '0'.
            return None;
        }
        for length in 1..=MAX_LENGTH_COUNTRY_CODE.min(full_number.len()) {
            let Ok(potential_country_code) = full_number[..length].parse::<i32>() else {
                return None;
            };
            if self.has_valid_country_calling_code(potential_country_code) {
                return Some((potential_country_code, cut_cow_start(full_number, length)));
            }
        }
        None
    }

    /// Strips any international prefix (such as +, 00, 011) present in the
    /// number provided, normalizes the resulting number, and indicates if an
    /// international prefix was present.
    pub(super) fn maybe_strip_international_prefix_and_normalize<'a>(
        &self,
        phone_number: &'a str,
        possible_idd_prefix: Option<&str>,
    ) -> Result<PhoneNumberWithCountryCodeSource<'a>, InvalidRegexError> {
        if phone_number.is_empty() {
            return Ok(PhoneNumberWithCountryCodeSource::new(
                Cow::Borrowed(phone_number),
                CountryCodeSource::FromDefaultCountry,
            ));
        }
        // Check to see if the number begins with one or more plus signs.
        if let Some(plus_match) = self.reg_exps.plus_chars_pattern.find(phone_number) {
            // Can now normalize the rest of the number since we've consumed
            // the "+" sign at the start.
            return Ok(PhoneNumberWithCountryCodeSource::new(
                Cow::Owned(self.normalize(&phone_number[plus_match.end()..])),
                CountryCodeSource::FromNumberWithPlusSign,
            ));
        }

        // Attempt to parse the first digits as an international prefix.
        let normalized_number = self.normalize(phone_number);
        if let Some(possible_idd_prefix) = possible_idd_prefix.filter(|prefix| !prefix.is_empty()) {
            let idd_pattern = self.reg_exps.regexp_cache.get_regex(&anchor_start(possible_idd_prefix))?;
            if let Some(idd_match) = idd_pattern.find_start(&normalized_number) {
                let match_end = idd_match.end();
                // Only strip this if the first digit after the match is not a
                // 0, since country calling codes cannot begin with 0.
                let next_digit = normalized_number[match_end..]
                    .chars()
                    .find(|c| c.is_ascii_digit());
                if next_digit != Some('0') {
                    return Ok(PhoneNumberWithCountryCodeSource::new(
                        cut_cow_start(Cow::Owned(normalized_number), match_end),
                        CountryCodeSource::FromNumberWithIdd,
                    ));
                }
            }
        }
        Ok(PhoneNumberWithCountryCodeSource::new(
            Cow::Owned(normalized_number),
            CountryCodeSource::FromDefaultCountry,
        ))
    }

    /// Strips any national prefix (such as 0, 1) present in the number
    /// provided, applying the transform rule of the region when it has one.
    /// Returns the number left and the carrier code captured by the national
    /// prefix for parsing, if any. The number is returned unchanged when the
    /// prefix does not match, or when stripping would turn a number that
    /// matched the general pattern of the region into one that does not.
    pub(super) fn maybe_strip_national_prefix_and_carrier_code<'a>(
        &self,
        metadata: &PhoneMetadata,
        phone_number: &'a str,
    ) -> Result<(Cow<'a, str>, Option<String>), InvalidRegexError> {
        let possible_national_prefix = metadata.national_prefix_for_parsing();
        if phone_number.is_empty() || possible_national_prefix.is_empty() {
            // Early return for numbers of zero length or with no national
            // prefix possible.
            return Ok((Cow::Borrowed(phone_number), None));
        }
        // Attempt to parse the first digits as a national prefix.
        let prefix_pattern = self
            .reg_exps
            .regexp_cache
            .get_regex(&anchor_start(possible_national_prefix))?;
        let Some(prefix_captures) = prefix_pattern.captures(phone_number) else {
            return Ok((Cow::Borrowed(phone_number), None));
        };
        let Some(prefix_match) = prefix_captures.get(0) else {
            return Ok((Cow::Borrowed(phone_number), None));
        };

        let general_desc = &metadata.general_desc;
        // Check if the original number is viable.
        let is_viable_original_number =
            self.matcher_api.match_national_number(phone_number, general_desc, false);
        // prefix_captures.get(n) with n > 0 are the groups of the national
        // prefix for parsing, the last one holding the digits the transform
        // rule keeps.
        let num_of_groups = prefix_captures.len() - 1;
        let transform_rule = metadata.national_prefix_transform_rule();
        let last_group_matched = num_of_groups > 0
            && prefix_captures
                .get(num_of_groups)
                .is_some_and(|group| !group.as_str().is_empty());

        if transform_rule.is_empty() || !last_group_matched {
            let stripped_number = &phone_number[prefix_match.end()..];
            // If the original number was viable, and the resultant number is
            // not, we return.
            if is_viable_original_number
                && !self.matcher_api.match_national_number(stripped_number, general_desc, false)
            {
                return Ok((Cow::Borrowed(phone_number), None));
            }
            let carrier_code = if num_of_groups > 0 && prefix_captures.get(num_of_groups).is_some() {
                prefix_captures.get(1).map(|group| group.as_str().to_owned())
            } else {
                None
            };
            return Ok((Cow::Borrowed(stripped_number), carrier_code));
        }

        let mut transformed_number = String::with_capacity(phone_number.len() + transform_rule.len());
        prefix_captures.expand(transform_rule, &mut transformed_number);
        transformed_number.push_str(&phone_number[prefix_match.end()..]);
        if is_viable_original_number
            && !self.matcher_api.match_national_number(&transformed_number, general_desc, false)
        {
            return Ok((Cow::Borrowed(phone_number), None));
        }
        let carrier_code = if num_of_groups > 1 {
            prefix_captures.get(1).map(|group| group.as_str().to_owned())
        } else {
            None
        };
        Ok((Cow::Owned(transformed_number), carrier_code))
    }

    /// Whether the number is too short for the possible number pattern of
    /// the region.
    fn is_shorter_than_possible_normal_number(
        &self,
        metadata: &PhoneMetadata,
        number: &str,
    ) -> Result<bool, InvalidRegexError> {
        let possible_number_pattern = metadata.general_desc.possible_number_pattern();
        if possible_number_pattern.is_empty() {
            return Ok(number.len() < MIN_LENGTH_FOR_NSN);
        }
        Ok(test_number_length_against_pattern(
            &self.reg_exps.regexp_cache,
            possible_number_pattern,
            number,
        )? == Err(ValidationError::TooShort))
    }
}
