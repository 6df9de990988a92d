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

use strum::IntoEnumIterator;

use crate::{
    phonenumber::PhoneNumber,
    proto_gen::phonemetadata::{PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc},
    regex_util::{anchor_full, RegexConsume},
    regexp_cache::{InvalidRegexError, RegexCache},
};

use super::{
    errors::{InvalidMetadataError, ValidationError},
    helper_constants::{
        DIGITS, MAX_AMERICAN_STYLE_EXTN_DIGITS, MAX_EXTN_DIGITS, OPTIONAL_EXT_SUFFIX, PLUS_SIGN,
        POSSIBLE_CHARS_AFTER_EXT_LABEL, POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        RFC3966_EXTN_PREFIX, RFC3966_PREFIX,
    },
    PhoneNumberFormat, PhoneNumberType,
};

/// Marker of a number description without any numbers.
const NOT_AVAILABLE_PATTERN: &str = "NA";

/// Decodes metadata kept in protobuf text format and fills the defaults
/// that compiled metadata relies on.
pub(super) fn load_compiled_metadata(text: &str) -> Result<PhoneMetadataCollection, InvalidMetadataError> {
    let mut collection = protobuf::text_format::parse_from_str::<PhoneMetadataCollection>(text)
        .map_err(|err| InvalidMetadataError(err.to_string()))?;
    for metadata in collection.metadata.iter_mut() {
        fill_metadata_defaults(metadata);
    }
    Ok(collection)
}

/// The national prefix for parsing defaults to the national prefix itself.
pub(super) fn fill_metadata_defaults(metadata: &mut PhoneMetadata) {
    if !metadata.has_national_prefix_for_parsing() && metadata.has_national_prefix() {
        let national_prefix = metadata.national_prefix().to_owned();
        metadata.set_national_prefix_for_parsing(national_prefix);
    }
}

/// Returns a pointer to the description inside the metadata of the appropriate
/// type.
pub(super) fn get_number_desc_by_type(
    metadata: &PhoneMetadata,
    phone_number_type: PhoneNumberType,
) -> &PhoneNumberDesc {
    match phone_number_type {
        PhoneNumberType::PremiumRate => &metadata.premium_rate,
        PhoneNumberType::TollFree => &metadata.toll_free,
        PhoneNumberType::Mobile => &metadata.mobile,
        PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile => &metadata.fixed_line,
        PhoneNumberType::SharedCost => &metadata.shared_cost,
        PhoneNumberType::VoIP => &metadata.voip,
        PhoneNumberType::PersonalNumber => &metadata.personal_number,
        PhoneNumberType::Pager => &metadata.pager,
        PhoneNumberType::UAN => &metadata.uan,
        PhoneNumberType::VoiceMail => &metadata.voicemail,
        // Instead of the default case, we only match `Unknown`
        PhoneNumberType::Unknown => &metadata.general_desc,
    }
}

/// A helper function that is used by Format and FormatByPattern.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: i32,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    // we anyway allocate a new string in concatenation, so we'l do it once
    // with capacity of resulting string
    *formatted_number = match number_format {
        PhoneNumberFormat::E164 =>
            fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, &formatted_number),
        PhoneNumberFormat::International =>
            fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " ", &formatted_number),
        PhoneNumberFormat::RFC3966 => fast_cat::concat_str!(
            RFC3966_PREFIX,
            PLUS_SIGN,
            country_calling_code_str,
            "-",
            &formatted_number
        ),
        PhoneNumberFormat::National => return,
    };
}

// Returns true when one national number is the suffix of the other or both are
// the same.
pub(super) fn is_national_number_suffix_of_the_other(
    first_number: &PhoneNumber,
    second_number: &PhoneNumber,
) -> bool {
    let mut buf = itoa::Buffer::new();
    let first_number_national_number = buf.format(first_number.national_number());
    let mut buf = itoa::Buffer::new();
    let second_number_national_number = buf.format(second_number.national_number());
    first_number_national_number.ends_with(second_number_national_number)
        || second_number_national_number.ends_with(first_number_national_number)
}

/// Helper method for constructing regular expressions for parsing. Creates an
/// expression that captures up to max_length digits.
fn extn_digits(max_length: usize) -> String {
    let mut buf = itoa::Buffer::new();
    fast_cat::concat_str!("(", DIGITS, "{1,", buf.format(max_length), "})")
}

// Creates the regular-expression pattern to match extensions. Note that:
// - There are three capturing groups for the extension itself, parsing takes
// the first one that matched.
// - The only capturing groups should be around the digits that you want to
// capture as part of the extension, or else parsing will fail!
pub(super) fn create_extn_pattern() -> String {
    // Two options are allowed for representing the accented ó - the character
    // itself, and the unicode decomposed form with the combining acute accent.
    let ext_labels = "(?:e?xt(?:ensi(?:o\u{0301}?|\u{00F3}))?n?|\u{FF45}?\u{FF58}\u{FF54}\u{FF4E}?|\
        [;,x\u{FF58}#\u{FF03}~\u{FF5E}]|int|anexo|\u{FF49}\u{FF4E}\u{FF54})";

    let rfc_extn = fast_cat::concat_str!(RFC3966_EXTN_PREFIX, &extn_digits(MAX_EXTN_DIGITS));
    let labelled_extn = fast_cat::concat_str!(
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        ext_labels,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(MAX_EXTN_DIGITS),
        OPTIONAL_EXT_SUFFIX
    );
    // American numbers where the extension is written with a hash at the end,
    // such as "- 503#".
    let american_style_extn_with_suffix = fast_cat::concat_str!(
        "[- ]+",
        &extn_digits(MAX_AMERICAN_STYLE_EXTN_DIGITS),
        "#"
    );

    fast_cat::concat_str!(&rfc_extn, "|", &labelled_extn, "|", &american_style_extn_with_suffix)
}

/// Normalizes a string of characters representing a phone number by replacing
/// all characters found in the accompanying map with the values therein, and
/// stripping all other characters if remove_non_matches is true.
///
/// Parameters:
/// * `normalization_replacements` - a mapping of characters to what they should be
///   replaced by in the normalized version of the phone number. Keys are
///   looked up in upper case.
/// * `remove_non_matches` - indicates whether characters that are not able to be
///   replaced should be stripped from the number. If this is false, they will be
///   left unchanged in the number.
/// * `phone_number` - a string of characters representing a phone number to
///   be normalized.
pub(super) fn normalize_helper(
    normalization_replacements: &HashMap<char, char>,
    remove_non_matches: bool,
    phone_number: &str,
) -> String {
    let mut normalized_number = String::with_capacity(phone_number.len());
    for phone_char in phone_number.chars() {
        if let Some(replacement) = normalization_replacements.get(&phone_char.to_ascii_uppercase()) {
            normalized_number.push(*replacement);
        } else if !remove_non_matches {
            normalized_number.push(phone_char);
        }
        // If neither of the above are true, we remove this character.
    }
    normalized_number
}

/// Returns `true` if there is any data set for a particular PhoneNumberDesc.
pub(super) fn desc_has_data(desc: &PhoneNumberDesc) -> bool {
    desc.has_example_number()
        || (desc.has_national_number_pattern()
            && desc.national_number_pattern() != NOT_AVAILABLE_PATTERN)
}

/// Returns the types we have metadata for based on the PhoneMetadata object
/// passed in.
pub(super) fn get_supported_types_for_metadata(
    metadata: &PhoneMetadata,
) -> HashSet<PhoneNumberType> {
    PhoneNumberType::iter()
        // Never return FIXED_LINE_OR_MOBILE (it is a convenience type, and
        // represents that a particular number type can't be
        // determined) or UNKNOWN (the non-type).
        .filter(|number_type| {
            !matches!(
                number_type,
                PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Unknown
            )
        })
        .filter(|number_type| desc_has_data(get_number_desc_by_type(metadata, *number_type)))
        .collect()
}

/// Checks a national number against a possible number pattern. A full match
/// means the length is possible, a match of a prefix only means the number
/// has surplus digits, anything else means digits are missing.
pub(super) fn test_number_length_against_pattern(
    regexp_cache: &RegexCache,
    possible_number_pattern: &str,
    national_number: &str,
) -> Result<Result<(), ValidationError>, InvalidRegexError> {
    let full_pattern = regexp_cache.get_regex(&anchor_full(possible_number_pattern))?;
    if full_pattern.is_match(national_number) {
        return Ok(Ok(()));
    }
    let pattern = regexp_cache.get_regex(possible_number_pattern)?;
    if pattern.matches_start(national_number) {
        Ok(Err(ValidationError::TooLong))
    } else {
        Ok(Err(ValidationError::TooShort))
    }
}

/// Returns a new phone number containing only the fields needed to uniquely
/// identify a phone number, rather than any fields that capture the context in
/// which the phone number was created.
/// These fields correspond to those set in `parse()` rather than
/// `parse_and_keep_raw_input()`. Empty extensions are dropped.
pub(super) fn copy_core_fields_only(from_number: &PhoneNumber) -> PhoneNumber {
    let mut to_number = PhoneNumber::new();
    to_number.set_country_code(from_number.country_code());
    to_number.set_national_number(from_number.national_number());
    if !from_number.extension().is_empty() {
        to_number.set_extension(from_number.extension());
    }
    if from_number.italian_leading_zero() {
        to_number.set_italian_leading_zero(true);
        // This field is only relevant if there are leading zeros at all.
        to_number.set_number_of_leading_zeros(from_number.number_of_leading_zeros());
    }
    to_number
}

#[cfg(test)]
mod tests {
    use crate::{phonenumber::PhoneNumber, proto_gen::phonemetadata::PhoneNumberDesc, regexp_cache::RegexCache};

    use super::{
        copy_core_fields_only, desc_has_data, is_national_number_suffix_of_the_other,
        test_number_length_against_pattern,
    };
    use crate::phonenumberutil::errors::ValidationError;

    #[test]
    fn length_against_pattern() {
        let cache = RegexCache::new();
        assert_eq!(Ok(()), test_number_length_against_pattern(&cache, "\\d{7,10}", "6502530000").unwrap());
        assert_eq!(Err(ValidationError::TooLong), test_number_length_against_pattern(&cache, "\\d{7,10}", "65025300001").unwrap());
        assert_eq!(Err(ValidationError::TooShort), test_number_length_against_pattern(&cache, "\\d{7,10}", "253000").unwrap());
    }

    #[test]
    fn not_available_desc_has_no_data() {
        let mut desc = PhoneNumberDesc::new();
        assert!(!desc_has_data(&desc));
        desc.set_national_number_pattern("NA".to_owned());
        assert!(!desc_has_data(&desc));
        desc.set_national_number_pattern("\\d{8}".to_owned());
        assert!(desc_has_data(&desc));
    }

    #[test]
    fn suffix_and_core_fields() {
        let mut first = PhoneNumber::new();
        first.set_country_code(64);
        first.set_national_number(33316005);
        first.set_extension("");
        first.set_raw_input("+64 3 331 6005");
        let mut second = PhoneNumber::new();
        second.set_national_number(3316005);
        assert!(is_national_number_suffix_of_the_other(&first, &second));

        let core = copy_core_fields_only(&first);
        assert!(!core.has_extension());
        assert!(!core.has_raw_input());
        assert_eq!(33316005, core.national_number());
    }
}
