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

use std::collections::{HashMap, HashSet, VecDeque};

use log::{error, trace, warn};

use super::phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings;
use crate::{
    i18n::RegionCode,
    interfaces::MatcherApi,
    phonenumber::PhoneNumber,
    phonenumberutil::{
        errors::{GetExampleNumberError, InvalidMetadataError, ValidationError},
        helper_constants::{
            ITU_MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN, NANPA_COUNTRY_CODE, PLUS_SIGN,
            REGION_CODE_FOR_NON_GEO_ENTITY,
        },
        helper_functions::{
            fill_metadata_defaults, get_number_desc_by_type, get_supported_types_for_metadata,
            load_compiled_metadata, normalize_helper, test_number_length_against_pattern,
        },
        PhoneNumberType,
    },
    proto_gen::phonemetadata::{PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc},
    regex_based_matcher::RegexBasedMatcher,
    regex_util::RegexConsume,
    generated::metadata::METADATA,
};

/// Entry point of the library. Holds the numbering plan metadata of every
/// supported region and answers parsing, validation, classification,
/// formatting and matching queries against it.
///
/// Construction compiles a number of regular expressions, so one instance
/// should be shared. [`crate::PHONE_NUMBER_UTIL`] is built from the metadata
/// compiled into the library. All methods take `&self` and the instance can
/// be used from several threads at once.
pub struct PhoneNumberUtil {
    /// An API for validation checking.
    pub(super) matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions and character mappings.
    pub(super) reg_exps: PhoneNumberRegExpsAndMappings,

    /// A mapping from a country calling code to the region codes which use it,
    /// main country first. Regions under NANPA share the country calling
    /// code 1, so 1 is mapped to "US" first. Kept sorted by calling code for
    /// binary search.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,

    /// The set of regions that share country calling code 1.
    nanpa_regions: HashSet<String>,

    /// A mapping from a region code to a PhoneMetadata for that region.
    region_to_metadata_map: HashMap<String, PhoneMetadata>,

    /// A mapping from a country calling code for a non-geographical entity to the
    /// PhoneMetadata for that country calling code. Examples of the country
    /// calling codes include 800 (International Toll Free Service) and 808
    /// (International Shared Cost Service).
    country_code_to_non_geographical_metadata_map: HashMap<i32, PhoneMetadata>,
}

impl PhoneNumberUtil {
    /// Builds an instance over the metadata compiled into the library.
    pub(super) fn new() -> Self {
        let metadata_collection = match load_compiled_metadata(METADATA) {
            Err(err) => {
                let err_message = format!("Could not parse compiled-in metadata: {:?}", err);
                error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(metadata) => metadata,
        };
        Self::new_for_metadata(metadata_collection)
    }

    /// Builds an instance over metadata written in protobuf text format,
    /// following `resources/phonemetadata.proto`.
    pub fn from_metadata_text(text: &str) -> Result<Self, InvalidMetadataError> {
        Ok(Self::new_for_metadata(load_compiled_metadata(text)?))
    }

    /// Builds an instance over already decoded metadata.
    ///
    /// Entries with the region code "ZZ" are ignored. Entries with the region
    /// code "001" describe non-geographical entities and are keyed by their
    /// country calling code.
    pub fn new_for_metadata(metadata_collection: PhoneMetadataCollection) -> Self {
        let mut instance = Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
            country_calling_code_to_region_code_map: Default::default(),
            nanpa_regions: Default::default(),
            region_to_metadata_map: Default::default(),
            country_code_to_non_geographical_metadata_map: Default::default(),
        };
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<i32, VecDeque<String>>::new();
        for mut metadata in metadata_collection.metadata {
            let region_code = metadata.id().to_owned();
            if RegionCode::get_unknown() == region_code {
                continue;
            }
            fill_metadata_defaults(&mut metadata);
            let main_country_for_code = metadata.main_country_for_code();
            let country_calling_code = metadata.country_code();

            if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
                instance
                    .country_code_to_non_geographical_metadata_map
                    .insert(country_calling_code, metadata);
            } else {
                instance
                    .region_to_metadata_map
                    .insert(region_code.clone(), metadata);
            }

            if country_calling_code == NANPA_COUNTRY_CODE {
                instance.nanpa_regions.insert(region_code.clone());
            }
            let regions = country_calling_code_to_region_map
                .entry(country_calling_code)
                .or_default();
            if main_country_for_code {
                regions.push_front(region_code);
            } else {
                regions.push_back(region_code);
            }
        }

        instance.country_calling_code_to_region_code_map.extend(
            country_calling_code_to_region_map
                .into_iter()
                .map(|(code, regions)| (code, Vec::from(regions))),
        );
        // Sort all the pairs in ascending order according to country calling code.
        instance
            .country_calling_code_to_region_code_map
            .sort_by_key(|(code, _)| *code);
        trace!(
            "Loaded metadata for {} regions and {} non-geographical entities",
            instance.region_to_metadata_map.len(),
            instance.country_code_to_non_geographical_metadata_map.len()
        );
        instance
    }

    /// Region codes of all supported regions, in no particular order.
    pub fn get_supported_regions(&self) -> Vec<&str> {
        self.region_to_metadata_map.keys().map(String::as_str).collect()
    }

    /// Country calling codes of all supported non-geographical entities,
    /// e.g. 800.
    pub fn get_supported_global_network_calling_codes(&self) -> HashSet<i32> {
        self.country_code_to_non_geographical_metadata_map
            .keys()
            .copied()
            .collect()
    }

    /// All country calling codes, geographical or not.
    pub fn get_supported_calling_codes(&self) -> HashSet<i32> {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
            .collect()
    }

    /// Number types the region has metadata for. `None` for an unknown
    /// region.
    pub fn get_supported_types_for_region(
        &self,
        region_code: &str,
    ) -> Option<HashSet<PhoneNumberType>> {
        let region_code = RegionCode::normalize(region_code);
        let Some(metadata) = self.region_to_metadata_map.get(region_code.as_ref()) else {
            warn!("Invalid or unknown region code provided: {}", region_code);
            return None;
        };
        Some(get_supported_types_for_metadata(metadata))
    }

    /// Number types the non-geographical entity has metadata for. `None` for
    /// an unknown calling code.
    pub fn get_supported_types_for_non_geo_entity(
        &self,
        country_calling_code: i32,
    ) -> Option<HashSet<PhoneNumberType>> {
        let Some(metadata) = self
            .country_code_to_non_geographical_metadata_map
            .get(&country_calling_code)
        else {
            warn!("Unknown country calling code for a non-geographical entity provided: {}", country_calling_code);
            return None;
        };
        Some(get_supported_types_for_metadata(metadata))
    }

    pub fn get_metadata_for_region(&self, region_code: &str) -> Option<&PhoneMetadata> {
        self.region_to_metadata_map
            .get(RegionCode::normalize(region_code).as_ref())
    }

    pub fn get_metadata_for_non_geographical_region(
        &self,
        country_calling_code: i32,
    ) -> Option<&PhoneMetadata> {
        self.country_code_to_non_geographical_metadata_map
            .get(&country_calling_code)
    }

    pub(super) fn get_metadata_for_region_or_calling_code(
        &self,
        country_calling_code: i32,
        region_code: &str,
    ) -> Option<&PhoneMetadata> {
        if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
            self.country_code_to_non_geographical_metadata_map
                .get(&country_calling_code)
        } else {
            self.region_to_metadata_map.get(region_code)
        }
    }

    /// Region codes sharing the calling code, main country first.
    pub fn get_region_codes_for_country_calling_code(
        &self,
        country_calling_code: i32,
    ) -> Option<impl ExactSizeIterator<Item = &str>> {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .ok()
            .map(|index| {
                self.country_calling_code_to_region_code_map[index]
                    .1
                    .iter()
                    .map(String::as_str)
            })
    }

    /// Main region of a calling code, "001" for non-geographical entities and
    /// "ZZ" for unknown codes.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        self.get_region_codes_for_country_calling_code(country_calling_code)
            .and_then(|mut regions| regions.next())
            .unwrap_or(RegionCode::get_unknown())
    }

    /// Country calling code of a region, 0 for unknown or non-geographical
    /// regions.
    pub fn get_country_code_for_region(&self, region_code: &str) -> i32 {
        let region_code = RegionCode::normalize(region_code);
        let Some(metadata) = self.region_to_metadata_map.get(region_code.as_ref()) else {
            warn!("Invalid or missing region code ({}) provided.", region_code);
            return 0;
        };
        metadata.country_code()
    }

    pub(super) fn has_valid_country_calling_code(&self, country_calling_code: i32) -> bool {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .is_ok()
    }

    pub(super) fn is_valid_region_code(&self, region_code: &str) -> bool {
        self.region_to_metadata_map.contains_key(region_code)
    }

    /// Whether the region shares the calling code 1.
    pub fn is_nanpa_country(&self, region_code: &str) -> bool {
        self.nanpa_regions
            .contains(RegionCode::normalize(region_code).as_ref())
    }

    /// The national dialling prefix of a region, e.g. "0" for GB. With
    /// `strip_non_digits` the tilde that marks waiting for a dial tone is
    /// removed. `None` for unknown regions and regions without a prefix.
    pub fn get_ndd_prefix_for_region(
        &self,
        region_code: &str,
        strip_non_digits: bool,
    ) -> Option<String> {
        let region_code = RegionCode::normalize(region_code);
        let Some(metadata) = self.region_to_metadata_map.get(region_code.as_ref()) else {
            warn!("Invalid or missing region code ({}) provided.", region_code);
            return None;
        };
        if !metadata.has_national_prefix() {
            return None;
        }
        let mut national_prefix = metadata.national_prefix().to_owned();
        if strip_non_digits {
            national_prefix = national_prefix.replace('~', "");
        }
        Some(national_prefix)
    }

    /// Whether the numbering plan behind the calling code keeps leading zeros
    /// in national significant numbers.
    pub fn is_leading_zero_possible(&self, country_calling_code: i32) -> bool {
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
            .is_some_and(|metadata| metadata.leading_zero_possible())
    }

    /// Digit written before the area code of mobile numbers, e.g. `9` for
    /// Argentina.
    pub fn get_country_mobile_token(&self, country_calling_code: i32) -> Option<char> {
        self.reg_exps
            .mobile_token_mappings
            .get(&country_calling_code)
            .copied()
    }

    /// Digits of the national number, with the leading zeros restored.
    pub fn get_national_significant_number(&self, phone_number: &PhoneNumber) -> String {
        let mut buf = itoa::Buffer::new();
        let national_number = buf.format(phone_number.national_number());
        if !phone_number.italian_leading_zero() {
            return national_number.to_owned();
        }
        let zeros_count = phone_number.number_of_leading_zeros().max(0) as usize;
        let mut national_significant_number =
            String::with_capacity(zeros_count + national_number.len());
        national_significant_number.extend(std::iter::repeat_n('0', zeros_count));
        national_significant_number.push_str(national_number);
        national_significant_number
    }

    /// Region the number belongs to. Calling codes shared by several regions
    /// are resolved by leading digits, then by matching number patterns.
    /// "ZZ" when no region claims the number.
    pub fn get_region_code_for_number(&self, phone_number: &PhoneNumber) -> &str {
        let country_calling_code = phone_number.country_code();
        let Some(region_codes) =
            self.get_region_codes_for_country_calling_code(country_calling_code)
        else {
            trace!("Missing/invalid country calling code ({})", country_calling_code);
            return RegionCode::get_unknown();
        };
        if region_codes.len() == 1 {
            return self.get_region_code_for_country_code(country_calling_code);
        }
        self.get_region_code_for_number_from_region_list(phone_number, region_codes)
    }

    fn get_region_code_for_number_from_region_list<'b>(
        &'b self,
        phone_number: &PhoneNumber,
        region_codes: impl Iterator<Item = &'b str>,
    ) -> &'b str {
        let national_number = self.get_national_significant_number(phone_number);
        for region_code in region_codes {
            // Metadata cannot be missing here, since the region codes come from
            // the country calling code map.
            let Some(metadata) = self.region_to_metadata_map.get(region_code) else {
                continue;
            };
            if metadata.has_leading_digits() {
                match self.reg_exps.regexp_cache.get_regex(metadata.leading_digits()) {
                    Ok(leading_digits) => {
                        if leading_digits.matches_start(&national_number) {
                            return region_code;
                        }
                    }
                    Err(err) => error!("Invalid leading digits of {}: {}", region_code, err),
                }
            } else if self.get_number_type_helper(&national_number, metadata)
                != PhoneNumberType::Unknown
            {
                return region_code;
            }
        }
        RegionCode::get_unknown()
    }

    /// Type of the number by the patterns of its region.
    pub fn get_number_type(&self, phone_number: &PhoneNumber) -> PhoneNumberType {
        let region_code = self.get_region_code_for_number(phone_number);
        let Some(metadata) = self
            .get_metadata_for_region_or_calling_code(phone_number.country_code(), region_code)
        else {
            return PhoneNumberType::Unknown;
        };
        let national_significant_number = self.get_national_significant_number(phone_number);
        self.get_number_type_helper(&national_significant_number, metadata)
    }

    pub(super) fn get_number_type_helper(
        &self,
        national_number: &str,
        metadata: &PhoneMetadata,
    ) -> PhoneNumberType {
        let general_desc = &metadata.general_desc;
        if !general_desc.has_national_number_pattern()
            || !self.is_number_matching_desc(national_number, general_desc)
        {
            trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
            return PhoneNumberType::Unknown;
        }
        let typed_descs = [
            (&metadata.premium_rate, PhoneNumberType::PremiumRate),
            (&metadata.toll_free, PhoneNumberType::TollFree),
            (&metadata.shared_cost, PhoneNumberType::SharedCost),
            (&metadata.voip, PhoneNumberType::VoIP),
            (&metadata.personal_number, PhoneNumberType::PersonalNumber),
            (&metadata.pager, PhoneNumberType::Pager),
            (&metadata.uan, PhoneNumberType::UAN),
            (&metadata.voicemail, PhoneNumberType::VoiceMail),
        ];
        for (desc, number_type) in typed_descs {
            if self.is_number_matching_desc(national_number, desc) {
                trace!("Number '{national_number}' is a {number_type:?} number");
                return number_type;
            }
        }

        let is_fixed_line = self.is_number_matching_desc(national_number, &metadata.fixed_line);
        if is_fixed_line {
            if metadata.same_mobile_and_fixed_line_pattern() {
                trace!("Number '{national_number}': fixed-line and mobile patterns equal, number is fixed-line or mobile");
                return PhoneNumberType::FixedLineOrMobile;
            } else if self.is_number_matching_desc(national_number, &metadata.mobile) {
                trace!("Number '{national_number}': Fixed-line and mobile patterns differ, but number is still fixed-line or mobile");
                return PhoneNumberType::FixedLineOrMobile;
            }
            trace!("Number '{national_number}' is a fixed line number.");
            return PhoneNumberType::FixedLine;
        }
        // Otherwise, test to see if the number is mobile. Only do this if certain
        // that the patterns for mobile and fixed line aren't the same.
        if !metadata.same_mobile_and_fixed_line_pattern()
            && self.is_number_matching_desc(national_number, &metadata.mobile)
        {
            trace!("Number '{national_number}' is a mobile number.");
            return PhoneNumberType::Mobile;
        }
        trace!("Number '{national_number}' type unknown - doesn't match any specific number type pattern.");
        PhoneNumberType::Unknown
    }

    pub(super) fn is_number_matching_desc(
        &self,
        national_number: &str,
        number_desc: &PhoneNumberDesc,
    ) -> bool {
        self.matcher_api.match_possible_number(national_number, number_desc)
            && self
                .matcher_api
                .match_national_number(national_number, number_desc, false)
    }

    /// Whether the number matches a specific type pattern of the region its
    /// calling code and leading digits point to.
    pub fn is_valid_number(&self, phone_number: &PhoneNumber) -> bool {
        let region_code = self.get_region_code_for_number(phone_number);
        self.is_valid_number_for_region(phone_number, region_code)
    }

    /// Whether the number is valid in the given region. A number of another
    /// calling code is never valid there, neither is a number of a region
    /// without number patterns.
    pub fn is_valid_number_for_region(&self, phone_number: &PhoneNumber, region_code: &str) -> bool {
        let region_code = RegionCode::normalize(region_code);
        let country_code = phone_number.country_code();
        let Some(metadata) =
            self.get_metadata_for_region_or_calling_code(country_code, &region_code)
        else {
            return false;
        };
        if REGION_CODE_FOR_NON_GEO_ENTITY != region_code && country_code != metadata.country_code() {
            // Either the region code was invalid, or the country calling code for
            // this number does not match that of the region code.
            return false;
        }
        let national_significant_number = self.get_national_significant_number(phone_number);
        self.get_number_type_helper(&national_significant_number, metadata)
            != PhoneNumberType::Unknown
    }

    /// Length check of the national significant number against the possible
    /// number pattern of the region. Regions without a general pattern fall
    /// back to the ITU bounds.
    pub fn is_possible_number_with_reason(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<(), ValidationError> {
        let country_code = phone_number.country_code();
        // Note: For regions that share a country calling code, like NANPA
        // numbers, we just use the rules from the default region (US in this
        // case) since the possible number pattern is the same for all of them.
        let region_code = self.get_region_code_for_country_code(country_code);
        let Some(metadata) = self.get_metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return Err(ValidationError::InvalidCountryCode);
        };
        let national_number = self.get_national_significant_number(phone_number);
        let general_desc = &metadata.general_desc;
        if !general_desc.has_national_number_pattern() || !general_desc.has_possible_number_pattern() {
            trace!("Checking if number is possible with incomplete metadata.");
            let number_length = national_number.len();
            return if number_length < MIN_LENGTH_FOR_NSN {
                Err(ValidationError::TooShort)
            } else if number_length > ITU_MAX_LENGTH_FOR_NSN {
                Err(ValidationError::TooLong)
            } else {
                Ok(())
            };
        }
        match test_number_length_against_pattern(
            &self.reg_exps.regexp_cache,
            general_desc.possible_number_pattern(),
            &national_number,
        ) {
            Ok(result) => result,
            Err(err) => {
                error!("Invalid possible number pattern of {}: {}", region_code, err);
                Err(ValidationError::TooShort)
            }
        }
    }

    pub fn is_possible_number(&self, phone_number: &PhoneNumber) -> bool {
        self.is_possible_number_with_reason(phone_number).is_ok()
    }

    /// Parses the string dialled from the region and checks whether the
    /// result is possible. Unparsable input is not possible.
    pub fn is_possible_number_for_string(&self, number: &str, region_dialing_from: &str) -> bool {
        match self.parse(number, region_dialing_from) {
            Ok(phone_number) => self.is_possible_number(&phone_number),
            Err(err) => {
                trace!("Could not parse '{}' for possibility check: {}", number, err);
                false
            }
        }
    }

    /// Drops trailing digits of an invalid number until it becomes valid.
    /// Returns false and leaves the number untouched when no valid prefix
    /// exists before the number becomes too short.
    pub fn truncate_too_long_number(&self, phone_number: &mut PhoneNumber) -> bool {
        if self.is_valid_number(phone_number) {
            return true;
        }
        let mut number_copy = phone_number.clone();
        let mut national_number = phone_number.national_number();
        loop {
            national_number /= 10;
            number_copy.set_national_number(national_number);
            if national_number == 0
                || self.is_possible_number_with_reason(&number_copy)
                    == Err(ValidationError::TooShort)
            {
                return false;
            }
            if self.is_valid_number(&number_copy) {
                break;
            }
        }
        phone_number.set_national_number(national_number);
        true
    }

    /// Whether the number is tied to a location: fixed line numbers always
    /// are, mobile numbers only in a few countries.
    pub fn is_number_geographical(&self, phone_number: &PhoneNumber) -> bool {
        self.is_number_geographical_by_type(
            self.get_number_type(phone_number),
            phone_number.country_code(),
        )
    }

    pub(super) fn is_number_geographical_by_type(
        &self,
        number_type: PhoneNumberType,
        country_calling_code: i32,
    ) -> bool {
        matches!(
            number_type,
            PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile
        ) || (self
            .reg_exps
            .geo_mobile_countries
            .contains(&country_calling_code)
            && number_type == PhoneNumberType::Mobile)
    }

    /// False when the number only works inside its own country, like some
    /// toll free numbers. Numbers of unknown regions are assumed diallable.
    pub fn can_be_internationally_dialled(&self, phone_number: &PhoneNumber) -> bool {
        let region_code = self.get_region_code_for_number(phone_number);
        let Some(metadata) = self.region_to_metadata_map.get(region_code) else {
            // Note numbers belonging to non-geographical entities (e.g. +800
            // numbers) are always internationally diallable, and will be caught
            // here.
            return true;
        };
        let national_significant_number = self.get_national_significant_number(phone_number);
        !self.is_number_matching_desc(
            &national_significant_number,
            &metadata.no_international_dialling,
        )
    }

    /// Example fixed line number of the region.
    pub fn get_example_number(&self, region_code: &str) -> Result<PhoneNumber, GetExampleNumberError> {
        self.get_example_number_for_type(region_code, PhoneNumberType::FixedLine)
    }

    pub fn get_example_number_for_type(
        &self,
        region_code: &str,
        number_type: PhoneNumberType,
    ) -> Result<PhoneNumber, GetExampleNumberError> {
        let region_code = RegionCode::normalize(region_code);
        let Some(metadata) = self.region_to_metadata_map.get(region_code.as_ref()) else {
            warn!("Invalid or unknown region code provided: {}", region_code);
            return Err(GetExampleNumberError::InvalidRegionCode);
        };
        let desc = get_number_desc_by_type(metadata, number_type);
        if !desc.has_example_number() {
            return Err(GetExampleNumberError::NoExampleNumber);
        }
        Ok(self.parse(desc.example_number(), &region_code)?)
    }

    /// Example number of a non-geographical entity, taken from the first
    /// number type that has one.
    pub fn get_example_number_for_non_geo_entity(
        &self,
        country_calling_code: i32,
    ) -> Result<PhoneNumber, GetExampleNumberError> {
        let Some(metadata) = self
            .country_code_to_non_geographical_metadata_map
            .get(&country_calling_code)
        else {
            warn!("Invalid or unknown country calling code provided: {}", country_calling_code);
            return Err(GetExampleNumberError::InvalidCountryCode);
        };
        let descs = [
            &metadata.mobile,
            &metadata.toll_free,
            &metadata.shared_cost,
            &metadata.voip,
            &metadata.voicemail,
            &metadata.uan,
            &metadata.premium_rate,
        ];
        let Some(desc) = descs.into_iter().find(|desc| desc.has_example_number()) else {
            return Err(GetExampleNumberError::NoExampleNumber);
        };
        let mut buf = itoa::Buffer::new();
        let number = fast_cat::concat_str!(
            PLUS_SIGN,
            buf.format(country_calling_code),
            desc.example_number()
        );
        Ok(self.parse(&number, RegionCode::get_unknown())?)
    }

    /// Whether the string looks like a phone number at all: at least three
    /// digits, or exactly two, and only characters seen in phone numbers.
    pub fn is_viable_phone_number(&self, phone_number: &str) -> bool {
        if phone_number.chars().count() < MIN_LENGTH_FOR_NSN {
            return false;
        }
        self.reg_exps.valid_phone_number_pattern.is_match(phone_number)
    }

    /// Digits of the number. Letters are converted with the phone keypad when
    /// the number contains at least three of them, otherwise they are
    /// dropped like punctuation. Decimal digits of any script become ASCII.
    pub fn normalize(&self, phone_number: &str) -> String {
        if self.reg_exps.valid_alpha_phone_pattern.is_match(phone_number) {
            let decimals = dec_from_char::normalize_decimals(phone_number);
            normalize_helper(&self.reg_exps.alpha_phone_mappings, true, &decimals)
        } else {
            self.normalize_digits_only(phone_number)
        }
    }

    /// Decimal digits of the number as ASCII, everything else removed.
    pub fn normalize_digits_only(&self, phone_number: &str) -> String {
        dec_from_char::normalize_decimals(phone_number)
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect()
    }

    /// Replaces letters with their keypad digits and keeps everything else.
    pub fn convert_alpha_characters_in_number(&self, phone_number: &str) -> String {
        normalize_helper(&self.reg_exps.alpha_mappings, false, phone_number)
    }

    /// Keeps the characters that matter when dialling: digits, `+`, `*` and
    /// `#`.
    pub fn normalize_diallable_chars_only(&self, phone_number: &str) -> String {
        normalize_helper(&self.reg_exps.diallable_char_mappings, true, phone_number)
    }
}
