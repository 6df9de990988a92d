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
use regex::NoExpand;

use super::{
    errors::InternalLogicError,
    helper_constants::{
        DEFAULT_EXTN_PREFIX, FG_STRING, NANPA_COUNTRY_CODE, NP_STRING, PLUS_SIGN,
        RFC3966_EXTN_PREFIX,
    },
    helper_functions::prefix_number_with_country_calling_code,
    phonenumberutil::PhoneNumberUtil,
    PhoneNumberFormat, PhoneNumberType,
};
use crate::{
    i18n::RegionCode,
    macros::owned_from_cow_or,
    phonenumber::{CountryCodeSource, PhoneNumber},
    proto_gen::phonemetadata::{NumberFormat, PhoneMetadata},
    regex_util::{anchor_full, RegexConsume},
    string_util::strip_cow_prefix,
};

pub type Result<T> = std::result::Result<T, InternalLogicError>;

impl PhoneNumberUtil {
    /// Formats a phone number in the specified format using default rules.
    ///
    /// Numbers with an unknown country calling code are rendered as their
    /// bare national significant number, except in E164. A number that
    /// could not be parsed but kept its raw input is rendered as that input.
    pub fn format<'b>(
        &self,
        phone_number: &'b PhoneNumber,
        number_format: PhoneNumberFormat,
    ) -> Result<Cow<'b, str>> {
        if phone_number.national_number() == 0 {
            let raw_input = phone_number.raw_input();
            if !raw_input.is_empty() {
                // Unparseable numbers that kept their raw input just use that.
                // This is the only case where a number can be formatted as E164
                // without a leading '+' symbol.
                return Ok(Cow::Borrowed(raw_input));
            }
        }
        let country_calling_code = phone_number.country_code();
        let mut formatted_number = self.get_national_significant_number(phone_number);

        if number_format == PhoneNumberFormat::E164 {
            // Early exit for E164 case (even if the country calling code is
            // invalid) since no formatting of the national number needs to be
            // applied. Extensions are not formatted.
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::E164,
                &mut formatted_number,
            );
            return Ok(Cow::Owned(formatted_number));
        }
        // Note here that all NANPA formatting rules are contained by US, so we
        // use that to format NANPA numbers. The same applies to French Indian
        // Ocean country rules, which are contained by Réunion.
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return Ok(Cow::Owned(formatted_number));
        };

        formatted_number = owned_from_cow_or!(
            self.format_nsn(&formatted_number, metadata, number_format)?,
            formatted_number
        );
        if let Some(formatted_extension) =
            Self::get_formatted_extension(phone_number, metadata, number_format)
        {
            formatted_number.push_str(&formatted_extension);
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        Ok(Cow::Owned(formatted_number))
    }

    pub(super) fn format_nsn<'b>(
        &self,
        phone_number: &'b str,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> Result<Cow<'b, str>> {
        self.format_nsn_with_carrier(phone_number, metadata, number_format, "")
    }

    fn format_nsn_with_carrier<'b>(
        &self,
        number: &'b str,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
        carrier_code: &str,
    ) -> Result<Cow<'b, str>> {
        // When the intl_number_formats exists, we use that to format national
        // number for the INTERNATIONAL format instead of using the
        // number_formats.
        let available_formats = if metadata.intl_number_format.is_empty()
            || number_format == PhoneNumberFormat::National
        {
            &metadata.number_format
        } else {
            &metadata.intl_number_format
        };
        let Some(formatting_pattern) =
            self.choose_formatting_pattern_for_number(available_formats, number)?
        else {
            return Ok(Cow::Borrowed(number));
        };
        self.format_nsn_using_pattern_with_carrier(
            number,
            formatting_pattern,
            number_format,
            carrier_code,
        )
    }

    /// The first format whose last leading digits pattern matches the start
    /// of the number and whose pattern matches all of it.
    fn choose_formatting_pattern_for_number<'b>(
        &self,
        available_formats: &'b [NumberFormat],
        national_number: &str,
    ) -> Result<Option<&'b NumberFormat>> {
        for format in available_formats {
            // We always use the last leading_digits_pattern, as it is the most
            // detailed.
            if let Some(leading_digits) = format.leading_digits_pattern.last() {
                let leading_digits_pattern = self.reg_exps.regexp_cache.get_regex(leading_digits)?;
                if !leading_digits_pattern.matches_start(national_number) {
                    continue;
                }
            }
            let pattern_to_match = self
                .reg_exps
                .regexp_cache
                .get_regex(&anchor_full(format.pattern()))?;
            if pattern_to_match.is_match(national_number) {
                return Ok(Some(format));
            }
        }
        Ok(None)
    }

    // Note that carrier_code is optional - if an empty string, no carrier code
    // replacement will take place.
    fn format_nsn_using_pattern_with_carrier<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &NumberFormat,
        number_format: PhoneNumberFormat,
        carrier_code: &str,
    ) -> Result<Cow<'b, str>> {
        let mut number_format_rule = Cow::Borrowed(formatting_pattern.format());
        let carrier_code_formatting_rule = formatting_pattern.domestic_carrier_code_formatting_rule();
        if number_format == PhoneNumberFormat::National
            && !carrier_code.is_empty()
            && !carrier_code_formatting_rule.is_empty()
        {
            // Replace the $CC in the formatting rule with the desired carrier
            // code.
            let carrier_code_formatting_rule = self
                .reg_exps
                .carrier_code_pattern
                .replace(carrier_code_formatting_rule, NoExpand(carrier_code));
            // Now replace the $FG in the formatting rule with the first group
            // and the carrier code combined in the appropriate way.
            number_format_rule = Cow::Owned(
                self.reg_exps
                    .first_group_capturing_pattern
                    .replace(&number_format_rule, carrier_code_formatting_rule.as_ref())
                    .into_owned(),
            );
        } else {
            // Use the national prefix formatting rule instead.
            let national_prefix_formatting_rule =
                formatting_pattern.national_prefix_formatting_rule();
            if number_format == PhoneNumberFormat::National
                && !national_prefix_formatting_rule.is_empty()
            {
                // Apply the national_prefix_formatting_rule as the
                // formatting_pattern contains only information on how the
                // national significant number should be formatted at this
                // point.
                number_format_rule = Cow::Owned(
                    self.reg_exps
                        .first_group_capturing_pattern
                        .replace(&number_format_rule, national_prefix_formatting_rule)
                        .into_owned(),
                );
            }
        }

        let pattern_to_match = self
            .reg_exps
            .regexp_cache
            .get_regex(&anchor_full(formatting_pattern.pattern()))?;
        let formatted_number = pattern_to_match.replace(national_number, number_format_rule.as_ref());

        if number_format != PhoneNumberFormat::RFC3966 {
            return Ok(formatted_number);
        }
        // First consume any leading punctuation, if any was present.
        let formatted_number = match self.reg_exps.separator_pattern.find_start(&formatted_number) {
            Some(leading_separators) => formatted_number[leading_separators.end()..].to_owned(),
            None => formatted_number.into_owned(),
        };
        // Then replace all separators with a "-".
        Ok(Cow::Owned(
            self.reg_exps
                .separator_pattern
                .replace_all(&formatted_number, "-")
                .into_owned(),
        ))
    }

    /// Simple wrapper of format_nsn_using_pattern_with_carrier for the common
    /// case of no carrier code.
    fn format_nsn_using_pattern<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &NumberFormat,
        number_format: PhoneNumberFormat,
    ) -> Result<Cow<'b, str>> {
        self.format_nsn_using_pattern_with_carrier(national_number, formatting_pattern, number_format, "")
    }

    // Returns the formatted extension of a phone number, if the phone number
    // had an extension specified else None.
    fn get_formatted_extension(
        phone_number: &PhoneNumber,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> Option<String> {
        if phone_number.extension().is_empty() {
            return None;
        }
        let prefix = if number_format == PhoneNumberFormat::RFC3966 {
            RFC3966_EXTN_PREFIX
        } else if metadata.has_preferred_extn_prefix() {
            metadata.preferred_extn_prefix()
        } else {
            DEFAULT_EXTN_PREFIX
        };
        Some(fast_cat::concat_str!(prefix, phone_number.extension()))
    }

    /// Formats a number as it should be dialled from another region.
    ///
    /// Within NANPA the national format is prefixed with "1 ", within one
    /// calling code the national format is used. Otherwise the international
    /// dialling prefix of the calling region replaces the plus sign when the
    /// region has a preferred or a single prefix.
    pub fn format_out_of_country_calling_number(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
    ) -> Result<String> {
        let region_calling_from = RegionCode::normalize(region_calling_from);
        let Some(metadata_calling_from) = self.get_metadata_for_region(&region_calling_from) else {
            trace!(
                "Trying to format number from invalid region {}. International formatting applied.",
                region_calling_from
            );
            return Ok(self
                .format(phone_number, PhoneNumberFormat::International)?
                .into_owned());
        };
        let country_calling_code = phone_number.country_code();
        let national_significant_number = self.get_national_significant_number(phone_number);
        if !self.has_valid_country_calling_code(country_calling_code) {
            return Ok(national_significant_number);
        }
        if country_calling_code == NANPA_COUNTRY_CODE {
            if self.is_nanpa_country(&region_calling_from) {
                // For NANPA regions, return the national format for these
                // regions but prefix it with the country calling code.
                let national_format = self.format(phone_number, PhoneNumberFormat::National)?;
                let mut buf = itoa::Buffer::new();
                return Ok(fast_cat::concat_str!(
                    buf.format(country_calling_code),
                    " ",
                    national_format.as_ref()
                ));
            }
        } else if country_calling_code == metadata_calling_from.country_code() {
            // If neither region is a NANPA region, then we check to see if the
            // country calling code of the number and the country calling code
            // of the region we are calling from are the same.
            return Ok(self
                .format(phone_number, PhoneNumberFormat::National)?
                .into_owned());
        }

        // For regions that have multiple international prefixes, the
        // international format of the number is returned, unless there is a
        // preferred international prefix.
        let international_prefix = metadata_calling_from.international_prefix();
        let international_prefix_for_formatting = if metadata_calling_from.has_preferred_international_prefix() {
            metadata_calling_from.preferred_international_prefix()
        } else if self.reg_exps.single_international_prefix.is_match(international_prefix) {
            international_prefix
        } else {
            ""
        };

        let region_code = self.get_region_code_for_country_code(country_calling_code);
        // Metadata cannot be missing because the country calling code is
        // valid.
        let Some(metadata_for_region) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return Ok(national_significant_number);
        };
        let mut formatted_number = self
            .format_nsn(
                &national_significant_number,
                metadata_for_region,
                PhoneNumberFormat::International,
            )?
            .into_owned();
        if let Some(formatted_extension) = Self::get_formatted_extension(
            phone_number,
            metadata_for_region,
            PhoneNumberFormat::International,
        ) {
            formatted_number.push_str(&formatted_extension);
        }
        if international_prefix_for_formatting.is_empty() {
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::International,
                &mut formatted_number,
            );
            return Ok(formatted_number);
        }
        let mut buf = itoa::Buffer::new();
        Ok(fast_cat::concat_str!(
            international_prefix_for_formatting,
            " ",
            buf.format(country_calling_code),
            " ",
            &formatted_number
        ))
    }

    /// Formats a number the way it was written when it was parsed with
    /// [`PhoneNumberUtil::parse_and_keep_raw_input`], as far as the source of
    /// its country calling code tells.
    pub fn format_in_original_format(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
    ) -> Result<String> {
        if !phone_number.has_country_code_source() {
            return Ok(self
                .format(phone_number, PhoneNumberFormat::National)?
                .into_owned());
        }
        match phone_number.country_code_source() {
            CountryCodeSource::FromNumberWithPlusSign => Ok(self
                .format(phone_number, PhoneNumberFormat::International)?
                .into_owned()),
            CountryCodeSource::FromNumberWithIdd => {
                self.format_out_of_country_calling_number(phone_number, region_calling_from)
            }
            CountryCodeSource::FromNumberWithoutPlusSign => {
                let formatted_number = self.format(phone_number, PhoneNumberFormat::International)?;
                Ok(match strip_cow_prefix(formatted_number.clone(), PLUS_SIGN) {
                    Some(without_plus) => without_plus.into_owned(),
                    None => formatted_number.into_owned(),
                })
            }
            CountryCodeSource::FromDefaultCountry | CountryCodeSource::Unspecified => Ok(self
                .format(phone_number, PhoneNumberFormat::National)?
                .into_owned()),
        }
    }

    /// Formats a number with the caller supplied formats instead of those of
    /// the metadata. `$NP` and `$FG` in national prefix formatting rules are
    /// replaced by the national prefix of the region and the first group.
    pub fn format_by_pattern(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
        user_defined_formats: &[NumberFormat],
    ) -> Result<String> {
        let country_calling_code = phone_number.country_code();
        // Note get_region_code_for_country_code() is used because formatting
        // information for regions which share a country calling code is
        // contained by only one region for performance reasons. For example,
        // for NANPA regions it will be contained in the metadata for US.
        let national_significant_number = self.get_national_significant_number(phone_number);
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return Ok(national_significant_number);
        };

        let formatting_pattern = self
            .choose_formatting_pattern_for_number(user_defined_formats, &national_significant_number)?;

        let mut formatted_number = if let Some(formatting_pattern) = formatting_pattern {
            // Before we do a replacement of the national prefix pattern $NP
            // with the national prefix, we need to copy the rule so that
            // subsequent replacements for different numbers have the
            // appropriate national prefix.
            let mut num_format_copy = formatting_pattern.clone();
            let national_prefix_formatting_rule = formatting_pattern.national_prefix_formatting_rule();
            if !national_prefix_formatting_rule.is_empty() {
                let national_prefix = metadata.national_prefix();
                if !national_prefix.is_empty() {
                    // Replace $NP with national prefix and $FG with the first
                    // group ($1).
                    let rule = national_prefix_formatting_rule
                        .replace(NP_STRING, national_prefix)
                        .replace(FG_STRING, "$1");
                    num_format_copy.set_national_prefix_formatting_rule(rule);
                } else {
                    // We don't want to have a rule for how to format the
                    // national prefix if there isn't one.
                    num_format_copy.clear_national_prefix_formatting_rule();
                }
            }
            self.format_nsn_using_pattern(&national_significant_number, &num_format_copy, number_format)?
                .into_owned()
        } else {
            national_significant_number
        };
        if let Some(formatted_extension) =
            Self::get_formatted_extension(phone_number, metadata, number_format)
        {
            formatted_number.push_str(&formatted_extension);
        }
        prefix_number_with_country_calling_code(country_calling_code, number_format, &mut formatted_number);
        Ok(formatted_number)
    }

    /// Formats a number in national format for dialing using the carrier as
    /// specified in the `carrier_code`. The carrier code will always be used
    /// regardless of whether the phone number already has a preferred
    /// domestic carrier code stored. Formats without a domestic carrier code
    /// rule ignore it.
    pub fn format_national_number_with_carrier_code(
        &self,
        phone_number: &PhoneNumber,
        carrier_code: &str,
    ) -> Result<String> {
        let country_calling_code = phone_number.country_code();
        let national_significant_number = self.get_national_significant_number(phone_number);
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return Ok(national_significant_number);
        };

        let mut formatted_number = owned_from_cow_or!(
            self.format_nsn_with_carrier(
                &national_significant_number,
                metadata,
                PhoneNumberFormat::National,
                carrier_code,
            )?,
            national_significant_number
        );
        if let Some(formatted_extension) =
            Self::get_formatted_extension(phone_number, metadata, PhoneNumberFormat::National)
        {
            formatted_number.push_str(&formatted_extension);
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            PhoneNumberFormat::National,
            &mut formatted_number,
        );
        Ok(formatted_number)
    }

    /// Formats a number in national format with the preferred domestic
    /// carrier code of the number. The fallback is only used when the number
    /// has no preferred carrier code at all, an empty one still wins.
    pub fn format_national_number_with_preferred_carrier_code(
        &self,
        phone_number: &PhoneNumber,
        fallback_carrier_code: &str,
    ) -> Result<String> {
        let carrier_code = if phone_number.has_preferred_domestic_carrier_code() {
            phone_number.preferred_domestic_carrier_code()
        } else {
            fallback_carrier_code
        };
        self.format_national_number_with_carrier_code(phone_number, carrier_code)
    }

    /// Length of the geographical area code of a number, e.g. 3 for
    /// "+1 650 253 0000" and 2 for "+44 20 7031 3000". Non-geographical
    /// numbers and numbers of regions without area codes give 0.
    pub fn get_length_of_geographical_area_code(&self, phone_number: &PhoneNumber) -> Result<usize> {
        let region_code = self.get_region_code_for_number(phone_number);
        let Some(metadata) = self.get_metadata_for_region(region_code) else {
            return Ok(0);
        };
        let number_type = self.get_number_type(phone_number);
        let country_calling_code = phone_number.country_code();
        if number_type == PhoneNumberType::Mobile
            // Note this is a rough heuristic; it doesn't cover Indonesia well,
            // for example, where area codes are present for some mobile phones
            // but not for others. We have no better way of representing this
            // in the metadata at this point.
            && self
                .reg_exps
                .geo_mobile_countries_without_mobile_area_codes
                .contains(&country_calling_code)
        {
            return Ok(0);
        }
        // If a country doesn't use a national prefix, and this number doesn't
        // have an Italian leading zero, we assume it is a closed dialling plan
        // with no area codes.
        if !metadata.has_national_prefix()
            && !phone_number.italian_leading_zero()
            && !self
                .reg_exps
                .countries_without_national_prefix_with_area_codes
                .contains(&country_calling_code)
        {
            return Ok(0);
        }
        if !self.is_number_geographical_by_type(number_type, country_calling_code) {
            return Ok(0);
        }
        self.get_length_of_national_destination_code(phone_number)
    }

    /// Length of the national destination code, read from the international
    /// format of the number. For mobile numbers of countries with a mobile
    /// token the token is counted too.
    pub fn get_length_of_national_destination_code(&self, phone_number: &PhoneNumber) -> Result<usize> {
        let copied_phone_number;
        let phone_number = if phone_number.has_extension() {
            // We don't want to consider extensions when trying to find the
            // national destination code.
            let mut without_extension = phone_number.clone();
            without_extension.clear_extension();
            copied_phone_number = without_extension;
            &copied_phone_number
        } else {
            phone_number
        };
        let formatted_number = self.format(phone_number, PhoneNumberFormat::International)?;
        // The number starts with "+COUNTRY_CODE ", so the first group is the
        // country calling code and the second one the NDC, if it is not the
        // last group.
        let digit_groups: Vec<&str> = formatted_number
            .split(|c: char| !c.is_ascii_digit())
            .filter(|group| !group.is_empty())
            .collect();
        if digit_groups.len() <= 2 {
            return Ok(0);
        }
        if self.get_number_type(phone_number) == PhoneNumberType::Mobile {
            if let Some(mobile_token) = self.get_country_mobile_token(phone_number.country_code()) {
                // The mobile token is the first group after the country calling
                // code and the NDC follows it.
                return Ok(digit_groups[2].len() + mobile_token.len_utf8());
            }
        }
        Ok(digit_groups[1].len())
    }
}
