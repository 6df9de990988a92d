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

use std::hash::{Hash, Hasher};

/// How the country calling code of a parsed number was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CountryCodeSource {
    /// Not set, for example for numbers built by hand.
    #[default]
    Unspecified,
    /// The number started with a plus sign, e.g. `+44 20 7031 3000`.
    FromNumberWithPlusSign,
    /// The number started with the international dialling prefix of the
    /// default region, e.g. `011 44 20 7031 3000` dialled from the US.
    FromNumberWithIdd,
    /// The number started with the country calling code but without a plus
    /// sign, e.g. `44 20 7031 3000` with "GB" as the default region.
    FromNumberWithoutPlusSign,
    /// The number had no country calling code, so the one of the default
    /// region was used.
    FromDefaultCountry,
}

/// A phone number split into its canonical parts.
///
/// Equality only takes the country calling code, the national number, the
/// Italian leading zero fields and the extension into account. Raw input,
/// country code source and preferred domestic carrier code describe how the
/// number was written, not which number it is.
#[derive(Debug, Clone, Default)]
pub struct PhoneNumber {
    country_code: i32,
    national_number: u64,
    extension: Option<String>,
    italian_leading_zero: Option<bool>,
    number_of_leading_zeros: Option<i32>,
    raw_input: Option<String>,
    country_code_source: Option<CountryCodeSource>,
    preferred_domestic_carrier_code: Option<String>,
}

impl PhoneNumber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn set_country_code(&mut self, country_code: i32) {
        self.country_code = country_code;
    }

    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn set_national_number(&mut self, national_number: u64) {
        self.national_number = national_number;
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    /// Returns the extension, or an empty string when none is set.
    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or("")
    }

    pub fn set_extension(&mut self, extension: impl Into<String>) {
        self.extension = Some(extension.into());
    }

    pub fn clear_extension(&mut self) {
        self.extension = None;
    }

    pub fn has_italian_leading_zero(&self) -> bool {
        self.italian_leading_zero.is_some()
    }

    /// Whether the national significant number starts with zeros that are
    /// not stored in [`PhoneNumber::national_number`], as in Italian fixed
    /// line numbers.
    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero.unwrap_or(false)
    }

    pub fn set_italian_leading_zero(&mut self, italian_leading_zero: bool) {
        self.italian_leading_zero = Some(italian_leading_zero);
    }

    pub fn clear_italian_leading_zero(&mut self) {
        self.italian_leading_zero = None;
    }

    pub fn has_number_of_leading_zeros(&self) -> bool {
        self.number_of_leading_zeros.is_some()
    }

    /// Count of leading zeros, only meaningful together with
    /// [`PhoneNumber::italian_leading_zero`]. Defaults to 1.
    pub fn number_of_leading_zeros(&self) -> i32 {
        self.number_of_leading_zeros.unwrap_or(1)
    }

    pub fn set_number_of_leading_zeros(&mut self, number_of_leading_zeros: i32) {
        self.number_of_leading_zeros = Some(number_of_leading_zeros);
    }

    pub fn clear_number_of_leading_zeros(&mut self) {
        self.number_of_leading_zeros = None;
    }

    pub fn has_raw_input(&self) -> bool {
        self.raw_input.is_some()
    }

    pub fn raw_input(&self) -> &str {
        self.raw_input.as_deref().unwrap_or("")
    }

    pub fn set_raw_input(&mut self, raw_input: impl Into<String>) {
        self.raw_input = Some(raw_input.into());
    }

    pub fn clear_raw_input(&mut self) {
        self.raw_input = None;
    }

    pub fn has_country_code_source(&self) -> bool {
        self.country_code_source.is_some()
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        self.country_code_source.unwrap_or_default()
    }

    pub fn set_country_code_source(&mut self, country_code_source: CountryCodeSource) {
        self.country_code_source = Some(country_code_source);
    }

    pub fn clear_country_code_source(&mut self) {
        self.country_code_source = None;
    }

    /// Set, possibly to an empty string, when the number was parsed with
    /// the raw input kept and the national prefix carried a carrier code.
    pub fn has_preferred_domestic_carrier_code(&self) -> bool {
        self.preferred_domestic_carrier_code.is_some()
    }

    pub fn preferred_domestic_carrier_code(&self) -> &str {
        self.preferred_domestic_carrier_code.as_deref().unwrap_or("")
    }

    pub fn set_preferred_domestic_carrier_code(&mut self, carrier_code: impl Into<String>) {
        self.preferred_domestic_carrier_code = Some(carrier_code.into());
    }

    pub fn clear_preferred_domestic_carrier_code(&mut self) {
        self.preferred_domestic_carrier_code = None;
    }

    /// Resets every field to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.country_code == other.country_code
            && self.national_number == other.national_number
            && self.extension == other.extension
            && self.italian_leading_zero() == other.italian_leading_zero()
            && self.number_of_leading_zeros() == other.number_of_leading_zeros()
    }
}

impl Eq for PhoneNumber {}

impl Hash for PhoneNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.country_code.hash(state);
        self.national_number.hash(state);
        self.extension.hash(state);
        self.italian_leading_zero().hash(state);
        self.number_of_leading_zeros().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::{CountryCodeSource, PhoneNumber};

    #[test]
    fn equality_ignores_context_fields() {
        let mut number = PhoneNumber::new();
        number.set_country_code(64);
        number.set_national_number(33316005);

        let mut parsed = number.clone();
        parsed.set_raw_input("+64 3 331 6005");
        parsed.set_country_code_source(CountryCodeSource::FromNumberWithPlusSign);
        parsed.set_preferred_domestic_carrier_code("");
        assert_eq!(number, parsed);

        parsed.set_extension("1234");
        assert_ne!(number, parsed);
    }

    #[test]
    fn leading_zero_defaults() {
        let mut number = PhoneNumber::new();
        assert!(!number.italian_leading_zero());
        assert_eq!(1, number.number_of_leading_zeros());
        assert!(!number.has_number_of_leading_zeros());

        number.set_italian_leading_zero(true);
        number.set_number_of_leading_zeros(2);
        assert!(number.has_italian_leading_zero());
        assert_eq!(2, number.number_of_leading_zeros());

        number.clear();
        assert!(!number.has_italian_leading_zero());
        assert_eq!(CountryCodeSource::Unspecified, number.country_code_source());
        assert_eq!("", number.extension());
    }

    #[test]
    fn empty_carrier_code_is_set() {
        let mut number = PhoneNumber::new();
        assert!(!number.has_preferred_domestic_carrier_code());
        number.set_preferred_domestic_carrier_code("");
        assert!(number.has_preferred_domestic_carrier_code());
        assert_eq!("", number.preferred_domestic_carrier_code());
    }
}
